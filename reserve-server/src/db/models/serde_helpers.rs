//! Common serde helpers for payload structs

use serde::{Deserialize, Deserializer};

/// Deserialize a field that must distinguish "absent" from "explicit null".
///
/// Pair with `#[serde(default)]`: a missing field stays `None`, an explicit
/// `null` becomes `Some(None)`, a value becomes `Some(Some(v))`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "super::double_option")]
        zone: Option<Option<String>>,
    }

    #[test]
    fn test_absent_null_and_value_are_distinct() {
        let absent: Payload = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.zone, None);

        let null: Payload = serde_json::from_str(r#"{"zone": null}"#).unwrap();
        assert_eq!(null.zone, Some(None));

        let value: Payload = serde_json::from_str(r#"{"zone": "Patio"}"#).unwrap();
        assert_eq!(value.zone, Some(Some("Patio".to_string())));
    }
}
