//! Time parsing helpers
//!
//! Date/time string parsing happens at the API handler layer; the booking
//! engine below only sees typed `NaiveDate` / `NaiveTime` values.

use chrono::{NaiveDate, NaiveTime};

use super::{AppError, AppResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Parse a time-of-day string (HH:MM or HH:MM:SS)
pub fn parse_time(time: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .map_err(|_| AppError::validation(format!("Invalid time format: {}", time)))
}

/// Current unix timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_accepts_minutes_and_seconds() {
        assert_eq!(
            parse_time("18:30").expect("HH:MM should parse"),
            NaiveTime::from_hms_opt(18, 30, 0).unwrap()
        );
        assert_eq!(
            parse_time("18:30:15").expect("HH:MM:SS should parse"),
            NaiveTime::from_hms_opt(18, 30, 15).unwrap()
        );
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("2024-13-40").is_err());
        assert!(parse_date("junk").is_err());
    }
}
