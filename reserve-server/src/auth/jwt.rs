//! JWT token validation
//!
//! Admin tokens are issued by an external identity service; this server only
//! validates them and extracts the caller's restaurant scope.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HS256 secret (should be at least 32 bytes)
    pub secret: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using development fallback key");
            "development-only-secret-must-be-replaced".to_string()
        });
        Self { secret }
    }
}

/// Claims carried by an admin token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Admin identity (Subject)
    pub sub: String,
    /// Restaurant scope; absent = superuser with unrestricted access
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_id: Option<i64>,
    /// Expiration timestamp
    pub exp: i64,
}

/// JWT errors
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    ExpiredToken,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),
}

/// JWT validation service
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new() -> Self {
        Self::with_config(JwtConfig::default())
    }

    pub fn with_config(config: JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
        }
    }

    /// Validate and decode a token
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["sub", "exp"]);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                _ => JwtError::InvalidToken(e.to_string()),
            })?;

        Ok(token_data.claims)
    }

    /// Mint a token for the given scope. Production tokens come from the
    /// external identity service; this is used by tooling and tests.
    pub fn generate_token(
        &self,
        admin_id: &str,
        restaurant_id: Option<i64>,
        ttl_minutes: i64,
    ) -> Result<String, JwtError> {
        let claims = Claims {
            sub: admin_id.to_string(),
            restaurant_id,
            exp: (chrono::Utc::now() + chrono::Duration::minutes(ttl_minutes)).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// Extract the token from an Authorization header
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }
}

impl Default for JwtService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_roundtrip_preserves_scope() {
        let service = JwtService::with_config(JwtConfig {
            secret: "test-secret-test-secret-test-secret".to_string(),
        });

        let token = service
            .generate_token("admin-7", Some(3), 60)
            .expect("Failed to generate token");
        let claims = service.validate_token(&token).expect("Failed to validate");

        assert_eq!(claims.sub, "admin-7");
        assert_eq!(claims.restaurant_id, Some(3));
    }

    #[test]
    fn test_superuser_token_has_no_restaurant() {
        let service = JwtService::with_config(JwtConfig {
            secret: "test-secret-test-secret-test-secret".to_string(),
        });

        let token = service
            .generate_token("root", None, 60)
            .expect("Failed to generate token");
        let claims = service.validate_token(&token).expect("Failed to validate");
        assert_eq!(claims.restaurant_id, None);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = JwtService::with_config(JwtConfig {
            secret: "one-secret-one-secret-one-secret-one".to_string(),
        });
        let verifier = JwtService::with_config(JwtConfig {
            secret: "other-secret-other-secret-other-sec".to_string(),
        });

        let token = issuer
            .generate_token("admin", None, 60)
            .expect("Failed to generate token");
        assert!(verifier.validate_token(&token).is_err());
    }
}
