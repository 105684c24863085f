//! Admin scope extractor
//!
//! Axum extractor that validates the bearer token and resolves the caller
//! into an [`AdminScope`]. Handlers that take `AdminScope` as an argument are
//! admin-only by construction.

use axum::{extract::FromRequestParts, http::request::Parts};
use tracing::warn;

use crate::auth::{AdminScope, JwtError, JwtService};
use crate::core::ServerState;
use crate::utils::AppError;

impl FromRequestParts<ServerState> for AdminScope {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        // Reuse if a middleware already resolved the scope
        if let Some(scope) = parts.extensions.get::<AdminScope>() {
            return Ok(scope.clone());
        }

        let auth_header = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        let token = match auth_header {
            Some(header) => JwtService::extract_from_header(header)
                .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
            None => {
                warn!(target: "auth", uri = %parts.uri, "Missing authorization header");
                return Err(AppError::unauthorized());
            }
        };

        match state.jwt.validate_token(token) {
            Ok(claims) => {
                let scope = AdminScope::from(claims);
                parts.extensions.insert(scope.clone());
                Ok(scope)
            }
            Err(JwtError::ExpiredToken) => Err(AppError::TokenExpired),
            Err(e) => {
                warn!(target: "auth", error = %e, uri = %parts.uri, "Token validation failed");
                Err(AppError::invalid_token(e.to_string()))
            }
        }
    }
}
