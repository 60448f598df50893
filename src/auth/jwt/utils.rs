//! JWT utility functions

use super::handler::unix_now;
use super::types::{JwtHandler, TokenClaims};

impl JwtHandler {
    /// Extract token from Authorization header
    pub fn extract_bearer(header_value: &str) -> Option<&str> {
        header_value.strip_prefix("Bearer ")
    }

    /// Get time until token expires
    pub fn time_until_expiry(claims: &TokenClaims) -> Option<u64> {
        let now = unix_now().ok()?;

        if claims.exp > now {
            Some(claims.exp - now)
        } else {
            None
        }
    }
}
