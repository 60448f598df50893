//! Bearer token authentication

use crate::auth::{JwtHandler, TokenClaims, TokenError};
use crate::utils::error::ComposeError;
use actix_web::HttpRequest;
use actix_web::http::header::AUTHORIZATION;
use tracing::{debug, warn};

const MISSING_HEADER: &str = "Authorization header is required";
const NOT_BEARER: &str = "Authorization header must start with 'Bearer '";

/// Validate the request's bearer token and return its claims
pub fn authenticate(req: &HttpRequest, jwt: &JwtHandler) -> Result<TokenClaims, ComposeError> {
    let header = match req.headers().get(AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => {
            warn!("Rejected request without Authorization header");
            return Err(ComposeError::unauthorized(MISSING_HEADER));
        }
    };

    let token = header
        .to_str()
        .ok()
        .and_then(JwtHandler::extract_bearer)
        .ok_or_else(|| ComposeError::unauthorized(NOT_BEARER))?;

    let claims = jwt.validate_token(token).map_err(|e| {
        warn!("Rejected bearer token: {}", e);
        match e {
            TokenError::Expired => ComposeError::auth_expired(TokenError::Expired.to_string()),
            other => ComposeError::unauthorized(format!("Invalid JWT token: {}", other)),
        }
    })?;

    if let Some(remaining) = JwtHandler::time_until_expiry(&claims) {
        debug!("Authenticated {} ({}s left on token)", claims.sub, remaining);
    }
    Ok(claims)
}
