//! Helper constructors for the error types

use super::compose::{ComposeError, ErrorCode};
use super::types::GatewayError;
use actix_web::http::StatusCode;

impl GatewayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Server(message.into())
    }
}

impl ComposeError {
    /// Create an error with an explicit status and code
    pub fn new<S: Into<String>>(status: StatusCode, code: ErrorCode, details: S) -> Self {
        Self {
            status: status.as_u16(),
            code,
            details: details.into(),
        }
    }

    /// 500 INTERNAL_ERROR
    pub fn internal<S: Into<String>>(details: S) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::InternalError,
            details,
        )
    }

    /// 400 INVALID_REQUEST
    pub fn invalid_request<S: Into<String>>(details: S) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ErrorCode::InvalidRequest, details)
    }

    /// 401 with the generic INTERNAL_ERROR code
    pub fn unauthorized<S: Into<String>>(details: S) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, ErrorCode::InternalError, details)
    }

    /// 401 AUTH_EXPIRED
    pub fn auth_expired<S: Into<String>>(details: S) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, ErrorCode::AuthExpired, details)
    }

    pub fn method_not_allowed() -> Self {
        Self::new(
            StatusCode::METHOD_NOT_ALLOWED,
            ErrorCode::InternalError,
            "Method not allowed",
        )
    }

    /// 413 INVALID_REQUEST for a body over the configured size
    pub fn payload_too_large(limit: usize) -> Self {
        Self::new(
            StatusCode::PAYLOAD_TOO_LARGE,
            ErrorCode::InvalidRequest,
            format!("Request body exceeds the {} byte limit", limit),
        )
    }

    /// Upstream answered with a non-success status; the status is passed through
    pub fn upstream_status(status: u16, details: impl Into<String>) -> Self {
        Self {
            status,
            code: ErrorCode::InternalError,
            details: details.into(),
        }
    }
}
