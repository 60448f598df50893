//! Errors returned by the compose pipeline

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error code reported to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Caller input or a model-reported content issue
    InvalidRequest,
    /// System, infrastructure or parsing fault
    InternalError,
    /// The bearer token has expired
    AuthExpired,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::InternalError => "INTERNAL_ERROR",
            Self::AuthExpired => "AUTH_EXPIRED",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of any stage of the compose pipeline.
///
/// Created where the failure happens and handed to the response writer
/// unchanged; `status` is the HTTP status the caller will see.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{details}")]
pub struct ComposeError {
    pub status: u16,
    pub code: ErrorCode,
    pub details: String,
}
