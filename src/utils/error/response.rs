//! HTTP response handling for errors

use super::compose::{ComposeError, ErrorCode};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};

/// Error body written to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub details: String,
}

impl From<&ComposeError> for ErrorResponse {
    fn from(error: &ComposeError) -> Self {
        Self {
            code: error.code,
            details: error.details.clone(),
        }
    }
}

impl ResponseError for ComposeError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::from(self))
    }
}
