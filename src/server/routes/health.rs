//! Health check endpoint

use actix_web::{HttpResponse, Result as ActixResult};
use serde::Serialize;
use std::borrow::Cow;
use tracing::debug;

/// Liveness payload
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: Cow<'static, str>,
    pub version: Cow<'static, str>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Basic health check endpoint, no authentication
pub async fn health_check() -> ActixResult<HttpResponse> {
    debug!("Health check requested");

    let health_status = HealthStatus {
        status: Cow::Borrowed("healthy"),
        version: Cow::Borrowed(crate::VERSION),
        timestamp: chrono::Utc::now(),
    };

    Ok(HttpResponse::Ok().json(health_status))
}
