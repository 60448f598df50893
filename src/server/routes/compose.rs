//! The compose endpoint

use crate::core::compose::{ComposeRequest, build_prompt};
use crate::server::middleware::authenticate;
use crate::server::state::AppState;
use crate::utils::error::ComposeError;
use actix_web::http::Method;
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::{debug, info, warn};

/// Turn an image into a haiku
///
/// Steps run in order and the first failure is returned as the response:
/// bearer authentication, method check, body reading and decoding, field
/// validation, prompt rendering and the model call.
pub async fn compose_haiku(
    req: HttpRequest,
    payload: web::Payload,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ComposeError> {
    let claims = authenticate(&req, &state.jwt)?;

    if req.method() != Method::POST {
        return Err(ComposeError::method_not_allowed());
    }

    let body = read_body(payload, state.config.server.max_body_size).await?;
    let request: ComposeRequest = serde_json::from_slice(&body)
        .map_err(|e| ComposeError::internal(format!("Failed to decode request body: {}", e)))?;
    request.validate()?;

    debug!(
        "Compose request from {}: language={}, tags={}, image={} bytes",
        claims.sub,
        request.language,
        request.tags().len(),
        request.base64_image.len()
    );

    let prompt = build_prompt(&request.language, request.tags())?;
    let haiku = state
        .provider
        .compose(&prompt, &request.base64_image)
        .await?;

    info!("Composed haiku in {} via {}", request.language, state.provider.name());
    Ok(HttpResponse::Ok().json(haiku))
}

/// Read the whole body, rejecting it once it passes `limit` bytes
async fn read_body(payload: web::Payload, limit: usize) -> Result<web::Bytes, ComposeError> {
    match payload.to_bytes_limited(limit).await {
        Ok(Ok(body)) => Ok(body),
        Ok(Err(e)) => Err(ComposeError::internal(format!(
            "Failed to read request body: {}",
            e
        ))),
        Err(_) => {
            warn!("Rejected request body over {} bytes", limit);
            Err(ComposeError::payload_too_large(limit))
        }
    }
}
