//! OpenAI chat-completion client

use super::response::parse_response_body;
use super::types::ChatCompletionRequest;
use crate::config::UpstreamConfig;
use crate::core::compose::Haiku;
use crate::core::providers::HaikuProvider;
use crate::utils::error::{ComposeError, GatewayError};
use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};

/// Calls an OpenAI-compatible `/chat/completions` endpoint with one image
#[derive(Debug, Clone)]
pub struct OpenAIProvider {
    client: reqwest::Client,
    config: UpstreamConfig,
}

impl OpenAIProvider {
    /// Build a provider whose HTTP client enforces the configured timeout
    pub fn new(config: UpstreamConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    /// Request body for a prompt and image
    pub fn build_request(&self, prompt: &str, base64_image: &str) -> ChatCompletionRequest {
        ChatCompletionRequest::vision(
            &self.config.model,
            prompt,
            base64_image,
            self.config.max_tokens,
            self.config.temperature,
        )
    }
}

#[async_trait]
impl HaikuProvider for OpenAIProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn compose(&self, prompt: &str, base64_image: &str) -> Result<Haiku, ComposeError> {
        let request = self.build_request(prompt, base64_image);
        let body = serde_json::to_vec(&request).map_err(|e| {
            ComposeError::internal(format!("Failed to encode request body: {}", e))
        })?;

        let url = self.config.completions_url();
        debug!(
            "Calling {} with model {} ({} byte body)",
            url,
            self.config.model,
            body.len()
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                warn!("Upstream request failed: {}", e);
                ComposeError::internal(format!("Failed to call upstream API: {}", e))
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Upstream returned status {}", status);
            return Err(ComposeError::upstream_status(
                status.as_u16(),
                format!("Upstream API returned an error: {}", status),
            ));
        }

        let bytes = response.bytes().await.map_err(|e| {
            ComposeError::internal(format!("Failed to read response body: {}", e))
        })?;

        parse_response_body(&bytes)
    }
}
