//! Decoding of the model's answer
//!
//! The upstream body is decoded in two phases: first the chat-completion
//! envelope, then the JSON text the model wrote into the first choice.

use super::types::{AnswerPayload, ChatCompletionResponse};
use crate::core::compose::Haiku;
use crate::utils::error::ComposeError;
use tracing::{debug, warn};

/// What the model decided to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelAnswer {
    /// Both haiku and description were written
    Composed(Haiku),
    /// The model declined, with a message in the requested language
    Refused(String),
    /// Neither a refusal nor a complete answer
    Incomplete,
}

impl From<AnswerPayload> for ModelAnswer {
    fn from(payload: AnswerPayload) -> Self {
        if let Some(message) = payload.error.filter(|m| !m.is_empty()) {
            return Self::Refused(message);
        }

        match (payload.haiku, payload.description) {
            (Some(haiku), Some(description)) if !haiku.is_empty() && !description.is_empty() => {
                Self::Composed(Haiku {
                    haiku: sanitize_haiku(&haiku),
                    description,
                })
            }
            _ => Self::Incomplete,
        }
    }
}

/// Models sometimes escape line breaks; turn literal `\n` back into newlines
pub fn sanitize_haiku(haiku: &str) -> String {
    haiku.replace("\\n", "\n")
}

/// Decode a chat-completion body into a haiku or a caller-facing error
pub fn parse_response_body(body: &[u8]) -> Result<Haiku, ComposeError> {
    let envelope: ChatCompletionResponse = serde_json::from_slice(body)
        .map_err(|e| ComposeError::internal(format!("Failed to decode response body: {}", e)))?;

    let content = envelope
        .into_first_content()
        .ok_or_else(|| ComposeError::internal("No choices found in response"))?;

    let payload: AnswerPayload = serde_json::from_str(&content).map_err(|e| {
        ComposeError::internal(format!("Failed to parse answer JSON: {}\n{}", e, content))
    })?;

    match ModelAnswer::from(payload) {
        ModelAnswer::Composed(haiku) => {
            debug!("Model composed a haiku ({} bytes)", haiku.haiku.len());
            Ok(haiku)
        }
        ModelAnswer::Refused(message) => {
            warn!("Model refused the image: {}", message);
            Err(ComposeError::invalid_request(message))
        }
        ModelAnswer::Incomplete => Err(ComposeError::invalid_request(format!(
            "Invalid response format: haiku or description not found {}",
            content
        ))),
    }
}
