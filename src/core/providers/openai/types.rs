//! Wire types for the chat-completion API
//!
//! Only the fields this service sends or reads are modelled.

use serde::{Deserialize, Serialize};

/// Prefix turning a raw base64 JPEG into an inline image URL
pub const JPEG_DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";

/// Chat-completion request body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl ChatCompletionRequest {
    /// A single user turn carrying the prompt and an inline JPEG
    pub fn vision(
        model: impl Into<String>,
        prompt: &str,
        base64_image: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage {
                role: MessageRole::User,
                content: vec![
                    ContentPart::Text {
                        text: prompt.to_string(),
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: format!("{}{}", JPEG_DATA_URL_PREFIX, base64_image),
                        },
                    },
                ],
            }],
            max_tokens,
            temperature,
        }
    }
}

/// Chat message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: Vec<ContentPart>,
}

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
}

/// Content part for multimodal messages
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ContentPart {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "image_url")]
    ImageUrl { image_url: ImageUrl },
}

/// Image URL content
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

/// Outer chat-completion envelope
#[derive(Debug, Default, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Option<Vec<Choice>>,
}

impl ChatCompletionResponse {
    /// Text content of the first choice, `None` when there are no choices
    pub fn into_first_content(self) -> Option<String> {
        self.choices
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: ResponseMessage,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// JSON object the prompt asks the model to answer with
#[derive(Debug, Default, Deserialize)]
pub struct AnswerPayload {
    #[serde(default)]
    pub haiku: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
