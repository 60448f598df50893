//! OpenAI-compatible chat-completion provider

pub mod client;
pub mod response;
pub mod types;

pub use client::OpenAIProvider;
pub use response::{ModelAnswer, parse_response_body};
pub use types::{ChatCompletionRequest, ContentPart, ImageUrl};
