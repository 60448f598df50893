//! Upstream model providers
//!
//! The compose handler depends only on [`HaikuProvider`], so tests and
//! alternative deployments can substitute their own implementation.

pub mod openai;

use crate::core::compose::Haiku;
use crate::utils::error::ComposeError;
use async_trait::async_trait;

pub use openai::OpenAIProvider;

/// Something that turns a prompt and an image into a haiku
#[async_trait]
pub trait HaikuProvider: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &'static str;

    /// Ask the model for a haiku
    ///
    /// `base64_image` is the raw base64 payload without a data URL prefix.
    async fn compose(&self, prompt: &str, base64_image: &str) -> Result<Haiku, ComposeError>;
}
