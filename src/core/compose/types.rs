//! Compose request and response types

use crate::utils::error::ComposeError;
use serde::{Deserialize, Serialize};

/// Body of a compose request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeRequest {
    /// Language the haiku and description are written in
    #[serde(default)]
    pub language: String,
    /// Mood tags, absent and `null` both mean none
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Base64 JPEG payload, without a data URL prefix
    #[serde(default)]
    pub base64_image: String,
}

impl ComposeRequest {
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// Check that the required fields are present
    pub fn validate(&self) -> Result<(), ComposeError> {
        if self.language.is_empty() {
            return Err(ComposeError::internal("Language is required"));
        }
        if self.base64_image.is_empty() {
            return Err(ComposeError::internal("Base64 image is required"));
        }
        Ok(())
    }
}

/// A composed poem and the description of the image it was written for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Haiku {
    pub haiku: String,
    pub description: String,
}
