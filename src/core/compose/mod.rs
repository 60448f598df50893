//! Haiku composition: request model and prompt rendering

pub mod prompt;
pub mod types;

pub use prompt::{NO_TAGS, build_prompt};
pub use types::{ComposeRequest, Haiku};
