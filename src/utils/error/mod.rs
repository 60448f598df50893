//! Error handling for the haiku gateway
//!
//! Two families live here: [`ComposeError`] is what the compose endpoint
//! returns to callers, [`GatewayError`] covers startup, configuration and
//! key-loading failures that never reach an HTTP response.

mod compose;
mod helpers;
mod response;
mod types;

pub use compose::{ComposeError, ErrorCode};
pub use response::ErrorResponse;
pub use types::{GatewayError, Result};
