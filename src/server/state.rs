//! Application state shared across HTTP handlers

use crate::auth::JwtHandler;
use crate::config::Config;
use crate::core::providers::HaikuProvider;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Everything in here is read-only after startup, so workers share it
/// through `Arc` without locking.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration
    pub config: Arc<Config>,
    /// Verifies bearer tokens
    pub jwt: Arc<JwtHandler>,
    /// Upstream model
    pub provider: Arc<dyn HaikuProvider>,
}

impl AppState {
    pub fn new(config: Config, jwt: JwtHandler, provider: Arc<dyn HaikuProvider>) -> Self {
        Self {
            config: Arc::new(config),
            jwt: Arc::new(jwt),
            provider,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("jwt", &self.jwt)
            .field("provider", &self.provider.name())
            .finish()
    }
}
