//! Environment variable overrides

use super::Config;
use crate::utils::error::{GatewayError, Result};
use tracing::debug;

impl Config {
    /// Apply overrides from environment-style variables
    ///
    /// `lookup` returns the value for a variable name, or `None` when unset.
    /// Empty values count as unset.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        // Server configuration
        if let Some(port) = var("PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid port: {}", e)))?;
        }
        if let Some(workers) = var("HAIKU_WORKERS") {
            self.server.workers = Some(
                workers
                    .parse()
                    .map_err(|e| GatewayError::Config(format!("Invalid workers count: {}", e)))?,
            );
        }
        if var("LOCAL_ONLY").as_deref() == Some("true") {
            self.server.host = "127.0.0.1".to_string();
            self.server.dev_mode = true;
        }

        // Auth configuration
        if let Some(private_key) = var("JWT_PRIVATE_KEY") {
            self.auth.private_key = Some(private_key);
        }
        if let Some(public_key) = var("JWT_PUBLIC_KEY") {
            self.auth.public_key = Some(public_key);
        }
        if let Some(subject) = var("JWT_SUBJECT") {
            self.auth.subject = subject;
        }
        if let Some(audience) = var("JWT_AUDIENCE") {
            self.auth.audience = audience;
        }

        // Upstream configuration
        if let Some(api_key) = var("OPENAI_API_KEY") {
            self.upstream.api_key = api_key;
        }
        if let Some(api_base) = var("OPENAI_API_BASE") {
            self.upstream.api_base = api_base;
        }
        if let Some(model) = var("OPENAI_MODEL") {
            self.upstream.model = model;
        }
        if let Some(timeout) = var("OPENAI_TIMEOUT") {
            self.upstream.timeout = timeout
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid upstream timeout: {}", e)))?;
        }

        // Logging configuration
        if let Some(json) = var("LOG_JSON") {
            self.logging.json = json
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid LOG_JSON flag: {}", e)))?;
        }

        debug!("Environment overrides applied");
        Ok(())
    }
}
