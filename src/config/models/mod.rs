//! Configuration data models

pub mod auth;
pub mod logging;
pub mod server;
pub mod upstream;

pub use auth::*;
pub use logging::*;
pub use server::*;
pub use upstream::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    10 * 1024 * 1024 // 10MB
}

/// Default token subject
pub fn default_subject() -> String {
    DEFAULT_SUBJECT.to_string()
}

/// Default token audience
pub fn default_audience() -> String {
    DEFAULT_AUDIENCE.to_string()
}

/// Default token lifetime in seconds
pub fn default_token_ttl() -> u64 {
    15 * 60
}

/// Default upstream API base
pub fn default_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

/// Default vision model
pub fn default_model() -> String {
    "gpt-4o-2024-08-06".to_string()
}

/// Default completion budget
pub fn default_max_tokens() -> u32 {
    200
}

/// Default sampling temperature
pub fn default_temperature() -> f32 {
    1.0
}

/// Default upstream timeout in seconds
pub fn default_upstream_timeout() -> u64 {
    30
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}
