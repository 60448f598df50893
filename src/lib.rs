//! # img2haiku-rs
//!
//! An HTTP endpoint that turns an image into a haiku and a one-sentence
//! description using a vision-capable chat-completion model.
//!
//! ## Features
//!
//! - **RS256 bearer tokens**: callers authenticate with JWTs checked against a public key
//! - **Prompting**: tags-aware and tags-agnostic prompt templates
//! - **Typed decoding**: the model's JSON answer is decoded into a haiku or a refusal
//! - **Uniform errors**: every failure is a `{"code", "details"}` JSON body
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use img2haiku_rs::{Config, server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::from_file("config/haiku.yaml").await?;
//!     let jwt = server::prepare_auth(&mut config)?;
//!     server::HttpServer::new(&config, jwt)?.start().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use auth::{ExpectedClaims, JwtHandler, KeyPair, TokenClaims, TokenError};
pub use config::Config;
pub use core::compose::{ComposeRequest, Haiku, build_prompt};
pub use core::providers::{HaikuProvider, OpenAIProvider};
pub use utils::error::{ComposeError, ErrorCode, ErrorResponse, GatewayError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp, seconds since epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
            rust_version: option_env!("RUST_VERSION").unwrap_or("unknown"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
