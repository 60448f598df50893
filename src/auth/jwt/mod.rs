//! JWT token handling
//!
//! This module provides key pair generation, token issuance and token
//! verification.

mod error;
mod handler;
mod keys;
pub mod types;
mod utils;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::TokenError;
pub use keys::RSA_KEY_BITS;
pub use types::{ExpectedClaims, JwtHandler, KeyPair, TokenClaims};
