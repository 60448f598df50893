//! Authentication for the compose endpoint
//!
//! Callers present an RS256 bearer token; the service holds only the public
//! half of the key pair and checks the token against a fixed set of expected
//! claims.

pub mod jwt;

pub use jwt::{ExpectedClaims, JwtHandler, KeyPair, TokenClaims, TokenError};
