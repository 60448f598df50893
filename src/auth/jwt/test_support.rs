//! Shared key material for unit tests
//!
//! Key generation is slow, so each test binary generates its pairs once.

use super::{ExpectedClaims, JwtHandler, KeyPair};
use std::sync::OnceLock;

pub(crate) const TEST_SUBJECT: &str = "img2haiku-backend-demo";
pub(crate) const TEST_AUDIENCE: &str = "img2haiku-backend";

pub(crate) fn test_key_pair() -> &'static KeyPair {
    static KEYS: OnceLock<KeyPair> = OnceLock::new();
    KEYS.get_or_init(|| KeyPair::generate().unwrap())
}

/// A second, unrelated pair for signature mismatch cases
pub(crate) fn other_key_pair() -> &'static KeyPair {
    static KEYS: OnceLock<KeyPair> = OnceLock::new();
    KEYS.get_or_init(|| KeyPair::generate().unwrap())
}

pub(crate) fn test_expected() -> ExpectedClaims {
    ExpectedClaims::new(TEST_SUBJECT, TEST_AUDIENCE)
}

pub(crate) fn test_handler() -> JwtHandler {
    JwtHandler::new(test_key_pair(), test_expected()).unwrap()
}
