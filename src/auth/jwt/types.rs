//! JWT types and data structures

use super::error::TokenError;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey};
use serde::{Deserialize, Serialize};

/// PEM-encoded RSA key pair
///
/// `private` is PKCS#8, `public` is SubjectPublicKeyInfo.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPair {
    pub private: String,
    pub public: String,
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("private", &"[REDACTED]")
            .field("public", &self.public)
            .finish()
    }
}

/// Claims carried by a bearer token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject
    pub sub: String,
    /// Audience
    pub aud: String,
    /// Issued at, seconds since epoch
    pub iat: u64,
    /// Expiration, seconds since epoch
    pub exp: u64,
}

/// Subject and audience a token must carry to be accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedClaims {
    pub subject: String,
    pub audience: String,
}

impl ExpectedClaims {
    pub fn new(subject: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            audience: audience.into(),
        }
    }

    /// Compare decoded claims against the expected values, audience first
    pub fn check(&self, claims: &TokenClaims) -> Result<(), TokenError> {
        if claims.aud != self.audience {
            return Err(TokenError::AudienceMismatch);
        }
        if claims.sub != self.subject {
            return Err(TokenError::SubjectMismatch);
        }
        Ok(())
    }
}

/// Issues and verifies RS256 tokens
///
/// A handler built with [`JwtHandler::verifier`] has no signing key and can
/// only validate.
#[derive(Clone)]
pub struct JwtHandler {
    /// Encoding key for signing tokens
    pub(super) encoding_key: Option<EncodingKey>,
    /// Decoding key for verifying tokens
    pub(super) decoding_key: DecodingKey,
    /// JWT algorithm
    pub(super) algorithm: Algorithm,
    /// Claims every accepted token must carry
    pub(super) expected: ExpectedClaims,
}

impl std::fmt::Debug for JwtHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtHandler")
            .field("algorithm", &self.algorithm)
            .field("expected", &self.expected)
            .field("can_sign", &self.encoding_key.is_some())
            .field("encoding_key", &"[REDACTED]")
            .field("decoding_key", &"[REDACTED]")
            .finish()
    }
}
