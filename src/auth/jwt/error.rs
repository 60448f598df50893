//! Token errors

use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use thiserror::Error;

/// Failure to create, sign or verify a token
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Token structure, encoding or claim payload is unreadable
    #[error("token is malformed: {0}")]
    Malformed(String),

    #[error("signature verification failed")]
    InvalidSignature,

    /// Token was signed with something other than the expected algorithm
    #[error("unexpected signing method")]
    InvalidAlgorithm,

    #[error("invalid audience")]
    AudienceMismatch,

    #[error("invalid subject")]
    SubjectMismatch,

    #[error("Token is expired")]
    Expired,

    /// PEM key material could not be parsed
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Issuing requires the private half of the key pair
    #[error("no signing key configured")]
    MissingSigningKey,

    #[error("token ttl must be at least one second and keep the expiry in range")]
    InvalidTtl,

    #[error("failed to sign token: {0}")]
    Signing(String),

    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    #[error("system time error: {0}")]
    Clock(String),
}

impl TokenError {
    /// Map a decode failure reported by `jsonwebtoken`
    pub(super) fn from_decode(error: JwtError) -> Self {
        match error.kind() {
            ErrorKind::InvalidSignature => Self::InvalidSignature,
            ErrorKind::InvalidAlgorithm
            | ErrorKind::MissingAlgorithm
            | ErrorKind::InvalidAlgorithmName => Self::InvalidAlgorithm,
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::InvalidAudience => Self::AudienceMismatch,
            ErrorKind::InvalidSubject => Self::SubjectMismatch,
            ErrorKind::InvalidRsaKey(_) | ErrorKind::InvalidKeyFormat => {
                Self::InvalidKey(error.to_string())
            }
            _ => Self::Malformed(error.to_string()),
        }
    }
}
