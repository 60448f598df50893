//! Authentication configuration

use super::*;
use crate::auth::jwt::{ExpectedClaims, KeyPair};
use crate::config::Validate;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Subject the demo tokens are issued for
pub const DEFAULT_SUBJECT: &str = "img2haiku-backend-demo";
/// Audience the service accepts
pub const DEFAULT_AUDIENCE: &str = "img2haiku-backend";

/// Authentication configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// PKCS#8 PEM private key, only needed to issue tokens
    #[serde(default)]
    pub private_key: Option<String>,
    /// SPKI PEM public key used to verify tokens
    #[serde(default)]
    pub public_key: Option<String>,
    /// Expected token subject
    #[serde(default = "default_subject")]
    pub subject: String,
    /// Expected token audience
    #[serde(default = "default_audience")]
    pub audience: String,
    /// Lifetime of issued tokens in seconds
    #[serde(default = "default_token_ttl")]
    pub token_ttl: u64,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field(
                "private_key",
                &self.private_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("public_key", &self.public_key.is_some())
            .field("subject", &self.subject)
            .field("audience", &self.audience)
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            private_key: None,
            public_key: None,
            subject: default_subject(),
            audience: default_audience(),
            token_ttl: default_token_ttl(),
        }
    }
}

impl AuthConfig {
    pub fn has_public_key(&self) -> bool {
        self.public_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    pub fn has_private_key(&self) -> bool {
        self.private_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    /// Claims every accepted token must carry
    pub fn expected_claims(&self) -> ExpectedClaims {
        ExpectedClaims::new(&self.subject, &self.audience)
    }

    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl)
    }

    /// The configured key pair, if both halves are present
    pub fn key_pair(&self) -> Option<KeyPair> {
        match (&self.private_key, &self.public_key) {
            (Some(private), Some(public)) if self.has_private_key() && self.has_public_key() => {
                Some(KeyPair {
                    private: private.clone(),
                    public: public.clone(),
                })
            }
            _ => None,
        }
    }
}

impl Validate for AuthConfig {
    fn validate(&self) -> Result<(), String> {
        if self.subject.trim().is_empty() {
            return Err("Subject cannot be empty".to_string());
        }

        if self.audience.trim().is_empty() {
            return Err("Audience cannot be empty".to_string());
        }

        if self.token_ttl == 0 {
            return Err("Token TTL must be greater than 0".to_string());
        }

        Ok(())
    }
}
