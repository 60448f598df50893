//! RSA key pair generation and PEM handling

use super::error::TokenError;
use super::types::KeyPair;
use rsa::pkcs8::{DecodePrivateKey, EncodePrivateKey, EncodePublicKey, LineEnding};
use rsa::{RsaPrivateKey, RsaPublicKey};
use tracing::debug;

/// Modulus size of generated keys
pub const RSA_KEY_BITS: usize = 2048;

impl KeyPair {
    /// Generate a fresh RSA key pair
    pub fn generate() -> Result<Self, TokenError> {
        let mut rng = rand::thread_rng();
        let private_key = RsaPrivateKey::new(&mut rng, RSA_KEY_BITS)
            .map_err(|e| TokenError::KeyGeneration(e.to_string()))?;

        let pair = Self::from_private_key(&private_key)?;
        debug!("Generated {}-bit RSA key pair", RSA_KEY_BITS);
        Ok(pair)
    }

    /// Rebuild a pair from a PKCS#8 private key, deriving the public half
    pub fn from_private_pem(private_pem: &str) -> Result<Self, TokenError> {
        let private_key = RsaPrivateKey::from_pkcs8_pem(private_pem.trim())
            .map_err(|e| TokenError::InvalidKey(format!("private key: {}", e)))?;
        Self::from_private_key(&private_key)
    }

    fn from_private_key(private_key: &RsaPrivateKey) -> Result<Self, TokenError> {
        let public_key = RsaPublicKey::from(private_key);

        let private_pem = private_key
            .to_pkcs8_pem(LineEnding::LF)
            .map_err(|e| TokenError::KeyGeneration(format!("encode private key: {}", e)))?;
        let public_pem = public_key
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| TokenError::KeyGeneration(format!("encode public key: {}", e)))?;

        Ok(Self {
            private: String::from(private_pem.as_str()),
            public: public_pem,
        })
    }
}
