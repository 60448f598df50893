//! Core JWT handler implementation

use super::error::TokenError;
use super::types::{ExpectedClaims, JwtHandler, KeyPair, TokenClaims};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use std::collections::HashSet;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

impl JwtHandler {
    /// Create a handler that can both issue and validate tokens
    pub fn new(keys: &KeyPair, expected: ExpectedClaims) -> Result<Self, TokenError> {
        let encoding_key = EncodingKey::from_rsa_pem(keys.private.trim().as_bytes())
            .map_err(|e| TokenError::InvalidKey(format!("private key: {}", e)))?;

        let mut handler = Self::verifier(&keys.public, expected)?;
        handler.encoding_key = Some(encoding_key);
        Ok(handler)
    }

    /// Create a validate-only handler from a public key
    pub fn verifier(public_pem: &str, expected: ExpectedClaims) -> Result<Self, TokenError> {
        let decoding_key = DecodingKey::from_rsa_pem(public_pem.trim().as_bytes())
            .map_err(|e| TokenError::InvalidKey(format!("public key: {}", e)))?;

        Ok(Self {
            encoding_key: None,
            decoding_key,
            algorithm: Algorithm::RS256,
            expected,
        })
    }

    /// Issue a token valid for `ttl` from now
    pub fn issue_token(
        &self,
        subject: &str,
        audience: &str,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let ttl = ttl.as_secs();
        if ttl == 0 {
            return Err(TokenError::InvalidTtl);
        }

        let now = unix_now()?;
        let claims = TokenClaims {
            sub: subject.to_string(),
            aud: audience.to_string(),
            iat: now,
            exp: now.checked_add(ttl).ok_or(TokenError::InvalidTtl)?,
        };

        let token = self.sign_claims(&claims)?;
        debug!("Issued token for subject {} expiring at {}", subject, claims.exp);
        Ok(token)
    }

    /// Sign an arbitrary claim set
    pub fn sign_claims(&self, claims: &TokenClaims) -> Result<String, TokenError> {
        let key = self
            .encoding_key
            .as_ref()
            .ok_or(TokenError::MissingSigningKey)?;

        encode(&Header::new(self.algorithm), claims, key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify a token and return its claims
    ///
    /// Signature and algorithm are checked by `jsonwebtoken`; expiry is
    /// strict (`now < exp`, no leeway) and audience/subject go through the
    /// expected-claims comparator.
    pub fn validate_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let token_data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation())
            .map_err(|e| {
                warn!("JWT verification failed: {}", e);
                TokenError::from_decode(e)
            })?;
        let claims = token_data.claims;

        if unix_now()? >= claims.exp {
            return Err(TokenError::Expired);
        }
        self.expected.check(&claims)?;

        debug!("Token verified for subject: {}", claims.sub);
        Ok(claims)
    }

    /// Whether this handler holds a private key
    pub fn can_sign(&self) -> bool {
        self.encoding_key.is_some()
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims = HashSet::new();
        validation
    }
}

pub(super) fn unix_now() -> Result<u64, TokenError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|e| TokenError::Clock(e.to_string()))
}
