//! Fluent entry point over a configuration and a secret

use crate::algorithm::Algorithm;
use crate::assembler::{sign_at, warn_if_short_secret};
use crate::claims::Claims;
use crate::config::JwtConfig;
use crate::error::JwtResult;
use crate::time::now_epoch_seconds;
use crate::types::Token;
use crate::verifier::verify_at;
use zeroize::Zeroizing;

/// Direct builder entry point
pub struct Jwt;

impl Jwt {
    /// Builder with default settings (HS256, no leeway)
    #[must_use]
    pub fn builder() -> JwtBuilder {
        JwtBuilder::new()
    }

    /// Builder seeded from a configuration
    #[must_use]
    pub fn from_config(config: JwtConfig) -> JwtBuilder {
        JwtBuilder { config }
    }
}

/// Builder before a secret is attached
#[derive(Debug, Clone, Default)]
pub struct JwtBuilder {
    config: JwtConfig,
}

impl JwtBuilder {
    /// Create new builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the signing algorithm
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.config.algorithm = algorithm;
        self
    }

    /// Tolerate `seconds` of clock skew past `exp`
    #[must_use]
    pub fn with_leeway(mut self, seconds: u64) -> Self {
        self.config.leeway_seconds = seconds;
        self
    }

    /// Attach the shared secret
    #[must_use]
    pub fn with_secret(self, secret: impl AsRef<[u8]>) -> JwtSigner {
        let secret = Zeroizing::new(secret.as_ref().to_vec());
        if self.config.warn_on_short_secret {
            warn_if_short_secret(self.config.algorithm, &secret);
        }
        JwtSigner {
            config: self.config,
            secret,
        }
    }
}

/// Signs and verifies with one secret; the secret buffer is wiped on drop
pub struct JwtSigner {
    config: JwtConfig,
    secret: Zeroizing<Vec<u8>>,
}

impl JwtSigner {
    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &JwtConfig {
        &self.config
    }

    /// Sign `claims` now; see [`crate::sign`].
    ///
    /// # Errors
    /// See [`crate::sign_at`].
    pub fn sign(&self, claims: &Claims) -> JwtResult<Token> {
        self.sign_at(claims, now_epoch_seconds())
    }

    /// Sign `claims` at an explicit instant.
    ///
    /// # Errors
    /// See [`crate::sign_at`].
    pub fn sign_at(&self, claims: &Claims, now: u64) -> JwtResult<Token> {
        sign_at(claims, self.secret.as_slice(), self.config.algorithm, now)
    }

    /// Verify `token` now; the header decides the algorithm.
    ///
    /// # Errors
    /// See [`crate::verify_at`].
    pub fn verify(&self, token: impl AsRef<str>) -> JwtResult<Claims> {
        self.verify_at(token, now_epoch_seconds())
    }

    /// Verify `token` at an explicit instant.
    ///
    /// # Errors
    /// See [`crate::verify_at`].
    pub fn verify_at(&self, token: impl AsRef<str>, now: u64) -> JwtResult<Claims> {
        verify_at(
            token.as_ref(),
            self.secret.as_slice(),
            now,
            &self.config.validation(),
        )
    }
}

impl std::fmt::Debug for JwtSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSigner")
            .field("config", &self.config)
            .field("secret", &"<redacted>")
            .finish()
    }
}
