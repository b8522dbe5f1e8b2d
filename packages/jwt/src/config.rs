//! Signing and verification settings
//!
//! Secrets are deliberately absent: they are supplied per call.

use crate::algorithm::Algorithm;
use crate::error::{JwtError, JwtResult};
use crate::verifier::Validation;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Token settings, loadable from JSON with every field optional
pub struct JwtConfig {
    /// Algorithm used for signing
    #[serde(default)]
    pub algorithm: Algorithm,
    /// Seconds of clock skew tolerated past `exp` at verification
    #[serde(default)]
    pub leeway_seconds: u64,
    /// Log a warning when the secret is shorter than the digest width
    #[serde(default = "default_warn_on_short_secret")]
    pub warn_on_short_secret: bool,
}

fn default_warn_on_short_secret() -> bool {
    true
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            leeway_seconds: 0,
            warn_on_short_secret: default_warn_on_short_secret(),
        }
    }
}

impl JwtConfig {
    /// Parse a JSON document such as `{"algorithm":"HS512","leeway_seconds":30}`.
    ///
    /// # Errors
    /// Returns `JwtError::DecodeError` for malformed JSON, unknown algorithms
    /// or mistyped fields.
    pub fn from_json_str(json: &str) -> JwtResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| JwtError::DecodeError(format!("Invalid token configuration: {e}")))
    }

    /// Verification options derived from this configuration
    #[must_use]
    pub fn validation(&self) -> Validation {
        Validation::new().with_leeway(self.leeway_seconds)
    }
}
