//! Token error types

use thiserror::Error;

/// Token operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// Failures raised while signing or verifying a token.
///
/// Every variant is terminal. Messages never carry the secret, the signature
/// or claim values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// `alg` is missing or not one of the supported HMAC identifiers
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Token framing is wrong or the header segment cannot be decoded
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    /// Recomputed signature does not match the provided one
    #[error("Invalid token signature")]
    InvalidSignature,

    /// `exp` is present and not in the future
    #[error("Token has expired")]
    TokenExpired,

    /// A segment is valid base64url but does not hold the expected JSON
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// Caller-supplied claims cannot be assembled into a token payload
    #[error("Invalid claims: {0}")]
    InvalidClaims(String),

    /// The MAC implementation rejected the key
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

/// Fieldless discriminant of [`JwtError`], for branching on the failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JwtErrorKind {
    /// See [`JwtError::UnsupportedAlgorithm`]
    UnsupportedAlgorithm,
    /// See [`JwtError::MalformedToken`]
    MalformedToken,
    /// See [`JwtError::InvalidSignature`]
    InvalidSignature,
    /// See [`JwtError::TokenExpired`]
    TokenExpired,
    /// See [`JwtError::DecodeError`]
    DecodeError,
    /// See [`JwtError::InvalidClaims`]
    InvalidClaims,
    /// See [`JwtError::InvalidKey`]
    InvalidKey,
}

impl JwtError {
    /// Kind of this error
    #[must_use]
    pub fn kind(&self) -> JwtErrorKind {
        match self {
            JwtError::UnsupportedAlgorithm(_) => JwtErrorKind::UnsupportedAlgorithm,
            JwtError::MalformedToken(_) => JwtErrorKind::MalformedToken,
            JwtError::InvalidSignature => JwtErrorKind::InvalidSignature,
            JwtError::TokenExpired => JwtErrorKind::TokenExpired,
            JwtError::DecodeError(_) => JwtErrorKind::DecodeError,
            JwtError::InvalidClaims(_) => JwtErrorKind::InvalidClaims,
            JwtError::InvalidKey(_) => JwtErrorKind::InvalidKey,
        }
    }

    /// Create an unsupported algorithm error
    #[inline]
    #[must_use]
    pub fn unsupported_algorithm(alg: &str) -> Self {
        JwtError::UnsupportedAlgorithm(alg.to_string())
    }

    /// Create a malformed token error
    #[inline]
    #[must_use]
    pub fn malformed(msg: &str) -> Self {
        JwtError::MalformedToken(msg.to_string())
    }

    /// Create a decode error
    #[inline]
    #[must_use]
    pub fn decode(msg: &str) -> Self {
        JwtError::DecodeError(msg.to_string())
    }

    /// Create an invalid claims error
    #[inline]
    #[must_use]
    pub fn invalid_claims(msg: &str) -> Self {
        JwtError::InvalidClaims(msg.to_string())
    }

    /// Create an invalid key error
    #[inline]
    #[must_use]
    pub fn invalid_key(msg: &str) -> Self {
        JwtError::InvalidKey(msg.to_string())
    }
}
