//! Token verification
//!
//! Steps run in a fixed order and stop at the first failure:
//! split, decode header, recompute and compare the signature, decode the
//! payload, check expiry. The payload is never decoded for a token whose
//! signature does not match, so a forged token always reports
//! `InvalidSignature` regardless of its claims.

use crate::algorithm::Algorithm;
use crate::claims::{Claims, EXPIRES};
use crate::codec::decode_segment;
use crate::error::{JwtError, JwtResult};
use crate::signer;
use crate::time::now_epoch_seconds;
use crate::types::{Header, RawHeader, TokenParts};
use serde_json::Value;

/// Verification options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Validation {
    /// Seconds of clock skew tolerated past `exp`
    pub leeway_seconds: u64,
}

impl Validation {
    /// Strict validation: a token expires exactly at `exp`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tolerate `seconds` of clock skew past `exp`
    #[must_use]
    pub fn with_leeway(mut self, seconds: u64) -> Self {
        self.leeway_seconds = seconds;
        self
    }
}

fn decode_raw_header(segment: &str) -> JwtResult<RawHeader> {
    decode_segment(segment).map_err(|_| JwtError::malformed("Invalid header segment"))
}

/// Read the header of a token without verifying it.
///
/// The result is not authenticated and must not drive trust decisions.
///
/// # Errors
/// Returns `JwtError::MalformedToken` for bad framing or an undecodable header
/// and `JwtError::UnsupportedAlgorithm` for a missing or unknown `alg`.
pub fn decode_header(token: &str) -> JwtResult<Header> {
    let parts = TokenParts::split(token)?;
    decode_raw_header(parts.header)?.into_header()
}

fn check_expiry(claims: &Claims, now: u64, validation: &Validation) -> JwtResult<()> {
    let Some(exp) = claims.get(EXPIRES) else {
        return Ok(());
    };

    let leeway = validation.leeway_seconds;
    let expired = match exp {
        Value::Number(n) => match (n.as_u64(), n.as_f64()) {
            (Some(exp), _) => exp.saturating_add(leeway) <= now,
            (None, Some(exp)) => exp + leeway as f64 <= now as f64,
            (None, None) => true,
        },
        _ => return Err(JwtError::decode("exp must be a number")),
    };

    if expired {
        Err(JwtError::TokenExpired)
    } else {
        Ok(())
    }
}

fn verify_parts(
    parts: TokenParts<'_>,
    secret: &[u8],
    now: u64,
    validation: &Validation,
) -> JwtResult<(Algorithm, Claims)> {
    let alg = decode_raw_header(parts.header)?.algorithm()?;

    if !signer::verify_mac(alg.hash(), secret, parts.signing_input(), parts.signature)? {
        return Err(JwtError::InvalidSignature);
    }

    let claims: Claims = decode_segment(parts.payload)?;
    check_expiry(&claims, now, validation)?;
    Ok((alg, claims))
}

/// Verify `token` at an explicit instant (epoch seconds) and return its
/// payload claims.
///
/// # Errors
/// - `MalformedToken`: not three non-empty segments, or an undecodable header
/// - `UnsupportedAlgorithm`: header `alg` missing or unknown
/// - `InvalidSignature`: signature does not match
/// - `DecodeError`: authentic payload that is not a JSON object, or a
///   non-numeric `exp`
/// - `TokenExpired`: `exp` is not in the future
pub fn verify_at(
    token: &str,
    secret: impl AsRef<[u8]>,
    now: u64,
    validation: &Validation,
) -> JwtResult<Claims> {
    let result = TokenParts::split(token)
        .and_then(|parts| verify_parts(parts, secret.as_ref(), now, validation));

    match result {
        Ok((alg, claims)) => {
            tracing::debug!(algorithm = %alg, "token verified");
            Ok(claims)
        }
        Err(e) => {
            tracing::debug!(kind = ?e.kind(), "token rejected");
            Err(e)
        }
    }
}

/// Verify `token` with `secret` against the current time, with no leeway.
///
/// # Errors
/// See [`verify_at`].
pub fn verify(token: &str, secret: impl AsRef<[u8]>) -> JwtResult<Claims> {
    verify_at(token, secret, now_epoch_seconds(), &Validation::default())
}
