//! Token assembly: header, payload with `iat`/`exp` injected, signature

use crate::algorithm::Algorithm;
use crate::claims::{Claims, EXPIRES, ISSUED_AT};
use crate::codec::encode_segment;
use crate::error::{JwtError, JwtResult};
use crate::signer;
use crate::time::now_epoch_seconds;
use crate::types::{Header, Token};
use serde_json::{Map, Value};

/// Builds the payload claim set from caller claims without touching them.
///
/// The output carries every caller claim in its original order, then `iat`
/// set to the signing time, then `exp` converted from a relative TTL to an
/// absolute epoch-seconds value when the caller asked for one. A caller
/// supplied `iat` is discarded.
#[derive(Debug, Clone, Copy)]
pub struct PayloadBuilder<'a> {
    claims: &'a Claims,
    issued_at: u64,
}

impl<'a> PayloadBuilder<'a> {
    /// Payload for `claims` issued at `issued_at` (epoch seconds)
    #[must_use]
    pub fn new(claims: &'a Claims, issued_at: u64) -> Self {
        Self { claims, issued_at }
    }

    /// Produce the payload.
    ///
    /// # Errors
    /// Returns `JwtError::InvalidClaims` if `exp` is present but not an integer.
    pub fn build(self) -> JwtResult<Claims> {
        let expires_at = match self.claims.get(EXPIRES) {
            Some(ttl) => Some(self.absolute_expiry(ttl)?),
            None => None,
        };

        let mut payload: Map<String, Value> = self
            .claims
            .iter()
            .filter(|(key, _)| key.as_str() != ISSUED_AT && key.as_str() != EXPIRES)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        payload.insert(ISSUED_AT.to_string(), Value::from(self.issued_at));
        if let Some(exp) = expires_at {
            payload.insert(EXPIRES.to_string(), Value::from(exp));
        }

        Ok(Claims::from(payload))
    }

    fn absolute_expiry(&self, ttl: &Value) -> JwtResult<u64> {
        if let Some(ttl) = ttl.as_i64() {
            return Ok(self.issued_at.saturating_add_signed(ttl));
        }
        if let Some(ttl) = ttl.as_u64() {
            return Ok(self.issued_at.saturating_add(ttl));
        }
        Err(JwtError::invalid_claims(
            "exp must be an integer number of seconds",
        ))
    }
}

/// Log a warning when `secret` is shorter than the digest width of `alg`.
pub(crate) fn warn_if_short_secret(alg: Algorithm, secret: &[u8]) {
    let recommended = alg.recommended_key_size();
    if secret.len() < recommended {
        tracing::warn!(
            algorithm = %alg,
            secret_len = secret.len(),
            recommended,
            "HMAC secret is shorter than the recommended minimum"
        );
    }
}

/// Sign `claims` at an explicit instant (epoch seconds).
///
/// # Errors
/// Returns `JwtError::InvalidClaims` for an `exp` that is not an integer and
/// `JwtError::InvalidKey` if the MAC rejects the secret.
pub fn sign_at(
    claims: &Claims,
    secret: impl AsRef<[u8]>,
    alg: Algorithm,
    now: u64,
) -> JwtResult<Token> {
    let header_b64 = encode_segment(&Header::new(alg))?;
    let payload = PayloadBuilder::new(claims, now).build()?;
    let payload_b64 = encode_segment(&payload)?;

    let mut signing_input = String::with_capacity(header_b64.len() + 1 + payload_b64.len());
    signing_input.push_str(&header_b64);
    signing_input.push('.');
    signing_input.push_str(&payload_b64);

    let signature_b64 = signer::mac(alg.hash(), secret.as_ref(), signing_input.as_bytes())?;

    let mut token = String::with_capacity(signing_input.len() + 1 + signature_b64.len());
    token.push_str(&signing_input);
    token.push('.');
    token.push_str(&signature_b64);

    tracing::debug!(algorithm = %alg, issued_at = now, "token signed");
    Ok(Token::new(token))
}

/// Sign `claims` with `secret`, reading the clock once.
///
/// `exp`, when present, is a time-to-live in seconds; the token carries
/// `iat + exp`. `iat` is always set to the current time.
///
/// # Errors
/// See [`sign_at`].
pub fn sign(claims: &Claims, secret: impl AsRef<[u8]>, alg: Algorithm) -> JwtResult<Token> {
    let secret = secret.as_ref();
    warn_if_short_secret(alg, secret);
    sign_at(claims, secret, alg, now_epoch_seconds())
}

/// Like [`sign`], taking the algorithm by its header name (`"HS256"`, ...).
///
/// # Errors
/// Returns `JwtError::UnsupportedAlgorithm` before any encoding happens if
/// `alg` is not supported, otherwise see [`sign_at`].
pub fn sign_with_algorithm_name(
    claims: &Claims,
    secret: impl AsRef<[u8]>,
    alg: &str,
) -> JwtResult<Token> {
    let alg: Algorithm = alg.parse()?;
    sign(claims, secret, alg)
}
