//! HMAC signing primitives
//!
//! Pure functions over `(hash, secret, message)`. Nothing here keeps a copy of
//! the secret once the call returns.

use crate::algorithm::HashFunction;
use crate::codec::base64_url_encode;
use crate::error::{JwtError, JwtResult};
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

#[inline]
fn compute<M: Mac + KeyInit>(secret: &[u8], message: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac = <M as KeyInit>::new_from_slice(secret)
        .map_err(|_| JwtError::invalid_key("Invalid HMAC key"))?;
    Mac::update(&mut mac, message);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Raw HMAC tag over `message`.
///
/// # Errors
/// Returns `JwtError::InvalidKey` if the MAC rejects the key. HMAC accepts
/// keys of any length, the empty key included.
pub fn mac_bytes(hash: HashFunction, secret: &[u8], message: &[u8]) -> JwtResult<Vec<u8>> {
    match hash {
        HashFunction::Sha256 => compute::<HmacSha256>(secret, message),
        HashFunction::Sha384 => compute::<HmacSha384>(secret, message),
        HashFunction::Sha512 => compute::<HmacSha512>(secret, message),
    }
}

/// HMAC tag over `message`, encoded as unpadded base64url.
///
/// # Errors
/// See [`mac_bytes`].
pub fn mac(hash: HashFunction, secret: &[u8], message: &[u8]) -> JwtResult<String> {
    mac_bytes(hash, secret, message).map(|tag| base64_url_encode(&tag))
}

/// Recompute the tag and compare it with `provided` in constant time.
///
/// The comparison runs over the encoded text; its duration does not depend on
/// the position of the first differing byte.
///
/// # Errors
/// See [`mac_bytes`].
pub fn verify_mac(
    hash: HashFunction,
    secret: &[u8],
    message: &[u8],
    provided: &str,
) -> JwtResult<bool> {
    let expected = mac(hash, secret, message)?;
    Ok(expected.as_bytes().ct_eq(provided.as_bytes()).into())
}
