//! Segment codec: JSON values to unpadded base64url text and back
//!
//! Header and payload segments go through `encode_segment`/`decode_segment`.
//! The serializer writes object keys in insertion order, so one logical value
//! always produces the same bytes.

use crate::error::{JwtError, JwtResult};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Serialize, de::DeserializeOwned};

/// Base64 URL-safe encoding without padding (RFC 7515)
#[inline]
pub(crate) fn base64_url_encode(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Base64 URL-safe decoding without padding (RFC 7515)
#[inline]
pub(crate) fn base64_url_decode(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD.decode(input)
}

/// Serialize `value` to compact JSON and encode it as one token segment.
///
/// # Errors
/// Returns `JwtError::InvalidClaims` if the value cannot be serialized to JSON
/// (for instance a map with non-string keys).
pub fn encode_segment<T: Serialize + ?Sized>(value: &T) -> JwtResult<String> {
    let json = serde_json::to_vec(value)
        .map_err(|e| JwtError::InvalidClaims(format!("Failed to serialize segment: {e}")))?;
    Ok(base64_url_encode(&json))
}

/// Decode one token segment back into a JSON-deserializable value.
///
/// Padding characters are rejected; the segment must be canonical unpadded
/// base64url.
///
/// # Errors
/// Returns `JwtError::DecodeError` on malformed base64url, invalid JSON or
/// JSON that does not match `T`.
pub fn decode_segment<T: DeserializeOwned>(segment: &str) -> JwtResult<T> {
    let bytes = base64_url_decode(segment)
        .map_err(|e| JwtError::DecodeError(format!("Invalid base64url segment: {e}")))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| JwtError::DecodeError(format!("Invalid segment JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn header_encodes_to_well_known_segment() {
        let header = json!({ "alg": "HS256", "typ": "JWT" });
        let segment = encode_segment(&header).expect("header should encode");
        assert_eq!(segment, "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9");
    }

    #[test]
    fn encoding_has_no_padding_and_is_url_safe() {
        let value = json!({ "k": "???>>>~~~" });
        let segment = encode_segment(&value).expect("value should encode");
        assert!(!segment.contains('='));
        assert!(!segment.contains('+'));
        assert!(!segment.contains('/'));
        let back: Value = decode_segment(&segment).expect("segment should decode");
        assert_eq!(back, value);
    }

    #[test]
    fn insertion_order_is_kept() {
        let mut map = serde_json::Map::new();
        map.insert("zeta".into(), json!(1));
        map.insert("alpha".into(), json!(2));
        let segment = encode_segment(&map).expect("map should encode");
        let raw = base64_url_decode(&segment).expect("segment is base64url");
        assert_eq!(raw, br#"{"zeta":1,"alpha":2}"#);
    }

    #[test]
    fn rejects_bad_base64() {
        let err = decode_segment::<Value>("not*base64").unwrap_err();
        assert!(matches!(err, JwtError::DecodeError(_)));
    }

    #[test]
    fn rejects_padded_input() {
        let err = decode_segment::<Value>("e30=").unwrap_err();
        assert!(matches!(err, JwtError::DecodeError(_)));
    }

    #[test]
    fn rejects_invalid_json() {
        let segment = base64_url_encode(b"{not json");
        let err = decode_segment::<Value>(&segment).unwrap_err();
        assert!(matches!(err, JwtError::DecodeError(_)));
    }
}
