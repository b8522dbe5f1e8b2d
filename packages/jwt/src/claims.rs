//! Claim set carried in the token payload

use crate::error::{JwtError, JwtResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Issued-at claim name
pub const ISSUED_AT: &str = "iat";
/// Expiry claim name
pub const EXPIRES: &str = "exp";

/// Ordered mapping of claim names to JSON values.
///
/// Keys keep their insertion order through encoding. Before signing, `exp`
/// holds a time-to-live in seconds relative to the signing instant; in a
/// verified payload it holds an absolute epoch-seconds value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    /// Empty claim set
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Add or replace a claim
    #[must_use]
    pub fn with_claim(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Set the subject (`sub`) claim
    #[must_use]
    pub fn with_subject(self, subject: impl Into<String>) -> Self {
        self.with_claim("sub", subject.into())
    }

    /// Set the issuer (`iss`) claim
    #[must_use]
    pub fn with_issuer(self, issuer: impl Into<String>) -> Self {
        self.with_claim("iss", issuer.into())
    }

    /// Request an expiry `ttl_seconds` after signing. Negative values produce
    /// a token that is already expired.
    #[must_use]
    pub fn expires_in(self, ttl_seconds: i64) -> Self {
        self.with_claim(EXPIRES, ttl_seconds)
    }

    /// Insert a claim, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Remove a claim
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Claim value by name
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether the claim is present
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// `iat` as epoch seconds, if present and a non-negative integer
    #[must_use]
    pub fn issued_at(&self) -> Option<u64> {
        self.get(ISSUED_AT).and_then(Value::as_u64)
    }

    /// `exp` as an integer, if present and a non-negative integer
    #[must_use]
    pub fn expires_at(&self) -> Option<u64> {
        self.get(EXPIRES).and_then(Value::as_u64)
    }

    /// Number of claims
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no claims
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Claims in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Borrow the underlying JSON object
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Take the underlying JSON object
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Convert any serializable value that encodes as a JSON object.
    ///
    /// # Errors
    /// Returns `JwtError::InvalidClaims` when serialization fails or the value
    /// is not an object.
    pub fn from_serializable<T: Serialize>(value: &T) -> JwtResult<Self> {
        let value = serde_json::to_value(value)
            .map_err(|e| JwtError::InvalidClaims(format!("Failed to serialize claims: {e}")))?;
        Self::try_from(value)
    }

    /// Deserialize the claim set into a typed structure.
    ///
    /// # Errors
    /// Returns `JwtError::DecodeError` when the claims do not match `T`.
    pub fn deserialize_into<T: for<'de> Deserialize<'de>>(&self) -> JwtResult<T> {
        serde_json::from_value(Value::Object(self.0.clone()))
            .map_err(|e| JwtError::DecodeError(format!("Claims do not match target type: {e}")))
    }
}

impl From<Map<String, Value>> for Claims {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Claims> for Value {
    fn from(claims: Claims) -> Self {
        Value::Object(claims.0)
    }
}

impl TryFrom<Value> for Claims {
    type Error = JwtError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(JwtError::invalid_claims("Claims must be a JSON object")),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Claims {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl IntoIterator for Claims {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
