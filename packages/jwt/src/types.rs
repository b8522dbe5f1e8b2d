//! Header and compact token types

use crate::algorithm::Algorithm;
use crate::error::{JwtError, JwtResult};
use serde::{Deserialize, Serialize};

/// Token type written into every header
pub const TOKEN_TYPE: &str = "JWT";

/// JOSE header `{ "alg": ..., "typ": "JWT" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    /// Signing algorithm
    pub alg: Algorithm,
    /// Token type, always `JWT` for headers produced here
    pub typ: String,
}

impl Header {
    /// Header for the given algorithm
    #[must_use]
    pub fn new(alg: Algorithm) -> Self {
        Self {
            alg,
            typ: TOKEN_TYPE.to_string(),
        }
    }
}

/// Header as found on the wire, before `alg` is resolved
#[derive(Debug, Deserialize)]
pub(crate) struct RawHeader {
    #[serde(default)]
    pub alg: Option<String>,
    #[serde(default)]
    pub typ: Option<String>,
}

impl RawHeader {
    pub(crate) fn algorithm(&self) -> JwtResult<Algorithm> {
        match self.alg.as_deref() {
            Some(alg) => alg.parse(),
            None => Err(JwtError::unsupported_algorithm("<missing>")),
        }
    }

    pub(crate) fn into_header(self) -> JwtResult<Header> {
        let alg = self.algorithm()?;
        Ok(Header {
            alg,
            typ: self.typ.unwrap_or_else(|| TOKEN_TYPE.to_string()),
        })
    }
}

/// Borrowed view of the three segments of a compact token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenParts<'a> {
    /// Encoded header
    pub header: &'a str,
    /// Encoded payload
    pub payload: &'a str,
    /// Encoded signature
    pub signature: &'a str,
    signed: &'a str,
}

impl<'a> TokenParts<'a> {
    /// Split `header.payload.signature`.
    ///
    /// # Errors
    /// Returns `JwtError::MalformedToken` unless there are exactly three
    /// non-empty segments.
    pub fn split(token: &'a str) -> JwtResult<Self> {
        let mut segments = token.split('.');
        let (Some(header), Some(payload), Some(signature), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(JwtError::malformed("Token must have exactly three segments"));
        };

        if header.is_empty() || payload.is_empty() || signature.is_empty() {
            return Err(JwtError::malformed("Token segments must not be empty"));
        }

        Ok(Self::from_segments(token, header, payload, signature))
    }

    fn from_segments(token: &'a str, header: &'a str, payload: &'a str, signature: &'a str) -> Self {
        let signed_len = (header.len() + 1 + payload.len()).min(token.len());
        Self {
            header,
            payload,
            signature,
            signed: &token[..signed_len],
        }
    }

    /// `header.payload`, the bytes covered by the signature
    #[must_use]
    pub fn signing_input(&self) -> &'a [u8] {
        self.signed.as_bytes()
    }
}

/// Signed compact token
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    pub(crate) fn new(token: String) -> Self {
        Self(token)
    }

    /// Token text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the token text
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// The three encoded segments
    #[must_use]
    pub fn parts(&self) -> TokenParts<'_> {
        let mut segments = self.0.splitn(3, '.');
        let header = segments.next().unwrap_or_default();
        let payload = segments.next().unwrap_or_default();
        let signature = segments.next().unwrap_or_default();
        TokenParts::from_segments(&self.0, header, payload, signature)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
