//! Algorithm registry
//!
//! Identifiers follow the JWA naming scheme: a two letter MAC family prefix
//! followed by the hash bit width (`HS256` is HMAC over SHA-256). Only the
//! HMAC family is implemented.

use crate::error::{JwtError, JwtResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// MAC family selected by the first two characters of an identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacFamily {
    /// `HS`: keyed-hash message authentication code (RFC 2104)
    Hmac,
}

/// Hash function underlying the MAC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashFunction {
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
}

impl HashFunction {
    /// Digest width in bits
    #[must_use]
    pub const fn bits(self) -> u16 {
        match self {
            HashFunction::Sha256 => 256,
            HashFunction::Sha384 => 384,
            HashFunction::Sha512 => 512,
        }
    }

    /// Digest length in bytes, which is also the raw signature length
    #[must_use]
    pub const fn output_len(self) -> usize {
        self.bits() as usize / 8
    }

    /// Conventional hash name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            HashFunction::Sha256 => "SHA-256",
            HashFunction::Sha384 => "SHA-384",
            HashFunction::Sha512 => "SHA-512",
        }
    }
}

/// Supported signing algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Algorithm {
    /// HMAC using SHA-256
    #[default]
    HS256,
    /// HMAC using SHA-384
    HS384,
    /// HMAC using SHA-512
    HS512,
}

impl Algorithm {
    /// Every supported algorithm, weakest hash first
    pub const ALL: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

    /// The `alg` header value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Algorithm::HS256 => "HS256",
            Algorithm::HS384 => "HS384",
            Algorithm::HS512 => "HS512",
        }
    }

    /// MAC family of this algorithm
    #[must_use]
    pub const fn family(self) -> MacFamily {
        match self {
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => MacFamily::Hmac,
        }
    }

    /// Hash function of this algorithm
    #[must_use]
    pub const fn hash(self) -> HashFunction {
        match self {
            Algorithm::HS256 => HashFunction::Sha256,
            Algorithm::HS384 => HashFunction::Sha384,
            Algorithm::HS512 => HashFunction::Sha512,
        }
    }

    /// Recommended minimum secret length in bytes (the digest width, RFC 7518 §3.2)
    #[must_use]
    pub const fn recommended_key_size(self) -> usize {
        self.hash().output_len()
    }
}

/// Resolve an identifier into its MAC family and hash function.
///
/// The first two characters select the family and the remainder selects the
/// hash bit width.
///
/// # Errors
/// Returns `JwtError::UnsupportedAlgorithm` for an unknown family or width.
pub fn resolve(alg: &str) -> JwtResult<(HashFunction, MacFamily)> {
    let algorithm = alg.parse::<Algorithm>()?;
    Ok((algorithm.hash(), algorithm.family()))
}

impl FromStr for Algorithm {
    type Err = JwtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (family, width) = match (s.get(..2), s.get(2..)) {
            (Some(family), Some(width)) => (family, width),
            _ => return Err(JwtError::unsupported_algorithm(s)),
        };

        match (family, width) {
            ("HS", "256") => Ok(Algorithm::HS256),
            ("HS", "384") => Ok(Algorithm::HS384),
            ("HS", "512") => Ok(Algorithm::HS512),
            _ => Err(JwtError::unsupported_algorithm(s)),
        }
    }
}

impl TryFrom<String> for Algorithm {
    type Error = JwtError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Algorithm> for &'static str {
    fn from(alg: Algorithm) -> Self {
        alg.as_str()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_width() {
        assert_eq!(resolve("HS256").unwrap(), (HashFunction::Sha256, MacFamily::Hmac));
        assert_eq!(resolve("HS384").unwrap(), (HashFunction::Sha384, MacFamily::Hmac));
        assert_eq!(resolve("HS512").unwrap(), (HashFunction::Sha512, MacFamily::Hmac));
    }

    #[test]
    fn rejects_unknown_family_and_width() {
        for alg in ["RS256", "ES256", "HS1", "HS", "H", "", "hs256", "HS2560", "none", "HSé"] {
            let err = resolve(alg).unwrap_err();
            assert_eq!(err, JwtError::UnsupportedAlgorithm(alg.to_string()), "{alg}");
        }
    }

    #[test]
    fn display_matches_header_value() {
        for alg in Algorithm::ALL {
            assert_eq!(alg.to_string(), alg.as_str());
            assert_eq!(alg.as_str().parse::<Algorithm>().unwrap(), alg);
        }
    }

    #[test]
    fn serde_uses_identifier_strings() {
        let json = serde_json::to_string(&Algorithm::HS384).unwrap();
        assert_eq!(json, "\"HS384\"");
        let parsed: Algorithm = serde_json::from_str("\"HS512\"").unwrap();
        assert_eq!(parsed, Algorithm::HS512);
        assert!(serde_json::from_str::<Algorithm>("\"HS999\"").is_err());
    }

    #[test]
    fn key_sizes_follow_digest_width() {
        assert_eq!(Algorithm::HS256.recommended_key_size(), 32);
        assert_eq!(Algorithm::HS384.recommended_key_size(), 48);
        assert_eq!(Algorithm::HS512.recommended_key_size(), 64);
    }
}
