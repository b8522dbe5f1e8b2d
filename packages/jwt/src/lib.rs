//! Compact JSON Web Tokens signed with HMAC (HS256, HS384, HS512)
//!
//! Tokens are `header.payload.signature`, each segment unpadded base64url.
//! Signing injects `iat` and turns a caller-supplied `exp` time-to-live into
//! an absolute expiry; verification checks the signature in constant time
//! before it looks at any claim.
//!
//! ```
//! use hmac_jwt::{Algorithm, Claims, sign, verify};
//!
//! let claims = Claims::new().with_claim("foo", "bar").expires_in(3600);
//! let token = sign(&claims, "secret", Algorithm::HS256)?;
//! let verified = verify(token.as_str(), "secret")?;
//! assert_eq!(verified.get("foo"), Some(&serde_json::json!("bar")));
//! # Ok::<(), hmac_jwt::JwtError>(())
//! ```
//!
//! Every operation is a pure function of its inputs plus one clock read, and
//! is safe to call concurrently.

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod assembler;
pub mod builder;
pub mod claims;
pub mod codec;
pub mod config;
mod error;
pub mod signer;
pub mod time;
mod types;
pub mod verifier;

pub use algorithm::{Algorithm, HashFunction, MacFamily, resolve};
pub use assembler::{PayloadBuilder, sign, sign_at, sign_with_algorithm_name};
pub use builder::{Jwt, JwtBuilder, JwtSigner};
pub use claims::Claims;
pub use config::JwtConfig;
pub use error::*;
pub use types::*;
pub use verifier::{Validation, decode_header, verify, verify_at};
