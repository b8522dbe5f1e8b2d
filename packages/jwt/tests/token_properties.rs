//! Property tests: round trip, tamper detection, secret separation

use hmac_jwt::{Algorithm, Claims, JwtErrorKind, Validation, sign_at, verify_at};
use proptest::prelude::*;
use serde_json::Value;

const NOW: u64 = 1_700_000_000;
const BASE64URL: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

fn algorithm() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL.to_vec())
}

fn claim_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        "[ -~]{0,24}".prop_map(Value::from),
        Just(Value::Null),
    ]
}

fn claims() -> impl Strategy<Value = Claims> {
    prop::collection::vec(("[a-z_]{1,10}", claim_value()), 0..8).prop_map(|pairs| {
        pairs
            .into_iter()
            .filter(|(key, _)| key != "iat" && key != "exp")
            .collect()
    })
}

fn secret() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..96)
}

// HMAC zero-pads short keys, so keys differing only in trailing zeros are the same key
fn effective_key(secret: &[u8]) -> &[u8] {
    let end = secret.iter().rposition(|b| *b != 0).map_or(0, |i| i + 1);
    &secret[..end]
}

proptest! {
    #[test]
    fn round_trip_adds_only_iat(claims in claims(), secret in secret(), alg in algorithm()) {
        let token = sign_at(&claims, &secret, alg, NOW).unwrap();
        let verified = verify_at(token.as_str(), &secret, NOW, &Validation::default()).unwrap();

        let mut expected = claims.clone();
        expected.insert("iat", NOW);
        prop_assert_eq!(verified, expected);
    }

    #[test]
    fn round_trip_with_ttl(claims in claims(), ttl in 1i64..=86_400, secret in secret()) {
        let token = sign_at(&claims.clone().expires_in(ttl), &secret, Algorithm::HS256, NOW).unwrap();
        let verified = verify_at(token.as_str(), &secret, NOW, &Validation::default()).unwrap();

        prop_assert_eq!(verified.issued_at(), Some(NOW));
        prop_assert_eq!(verified.expires_at(), Some(NOW + ttl as u64));
        prop_assert_eq!(verified.len(), claims.len() + 2);
    }

    #[test]
    fn any_single_character_change_is_rejected(
        claims in claims(),
        alg in algorithm(),
        position in any::<prop::sample::Index>(),
        replacement in prop::sample::select(BASE64URL.iter().copied().chain([b'.']).collect::<Vec<u8>>()),
    ) {
        let token = sign_at(&claims, "secret", alg, NOW).unwrap().into_string();
        let mut bytes = token.clone().into_bytes();
        let i = position.index(bytes.len());
        prop_assume!(bytes[i] != replacement);
        bytes[i] = replacement;
        let tampered = String::from_utf8(bytes).unwrap();

        let kind = verify_at(&tampered, "secret", NOW, &Validation::default())
            .unwrap_err()
            .kind();
        prop_assert!(
            matches!(
                kind,
                JwtErrorKind::InvalidSignature
                    | JwtErrorKind::MalformedToken
                    | JwtErrorKind::UnsupportedAlgorithm
            ),
            "unexpected {:?} for {}",
            kind,
            tampered
        );
    }

    #[test]
    fn other_secret_is_invalid_signature(
        claims in claims(),
        alg in algorithm(),
        s1 in secret(),
        s2 in secret(),
    ) {
        prop_assume!(effective_key(&s1) != effective_key(&s2));
        let token = sign_at(&claims, &s1, alg, NOW).unwrap();
        let kind = verify_at(token.as_str(), &s2, NOW, &Validation::default())
            .unwrap_err()
            .kind();
        prop_assert_eq!(kind, JwtErrorKind::InvalidSignature);
    }
}
