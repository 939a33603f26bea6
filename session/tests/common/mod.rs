#![allow(dead_code)]

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};

pub const TEST_SECRET: &[u8] = b"unistay-test-secret";

/// Signs `claims` as an HS256 JWT. The store never checks the signature.
pub(crate) fn sign(claims: &Value) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .expect("Claims should encode")
}

pub(crate) fn token_expiring_in(duration: Duration) -> String {
    let exp = (Utc::now() + duration).timestamp();
    sign(&json!({"sub": "ama@unistay.com", "exp": exp}))
}

pub(crate) fn valid_token() -> String {
    token_expiring_in(Duration::hours(1))
}

pub(crate) fn expired_token() -> String {
    token_expiring_in(Duration::hours(-1))
}

/// Builds `header.payload.sig` from a raw payload, for shapes a JWT library
/// refuses to produce.
pub(crate) fn raw_token(payload: &[u8]) -> String {
    format!(
        "{header}.{payload}.signature",
        header = base64_url::encode(r#"{"alg":"none"}"#),
        payload = base64_url::encode(payload),
    )
}
