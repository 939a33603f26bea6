mod common;

use chrono::{Duration, TimeZone, Utc};
use common::{expired_token, raw_token, sign, valid_token};
use serde_json::json;
use session::token::{expiration, is_token_expired, is_token_expired_at, TokenError};

#[test]
fn test_future_expiration_is_valid() {
    assert!(!is_token_expired(&valid_token()));
}

#[test]
fn test_past_expiration_is_expired() {
    assert!(is_token_expired(&expired_token()));
}

#[test]
fn test_expiration_against_fixed_clock() {
    let token = sign(&json!({"exp": 1_700_000_000}));
    let before = Utc.timestamp_opt(1_699_999_999, 0).unwrap();
    let after = Utc.timestamp_opt(1_700_000_001, 0).unwrap();

    assert!(!is_token_expired_at(&token, before));
    assert!(is_token_expired_at(&token, after));

    // Sub-second precision: half a second past exp is already expired
    let half_past = Utc.timestamp_opt(1_700_000_000, 500_000_000).unwrap();
    assert!(is_token_expired_at(&token, half_past));
}

#[test]
fn test_missing_exp_is_expired() {
    let token = sign(&json!({"sub": "ama@unistay.com"}));
    assert!(is_token_expired(&token));
    assert!(matches!(
        expiration(&token),
        Err(TokenError::MissingExpiration)
    ));
}

#[test]
fn test_non_numeric_exp_is_expired() {
    let token = raw_token(br#"{"exp":"tomorrow"}"#);
    assert!(is_token_expired(&token));
}

#[test]
fn test_malformed_tokens_are_expired() {
    let far_future = Utc::now() + Duration::days(365);
    let cases = [
        "",
        "no-dots-at-all",
        "header.",
        "header..signature",
        "header.%%%not-base64%%%.signature",
    ];
    for token in cases {
        assert!(
            is_token_expired_at(token, far_future),
            "token {token:?} should be expired"
        );
    }
}

#[test]
fn test_undecodable_payloads_are_expired() {
    // Valid base64, invalid JSON
    assert!(is_token_expired(&raw_token(b"not json")));
    // Valid base64, invalid UTF-8
    assert!(is_token_expired(&raw_token(&[0xff, 0xfe, 0xfd])));
    // JSON but not an object
    assert!(is_token_expired(&raw_token(b"[1, 2, 3]")));
}

#[test]
fn test_two_segments_are_enough() {
    let exp = (Utc::now() + Duration::hours(1)).timestamp();
    let payload = base64_url::encode(&json!({"exp": exp}).to_string());
    let token = format!("header.{payload}");
    assert!(!is_token_expired(&token));
}

#[test]
fn test_padded_payload_is_accepted() {
    let exp = (Utc::now() + Duration::hours(1)).timestamp();
    let mut payload = base64_url::encode(&json!({"exp": exp}).to_string());
    while payload.len() % 4 != 0 {
        payload.push('=');
    }
    let token = format!("header.{payload}.signature");
    assert!(!is_token_expired(&token));
}

#[test]
fn test_expiration_reads_claim() -> anyhow::Result<()> {
    let token = sign(&json!({"exp": 1_700_000_000}));
    assert_eq!(expiration(&token)?, 1_700_000_000.0);
    assert!(matches!(expiration(""), Err(TokenError::Missing)));
    assert!(matches!(expiration("abc"), Err(TokenError::Malformed)));
    Ok(())
}
