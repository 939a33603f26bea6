use chrono::{DateTime, Utc};
use serde_json::Value;

#[derive(thiserror::Error, Debug)]
pub enum TokenError {
    #[error("missing_token")]
    Missing,
    #[error("malformed_token")]
    Malformed,
    #[error("invalid_encoding: {0}")]
    Encoding(String),
    #[error("invalid_payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("missing_expiration")]
    MissingExpiration,
}

/// Reads the `exp` claim (epoch seconds) from the payload segment of a
/// `header.payload.signature` credential. The signature is not checked.
pub fn expiration(token: &str) -> Result<f64, TokenError> {
    if token.is_empty() {
        return Err(TokenError::Missing);
    }
    let payload = token
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or(TokenError::Malformed)?;
    let bytes = base64_url::decode(payload.trim_end_matches('='))
        .map_err(|error| TokenError::Encoding(error.to_string()))?;
    let claims: Value = serde_json::from_slice(&bytes)?;
    claims
        .get("exp")
        .and_then(Value::as_f64)
        .ok_or(TokenError::MissingExpiration)
}

pub fn is_token_expired(token: &str) -> bool {
    is_token_expired_at(token, Utc::now())
}

/// Any token whose expiration cannot be read counts as expired.
pub fn is_token_expired_at(token: &str, now: DateTime<Utc>) -> bool {
    match expiration(token) {
        Ok(exp) => exp < now.timestamp_millis() as f64 / 1000.0,
        Err(TokenError::Missing) => true,
        Err(error) => {
            log::error!("Fail to check token expiration, error={error}");
            true
        }
    }
}
