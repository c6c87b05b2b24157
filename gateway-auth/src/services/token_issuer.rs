use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, Header};
use serde::Serialize;
use serde_json::Value;

use crate::domain::SecretKey;
use crate::errors::IssueTokenError;
use crate::utils::DEFAULT_TOKEN_TTL_MINUTES;

const HMAC_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

// Claims the verifier would reject or hold back, so a token carrying them
// could never be allowed.
const RESERVED_CLAIMS: [&str; 2] = ["aud", "nbf"];

/// Sign `claims` into a compact token that expires `ttl_minutes` from now.
///
/// `claims` must serialize to a JSON object carrying a string `username`
/// and neither `aud` nor `nbf`. Any `exp` already present is overwritten.
/// Only the HMAC family is accepted since the same secret verifies what it
/// signs.
pub fn issue_token<T>(
    claims: &T,
    secret: &SecretKey,
    ttl_minutes: i64,
    algorithm: Algorithm,
) -> Result<String, IssueTokenError>
where
    T: Serialize + ?Sized,
{
    if secret.is_empty() {
        return Err(IssueTokenError::Config("secret must not be empty"));
    }
    if ttl_minutes <= 0 {
        return Err(IssueTokenError::Config(
            "ttl must be a positive number of minutes",
        ));
    }
    if !HMAC_ALGORITHMS.contains(&algorithm) {
        return Err(IssueTokenError::Config("algorithm must be HS256, HS384 or HS512"));
    }

    let mut payload = match serde_json::to_value(claims)? {
        Value::Object(map) => map,
        _ => {
            return Err(IssueTokenError::Encoding(
                "claims must serialize to a JSON object".to_owned(),
            ))
        }
    };
    if !payload.get("username").is_some_and(Value::is_string) {
        return Err(IssueTokenError::Encoding(
            "claims must carry a string username".to_owned(),
        ));
    }
    if let Some(claim) = RESERVED_CLAIMS.iter().find(|c| payload.contains_key(**c)) {
        return Err(IssueTokenError::Encoding(format!(
            "claims must not carry {:?}",
            claim
        )));
    }

    let delta = Duration::try_minutes(ttl_minutes)
        .ok_or(IssueTokenError::Config("ttl out of range"))?;
    let exp = Utc::now()
        .checked_add_signed(delta)
        .ok_or(IssueTokenError::Config("ttl out of range"))?
        .timestamp();
    payload.insert("exp".to_owned(), Value::from(exp));

    let token = encode(&Header::new(algorithm), &payload, &secret.encoding_key())?;
    log::debug!("issued {:?} token expiring at {}", algorithm, exp);
    Ok(token)
}

/// [`issue_token`] with the 30 minute default lifetime and HS256.
pub fn issue_token_with_defaults<T>(
    claims: &T,
    secret: &SecretKey,
) -> Result<String, IssueTokenError>
where
    T: Serialize + ?Sized,
{
    issue_token(claims, secret, DEFAULT_TOKEN_TTL_MINUTES, Algorithm::HS256)
}
