use std::env;

use base64::engine::general_purpose::{STANDARD as B64_STD, URL_SAFE_NO_PAD as B64_URL};
use base64::Engine;
use dotenvy::dotenv;
use thiserror::Error;

use super::consts::env::*;
use super::consts::{
    DEFAULT_AUTHORIZED_IDENTITY, DEFAULT_LISTEN_ADDRESS, DEFAULT_PRINCIPAL_ID,
    DEFAULT_TOKEN_TTL_MINUTES,
};
use crate::domain::SecretKey;

#[derive(Clone, Debug)]
pub struct Config {
    secret: SecretKey,
    token_ttl_minutes: i64,
    authorized_identities: Vec<String>,
    issued_username: String,
    principal_id: String,
    listen_address: String,
}

impl Config {
    pub fn secret(&self) -> &SecretKey {
        &self.secret
    }
    pub fn token_ttl_minutes(&self) -> i64 {
        self.token_ttl_minutes
    }
    pub fn authorized_identities(&self) -> &[String] {
        &self.authorized_identities
    }
    pub fn issued_username(&self) -> &str {
        &self.issued_username
    }
    pub fn principal_id(&self) -> &str {
        &self.principal_id
    }
    pub fn listen_address(&self) -> &str {
        &self.listen_address
    }

    /// Config with the given secret and defaults for everything else.
    pub fn new(secret: impl Into<SecretKey>) -> Self {
        Self {
            secret: secret.into(),
            token_ttl_minutes: DEFAULT_TOKEN_TTL_MINUTES,
            authorized_identities: vec![DEFAULT_AUTHORIZED_IDENTITY.to_owned()],
            issued_username: DEFAULT_AUTHORIZED_IDENTITY.to_owned(),
            principal_id: DEFAULT_PRINCIPAL_ID.to_owned(),
            listen_address: DEFAULT_LISTEN_ADDRESS.to_owned(),
        }
    }

    pub fn with_token_ttl_minutes(mut self, minutes: i64) -> Self {
        self.token_ttl_minutes = minutes;
        self
    }

    pub fn with_authorized_identities<I, S>(mut self, identities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authorized_identities = identities.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_issued_username(mut self, username: impl Into<String>) -> Self {
        self.issued_username = username.into();
        self
    }

    pub fn with_principal_id(mut self, principal_id: impl Into<String>) -> Self {
        self.principal_id = principal_id.into();
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();

        let secret = load_secret()?;

        let token_ttl_minutes = match opt_var(TOKEN_TTL_MINUTES_ENV_VAR) {
            Some(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|minutes| *minutes > 0)
                .ok_or(ConfigError::Invalid(TOKEN_TTL_MINUTES_ENV_VAR))?,
            None => DEFAULT_TOKEN_TTL_MINUTES,
        };

        let authorized_identities = match opt_var(AUTHORIZED_IDENTITIES_ENV_VAR) {
            Some(raw) => parse_list(&raw),
            None => vec![DEFAULT_AUTHORIZED_IDENTITY.to_owned()],
        };
        if authorized_identities.is_empty() {
            return Err(ConfigError::Empty(AUTHORIZED_IDENTITIES_ENV_VAR));
        }

        let issued_username = opt_var(ISSUED_USERNAME_ENV_VAR)
            .unwrap_or_else(|| DEFAULT_AUTHORIZED_IDENTITY.into());
        let principal_id =
            opt_var(PRINCIPAL_ID_ENV_VAR).unwrap_or_else(|| DEFAULT_PRINCIPAL_ID.into());
        let listen_address =
            opt_var(LISTEN_ADDRESS_ENV_VAR).unwrap_or_else(|| DEFAULT_LISTEN_ADDRESS.into());

        Ok(Self {
            secret,
            token_ttl_minutes,
            authorized_identities,
            issued_username,
            principal_id,
            listen_address,
        })
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),
    #[error("invalid env var {0}")]
    Invalid(&'static str),
    #[error("decode error in {0}")]
    Decode(&'static str),
    #[error("env var {0} must not be empty")]
    Empty(&'static str),
}

fn load_secret() -> Result<SecretKey, ConfigError> {
    let secret = match (opt_var(JWT_SECRET_ENV_VAR), opt_var(JWT_SECRET_B64_ENV_VAR)) {
        (Some(raw), _) => {
            if raw.is_empty() {
                return Err(ConfigError::Empty(JWT_SECRET_ENV_VAR));
            }
            SecretKey::from(raw)
        }
        (None, Some(encoded)) => {
            let bytes = decode_b64_any(&encoded)
                .map_err(|_| ConfigError::Decode(JWT_SECRET_B64_ENV_VAR))?;
            if bytes.is_empty() {
                return Err(ConfigError::Empty(JWT_SECRET_B64_ENV_VAR));
            }
            SecretKey::new(bytes)
        }
        (None, None) => return Err(ConfigError::Missing(JWT_SECRET_ENV_VAR)),
    };
    Ok(secret)
}

fn opt_var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

fn decode_b64_any(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    // Try URL-safe (no padding) first, then standard.
    B64_URL.decode(s).or_else(|_| B64_STD.decode(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_defaults() {
        let config = Config::new("ExampleSecretKey");
        assert_eq!(config.token_ttl_minutes(), 30);
        assert_eq!(config.authorized_identities(), ["user1".to_owned()]);
        assert_eq!(config.issued_username(), "user1");
        assert_eq!(config.principal_id(), "user");
        assert_eq!(config.listen_address(), "0.0.0.0:3000");
        assert_eq!(config.secret(), &SecretKey::from("ExampleSecretKey"));
    }

    #[test]
    fn builders_override_defaults() {
        let config = Config::new("k")
            .with_token_ttl_minutes(5)
            .with_authorized_identities(["alice", "bob"])
            .with_issued_username("alice")
            .with_principal_id("svc");
        assert_eq!(config.token_ttl_minutes(), 5);
        assert_eq!(config.authorized_identities(), ["alice", "bob"]);
        assert_eq!(config.issued_username(), "alice");
        assert_eq!(config.principal_id(), "svc");
    }

    #[test]
    fn parse_list_trims_and_skips_blanks() {
        assert_eq!(parse_list(" user1, ,bob ,"), vec!["user1", "bob"]);
        assert!(parse_list(" , ").is_empty());
    }

    #[test]
    fn decode_b64_accepts_both_alphabets() {
        assert_eq!(decode_b64_any("a2V5").unwrap(), b"key");
        assert_eq!(decode_b64_any("a2V5Pz8_").unwrap(), b"key???");
        assert_eq!(decode_b64_any("a2V5Pz8/").unwrap(), b"key???");
    }
}
