use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claims carried by a gateway token.
///
/// `username` and `exp` are required; anything else the issuer was handed is
/// kept in `extra` so it survives a decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub exp: i64, // Expiration, seconds since epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>, // Not before, seconds since epoch
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Identity claims handed to the issuer before `exp` is attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityClaims {
    pub username: String,
}

impl IdentityClaims {
    pub fn new(username: impl Into<String>) -> Self {
        IdentityClaims {
            username: username.into(),
        }
    }
}
