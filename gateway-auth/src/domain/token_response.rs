use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// HTTP-shaped payload the issuer hands back to the gateway runtime.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub is_base64_encoded: bool,
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl TokenResponse {
    pub fn ok(token: String) -> Self {
        TokenResponse {
            is_base64_encoded: false,
            status_code: 200,
            headers: HashMap::new(),
            body: token,
        }
    }
}
