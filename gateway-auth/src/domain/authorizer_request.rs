use serde::{Deserialize, Serialize};

/// Event delivered by the gateway's token authorizer hook.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizerRequest {
    // Passed to the verifier verbatim, no scheme prefix is stripped.
    pub authorization_token: String,
    pub method_arn: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}
