use serde_json::{json, Value};

use gateway_auth::domain::{IdentityClaims, SecretKey};
use gateway_auth::services::issue_token_with_defaults;
use gateway_auth::utils::Config;

use crate::helpers::{TestApp, TEST_ARN};

#[tokio::test]
async fn should_return_allow_decision_for_issued_token() {
    let app = TestApp::new().await;
    let token = app.fresh_token().await;

    let response = app.authorize(&token, TEST_ARN).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "principalId": "user",
            "policyDocument": {
                "Version": "2012-10-17",
                "Statement": [{
                    "Action": "execute-api:Invoke",
                    "Effect": "Allow",
                    "Resource": TEST_ARN,
                }]
            }
        })
    );
}

#[tokio::test]
async fn should_return_401_if_signed_with_other_secret() {
    let app = TestApp::new().await;
    let token = issue_token_with_defaults(
        &IdentityClaims::new("user1"),
        &SecretKey::from("WrongSecretKey"),
    )
    .unwrap();

    let response = app.authorize(&token, TEST_ARN).await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(response.text().await.unwrap(), "Unauthorized");
}

#[tokio::test]
async fn should_return_401_if_malformed_token() {
    let app = TestApp::new().await;

    for token in ["malformed_jwt", "a.b", "a.b.c.d", "invalid.token.here"] {
        let response = app.authorize(token, TEST_ARN).await;
        assert_eq!(response.status().as_u16(), 401, "{token}");
    }
}

#[tokio::test]
async fn should_return_401_if_bearer_prefixed() {
    let app = TestApp::new().await;
    let token = app.fresh_token().await;

    let response = app.authorize(&format!("Bearer {}", token), TEST_ARN).await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_401_if_identity_not_authorized() {
    let config = Config::new("ExampleSecretKey").with_issued_username("user2");
    let app = TestApp::with_config(config).await;
    let token = app.fresh_token().await;

    let response = app.authorize(&token, TEST_ARN).await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_401_if_event_is_malformed() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(&format!("{}/authorize", &app.address))
        .json(&json!({ "token": "x.y.z" }))
        .send()
        .await
        .expect("Failed to execute authorize request.");

    assert_eq!(response.status().as_u16(), 401);
}
