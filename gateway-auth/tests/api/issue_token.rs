use serde_json::{json, Value};

use gateway_auth::utils::Config;

use crate::helpers::TestApp;

#[tokio::test]
async fn should_return_http_shaped_token_response() {
    let app = TestApp::new().await;

    let response = app.issue_token(&json!({ "resource": "/login" })).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["isBase64Encoded"], false);
    assert_eq!(body["statusCode"], 200);
    assert_eq!(body["headers"], json!({}));
    assert_eq!(body["body"].as_str().unwrap().split('.').count(), 3);
}

#[tokio::test]
async fn should_accept_an_empty_event() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(&format!("{}/token", &app.address))
        .send()
        .await
        .expect("Failed to execute token request.");

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn should_return_500_if_secret_is_empty() {
    let app = TestApp::with_config(Config::new("")).await;

    let response = app.issue_token(&Value::Null).await;

    assert_eq!(response.status().as_u16(), 500);
    let text = response.text().await.unwrap();
    assert!(!text.contains("secret"));
}
