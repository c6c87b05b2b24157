use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::spawn;

use gateway_auth::app_router;
use gateway_auth::app_state::AppState;
use gateway_auth::utils::Config;

pub const TEST_SECRET: &str = "ExampleSecretKey";
pub const TEST_ARN: &str = "arn:aws:execute-api:us-east-1:123456789012:abcdef/prod/GET/items";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeBody {
    pub authorization_token: String,
    pub method_arn: String,
    #[serde(rename = "type")]
    pub kind: String,
}

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(Config::new(TEST_SECRET)).await
    }

    pub async fn with_config(config: Config) -> Self {
        let app_state = AppState::from_config(&config);
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed binding to an ephemeral port");

        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let server = axum::serve(listener, app_router(app_state));

        spawn(async move {
            if let Err(e) = server.await {
                eprintln!("Test server error: {}", e);
            }
        });

        TestApp {
            address,
            http_client: Client::new(),
        }
    }

    pub async fn issue_token(&self, event: &Value) -> Response {
        self.http_client
            .post(&format!("{}/token", &self.address))
            .json(event)
            .send()
            .await
            .expect("Failed to execute token request.")
    }

    /// Issue a token through the HTTP surface and return its body.
    pub async fn fresh_token(&self) -> String {
        let response = self.issue_token(&Value::Null).await;
        assert_eq!(response.status().as_u16(), 200);
        let body: Value = response.json().await.expect("token response is JSON");
        body["body"].as_str().expect("token body").to_owned()
    }

    pub async fn authorize(&self, token: &str, method_arn: &str) -> Response {
        let body = AuthorizeBody {
            authorization_token: token.to_owned(),
            method_arn: method_arn.to_owned(),
            kind: "TOKEN".to_owned(),
        };

        self.http_client
            .post(&format!("{}/authorize", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute authorize request.")
    }
}
