use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum IssueTokenError {
    #[error("issuer misconfigured: {0}")]
    Config(&'static str),

    #[error("could not encode claims: {0}")]
    Encoding(String),
}

impl From<serde_json::Error> for IssueTokenError {
    fn from(err: serde_json::Error) -> Self {
        IssueTokenError::Encoding(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for IssueTokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        IssueTokenError::Encoding(err.to_string())
    }
}

impl IntoResponse for IssueTokenError {
    fn into_response(self) -> axum::response::Response {
        log::error!("token issuance failed: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Something went wrong, please try again later.",
        )
            .into_response()
    }
}
