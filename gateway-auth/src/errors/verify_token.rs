use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

/// Why a presented token was rejected. Never leaves the verifier: every
/// variant collapses into [`Unauthorized`] at the boundary.
#[derive(Error, Debug)]
pub enum VerifyTokenError {
    #[error("token has {0} segments, expected 3")]
    Structural(usize),

    #[error("signature or payload rejected: {0}")]
    Signature(#[from] jsonwebtoken::errors::Error),

    #[error("token expired at {exp}")]
    Expired { exp: i64 },

    #[error("token not valid before {nbf}")]
    NotYetValid { nbf: i64 },

    #[error("identity {0:?} is not authorized")]
    IdentityMismatch(String),
}

/// The only signal a caller of the verifier ever sees.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Unauthorized")]
pub struct Unauthorized;

impl From<VerifyTokenError> for Unauthorized {
    fn from(err: VerifyTokenError) -> Self {
        log::warn!("rejecting token: {}", err);
        Unauthorized
    }
}

impl IntoResponse for Unauthorized {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::UNAUTHORIZED, self.to_string()).into_response()
    }
}
