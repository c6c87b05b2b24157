use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;

use crate::{app_state::AppState, errors::IssueTokenError};

pub async fn issue_token(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, IssueTokenError> {
    // The event only triggers issuance; an empty or non-JSON body is fine.
    let event = serde_json::from_slice::<Value>(&body).unwrap_or(Value::Null);

    let response = state.token_service.handle_issue(&event)?;

    Ok(Json(response))
}
