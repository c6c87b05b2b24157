use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::{app_state::AppState, domain::AuthorizerRequest, errors::Unauthorized};

pub async fn authorize(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, Unauthorized> {
    let request = serde_json::from_slice::<AuthorizerRequest>(&body).map_err(|e| {
        log::warn!("rejecting malformed authorizer event: {}", e);
        Unauthorized
    })?;

    let decision = state.token_service.authorize(&request)?;

    Ok(Json(decision))
}
