use std::sync::Arc;

use crate::services::TokenService;
use crate::utils::Config;

// Read-only after startup, so no lock around it.
pub type TokenServiceType = Arc<TokenService>;

#[derive(Clone)]
pub struct AppState {
    pub token_service: TokenServiceType,
}

impl AppState {
    pub fn new(token_service: TokenServiceType) -> Self {
        Self { token_service }
    }

    /// State with an allow-list taken from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(TokenService::from_config(config)))
    }
}
