//! Gateway-facing façade over the issuer and the verifier.
//!
//! Both halves only share the secret and the claim schema; the service just
//! bundles what the runtime configured at startup so the entry points don't
//! have to carry it around. Nothing in here is mutable after construction,
//! so one instance can be shared behind an `Arc` by every request.
use std::sync::Arc;

use jsonwebtoken::Algorithm;
use serde::Serialize;
use serde_json::Value;

use crate::domain::{
    AccessDecision, AuthorizerRequest, IdentityClaims, IdentityStore, SecretKey, TokenResponse,
};
use crate::errors::{IssueTokenError, Unauthorized};
use crate::services::{issue_token, HashsetIdentityStore, TokenVerifier};
use crate::utils::Config;

#[derive(Clone)]
pub struct TokenService {
    secret: SecretKey,
    token_ttl_minutes: i64,
    issued_username: String,
    verifier: TokenVerifier,
}

impl TokenService {
    pub fn new(config: &Config, identities: Arc<dyn IdentityStore>) -> Self {
        let verifier = TokenVerifier::new(config.secret().clone(), identities)
            .with_principal_id(config.principal_id());

        Self {
            secret: config.secret().clone(),
            token_ttl_minutes: config.token_ttl_minutes(),
            issued_username: config.issued_username().to_owned(),
            verifier,
        }
    }

    /// Build the service with an allow-list taken from `config`.
    pub fn from_config(config: &Config) -> Self {
        let identities =
            HashsetIdentityStore::from_identities(config.authorized_identities().iter().cloned());
        Self::new(config, Arc::new(identities))
    }

    pub fn verifier(&self) -> &TokenVerifier {
        &self.verifier
    }

    /// Sign `claims` with the configured secret and lifetime.
    pub fn issue<T>(&self, claims: &T) -> Result<String, IssueTokenError>
    where
        T: Serialize + ?Sized,
    {
        issue_token(claims, &self.secret, self.token_ttl_minutes, Algorithm::HS256)
    }

    /// Issuer entry point. The event is opaque and only triggers issuance
    /// for the configured identity.
    pub fn handle_issue(&self, _event: &Value) -> Result<TokenResponse, IssueTokenError> {
        let token = self.issue(&IdentityClaims::new(self.issued_username.as_str()))?;
        Ok(TokenResponse::ok(token))
    }

    /// Verifier entry point for the authorizer hook.
    pub fn authorize(&self, request: &AuthorizerRequest) -> Result<AccessDecision, Unauthorized> {
        self.verifier
            .verify(&request.authorization_token, &request.method_arn)
    }
}
