//! Token verification for the gateway authorizer hook.
//!
//! A presented token goes through a single pass, stopping at the first
//! failure:
//! 1. structural check (exactly three dot-separated segments, no decode)
//! 2. signature and payload decode with the expected HMAC algorithm
//! 3. time window, where `exp <= now` counts as expired and `nbf > now`
//!    as not yet valid
//! 4. identity lookup against the injected [`IdentityStore`]
//!
//! Failures are typed internally as [`VerifyTokenError`] and collapse into
//! the opaque [`Unauthorized`] before reaching the caller. Only a passing
//! token produces an `Allow` decision.
use std::sync::Arc;

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, Algorithm, Validation};

use crate::domain::{AccessDecision, Claims, IdentityStore, SecretKey};
use crate::errors::{Unauthorized, VerifyTokenError};
use crate::utils::DEFAULT_PRINCIPAL_ID;

#[derive(Clone)]
pub struct TokenVerifier {
    secret: SecretKey,
    identities: Arc<dyn IdentityStore>,
    principal_id: String,
    algorithm: Algorithm,
}

impl TokenVerifier {
    pub fn new(secret: SecretKey, identities: Arc<dyn IdentityStore>) -> Self {
        Self {
            secret,
            identities,
            principal_id: DEFAULT_PRINCIPAL_ID.to_owned(),
            algorithm: Algorithm::HS256,
        }
    }

    pub fn with_principal_id(mut self, principal_id: impl Into<String>) -> Self {
        self.principal_id = principal_id.into();
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Verify `presented_token` and allow it to invoke `method_arn`.
    pub fn verify(
        &self,
        presented_token: &str,
        method_arn: &str,
    ) -> Result<AccessDecision, Unauthorized> {
        self.verify_at(presented_token, method_arn, Utc::now())
    }

    /// [`verify`](Self::verify) against an explicit clock.
    pub fn verify_at(
        &self,
        presented_token: &str,
        method_arn: &str,
        now: DateTime<Utc>,
    ) -> Result<AccessDecision, Unauthorized> {
        let claims = self.check(presented_token, now.timestamp())?;
        log::info!("authorized {:?} for {}", claims.username, method_arn);
        Ok(AccessDecision::allow(&self.principal_id, method_arn))
    }

    fn check(&self, token: &str, now: i64) -> Result<Claims, VerifyTokenError> {
        let segments = token.split('.').count();
        if segments != 3 {
            return Err(VerifyTokenError::Structural(segments));
        }

        // exp and nbf are checked below against `now`, with no leeway.
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        let claims = decode::<Claims>(token, &self.secret.decoding_key(), &validation)?.claims;

        if claims.exp <= now {
            return Err(VerifyTokenError::Expired { exp: claims.exp });
        }

        if let Some(nbf) = claims.nbf {
            if nbf > now {
                return Err(VerifyTokenError::NotYetValid { nbf });
            }
        }

        if !self.identities.is_authorized(&claims.username) {
            return Err(VerifyTokenError::IdentityMismatch(claims.username));
        }

        Ok(claims)
    }
}

/// One-shot verification without building a [`TokenVerifier`] first.
pub fn verify_token(
    presented_token: &str,
    secret: &SecretKey,
    method_arn: &str,
    identities: Arc<dyn IdentityStore>,
) -> Result<AccessDecision, Unauthorized> {
    TokenVerifier::new(secret.clone(), identities).verify(presented_token, method_arn)
}
