use serde::{Deserialize, Serialize};

use crate::utils::{INVOKE_ACTION, POLICY_VERSION};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    Allow,
    Deny,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    pub action: String,
    pub effect: Effect,
    pub resource: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    pub version: String,
    pub statement: Vec<Statement>,
}

/// Document returned to the gateway's authorizer hook.
///
/// The policy is only attached when there is both an effect and a resource
/// to scope it to; otherwise the decision names the principal alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessDecision {
    pub principal_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_document: Option<PolicyDocument>,
}

impl AccessDecision {
    pub fn generate(principal_id: &str, effect: Option<Effect>, resource: &str) -> Self {
        let policy_document = match effect {
            Some(effect) if !resource.is_empty() => Some(PolicyDocument {
                version: POLICY_VERSION.to_owned(),
                statement: vec![Statement {
                    action: INVOKE_ACTION.to_owned(),
                    effect,
                    resource: resource.to_owned(),
                }],
            }),
            _ => None,
        };

        AccessDecision {
            principal_id: principal_id.to_owned(),
            policy_document,
        }
    }

    pub fn allow(principal_id: &str, resource: &str) -> Self {
        Self::generate(principal_id, Some(Effect::Allow), resource)
    }

    pub fn deny(principal_id: &str, resource: &str) -> Self {
        Self::generate(principal_id, Some(Effect::Deny), resource)
    }

    /// Effect of the single statement, if a policy is attached.
    pub fn effect(&self) -> Option<Effect> {
        self.policy_document
            .as_ref()
            .and_then(|doc| doc.statement.first())
            .map(|statement| statement.effect)
    }
}
