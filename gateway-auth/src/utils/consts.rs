pub mod env {
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const JWT_SECRET_B64_ENV_VAR: &str = "JWT_SECRET_B64";
    pub const TOKEN_TTL_MINUTES_ENV_VAR: &str = "TOKEN_TTL_MINUTES";
    pub const AUTHORIZED_IDENTITIES_ENV_VAR: &str = "AUTHORIZED_IDENTITIES";
    pub const ISSUED_USERNAME_ENV_VAR: &str = "ISSUED_USERNAME";
    pub const PRINCIPAL_ID_ENV_VAR: &str = "PRINCIPAL_ID";
    pub const LISTEN_ADDRESS_ENV_VAR: &str = "LISTEN_ADDRESS";
}

pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;
pub const DEFAULT_AUTHORIZED_IDENTITY: &str = "user1";
pub const DEFAULT_PRINCIPAL_ID: &str = "user";
pub const DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0:3000";

pub const POLICY_VERSION: &str = "2012-10-17";
pub const INVOKE_ACTION: &str = "execute-api:Invoke";
