pub(crate) mod authorize;
pub(crate) mod issue_token;

pub use authorize::*;
pub use issue_token::*;
