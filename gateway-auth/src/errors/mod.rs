mod issue_token;
mod verify_token;

pub use issue_token::*;
pub use verify_token::*;
