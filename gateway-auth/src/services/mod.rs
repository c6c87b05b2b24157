pub mod hashset_identity_store;
pub mod token_issuer;
pub mod token_service;
pub mod token_verifier;

pub use hashset_identity_store::*;
pub use token_issuer::*;
pub use token_service::*;
pub use token_verifier::*;
