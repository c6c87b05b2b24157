pub mod access_decision;
pub mod authorizer_request;
pub mod claims;
pub mod data_stores;
pub mod secret_key;
pub mod token_response;

pub use access_decision::*;
pub use authorizer_request::*;
pub use claims::*;
pub use data_stores::*;
pub use secret_key::*;
pub use token_response::*;
