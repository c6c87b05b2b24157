mod authorize;
mod helpers;
mod issue_token;
