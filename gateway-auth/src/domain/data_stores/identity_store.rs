/// Answers whether an identity taken from a verified token may be allowed.
pub trait IdentityStore: Send + Sync {
    fn is_authorized(&self, identity: &str) -> bool;
}
