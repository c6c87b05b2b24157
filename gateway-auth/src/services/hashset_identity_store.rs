use std::collections::HashSet;

use crate::domain::IdentityStore;

/// In-memory allow-list of identities.
#[derive(Debug, Default, Clone)]
pub struct HashsetIdentityStore {
    identities: HashSet<String>,
}

impl HashsetIdentityStore {
    pub fn from_identities<I, S>(identities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        HashsetIdentityStore {
            identities: identities.into_iter().map(Into::into).collect(),
        }
    }
}

impl IdentityStore for HashsetIdentityStore {
    fn is_authorized(&self, identity: &str) -> bool {
        self.identities.contains(identity)
    }
}
