use crate::error::Error;
use crate::ownership::OwnershipStore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An in-memory ownership map. Serializes transparently as
/// `{ "<user id>": ["<subdomain>", ...], ... }`, the on-disk document shape.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct InMemoryOwnershipStore {
    owners: HashMap<String, Vec<String>>,
}

#[async_trait::async_trait]
impl OwnershipStore for InMemoryOwnershipStore {
    async fn is_owned_by_other(&self, name: &str, requester: &str) -> bool {
        self.owners
            .iter()
            .any(|(owner, names)| owner != requester && names.iter().any(|n| n == name))
    }

    async fn is_owned_by(&self, name: &str, requester: &str) -> bool {
        self.owners
            .get(requester)
            .is_some_and(|names| names.iter().any(|n| n == name))
    }

    async fn count_for(&self, requester: &str) -> usize {
        self.owners.get(requester).map_or(0, Vec::len)
    }

    async fn names_for(&self, requester: &str) -> Option<Vec<String>> {
        self.owners.get(requester).cloned()
    }

    async fn append(&mut self, requester: &str, name: &str) -> Result<(), Error> {
        self.owners
            .entry(requester.to_string())
            .or_default()
            .push(name.to_string());
        Ok(())
    }
}
