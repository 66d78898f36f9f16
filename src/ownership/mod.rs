//! Subdomain ownership storage.
//!
//! Maps an opaque user identifier to the ordered list of subdomain names that
//! user has registered. A name appears under at most one owner; entries are
//! appended on accepted registrations and never removed.
//!
//! Two implementations are provided, [`memory::InMemoryOwnershipStore`] and
//! [`file::FileOwnershipStore`]. The former is not durable across restarts.
//! The latter rewrites a JSON file on disk after each append and loads that
//! state again on startup.

use crate::error::Error;
use std::sync::Arc;
use tokio::sync::RwLock;

pub mod file;
pub mod memory;

#[allow(clippy::module_name_repetitions)]
pub use file::FileOwnershipStore;
#[allow(clippy::module_name_repetitions)]
pub use memory::InMemoryOwnershipStore;

/// `DynOwnershipStore` is a type alias for an [`OwnershipStore`] shared by
/// multiple read/write consumers that coordinate through an [`Arc`] and a
/// [`RwLock`] wrapping the store.
///
/// Mutating paths must hold the write lock across the whole
/// read-decide-append-persist sequence so that two concurrent registrations
/// cannot both observe a pre-mutation quota count.
#[allow(clippy::module_name_repetitions)]
pub type DynOwnershipStore = Arc<RwLock<dyn OwnershipStore + Send + Sync>>;

/// An async trait describing storage of the user-to-subdomains ownership map.
#[async_trait::async_trait]
pub trait OwnershipStore {
    /// True if `name` appears in the list of some user other than `requester`.
    async fn is_owned_by_other(&self, name: &str, requester: &str) -> bool;

    /// True if `name` appears in `requester`'s own list.
    async fn is_owned_by(&self, name: &str, requester: &str) -> bool;

    /// Number of names currently owned by `requester`.
    async fn count_for(&self, requester: &str) -> usize;

    /// The names owned by `requester`, or `None` if the store has no entry
    /// for that identifier.
    async fn names_for(&self, requester: &str) -> Option<Vec<String>>;

    /// Append `name` to `requester`'s list, creating the entry if absent.
    ///
    /// The caller must have already validated quota and uniqueness.
    async fn append(&mut self, requester: &str, name: &str) -> Result<(), Error>;
}
