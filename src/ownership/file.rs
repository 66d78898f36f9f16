//! A JSON file-backed implementation of the [`OwnershipStore`][super::OwnershipStore] trait.
//!
//! Wraps an [`InMemoryOwnershipStore`][super::memory::InMemoryOwnershipStore]
//! instance, rewriting a JSON file on disk after each append so ownership
//! survives restarts.

use crate::error::Error;
use crate::ownership::memory::InMemoryOwnershipStore;
use crate::ownership::OwnershipStore;
use std::io::ErrorKind;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// A file-backed ownership store. After each append the JSON file on disk is
/// rewritten wholesale with the full map. The write is a plain truncate and
/// rewrite, not an atomic rename; a crash mid-write loses the previous
/// content (accepted limitation).
#[derive(Default, Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct FileOwnershipStore {
    owners: InMemoryOwnershipStore,
    path: String,
}

impl FileOwnershipStore {
    /// Save the full ownership map as JSON to the store's configured path,
    /// or return an Error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidJSON`] if the map can't be serialized.
    ///
    /// Returns [`Error::IO`] if the serialized state can't be written to the
    /// backing file path.
    pub async fn save(&self) -> Result<(), Error> {
        let data = serde_json::to_string_pretty(&self.owners)?;
        let mut output_file = File::create(&self.path).await?;
        output_file.write_all(data.as_bytes()).await?;
        output_file.flush().await?;
        Ok(())
    }

    /// Load a [`FileOwnershipStore`] from the JSON document at the given
    /// path, or return an Error.
    ///
    /// A missing file is the expected first-run state and yields an empty
    /// store; the file is only created once the first append persists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidJSON`] if the file exists but holds invalid
    /// JSON. Callers must treat this as fatal rather than proceed with a
    /// partially-trusted ownership table.
    ///
    /// Returns [`Error::IO`] if the path exists but can't be opened or read.
    pub async fn try_from_file(p: &str) -> Result<Self, Error> {
        let contents = match File::open(p).await {
            Ok(mut f) => {
                let mut buf = vec![];
                f.read_to_end(&mut buf).await?;
                buf
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!("no ownership state at {p}, starting empty");
                return Ok(Self {
                    owners: InMemoryOwnershipStore::default(),
                    path: p.to_string(),
                });
            }
            Err(err) => return Err(Error::IO(err)),
        };

        let owners: InMemoryOwnershipStore = serde_json::from_slice(&contents)?;
        Ok(Self {
            owners,
            path: p.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl OwnershipStore for FileOwnershipStore {
    async fn is_owned_by_other(&self, name: &str, requester: &str) -> bool {
        self.owners.is_owned_by_other(name, requester).await
    }

    async fn is_owned_by(&self, name: &str, requester: &str) -> bool {
        self.owners.is_owned_by(name, requester).await
    }

    async fn count_for(&self, requester: &str) -> usize {
        self.owners.count_for(requester).await
    }

    async fn names_for(&self, requester: &str) -> Option<Vec<String>> {
        self.owners.names_for(requester).await
    }

    async fn append(&mut self, requester: &str, name: &str) -> Result<(), Error> {
        self.owners.append(requester, name).await?;
        self.save().await?;
        Ok(())
    }
}
