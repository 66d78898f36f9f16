//! Error types.

/// Error enumerates the possible Zonekeeper error states.
///
/// Business-rule rejections (quota exceeded, name owned by someone else) are
/// not errors; they are [`workflow::RegisterOutcome`][crate::workflow::RegisterOutcome]
/// variants surfaced to the requester as ordinary replies.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned at startup when a required environment variable is unset or
    /// empty. The process must not proceed with a partial configuration.
    #[error("missing required environment variable {0}")]
    MissingConfig(&'static str),

    /// Returned when a generic IO error occurs.
    #[error("an IO error occurred")]
    IO(#[from] std::io::Error),

    /// Returned when processing JSON from disk (e.g. trying to load a
    /// [`FileOwnershipStore`][crate::ownership::file::FileOwnershipStore])
    /// fails due to invalid JSON content. Fatal at startup: the process must
    /// not run against a partially-trusted ownership table.
    #[error("invalid JSON")]
    InvalidJSON(#[from] serde_json::Error),

    /// Returned when a request to the DNS provider fails at the transport
    /// level before a status code is available.
    #[error("DNS provider request failed")]
    Provider(#[from] reqwest::Error),

    /// Returned when the DNS provider answers a record-create request with a
    /// non-success status. No error detail from the response body is retained.
    #[error("DNS provider returned status {0}")]
    ProviderStatus(reqwest::StatusCode),
}
