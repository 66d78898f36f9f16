//! Outbound DNS provider interface.
//!
//! The workflow talks to the provider through the [`DnsProvider`] trait: one
//! availability query and one record-create call, both single-attempt with no
//! retries. [`cloudflare::CloudflareDns`] implements it against the
//! Cloudflare v4 JSON API.

use crate::error::Error;

pub mod cloudflare;

#[allow(clippy::module_name_repetitions)]
pub use cloudflare::CloudflareDns;

/// One DNS record to create at the provider. Transient: exists only for the
/// duration of a single provider call and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRequest {
    /// Resource record category, e.g. `A`, `CNAME`, `SRV`.
    pub record_type: String,
    /// The name as the user supplied it. Sent to the provider verbatim.
    pub name: String,
    /// Protocol-appropriate value, e.g. an IP address or hostname.
    pub content: String,
    /// Only meaningful for priority-aware record types such as `MX` or `SRV`.
    pub priority: Option<u16>,
}

/// An async trait describing the two provider operations the workflow needs.
#[async_trait::async_trait]
pub trait DnsProvider {
    /// True if the zone has no records for `name`.
    ///
    /// Fails closed: a transport error or non-success status during the check
    /// reports the name as not available.
    async fn name_available(&self, name: &str) -> bool;

    /// Create a record in the zone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Provider`] on a transport failure and
    /// [`Error::ProviderStatus`] on a non-success response status.
    async fn create_record(&self, record: &RecordRequest) -> Result<(), Error>;
}
