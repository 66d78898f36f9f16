//! Cloudflare v4 API implementation of the [`DnsProvider`][super::DnsProvider] trait.

use crate::config::Shared;
use crate::error::Error;
use crate::provider::{DnsProvider, RecordRequest};
use serde::{Deserialize, Serialize};

/// Records are created with the provider's "automatic" TTL sentinel.
const AUTOMATIC_TTL: u32 = 1;

/// A [`DnsProvider`] speaking the Cloudflare v4 JSON API with a bearer token.
///
/// Holds a [`reqwest::Client`]; cloning shares the underlying connection pool.
#[derive(Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct CloudflareDns {
    http: reqwest::Client,
    config: Shared,
}

#[derive(Deserialize)]
struct ListRecordsResponse {
    result: Vec<serde_json::Value>,
}

#[derive(Serialize)]
struct CreateRecordBody<'a> {
    #[serde(rename = "type")]
    record_type: &'a str,
    name: &'a str,
    content: &'a str,
    ttl: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<u16>,
}

impl CloudflareDns {
    #[must_use]
    pub fn new(config: Shared) -> Self {
        CloudflareDns {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn records_url(&self) -> String {
        format!(
            "{}/zones/{}/dns_records",
            self.config.api_endpoint, self.config.zone_id
        )
    }
}

#[async_trait::async_trait]
impl DnsProvider for CloudflareDns {
    async fn name_available(&self, name: &str) -> bool {
        let url = self.records_url();
        tracing::debug!(url = %url, name = %name, "listing records for availability check");

        let response = match self
            .http
            .get(&url)
            .bearer_auth(&self.config.api_token)
            .query(&[("name", name)])
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!("availability check for \"{name}\" failed: {err}");
                return false;
            }
        };

        if !response.status().is_success() {
            tracing::warn!(
                "availability check for \"{name}\" returned status {}",
                response.status()
            );
            return false;
        }

        match response.json::<ListRecordsResponse>().await {
            Ok(listing) => listing.result.is_empty(),
            Err(err) => {
                tracing::warn!("availability check for \"{name}\" returned bad JSON: {err}");
                false
            }
        }
    }

    async fn create_record(&self, record: &RecordRequest) -> Result<(), Error> {
        let url = self.records_url();
        tracing::debug!(url = %url, name = %record.name, record_type = %record.record_type, "creating record");

        let body = CreateRecordBody {
            record_type: &record.record_type,
            name: &record.name,
            content: &record.content,
            ttl: AUTOMATIC_TTL,
            priority: record.priority,
        };
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Error::ProviderStatus(status))
        }
    }
}
