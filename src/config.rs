//! Process configuration, sourced from the environment.
//!
//! Every knob comes from an environment variable. All are required except the
//! provider endpoint and the store path, which have defaults. A missing
//! required variable is fatal at startup.

use crate::error::Error;
use std::env;
use std::sync::Arc;

pub type Shared = Arc<Config>;

const DEFAULT_API_ENDPOINT: &str = "https://api.cloudflare.com/client/v4";
const DEFAULT_STORE_PATH: &str = "user_data.json";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the DNS provider API.
    pub api_endpoint: String,
    /// Provider zone the managed domain lives in.
    pub zone_id: String,
    /// Bearer token for the provider API.
    pub api_token: String,
    /// Managed domain suffix, e.g. `.example.dev`.
    pub domain_suffix: String,
    /// Role identifier required for the admin listing command.
    pub admin_role: String,
    /// Chat platform bot token, consumed by the hosting front end.
    pub bot_token: String,
    /// Path of the persisted ownership map.
    pub store_path: String,
}

impl Config {
    /// Read the configuration from the process environment, or return an Error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingConfig`] naming the first required variable
    /// that is unset or empty.
    pub fn try_from_env() -> Result<Self, Error> {
        Ok(Config {
            api_endpoint: optional("CLOUDFLARE_API_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string()),
            zone_id: required("CLOUDFLARE_ZONE_ID")?,
            api_token: required("CLOUDFLARE_API_TOKEN")?,
            domain_suffix: required("DOMAIN_SUFFIX")?,
            admin_role: required("ADMIN_ROLEID")?,
            bot_token: required("DISCORD_BOT_TOKEN")?,
            store_path: optional("USER_DATA_PATH")
                .unwrap_or_else(|| DEFAULT_STORE_PATH.to_string()),
        })
    }

    /// The name shown back to the requester in confirmations: the domain
    /// suffix is appended when it does not already occur in `name`.
    ///
    /// The check is substring containment, not a true suffix test, and the
    /// result is for display only. Provider calls use the raw name.
    #[must_use]
    pub fn display_name(&self, name: &str) -> String {
        if name.contains(&self.domain_suffix) {
            name.to_string()
        } else {
            format!("{name}{}", self.domain_suffix)
        }
    }

    /// Whether a caller holding `roles` may use administrative commands.
    #[must_use]
    pub fn is_admin(&self, roles: &[String]) -> bool {
        roles.iter().any(|role| role == &self.admin_role)
    }
}

fn required(var: &'static str) -> Result<String, Error> {
    match env::var(var) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::MissingConfig(var)),
    }
}

fn optional(var: &str) -> Option<String> {
    env::var(var).ok().filter(|value| !value.is_empty())
}
