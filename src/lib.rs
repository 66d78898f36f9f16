//! Zonekeeper
//!
//! A small self-service subdomain registrar for chat communities. Users register
//! DNS records under a managed domain through a [Cloudflare]-compatible provider
//! API, subject to a per-user quota and an ownership map persisted as a JSON file.
//!
//! The crate is the decision core: the [`workflow`] module decides whether a
//! request is a new registration, an additional record on an owned name, or a
//! rejection, the [`ownership`] module tracks who owns what, and the
//! [`provider`] module talks to the DNS API. The [`chat`] module turns workflow
//! outcomes into the reply payloads a chat front end delivers to users.
//!
//! [Cloudflare]: https://developers.cloudflare.com/api/
//!
#![warn(clippy::pedantic)]

pub mod chat;
pub mod config;
pub mod error;
pub mod ownership;
pub mod provider;
pub mod workflow;

use crate::ownership::{file, memory};
pub use config::{Config, Shared};
pub use file::FileOwnershipStore;
pub use memory::InMemoryOwnershipStore;
pub use provider::cloudflare::CloudflareDns;
