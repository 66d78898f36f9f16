//! Registration and listing decision logic.
//!
//! [`register`] runs the full decision procedure for one record request:
//! availability check at the provider, quota and ownership checks against the
//! store, one create call, and (for new registrations) the store append and
//! persist. Every outcome, including provider failure, is terminal for the
//! request; nothing is retried.

use crate::config::Config;
use crate::error::Error;
use crate::ownership::DynOwnershipStore;
use crate::provider::{DnsProvider, RecordRequest};

/// Fixed maximum number of subdomains a single user may own.
pub const MAX_SUBDOMAINS_PER_USER: usize = 5;

/// Terminal outcome of one registration request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// A novel name was created at the provider and appended to the
    /// requester's owned list.
    Registered { display_name: String },
    /// An additional record was created on a name the requester already
    /// owns. The store is untouched.
    RecordAdded { display_name: String },
    /// The requester already owns the maximum number of subdomains.
    QuotaExceeded,
    /// The name has records at the provider but no owner in the store; it
    /// may belong to infrastructure outside this system.
    OwnedElsewhere,
    /// The name is owned by a different user.
    NotYourSubdomain,
    /// The provider rejected or failed the create call. The requester is
    /// told to try again later.
    ProviderFailed,
}

/// Terminal outcome of one admin listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOutcome {
    /// The caller does not hold the administrative role.
    PermissionDenied,
    /// The target identifier is unknown to the store. An explicit empty
    /// result, not an error.
    NoSubdomains,
    /// The target's owned names, in registration order.
    Subdomains(Vec<String>),
}

/// Decide and execute one registration request.
///
/// The provider's view is authoritative for availability, and the check
/// fails closed: a provider error during the check routes the request into
/// the ownership branch, not a retry-later reply.
///
/// The store write lock is held from the first quota/ownership read through
/// the append and persist, so concurrent registrations cannot both observe a
/// pre-mutation quota count or race the backing file.
///
/// # Errors
///
/// Returns an [`Error`] only for store persistence failures; provider create
/// failures are reported as [`RegisterOutcome::ProviderFailed`].
pub async fn register(
    config: &Config,
    store: &DynOwnershipStore,
    provider: &(dyn DnsProvider + Send + Sync),
    requester: &str,
    record: &RecordRequest,
) -> Result<RegisterOutcome, Error> {
    let name = record.name.as_str();
    let available = provider.name_available(name).await;

    let mut store = store.write().await;

    let new_registration = if available {
        if store.count_for(requester).await >= MAX_SUBDOMAINS_PER_USER {
            tracing::debug!("rejected registration from {requester} for \"{name}\": quota reached");
            return Ok(RegisterOutcome::QuotaExceeded);
        }
        true
    } else if store.is_owned_by(name, requester).await {
        false
    } else if store.is_owned_by_other(name, requester).await {
        tracing::debug!("rejected registration from {requester} for \"{name}\": owned by another user");
        return Ok(RegisterOutcome::NotYourSubdomain);
    } else {
        tracing::debug!("rejected registration from {requester} for \"{name}\": exists but untracked");
        return Ok(RegisterOutcome::OwnedElsewhere);
    };

    // The suffixed name is for the confirmation message only; the provider
    // call below receives the raw user-supplied name.
    let display_name = config.display_name(name);

    match provider.create_record(record).await {
        Ok(()) => {
            if new_registration {
                store.append(requester, name).await?;
                tracing::info!("registered \"{name}\" to {requester}");
                Ok(RegisterOutcome::Registered { display_name })
            } else {
                tracing::info!("added {} record for \"{name}\" owned by {requester}", record.record_type);
                Ok(RegisterOutcome::RecordAdded { display_name })
            }
        }
        Err(err) => {
            tracing::warn!("record create for \"{name}\" failed: {err}");
            Ok(RegisterOutcome::ProviderFailed)
        }
    }
}

/// Administrative listing of a user's owned names. Read-only.
pub async fn list(
    config: &Config,
    store: &DynOwnershipStore,
    caller_roles: &[String],
    target: &str,
) -> ListOutcome {
    if !config.is_admin(caller_roles) {
        tracing::debug!("rejected listing of {target}: caller lacks admin role");
        return ListOutcome::PermissionDenied;
    }
    match store.read().await.names_for(target).await {
        Some(names) => ListOutcome::Subdomains(names),
        None => ListOutcome::NoSubdomains,
    }
}
