//! Chat-facing surface: the registration form value object, reply payloads,
//! and the handlers a chat front end calls for each command.
//!
//! The hosting platform's modal/interaction machinery is deliberately not
//! modeled here. A front end collects the three form fields however it likes
//! and hands over a [`RecordForm`]; it gets back a [`Reply`] to deliver with
//! the indicated visibility.

use crate::config::Config;
use crate::error::Error;
use crate::ownership::DynOwnershipStore;
use crate::provider::{DnsProvider, RecordRequest};
use crate::workflow::{self, ListOutcome, RegisterOutcome};

/// The registration form, as filled in by the requester.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordForm {
    /// e.g. `A`, `CNAME`, `SRV`.
    pub record_type: String,
    /// e.g. `192.0.2.1`.
    pub record_value: String,
    /// The subdomain, with or without the managed domain suffix.
    pub record_name: String,
}

/// Who should see a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Shown only to the requester.
    Private,
    /// Posted for the whole channel.
    Broadcast,
}

/// Reply content: plain text, or a titled field list for structured output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyBody {
    Text(String),
    Fields {
        title: String,
        fields: Vec<(String, String)>,
    },
}

/// One reply payload for the chat front end to deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub body: ReplyBody,
    pub visibility: Visibility,
}

impl Reply {
    fn private_text(text: impl Into<String>) -> Self {
        Reply {
            body: ReplyBody::Text(text.into()),
            visibility: Visibility::Private,
        }
    }

    fn broadcast_fields(title: String, fields: Vec<(String, String)>) -> Self {
        Reply {
            body: ReplyBody::Fields { title, fields },
            visibility: Visibility::Broadcast,
        }
    }
}

/// Handle the `register` command: run the workflow for the submitted form
/// and phrase the outcome for the requester. All replies are private.
///
/// # Errors
///
/// Returns an [`Error`] only when persisting the ownership store fails.
pub async fn handle_register(
    config: &Config,
    store: &DynOwnershipStore,
    provider: &(dyn DnsProvider + Send + Sync),
    requester: &str,
    form: &RecordForm,
) -> Result<Reply, Error> {
    let record = RecordRequest {
        record_type: form.record_type.clone(),
        name: form.record_name.clone(),
        content: form.record_value.clone(),
        priority: None,
    };
    let outcome = workflow::register(config, store, provider, requester, &record).await?;

    Ok(match outcome {
        RegisterOutcome::Registered { display_name }
        | RegisterOutcome::RecordAdded { display_name } => Reply::private_text(format!(
            "Record for {display_name} has been added successfully!"
        )),
        RegisterOutcome::QuotaExceeded => {
            Reply::private_text("You have reached the maximum limit of 5 subdomains.")
        }
        RegisterOutcome::OwnedElsewhere => {
            Reply::private_text("This subdomain is already registered by another user.")
        }
        RegisterOutcome::NotYourSubdomain => {
            Reply::private_text("You don't own this subdomain.")
        }
        RegisterOutcome::ProviderFailed => {
            Reply::private_text("Failed to add the record. Please try again later.")
        }
    })
}

/// Handle the admin `list` command for a target user identifier.
pub async fn handle_list(
    config: &Config,
    store: &DynOwnershipStore,
    caller_roles: &[String],
    target: &str,
) -> Reply {
    match workflow::list(config, store, caller_roles, target).await {
        ListOutcome::PermissionDenied => {
            Reply::private_text("You don't have permission to use this command.")
        }
        ListOutcome::NoSubdomains => {
            Reply::private_text(format!("No subdomains found for user {target}"))
        }
        ListOutcome::Subdomains(names) => Reply::broadcast_fields(
            format!("Subdomains for user {target}"),
            names
                .into_iter()
                .map(|name| ("Subdomain".to_string(), name))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ownership::{InMemoryOwnershipStore, OwnershipStore};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    struct StaticProvider {
        available: bool,
    }

    #[async_trait::async_trait]
    impl DnsProvider for StaticProvider {
        async fn name_available(&self, _name: &str) -> bool {
            self.available
        }

        async fn create_record(&self, _record: &RecordRequest) -> Result<(), Error> {
            Ok(())
        }
    }

    fn config() -> Config {
        Config {
            api_endpoint: "http://unused".to_string(),
            zone_id: "zone123".to_string(),
            api_token: "token".to_string(),
            domain_suffix: ".example.dev".to_string(),
            admin_role: "admin-role-id".to_string(),
            bot_token: "bot".to_string(),
            store_path: "unused.json".to_string(),
        }
    }

    async fn store_with(entries: &[(&str, Vec<&str>)]) -> DynOwnershipStore {
        let mut store = InMemoryOwnershipStore::default();
        for (owner, names) in entries {
            for name in names {
                store.append(owner, name).await.unwrap();
            }
        }
        Arc::new(RwLock::new(store))
    }

    #[tokio::test]
    async fn register_success_names_the_suffixed_subdomain() {
        let store = store_with(&[]).await;
        let provider = StaticProvider { available: true };
        let form = RecordForm {
            record_type: "A".to_string(),
            record_value: "1.2.3.4".to_string(),
            record_name: "foo".to_string(),
        };

        let reply = handle_register(&config(), &store, &provider, "u1", &form)
            .await
            .unwrap();

        assert_eq!(reply.visibility, Visibility::Private);
        assert_eq!(
            reply.body,
            ReplyBody::Text(
                "Record for foo.example.dev has been added successfully!".to_string()
            )
        );
    }

    #[tokio::test]
    async fn register_rejection_is_private_text() {
        let store = store_with(&[("u1", vec!["foo"])]).await;
        let provider = StaticProvider { available: false };
        let form = RecordForm {
            record_type: "A".to_string(),
            record_value: "1.2.3.4".to_string(),
            record_name: "foo".to_string(),
        };

        let reply = handle_register(&config(), &store, &provider, "u2", &form)
            .await
            .unwrap();

        assert_eq!(reply.visibility, Visibility::Private);
        assert_eq!(
            reply.body,
            ReplyBody::Text("You don't own this subdomain.".to_string())
        );
    }

    #[tokio::test]
    async fn list_without_role_is_denied() {
        let store = store_with(&[]).await;
        let reply = handle_list(&config(), &store, &[], "u1").await;
        assert_eq!(reply.visibility, Visibility::Private);
        assert_eq!(
            reply.body,
            ReplyBody::Text("You don't have permission to use this command.".to_string())
        );
    }

    #[tokio::test]
    async fn list_unknown_user_replies_privately() {
        let store = store_with(&[]).await;
        let reply = handle_list(&config(), &store, &["admin-role-id".to_string()], "ghost").await;
        assert_eq!(reply.visibility, Visibility::Private);
        assert_eq!(
            reply.body,
            ReplyBody::Text("No subdomains found for user ghost".to_string())
        );
    }

    #[tokio::test]
    async fn list_known_user_broadcasts_field_list() {
        let store = store_with(&[("u1", vec!["foo", "bar"])]).await;
        let reply = handle_list(&config(), &store, &["admin-role-id".to_string()], "u1").await;
        assert_eq!(reply.visibility, Visibility::Broadcast);
        assert_eq!(
            reply.body,
            ReplyBody::Fields {
                title: "Subdomains for user u1".to_string(),
                fields: vec![
                    ("Subdomain".to_string(), "foo".to_string()),
                    ("Subdomain".to_string(), "bar".to_string()),
                ],
            }
        );
    }
}
