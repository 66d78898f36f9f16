use anyhow::Result;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::RwLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zonekeeper::chat::{self, RecordForm, Reply, ReplyBody, Visibility};
use zonekeeper::ownership::DynOwnershipStore;
use zonekeeper::provider::DnsProvider;
use zonekeeper::{CloudflareDns, Config, FileOwnershipStore, Shared};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_init();

    let config: Shared = Arc::new(Config::try_from_env()?);

    let store = FileOwnershipStore::try_from_file(&config.store_path).await?;
    let store: DynOwnershipStore = Arc::new(RwLock::new(store));
    let provider = CloudflareDns::new(config.clone());

    tracing::info!(
        "ready, registering names under \"{}\" in zone {}",
        config.domain_suffix,
        config.zone_id
    );

    command_loop(&config, &store, &provider).await?;

    tracing::info!("goodbye");
    Ok(())
}

fn tracing_init() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zonekeeper=info".into()),
        )
        .init();
}

/// Line-oriented front end standing in for the chat platform. Each line is
/// one command invocation; replies print with their visibility tag.
async fn command_loop(
    config: &Config,
    store: &DynOwnershipStore,
    provider: &(dyn DnsProvider + Send + Sync),
) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    print_help();
    loop {
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let args: Vec<&str> = line.split_whitespace().collect();
        match args.as_slice() {
            [] => {}
            ["quit" | "exit"] => break,
            ["register", requester] => {
                let Some(form) = prompt_form(&mut lines).await? else {
                    break;
                };
                let reply = chat::handle_register(config, store, provider, requester, &form).await?;
                print_reply(&reply);
            }
            ["list", roles, target] => {
                let roles: Vec<String> = roles.split(',').map(str::to_string).collect();
                print_reply(&chat::handle_list(config, store, &roles, target).await);
            }
            _ => print_help(),
        }
    }
    Ok(())
}

/// The interactive registration form, one prompt per field.
async fn prompt_form(lines: &mut Lines<BufReader<Stdin>>) -> Result<Option<RecordForm>> {
    println!("Record Type (e.g. A, CNAME, SRV):");
    let Some(record_type) = lines.next_line().await? else {
        return Ok(None);
    };
    println!("Record Value (e.g. 192.0.2.1):");
    let Some(record_value) = lines.next_line().await? else {
        return Ok(None);
    };
    println!("Record Name (e.g. subdomain + managed suffix):");
    let Some(record_name) = lines.next_line().await? else {
        return Ok(None);
    };
    Ok(Some(RecordForm {
        record_type: record_type.trim().to_string(),
        record_value: record_value.trim().to_string(),
        record_name: record_name.trim().to_string(),
    }))
}

fn print_reply(reply: &Reply) {
    let tag = match reply.visibility {
        Visibility::Private => "private",
        Visibility::Broadcast => "broadcast",
    };
    match &reply.body {
        ReplyBody::Text(text) => println!("[{tag}] {text}"),
        ReplyBody::Fields { title, fields } => {
            println!("[{tag}] {title}");
            for (name, value) in fields {
                println!("  {name}: {value}");
            }
        }
    }
}

fn print_help() {
    println!("commands:");
    println!("  register <user-id>                  register a subdomain record");
    println!("  list <role,role,...> <target-user>  list a user's subdomains (admin)");
    println!("  quit");
}
