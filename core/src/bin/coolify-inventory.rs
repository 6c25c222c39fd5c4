//! Print an inventory of a Coolify instance.
//!
//! Reads `COOLIFY_API_HOST`, `COOLIFY_API_TOKEN` and the optional
//! `COOLIFY_TIMEOUT_MS` from the environment or a `.env` file. Set
//! `RUST_LOG=coolify_core=debug` to see every request.

use std::process::ExitCode;

use coolify_core::{ClientConfig, CoolifyClient, Result};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn section<T>(title: &str, items: Result<Vec<T>>, line: impl Fn(&T) -> String) -> Result<()> {
    let items = items?;
    println!("\n{title} ({})", items.len());
    for item in &items {
        println!("  {}", line(item));
    }
    Ok(())
}

fn inventory(client: &CoolifyClient) -> Result<()> {
    println!("Coolify {}", client.version()?);

    section("Applications", client.list_applications(), |a| {
        format!("{} {} [{}] {}", a.uuid, a.name, a.status, a.fqdn.as_deref().unwrap_or("-"))
    })?;
    section("Servers", client.list_servers(), |s| {
        format!("{} {} {}:{}", s.uuid, s.name, s.ip, s.port)
    })?;
    section("Services", client.list_services(), |s| {
        format!("{} {} {}", s.uuid, s.name, s.service_type)
    })?;
    section("Projects", client.list_projects(), |p| {
        format!("{} {} ({} environments)", p.uuid, p.name, p.environments.len())
    })?;
    section("Databases", client.list_databases(), |d| {
        format!("{} {} {}", d.uuid, d.name, d.image)
    })?;
    section("Resources", client.list_resources(), |r| {
        format!("{} {} {} [{}]", r.uuid, r.kind, r.name, r.status)
    })?;
    section("Private keys", client.list_private_keys(), |k| {
        format!("{} {}", k.uuid, k.name)
    })?;
    section("Deployments", client.list_deployments(), |d| {
        format!("{} {} [{}]", d.deployment_uuid, d.application_name, d.status)
    })?;
    section("Teams", client.list_teams(), |t| {
        format!("{} {} ({} members)", t.id, t.name, t.members.len())
    })?;
    Ok(())
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    let result = ClientConfig::from_env()
        .and_then(CoolifyClient::from_config)
        .and_then(|client| inventory(&client));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.message() {
                Some(message) => eprintln!("error: {err} ({message})"),
                None => eprintln!("error: {err}"),
            }
            ExitCode::FAILURE
        }
    }
}
