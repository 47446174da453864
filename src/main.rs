//! TalentGate session CLI.
//!
//! A thin host around the session core: inspect the persisted session,
//! log in or register against the configured backend, and log out. The
//! portal UIs embed the same `SessionStore`; this binary exists so the
//! session machinery can be exercised without them.

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{bail, Result};
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use talentgate::api::AuthClient;
use talentgate::config::Config;
use talentgate::models::Role;
use talentgate::nav::LoggingNavigator;
use talentgate::session::{SessionState, SessionStore};
use talentgate::storage::DiskVault;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(String::as_str).unwrap_or("status");

    let mut config = Config::load()?;
    let vault = DiskVault::new(config.cache_dir()?);
    let client = AuthClient::new(config.api_url())?;
    let mut store = SessionStore::open(Box::new(vault), client, Arc::new(LoggingNavigator));

    match command {
        "status" => print_status(&store),
        "login" => {
            let email = match args.get(2) {
                Some(email) => email.clone(),
                None => prompt("Email: ")?,
            };
            let password = rpassword::prompt_password("Password: ")?;

            store.login(&email, &password).await?;

            config.last_email = Some(email);
            if let Err(e) = config.save() {
                warn!(error = %e, "Failed to save config");
            }
            println!("Login successful.");
            print_status(&store);
        }
        "register" => {
            let email = match args.get(2) {
                Some(email) => email.clone(),
                None => prompt("Email: ")?,
            };
            let role = match args.get(3) {
                Some(role) => parse_role(role)?,
                None => parse_role(prompt("Role (candidate/recruiter): ")?.as_str())?,
            };
            let name = if args.len() > 4 {
                args[4..].join(" ")
            } else {
                prompt("Name: ")?
            };
            let password = rpassword::prompt_password("Password: ")?;

            store.register(&email, &password, role, &name).await?;

            config.last_email = Some(email);
            if let Err(e) = config.save() {
                warn!(error = %e, "Failed to save config");
            }
            println!("Registration successful.");
            print_status(&store);
        }
        "logout" => {
            store.logout()?;
            println!("Logged out.");
        }
        other => {
            bail!(
                "Unknown command '{}'. Usage: talentgate [status | login <email> | register <email> <role> <name> | logout]",
                other
            );
        }
    }

    Ok(())
}

fn parse_role(s: &str) -> Result<Role> {
    match s {
        "candidate" => Ok(Role::Candidate),
        "recruiter" => Ok(Role::Recruiter),
        other => bail!("Unknown role '{}', expected candidate or recruiter", other),
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn print_status(store: &SessionStore) {
    match store.state() {
        SessionState::Authenticated { user, .. } => {
            let name = user.display_name.as_deref().unwrap_or("-");
            println!(
                "Logged in as {} ({}, {})",
                user.email,
                user.role.as_str(),
                name
            );
        }
        SessionState::Unauthenticated => println!("Not logged in."),
        SessionState::Hydrating => println!("Session not restored yet."),
    }
}
