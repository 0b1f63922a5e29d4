//! API Probe CLI
//!
//! Talks to a BookMeHere backend with the same client the web app uses.
//! Handy for checking a deployment or a local backend before opening the UI.
//!
//! Usage:
//!   api-probe services
//!   api-probe settings
//!   api-probe masters <service-id>
//!   api-probe availability <master-id> <YYYY-MM-DD>
//!   api-probe bookings
//!   api-probe login-user <username> <password>
//!   api-probe login-admin <username> <password>
//!   api-probe logout
//!   api-probe whoami
//!
//! The backend comes from `config.*` in the config dir or `BOOKME_*` env vars.
//! Sessions are kept in `sessions.json` next to the config file.

use std::env;
use std::process;
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookmehere_web::api::ApiClient;
use bookmehere_web::booking::DATE_FORMAT;
use bookmehere_web::config::{get_config_dir, load_config};
use bookmehere_web::models::LoginRequest;
use bookmehere_web::session::store::FileSessionStore;
use bookmehere_web::session::{SessionManager, SessionRole};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookmehere_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    if let Err(e) = run(&args[1], &args[2..]).await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

async fn run(command: &str, rest: &[String]) -> Result<()> {
    if matches!(command, "help" | "--help" | "-h") {
        print_usage();
        return Ok(());
    }

    let config = load_config()?;
    tracing::info!("Using API at {}", config.api_base_url);
    let client = ApiClient::new(config);
    let sessions = SessionManager::new(Rc::new(FileSessionStore::new(get_config_dir())));

    match command {
        "services" => print_json(&client.list_services().await?),
        "settings" => print_json(&client.service_settings().await?),
        "masters" => {
            let service_id = arg(rest, 0, "service id")?
                .parse::<i64>()
                .context("service id must be a number")?;
            print_json(&client.masters_for_service(service_id).await?)
        }
        "availability" => {
            let master_id = arg(rest, 0, "master id")?
                .parse::<i64>()
                .context("master id must be a number")?;
            let date = NaiveDate::parse_from_str(arg(rest, 1, "date")?, DATE_FORMAT)
                .context("date must be YYYY-MM-DD")?;
            print_json(&client.master_availability(master_id, date).await?)
        }
        "bookings" => print_json(&client.list_bookings().await?),
        "login-user" | "login-admin" => {
            let role = if command == "login-admin" {
                SessionRole::Admin
            } else {
                SessionRole::Customer
            };
            let credentials = LoginRequest {
                username: arg(rest, 0, "username")?.to_string(),
                password: arg(rest, 1, "password")?.to_string(),
            };
            let session = sessions
                .sign_in(&client, role, &credentials)
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message("Login failed")))?;
            print_json(&session.user)
        }
        "logout" => {
            let restored = sessions.restore();
            if restored.admin.is_some() {
                sessions.sign_out(&client, SessionRole::Admin).await;
            }
            if restored.customer.is_some() {
                sessions.sign_out(&client, SessionRole::Customer).await;
            }
            println!("Signed out");
            Ok(())
        }
        "whoami" => {
            let restored = sessions.restore();
            match (&restored.admin, &restored.customer) {
                (None, None) => println!("Not signed in"),
                (admin, customer) => {
                    if let Some(user) = admin {
                        println!("admin: {}", user.display_name());
                    }
                    if let Some(user) = customer {
                        println!("customer: {}", user.display_name());
                    }
                }
            }
            Ok(())
        }
        other => {
            print_usage();
            bail!("Unknown command: {}", other)
        }
    }
}

fn arg<'a>(rest: &'a [String], index: usize, name: &str) -> Result<&'a str> {
    match rest.get(index) {
        Some(value) => Ok(value.as_str()),
        None => bail!("Missing {} argument", name),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_usage() {
    eprintln!("API Probe - Query a BookMeHere backend");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  api-probe services");
    eprintln!("  api-probe settings");
    eprintln!("  api-probe masters <service-id>");
    eprintln!("  api-probe availability <master-id> <YYYY-MM-DD>");
    eprintln!("  api-probe bookings");
    eprintln!("  api-probe login-user <username> <password>");
    eprintln!("  api-probe login-admin <username> <password>");
    eprintln!("  api-probe logout");
    eprintln!("  api-probe whoami");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  BOOKME_ENV            development | production");
    eprintln!("  BOOKME_API_BASE_URL   override the API base");
    eprintln!("  BOOKME_CONFIG_DIR     where config.* and sessions.json live");
    eprintln!("  RUST_LOG              log filter (default bookmehere_web=info)");
}
