// SPDX-FileCopyrightText: 2026 SmartStore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SmartStore merchant client CLI.
//!
//! This is the binary entry point. It loads and validates configuration,
//! initializes tracing, wires the file-backed session store into the API
//! client, and dispatches to the per-command modules.

mod auth;
mod gst;
mod status;

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use smartstore_api::{ApiClient, OAuthProvider, UnauthorizedPolicy};
use smartstore_core::CorrelationId;
use smartstore_session::{FileSessionStore, SessionStore};

/// SmartStore merchant client.
#[derive(Parser, Debug)]
#[command(name = "smartstore", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a merchant account.
    Signup {
        #[arg(long)]
        email: String,
        /// Optional display name.
        #[arg(long)]
        name: Option<String>,
    },
    /// Log in and persist the session.
    Login {
        #[arg(long)]
        email: String,
    },
    /// Log out and clear the persisted session.
    Logout,
    /// Show whether a valid session exists.
    Status {
        /// Output structured JSON for scripting.
        #[arg(long)]
        json: bool,
    },
    /// Start an OAuth flow and print the provider redirect URL.
    Oauth {
        /// `google` or `meta`.
        provider: String,
        #[arg(long)]
        redirect_uri: Option<String>,
    },
    /// Look up business details by GST number.
    Gst { gstin: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match smartstore_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            smartstore_config::render_errors(&errors);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.log.level);

    let store = match &config.session.storage_path {
        Some(path) => FileSessionStore::new(path),
        None => match FileSessionStore::from_default_path() {
            Ok(store) => store,
            Err(e) => {
                eprintln!("smartstore: {e}");
                return ExitCode::FAILURE;
            }
        },
    };
    let session: Arc<dyn SessionStore> = Arc::new(store);

    let policy = Arc::new(UnauthorizedPolicy::new(Arc::clone(&session), || {
        eprintln!("Your session has expired. Please log in again.");
    }));

    let client = match ApiClient::new(&config.api, Arc::clone(&session)) {
        Ok(client) => client.with_unauthorized_policy(policy),
        Err(e) => {
            eprintln!("smartstore: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Commands::Signup { email, name } => auth::run_signup(&client, &email, name).await,
        Commands::Login { email } => auth::run_login(&client, session.as_ref(), &email).await,
        Commands::Logout => auth::run_logout(&client, session.as_ref()).await,
        Commands::Status { json } => status::run_status(session.as_ref(), json),
        Commands::Oauth {
            provider,
            redirect_uri,
        } => {
            let provider = match provider.as_str() {
                "google" => OAuthProvider::Google,
                "meta" => OAuthProvider::Meta,
                other => {
                    eprintln!("smartstore: unknown provider `{other}` (expected google or meta)");
                    return ExitCode::FAILURE;
                }
            };
            auth::run_oauth(&client, provider, redirect_uri.as_deref()).await
        }
        Commands::Gst { gstin } => gst::run_gst(&client, &gstin).await,
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("smartstore: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Print an API failure with its correlation id for support diagnosis.
pub(crate) fn report_failure(error: &str, correlation_id: &CorrelationId) {
    eprintln!("error: {error} (correlation id: {correlation_id})");
}

/// Initializes the tracing subscriber with the configured log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("smartstore={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
