// SPDX-FileCopyrightText: 2026 SmartStore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `smartstore signup`, `login`, `logout`, and `oauth` commands.

use std::process::ExitCode;

use smartstore_api::{ApiClient, ApiResult, OAuthProvider, SignupInput};
use smartstore_core::SmartstoreError;
use smartstore_session::SessionStore;
use tracing::debug;

use crate::report_failure;

fn prompt_password() -> Result<String, SmartstoreError> {
    rpassword::prompt_password("Password: ").map_err(|e| SmartstoreError::Internal(format!(
        "failed to read password: {e}"
    )))
}

/// Run the `smartstore signup` command.
pub async fn run_signup(
    client: &ApiClient,
    email: &str,
    name: Option<String>,
) -> Result<ExitCode, SmartstoreError> {
    let password = prompt_password()?;
    let input = SignupInput {
        email: email.to_string(),
        password,
        name,
    };

    match client.signup(&input).await {
        ApiResult::Success {
            data,
            correlation_id,
        } => {
            debug!(correlation_id = %correlation_id, "signup accepted");
            println!("{}", data.message);
            Ok(ExitCode::SUCCESS)
        }
        ApiResult::Failure {
            error,
            correlation_id,
        } => {
            report_failure(&error, &correlation_id);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Run the `smartstore login` command.
///
/// On success the returned token and user id are persisted to the
/// session store; the client itself never writes it.
pub async fn run_login(
    client: &ApiClient,
    session: &dyn SessionStore,
    email: &str,
) -> Result<ExitCode, SmartstoreError> {
    let password = prompt_password()?;

    match client.login(email, &password).await {
        ApiResult::Success { data, .. } => {
            session.set_session(&data.access_token, &data.user.id)?;
            let shown = data.user.email.as_deref().unwrap_or(&data.user.id);
            println!("Logged in as {shown}.");
            Ok(ExitCode::SUCCESS)
        }
        ApiResult::Failure {
            error,
            correlation_id,
        } => {
            report_failure(&error, &correlation_id);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Run the `smartstore logout` command.
///
/// Logout is idempotent: an absent or already-rejected token still
/// resolves to success, and the local session is cleared either way.
pub async fn run_logout(
    client: &ApiClient,
    session: &dyn SessionStore,
) -> Result<ExitCode, SmartstoreError> {
    match client.logout().await {
        ApiResult::Success { .. } => {
            session.clear()?;
            println!("Logged out.");
            Ok(ExitCode::SUCCESS)
        }
        ApiResult::Failure {
            error,
            correlation_id,
        } => {
            report_failure(&error, &correlation_id);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Run the `smartstore oauth` command: print the provider redirect URL.
pub async fn run_oauth(
    client: &ApiClient,
    provider: OAuthProvider,
    redirect_uri: Option<&str>,
) -> Result<ExitCode, SmartstoreError> {
    match client.oauth_start_url(provider, redirect_uri).await {
        ApiResult::Success { data, .. } => {
            println!("Open this URL to continue with {provider}:");
            println!("{}", data.redirect_url);
            Ok(ExitCode::SUCCESS)
        }
        ApiResult::Failure {
            error,
            correlation_id,
        } => {
            report_failure(&error, &correlation_id);
            Ok(ExitCode::FAILURE)
        }
    }
}
