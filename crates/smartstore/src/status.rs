// SPDX-FileCopyrightText: 2026 SmartStore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `smartstore status` command implementation.
//!
//! The CLI analog of the app's route guard: reports whether a valid
//! session exists and clears a stale one so the next command starts
//! clean.

use std::process::ExitCode;

use serde::Serialize;
use smartstore_core::SmartstoreError;
use smartstore_session::SessionStore;

/// Structured status output for `--json` mode.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub authenticated: bool,
    pub user_id: Option<String>,
}

/// Run the `smartstore status` command.
pub fn run_status(
    session: &dyn SessionStore,
    json: bool,
) -> Result<ExitCode, SmartstoreError> {
    let authenticated = session.has_valid_session();

    // A token that is present but invalid (expired, malformed) is
    // cleared, exactly as the route guard does before redirecting.
    if !authenticated && session.access_token().is_some() {
        session.clear()?;
    }

    let user_id = if authenticated { session.user_id() } else { None };

    if json {
        let response = StatusResponse {
            authenticated,
            user_id,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&response)
                .map_err(|e| SmartstoreError::Internal(format!("failed to render status: {e}")))?
        );
    } else if authenticated {
        match &user_id {
            Some(id) => println!("Logged in (user {id})."),
            None => println!("Logged in."),
        }
    } else {
        println!("Not logged in.");
    }

    Ok(if authenticated {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
