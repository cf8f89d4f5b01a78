// SPDX-FileCopyrightText: 2026 SmartStore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OAuth redirect callback parsing.
//!
//! After the provider flow completes, the backend redirects to the client
//! with either `access_token` + `user_id` query parameters or an `error`
//! parameter. This module classifies that query string; the caller
//! decides what to do with the outcome (persist the session, show the
//! error).

use std::fmt;

/// Result of parsing an OAuth callback query string.
#[derive(Clone, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// Both credentials present; caller should persist the session.
    Authenticated {
        access_token: String,
        user_id: String,
    },
    /// The provider or backend reported an error.
    Denied { message: String },
    /// Neither an error nor a complete credential pair.
    Incomplete,
}

impl fmt::Debug for CallbackOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authenticated { user_id, .. } => f
                .debug_struct("Authenticated")
                .field("access_token", &"[redacted]")
                .field("user_id", user_id)
                .finish(),
            Self::Denied { message } => {
                f.debug_struct("Denied").field("message", message).finish()
            }
            Self::Incomplete => f.write_str("Incomplete"),
        }
    }
}

/// Parse the query-string portion of an OAuth callback URL.
///
/// An `error` parameter wins over partial credentials; a missing token or
/// user id yields [`CallbackOutcome::Incomplete`]. Values are
/// percent-decoded.
pub fn parse_callback_query(query: &str) -> CallbackOutcome {
    let mut access_token = None;
    let mut user_id = None;
    let mut error = None;

    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "access_token" => access_token = Some(value.into_owned()),
            "user_id" => user_id = Some(value.into_owned()),
            "error" => error = Some(value.into_owned()),
            _ => {}
        }
    }

    if let Some(message) = error {
        return CallbackOutcome::Denied { message };
    }

    match (access_token, user_id) {
        (Some(access_token), Some(user_id)) => CallbackOutcome::Authenticated {
            access_token,
            user_id,
        },
        _ => CallbackOutcome::Incomplete,
    }
}
