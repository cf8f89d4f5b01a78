// SPDX-FileCopyrightText: 2026 SmartStore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session ownership for the SmartStore client.
//!
//! The session store is the single source of truth for "is this client
//! authenticated": it owns the persisted access token and user id, and it
//! decides validity by decoding the token's `exp` claim. Every ambiguity
//! -- missing token, malformed segments, undecodable payload -- resolves
//! to "not authenticated" (fail-closed). Corrupted or tampered tokens
//! must never be treated as authenticated.

pub mod callback;
pub mod store;
pub mod token;

pub use callback::{parse_callback_query, CallbackOutcome};
pub use store::{FileSessionStore, MemorySessionStore};

use std::fmt;

use smartstore_core::SmartstoreError;

/// The persisted session pair.
#[derive(Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user_id: String,
}

// Debug must never leak the bearer token into logs.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"[redacted]")
            .field("user_id", &self.user_id)
            .finish()
    }
}

/// Durable client-side session storage.
///
/// Reads and writes are synchronous and atomic with respect to the
/// single-process execution model; no locking is exposed to callers. The
/// store is exclusively responsible for mutating the session -- the API
/// client only reads the token at request-construction time.
pub trait SessionStore: Send + Sync {
    /// Persist both values. No validation is performed at write time;
    /// the caller is trusted. Subsequent reads reflect the new values
    /// immediately.
    fn set_session(&self, access_token: &str, user_id: &str) -> Result<(), SmartstoreError>;

    /// The stored access token, if any.
    fn access_token(&self) -> Option<String>;

    /// The stored user id, if any.
    fn user_id(&self) -> Option<String>;

    /// Remove both persisted values unconditionally. Idempotent.
    fn clear(&self) -> Result<(), SmartstoreError>;

    /// Whether a well-formed, unexpired token is present.
    ///
    /// Fails closed: absent, malformed, or undecodable tokens and tokens
    /// whose `exp` is at or before the current time all yield `false`.
    /// Never panics and never returns an error.
    fn has_valid_session(&self) -> bool {
        self.access_token()
            .is_some_and(|token| token::is_token_valid(&token))
    }
}
