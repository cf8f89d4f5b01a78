// SPDX-FileCopyrightText: 2026 SmartStore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the SmartStore client workspace.
//!
//! API call outcomes are deliberately NOT represented here: every API
//! operation resolves locally into [`crate::ApiResult`] and is surfaced as
//! inline state, never raised to the caller. `SmartstoreError` covers only
//! the failures that precede or sit outside a call: client construction,
//! configuration, and session persistence.

use thiserror::Error;

/// The primary error type used across the SmartStore client crates.
#[derive(Debug, Error)]
pub enum SmartstoreError {
    /// Configuration errors (invalid TOML, bad base URL, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Session persistence errors (storage path, file write failure).
    #[error("session error: {message}")]
    Session {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Transport-layer errors outside the per-call result contract
    /// (for example, failure to build the HTTP client itself).
    #[error("transport error: {message}")]
    Transport {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
