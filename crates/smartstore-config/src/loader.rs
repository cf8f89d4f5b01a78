// SPDX-FileCopyrightText: 2026 SmartStore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./smartstore.toml` >
//! `~/.config/smartstore/smartstore.toml` > `/etc/smartstore/smartstore.toml`
//! with environment variable overrides via the `SMARTSTORE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::SmartstoreConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/smartstore/smartstore.toml` (system-wide)
/// 3. `~/.config/smartstore/smartstore.toml` (user XDG config)
/// 4. `./smartstore.toml` (local directory)
/// 5. `SMARTSTORE_*` environment variables
pub fn load_config() -> Result<SmartstoreConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SmartstoreConfig::default()))
        .merge(Toml::file("/etc/smartstore/smartstore.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("smartstore/smartstore.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("smartstore.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<SmartstoreConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SmartstoreConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<SmartstoreConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SmartstoreConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so that
/// underscore-containing key names stay unambiguous:
/// `SMARTSTORE_API_BASE_URL` must map to `api.base_url`, not
/// `api.base.url`.
fn env_provider() -> Env {
    Env::prefixed("SMARTSTORE_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("api_", "api.", 1)
            .replacen("session_", "session.", 1)
            .replacen("log_", "log.", 1);
        mapped.into()
    })
}
