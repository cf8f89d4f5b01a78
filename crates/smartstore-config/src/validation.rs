// SPDX-FileCopyrightText: 2026 SmartStore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as a parsable base URL and a known log level.

use crate::diagnostic::ConfigError;
use crate::model::SmartstoreConfig;

const KNOWN_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)`
/// with all collected validation errors (does not fail fast).
pub fn validate_config(config: &SmartstoreConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let base_url = config.api.base_url.trim();
    if base_url.is_empty() {
        errors.push(ConfigError::Validation {
            message: "api.base_url must not be empty".to_string(),
        });
    } else {
        match url::Url::parse(base_url) {
            Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => {}
            Ok(parsed) => {
                errors.push(ConfigError::Validation {
                    message: format!(
                        "api.base_url must use http or https, got `{}`",
                        parsed.scheme()
                    ),
                });
            }
            Err(e) => {
                errors.push(ConfigError::Validation {
                    message: format!("api.base_url `{base_url}` is not a valid URL: {e}"),
                });
            }
        }
    }

    if !KNOWN_LOG_LEVELS.contains(&config.log.level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "log.level must be one of {}, got `{}`",
                KNOWN_LOG_LEVELS.join(", "),
                config.log.level
            ),
        });
    }

    if let Some(path) = &config.session.storage_path {
        if path.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: "session.storage_path must not be empty when set".to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
