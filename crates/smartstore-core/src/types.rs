// SPDX-FileCopyrightText: 2026 SmartStore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the SmartStore client crates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::EnumString;

/// Opaque identifier attached to a request/response pair.
///
/// Generated client-side before every request and echoed back by the
/// server; surfaced to end users on failure for support diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CorrelationId(pub String);

impl CorrelationId {
    /// Generate a fresh random correlation id (UUID v4).
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CorrelationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Backend error-code taxonomy observed at the API boundary.
///
/// Unrecognized codes are preserved verbatim in [`ErrorCode::Other`]
/// rather than rejected -- the taxonomy is open-ended by contract.
#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
pub enum ErrorCode {
    #[strum(serialize = "VALIDATION_ERROR")]
    ValidationError,
    #[strum(serialize = "NOT_FOUND")]
    NotFound,
    #[strum(serialize = "CONFLICT")]
    Conflict,
    #[strum(serialize = "UNAUTHORIZED")]
    Unauthorized,
    #[strum(serialize = "FORBIDDEN")]
    Forbidden,
    #[strum(serialize = "INTERNAL")]
    Internal,
    /// Passthrough for codes not in the known taxonomy.
    #[strum(default)]
    Other(String),
}

impl ErrorCode {
    /// True for codes that trigger the global session-clear policy.
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::Unauthorized | Self::Forbidden)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::Internal => "INTERNAL",
            Self::Other(code) => code,
        };
        f.write_str(code)
    }
}

// Wire form is the SCREAMING_SNAKE_CASE code string, so serde goes
// through Display/FromStr rather than a derived representation.
impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_str(&raw).unwrap_or(Self::Other(raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correlation_ids_are_unique_and_non_empty() {
        let a = CorrelationId::generate();
        let b = CorrelationId::generate();
        assert!(!a.as_str().is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn error_code_round_trips_known_codes() {
        for (raw, code) in [
            ("VALIDATION_ERROR", ErrorCode::ValidationError),
            ("NOT_FOUND", ErrorCode::NotFound),
            ("CONFLICT", ErrorCode::Conflict),
            ("UNAUTHORIZED", ErrorCode::Unauthorized),
            ("FORBIDDEN", ErrorCode::Forbidden),
            ("INTERNAL", ErrorCode::Internal),
        ] {
            let parsed: ErrorCode = serde_json::from_value(serde_json::json!(raw)).unwrap();
            assert_eq!(parsed, code);
            assert_eq!(parsed.to_string(), raw);
        }
    }

    #[test]
    fn unknown_code_is_preserved_verbatim() {
        let parsed: ErrorCode =
            serde_json::from_value(serde_json::json!("RATE_LIMITED")).unwrap();
        assert_eq!(parsed, ErrorCode::Other("RATE_LIMITED".to_string()));
        assert_eq!(parsed.to_string(), "RATE_LIMITED");
    }

    #[test]
    fn authorization_codes_are_flagged() {
        assert!(ErrorCode::Unauthorized.is_authorization());
        assert!(ErrorCode::Forbidden.is_authorization());
        assert!(!ErrorCode::ValidationError.is_authorization());
        assert!(!ErrorCode::Other("RATE_LIMITED".into()).is_authorization());
    }
}
