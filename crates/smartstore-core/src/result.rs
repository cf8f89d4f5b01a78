// SPDX-FileCopyrightText: 2026 SmartStore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The discriminated result every API operation resolves to, plus the
//! user-facing message strings and the taxonomy-to-message mapping.
//!
//! Exactly one variant is populated per call and the correlation id is
//! always present: the server-echoed id when the response carried one,
//! otherwise the locally generated id. Results are constructed fresh per
//! request, immutable once returned, and consumed once by the caller.

use crate::types::{CorrelationId, ErrorCode};

/// Shown when the server cannot be reached at the transport level.
pub const MSG_NETWORK_UNREACHABLE: &str =
    "Unable to reach the server. Please check your connection.";
/// Shown when the response body is not parsable JSON.
pub const MSG_INVALID_RESPONSE: &str = "Invalid response from server.";
/// Shown when the parsed body does not match the expected shape.
pub const MSG_INVALID_FORMAT: &str = "Invalid response format.";
/// Shown when a shape-valid envelope carries neither data nor error, and
/// as the fallback when a server error has no message.
pub const MSG_SOMETHING_WRONG: &str = "Something went wrong. Please try again.";
/// Shown for validation errors instead of the server message.
pub const MSG_FIX_FORM: &str = "Please fix the errors in the form.";

/// Outcome of a single API call.
#[derive(Debug, Clone)]
pub enum ApiResult<T> {
    Success {
        data: T,
        correlation_id: CorrelationId,
    },
    Failure {
        error: String,
        correlation_id: CorrelationId,
    },
}

impl<T> ApiResult<T> {
    /// Construct a failure from a user-facing message.
    pub fn failure(error: impl Into<String>, correlation_id: CorrelationId) -> Self {
        Self::Failure {
            error: error.into(),
            correlation_id,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn correlation_id(&self) -> &CorrelationId {
        match self {
            Self::Success { correlation_id, .. } | Self::Failure { correlation_id, .. } => {
                correlation_id
            }
        }
    }

    /// The user-facing error message, if this is a failure.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failure { error, .. } => Some(error),
            Self::Success { .. } => None,
        }
    }

    /// The success payload, if present.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Failure { .. } => None,
        }
    }
}

/// Map a server error to the message shown to the user.
///
/// Validation errors collapse to a generic form-level message; every
/// other code passes the server message through, falling back to
/// [`MSG_SOMETHING_WRONG`] when the server gave none. Field-level detail,
/// where present, is extracted separately and is not part of this
/// contract.
pub fn user_message(code: &ErrorCode, server_message: Option<&str>) -> String {
    match code {
        ErrorCode::ValidationError => MSG_FIX_FORM.to_string(),
        _ => server_message
            .filter(|m| !m.is_empty())
            .unwrap_or(MSG_SOMETHING_WRONG)
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_get_the_form_message() {
        let msg = user_message(&ErrorCode::ValidationError, Some("email must be valid"));
        assert_eq!(msg, MSG_FIX_FORM);
    }

    #[test]
    fn other_codes_pass_through_the_server_message() {
        let msg = user_message(&ErrorCode::Conflict, Some("store name already taken"));
        assert_eq!(msg, "store name already taken");

        let msg = user_message(&ErrorCode::Other("RATE_LIMITED".into()), Some("slow down"));
        assert_eq!(msg, "slow down");
    }

    #[test]
    fn missing_server_message_falls_back_to_generic() {
        assert_eq!(user_message(&ErrorCode::Internal, None), MSG_SOMETHING_WRONG);
        assert_eq!(user_message(&ErrorCode::Internal, Some("")), MSG_SOMETHING_WRONG);
    }

    #[test]
    fn accessors_match_variants() {
        let ok = ApiResult::Success {
            data: "payload",
            correlation_id: CorrelationId::from("cid-1".to_string()),
        };
        assert_eq!(ok.data(), Some(&"payload"));
        assert_eq!(ok.error_message(), None);
        assert_eq!(ok.correlation_id().as_str(), "cid-1");

        let err: ApiResult<&str> =
            ApiResult::failure("nope", CorrelationId::from("cid-2".to_string()));
        assert_eq!(err.data(), None);
        assert_eq!(err.error_message(), Some("nope"));
        assert_eq!(err.correlation_id().as_str(), "cid-2");
    }
}
