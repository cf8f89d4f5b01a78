// SPDX-FileCopyrightText: 2026 SmartStore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! GraphQL wire types and error inspection helpers.
//!
//! The backend follows the standard GraphQL-over-HTTP shape: a JSON
//! object with optional `data` and an `errors` array whose entries carry
//! the taxonomy code in `extensions.code`. Helpers here classify those
//! errors; the envelope branching itself lives in the client.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use smartstore_core::ErrorCode;

/// A GraphQL request body.
#[derive(Debug, Serialize)]
pub struct GraphQLRequest<'a> {
    pub query: &'a str,
    pub variables: serde_json::Value,
}

/// A GraphQL response body.
#[derive(Debug, Deserialize)]
pub struct GraphQLResponse {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Vec<GraphQLError>,
}

/// A single entry in the `errors` array.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLError {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub extensions: ErrorExtensions,
}

/// Structured extensions attached to a GraphQL error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorExtensions {
    pub code: Option<ErrorCode>,
    pub field: Option<String>,
    pub message: Option<String>,
    pub correlation_id: Option<String>,
}

impl GraphQLError {
    pub fn code(&self) -> Option<&ErrorCode> {
        self.extensions.code.as_ref()
    }
}

/// The taxonomy code of the first error, if any.
pub fn first_error_code(errors: &[GraphQLError]) -> Option<&ErrorCode> {
    errors.first().and_then(GraphQLError::code)
}

/// The first server-echoed correlation id found in error extensions.
pub fn first_correlation_id(errors: &[GraphQLError]) -> Option<&str> {
    errors
        .iter()
        .find_map(|e| e.extensions.correlation_id.as_deref())
}

pub fn is_validation_error(errors: &[GraphQLError]) -> bool {
    first_error_code(errors) == Some(&ErrorCode::ValidationError)
}

/// True when any error in the response carries an authorization code.
pub fn is_auth_error(errors: &[GraphQLError]) -> bool {
    errors
        .iter()
        .any(|e| e.code().is_some_and(ErrorCode::is_authorization))
}

/// Extract field-level validation errors as a `field -> message` map.
///
/// Returns an empty map unless the response is a validation error.
// TODO: surface these in the signup flow once product decides whether
// field-level detail should be shown there.
pub fn field_errors(errors: &[GraphQLError]) -> BTreeMap<String, String> {
    if !is_validation_error(errors) {
        return BTreeMap::new();
    }

    let mut fields = BTreeMap::new();
    for error in errors {
        if let (Some(field), Some(message)) =
            (&error.extensions.field, &error.extensions.message)
        {
            fields.insert(field.clone(), message.clone());
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_errors(raw: &str) -> Vec<GraphQLError> {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn response_with_data_and_no_errors() {
        let raw = r#"{"data":{"iamLogout":{"message":"bye"}}}"#;
        let response: GraphQLResponse = serde_json::from_str(raw).unwrap();
        assert!(response.data.is_some());
        assert!(response.errors.is_empty());
    }

    #[test]
    fn error_code_is_extracted_from_extensions() {
        let errors = parse_errors(
            r#"[{"message":"nope","extensions":{"code":"FORBIDDEN","correlationId":"cid-9"}}]"#,
        );
        assert_eq!(first_error_code(&errors), Some(&ErrorCode::Forbidden));
        assert_eq!(first_correlation_id(&errors), Some("cid-9"));
        assert!(is_auth_error(&errors));
        assert!(!is_validation_error(&errors));
    }

    #[test]
    fn error_without_extensions_has_no_code() {
        let errors = parse_errors(r#"[{"message":"something broke"}]"#);
        assert_eq!(first_error_code(&errors), None);
        assert!(!is_auth_error(&errors));
    }

    #[test]
    fn auth_error_anywhere_in_the_list_is_detected() {
        let errors = parse_errors(
            r#"[
                {"message":"a","extensions":{"code":"INTERNAL"}},
                {"message":"b","extensions":{"code":"UNAUTHORIZED"}}
            ]"#,
        );
        assert!(is_auth_error(&errors));
    }

    #[test]
    fn field_errors_collects_validation_detail() {
        let errors = parse_errors(
            r#"[
                {"message":"v","extensions":{"code":"VALIDATION_ERROR","field":"email","message":"Invalid email"}},
                {"message":"v","extensions":{"code":"VALIDATION_ERROR","field":"password","message":"Too short"}}
            ]"#,
        );
        let fields = field_errors(&errors);
        assert_eq!(fields.get("email").map(String::as_str), Some("Invalid email"));
        assert_eq!(fields.get("password").map(String::as_str), Some("Too short"));
    }

    #[test]
    fn field_errors_is_empty_for_non_validation_errors() {
        let errors = parse_errors(
            r#"[{"message":"x","extensions":{"code":"INTERNAL","field":"email","message":"m"}}]"#,
        );
        assert!(field_errors(&errors).is_empty());
    }
}
