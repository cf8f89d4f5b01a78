// SPDX-FileCopyrightText: 2026 SmartStore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire-level response envelope returned by the REST backend.
//!
//! Every REST response is a single wrapper object carrying `data`,
//! `error`, and `correlationId`. The `data` and `error` fields are
//! mutually exclusive per response; `correlationId` is mandatory -- a
//! body missing it does not deserialize and is treated as a shape
//! mismatch by the client.

use serde::{Deserialize, Serialize};

use crate::types::ErrorCode;

/// Structured error object carried inside an [`Envelope`] or a GraphQL
/// error extension.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Taxonomy code (open-ended, see [`ErrorCode`]).
    pub code: ErrorCode,
    /// Human-readable message from the server. Empty when omitted; the
    /// message mapping falls back to a generic string in that case.
    #[serde(default)]
    pub message: String,
    /// Optional structured detail payload (e.g. field-level errors).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// REST response wrapper: `{ data, error, correlationId }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub error: Option<ErrorBody>,
    pub correlation_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct MessageData {
        message: String,
    }

    #[test]
    fn success_envelope_deserializes() {
        let body = r#"{"data":{"message":"check your inbox"},"error":null,"correlationId":"cid-1"}"#;
        let envelope: Envelope<MessageData> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.unwrap().message, "check your inbox");
        assert!(envelope.error.is_none());
        assert_eq!(envelope.correlation_id, "cid-1");
    }

    #[test]
    fn error_envelope_deserializes_with_details() {
        let body = r#"{
            "data": null,
            "error": {"code":"VALIDATION_ERROR","message":"bad input","details":{"email":"invalid"}},
            "correlationId": "cid-2"
        }"#;
        let envelope: Envelope<MessageData> = serde_json::from_str(body).unwrap();
        assert!(envelope.data.is_none());
        let error = envelope.error.unwrap();
        assert_eq!(error.code, ErrorCode::ValidationError);
        assert_eq!(error.message, "bad input");
        assert!(error.details.is_some());
    }

    #[test]
    fn envelope_without_correlation_id_is_rejected() {
        let body = r#"{"data":null,"error":null}"#;
        let result = serde_json::from_str::<Envelope<MessageData>>(body);
        assert!(result.is_err(), "correlationId is mandatory");
    }
}
