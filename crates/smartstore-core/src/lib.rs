// SPDX-FileCopyrightText: 2026 SmartStore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the SmartStore client workspace.
//!
//! This crate provides the foundational types shared by the session store
//! and the API envelope client: the error type, correlation ids, the
//! backend error-code taxonomy, the wire envelope, and the discriminated
//! [`ApiResult`] union every API operation resolves to.

pub mod envelope;
pub mod error;
pub mod result;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use envelope::{Envelope, ErrorBody};
pub use error::SmartstoreError;
pub use result::{user_message, ApiResult};
pub use types::{CorrelationId, ErrorCode};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smartstore_error_has_all_variants() {
        // Verify all 4 error variants exist and can be constructed.
        let _config = SmartstoreError::Config("test".into());
        let _session = SmartstoreError::Session {
            message: "test".into(),
            source: Some(Box::new(std::io::Error::other("test"))),
        };
        let _transport = SmartstoreError::Transport {
            message: "test".into(),
            source: None,
        };
        let _internal = SmartstoreError::Internal("test".into());
    }

    #[test]
    fn api_result_variants_are_mutually_exclusive() {
        let ok: ApiResult<u32> = ApiResult::Success {
            data: 7,
            correlation_id: CorrelationId::generate(),
        };
        let err: ApiResult<u32> = ApiResult::Failure {
            error: "boom".into(),
            correlation_id: CorrelationId::generate(),
        };

        assert!(ok.is_ok());
        assert!(!err.is_ok());
        assert!(!ok.correlation_id().as_str().is_empty());
        assert!(!err.correlation_id().as_str().is_empty());
    }
}
