// SPDX-FileCopyrightText: 2026 SmartStore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the SmartStore backend.
//!
//! Provides [`ApiClient`], which owns the connection pool, attaches
//! correlation ids and bearer tokens at request-construction time, and
//! normalizes responses. Each call terminates in exactly one
//! [`ApiResult`] branch: network failure, unparsable body, shape
//! mismatch, server error, or success. There is no retry loop and no
//! local timeout at this layer; retries, if any, belong to the caller.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use smartstore_config::model::ApiConfig;
use smartstore_core::result::{
    MSG_INVALID_FORMAT, MSG_INVALID_RESPONSE, MSG_NETWORK_UNREACHABLE, MSG_SOMETHING_WRONG,
};
use smartstore_core::{user_message, ApiResult, CorrelationId, Envelope, SmartstoreError};
use smartstore_session::SessionStore;
use tracing::{debug, warn};

use crate::graphql::{self, GraphQLRequest, GraphQLResponse};
use crate::policy::UnauthorizedPolicy;

/// Header carrying the client-generated correlation id.
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// HTTP/GraphQL client for the SmartStore backend.
///
/// The session store is read for the bearer token when each request is
/// built, not locked for the duration of the call: a logout racing an
/// in-flight request may let that request go out with a since-cleared
/// token. That is accepted, not guarded against.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
    policy: Option<Arc<UnauthorizedPolicy>>,
}

impl ApiClient {
    /// Creates a new client against the configured backend.
    pub fn new(
        config: &ApiConfig,
        session: Arc<dyn SessionStore>,
    ) -> Result<Self, SmartstoreError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url)
            .map_err(|e| SmartstoreError::Config(format!("invalid api.base_url: {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| SmartstoreError::Transport {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            http,
            base_url,
            session,
            policy: None,
        })
    }

    /// Attach the global authorization-failure policy (see
    /// [`UnauthorizedPolicy`]).
    pub fn with_unauthorized_policy(mut self, policy: Arc<UnauthorizedPolicy>) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Send a REST request and normalize the enveloped response.
    ///
    /// Implements the per-call contract: transport failure, unparsable
    /// body, shape mismatch, then the data/error/empty envelope branches.
    /// The server-echoed correlation id wins when present and non-empty.
    pub(crate) async fn send_envelope<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        correlation_id: CorrelationId,
    ) -> ApiResult<T> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(correlation_id = %correlation_id, error = %e, "request failed at transport level");
                return ApiResult::failure(MSG_NETWORK_UNREACHABLE, correlation_id);
            }
        };

        let status = response.status();
        debug!(correlation_id = %correlation_id, status = %status, "response received");

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(correlation_id = %correlation_id, error = %e, "failed to read response body");
                return ApiResult::failure(MSG_NETWORK_UNREACHABLE, correlation_id);
            }
        };

        if body.trim().is_empty() {
            return ApiResult::failure(MSG_INVALID_FORMAT, correlation_id);
        }

        let parsed: serde_json::Value = match serde_json::from_str(&body) {
            Ok(value) => value,
            Err(e) => {
                warn!(correlation_id = %correlation_id, error = %e, "response body is not JSON");
                return ApiResult::failure(MSG_INVALID_RESPONSE, correlation_id);
            }
        };

        let envelope: Envelope<T> = match serde_json::from_value(parsed) {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!(correlation_id = %correlation_id, error = %e, "response body does not match the envelope shape");
                return ApiResult::failure(MSG_INVALID_FORMAT, correlation_id);
            }
        };

        let correlation_id = if envelope.correlation_id.is_empty() {
            correlation_id
        } else {
            CorrelationId::from(envelope.correlation_id)
        };

        if status.is_success() {
            if let Some(data) = envelope.data {
                return ApiResult::Success {
                    data,
                    correlation_id,
                };
            }
        }

        if let Some(error) = envelope.error {
            debug!(correlation_id = %correlation_id, code = %error.code, "server returned an error envelope");
            return ApiResult::failure(
                user_message(&error.code, Some(&error.message)),
                correlation_id,
            );
        }

        // Schema-valid but carrying neither data nor error.
        ApiResult::failure(MSG_SOMETHING_WRONG, correlation_id)
    }

    /// Post a GraphQL operation and normalize the response.
    ///
    /// `exempt_from_policy` suppresses the global session-clear policy
    /// for operations that must tolerate authorization errors (logout).
    /// The policy fires at most once per response, even when several
    /// errors in it carry an authorization code.
    pub(crate) async fn post_graphql(
        &self,
        query: &str,
        variables: serde_json::Value,
        exempt_from_policy: bool,
    ) -> GraphQLOutcome {
        let correlation_id = CorrelationId::generate();

        let mut request = self
            .http
            .post(self.endpoint("/graphql"))
            .header(CORRELATION_ID_HEADER, correlation_id.as_str())
            .json(&GraphQLRequest { query, variables });
        if let Some(token) = self.session.access_token() {
            request = request.bearer_auth(token);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(correlation_id = %correlation_id, error = %e, "GraphQL request failed at transport level");
                return GraphQLOutcome::Failed {
                    error: MSG_NETWORK_UNREACHABLE.to_string(),
                    correlation_id,
                };
            }
        };

        let status = response.status();
        let echoed = response
            .headers()
            .get(CORRELATION_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        debug!(correlation_id = %correlation_id, status = %status, "GraphQL response received");

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(correlation_id = %correlation_id, error = %e, "failed to read GraphQL response body");
                return GraphQLOutcome::Failed {
                    error: MSG_NETWORK_UNREACHABLE.to_string(),
                    correlation_id,
                };
            }
        };

        let parsed: serde_json::Value = match serde_json::from_str(&body) {
            Ok(value) => value,
            Err(e) => {
                warn!(correlation_id = %correlation_id, error = %e, "GraphQL response body is not JSON");
                return GraphQLOutcome::Failed {
                    error: MSG_INVALID_RESPONSE.to_string(),
                    correlation_id,
                };
            }
        };

        let response: GraphQLResponse = match serde_json::from_value(parsed) {
            Ok(response) => response,
            Err(e) => {
                warn!(correlation_id = %correlation_id, error = %e, "GraphQL response does not match the expected shape");
                return GraphQLOutcome::Failed {
                    error: MSG_INVALID_FORMAT.to_string(),
                    correlation_id,
                };
            }
        };

        // Server echo wins: response header first, then error extensions.
        let correlation_id = echoed
            .filter(|id| !id.is_empty())
            .or_else(|| graphql::first_correlation_id(&response.errors).map(str::to_string))
            .map(CorrelationId::from)
            .unwrap_or(correlation_id);

        if !exempt_from_policy && graphql::is_auth_error(&response.errors) {
            if let Some(policy) = &self.policy {
                policy.fire();
            }
        }

        GraphQLOutcome::Completed {
            response,
            correlation_id,
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("policy", &self.policy.is_some())
            .finish_non_exhaustive()
    }
}

/// Result of the shared GraphQL transport + parse stage.
///
/// `Completed` means a shape-valid GraphQL body arrived; the operation
/// modules decide between data, mapped error, and empty-envelope
/// branches. `Failed` means a terminal transport or format failure.
#[derive(Debug)]
pub(crate) enum GraphQLOutcome {
    Completed {
        response: GraphQLResponse,
        correlation_id: CorrelationId,
    },
    Failed {
        error: String,
        correlation_id: CorrelationId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartstore_session::MemorySessionStore;

    fn client(base_url: &str) -> ApiClient {
        ApiClient::new(
            &ApiConfig {
                base_url: base_url.to_string(),
            },
            Arc::new(MemorySessionStore::new()),
        )
        .unwrap()
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let client = client("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.endpoint("/graphql"), "http://localhost:3000/graphql");
    }

    #[test]
    fn invalid_base_url_is_a_config_error() {
        let result = ApiClient::new(
            &ApiConfig {
                base_url: "not a url".to_string(),
            },
            Arc::new(MemorySessionStore::new()),
        );
        assert!(matches!(result, Err(SmartstoreError::Config(_))));
    }

    #[test]
    fn debug_does_not_expose_session_contents() {
        let session = Arc::new(MemorySessionStore::new());
        session.set_session("secret-token", "user-1").unwrap();
        let client = ApiClient::new(
            &ApiConfig {
                base_url: "http://localhost:3000".to_string(),
            },
            session,
        )
        .unwrap();
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("secret-token"));
    }
}
