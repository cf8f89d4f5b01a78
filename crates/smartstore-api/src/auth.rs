// SPDX-FileCopyrightText: 2026 SmartStore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! REST auth operations: signup and the OAuth start URL.

use std::fmt;

use serde::{Deserialize, Serialize};
use smartstore_core::{ApiResult, CorrelationId};
use tracing::debug;

use crate::client::{ApiClient, CORRELATION_ID_HEADER};

/// Input to [`ApiClient::signup`].
#[derive(Clone)]
pub struct SignupInput {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

impl fmt::Debug for SignupInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupInput")
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .field("name", &self.name)
            .finish()
    }
}

/// Success payload of the signup endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupData {
    pub message: String,
}

/// Wire body for `POST /v1/auth/signup`. Email is normalized and an
/// empty name is omitted entirely rather than sent as "".
#[derive(Serialize)]
struct SignupBody<'a> {
    email: String,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

/// OAuth providers the backend can start a flow for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    Meta,
}

impl OAuthProvider {
    /// Path segment used by the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Meta => "meta",
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Success payload of the OAuth start endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthStartData {
    pub redirect_url: String,
}

impl ApiClient {
    /// Calls `POST /v1/auth/signup` and normalizes the envelope.
    pub async fn signup(&self, input: &SignupInput) -> ApiResult<SignupData> {
        let correlation_id = CorrelationId::generate();

        let body = SignupBody {
            email: input.email.trim().to_lowercase(),
            password: &input.password,
            name: input
                .name
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string),
        };

        debug!(correlation_id = %correlation_id, "sending signup request");
        let request = self
            .http()
            .post(self.endpoint("/v1/auth/signup"))
            .header(CORRELATION_ID_HEADER, correlation_id.as_str())
            .json(&body);

        self.send_envelope(request, correlation_id).await
    }

    /// Calls `GET /v1/auth/oauth/{provider}/start` and returns the URL
    /// the user agent should be sent to.
    pub async fn oauth_start_url(
        &self,
        provider: OAuthProvider,
        redirect_uri: Option<&str>,
    ) -> ApiResult<OAuthStartData> {
        let correlation_id = CorrelationId::generate();

        let mut request = self
            .http()
            .get(self.endpoint(&format!("/v1/auth/oauth/{provider}/start")))
            .header(CORRELATION_ID_HEADER, correlation_id.as_str());
        if let Some(uri) = redirect_uri {
            request = request.query(&[("redirect_uri", uri)]);
        }

        debug!(correlation_id = %correlation_id, %provider, "requesting OAuth start URL");
        self.send_envelope(request, correlation_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use smartstore_config::model::ApiConfig;
    use smartstore_core::result::{
        MSG_FIX_FORM, MSG_INVALID_FORMAT, MSG_INVALID_RESPONSE, MSG_NETWORK_UNREACHABLE,
        MSG_SOMETHING_WRONG,
    };
    use smartstore_session::MemorySessionStore;
    use wiremock::matchers::{body_partial_json, header, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> ApiClient {
        ApiClient::new(
            &ApiConfig {
                base_url: base_url.to_string(),
            },
            Arc::new(MemorySessionStore::new()),
        )
        .unwrap()
    }

    fn signup_input() -> SignupInput {
        SignupInput {
            email: "Merchant@Example.COM ".to_string(),
            password: "hunter2hunter2".to_string(),
            name: Some("  ".to_string()),
        }
    }

    #[tokio::test]
    async fn signup_success_uses_server_correlation_id() {
        let server = MockServer::start().await;

        let response_body = serde_json::json!({
            "data": {"message": "Account created. Check your inbox."},
            "error": null,
            "correlationId": "cid-1"
        });

        // Email must arrive trimmed and lowercased; blank name omitted.
        Mock::given(method("POST"))
            .and(path("/v1/auth/signup"))
            .and(header("content-type", "application/json"))
            .and(header_exists("x-correlation-id"))
            .and(body_partial_json(
                serde_json::json!({"email": "merchant@example.com"}),
            ))
            .respond_with(ResponseTemplate::new(202).set_body_json(&response_body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.signup(&signup_input()).await;

        assert!(result.is_ok());
        assert_eq!(result.correlation_id().as_str(), "cid-1");
        assert_eq!(
            result.data().unwrap().message,
            "Account created. Check your inbox."
        );
    }

    #[tokio::test]
    async fn signup_omits_blank_name_from_body() {
        let server = MockServer::start().await;

        let response_body = serde_json::json!({
            "data": {"message": "ok"},
            "error": null,
            "correlationId": "cid-name"
        });

        let mut received_name_key = false;
        Mock::given(method("POST"))
            .and(path("/v1/auth/signup"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.signup(&signup_input()).await;
        assert!(result.is_ok());

        for req in server.received_requests().await.unwrap() {
            let body: serde_json::Value = serde_json::from_slice(&req.body).unwrap();
            received_name_key |= body.get("name").is_some();
        }
        assert!(!received_name_key, "blank name must be omitted entirely");
    }

    #[tokio::test]
    async fn signup_validation_error_maps_to_form_message() {
        let server = MockServer::start().await;

        let response_body = serde_json::json!({
            "data": null,
            "error": {"code": "VALIDATION_ERROR", "message": "bad input"},
            "correlationId": "cid-2"
        });

        Mock::given(method("POST"))
            .and(path("/v1/auth/signup"))
            .respond_with(ResponseTemplate::new(400).set_body_json(&response_body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.signup(&signup_input()).await;

        assert!(!result.is_ok());
        assert_eq!(result.error_message(), Some(MSG_FIX_FORM));
        assert_eq!(result.correlation_id().as_str(), "cid-2");
    }

    #[tokio::test]
    async fn signup_conflict_passes_server_message_through() {
        let server = MockServer::start().await;

        let response_body = serde_json::json!({
            "data": null,
            "error": {"code": "CONFLICT", "message": "An account with this email already exists."},
            "correlationId": "cid-3"
        });

        Mock::given(method("POST"))
            .and(path("/v1/auth/signup"))
            .respond_with(ResponseTemplate::new(409).set_body_json(&response_body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.signup(&signup_input()).await;

        assert_eq!(
            result.error_message(),
            Some("An account with this email already exists.")
        );
    }

    #[tokio::test]
    async fn signup_network_failure_is_reported_with_local_correlation_id() {
        // Nothing is listening here; the connection is refused.
        let client = test_client("http://127.0.0.1:9");
        let result = client.signup(&signup_input()).await;

        assert!(!result.is_ok());
        assert_eq!(result.error_message(), Some(MSG_NETWORK_UNREACHABLE));
        assert!(!result.correlation_id().as_str().is_empty());
    }

    #[tokio::test]
    async fn signup_non_json_body_is_invalid_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/auth/signup"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway error</html>"))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.signup(&signup_input()).await;

        assert_eq!(result.error_message(), Some(MSG_INVALID_RESPONSE));
        assert!(!result.correlation_id().as_str().is_empty());
    }

    #[tokio::test]
    async fn signup_body_without_correlation_id_is_shape_invalid() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/auth/signup"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"data": null, "error": null})),
            )
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.signup(&signup_input()).await;

        assert_eq!(result.error_message(), Some(MSG_INVALID_FORMAT));
    }

    #[tokio::test]
    async fn signup_empty_envelope_is_generic_failure() {
        let server = MockServer::start().await;

        let response_body = serde_json::json!({
            "data": null,
            "error": null,
            "correlationId": "cid-4"
        });

        Mock::given(method("POST"))
            .and(path("/v1/auth/signup"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.signup(&signup_input()).await;

        assert_eq!(result.error_message(), Some(MSG_SOMETHING_WRONG));
        assert_eq!(result.correlation_id().as_str(), "cid-4");
    }

    #[tokio::test]
    async fn signup_empty_echoed_correlation_id_falls_back_to_local() {
        let server = MockServer::start().await;

        let response_body = serde_json::json!({
            "data": {"message": "ok"},
            "error": null,
            "correlationId": ""
        });

        Mock::given(method("POST"))
            .and(path("/v1/auth/signup"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.signup(&signup_input()).await;

        assert!(result.is_ok());
        assert!(!result.correlation_id().as_str().is_empty());
    }

    #[tokio::test]
    async fn oauth_start_returns_redirect_url() {
        let server = MockServer::start().await;

        let response_body = serde_json::json!({
            "data": {"redirectUrl": "https://accounts.google.com/o/oauth2/auth?state=xyz"},
            "error": null,
            "correlationId": "cid-oauth"
        });

        Mock::given(method("GET"))
            .and(path("/v1/auth/oauth/google/start"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.oauth_start_url(OAuthProvider::Google, None).await;

        assert!(result.is_ok());
        assert!(result
            .data()
            .unwrap()
            .redirect_url
            .starts_with("https://accounts.google.com"));
    }

    #[tokio::test]
    async fn oauth_start_passes_redirect_uri_for_meta() {
        let server = MockServer::start().await;

        let response_body = serde_json::json!({
            "data": {"redirectUrl": "https://facebook.com/dialog/oauth"},
            "error": null,
            "correlationId": "cid-meta"
        });

        Mock::given(method("GET"))
            .and(path("/v1/auth/oauth/meta/start"))
            .and(wiremock::matchers::query_param(
                "redirect_uri",
                "https://app.smartstore.example/auth/callback",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client
            .oauth_start_url(
                OAuthProvider::Meta,
                Some("https://app.smartstore.example/auth/callback"),
            )
            .await;

        assert!(result.is_ok());
    }

    #[test]
    fn signup_input_debug_redacts_password() {
        let rendered = format!("{:?}", signup_input());
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("[redacted]"));
    }
}
