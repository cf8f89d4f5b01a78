// SPDX-FileCopyrightText: 2026 SmartStore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! GraphQL identity operations: `IamLogin` and `IamLogout`.
//!
//! Login returns the access token and user for the caller to persist;
//! this module never writes the session store itself. Logout is
//! idempotent: no stored token short-circuits to success without a
//! network call, and an authorization error from the backend counts as
//! already-logged-out.

use serde::Deserialize;
use serde_json::json;
use smartstore_core::result::{MSG_INVALID_FORMAT, MSG_SOMETHING_WRONG};
use smartstore_core::{user_message, ApiResult, CorrelationId, ErrorCode};
use tracing::debug;

use crate::client::{ApiClient, GraphQLOutcome};
use crate::graphql::{self, GraphQLError};

const IAM_LOGIN_MUTATION: &str = "mutation IamLogin($input: IamLoginInput!) { iamLogin(input: $input) { accessToken user { id email name status roles } } }";

const IAM_LOGOUT_MUTATION: &str = "mutation IamLogout { iamLogout { message } }";

/// The authenticated user as returned by `IamLogin`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Success payload of `IamLogin`.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub access_token: String,
    pub user: UserAccount,
}

impl std::fmt::Debug for LoginData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginData")
            .field("access_token", &"[redacted]")
            .field("user", &self.user)
            .finish()
    }
}

/// Success payload of `IamLogout`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogoutData {
    #[serde(default)]
    pub message: Option<String>,
}

/// Map the first GraphQL error through the taxonomy, or fall back to the
/// generic message when the error list is empty.
fn failure_from_errors<T>(
    errors: &[GraphQLError],
    correlation_id: CorrelationId,
) -> ApiResult<T> {
    match errors.first() {
        Some(error) => {
            let code = error
                .code()
                .cloned()
                .unwrap_or(ErrorCode::Other(String::new()));
            ApiResult::failure(user_message(&code, Some(&error.message)), correlation_id)
        }
        None => ApiResult::failure(MSG_SOMETHING_WRONG, correlation_id),
    }
}

impl ApiClient {
    /// Calls the `IamLogin` mutation.
    ///
    /// On success the caller receives the access token and user id and
    /// decides whether to persist them via the session store.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginData> {
        let variables = json!({"input": {"email": email, "password": password}});

        match self
            .post_graphql(IAM_LOGIN_MUTATION, variables, false)
            .await
        {
            GraphQLOutcome::Failed {
                error,
                correlation_id,
            } => ApiResult::failure(error, correlation_id),
            GraphQLOutcome::Completed {
                response,
                correlation_id,
            } => {
                let login_value = response
                    .data
                    .as_ref()
                    .and_then(|data| data.get("iamLogin"))
                    .filter(|value| !value.is_null());

                if let Some(value) = login_value {
                    return match serde_json::from_value::<LoginData>(value.clone()) {
                        Ok(data) => {
                            debug!(correlation_id = %correlation_id, user_id = %data.user.id, "login succeeded");
                            ApiResult::Success {
                                data,
                                correlation_id,
                            }
                        }
                        Err(_) => ApiResult::failure(MSG_INVALID_FORMAT, correlation_id),
                    };
                }

                failure_from_errors(&response.errors, correlation_id)
            }
        }
    }

    /// Calls the `IamLogout` mutation.
    ///
    /// With no stored token this resolves to success locally, without a
    /// network call. An `UNAUTHORIZED`/`FORBIDDEN` response also resolves
    /// to success: the session is gone either way.
    pub async fn logout(&self) -> ApiResult<LogoutData> {
        if self.session().access_token().is_none() {
            debug!("no stored token, treating logout as already complete");
            return ApiResult::Success {
                data: LogoutData::default(),
                correlation_id: CorrelationId::generate(),
            };
        }

        match self.post_graphql(IAM_LOGOUT_MUTATION, json!({}), true).await {
            GraphQLOutcome::Failed {
                error,
                correlation_id,
            } => ApiResult::failure(error, correlation_id),
            GraphQLOutcome::Completed {
                response,
                correlation_id,
            } => {
                if graphql::is_auth_error(&response.errors) {
                    debug!(correlation_id = %correlation_id, "token already rejected, treating logout as complete");
                    return ApiResult::Success {
                        data: LogoutData::default(),
                        correlation_id,
                    };
                }

                let logout_value = response
                    .data
                    .as_ref()
                    .and_then(|data| data.get("iamLogout"))
                    .filter(|value| !value.is_null());

                if let Some(value) = logout_value {
                    return match serde_json::from_value::<LogoutData>(value.clone()) {
                        Ok(data) => ApiResult::Success {
                            data,
                            correlation_id,
                        },
                        Err(_) => ApiResult::failure(MSG_INVALID_FORMAT, correlation_id),
                    };
                }

                failure_from_errors(&response.errors, correlation_id)
            }
        }
    }
}
