// SPDX-FileCopyrightText: 2026 SmartStore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! API envelope client for the SmartStore backend.
//!
//! [`ApiClient`] performs the outbound calls used by the auth feature
//! (REST signup, GraphQL login/logout, OAuth start, GST lookup) and
//! normalizes every possible outcome -- success data, typed error,
//! network failure, malformed body -- into the [`ApiResult`] union.
//!
//! The client never mutates the session store as part of a data call;
//! callers use the result to decide whether to persist or clear the
//! session. The only exception is the [`UnauthorizedPolicy`] layered
//! under the GraphQL path, which clears the session and forces
//! navigation to login when the backend reports an authorization error.

pub mod auth;
pub mod client;
pub mod graphql;
pub mod gst;
pub mod iam;
pub mod policy;

pub use auth::{OAuthProvider, OAuthStartData, SignupData, SignupInput};
pub use client::ApiClient;
pub use gst::{is_valid_gstin_format, normalize_gstin, GstLookupData};
pub use iam::{LoginData, LogoutData, UserAccount};
pub use policy::UnauthorizedPolicy;

pub use smartstore_core::ApiResult;
