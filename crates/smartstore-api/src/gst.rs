// SPDX-FileCopyrightText: 2026 SmartStore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! GST (Indian tax registration) lookup used during store onboarding.
//!
//! The backend proxies `GET /v1/gst/lookup?gstin=...` to a licensed GST
//! verification API. Unlike the auth endpoints, the lookup response is
//! not enveloped; the error shape is `{ error: { code, message } }`.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use smartstore_core::result::{MSG_INVALID_RESPONSE, MSG_NETWORK_UNREACHABLE};
use smartstore_core::{ApiResult, CorrelationId};
use tracing::{debug, warn};

use crate::client::{ApiClient, CORRELATION_ID_HEADER};

/// Indian GSTIN: 2-digit state code, 10-char PAN, entity number, scheme
/// letter, check character. Format check only; no checksum verification.
static GSTIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][0-9][A-Z][0-9A-Z]$").expect("valid pattern")
});

/// Uppercase and strip whitespace for display or API use.
pub fn normalize_gstin(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// True if the string looks like a valid Indian GSTIN (format only;
/// does not verify with the API).
pub fn is_valid_gstin_format(value: &str) -> bool {
    let normalized = normalize_gstin(value);
    normalized.len() == 15 && GSTIN_RE.is_match(&normalized)
}

/// Business details as registered with the GST authority.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GstBusinessDetails {
    /// Legal name of the business (as registered).
    pub legal_name: String,
    /// Trade name, if different from the legal name.
    #[serde(default)]
    pub trade_name: Option<String>,
    /// Registration status, e.g. "Active", "Cancelled".
    #[serde(default)]
    pub status: Option<String>,
    /// Principal place of business.
    #[serde(default)]
    pub address: Option<GstAddress>,
    /// Constitution type, e.g. "Private Limited Company".
    #[serde(default)]
    pub constitution_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GstAddress {
    #[serde(default)]
    pub line1: Option<String>,
    #[serde(default)]
    pub line2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub pincode: Option<String>,
}

/// Success payload of the GST lookup.
#[derive(Debug, Clone)]
pub struct GstLookupData {
    pub gstin: String,
    pub details: GstBusinessDetails,
}

#[derive(Deserialize)]
struct GstLookupWire {
    #[serde(default)]
    gstin: Option<String>,
    #[serde(default)]
    details: Option<GstBusinessDetails>,
}

#[derive(Deserialize)]
struct GstErrorWire {
    #[serde(default)]
    error: Option<GstErrorBody>,
}

#[derive(Deserialize)]
struct GstErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl ApiClient {
    /// Fetch business details by GST number.
    ///
    /// The GSTIN is normalized before sending; an empty input fails
    /// locally without a network call. A response without
    /// `details.legalName` is treated as invalid.
    pub async fn gst_lookup(&self, gstin: &str) -> ApiResult<GstLookupData> {
        let correlation_id = CorrelationId::generate();
        let normalized = normalize_gstin(gstin);
        if normalized.is_empty() {
            return ApiResult::failure("GST number is required.", correlation_id);
        }

        debug!(correlation_id = %correlation_id, gstin = %normalized, "looking up GST details");
        let response = match self
            .http()
            .get(self.endpoint("/v1/gst/lookup"))
            .query(&[("gstin", normalized.as_str())])
            .header("accept", "application/json")
            .header(CORRELATION_ID_HEADER, correlation_id.as_str())
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(correlation_id = %correlation_id, error = %e, "GST lookup failed at transport level");
                return ApiResult::failure(MSG_NETWORK_UNREACHABLE, correlation_id);
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(_) => return ApiResult::failure(MSG_NETWORK_UNREACHABLE, correlation_id),
        };

        let parsed: serde_json::Value = match serde_json::from_str(&body) {
            Ok(value) => value,
            Err(_) if status.is_success() => {
                return ApiResult::failure(MSG_INVALID_RESPONSE, correlation_id);
            }
            Err(_) => {
                return ApiResult::failure("Request failed.", correlation_id);
            }
        };

        if !status.is_success() {
            let message = serde_json::from_value::<GstErrorWire>(parsed)
                .ok()
                .and_then(|wire| wire.error)
                .and_then(|error| error.message)
                .unwrap_or_else(|| format!("Request failed ({status})."));
            return ApiResult::failure(message, correlation_id);
        }

        let wire: GstLookupWire = match serde_json::from_value(parsed) {
            Ok(wire) => wire,
            Err(_) => return ApiResult::failure(MSG_INVALID_RESPONSE, correlation_id),
        };

        match wire.details {
            Some(details) if !details.legal_name.is_empty() => ApiResult::Success {
                data: GstLookupData {
                    gstin: wire.gstin.unwrap_or(normalized),
                    details,
                },
                correlation_id,
            },
            _ => ApiResult::failure(
                "Invalid response: missing business details.",
                correlation_id,
            ),
        }
    }
}
