// SPDX-FileCopyrightText: 2026 SmartStore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! JWT payload decoding and expiry validation.
//!
//! This is a client-side expiry check only: the token is treated as an
//! opaque three-segment string whose middle segment is base64url-encoded
//! JSON. No signature verification happens here -- the server remains the
//! authority; the client merely avoids sending requests it knows will be
//! rejected.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

/// Claims the client cares about. Unknown claims are ignored.
#[derive(Debug, Deserialize)]
pub struct Claims {
    /// Expiry as Unix seconds. Absent means the token never expires
    /// client-side (until explicitly cleared).
    #[serde(default)]
    pub exp: Option<i64>,
}

/// Decode the payload segment of a JWT.
///
/// Returns `None` unless the token has exactly three dot-separated
/// segments and the middle segment is valid base64url-encoded JSON for a
/// claims object. Any failure is swallowed -- decoding is total.
pub fn decode_payload(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let (_header, payload, _signature) =
        (segments.next()?, segments.next()?, segments.next()?);
    if segments.next().is_some() {
        return None;
    }

    // Tolerate padded tokens; the engine itself rejects padding.
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Whether a token is well-formed and unexpired.
///
/// A token with no `exp` claim is valid indefinitely; a token whose `exp`
/// is at or before the current time is invalid.
pub fn is_token_valid(token: &str) -> bool {
    match decode_payload(token) {
        Some(claims) => match claims.exp {
            Some(exp) => exp > chrono::Utc::now().timestamp(),
            None => true,
        },
        None => false,
    }
}
