// SPDX-FileCopyrightText: 2026 SmartStore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `smartstore gst` command: look up business details by GSTIN.

use std::process::ExitCode;

use smartstore_api::{is_valid_gstin_format, normalize_gstin, ApiClient, ApiResult};
use smartstore_core::SmartstoreError;

use crate::report_failure;

/// Run the `smartstore gst` command.
pub async fn run_gst(client: &ApiClient, gstin: &str) -> Result<ExitCode, SmartstoreError> {
    if !is_valid_gstin_format(gstin) {
        eprintln!(
            "smartstore: `{}` does not look like a valid GSTIN (expected 15 characters, e.g. 27AAPFU0939F1ZV)",
            normalize_gstin(gstin)
        );
        return Ok(ExitCode::FAILURE);
    }

    match client.gst_lookup(gstin).await {
        ApiResult::Success { data, .. } => {
            println!("GSTIN:      {}", data.gstin);
            println!("Legal name: {}", data.details.legal_name);
            if let Some(trade_name) = &data.details.trade_name {
                println!("Trade name: {trade_name}");
            }
            if let Some(status) = &data.details.status {
                println!("Status:     {status}");
            }
            if let Some(constitution) = &data.details.constitution_type {
                println!("Type:       {constitution}");
            }
            if let Some(address) = &data.details.address {
                let parts: Vec<&str> = [
                    address.line1.as_deref(),
                    address.line2.as_deref(),
                    address.city.as_deref(),
                    address.state.as_deref(),
                    address.pincode.as_deref(),
                ]
                .into_iter()
                .flatten()
                .collect();
                if !parts.is_empty() {
                    println!("Address:    {}", parts.join(", "));
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        ApiResult::Failure {
            error,
            correlation_id,
        } => {
            report_failure(&error, &correlation_id);
            Ok(ExitCode::FAILURE)
        }
    }
}
