// SPDX-FileCopyrightText: 2025 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Decoder for the `/api/setup` response body.

use serde_json::Value;
use tracing::{error, info};

use crate::codec::{field_or, has_field};
use crate::types::{SetupOutcome, SetupResult, DEFAULT_STATUS};

/// Decode a setup response body.
///
/// Never fails: unparseable input yields [`SetupOutcome::DeserializationError`]
/// and an explicit non-200 `status` yields [`SetupOutcome::StatusError`].
/// Self-hosted servers omit `status` on success, so a missing `status`
/// counts as 200. Only the first JSON document is read; bytes after it
/// (padding, a NUL terminator) are ignored.
pub fn parse_api_setup_response(payload: impl AsRef<[u8]>) -> SetupResult {
    let doc = match serde_json::Deserializer::from_slice(payload.as_ref())
        .into_iter::<Value>()
        .next()
    {
        Some(Ok(doc)) => doc,
        Some(Err(e)) => {
            error!("JSON deserialization error: {}", e);
            return SetupResult::new(SetupOutcome::DeserializationError);
        }
        None => {
            error!("JSON deserialization error: empty input");
            return SetupResult::new(SetupOutcome::DeserializationError);
        }
    };

    let mut response = SetupResult::new(SetupOutcome::Ok);
    response.status = field_or(&doc, "status", DEFAULT_STATUS);
    response.message = field_or(&doc, "message", String::new());

    // Only an explicit status other than 200 is a failure.
    if has_field(&doc, "status") && response.status != DEFAULT_STATUS {
        info!(
            "setup status FAIL: status={} message={:?}",
            response.status, response.message
        );
        response.outcome = SetupOutcome::StatusError;
        return response;
    }

    response.api_key = field_or(&doc, "api_key", String::new());
    response.friendly_id = field_or(&doc, "friendly_id", String::new());
    response.image_url = field_or(&doc, "image_url", String::new());
    response
}
