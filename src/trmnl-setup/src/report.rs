// SPDX-FileCopyrightText: 2025 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Printing and exit codes for decoded setup results.

use trmnl_api::{SetupOutcome, SetupResult};

use crate::config::OutputFormat;

const REDACTED_VISIBLE_CHARS: usize = 4;

/// Exit code when the payload or config could not be read at all.
pub const FAULT_EXIT_CODE: i32 = 3;

/// Process exit code for a decode outcome.
pub fn exit_code(outcome: SetupOutcome) -> i32 {
    match outcome {
        SetupOutcome::Ok => 0,
        SetupOutcome::StatusError => 1,
        SetupOutcome::DeserializationError => 2,
    }
}

/// Keep the last few characters of a key and mask the rest.
pub fn redact(key: &str) -> String {
    let count = key.chars().count();
    if count <= REDACTED_VISIBLE_CHARS {
        return "*".repeat(count);
    }
    let tail: String = key.chars().skip(count - REDACTED_VISIBLE_CHARS).collect();
    format!("{}{}", "*".repeat(count - REDACTED_VISIBLE_CHARS), tail)
}

/// Render a result for the terminal.
pub fn render(result: &SetupResult, format: OutputFormat, redact_api_key: bool) -> String {
    let mut shown = result.clone();
    if redact_api_key {
        shown.api_key = redact(&shown.api_key);
    }
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&shown).unwrap_or_else(|_| "{}".to_string())
        }
        OutputFormat::Text => render_text(&shown),
    }
}

fn render_text(result: &SetupResult) -> String {
    let mut out = format!("outcome: {}\n", result.outcome);
    match result.outcome {
        SetupOutcome::Ok => {
            out.push_str(&format!("status: {}\n", result.status));
            if !result.message.is_empty() {
                out.push_str(&format!("message: {}\n", result.message));
            }
            out.push_str(&format!("api_key: {}\n", result.api_key));
            out.push_str(&format!("friendly_id: {}\n", result.friendly_id));
            out.push_str(&format!("image_url: {}\n", result.image_url));
        }
        SetupOutcome::StatusError => {
            out.push_str(&format!("status: {}\n", result.status));
            out.push_str(&format!("message: {}\n", result.message));
        }
        SetupOutcome::DeserializationError => {}
    }
    out
}
