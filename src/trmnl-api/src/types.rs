// SPDX-FileCopyrightText: 2025 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Result DTOs for decoded API responses.

use std::fmt;

use serde::Serialize;

/// Status value assumed when a response carries no usable `status` field.
pub const DEFAULT_STATUS: i32 = 200;

/// How a setup response decode concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupOutcome {
    Ok,
    StatusError,
    DeserializationError,
}

impl SetupOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            SetupOutcome::Ok => "ok",
            SetupOutcome::StatusError => "status_error",
            SetupOutcome::DeserializationError => "deserialization_error",
        }
    }
}

impl fmt::Display for SetupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the provisioning flow should do with a decoded result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    /// Store the credentials and continue.
    Proceed,
    /// Show `status` / `message` to the user.
    ReportStatus,
    /// The body was unreadable; retry the request.
    Retry,
}

/// Decoded reply to a device setup (registration) request.
///
/// `api_key`, `friendly_id` and `image_url` are only ever filled in when
/// `outcome` is [`SetupOutcome::Ok`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetupResult {
    pub outcome: SetupOutcome,
    pub status: i32,
    pub message: String,
    pub api_key: String,
    pub friendly_id: String,
    pub image_url: String,
}

impl SetupResult {
    /// A result with the given outcome and every other field at its default.
    pub fn new(outcome: SetupOutcome) -> Self {
        Self {
            outcome,
            status: DEFAULT_STATUS,
            message: String::new(),
            api_key: String::new(),
            friendly_id: String::new(),
            image_url: String::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.outcome == SetupOutcome::Ok
    }

    /// Borrow the issued credentials, if the setup succeeded.
    pub fn credentials(&self) -> Option<DeviceCredentials<'_>> {
        if !self.is_ok() {
            return None;
        }
        Some(DeviceCredentials {
            api_key: &self.api_key,
            friendly_id: &self.friendly_id,
            image_url: &self.image_url,
        })
    }

    pub fn next_step(&self) -> NextStep {
        match self.outcome {
            SetupOutcome::Ok => NextStep::Proceed,
            SetupOutcome::StatusError => NextStep::ReportStatus,
            SetupOutcome::DeserializationError => NextStep::Retry,
        }
    }
}

/// Credentials handed to a device by a successful setup call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceCredentials<'a> {
    pub api_key: &'a str,
    pub friendly_id: &'a str,
    pub image_url: &'a str,
}
