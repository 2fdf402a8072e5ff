// SPDX-FileCopyrightText: 2025 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Response decoding for the TRMNL device API.
//!
//! This crate turns raw API response bodies into typed results that the
//! provisioning flow can branch on, reconciling the shapes returned by the
//! hosted service and compatible self-hosted servers.

pub mod codec;
pub mod setup;
pub mod types;

// Re-export commonly used items
pub use codec::{field_or, has_field, FieldValue};
pub use setup::parse_api_setup_response;
pub use types::{DeviceCredentials, NextStep, SetupOutcome, SetupResult};
