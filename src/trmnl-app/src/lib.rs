// SPDX-FileCopyrightText: 2025 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

pub mod config;
pub mod logging;

pub type DynResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub use config::{ConfigError, ConfigFile};
pub use logging::{init_logging, parse_level};
