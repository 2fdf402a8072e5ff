// SPDX-FileCopyrightText: 2025 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Configuration file support for trmnl-setup.
//!
//! Settings live in the `[trmnl-setup]` section of `trmnl-rs.toml`, searched in:
//! 1. Path specified via `--config` CLI argument
//! 2. `./trmnl-rs.toml` (current directory)
//! 3. `~/.config/trmnl-rs/trmnl-rs.toml` (XDG config)
//! 4. `/etc/trmnl-rs/trmnl-rs.toml` (system-wide)

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use trmnl_app::{parse_level, ConfigError, ConfigFile};

/// Top-level trmnl-setup configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupCliConfig {
    /// General settings
    pub general: GeneralConfig,
    /// Result printing settings
    pub output: OutputConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: Option<String>,
}

/// How decoded results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Result printing configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: OutputFormat,
    /// Mask the API key when printing a successful result
    pub redact_api_key: bool,
}

impl SetupCliConfig {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(level) = self.general.log_level.as_deref() {
            parse_level(level).map_err(|e| format!("[general].log_level: {e}"))?;
        }
        Ok(())
    }

    /// Load from `--config` when given, otherwise from the default search paths.
    /// Returns default config if no config file is found.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        <Self as ConfigFile>::load(explicit)
    }

    /// Generate an example configuration as a TOML string, section header included.
    pub fn example_toml() -> String {
        let example = SetupCliConfig {
            general: GeneralConfig {
                log_level: Some("info".to_string()),
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                redact_api_key: true,
            },
        };

        let mut root = toml::Table::new();
        match toml::Value::try_from(&example) {
            Ok(section) => {
                root.insert(Self::section_key().to_string(), section);
            }
            Err(_) => return String::new(),
        }
        toml::to_string_pretty(&root).unwrap_or_default()
    }
}

impl ConfigFile for SetupCliConfig {
    fn section_key() -> &'static str {
        "trmnl-setup"
    }
}
