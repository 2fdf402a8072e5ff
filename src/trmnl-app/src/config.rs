// SPDX-FileCopyrightText: 2025 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! `trmnl-rs.toml` loading.
//!
//! One file holds a `[<program>]` section per tool; each tool only ever
//! deserializes its own section.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "trmnl-rs.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config file {} has no [{section}] section", .path.display())]
    MissingSection { path: PathBuf, section: &'static str },
}

impl ConfigError {
    /// The file the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::MissingSection { path, .. } => path,
        }
    }
}

/// Default locations of `trmnl-rs.toml`, most specific first.
pub fn default_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("trmnl-rs").join(CONFIG_FILE_NAME));
    }
    paths.push(PathBuf::from("/etc/trmnl-rs").join(CONFIG_FILE_NAME));
    paths
}

fn read_section<T: DeserializeOwned>(path: &Path, key: &str) -> Result<Option<T>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parse_err = |source: toml::de::Error| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let mut table: toml::Table = toml::from_str(&content).map_err(parse_err)?;
    match table.remove(key) {
        Some(section) => T::deserialize(section).map(Some).map_err(parse_err),
        None => Ok(None),
    }
}

/// A program's section of `trmnl-rs.toml`.
pub trait ConfigFile: Sized + Default + DeserializeOwned {
    /// Section key, e.g. `"trmnl-setup"`.
    fn section_key() -> &'static str;

    /// Load the section from `path`; the section must be present.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        read_section(path, Self::section_key())?.ok_or_else(|| ConfigError::MissingSection {
            path: path.to_path_buf(),
            section: Self::section_key(),
        })
    }

    /// Load the first existing file in `paths` that has the section.
    ///
    /// Files without the section are skipped. Returns the default config
    /// and `None` when nothing matches.
    fn load_from_paths(paths: &[PathBuf]) -> Result<(Self, Option<PathBuf>), ConfigError> {
        for path in paths.iter().filter(|p| p.exists()) {
            if let Some(cfg) = read_section(path, Self::section_key())? {
                return Ok((cfg, Some(path.clone())));
            }
        }
        Ok((Self::default(), None))
    }

    /// Load from an explicit path if given, otherwise search the defaults.
    fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        match explicit {
            Some(path) => Ok((Self::load_from_file(path)?, Some(path.to_path_buf()))),
            None => Self::load_from_paths(&default_search_paths()),
        }
    }
}
