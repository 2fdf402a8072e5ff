// SPDX-FileCopyrightText: 2025 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

const LEVEL_NAMES: &str = "trace, debug, info, warn, error";

/// Parse a log level name, ignoring case and surrounding whitespace.
///
/// Only the five level names are accepted.
pub fn parse_level(name: &str) -> Result<Level, String> {
    match name.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(format!(
            "log level '{}' is invalid (expected one of: {})",
            name, LEVEL_NAMES
        )),
    }
}

/// Initialize logging at `level` (INFO when unset).
///
/// Fails on an unknown level name instead of silently falling back.
pub fn init_logging(log_level: Option<&str>) -> Result<(), String> {
    let level = log_level.map(parse_level).transpose()?.unwrap_or(Level::INFO);

    FmtSubscriber::builder()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_known_names() {
        assert_eq!(parse_level("trace"), Ok(Level::TRACE));
        assert_eq!(parse_level("debug"), Ok(Level::DEBUG));
        assert_eq!(parse_level("INFO"), Ok(Level::INFO));
        assert_eq!(parse_level(" warn "), Ok(Level::WARN));
        assert_eq!(parse_level("Error"), Ok(Level::ERROR));
    }

    #[test]
    fn test_parse_level_rejects_unknown_names() {
        let err = parse_level("loud").unwrap_err();
        assert!(err.contains("'loud'"));
        assert!(parse_level("").is_err());
        // tracing itself would take "3" as INFO
        assert!(parse_level("3").is_err());
    }
}
