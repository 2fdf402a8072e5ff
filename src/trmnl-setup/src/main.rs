// SPDX-FileCopyrightText: 2025 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

mod config;
mod report;

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, info};

use trmnl_api::parse_api_setup_response;
use trmnl_app::{init_logging, parse_level, DynResult};

use config::{OutputFormat, SetupCliConfig};

const PKG_DESCRIPTION: &str = concat!(env!("CARGO_PKG_NAME"), " - device setup response decoder");

#[derive(Debug, Parser)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = PKG_DESCRIPTION,
)]
struct Cli {
    /// Path to configuration file
    #[arg(long = "config", short = 'C', value_name = "FILE")]
    config: Option<PathBuf>,
    /// Print example configuration and exit
    #[arg(long = "print-config")]
    print_config: bool,
    /// Captured setup response body ("-" or omitted reads stdin)
    #[arg(value_name = "PAYLOAD")]
    payload: Option<PathBuf>,
    /// Output format
    #[arg(short = 'o', long = "format", value_enum)]
    format: Option<OutputFormat>,
    /// Mask the API key in the printed result
    #[arg(long = "redact")]
    redact: bool,
    /// Log level (trace, debug, info, warn, error)
    #[arg(long = "log-level")]
    log_level: Option<String>,
}

/// Effective settings after merging CLI flags over the config file.
#[derive(Debug, PartialEq, Eq)]
struct Settings<'a> {
    format: OutputFormat,
    redact: bool,
    log_level: Option<&'a str>,
}

/// CLI > config > default.
fn resolve<'a>(cli: &'a Cli, cfg: &'a SetupCliConfig) -> Settings<'a> {
    Settings {
        format: cli.format.unwrap_or(cfg.output.format),
        redact: cli.redact || cfg.output.redact_api_key,
        log_level: cli
            .log_level
            .as_deref()
            .or(cfg.general.log_level.as_deref()),
    }
}

fn read_payload(path: Option<&Path>, mut stdin: impl Read) -> io::Result<Vec<u8>> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read(path),
        _ => {
            let mut buf = Vec::new();
            stdin.read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Decode and print; returns the process exit code.
fn run(cli: &Cli) -> DynResult<i32> {
    if cli.print_config {
        println!("{}", SetupCliConfig::example_toml());
        return Ok(0);
    }

    let (cfg, config_path) = SetupCliConfig::load(cli.config.as_deref())?;
    cfg.validate()?;
    if let Some(level) = cli.log_level.as_deref() {
        parse_level(level).map_err(|e| format!("--log-level: {e}"))?;
    }

    let settings = resolve(cli, &cfg);
    init_logging(settings.log_level)?;

    if let Some(ref path) = config_path {
        info!("Loaded configuration from {}", path.display());
    }

    let payload = read_payload(cli.payload.as_deref(), io::stdin().lock())?;
    debug!("Decoding {} byte setup response", payload.len());

    let result = parse_api_setup_response(&payload);

    let mut stdout = io::stdout().lock();
    write!(
        stdout,
        "{}",
        report::render(&result, settings.format, settings.redact)
    )?;
    if settings.format == OutputFormat::Json {
        writeln!(stdout)?;
    }
    stdout.flush()?;

    Ok(report::exit_code(result.outcome))
}

fn main() {
    let cli = Cli::parse();
    let code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", env!("CARGO_PKG_NAME"), e);
            report::FAULT_EXIT_CODE
        }
    };
    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse_cli(args: &[&str]) -> Cli {
        let argv = std::iter::once("trmnl-setup").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap()
    }

    fn json_config() -> SetupCliConfig {
        let mut cfg = SetupCliConfig::default();
        cfg.general.log_level = Some("warn".to_string());
        cfg.output.format = OutputFormat::Json;
        cfg.output.redact_api_key = true;
        cfg
    }

    #[test]
    fn test_resolve_defaults() {
        let cli = parse_cli(&[]);
        let cfg = SetupCliConfig::default();
        assert_eq!(
            resolve(&cli, &cfg),
            Settings {
                format: OutputFormat::Text,
                redact: false,
                log_level: None,
            }
        );
    }

    #[test]
    fn test_resolve_config_over_defaults() {
        let cli = parse_cli(&[]);
        let cfg = json_config();
        assert_eq!(
            resolve(&cli, &cfg),
            Settings {
                format: OutputFormat::Json,
                redact: true,
                log_level: Some("warn"),
            }
        );
    }

    #[test]
    fn test_resolve_cli_over_config() {
        let cli = parse_cli(&["--format", "text", "--log-level", "debug"]);
        let cfg = json_config();
        let settings = resolve(&cli, &cfg);
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.log_level, Some("debug"));
        // --redact can only switch masking on
        assert!(settings.redact);

        let cli = parse_cli(&["--redact"]);
        assert!(resolve(&cli, &SetupCliConfig::default()).redact);
    }

    #[test]
    fn test_read_payload_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"api_key":"abc"}"#).unwrap();
        let stdin = Cursor::new(b"unused".to_vec());
        let payload = read_payload(Some(file.path()), stdin).unwrap();
        assert_eq!(payload, br#"{"api_key":"abc"}"#.to_vec());
    }

    #[test]
    fn test_read_payload_from_stdin() {
        let body = br#"{"status":404}"#.to_vec();
        let from_dash = read_payload(Some(Path::new("-")), Cursor::new(body.clone())).unwrap();
        assert_eq!(from_dash, body);
        let from_none = read_payload(None, Cursor::new(body.clone())).unwrap();
        assert_eq!(from_none, body);
    }

    #[test]
    fn test_read_payload_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = read_payload(Some(path.as_path()), Cursor::new(Vec::new())).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_run_rejects_unknown_cli_log_level() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("trmnl-rs.toml");
        std::fs::write(&config, "[trmnl-setup]\n").unwrap();
        let cli = parse_cli(&["--config", config.to_str().unwrap(), "--log-level", "loud"]);
        let err = run(&cli).unwrap_err();
        assert!(err.to_string().contains("--log-level"));
    }

    #[test]
    fn test_run_fails_on_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("absent.toml");
        let cli = parse_cli(&["--config", config.to_str().unwrap()]);
        assert!(run(&cli).is_err());
    }
}
