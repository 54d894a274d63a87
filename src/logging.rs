//! Logging configuration and initialization.
//!
//! Wallpaper service events are logged at the configured level. Chatty
//! dependencies (database driver, HTTP stack, TLS) are held at `warn` or
//! quieter unless `RUST_LOG` is set.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::Result;

/// Parse log level string to tracing Level.
fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Dependencies capped at `warn`.
const QUIET_TARGETS: &[&str] = &["sqlx", "hyper", "hyper_util", "h2", "reqwest", "rustls"];

/// Filter directives for the given service level.
fn directives(level: Level) -> Vec<String> {
    let service = level.to_string().to_lowercase();
    let quiet = level.min(Level::WARN).to_string().to_lowercase();
    std::iter::once(service)
        .chain(QUIET_TARGETS.iter().map(|target| format!("{target}={quiet}")))
        .collect()
}

/// Build the filter: `RUST_LOG` when set, the service defaults otherwise.
fn build_filter(level: Level) -> EnvFilter {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        return EnvFilter::from_default_env();
    }
    EnvFilter::new(directives(level).join(","))
}

/// Initialize the logging system with the given configuration.
///
/// Logs go to stdout and are appended to the configured file.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(parse_level(&config.level));

    if let Some(parent) = Path::new(&config.file).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let log_file = Arc::new(OpenOptions::new().create(true).append(true).open(&config.file)?);
    let writer = std::io::stdout.and(log_file);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_names(true),
        )
        .with(filter)
        .init();

    Ok(())
}

/// Initialize console-only logging (for development/testing).
pub fn init_console_only(level: &str) {
    let filter = build_filter(parse_level(level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(true)
                .with_target(true),
        )
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("trace"), Level::TRACE);
        assert_eq!(parse_level("DEBUG"), Level::DEBUG);
        assert_eq!(parse_level("info"), Level::INFO);
        assert_eq!(parse_level("warning"), Level::WARN);
        assert_eq!(parse_level("ERROR"), Level::ERROR);
    }

    #[test]
    fn test_directives_quiet_dependencies() {
        let info = directives(Level::INFO);
        assert_eq!(info[0], "info");
        assert!(info.contains(&"sqlx=warn".to_string()));
        assert!(info.contains(&"hyper=warn".to_string()));

        // Never louder than the service itself.
        let error = directives(Level::ERROR);
        assert!(error.contains(&"reqwest=error".to_string()));
    }

    #[test]
    fn test_directives_parse_as_filter() {
        let filter = EnvFilter::new(directives(Level::DEBUG).join(","));
        assert!(filter.to_string().contains("sqlx=warn"));
    }

    #[test]
    fn test_parse_level_default() {
        assert_eq!(parse_level("invalid"), Level::INFO);
        assert_eq!(parse_level(""), Level::INFO);
    }
}
