//! Structured logging setup for makegen
//!
//! Logs go to stderr so `makegen generate --stdout` and `makegen scan` can
//! pipe their output cleanly.
//!
//! # Example
//!
//! ```no_run
//! use makegen::util::logging;
//!
//! logging::init_logging(logging::config_from_env());
//!
//! use tracing::{debug, info};
//! info!("Scan started");
//! debug!(path = "kernel/idt.c", "Classified file");
//! ```

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Ensures logging is only initialized once
static INIT: Once = Once::new();

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to display
    pub level: Level,

    /// Use JSON output format
    pub use_json: bool,
}

impl Default for LoggingConfig {
    /// INFO level, plain text
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
        }
    }
}

/// Parses a log level from a string, case-insensitively.
///
/// Unknown values fall back to `Level::INFO` with a warning on stderr.
///
/// ```
/// use makegen::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("debug"), Level::DEBUG);
/// assert_eq!(parse_level("INFO"), Level::INFO);
/// assert_eq!(parse_level("invalid"), Level::INFO);
/// ```
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

/// Initializes the `tracing` subscriber. Only the first call has any effect.
///
/// `RUST_LOG`, when set, takes precedence over `config.level`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = if env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(format!("makegen={}", config.level))
        };

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    });
}

/// Builds a [`LoggingConfig`] from `MAKEGEN_LOG_LEVEL` / `MAKEGEN_LOG_JSON`.
pub fn config_from_env() -> LoggingConfig {
    let level_str = env::var("MAKEGEN_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let use_json = env::var("MAKEGEN_LOG_JSON")
        .ok()
        .and_then(|v| v.parse::<bool>().ok())
        .unwrap_or(false);

    LoggingConfig {
        level: parse_level(&level_str),
        use_json,
    }
}
