//! Diagnostic logging setup.
//!
//! Diagnostics go through `tracing` and are written to stderr; stdout carries
//! only the changed code files. `RUST_LOG`, when set, takes precedence over
//! the configured level.

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Ensures logging is only initialized once
static INIT: Once = Once::new();

/// Configuration for logging initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Minimum log level for this crate's diagnostics.
    pub level: Level,

    /// Emit JSON lines instead of human-readable text.
    pub use_json: bool,
}

impl Default for LoggingConfig {
    /// Debug level, text output.
    fn default() -> Self {
        Self {
            level: Level::DEBUG,
            use_json: false,
        }
    }
}

/// Parses a log level from a string (case-insensitive).
///
/// Unknown values fall back to `Level::INFO` with a notice on stderr.
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
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

/// Filter directives used when `RUST_LOG` is not set.
///
/// HTTP stack internals are kept at `warn` so `debug` stays readable.
pub fn default_directives(level: Level) -> String {
    format!(
        "{}={},hyper=warn,hyper_util=warn,reqwest=warn,rustls=warn",
        env!("CARGO_CRATE_NAME"),
        level.as_str().to_lowercase()
    )
}

/// Initializes the global subscriber. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = match env::var("RUST_LOG") {
            Ok(directives) if !directives.trim().is_empty() => EnvFilter::new(directives),
            _ => EnvFilter::new(default_directives(config.level)),
        };

        let layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(layer.json())
                .init();
        } else {
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
    });
}
