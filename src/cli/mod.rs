//! CLI argument parsing for changed-code-files.
//!
//! The build itself is described by the CI environment (see `context`); the
//! flags here only cover configuration and diagnostics.

use crate::logging::{LoggingConfig, parse_level};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// List the code files changed by the current build.
///
/// Compares the build commit against its pull request base (or the
/// pipeline's default branch) through the GitHub API, drops documentation and
/// CI metadata, and prints the remaining paths one per line.
///
/// Exit status: 0 on success (even when no code file changed), 1 when no
/// changed files could be determined, 2 on invalid input or config, 3 on a
/// malformed API response.
#[derive(Parser, Debug)]
#[command(name = "changed-code-files")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// YAML config file (repository, api_url, user_agent, exclude_patterns).
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Repository to query as owner/name (overrides the config file).
    #[arg(long, value_name = "OWNER/NAME")]
    pub repository: Option<String>,

    /// GitHub API base URL (overrides the config file).
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Diagnostic log level: trace, debug, info, warn, error.
    #[arg(long, default_value = "debug")]
    pub log_level: String,

    /// Diagnostic output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// Format of the diagnostics written to stderr.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Logging settings requested on the command line.
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: parse_level(&self.log_level),
            use_json: self.log_format == LogFormat::Json,
        }
    }
}
