//! Configuration model for changed-code-files.
//!
//! This module defines the Config struct that represents the optional YAML
//! config file passed with `--config`. Parsing is forward-compatible (unknown
//! fields are ignored) and every field has a default, so running without a
//! config file reproduces the built-in behaviour.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::{DEFAULT_API_URL, DEFAULT_REPOSITORY};
