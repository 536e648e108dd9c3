//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for changed-code-files.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Remote API settings
    // =========================================================================
    /// Repository to query, as `owner/name`.
    #[serde(default = "default_repository")]
    pub repository: String,

    /// Base URL of the GitHub REST API.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    // =========================================================================
    // Classification settings
    // =========================================================================
    /// Regex patterns identifying non-code paths, matched from the start of the path.
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repository: default_repository(),
            api_url: default_api_url(),
            user_agent: default_user_agent(),
            exclude_patterns: default_exclude_patterns(),
        }
    }
}
