//! Build context resolution for changed-code-files.
//!
//! The CI platform describes the current build through three environment
//! variables. They are read once at start, never mutated, and an empty value
//! is treated the same as an absent one.

use crate::error::{ResolverError, Result};
use std::env;

/// Environment variable holding the commit SHA under build.
pub const COMMIT_VAR: &str = "BUILDKITE_COMMIT";

/// Environment variable holding the pull request number, or `false`.
pub const PULL_REQUEST_VAR: &str = "BUILDKITE_PULL_REQUEST";

/// Environment variable holding the pipeline's default branch.
pub const DEFAULT_BRANCH_VAR: &str = "BUILDKITE_PIPELINE_DEFAULT_BRANCH";

/// Sentinel the CI platform uses for "this build is not a pull request".
pub const NOT_A_PULL_REQUEST: &str = "false";

/// Identifying information about the current build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildContext {
    /// Commit SHA under build.
    pub commit: Option<String>,
    /// Pull request number, when the build belongs to one.
    pub pull_request: Option<u64>,
    /// Default branch of the pipeline (e.g. `master`).
    pub default_branch: Option<String>,
}

impl BuildContext {
    /// Resolve the build context from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolve the build context through an arbitrary variable lookup.
    ///
    /// # Returns
    ///
    /// * `Ok(BuildContext)` - Resolved context; missing values are `None`
    /// * `Err(ResolverError::UserError)` - The pull request value is neither
    ///   `false` nor a positive integer
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let commit = read(COMMIT_VAR);
        let pull_request = parse_pull_request(read(PULL_REQUEST_VAR).as_deref())?;
        let default_branch = read(DEFAULT_BRANCH_VAR);

        tracing::debug!("commit = {}", commit.as_deref().unwrap_or("None"));
        tracing::debug!(
            "pr number = {}",
            pull_request.map_or_else(|| "None".to_string(), |n| n.to_string())
        );

        Ok(Self {
            commit,
            pull_request,
            default_branch,
        })
    }
}

/// Parse the raw pull request value.
///
/// `None`, and the `false` sentinel, mean "not a pull request".
pub fn parse_pull_request(raw: Option<&str>) -> Result<Option<u64>> {
    let Some(raw) = raw.map(str::trim) else {
        return Ok(None);
    };

    if raw.is_empty() || raw == NOT_A_PULL_REQUEST {
        return Ok(None);
    }

    match raw.parse::<u64>() {
        Ok(number) if number > 0 => Ok(Some(number)),
        _ => Err(ResolverError::UserError(format!(
            "invalid {} value '{}': expected a pull request number or '{}'",
            PULL_REQUEST_VAR, raw, NOT_A_PULL_REQUEST
        ))),
    }
}
