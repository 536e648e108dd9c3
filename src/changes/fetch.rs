//! Ref resolution and the shared comparison fetch.

use super::strategy::RefStrategy;
use crate::error::{ResolverError, Result};
use crate::github::{ApiError, ComparisonApi, pull_request_commits_endpoint};

/// Get the changed files for a strategy.
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Filenames in API order; empty when there is nothing
///   to compare or a remote call failed
/// * `Err(ResolverError::MalformedResponse)` - The API broke its contract
pub fn changed_files<A: ComparisonApi + ?Sized>(
    api: &A,
    strategy: &RefStrategy,
) -> Result<Vec<String>> {
    match resolve_refs(api, strategy)? {
        Some((base, head)) => compare_files(api, &base, &head),
        None => Ok(Vec::new()),
    }
}

/// Resolve the `(base, head)` pair to compare.
///
/// Returns `Ok(None)` when the build has no commit, or when listing the pull
/// request's commits failed (already logged).
pub fn resolve_refs<A: ComparisonApi + ?Sized>(
    api: &A,
    strategy: &RefStrategy,
) -> Result<Option<(String, String)>> {
    let Some(commit) = strategy.commit() else {
        tracing::debug!("no commit to compare against");
        return Ok(None);
    };

    match strategy {
        RefStrategy::BranchRefs { base, .. } => Ok(Some((base.clone(), commit.to_string()))),
        RefStrategy::PullRequestRefs { number, .. } => {
            let commits = match api.pull_request_commits(*number) {
                Ok(commits) => commits,
                Err(err) => {
                    recover(err)?;
                    return Ok(None);
                }
            };

            let endpoint = pull_request_commits_endpoint(*number);
            let first = commits.first().ok_or_else(|| {
                ResolverError::malformed(&endpoint, "pull request has no commits")
            })?;
            let parent = first.parents.first().ok_or_else(|| {
                ResolverError::malformed(
                    &endpoint,
                    format!("first commit {} has no parents", first.sha),
                )
            })?;

            tracing::debug!(base = %parent.sha, head = %commit, "resolved pull request base");
            Ok(Some((parent.sha.clone(), commit.to_string())))
        }
    }
}

/// Compare `base...head` and return the filenames.
///
/// Failed calls are logged and yield an empty sequence.
pub fn compare_files<A: ComparisonApi + ?Sized>(
    api: &A,
    base: &str,
    head: &str,
) -> Result<Vec<String>> {
    match api.compare(base, head) {
        Ok(comparison) => {
            for file in &comparison.files {
                tracing::debug!(
                    file = %file.filename,
                    status = file.status.as_deref().unwrap_or("unknown"),
                    "changed file"
                );
            }
            Ok(comparison.filenames())
        }
        Err(err) => {
            recover(err)?;
            Ok(Vec::new())
        }
    }
}

/// Log a recoverable API failure, or escalate a decode failure.
fn recover(err: ApiError) -> Result<()> {
    match &err {
        ApiError::Decode { endpoint, message } => Err(ResolverError::malformed(endpoint, message)),
        ApiError::Status { status, .. } => {
            tracing::error!(
                endpoint = %err.endpoint(),
                status = *status,
                rate_limited = err.is_rate_limited(),
                "Request failed: {}",
                err.message()
            );
            Ok(())
        }
        ApiError::Transport { .. } => {
            tracing::error!(endpoint = %err.endpoint(), "Request failed: {}", err.message());
            Ok(())
        }
    }
}
