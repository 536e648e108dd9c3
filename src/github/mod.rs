//! Remote comparison API for changed-code-files.
//!
//! Two read-only GitHub REST endpoints are consumed:
//! - `GET /repos/{owner}/{repo}/pulls/{number}/commits`
//! - `GET /repos/{owner}/{repo}/compare/{base}...{head}`
//!
//! Calls are blocking and strictly sequential. There is no authentication,
//! pagination, retry or rate-limit handling. The [`ComparisonApi`] trait is
//! the seam between the fetch logic and the HTTP client.

pub mod client;
pub mod types;


// Re-export public API
pub use client::{ApiError, ComparisonApi, GitHubClient, pull_request_commits_endpoint};
