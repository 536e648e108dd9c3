use crate::github::client::compare_endpoint;
use crate::github::types::{ChangedFile, CommitRef, Comparison, PullRequestCommit};
use crate::github::{ApiError, ComparisonApi, pull_request_commits_endpoint};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory `ComparisonApi` serving canned responses and recording calls.
///
/// Unregistered endpoints answer with a 404 `Not Found`, like GitHub does for
/// unknown pull requests and refs.
#[derive(Default)]
pub(crate) struct FakeComparisonApi {
    pr_commits: HashMap<u64, Result<Vec<PullRequestCommit>, ApiError>>,
    comparisons: HashMap<(String, String), Result<Comparison, ApiError>>,
    calls: RefCell<Vec<String>>,
}

impl FakeComparisonApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Register a pull request whose first commit has `base` as its parent.
    pub(crate) fn with_pull_request(mut self, number: u64, base: &str) -> Self {
        self.pr_commits.insert(
            number,
            Ok(vec![
                pr_commit("first", &[base]),
                pr_commit("second", &["first"]),
            ]),
        );
        self
    }

    pub(crate) fn with_pr_commits(mut self, number: u64, commits: Vec<PullRequestCommit>) -> Self {
        self.pr_commits.insert(number, Ok(commits));
        self
    }

    pub(crate) fn with_pr_commits_error(mut self, number: u64, err: ApiError) -> Self {
        self.pr_commits.insert(number, Err(err));
        self
    }

    pub(crate) fn with_comparison(mut self, base: &str, head: &str, files: &[&str]) -> Self {
        self.comparisons
            .insert((base.to_string(), head.to_string()), Ok(comparison(files)));
        self
    }

    pub(crate) fn with_comparison_error(mut self, base: &str, head: &str, err: ApiError) -> Self {
        self.comparisons
            .insert((base.to_string(), head.to_string()), Err(err));
        self
    }

    /// Endpoints called so far, in order.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl ComparisonApi for FakeComparisonApi {
    fn pull_request_commits(&self, number: u64) -> Result<Vec<PullRequestCommit>, ApiError> {
        let endpoint = pull_request_commits_endpoint(number);
        self.calls.borrow_mut().push(endpoint.clone());
        self.pr_commits
            .get(&number)
            .cloned()
            .unwrap_or_else(|| Err(not_found(&endpoint)))
    }

    fn compare(&self, base: &str, head: &str) -> Result<Comparison, ApiError> {
        let endpoint = compare_endpoint(base, head);
        self.calls.borrow_mut().push(endpoint.clone());
        self.comparisons
            .get(&(base.to_string(), head.to_string()))
            .cloned()
            .unwrap_or_else(|| Err(not_found(&endpoint)))
    }
}

pub(crate) fn pr_commit(sha: &str, parents: &[&str]) -> PullRequestCommit {
    PullRequestCommit {
        sha: sha.to_string(),
        parents: parents
            .iter()
            .map(|p| CommitRef { sha: p.to_string() })
            .collect(),
    }
}

pub(crate) fn comparison(files: &[&str]) -> Comparison {
    Comparison {
        files: files
            .iter()
            .map(|f| ChangedFile {
                filename: f.to_string(),
                status: Some("modified".to_string()),
            })
            .collect(),
    }
}

pub(crate) fn not_found(endpoint: &str) -> ApiError {
    ApiError::Status {
        endpoint: endpoint.to_string(),
        status: 404,
        message: "Not Found".to_string(),
    }
}
