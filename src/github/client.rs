//! Blocking GitHub client and the trait the fetch logic depends on.

use super::types::{ApiErrorBody, Comparison, PullRequestCommit};
use crate::config::Config;
use crate::error::{ResolverError, Result};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Media type GitHub recommends for REST v3 requests.
const GITHUB_JSON: &str = "application/vnd.github+json";

/// Failure of a single remote call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The API answered with a non-success status.
    #[error("{endpoint} returned HTTP {status}: {message}")]
    Status {
        endpoint: String,
        status: u16,
        message: String,
    },

    /// The request never produced a response.
    #[error("{endpoint} could not be reached: {message}")]
    Transport { endpoint: String, message: String },

    /// The API answered successfully but the body could not be decoded.
    #[error("{endpoint} returned an undecodable body: {message}")]
    Decode { endpoint: String, message: String },
}

impl ApiError {
    /// The endpoint (relative to the repository) the failing call targeted.
    pub fn endpoint(&self) -> &str {
        match self {
            ApiError::Status { endpoint, .. }
            | ApiError::Transport { endpoint, .. }
            | ApiError::Decode { endpoint, .. } => endpoint,
        }
    }

    /// The API's own message (or the transport/decode reason).
    pub fn message(&self) -> &str {
        match self {
            ApiError::Status { message, .. }
            | ApiError::Transport { message, .. }
            | ApiError::Decode { message, .. } => message,
        }
    }

    /// Returns true for responses that indicate GitHub's rate limiter kicked in.
    pub fn is_rate_limited(&self) -> bool {
        match self {
            ApiError::Status { status: 429, .. } => true,
            ApiError::Status {
                status: 403,
                message,
                ..
            } => message.to_lowercase().contains("rate limit"),
            _ => false,
        }
    }
}

/// Operations the resolver needs from the remote comparison API.
pub trait ComparisonApi {
    /// List the commits that belong to pull request `number`, oldest first.
    fn pull_request_commits(
        &self,
        number: u64,
    ) -> std::result::Result<Vec<PullRequestCommit>, ApiError>;

    /// Compare `base...head`.
    fn compare(&self, base: &str, head: &str) -> std::result::Result<Comparison, ApiError>;
}

/// Endpoint listing the commits of a pull request.
pub fn pull_request_commits_endpoint(number: u64) -> String {
    format!("pulls/{}/commits", number)
}

/// Endpoint comparing two refs.
pub fn compare_endpoint(base: &str, head: &str) -> String {
    format!("compare/{}...{}", base, head)
}

/// `ComparisonApi` over the GitHub REST API using `reqwest::blocking`.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    api_url: String,
    repository: String,
}

impl GitHubClient {
    /// Build a client from config.
    ///
    /// # Returns
    ///
    /// * `Ok(GitHubClient)` - Ready to issue requests
    /// * `Err(ResolverError::UserError)` - The user agent is not a valid header
    ///   value or the HTTP client could not be initialised
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));

        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()
            .map_err(|e| {
                ResolverError::UserError(format!("failed to initialise HTTP client: {}", e))
            })?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            repository: config.repository.clone(),
        })
    }

    /// Absolute URL for a repository-relative endpoint.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}/repos/{}/{}", self.api_url, self.repository, endpoint)
    }

    fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> std::result::Result<T, ApiError> {
        let url = self.url(endpoint);
        tracing::debug!(url = %url, "GET");

        let response = self.http.get(&url).send().map_err(|e| ApiError::Transport {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        let body = response.text().map_err(|e| ApiError::Transport {
            endpoint: endpoint.to_string(),
            message: format!("failed to read response body: {}", e),
        })?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                });

            return Err(ApiError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
    }
}

impl ComparisonApi for GitHubClient {
    fn pull_request_commits(
        &self,
        number: u64,
    ) -> std::result::Result<Vec<PullRequestCommit>, ApiError> {
        self.get_json(&pull_request_commits_endpoint(number))
    }

    fn compare(&self, base: &str, head: &str) -> std::result::Result<Comparison, ApiError> {
        self.get_json(&compare_endpoint(base, head))
    }
}
