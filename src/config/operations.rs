//! Config loading, validation, and override operations.

use super::model::Config;
use crate::error::{ResolverError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(ResolverError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ResolverError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from an optional path, falling back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let mut config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            ResolverError::UserError(format!("failed to parse config YAML: {}", e))
        })?;

        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides and re-validate.
    pub fn with_overrides(
        mut self,
        repository: Option<String>,
        api_url: Option<String>,
    ) -> Result<Self> {
        if let Some(repository) = repository {
            self.repository = repository;
        }
        if let Some(api_url) = api_url {
            self.api_url = api_url;
        }

        self.normalize();
        self.validate()?;
        Ok(self)
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `repository` must be `owner/name` with both parts non-empty
    /// - `api_url` must be an http(s) URL
    /// - `user_agent` must be non-empty
    /// - `exclude_patterns` entries must be non-empty
    pub fn validate(&self) -> Result<()> {
        let mut parts = self.repository.split('/');
        let well_formed = matches!(
            (parts.next(), parts.next(), parts.next()),
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty()
        );
        if !well_formed {
            return Err(ResolverError::UserError(format!(
                "config validation failed: repository '{}' must be in the form owner/name",
                self.repository
            )));
        }

        if !(self.api_url.starts_with("https://") || self.api_url.starts_with("http://")) {
            return Err(ResolverError::UserError(format!(
                "config validation failed: api_url '{}' must start with http:// or https://",
                self.api_url
            )));
        }

        if self.user_agent.trim().is_empty() {
            return Err(ResolverError::UserError(
                "config validation failed: user_agent must be non-empty".to_string(),
            ));
        }

        if self.exclude_patterns.iter().any(|p| p.is_empty()) {
            return Err(ResolverError::UserError(
                "config validation failed: exclude_patterns entries must be non-empty".to_string(),
            ));
        }

        Ok(())
    }

    fn normalize(&mut self) {
        self.repository = self.repository.trim().to_string();
        self.api_url = self.api_url.trim().trim_end_matches('/').to_string();
    }
}
