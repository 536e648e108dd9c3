//! Compiled exclusion pattern matching.

use crate::config::Config;
use crate::error::{ResolverError, Result};
use regex::Regex;

/// Compiled exclusion patterns, in configured order.
///
/// Each regex is compiled as `^(?:<pattern>)` so matching always starts at
/// the beginning of the path.
pub struct ExclusionPatterns {
    /// The compiled regex patterns paired with their original string representations.
    patterns: Vec<(Regex, String)>,
}

impl std::fmt::Debug for ExclusionPatterns {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExclusionPatterns")
            .field(
                "patterns",
                &self.patterns.iter().map(|(_, s)| s).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl ExclusionPatterns {
    /// Compile exclusion patterns from config.
    ///
    /// # Returns
    ///
    /// * `Ok(ExclusionPatterns)` - Successfully compiled patterns
    /// * `Err(ResolverError::UserError)` - If any pattern fails to compile
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::compile(&config.exclude_patterns)
    }

    /// Compile an explicit list of patterns.
    pub fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut compiled = Vec::with_capacity(patterns.len());

        for pattern in patterns {
            let pattern = pattern.as_ref();
            let regex = Regex::new(&format!("^(?:{})", pattern)).map_err(|e| {
                ResolverError::UserError(format!(
                    "invalid regex pattern in exclude_patterns: '{}' - {}\n\
                     Fix: edit the config file and correct or remove this pattern.",
                    pattern, e
                ))
            })?;
            compiled.push((regex, pattern.to_string()));
        }

        Ok(Self { patterns: compiled })
    }

    /// The first pattern, in configured order, that matches `path`.
    pub fn matching_pattern(&self, path: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|(regex, _)| regex.is_match(path))
            .map(|(_, pattern)| pattern.as_str())
    }

    /// Returns true if `path` matches any exclusion pattern.
    pub fn is_non_code(&self, path: &str) -> bool {
        self.matching_pattern(path).is_some()
    }

    /// Returns true if `path` matches no exclusion pattern.
    pub fn is_code(&self, path: &str) -> bool {
        !self.is_non_code(path)
    }

    /// Keep only the code files, preserving order and duplicates.
    pub fn filter_code_files<S: AsRef<str>>(&self, files: &[S]) -> Vec<String> {
        files
            .iter()
            .map(AsRef::<str>::as_ref)
            .filter(|file| {
                if self.is_code(file) {
                    return true;
                }
                tracing::debug!(
                    file = %file,
                    pattern = self.matching_pattern(file).unwrap_or_default(),
                    "excluding non-code file"
                );
                false
            })
            .map(str::to_string)
            .collect()
    }
}
