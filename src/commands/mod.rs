//! Orchestration for changed-code-files.
//!
//! [`execute`] wires the real environment, config, HTTP client and stdout
//! together; [`run`] holds the logic and takes each collaborator explicitly.

use crate::changes::{RefStrategy, changed_files};
use crate::classify::ExclusionPatterns;
use crate::cli::Cli;
use crate::config::Config;
use crate::context::BuildContext;
use crate::error::{ResolverError, Result};
use crate::exit_codes;
use crate::github::{ComparisonApi, GitHubClient};
use std::io::{self, Write};


/// Result of a run that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No changed files could be determined; nothing to compare against.
    NoChangedFiles,
    /// The changed code files, in API order. May be empty.
    CodeFiles(Vec<String>),
}

impl Outcome {
    /// Returns the process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::NoChangedFiles => exit_codes::NO_CHANGED_FILES,
            Outcome::CodeFiles(_) => exit_codes::SUCCESS,
        }
    }
}

/// Run against the process environment, the configured API, and stdout.
pub fn execute(cli: &Cli) -> Result<Outcome> {
    let config = Config::load_or_default(cli.config.as_deref())?
        .with_overrides(cli.repository.clone(), cli.api_url.clone())?;
    let patterns = ExclusionPatterns::from_config(&config)?;
    let context = BuildContext::from_env()?;
    let api = GitHubClient::new(&config)?;

    tracing::debug!(repository = %config.repository, api_url = %config.api_url, "using GitHub API");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&context, &patterns, &api, &mut out)
}

/// Resolve the changed files for `context` and print the code files to `out`.
///
/// # Returns
///
/// * `Ok(Outcome::NoChangedFiles)` - The changed-file set was empty; nothing printed
/// * `Ok(Outcome::CodeFiles(_))` - Code files were printed, one per line
/// * `Err(ResolverError::MalformedResponse)` - The API broke its contract
/// * `Err(ResolverError::UserError)` - Writing to `out` failed
pub fn run<A, W>(
    context: &BuildContext,
    patterns: &ExclusionPatterns,
    api: &A,
    out: &mut W,
) -> Result<Outcome>
where
    A: ComparisonApi + ?Sized,
    W: Write + ?Sized,
{
    let commit_files = match RefStrategy::from_context(context) {
        Some(strategy) => changed_files(api, &strategy)?,
        None => Vec::new(),
    };

    if commit_files.is_empty() {
        tracing::warn!("could not find any commit files");
        return Ok(Outcome::NoChangedFiles);
    }

    let code_files = patterns.filter_code_files(&commit_files);
    tracing::debug!(
        changed = commit_files.len(),
        code = code_files.len(),
        "classified changed files"
    );

    write_lines(out, &code_files)
        .map_err(|e| ResolverError::UserError(format!("failed to write output: {}", e)))?;

    Ok(Outcome::CodeFiles(code_files))
}

fn write_lines<W: Write + ?Sized>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}
