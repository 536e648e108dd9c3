//! changed-code-files: list the code files changed by a CI build.
//!
//! This is the main entry point for the `changed-code-files` CLI. It parses
//! arguments, sets up diagnostics on stderr, runs the resolver, and maps the
//! outcome to the exit status the pipeline branches on.

mod changes;
mod classify;
mod cli;
mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod exit_codes;
mod github;
mod logging;

#[cfg(test)]
mod test_support;

use cli::Cli;
use commands::Outcome;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init_logging(cli.logging_config());

    ExitCode::from(exit_status(commands::execute(&cli)))
}

/// Map the run result to the process exit status, reporting any error.
fn exit_status(result: error::Result<Outcome>) -> u8 {
    match result {
        Ok(outcome) => outcome.exit_code() as u8,
        Err(err) => {
            tracing::error!("Error: {}", err);
            err.exit_code() as u8
        }
    }
}
