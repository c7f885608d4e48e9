use std::io;
use std::path::PathBuf;

use thiserror::Error;

use engine::{ConfigError, RunError, StreamError};

/// Failure surfaced by a subcommand; always maps to exit code 1.
#[derive(Debug, Error)]
pub enum CliError {
    /// The configuration could not be loaded or compiled.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The input report could not be opened.
    #[error("failed to open {}: {source}", path.display())]
    Open {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The input report could not be read to the end.
    #[error(transparent)]
    Stream(#[from] StreamError),
    /// The child process could not be driven.
    #[error(transparent)]
    Run(#[from] RunError),
    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
    /// `--json` was requested in a build without JSON output.
    #[error("JSON output is not available in this build")]
    JsonUnavailable,
}
