use std::io;
use std::path::PathBuf;

use thiserror::Error;

use filters::FilterError;

use crate::{ClassificationReport, StreamKind};

/// Failure loading a [`SieveConfig`](crate::SieveConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The configuration text is not valid JSON for the schema.
    #[error("invalid config: {source}")]
    Parse {
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
    /// A configured pattern was rejected.
    #[error(transparent)]
    Pattern(#[from] FilterError),
}

/// Failure reading a line source.
#[derive(Debug, Error)]
#[error("failed to read report line: {source}")]
pub struct StreamError {
    /// Report accumulated before the failure.
    pub partial: Box<ClassificationReport>,
    /// Underlying I/O error.
    #[source]
    pub source: io::Error,
}

/// Failure driving the external program.
#[derive(Debug, Error)]
pub enum RunError {
    /// The program could not be started.
    #[error("failed to spawn {}: {source}", program.display())]
    Spawn {
        /// Program that was requested.
        program: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Reading one of the child's output streams failed; the child was
    /// stopped.
    #[error("failed to read child {kind}: {source}")]
    Stream {
        /// Stream that failed.
        kind: StreamKind,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
        /// Lines classified before the failure.
        partial: Box<ClassificationReport>,
    },
    /// Waiting for the child to exit failed.
    #[error("failed to wait for child: {source}")]
    Wait {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl RunError {
    /// Report accumulated before a stream failure.
    #[must_use]
    pub fn partial_report(&self) -> Option<&ClassificationReport> {
        match self {
            Self::Stream { partial, .. } => Some(&**partial),
            Self::Spawn { .. } | Self::Wait { .. } => None,
        }
    }
}
