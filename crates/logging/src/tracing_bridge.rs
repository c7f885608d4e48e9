//! crates/logging/src/tracing_bridge.rs
//! Subscriber installation and subsystem target mapping.
//!
//! Workspace crates log through the standard tracing macros using one of the
//! [`Subsystem`] targets. [`init_tracing`] installs a `fmt` subscriber whose
//! filter comes from `RUST_LOG` when set, or from the [`VerbosityConfig`]
//! otherwise.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{VerbosityConfig, init_tracing};
//!
//! init_tracing(&VerbosityConfig::from_verbose_level(2));
//! tracing::debug!(target: logging::Subsystem::Filter.target(), "junk line dropped");
//! ```

use std::io;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use super::config::VerbosityConfig;

/// Diagnostic subsystems used as tracing targets across the workspace.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Subsystem {
    /// Filter-group matching (junk, excluded, warning/error lines).
    Filter,
    /// Itemized change-code decoding and bucket assignment.
    Itemize,
    /// Transfer statistics extraction.
    Stats,
    /// External process execution and line streaming.
    Run,
}

impl Subsystem {
    /// All subsystems in a stable order.
    pub const ALL: [Self; 4] = [Self::Filter, Self::Itemize, Self::Stats, Self::Run];

    /// Returns the tracing target string for the subsystem.
    pub const fn target(self) -> &'static str {
        match self {
            Self::Filter => "sieve::filter",
            Self::Itemize => "sieve::itemize",
            Self::Stats => "sieve::stats",
            Self::Run => "sieve::run",
        }
    }
}

/// Initialize tracing with the given verbosity, writing to standard error.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_tracing(config: &VerbosityConfig) -> bool {
    init_tracing_with_writer(config, io::stderr)
}

/// Initialize tracing with the given verbosity and a custom writer.
///
/// The writer is mostly useful for tests and for embedding the classifier in
/// a host that captures diagnostics itself.
pub fn init_tracing_with_writer<W>(config: &VerbosityConfig, writer: W) -> bool
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(true)
        .without_time()
        .try_init()
        .is_ok()
}
