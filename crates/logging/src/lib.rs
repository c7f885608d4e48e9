#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` owns the diagnostic plumbing shared by the rsync-sieve
//! workspace. Every crate emits events through the standard [`tracing`]
//! macros under a small set of subsystem targets (`sieve::filter`,
//! `sieve::itemize`, `sieve::stats`, `sieve::run`); this crate maps the
//! command-line verbosity (`-v`, `-vv`, `--quiet`) onto a subscriber filter and
//! installs the subscriber that writes those events to standard error.
//!
//! # Design
//!
//! - [`VerbosityConfig`] records the requested verbosity and renders it into
//!   an [`EnvFilter`](tracing_subscriber::EnvFilter) directive.
//! - [`Subsystem`] names the targets used by the convenience macros
//!   ([`trace_filter!`], [`trace_item!`], [`trace_stats!`], [`trace_run!`]).
//! - [`init_tracing`] installs a `fmt` subscriber. An explicit `RUST_LOG`
//!   value overrides the verbosity-derived directive.
//!
//! # Invariants
//!
//! - Diagnostics never go to standard output; stdout is reserved for the
//!   rendered classification report.
//! - Installing the subscriber twice is not an error; the second call reports
//!   `false` and leaves the first subscriber in place.
//!
//! # Examples
//!
//! ```
//! use logging::{Subsystem, VerbosityConfig};
//!
//! let config = VerbosityConfig::from_verbose_level(2);
//! assert_eq!(config.directive(), "info,sieve=debug");
//! assert_eq!(Subsystem::Stats.target(), "sieve::stats");
//! ```

mod config;
mod tracing_bridge;
mod tracing_macros;

pub use config::VerbosityConfig;
pub use tracing_bridge::{Subsystem, init_tracing, init_tracing_with_writer};
