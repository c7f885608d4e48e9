#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `engine` turns the report stream of one rsync run into a
//! [`ClassificationReport`]: six ordered buckets of item lines plus the
//! run's transfer statistics. It composes the [`filters`] groups and the
//! [`itemize`] decision table into a [`LineClassifier`], aggregates outcomes
//! through a [`ReportBuilder`], and can drive the external `rsync` binary
//! itself via [`run_and_classify`].
//!
//! # Design
//!
//! - [`LineClassifier::classify`] is a pure function of one line. It has no
//!   memory of earlier lines; the only cross-line state is the statistics
//!   overwrite rule, which lives in [`TransferStats`].
//! - [`ReportBuilder`] owns the buckets while a run is in progress and only
//!   ever appends. [`ReportBuilder::finish`] hands out the read-only report.
//! - The run orchestrator in [`run`] owns the child process and feeds its
//!   merged stdout/stderr lines to the classifier in arrival order. The
//!   classifier knows nothing about processes.
//! - [`SieveConfig`] is an explicit configuration value (usually loaded from
//!   JSON); nothing is selected through environment variables.
//!
//! # Invariants
//!
//! - Every line reaches exactly one outcome: dropped as junk, dropped as a
//!   warning/error, recorded as a statistic, or appended to one bucket.
//! - Bucket order equals arrival order; buckets are never cleared.
//! - Classifying the same ordered lines twice yields equal reports.
//!
//! # Examples
//!
//! ```
//! use engine::{Bucket, LineClassifier};
//!
//! let report = LineClassifier::default().classify_lines([
//!     "sending incremental file list\n",
//!     ">f+++++++++ newfile.txt\n",
//!     "*deleting   oldfile.txt\n",
//!     "Number of files: 120\n",
//! ]);
//!
//! assert_eq!(report.lines(Bucket::Created), [">f+++++++++ newfile.txt\n"]);
//! assert_eq!(report.lines(Bucket::Deleted), ["*deleting   oldfile.txt\n"]);
//! assert_eq!(report.stats().get("Number of files"), Some("120"));
//! assert_eq!(report.dropped().junk, 1);
//! ```

mod classifier;
mod config;
mod error;
mod report;
pub mod run;
mod stats;

pub use classifier::{LineClassifier, LineOutcome};
pub use config::{DEFAULT_RSYNC_PROGRAM, SieveConfig};
pub use error::{ConfigError, RunError, StreamError};
pub use report::{Bucket, ClassificationReport, DroppedCounts, ReportBuilder};
pub use run::{Invocation, RunOutcome, StreamKind, run_and_classify};
pub use stats::TransferStats;

pub use filters::{FilterGroup, PatternConfig, StatEntry, StatsPatternConfig};
pub use itemize::ItemCategory;
