#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `filters` separates noise from meaningful lines in the report stream that
//! `rsync -vv -i --stats` writes. It holds four ordered pattern groups (junk,
//! excluded, warning/error and statistics) and, for any line, reports the
//! first group that claims it. Statistics lines are additionally decoded into
//! `(label, value)` pairs.
//!
//! # Design
//!
//! - [`FilterGroup`] names the four groups in their fixed priority order.
//! - [`PatternGroup`] owns the compiled sub-patterns of one group. Each
//!   sub-pattern is an independent [`regex::Regex`]; a line belongs to the
//!   group when any sub-pattern matches.
//! - [`StatsPatterns`] pairs every statistics label with its own pattern so a
//!   matching line yields exactly one [`StatEntry`]. Patterns are never merged
//!   into a single alternation, so capture numbering cannot leak between
//!   labels.
//! - [`FilterSet`] bundles the four groups behind an [`Arc`](std::sync::Arc)
//!   and is cheap to clone. [`FilterSet::from_config`] extends or replaces the
//!   defaults with a [`PatternConfig`].
//!
//! # Invariants
//!
//! - Groups are evaluated Junk, Excluded, WarnErr, Stats; the first match wins.
//! - Matching ignores the trailing `\n` / `\r\n` of a line.
//! - With the built-in vocabulary, a line that matches the Stats group always
//!   yields a [`StatEntry`]. No empty labels are ever produced.
//!
//! # Errors
//!
//! [`FilterSet::from_config`] reports [`FilterError`] when a configured
//! sub-pattern fails to compile or a custom statistics pattern lacks its
//! `value` capture.
//!
//! # Examples
//!
//! ```
//! use filters::{FilterGroup, FilterSet};
//!
//! let filters = FilterSet::default();
//!
//! assert_eq!(filters.classify_line("\n"), Some(FilterGroup::Junk));
//! assert_eq!(filters.classify_line("rsync error: some files could not be transferred\n"),
//!            Some(FilterGroup::WarnErr));
//! assert_eq!(filters.classify_line(">f+++++++++ notes.txt\n"), None);
//!
//! let stat = filters.extract_stat("Total file size: 4,096 bytes\n").unwrap();
//! assert_eq!(stat.label(), "Total file size");
//! assert_eq!(stat.value(), "4,096");
//! ```

mod config;
mod defaults;
mod error;
mod group;
mod pattern;
mod set;
mod stats;

pub use config::{PatternConfig, StatsPatternConfig};
pub use defaults::{
    DEFAULT_EXCLUDED_PATTERNS, DEFAULT_JUNK_PATTERNS, DEFAULT_STATS_LABELS,
    DEFAULT_WARN_ERR_PATTERNS,
};
pub use error::FilterError;
pub use group::FilterGroup;
pub use pattern::PatternGroup;
pub use set::FilterSet;
pub use stats::{StatEntry, StatsPattern, StatsPatterns};

/// Removes one trailing line terminator (`\n` or `\r\n`) from `line`.
///
/// Report lines keep their terminator as produced by the source; matching
/// operates on the text without it.
#[must_use]
pub fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
