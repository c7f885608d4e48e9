//! Aggregation of classified lines into a [`ClassificationReport`].

use std::fmt;

use serde::Serialize;
use serde::ser::{SerializeMap, SerializeStruct, Serializer};

use filters::StatEntry;
use itemize::ItemCategory;

use crate::TransferStats;

/// One of the six ordered line sequences of a report.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Bucket {
    /// Items already matching the destination.
    UpToDate,
    /// Items removed from the destination.
    Deleted,
    /// Changed items and unrecognised codes.
    Modified,
    /// Newly created items.
    Created,
    /// Items skipped because of an exclude pattern.
    Excluded,
    /// Directories whose only change was their timestamp.
    Ignored,
}

impl Bucket {
    /// Every bucket, in report order.
    pub const ALL: [Self; 6] = [
        Self::UpToDate,
        Self::Deleted,
        Self::Modified,
        Self::Created,
        Self::Excluded,
        Self::Ignored,
    ];

    /// Short name used in rendered reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::UpToDate => "uptodate",
            Self::Deleted => "deleted",
            Self::Modified => "modified",
            Self::Created => "created",
            Self::Excluded => "excluded",
            Self::Ignored => "ignored",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl From<ItemCategory> for Bucket {
    fn from(category: ItemCategory) -> Self {
        match category {
            ItemCategory::UpToDate => Self::UpToDate,
            ItemCategory::Deleted => Self::Deleted,
            ItemCategory::Modified => Self::Modified,
            ItemCategory::Created => Self::Created,
            ItemCategory::Ignored => Self::Ignored,
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lines consumed without reaching a bucket.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct DroppedCounts {
    /// Banners, blank lines and allocator diagnostics.
    pub junk: u64,
    /// Warnings and errors printed by rsync.
    pub warn_err: u64,
}

impl DroppedCounts {
    /// Sum of both counters.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.junk + self.warn_err
    }
}

/// Final, read-only result of classifying one run.
///
/// Buckets hold raw lines (terminators included) in arrival order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ClassificationReport {
    buckets: [Vec<String>; 6],
    stats: TransferStats,
    dropped: DroppedCounts,
}

impl ClassificationReport {
    /// Lines recorded in `bucket`.
    #[must_use]
    pub fn lines(&self, bucket: Bucket) -> &[String] {
        &self.buckets[bucket.index()]
    }

    /// Lines recorded for an item category.
    #[must_use]
    pub fn items(&self, category: ItemCategory) -> &[String] {
        self.lines(Bucket::from(category))
    }

    /// Lines naming excluded items.
    #[must_use]
    pub fn excluded(&self) -> &[String] {
        self.lines(Bucket::Excluded)
    }

    /// Transfer statistics seen during the run.
    #[must_use]
    pub const fn stats(&self) -> &TransferStats {
        &self.stats
    }

    /// Counters of dropped lines.
    #[must_use]
    pub const fn dropped(&self) -> DroppedCounts {
        self.dropped
    }

    /// Number of lines in `bucket`.
    #[must_use]
    pub fn count(&self, bucket: Bucket) -> usize {
        self.lines(bucket).len()
    }

    /// `(bucket, lines)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Bucket, &[String])> {
        Bucket::ALL
            .into_iter()
            .map(move |bucket| (bucket, self.lines(bucket)))
    }

    /// Number of lines across all buckets.
    #[must_use]
    pub fn total_lines(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// `true` when no bucket holds a line and no statistic was seen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_lines() == 0 && self.stats.is_empty()
    }
}

struct BucketMap<'a>(&'a ClassificationReport);

impl Serialize for BucketMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Bucket::ALL.len()))?;
        for (bucket, lines) in self.0.iter() {
            map.serialize_entry(bucket.name(), lines)?;
        }
        map.end()
    }
}

impl Serialize for ClassificationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ClassificationReport", 3)?;
        state.serialize_field("buckets", &BucketMap(self))?;
        state.serialize_field("stats", &self.stats)?;
        state.serialize_field("dropped", &self.dropped)?;
        state.end()
    }
}

/// Append-only accumulator for a report in progress.
///
/// The builder is owned by the single thread that classifies lines; it is
/// consumed by [`finish`](Self::finish).
#[derive(Debug, Default)]
pub struct ReportBuilder {
    report: ClassificationReport,
}

impl ReportBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item line to the bucket of its category.
    pub fn record_item(&mut self, category: ItemCategory, line: &str) {
        self.push(Bucket::from(category), line);
    }

    /// Appends a line to the Excluded bucket.
    pub fn record_excluded(&mut self, line: &str) {
        self.push(Bucket::Excluded, line);
    }

    /// Records a statistics pair, overwriting an earlier value for the label.
    pub fn record_stat(&mut self, entry: StatEntry) {
        logging::trace_stats!(label = entry.label(), value = entry.value(), "recorded statistic");
        if let Some(previous) = self.report.stats.record(entry) {
            logging::trace_stats!(previous = %previous, "statistic overwritten");
        }
    }

    /// Counts a dropped junk line.
    pub fn record_junk(&mut self) {
        self.report.dropped.junk += 1;
    }

    /// Counts a warning or error line and surfaces it in the log.
    pub fn record_diagnostic(&mut self, line: &str) {
        self.report.dropped.warn_err += 1;
        tracing::warn!(
            target: logging::Subsystem::Filter.target(),
            "{}",
            filters::strip_line_terminator(line)
        );
    }

    /// Completes the run.
    #[must_use]
    pub fn finish(self) -> ClassificationReport {
        self.report
    }

    fn push(&mut self, bucket: Bucket, line: &str) {
        self.report.buckets[bucket.index()].push(line.to_owned());
    }
}
