use std::io::BufRead;

use filters::{FilterError, FilterGroup, FilterSet, PatternConfig, StatEntry};
use itemize::{ItemCategory, classify_item};

use crate::{ClassificationReport, ReportBuilder, StreamError};

/// Disposition of a single report line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LineOutcome {
    /// Dropped; carries no classification value.
    Junk,
    /// Appended to the Excluded bucket.
    Excluded,
    /// Dropped after being logged as a warning or error.
    WarnErr,
    /// Recorded in the statistics map.
    Stat(StatEntry),
    /// Appended to the bucket of the item category.
    Item(ItemCategory),
}

/// Pure per-line classifier combining the filter groups and the itemize
/// decision table.
///
/// Cloning is cheap; the compiled groups are shared.
#[derive(Clone, Debug, Default)]
pub struct LineClassifier {
    filters: FilterSet,
}

impl LineClassifier {
    /// Wraps an already-compiled filter set.
    #[must_use]
    pub const fn new(filters: FilterSet) -> Self {
        Self { filters }
    }

    /// Compiles the groups described by `config`.
    ///
    /// # Errors
    ///
    /// Returns the [`FilterError`] of the first pattern that fails to compile.
    pub fn from_config(config: &PatternConfig) -> Result<Self, FilterError> {
        FilterSet::from_config(config).map(Self::new)
    }

    /// The underlying filter set.
    #[must_use]
    pub const fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Decides the outcome of one line without side effects.
    ///
    /// A line claimed by the Stats group whose value cannot be extracted is
    /// treated as an item line, so it still lands in a bucket.
    #[must_use]
    pub fn classify(&self, line: &str) -> LineOutcome {
        match self.filters.classify_line(line) {
            Some(FilterGroup::Junk) => LineOutcome::Junk,
            Some(FilterGroup::Excluded) => LineOutcome::Excluded,
            Some(FilterGroup::WarnErr) => LineOutcome::WarnErr,
            Some(FilterGroup::Stats) => self
                .filters
                .extract_stat(line)
                .map_or_else(|| Self::item(line), LineOutcome::Stat),
            None => Self::item(line),
        }
    }

    fn item(line: &str) -> LineOutcome {
        LineOutcome::Item(classify_item(line).0)
    }

    /// Classifies `line` and applies the outcome to `builder`.
    pub fn feed(&self, builder: &mut ReportBuilder, line: &str) {
        match self.classify(line) {
            LineOutcome::Junk => builder.record_junk(),
            LineOutcome::Excluded => builder.record_excluded(line),
            LineOutcome::WarnErr => builder.record_diagnostic(line),
            LineOutcome::Stat(entry) => builder.record_stat(entry),
            LineOutcome::Item(category) => builder.record_item(category, line),
        }
    }

    /// Classifies a complete, in-memory line source.
    pub fn classify_lines<I, S>(&self, lines: I) -> ClassificationReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = ReportBuilder::new();
        for line in lines {
            self.feed(&mut builder, line.as_ref());
        }
        builder.finish()
    }

    /// Classifies every line of `reader` until end of input.
    ///
    /// Lines keep their terminator; invalid UTF-8 is replaced lossily.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError`] carrying the lines classified so far when the
    /// reader fails.
    pub fn classify_reader<R: BufRead>(
        &self,
        mut reader: R,
    ) -> Result<ClassificationReport, StreamError> {
        let mut builder = ReportBuilder::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => return Ok(builder.finish()),
                Ok(_) => self.feed(&mut builder, &String::from_utf8_lossy(&buf)),
                Err(err) if err.kind() == std::io::ErrorKind::Interrupted => {}
                Err(source) => {
                    return Err(StreamError {
                        partial: Box::new(builder.finish()),
                        source,
                    });
                }
            }
        }
    }
}
