//! Statistics-line recognition and `(label, value)` extraction.
//!
//! Each label owns one independent pattern exposing a named `value` capture.
//! Patterns are tried in vocabulary order and the first match produces the
//! entry, so a line can never contribute more than one pair.

use regex::Regex;

use crate::{FilterError, FilterGroup};

/// Name of the capture group holding the statistic's value.
const VALUE_GROUP: &str = "value";

/// One `(label, value)` pair extracted from a statistics line.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct StatEntry {
    label: String,
    value: String,
}

impl StatEntry {
    /// Creates an entry from its parts.
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Label text exactly as it appears before the colon.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Value text with any `bytes` / `seconds` suffix removed.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Splits the entry into `(label, value)`.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.label, self.value)
    }
}

/// A statistics label paired with the pattern that recognises its line.
#[derive(Clone, Debug)]
pub struct StatsPattern {
    label: String,
    regex: Regex,
}

impl StatsPattern {
    /// Builds the standard `<Label>: <value>[ bytes| seconds]` pattern for `label`.
    ///
    /// The value is the first whitespace-delimited token after `": "`; unit
    /// suffixes and trailing breakdowns such as `(reg: 3, dir: 2)` are not
    /// part of it.
    ///
    /// # Errors
    ///
    /// Never fails for ordinary labels; the label is escaped before compiling.
    pub fn for_label(label: impl Into<String>) -> Result<Self, FilterError> {
        let label = label.into();
        let pattern = format!(
            r"^{}: (?P<{VALUE_GROUP}>\S+)(?: (?:bytes|seconds)\b)?",
            regex::escape(&label)
        );
        Self::with_pattern(label, &pattern)
    }

    /// Uses a caller-supplied pattern for `label`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError`] if `pattern` does not compile or does not
    /// declare a `(?P<value>...)` capture group.
    pub fn with_pattern(label: impl Into<String>, pattern: &str) -> Result<Self, FilterError> {
        let regex = Regex::new(pattern)
            .map_err(|error| FilterError::compile(FilterGroup::Stats, pattern.to_owned(), error))?;
        if !regex
            .capture_names()
            .any(|name| name == Some(VALUE_GROUP))
        {
            return Err(FilterError::missing_value_capture(pattern.to_owned()));
        }

        Ok(Self {
            label: label.into(),
            regex,
        })
    }

    /// Label recorded for matching lines.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns `true` if `line` is this label's statistics line.
    #[must_use]
    pub fn matches(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }

    /// Extracts the entry for `line`, if it matches.
    #[must_use]
    pub fn extract(&self, line: &str) -> Option<StatEntry> {
        let captures = self.regex.captures(line)?;
        let value = captures.name(VALUE_GROUP)?.as_str();
        Some(StatEntry::new(self.label.clone(), value))
    }
}

/// Ordered statistics vocabulary forming the Stats filter group.
#[derive(Clone, Debug, Default)]
pub struct StatsPatterns {
    patterns: Vec<StatsPattern>,
}

impl StatsPatterns {
    /// Builds the standard pattern for every label.
    ///
    /// # Errors
    ///
    /// Propagates [`StatsPattern::for_label`] failures.
    pub fn from_labels<I, S>(labels: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns = labels
            .into_iter()
            .map(StatsPattern::for_label)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Appends a pattern; it is tried after every existing one.
    pub fn push(&mut self, pattern: StatsPattern) {
        self.patterns.push(pattern);
    }

    /// Labels in evaluation order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(StatsPattern::label)
    }

    /// Number of labels in the vocabulary.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns `true` when the vocabulary is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns `true` if any label's pattern matches `line`.
    #[must_use]
    pub fn matches(&self, line: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(line))
    }

    /// Extracts the first matching `(label, value)` pair.
    #[must_use]
    pub fn extract(&self, line: &str) -> Option<StatEntry> {
        self.patterns
            .iter()
            .find_map(|pattern| pattern.extract(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_pattern_strips_byte_suffix() {
        let pattern = StatsPattern::for_label("Total bytes sent").unwrap();
        let entry = pattern.extract("Total bytes sent: 1,234").unwrap();
        assert_eq!(entry.value(), "1,234");

        let pattern = StatsPattern::for_label("Literal data").unwrap();
        let entry = pattern.extract("Literal data: 512 bytes").unwrap();
        assert_eq!(entry.label(), "Literal data");
        assert_eq!(entry.value(), "512");
    }

    #[test]
    fn standard_pattern_strips_seconds_suffix() {
        let pattern = StatsPattern::for_label("File list generation time").unwrap();
        let entry = pattern
            .extract("File list generation time: 0.001 seconds")
            .unwrap();
        assert_eq!(entry.value(), "0.001");
    }

    #[test]
    fn label_must_be_followed_by_colon() {
        let pattern = StatsPattern::for_label("Number of files").unwrap();
        assert!(!pattern.matches("Number of files transferred: 3"));
        assert!(pattern.matches("Number of files: 3 (reg: 2, dir: 1)"));
        assert_eq!(
            pattern.extract("Number of files: 3 (reg: 2, dir: 1)").unwrap().value(),
            "3"
        );
    }

    #[test]
    fn labels_are_case_sensitive() {
        let pattern = StatsPattern::for_label("Matched data").unwrap();
        assert!(!pattern.matches("matched data: 10 bytes"));
    }

    #[test]
    fn regex_metacharacters_in_labels_are_escaped() {
        let pattern = StatsPattern::for_label("Speedup (x)").unwrap();
        assert_eq!(pattern.extract("Speedup (x): 1.5").unwrap().value(), "1.5");
    }

    #[test]
    fn custom_pattern_requires_value_group() {
        let error = StatsPattern::with_pattern("Speedup", r"^total size is \S+  speedup is (\S+)")
            .unwrap_err();
        assert!(error.to_string().contains("`value` capture"));

        let pattern =
            StatsPattern::with_pattern("Speedup", r"speedup is (?P<value>[\d.]+)").unwrap();
        assert_eq!(
            pattern
                .extract("total size is 10  speedup is 2.50")
                .unwrap()
                .value(),
            "2.50"
        );
    }

    #[test]
    fn first_matching_label_wins() {
        let mut patterns = StatsPatterns::from_labels(["Total file size"]).unwrap();
        patterns.push(StatsPattern::with_pattern("Shadow", r"^Total (?P<value>file)").unwrap());

        let entry = patterns.extract("Total file size: 10 bytes").unwrap();
        assert_eq!(entry.label(), "Total file size");
        assert_eq!(patterns.labels().collect::<Vec<_>>(), ["Total file size", "Shadow"]);
    }
}
