use std::fmt;

use crate::FilterGroup;

/// Error produced when a configured sub-pattern cannot be used.
#[derive(Debug)]
pub struct FilterError {
    group: FilterGroup,
    pattern: String,
    kind: FilterErrorKind,
}

#[derive(Debug)]
enum FilterErrorKind {
    Compile(regex::Error),
    MissingValueCapture,
}

impl FilterError {
    /// Creates a new [`FilterError`] for a pattern that failed to compile.
    pub(crate) fn compile(group: FilterGroup, pattern: String, source: regex::Error) -> Self {
        Self {
            group,
            pattern,
            kind: FilterErrorKind::Compile(source),
        }
    }

    /// Creates a new [`FilterError`] for a statistics pattern without a `value` group.
    pub(crate) fn missing_value_capture(pattern: String) -> Self {
        Self {
            group: FilterGroup::Stats,
            pattern,
            kind: FilterErrorKind::MissingValueCapture,
        }
    }

    /// Returns the group the offending pattern was configured for.
    #[must_use]
    pub const fn group(&self) -> FilterGroup {
        self.group
    }

    /// Returns the offending pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            FilterErrorKind::Compile(source) => write!(
                f,
                "failed to compile {} pattern '{}': {}",
                self.group, self.pattern, source
            ),
            FilterErrorKind::MissingValueCapture => write!(
                f,
                "stats pattern '{}' has no `value` capture group",
                self.pattern
            ),
        }
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            FilterErrorKind::Compile(source) => Some(source),
            FilterErrorKind::MissingValueCapture => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FilterError;
    use crate::FilterGroup;
    use std::error::Error as _;

    #[test]
    fn filter_error_preserves_pattern_and_source() {
        let regex_err = regex::Regex::new("(").unwrap_err();
        let error = FilterError::compile(FilterGroup::Junk, "(".into(), regex_err.clone());

        assert_eq!(error.pattern(), "(");
        assert_eq!(error.group(), FilterGroup::Junk);
        assert!(error.to_string().contains("failed to compile junk pattern"));
        assert_eq!(error.source().unwrap().to_string(), regex_err.to_string());
    }

    #[test]
    fn missing_capture_has_no_source() {
        let error = FilterError::missing_value_capture("^Speedup: (.*)".into());

        assert_eq!(error.group(), FilterGroup::Stats);
        assert!(error.to_string().contains("`value` capture"));
        assert!(error.source().is_none());
    }
}
