/// Caller-supplied additions to (or replacements for) the built-in groups.
///
/// The configuration is an explicit value passed to
/// [`FilterSet::from_config`](crate::FilterSet::from_config); nothing is read
/// from the process environment.
///
/// # Examples
///
/// ```
/// use filters::{FilterGroup, FilterSet, PatternConfig, StatsPatternConfig};
///
/// let config = PatternConfig {
///     junk: vec![r"^created directory ".into()],
///     stats: vec![StatsPatternConfig::label("Number of deleted files")],
///     ..PatternConfig::default()
/// };
/// let filters = FilterSet::from_config(&config).unwrap();
///
/// assert_eq!(filters.classify_line("created directory /backup\n"), Some(FilterGroup::Junk));
/// assert_eq!(
///     filters.extract_stat("Number of deleted files: 4").unwrap().value(),
///     "4"
/// );
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct PatternConfig {
    /// Drop the built-in patterns and use only the configured ones.
    pub replace_defaults: bool,
    /// Extra junk sub-patterns.
    pub junk: Vec<String>,
    /// Extra excluded sub-patterns.
    pub excluded: Vec<String>,
    /// Extra warning/error sub-patterns.
    pub warn_err: Vec<String>,
    /// Extra statistics labels, tried after the built-in vocabulary.
    pub stats: Vec<StatsPatternConfig>,
}

impl PatternConfig {
    /// Returns `true` when the configuration leaves the defaults untouched.
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// One configured statistics label.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct StatsPatternConfig {
    /// Label recorded in the statistics map.
    pub label: String,
    /// Custom pattern with a `(?P<value>...)` group; the standard
    /// `<label>: <value>` pattern is used when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub pattern: Option<String>,
}

impl StatsPatternConfig {
    /// Label matched with the standard `<label>: <value>` pattern.
    #[must_use]
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            pattern: None,
        }
    }

    /// Label matched with a custom pattern.
    #[must_use]
    pub fn with_pattern(label: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            pattern: Some(pattern.into()),
        }
    }
}
