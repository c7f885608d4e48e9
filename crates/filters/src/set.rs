use std::sync::{Arc, OnceLock};

use crate::{
    DEFAULT_EXCLUDED_PATTERNS, DEFAULT_JUNK_PATTERNS, DEFAULT_STATS_LABELS,
    DEFAULT_WARN_ERR_PATTERNS, FilterError, FilterGroup, PatternConfig, PatternGroup, StatEntry,
    StatsPattern, StatsPatterns, strip_line_terminator,
};

/// Compiled, immutable collection of the four filter groups.
///
/// A `FilterSet` answers one question per line: which group, if any, claims
/// it. Groups are consulted in [`FilterGroup::PRIORITY`] order and the first
/// match wins, so a banner that happens to look like a statistic is still
/// junk.
///
/// `FilterSet` is cheaply cloneable (the inner state is behind an [`Arc`]).
///
/// # Examples
///
/// ```
/// use filters::{FilterGroup, FilterSet};
///
/// let set = FilterSet::default();
///
/// assert_eq!(set.classify_line("sending incremental file list\n"), Some(FilterGroup::Junk));
/// assert_eq!(
///     set.classify_line("[generator] excluding file a.tmp because of pattern *.tmp\n"),
///     Some(FilterGroup::Excluded)
/// );
/// assert_eq!(set.classify_line("Number of files: 120\n"), Some(FilterGroup::Stats));
/// assert_eq!(set.classify_line(".d..t....... src/\n"), None);
/// ```
#[derive(Clone, Debug)]
pub struct FilterSet {
    inner: Arc<FilterSetInner>,
}

#[derive(Debug)]
struct FilterSetInner {
    junk: PatternGroup,
    excluded: PatternGroup,
    warn_err: PatternGroup,
    stats: StatsPatterns,
}

impl FilterSet {
    /// Builds the set from the built-in patterns extended by `config`.
    ///
    /// With [`PatternConfig::replace_defaults`] set, only the configured
    /// patterns are used.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError`] if any configured pattern fails to compile or a
    /// custom statistics pattern lacks its `value` capture.
    pub fn from_config(config: &PatternConfig) -> Result<Self, FilterError> {
        let defaults: [&[&str]; 4] = if config.replace_defaults {
            [&[], &[], &[], &[]]
        } else {
            [
                DEFAULT_JUNK_PATTERNS,
                DEFAULT_EXCLUDED_PATTERNS,
                DEFAULT_WARN_ERR_PATTERNS,
                DEFAULT_STATS_LABELS,
            ]
        };
        let [junk_defaults, excluded_defaults, warn_err_defaults, stats_defaults] = defaults;

        let mut junk = PatternGroup::new(FilterGroup::Junk, junk_defaults)?;
        junk.extend(&config.junk)?;
        let mut excluded = PatternGroup::new(FilterGroup::Excluded, excluded_defaults)?;
        excluded.extend(&config.excluded)?;
        let mut warn_err = PatternGroup::new(FilterGroup::WarnErr, warn_err_defaults)?;
        warn_err.extend(&config.warn_err)?;

        let mut stats = StatsPatterns::from_labels(stats_defaults.iter().copied())?;
        for entry in &config.stats {
            let pattern = match &entry.pattern {
                Some(pattern) => StatsPattern::with_pattern(entry.label.clone(), pattern)?,
                None => StatsPattern::for_label(entry.label.clone())?,
            };
            stats.push(pattern);
        }

        Ok(Self {
            inner: Arc::new(FilterSetInner {
                junk,
                excluded,
                warn_err,
                stats,
            }),
        })
    }

    /// Returns the first group claiming `line`, or `None` for item lines.
    ///
    /// The trailing line terminator is ignored.
    #[must_use]
    pub fn classify_line(&self, line: &str) -> Option<FilterGroup> {
        let line = strip_line_terminator(line);
        let group = FilterGroup::PRIORITY
            .into_iter()
            .find(|&group| self.group_matches(group, line));
        if let Some(group) = group {
            logging::trace_filter!(%group, line, "line claimed by filter group");
        }
        group
    }

    /// Extracts the statistics pair from a line in the Stats group.
    ///
    /// Returns `None` when no statistics label matches; callers normally only
    /// invoke this after [`classify_line`](Self::classify_line) reported
    /// [`FilterGroup::Stats`].
    #[must_use]
    pub fn extract_stat(&self, line: &str) -> Option<StatEntry> {
        self.inner.stats.extract(strip_line_terminator(line))
    }

    /// Returns `true` if `group` claims `line` (terminator already removed).
    fn group_matches(&self, group: FilterGroup, line: &str) -> bool {
        match group {
            FilterGroup::Junk => self.inner.junk.matches(line),
            FilterGroup::Excluded => self.inner.excluded.matches(line),
            FilterGroup::WarnErr => self.inner.warn_err.matches(line),
            FilterGroup::Stats => self.inner.stats.matches(line),
        }
    }

    /// Number of sub-patterns configured for `group`.
    #[must_use]
    pub fn pattern_count(&self, group: FilterGroup) -> usize {
        match group {
            FilterGroup::Junk => self.inner.junk.len(),
            FilterGroup::Excluded => self.inner.excluded.len(),
            FilterGroup::WarnErr => self.inner.warn_err.len(),
            FilterGroup::Stats => self.inner.stats.len(),
        }
    }

    /// Statistics labels in evaluation order.
    pub fn stats_labels(&self) -> impl Iterator<Item = &str> {
        self.inner.stats.labels()
    }
}

impl Default for FilterSet {
    /// The built-in groups. Compiled once per process and shared.
    fn default() -> Self {
        static DEFAULT: OnceLock<FilterSet> = OnceLock::new();
        DEFAULT
            .get_or_init(|| {
                Self::from_config(&PatternConfig::default())
                    .expect("built-in filter patterns compile")
            })
            .clone()
    }
}
