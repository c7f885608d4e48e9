use regex::Regex;

use crate::{FilterError, FilterGroup};

/// Compiled, independent sub-patterns belonging to one [`FilterGroup`].
///
/// Membership is all that matters: a line belongs to the group when at least
/// one sub-pattern matches, regardless of which.
#[derive(Clone, Debug)]
pub struct PatternGroup {
    group: FilterGroup,
    patterns: Vec<Regex>,
}

impl PatternGroup {
    /// Compiles `patterns` into a group.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError`] naming the first pattern that fails to compile.
    pub fn new<I, S>(group: FilterGroup, patterns: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Regex::new(pattern)
                    .map_err(|error| FilterError::compile(group, pattern.to_owned(), error))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { group, patterns })
    }

    /// Returns the group these patterns belong to.
    #[must_use]
    pub const fn group(&self) -> FilterGroup {
        self.group
    }

    /// Returns the number of sub-patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns `true` when the group has no sub-patterns and therefore never matches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns `true` if any sub-pattern matches `line`.
    ///
    /// `line` is expected to have its terminator removed already.
    #[must_use]
    pub fn matches(&self, line: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(line))
    }

    /// Appends further compiled sub-patterns.
    pub(crate) fn extend<I, S>(&mut self, patterns: I) -> Result<(), FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extra = Self::new(self.group, patterns)?;
        self.patterns.extend(extra.patterns);
        Ok(())
    }
}
