use std::fmt;

/// Filter group a report line can belong to, in priority order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum FilterGroup {
    /// Banners, blank lines and allocator diagnostics with no value.
    Junk,
    /// Generator notices about paths skipped because of a filter pattern.
    Excluded,
    /// Warnings and errors emitted by rsync during the run.
    WarnErr,
    /// Run-level statistics summary lines.
    Stats,
}

impl FilterGroup {
    /// Groups in evaluation order.
    pub const PRIORITY: [Self; 4] = [Self::Junk, Self::Excluded, Self::WarnErr, Self::Stats];

    /// Short name used in diagnostics and configuration keys.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Junk => "junk",
            Self::Excluded => "excluded",
            Self::WarnErr => "warn_err",
            Self::Stats => "stats",
        }
    }
}

impl fmt::Display for FilterGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
