use std::fmt;

/// Disposition assigned to an itemized line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum ItemCategory {
    /// Item already matched the destination.
    UpToDate,
    /// Item removed from the destination.
    Deleted,
    /// Item changed in some way; also the catch-all for unrecognised codes.
    Modified,
    /// Item newly created on the destination.
    Created,
    /// Directory whose only change was its timestamp.
    Ignored,
}

impl ItemCategory {
    /// Every category, in report order.
    pub const ALL: [Self; 5] = [
        Self::UpToDate,
        Self::Deleted,
        Self::Modified,
        Self::Created,
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
            Self::Ignored => "ignored",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
