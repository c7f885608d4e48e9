//! Fixed-position decision table mapping a [`ChangeCode`] to an
//! [`ItemCategory`].
//!
//! Rows are evaluated top to bottom and the first match wins:
//!
//! | pos 0         | condition                                         | category |
//! |---------------|---------------------------------------------------|----------|
//! | `.`           | pos 1 `d`, pos 2-10 `..t......`                    | Ignored  |
//! | `.`           | pos 1 in `fdLDS`, pos 2-10 absent                 | UpToDate |
//! | `.`           | otherwise                                         | Modified |
//! | `*<>ch`       | pos 1-8 spell `deleting`, pos 9-10 absent         | Deleted  |
//! | `*<>ch`       | pos 1 in `fd`, pos 2-10 all `+`                   | Created  |
//! | `*<>ch`       | otherwise                                         | Modified |
//! | anything else |                                                   | Modified |

use crate::{ChangeCode, ItemCategory, ItemizedLine};

/// Attribute positions of a directory whose only change is its timestamp.
const DIRECTORY_TIME_ONLY: [Option<char>; 9] = [
    Some('.'),
    Some('.'),
    Some('t'),
    Some('.'),
    Some('.'),
    Some('.'),
    Some('.'),
    Some('.'),
    Some('.'),
];

/// Message rsync prints in place of the code for removed items.
const DELETING: &str = "deleting";

/// Classifies one item line.
///
/// The line is split into its change code and the rest; only the code
/// decides the category. Unknown or malformed codes fall back to
/// [`ItemCategory::Modified`] so no line is ever lost.
#[must_use]
pub fn classify_item(line: &str) -> (ItemCategory, &str) {
    let item = ItemizedLine::parse(line);
    let category = item.code().category();
    logging::trace_item!(%category, code = %item.code(), path = item.rest(), "classified item");
    (category, line)
}

impl ChangeCode {
    /// Resolves the category of this code using the decision table.
    #[must_use]
    pub fn category(&self) -> ItemCategory {
        match self.position(0) {
            Some('.') => self.not_updated_category(),
            Some('*' | '<' | '>' | 'c' | 'h') => self.updated_category(),
            _ => ItemCategory::Modified,
        }
    }

    fn not_updated_category(&self) -> ItemCategory {
        let attributes = self.attributes();
        if self.position(1) == Some('d') && attributes == DIRECTORY_TIME_ONLY {
            ItemCategory::Ignored
        } else if self.file_type().is_some() && attributes.iter().all(Option::is_none) {
            ItemCategory::UpToDate
        } else {
            ItemCategory::Modified
        }
    }

    fn updated_category(&self) -> ItemCategory {
        if self.is_deletion() {
            ItemCategory::Deleted
        } else if matches!(self.position(1), Some('f' | 'd'))
            && self.attributes().iter().all(|slot| *slot == Some('+'))
        {
            ItemCategory::Created
        } else {
            ItemCategory::Modified
        }
    }

    /// `true` when positions 1-8 spell `deleting` and nothing follows.
    fn is_deletion(&self) -> bool {
        self.positions()[1..=8]
            .iter()
            .copied()
            .eq(DELETING.chars().map(Some))
            && self.position(9).is_none()
            && self.position(10).is_none()
    }
}
