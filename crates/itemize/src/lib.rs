#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Decodes upstream rsync's `--itemize-changes` (`-i`) codes and assigns each
//! item line to a category.
//!
//! The itemize code is an 11-character token: `YXcstpoguax`
//!
//! - Position 0 (Y): Update type
//!   - `<` sent to remote
//!   - `>` received from remote
//!   - `c` local change (created)
//!   - `h` hard link
//!   - `.` not updated
//!   - `*` message (e.g., `*deleting`)
//! - Position 1 (X): File type
//!   - `f` regular file
//!   - `d` directory
//!   - `L` symlink
//!   - `D` device (char or block)
//!   - `S` special file (fifo, socket)
//! - Positions 2-10: Attribute changes (`c`hecksum, `s`ize, `t`ime,
//!   `p`erms, `o`wner, `g`roup, `u`/`n`/`b` access/create time, `a`cl,
//!   `x`attr), `.` when unchanged and `+` for a new item.
//!
//! rsync shortens the code when nothing changed (`.f` followed by spaces) and
//! replaces it with a message for deletions (`*deleting`). Positions past the
//! end of the token are therefore *absent*, which [`ChangeCode`] keeps distinct
//! from every character.
//!
//! # Examples
//!
//! ```
//! use itemize::{ItemCategory, classify_item};
//!
//! assert_eq!(classify_item(">f+++++++++ newfile.txt\n").0, ItemCategory::Created);
//! assert_eq!(classify_item("*deleting   oldfile.txt\n").0, ItemCategory::Deleted);
//! assert_eq!(classify_item(".f          file9\n").0, ItemCategory::UpToDate);
//! assert_eq!(classify_item(".d..t.......\n").0, ItemCategory::Ignored);
//! assert_eq!(classify_item(">f.st...... grown.log\n").0, ItemCategory::Modified);
//! ```

mod category;
mod code;
mod decision;
mod kinds;

pub use category::ItemCategory;
pub use code::{CODE_WIDTH, ChangeCode, ItemizedLine};
pub use decision::classify_item;
pub use kinds::{FileType, UpdateType};
