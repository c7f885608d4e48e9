use std::fmt;

use crate::{FileType, UpdateType};

/// Number of positions consulted in an itemize code.
pub const CODE_WIDTH: usize = 11;

/// Position-indexed view of an itemize code token.
///
/// Each of the [`CODE_WIDTH`] positions holds either the character found at
/// that offset or `None` when the token ended earlier. Characters past the
/// last position are ignored.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct ChangeCode {
    positions: [Option<char>; CODE_WIDTH],
}

impl ChangeCode {
    /// Expands `token` into its positions.
    ///
    /// # Examples
    ///
    /// ```
    /// use itemize::ChangeCode;
    ///
    /// let code = ChangeCode::parse(".f");
    /// assert_eq!(code.position(1), Some('f'));
    /// assert_eq!(code.position(2), None);
    /// ```
    #[must_use]
    pub fn parse(token: &str) -> Self {
        let mut positions = [None; CODE_WIDTH];
        for (slot, ch) in positions.iter_mut().zip(token.chars()) {
            *slot = Some(ch);
        }
        Self { positions }
    }

    /// Character at `index`, or `None` when absent or out of range.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<char> {
        self.positions.get(index).copied().flatten()
    }

    /// All positions, 0 through 10.
    #[must_use]
    pub const fn positions(&self) -> &[Option<char>; CODE_WIDTH] {
        &self.positions
    }

    /// The per-attribute positions 2 through 10.
    #[must_use]
    pub fn attributes(&self) -> &[Option<char>] {
        &self.positions[2..]
    }

    /// Typed update marker (position 0), if recognised.
    #[must_use]
    pub fn update_type(&self) -> Option<UpdateType> {
        self.position(0).and_then(UpdateType::from_char)
    }

    /// Typed item-type marker (position 1), if recognised.
    ///
    /// Message codes such as `*deleting` carry text instead of an item type
    /// and always yield `None`.
    #[must_use]
    pub fn file_type(&self) -> Option<FileType> {
        if self.update_type() == Some(UpdateType::Message) {
            return None;
        }
        self.position(1).and_then(FileType::from_char)
    }

    /// Number of present positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.iter().take_while(|slot| slot.is_some()).count()
    }

    /// `true` when the token was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions[0].is_none()
    }
}

impl fmt::Display for ChangeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.positions.iter().map_while(|slot| *slot) {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

/// An item line split into its change code and the remaining text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ItemizedLine<'a> {
    line: &'a str,
    code: ChangeCode,
    rest: &'a str,
}

impl<'a> ItemizedLine<'a> {
    /// Splits `line` on its first run of whitespace.
    ///
    /// The leading field becomes the [`ChangeCode`]; the remainder (path and
    /// details, terminator removed) is carried along untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use itemize::ItemizedLine;
    ///
    /// let item = ItemizedLine::parse("*deleting   old/file.txt\n");
    /// assert_eq!(item.code().to_string(), "*deleting");
    /// assert_eq!(item.rest(), "old/file.txt");
    /// ```
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        let (token, rest) = match line.split_once(char::is_whitespace) {
            Some((token, rest)) => (token, rest.trim_start()),
            None => (line, ""),
        };
        Self {
            line,
            code: ChangeCode::parse(token),
            rest: rest.trim_end_matches(['\n', '\r']),
        }
    }

    /// The raw line, terminator included.
    #[must_use]
    pub const fn line(&self) -> &'a str {
        self.line
    }

    /// The decoded change code.
    #[must_use]
    pub const fn code(&self) -> &ChangeCode {
        &self.code
    }

    /// Text after the change code.
    #[must_use]
    pub const fn rest(&self) -> &'a str {
        self.rest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pads_short_tokens_with_absent_positions() {
        let code = ChangeCode::parse("*deleting");
        assert_eq!(code.len(), 9);
        assert_eq!(code.position(8), Some('g'));
        assert_eq!(code.position(9), None);
        assert_eq!(code.position(10), None);
        assert_eq!(code.update_type(), Some(UpdateType::Message));
        assert_eq!(code.file_type(), None);
    }

    #[test]
    fn message_codes_have_no_file_type() {
        for token in ["*deleting", "*dLfDS"] {
            let code = ChangeCode::parse(token);
            assert_eq!(code.update_type(), Some(UpdateType::Message));
            assert_eq!(code.file_type(), None);
        }
        assert_eq!(ChangeCode::parse(".d").file_type(), Some(FileType::Directory));
    }

    #[test]
    fn parse_ignores_characters_past_the_last_position() {
        let code = ChangeCode::parse(".d..t.......");
        assert_eq!(code.len(), CODE_WIDTH);
        assert_eq!(code.to_string(), ".d..t......");
        assert_eq!(code.position(11), None);
    }

    #[test]
    fn empty_token_is_all_absent() {
        let code = ChangeCode::parse("");
        assert!(code.is_empty());
        assert!(code.positions().iter().all(Option::is_none));
        assert_eq!(code.to_string(), "");
    }

    #[test]
    fn attributes_cover_positions_two_through_ten() {
        let code = ChangeCode::parse(">fcstpogbax");
        assert_eq!(code.attributes().len(), 9);
        assert_eq!(code.attributes()[0], Some('c'));
        assert_eq!(code.attributes()[8], Some('x'));
    }

    #[test]
    fn multibyte_characters_occupy_one_position() {
        let code = ChangeCode::parse(">é");
        assert_eq!(code.position(1), Some('é'));
        assert_eq!(code.len(), 2);
    }

    #[test]
    fn itemized_line_without_rest() {
        let item = ItemizedLine::parse(".d..t.......\n");
        assert_eq!(item.code().len(), CODE_WIDTH);
        assert_eq!(item.rest(), "");
        assert_eq!(item.line(), ".d..t.......\n");
    }

    #[test]
    fn itemized_line_keeps_inner_spacing_of_rest() {
        let item = ItemizedLine::parse("cL+++++++++ link name -> target\r\n");
        assert_eq!(item.code().file_type(), Some(FileType::Symlink));
        assert_eq!(item.rest(), "link name -> target");
    }

    #[test]
    fn leading_whitespace_yields_empty_code() {
        let item = ItemizedLine::parse("  stray text");
        assert!(item.code().is_empty());
        assert_eq!(item.rest(), "stray text");
    }
}
