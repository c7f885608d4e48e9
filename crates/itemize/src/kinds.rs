/// Update type indicator (position 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateType {
    /// `<` - sent to remote
    Sent,
    /// `>` - received from remote
    Received,
    /// `c` - local change (created)
    Created,
    /// `h` - hard link
    HardLink,
    /// `.` - not updated
    NotUpdated,
    /// `*` - message follows (e.g., `*deleting`)
    Message,
}

impl UpdateType {
    /// Returns the character representation for position 0.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Sent => '<',
            Self::Received => '>',
            Self::Created => 'c',
            Self::HardLink => 'h',
            Self::NotUpdated => '.',
            Self::Message => '*',
        }
    }

    /// Parses the position 0 character.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '<' => Some(Self::Sent),
            '>' => Some(Self::Received),
            'c' => Some(Self::Created),
            'h' => Some(Self::HardLink),
            '.' => Some(Self::NotUpdated),
            '*' => Some(Self::Message),
            _ => None,
        }
    }
}

/// File type indicator (position 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    /// `f` - regular file
    RegularFile,
    /// `d` - directory
    Directory,
    /// `L` - symlink
    Symlink,
    /// `D` - device (char or block)
    Device,
    /// `S` - special file (fifo, socket)
    Special,
}

impl FileType {
    /// Returns the character representation for position 1.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::RegularFile => 'f',
            Self::Directory => 'd',
            Self::Symlink => 'L',
            Self::Device => 'D',
            Self::Special => 'S',
        }
    }

    /// Parses the position 1 character.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'f' => Some(Self::RegularFile),
            'd' => Some(Self::Directory),
            'L' => Some(Self::Symlink),
            'D' => Some(Self::Device),
            'S' => Some(Self::Special),
            _ => None,
        }
    }
}
