//! Board files (columns a–h).

use std::fmt;

/// A file on the board. The discriminant is the board column (0 = a, 7 = h).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// All files, a to h.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// Board column of this file.
    #[inline]
    pub const fn col(self) -> usize {
        self as usize
    }

    /// File for a board column, or `None` outside `0..8`.
    #[inline]
    pub const fn from_col(col: usize) -> Option<File> {
        if col < 8 {
            Some(File::ALL[col])
        } else {
            None
        }
    }

    /// Parse a lowercase file letter.
    #[inline]
    pub fn from_char(c: char) -> Option<File> {
        match c {
            'a'..='h' => File::from_col(c as usize - 'a' as usize),
            _ => None,
        }
    }

    /// Lowercase file letter.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
