//! Board ranks (1–8) and their mapping onto display rows.

use std::fmt;

/// A rank on the board, from `One` (White's back rank) to `Eight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
}

impl Rank {
    /// All ranks, 1 to 8.
    pub const ALL: [Rank; 8] = [
        Rank::One,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
    ];

    /// The rank number, 1..=8.
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Rank from its number, or `None` outside `1..=8`.
    #[inline]
    pub const fn from_number(n: u8) -> Option<Rank> {
        if n >= 1 && n <= 8 {
            Some(Rank::ALL[n as usize - 1])
        } else {
            None
        }
    }

    /// Display row of this rank: row 0 is rank 8, row 7 is rank 1.
    #[inline]
    pub const fn row(self) -> usize {
        8 - self as usize
    }

    /// Rank shown on a display row, or `None` outside `0..8`.
    #[inline]
    pub const fn from_row(row: usize) -> Option<Rank> {
        if row < 8 {
            Rank::from_number(8 - row as u8)
        } else {
            None
        }
    }

    /// Parse a rank digit.
    #[inline]
    pub fn from_char(c: char) -> Option<Rank> {
        match c {
            '1'..='8' => Rank::from_number(c as u8 - b'0'),
            _ => None,
        }
    }

    /// The rank digit.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'0' + self as u8) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
