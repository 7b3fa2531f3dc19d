//! Board squares and their algebraic names.

use std::fmt;
use std::str::FromStr;

use crate::error::FenError;
use crate::file::File;
use crate::rank::Rank;

/// A square on the board, encoded as `(rank - 1) * 8 + file` so a1 = 0 and h8 = 63.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a file and a rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Square {
        Square((rank.number() - 1) * 8 + file as u8)
    }

    /// Parse algebraic notation such as `"e4"`.
    ///
    /// Exactly two characters are accepted: a lowercase file `a`–`h` and a rank `1`–`8`.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file = File::from_char(chars.next()?)?;
        let rank = Rank::from_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Square::new(file, rank))
    }

    /// Return the file of this square.
    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 % 8) as usize]
    }

    /// Return the rank of this square.
    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 / 8) as usize]
    }

    /// Iterate over all 64 squares, a1 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl FromStr for Square {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Square, FenError> {
        Square::from_algebraic(s).ok_or_else(|| FenError::InvalidSquare {
            found: s.to_string(),
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::Square;
    use crate::file::File;
    use crate::rank::Rank;

    #[test]
    fn accessors() {
        let sq = Square::new(File::E, Rank::Four);
        assert_eq!(sq.file(), File::E);
        assert_eq!(sq.rank(), Rank::Four);
        assert_eq!(sq.to_string(), "e4");
        assert_eq!(Square::new(File::A, Rank::One).to_string(), "a1");
        assert_eq!(Square::new(File::H, Rank::Eight).to_string(), "h8");
    }

    #[test]
    fn algebraic_roundtrip() {
        for sq in Square::all() {
            let name = sq.to_string();
            assert_eq!(Square::from_algebraic(&name), Some(sq));
        }
        assert_eq!(Square::all().count(), Square::COUNT);
    }

    #[test]
    fn algebraic_invalid() {
        for bad in ["", "e", "e44", "i1", "a0", "a9", "E4", "4e", " e4", "e4 "] {
            assert!(Square::from_algebraic(bad).is_none(), "{bad:?} accepted");
        }
    }

    #[test]
    fn from_str_reports_input() {
        let err = "z9".parse::<Square>().unwrap_err();
        assert_eq!(err.to_string(), "invalid square: \"z9\"");
        assert_eq!("g7".parse::<Square>().unwrap().to_string(), "g7");
    }

    #[test]
    fn debug_shows_algebraic() {
        assert_eq!(format!("{:?}", Square::new(File::E, Rank::Four)), "Square(e4)");
    }
}
