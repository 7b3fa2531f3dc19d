//! Castling availability as four independent flags.

use std::fmt;

/// Castling rights as a 4-bit field: bit 0 = `K`, 1 = `Q`, 2 = `k`, 3 = `q`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastleRights(u8);

impl CastleRights {
    /// No castling rights.
    pub const NONE: CastleRights = CastleRights(0);
    /// All castling rights.
    pub const ALL: CastleRights = CastleRights(0b1111);

    pub const WHITE_KING: CastleRights = CastleRights(0b0001);
    pub const WHITE_QUEEN: CastleRights = CastleRights(0b0010);
    pub const BLACK_KING: CastleRights = CastleRights(0b0100);
    pub const BLACK_QUEEN: CastleRights = CastleRights(0b1000);

    /// Flags paired with their FEN letter, in canonical serialization order.
    const LETTERS: [(CastleRights, char); 4] = [
        (Self::WHITE_KING, 'K'),
        (Self::WHITE_QUEEN, 'Q'),
        (Self::BLACK_KING, 'k'),
        (Self::BLACK_QUEEN, 'q'),
    ];

    /// Return `true` if no castling rights remain.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: CastleRights) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Return new rights with all bits from `other` added.
    #[inline]
    pub const fn insert(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 | other.0)
    }

    /// Read a castling field by letter membership.
    ///
    /// Order, duplicates and unrelated characters are ignored, so `"-"`, `""`
    /// and `"x"` all yield [`CastleRights::NONE`].
    pub fn from_fen(s: &str) -> CastleRights {
        Self::LETTERS
            .into_iter()
            .filter(|&(_, letter)| s.contains(letter))
            .fold(Self::NONE, |rights, (flag, _)| rights.insert(flag))
    }

    /// Write the castling field in `KQkq` order, or `-` when empty.
    pub fn to_fen(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }
        Self::LETTERS
            .into_iter()
            .filter(|&(flag, _)| self.contains(flag))
            .map(|(_, letter)| letter)
            .collect()
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({self})")
    }
}
