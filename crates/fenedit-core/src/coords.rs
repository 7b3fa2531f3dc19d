//! Conversions between algebraic squares and `[row][col]` board coordinates.
//!
//! Row 0 is rank 8 and column 0 is file a, matching the order ranks are
//! written in the piece-placement field.

use crate::file::File;
use crate::rank::Rank;
use crate::square::Square;

/// A `[row][col]` position on the display grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coords {
    pub row: usize,
    pub col: usize,
}

impl Coords {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Coords {
        Coords { row, col }
    }

    /// Mirror both axes, as seen from the other side of the board.
    ///
    /// Only meaningful for on-board coordinates.
    #[inline]
    pub const fn flipped(self) -> Coords {
        Coords {
            row: 7 - self.row,
            col: 7 - self.col,
        }
    }
}

/// Column of a file letter. The letter must already be a valid file.
#[inline]
pub fn file_to_col(file: char) -> usize {
    (file as u32).wrapping_sub('a' as u32) as usize
}

/// File letter of a column. The column must be in `0..8`.
#[inline]
pub fn col_to_file(col: usize) -> char {
    (b'a' + col as u8) as char
}

/// Row showing a rank number. The rank must be in `1..=8`.
#[inline]
pub fn rank_to_row(rank: u8) -> usize {
    8usize.wrapping_sub(rank as usize)
}

/// Rank number shown on a row. The row must be in `0..8`.
#[inline]
pub fn row_to_rank(row: usize) -> u8 {
    8u8.wrapping_sub(row as u8)
}

/// Grid coordinates of a square.
#[inline]
pub fn square_to_coords(square: Square) -> Coords {
    Coords {
        row: square.rank().row(),
        col: square.file().col(),
    }
}

/// Square at grid coordinates, or `None` when they fall off the board.
#[inline]
pub fn coords_to_square(coords: Coords) -> Option<Square> {
    let file = File::from_col(coords.col)?;
    let rank = Rank::from_row(coords.row)?;
    Some(Square::new(file, rank))
}

/// Whether `s` names one of the 64 squares.
#[inline]
pub fn is_valid_square(s: &str) -> bool {
    Square::from_algebraic(s).is_some()
}
