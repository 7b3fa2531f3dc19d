//! The 8×8 grid derived from the piece-placement field.

use std::fmt;

use tracing::trace;

use crate::coords::{Coords, square_to_coords};
use crate::piece::Piece;
use crate::square::Square;

/// Piece placement as a `[row][col]` grid. Row 0 is rank 8, column 0 is file a.
///
/// A board state is a disposable view of one FEN field: build it, read or
/// change a few cells, serialize it back with [`BoardState::to_placement`].
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardState {
    cells: [[Option<Piece>; 8]; 8],
}

impl BoardState {
    /// A board with no pieces.
    pub const fn empty() -> BoardState {
        BoardState {
            cells: [[None; 8]; 8],
        }
    }

    /// Expand a piece-placement field.
    ///
    /// Each digit skips that many columns; each other character fills one
    /// column. Input is not validated: ranks past the eighth, columns past h
    /// and characters that are not piece letters are dropped, and a short
    /// rank leaves its remaining cells empty.
    pub fn from_placement(placement: &str) -> BoardState {
        let mut board = BoardState::empty();

        for (row, rank) in placement.split('/').enumerate() {
            if row >= 8 {
                trace!(row, "ignoring rank past the eighth");
                break;
            }
            let mut col = 0usize;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                match Piece::from_fen_char(c) {
                    Some(piece) if col < 8 => board.cells[row][col] = Some(piece),
                    Some(_) => trace!(row, col, "ignoring piece past file h"),
                    None => {
                        trace!(character = %c, row, col, "ignoring unknown placement character")
                    }
                }
                col += 1;
            }
        }

        board
    }

    /// Collapse back into a placement field, run-length encoding empty cells.
    pub fn to_placement(&self) -> String {
        let mut out = String::with_capacity(71);
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                out.push('/');
            }
            let mut empty = 0u8;
            for cell in cells {
                match cell {
                    Some(piece) => {
                        if empty > 0 {
                            out.push((b'0' + empty) as char);
                            empty = 0;
                        }
                        out.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push((b'0' + empty) as char);
            }
        }
        out
    }

    /// Piece at grid coordinates, `None` for empty or off-board cells.
    #[inline]
    pub fn get(&self, coords: Coords) -> Option<Piece> {
        self.cells.get(coords.row)?.get(coords.col).copied().flatten()
    }

    /// Set or clear one cell. Off-board coordinates are ignored.
    #[inline]
    pub fn set(&mut self, coords: Coords, piece: Option<Piece>) {
        if let Some(cell) = self.cells.get_mut(coords.row).and_then(|r| r.get_mut(coords.col)) {
            *cell = piece;
        }
    }

    /// Piece on a square.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.get(square_to_coords(square))
    }

    /// Place or remove a piece on a square.
    #[inline]
    pub fn set_piece_at(&mut self, square: Square, piece: Option<Piece>) {
        self.set(square_to_coords(square), piece);
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

/// Expand a placement field. See [`BoardState::from_placement`].
pub fn fen_to_board_state(placement: &str) -> BoardState {
    BoardState::from_placement(placement)
}

/// Serialize a grid. See [`BoardState::to_placement`].
pub fn board_state_to_fen(board: &BoardState) -> String {
    board.to_placement()
}

impl fmt::Debug for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoardState(\"{}\")", self.to_placement())
    }
}

/// Wrapper for printing a board as an 8x8 grid with rank and file labels.
pub struct PrettyBoard<'a>(&'a BoardState);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.0.cells.iter().enumerate() {
            write!(f, "{}  ", 8 - row)?;
            for (col, cell) in cells.iter().enumerate() {
                let c = cell.map_or('.', Piece::fen_char);
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
