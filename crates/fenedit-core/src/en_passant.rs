//! En passant target checks.
//!
//! One classifier, [`check_en_passant`], backs the format check, the
//! positional check and the text-input facade; callers branch on its tag.

use crate::board::BoardState;
use crate::color::Color;
use crate::fen::FenComponents;
use crate::file::File;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;

/// Outcome of classifying an en passant value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnPassantCheck {
    /// `-`, or a well-placed target square.
    Ok,
    /// Text input that is still being typed. Only the input facade produces this.
    Incomplete,
    /// Not `-` and not a square on rank 3 or 6.
    BadFormat,
    /// Well-formed, but no pawn stands on the square it would have jumped to.
    BadPosition,
}

/// Classify an en passant value, checking it against `fen` when given.
///
/// A target on rank 3 needs a Black pawn on the same file at rank 4; one on
/// rank 6 needs a White pawn at rank 5. Only that pawn's presence and color
/// count: whether a capturing pawn sits beside it does not matter.
pub fn check_en_passant(square: &str, fen: Option<&str>) -> EnPassantCheck {
    if square == "-" {
        return EnPassantCheck::Ok;
    }
    let Some(target) = parse_target(square) else {
        return EnPassantCheck::BadFormat;
    };
    let Some(fen) = fen else {
        return EnPassantCheck::Ok;
    };

    let (pushed_to, color) = match target.rank() {
        Rank::Three => (Rank::Four, Color::Black),
        _ => (Rank::Five, Color::White),
    };
    let board = BoardState::from_placement(&FenComponents::parse(fen).placement);
    let expected = Piece::new(PieceKind::Pawn, color);
    if board.piece_at(Square::new(target.file(), pushed_to)) == Some(expected) {
        EnPassantCheck::Ok
    } else {
        EnPassantCheck::BadPosition
    }
}

/// A square on rank 3 or 6, in exactly two characters.
fn parse_target(square: &str) -> Option<Square> {
    let mut chars = square.chars();
    let file = File::from_char(chars.next()?)?;
    let rank = match chars.next()? {
        '3' => Rank::Three,
        '6' => Rank::Six,
        _ => return None,
    };
    if chars.next().is_some() {
        return None;
    }
    Some(Square::new(file, rank))
}

/// Whether `square` is `-` or a file `a`–`h` followed by `3` or `6`.
pub fn is_valid_en_passant_square_format(square: &str) -> bool {
    check_en_passant(square, None) == EnPassantCheck::Ok
}

/// Whether `square` is well-formed and matches a just-pushed pawn in `fen`.
pub fn is_valid_en_passant_square(fen: &str, square: &str) -> bool {
    check_en_passant(square, Some(fen)) == EnPassantCheck::Ok
}
