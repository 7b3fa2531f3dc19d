//! Pure edits on FEN strings.
//!
//! Every function takes a whole FEN string and returns a whole new one:
//! parse, change one thing, serialize. Fields an edit does not touch pass
//! through unchanged, apart from whitespace normalization. The active color
//! is always rewritten as `w` or `b`; an unrecognized token becomes `w`.

use tracing::debug;

use crate::board::BoardState;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::fen::FenComponents;
use crate::piece::Piece;
use crate::rank::Rank;
use crate::square::Square;

/// Parse, apply `f` to the fields, serialize.
fn with_components(fen: &str, f: impl FnOnce(&mut FenComponents)) -> String {
    let mut components = FenComponents::parse(fen);
    f(&mut components);
    components.to_string()
}

/// Parse, apply `f` to the derived board, serialize only the placement back.
fn with_board(fen: &str, f: impl FnOnce(&mut BoardState)) -> String {
    with_components(fen, |components| {
        let mut board = BoardState::from_placement(&components.placement);
        f(&mut board);
        components.placement = board.to_placement();
    })
}

/// The piece on `square`, if any.
pub fn get_piece_at(fen: &str, square: Square) -> Option<Piece> {
    let components = FenComponents::parse(fen);
    BoardState::from_placement(&components.placement).piece_at(square)
}

/// Place `piece` on `square`, or empty it with `None`.
///
/// All six fields are re-serialized, so an unrecognized active-color token
/// comes back as `w`.
pub fn update_piece_at(fen: &str, square: Square, piece: Option<Piece>) -> String {
    with_board(fen, |board| board.set_piece_at(square, piece))
}

/// Move whatever stands on `from` to `to`, replacing anything there.
///
/// Moving from an empty square returns `fen` unchanged. Nothing about the
/// move is checked: any piece may go anywhere.
pub fn move_piece(fen: &str, from: Square, to: Square) -> String {
    let components = FenComponents::parse(fen);
    let mut board = BoardState::from_placement(&components.placement);
    let Some(piece) = board.piece_at(from) else {
        debug!(%from, %to, "move from empty square ignored");
        return fen.to_string();
    };

    board.set_piece_at(from, None);
    board.set_piece_at(to, Some(piece));
    FenComponents {
        placement: board.to_placement(),
        ..components
    }
    .to_string()
}

/// Empty the board, keeping every other field.
pub fn clear_board(fen: &str) -> String {
    with_board(fen, |board| *board = BoardState::empty())
}

/// Read a castling field. See [`CastleRights::from_fen`].
pub fn parse_castling_rights(castling: &str) -> CastleRights {
    CastleRights::from_fen(castling)
}

/// Write castling rights in `KQkq` order, `-` when none.
pub fn castling_rights_to_string(rights: CastleRights) -> String {
    rights.to_fen()
}

/// Replace the castling field verbatim. An empty string is written as `-`.
pub fn update_castling_rights(fen: &str, castling: &str) -> String {
    with_components(fen, |components| {
        components.castling = field_or_dash(castling);
    })
}

/// Replace the active color.
pub fn update_active_color(fen: &str, color: Color) -> String {
    with_components(fen, |components| components.active_color = color)
}

/// Replace the en passant field verbatim, leaving the active color alone.
///
/// An empty string is written as `-`. The square is not checked against
/// the board; see [`check_en_passant`](crate::check_en_passant) for that.
pub fn set_en_passant(fen: &str, square: &str) -> String {
    with_components(fen, |components| {
        components.en_passant = field_or_dash(square);
    })
}

/// Replace the en passant field and make the active color agree with it.
///
/// A target on rank 3 means White just pushed, so Black moves; rank 6 means
/// White moves. Clearing the field (`-` or empty) leaves the color alone.
pub fn set_en_passant_and_infer_turn(fen: &str, square: &str) -> String {
    with_components(fen, |components| {
        components.en_passant = field_or_dash(square);
        if components.en_passant != "-" {
            components.active_color = turn_from_en_passant(&components.en_passant);
        }
    })
}

/// Set the en passant field, optionally syncing the turn.
///
/// Equivalent to [`set_en_passant_and_infer_turn`] when `auto_update_turn`
/// is set and to [`set_en_passant`] otherwise.
pub fn update_en_passant(fen: &str, square: &str, auto_update_turn: bool) -> String {
    if auto_update_turn {
        set_en_passant_and_infer_turn(fen, square)
    } else {
        set_en_passant(fen, square)
    }
}

/// Side to move implied by an en passant target.
///
/// Rank 3 gives Black, rank 6 gives White. `-` and anything without a
/// recognizable rank default to White.
pub fn turn_from_en_passant(square: &str) -> Color {
    match square.chars().nth(1).and_then(Rank::from_char) {
        Some(Rank::Three) => Color::Black,
        _ => Color::White,
    }
}

/// Replace the halfmove clock.
pub fn set_halfmove_clock(fen: &str, halfmove: u32) -> String {
    with_components(fen, |components| components.halfmove = Some(halfmove))
}

/// Replace the fullmove number.
pub fn set_fullmove_number(fen: &str, fullmove: u32) -> String {
    with_components(fen, |components| components.fullmove = Some(fullmove))
}

fn field_or_dash(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}
