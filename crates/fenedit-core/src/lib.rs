//! FEN board editing: the codec, pure edits, and structural validation.
//!
//! The FEN string is the only state. Everything here takes a string and
//! returns a new one or a verdict about it; nothing panics on malformed input.

mod board;
mod castle_rights;
mod color;
mod coords;
mod edit;
mod en_passant;
mod error;
mod fen;
mod file;
mod input;
mod piece;
mod piece_kind;
mod rank;
mod square;
mod validate;

pub use board::{BoardState, PrettyBoard, board_state_to_fen, fen_to_board_state};
pub use castle_rights::CastleRights;
pub use color::Color;
pub use coords::{
    Coords, col_to_file, coords_to_square, file_to_col, is_valid_square, rank_to_row,
    row_to_rank, square_to_coords,
};
pub use edit::{
    castling_rights_to_string, clear_board, get_piece_at, move_piece, parse_castling_rights,
    set_en_passant, set_en_passant_and_infer_turn, set_fullmove_number, set_halfmove_clock,
    turn_from_en_passant, update_active_color, update_castling_rights, update_en_passant,
    update_piece_at,
};
pub use en_passant::{
    EnPassantCheck, check_en_passant, is_valid_en_passant_square,
    is_valid_en_passant_square_format,
};
pub use error::FenError;
pub use fen::{EMPTY_FEN, FenComponents, STARTING_FEN, components_to_fen, parse_fen};
pub use file::File;
pub use input::{
    EN_PASSANT_FORMAT_ERROR, EN_PASSANT_POSITION_ERROR, FEN_EMPTY_ERROR, FEN_STRUCTURE_ERROR,
    InputValidation, classify_en_passant_input, validate_en_passant_input, validate_fen_input,
};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use rank::Rank;
pub use square::Square;
pub use validate::{is_valid_fen_structure, validate_fen_structure};
