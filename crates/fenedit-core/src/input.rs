//! Validation for text fields that users edit a keystroke at a time.

use crate::en_passant::{EnPassantCheck, check_en_passant};
use crate::validate::is_valid_fen_structure;

/// Shown when an en passant entry is not a square on rank 3 or 6.
pub const EN_PASSANT_FORMAT_ERROR: &str = "En passant square must be on rank 3 or 6 (e.g. e3)";
/// Shown when no pawn stands where the en passant entry says one just moved.
pub const EN_PASSANT_POSITION_ERROR: &str = "No pawn has just moved past this en passant square";
/// Shown for an empty or whitespace-only FEN field.
pub const FEN_EMPTY_ERROR: &str = "FEN cannot be empty";
/// Shown when the FEN field is not well-formed.
pub const FEN_STRUCTURE_ERROR: &str = "Invalid FEN structure";

/// Result of validating an input field.
///
/// `valid == false` with no `error` means the value is incomplete and the
/// field should not show an error yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputValidation {
    pub valid: bool,
    pub error: Option<&'static str>,
}

impl InputValidation {
    pub const VALID: InputValidation = InputValidation {
        valid: true,
        error: None,
    };

    pub const INCOMPLETE: InputValidation = InputValidation {
        valid: false,
        error: None,
    };

    const fn rejected(error: &'static str) -> InputValidation {
        InputValidation {
            valid: false,
            error: Some(error),
        }
    }
}

impl From<EnPassantCheck> for InputValidation {
    fn from(check: EnPassantCheck) -> Self {
        match check {
            EnPassantCheck::Ok => InputValidation::VALID,
            EnPassantCheck::Incomplete => InputValidation::INCOMPLETE,
            EnPassantCheck::BadFormat => InputValidation::rejected(EN_PASSANT_FORMAT_ERROR),
            EnPassantCheck::BadPosition => InputValidation::rejected(EN_PASSANT_POSITION_ERROR),
        }
    }
}

/// Classify en passant text input.
///
/// Empty input clears the field. Anything other than two characters is
/// treated as still being typed.
pub fn classify_en_passant_input(value: &str, fen: Option<&str>) -> EnPassantCheck {
    if value.is_empty() {
        EnPassantCheck::Ok
    } else if value.chars().count() != 2 {
        EnPassantCheck::Incomplete
    } else {
        check_en_passant(value, fen)
    }
}

/// Validate en passant text input, against `fen` when given.
pub fn validate_en_passant_input(value: &str, fen: Option<&str>) -> InputValidation {
    classify_en_passant_input(value, fen).into()
}

/// Validate FEN text input.
pub fn validate_fen_input(fen: &str) -> InputValidation {
    if fen.trim().is_empty() {
        InputValidation::rejected(FEN_EMPTY_ERROR)
    } else if is_valid_fen_structure(fen) {
        InputValidation::VALID
    } else {
        InputValidation::rejected(FEN_STRUCTURE_ERROR)
    }
}
