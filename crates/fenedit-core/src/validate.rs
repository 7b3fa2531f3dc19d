//! Structural FEN validation.
//!
//! These checks cover the encoding only. Positions with two white kings,
//! pawns on the back rank or any material at all are well-formed.

use crate::color::Color;
use crate::en_passant::{EnPassantCheck, check_en_passant};
use crate::error::FenError;
use crate::piece::Piece;

/// Check that `fen` is a well-formed six-field FEN string.
///
/// Returns the first defect found, scanning fields left to right.
pub fn validate_fen_structure(fen: &str) -> Result<(), FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(FenError::WrongFieldCount {
            found: fields.len(),
        });
    }

    validate_placement(fields[0])?;

    if Color::from_fen_token(fields[1]).is_none() {
        return Err(FenError::InvalidColor {
            found: fields[1].to_string(),
        });
    }

    validate_castling(fields[2])?;

    if check_en_passant(fields[3], None) != EnPassantCheck::Ok {
        return Err(FenError::InvalidEnPassant {
            found: fields[3].to_string(),
        });
    }

    validate_counter(fields[4], "halfmove clock")?;
    validate_counter(fields[5], "fullmove number")?;

    Ok(())
}

/// Whether `fen` is a well-formed six-field FEN string.
pub fn is_valid_fen_structure(fen: &str) -> bool {
    validate_fen_structure(fen).is_ok()
}

fn validate_placement(placement: &str) -> Result<(), FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    for (rank_index, rank) in ranks.iter().enumerate() {
        let mut length = 0usize;
        for c in rank.chars() {
            length += match c {
                '1'..='8' => c as usize - '0' as usize,
                _ if Piece::from_fen_char(c).is_some() => 1,
                _ => return Err(FenError::InvalidPieceChar { character: c }),
            };
        }
        if length != 8 {
            return Err(FenError::BadRankLength { rank_index, length });
        }
    }

    Ok(())
}

fn validate_castling(castling: &str) -> Result<(), FenError> {
    if castling == "-" {
        return Ok(());
    }

    let invalid = || FenError::InvalidCastling {
        found: castling.to_string(),
    };
    if castling.is_empty() || castling.len() > 4 {
        return Err(invalid());
    }

    let mut seen = Vec::with_capacity(4);
    for c in castling.chars() {
        if !matches!(c, 'K' | 'Q' | 'k' | 'q') || seen.contains(&c) {
            return Err(invalid());
        }
        seen.push(c);
    }
    Ok(())
}

fn validate_counter(token: &str, field: &'static str) -> Result<(), FenError> {
    let digits = !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit());
    if digits && token.parse::<u32>().is_ok() {
        Ok(())
    } else {
        Err(FenError::InvalidMoveCounter {
            field,
            found: token.to_string(),
        })
    }
}
