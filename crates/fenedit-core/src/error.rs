//! Error types for FEN structure checks and typed parsing.

/// A structural defect in a FEN string, or a bad square or piece token.
///
/// The codec and mutation functions never return these; they are produced by
/// [`validate_fen_structure`](crate::validate_fen_structure) and by the
/// `FromStr` impls of [`Square`](crate::Square) and [`Piece`](crate::Piece).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The FEN string does not have exactly 6 whitespace-separated fields.
    #[error("expected 6 FEN fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },

    /// The piece placement does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },

    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index (0 = rank 8).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },

    /// A character that is neither a piece letter nor a digit 1–8.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },

    /// A piece token that is not a single character.
    #[error("invalid piece: \"{found}\"")]
    InvalidPiece {
        /// The rejected token.
        found: String,
    },

    /// The active color field is not `w` or `b`.
    #[error("invalid active color: \"{found}\"")]
    InvalidColor {
        /// The invalid color string.
        found: String,
    },

    /// The castling field is not `-` or 1–4 distinct letters from `KQkq`.
    #[error("invalid castling availability: \"{found}\"")]
    InvalidCastling {
        /// The invalid castling string.
        found: String,
    },

    /// The en passant field is not `-` or a square on rank 3 or 6.
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant {
        /// The invalid en passant string.
        found: String,
    },

    /// A move counter is not a non-negative integer.
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter {
        /// Either "halfmove clock" or "fullmove number".
        field: &'static str,
        /// The invalid string.
        found: String,
    },

    /// A string that does not name one of the 64 squares.
    #[error("invalid square: \"{found}\"")]
    InvalidSquare {
        /// The rejected string.
        found: String,
    },
}
