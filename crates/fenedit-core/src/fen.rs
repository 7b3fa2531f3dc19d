//! FEN strings split into their six fields and joined back together.

use std::fmt;

use tracing::trace;

use crate::color::Color;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// An empty board, White to move, no castling or en passant.
pub const EMPTY_FEN: &str = "8/8/8/8/8/8/8/8 w - - 0 1";

/// The six fields of a FEN string.
///
/// Parsing never fails: missing fields take their defaults and an
/// unparseable move counter becomes `None`, which serializes as `NaN` so the
/// structural validator still rejects the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenComponents {
    /// Field 1, the `/`-separated ranks, rank 8 first.
    pub placement: String,
    /// Field 2.
    pub active_color: Color,
    /// Field 3, kept verbatim.
    pub castling: String,
    /// Field 4, kept verbatim.
    pub en_passant: String,
    /// Field 5, `None` when not a non-negative integer.
    pub halfmove: Option<u32>,
    /// Field 6, `None` when not a non-negative integer.
    pub fullmove: Option<u32>,
}

impl Default for FenComponents {
    fn default() -> Self {
        FenComponents {
            placement: String::new(),
            active_color: Color::White,
            castling: "-".to_string(),
            en_passant: "-".to_string(),
            halfmove: Some(0),
            fullmove: Some(1),
        }
    }
}

impl FenComponents {
    /// Split a FEN string on runs of whitespace.
    ///
    /// Leading, trailing and repeated separators (spaces, tabs, newlines) are
    /// dropped. Fields beyond the sixth are ignored.
    pub fn parse(fen: &str) -> FenComponents {
        let mut fields = fen.split_whitespace();
        let defaults = FenComponents::default();

        let placement = fields.next().unwrap_or_default().to_string();
        let active_color = match fields.next() {
            Some(token) => Color::from_fen_token(token).unwrap_or_else(|| {
                trace!(token, "unrecognized active color, reading as white");
                Color::White
            }),
            None => defaults.active_color,
        };
        let castling = fields.next().map_or(defaults.castling, str::to_string);
        let en_passant = fields.next().map_or(defaults.en_passant, str::to_string);
        let halfmove = fields.next().map_or(defaults.halfmove, parse_counter);
        let fullmove = fields.next().map_or(defaults.fullmove, parse_counter);

        FenComponents {
            placement,
            active_color,
            castling,
            en_passant,
            halfmove,
            fullmove,
        }
    }
}

fn parse_counter(token: &str) -> Option<u32> {
    let value = token.parse().ok();
    if value.is_none() {
        trace!(token, "move counter is not a number");
    }
    value
}

struct Counter(Option<u32>);

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(n) => write!(f, "{n}"),
            None => write!(f, "NaN"),
        }
    }
}

impl fmt::Display for FenComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.placement,
            self.active_color,
            self.castling,
            self.en_passant,
            Counter(self.halfmove),
            Counter(self.fullmove),
        )
    }
}

/// Split a FEN string into its fields. See [`FenComponents::parse`].
pub fn parse_fen(fen: &str) -> FenComponents {
    FenComponents::parse(fen)
}

/// Join fields with single spaces.
pub fn components_to_fen(components: &FenComponents) -> String {
    components.to_string()
}
