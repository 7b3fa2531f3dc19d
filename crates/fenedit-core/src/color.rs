//! Side colors and the active-color FEN field.

use std::fmt;

/// The side a piece belongs to, and the side to move in a FEN string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    /// Both colors, White first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Parse the active-color field. Only the exact tokens `w` and `b` are accepted.
    pub fn from_fen_token(token: &str) -> Option<Color> {
        match token {
            "w" => Some(Color::White),
            "b" => Some(Color::Black),
            _ => None,
        }
    }

    /// The single-character token written to the active-color field.
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn tokens_are_case_sensitive() {
        assert_eq!(Color::from_fen_token("w"), Some(Color::White));
        assert_eq!(Color::from_fen_token("b"), Some(Color::Black));
        assert_eq!(Color::from_fen_token("W"), None);
        assert_eq!(Color::from_fen_token("B"), None);
        assert_eq!(Color::from_fen_token(""), None);
        assert_eq!(Color::from_fen_token("wb"), None);
    }

    #[test]
    fn display_matches_token() {
        for color in Color::ALL {
            let text = format!("{color}");
            assert_eq!(Color::from_fen_token(&text), Some(color));
        }
    }

    #[test]
    fn default_is_white() {
        assert_eq!(Color::default(), Color::White);
    }
}
