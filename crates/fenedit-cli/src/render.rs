//! Named piece renderers used by `display`.

use std::collections::HashMap;
use std::fmt;

use fenedit_core::{BoardState, Color, Coords, Piece, PieceKind, col_to_file, row_to_rank};

/// Turns one piece into the text drawn in its square.
pub type RenderFn = Box<dyn Fn(Piece) -> String + Send + Sync>;

/// A set of piece renderers, looked up by name.
///
/// Each editor owns its own registry; nothing is global.
#[derive(Default)]
pub struct RendererRegistry {
    renderers: HashMap<String, RenderFn>,
}

impl RendererRegistry {
    /// Create an empty registry.
    pub fn new() -> RendererRegistry {
        RendererRegistry::default()
    }

    /// Create a registry holding the built-in `ascii` and `unicode` sets.
    pub fn with_defaults() -> RendererRegistry {
        let mut registry = RendererRegistry::new();
        registry.register("ascii", |piece: Piece| piece.fen_char().to_string());
        registry.register("unicode", |piece: Piece| unicode_glyph(piece).to_string());
        registry
    }

    /// Register a renderer, replacing any existing one with the same name.
    pub fn register<F>(&mut self, name: &str, render: F)
    where
        F: Fn(Piece) -> String + Send + Sync + 'static,
    {
        self.renderers.insert(name.to_string(), Box::new(render));
    }

    pub fn get(&self, name: &str) -> Option<&RenderFn> {
        self.renderers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.renderers.contains_key(name)
    }

    /// Remove a renderer. Returns `true` if it was registered.
    pub fn remove(&mut self, name: &str) -> bool {
        self.renderers.remove(name).is_some()
    }

    pub fn clear(&mut self) {
        self.renderers.clear();
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Draw a board as a labelled 8x8 grid, White at the bottom unless `flipped`.
    ///
    /// Returns `None` if no renderer is registered under `name`.
    pub fn render_board(&self, name: &str, board: &BoardState, flipped: bool) -> Option<String> {
        let grid = RenderedBoard {
            board,
            render: self.get(name)?,
            flipped,
        };
        Some(grid.to_string())
    }
}

/// A board drawn through one renderer, for formatting.
struct RenderedBoard<'a> {
    board: &'a BoardState,
    render: &'a RenderFn,
    flipped: bool,
}

impl RenderedBoard<'_> {
    /// Board index shown at display position `n`.
    fn oriented(&self, n: usize) -> usize {
        if self.flipped { 7 - n } else { n }
    }
}

impl fmt::Display for RenderedBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for display_row in 0..8 {
            let row = self.oriented(display_row);
            write!(f, "{}  ", row_to_rank(row))?;
            for display_col in 0..8 {
                match self.board.get(Coords::new(row, self.oriented(display_col))) {
                    Some(piece) => f.write_str(&(self.render)(piece))?,
                    None => f.write_str(".")?,
                }
                if display_col < 7 {
                    f.write_str(" ")?;
                }
            }
            writeln!(f)?;
        }

        f.write_str("  ")?;
        for display_col in 0..8 {
            write!(f, " {}", col_to_file(self.oriented(display_col)))?;
        }
        Ok(())
    }
}

fn unicode_glyph(piece: Piece) -> char {
    match (piece.color(), piece.kind()) {
        (Color::White, PieceKind::King) => '♔',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::Black, PieceKind::King) => '♚',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Pawn) => '♟',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fenedit_core::{STARTING_FEN, fen_to_board_state, parse_fen};

    fn start_board() -> BoardState {
        fen_to_board_state(&parse_fen(STARTING_FEN).placement)
    }

    #[test]
    fn defaults_are_registered() {
        let registry = RendererRegistry::with_defaults();
        assert_eq!(registry.names(), vec!["ascii", "unicode"]);
        let ascii = registry.get("ascii").unwrap();
        assert_eq!(ascii(Piece::BLACK_KING), "k");
        let unicode = registry.get("unicode").unwrap();
        assert_eq!(unicode(Piece::WHITE_PAWN), "♙");
    }

    #[test]
    fn register_replaces_and_remove_clears() {
        let mut registry = RendererRegistry::new();
        assert!(registry.names().is_empty());

        registry.register("letters", |p: Piece| p.fen_char().to_string());
        registry.register("letters", |p: Piece| format!("[{}]", p.fen_char()));
        assert_eq!(registry.names(), vec!["letters"]);
        assert_eq!(registry.get("letters").unwrap()(Piece::WHITE_KING), "[K]");

        assert!(registry.remove("letters"));
        assert!(!registry.remove("letters"));
        assert!(registry.get("letters").is_none());

        let mut registry = RendererRegistry::with_defaults();
        registry.clear();
        assert!(!registry.contains("ascii"));
    }

    #[test]
    fn ascii_board_matches_pretty_board() {
        let registry = RendererRegistry::with_defaults();
        let board = start_board();
        assert_eq!(
            registry.render_board("ascii", &board, false).unwrap(),
            board.pretty().to_string()
        );
    }

    #[test]
    fn flipped_board_puts_black_at_bottom() {
        let registry = RendererRegistry::with_defaults();
        let grid = registry.render_board("ascii", &start_board(), true).unwrap();
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines[0], "1  R N B K Q B N R");
        assert_eq!(lines[7], "8  r n b k q b n r");
        assert_eq!(lines[8], "   h g f e d c b a");
    }

    #[test]
    fn wide_glyphs_are_written_whole() {
        let mut registry = RendererRegistry::new();
        registry.register("boxed", |p: Piece| format!("[{}]", p.fen_char()));
        let board = fen_to_board_state("8/8/8/8/8/8/8/K6k");
        let grid = registry.render_board("boxed", &board, false).unwrap();
        assert_eq!(grid.lines().nth(7), Some("1  [K] . . . . . . [k]"));
        assert!(grid.ends_with("   a b c d e f g h"));
    }

    #[test]
    fn unknown_renderer_draws_nothing() {
        let registry = RendererRegistry::new();
        assert_eq!(registry.render_board("ascii", &start_board(), false), None);
    }
}
