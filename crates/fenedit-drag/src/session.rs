//! Drag-and-drop sessions: pointer events in, one FEN edit out.
//!
//! Only the end of a drag touches the position. Start and update events
//! are tracked so the caller can draw the piece under the finger.

use tracing::debug;

use fenedit_core::{
    Coords, Piece, Square, coords_to_square, move_piece, square_to_coords, update_piece_at,
};

use crate::drop::{DropConfig, calculate_board_drop_target, calculate_drop_square_with};
use crate::error::GeometryError;
use crate::layout::BoardLayout;

/// Everything needed to map screen points onto the current board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    layout: BoardLayout,
    square_size: f64,
    flipped: bool,
    drop: DropConfig,
}

impl BoardGeometry {
    /// Create geometry with the default border inset.
    pub fn new(
        layout: BoardLayout,
        square_size: f64,
        flipped: bool,
    ) -> Result<BoardGeometry, GeometryError> {
        if !square_size.is_finite() || square_size <= 0.0 {
            return Err(GeometryError::InvalidSquareSize { value: square_size });
        }
        Ok(BoardGeometry {
            layout,
            square_size,
            flipped,
            drop: DropConfig::default(),
        })
    }

    /// Replace the drop configuration.
    pub fn with_drop_config(mut self, drop: DropConfig) -> BoardGeometry {
        self.drop = drop;
        self
    }

    #[inline]
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    #[inline]
    pub fn square_size(&self) -> f64 {
        self.square_size
    }

    #[inline]
    pub fn flipped(&self) -> bool {
        self.flipped
    }

    /// Square under an absolute screen point, if any.
    pub fn square_at(&self, x: f64, y: f64) -> Option<Square> {
        calculate_drop_square_with(&self.drop, x, y, &self.layout, self.square_size, self.flipped)
    }

    /// Display cell of a square: the square's coordinates, mirrored if flipped.
    fn display_cell(&self, square: Square) -> Coords {
        let coords = square_to_coords(square);
        if self.flipped { coords.flipped() } else { coords }
    }

    /// Square shown in a display cell.
    fn square_in_cell(&self, cell: Coords) -> Option<Square> {
        coords_to_square(if self.flipped { cell.flipped() } else { cell })
    }
}

/// Where a dragged piece came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSource {
    /// A piece picked up from a square.
    Board(Square),
    /// A fresh piece taken from the piece bank beside the board.
    Bank(Piece),
}

/// The single edit a finished drag performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropAction {
    /// Bank piece dropped on a square.
    Place(Square, Piece),
    /// Board piece dropped on a square (possibly its own).
    Move(Square, Square),
    /// Board piece dropped off the board.
    Remove(Square),
    /// Bank piece dropped off the board, or no drag in progress.
    Nothing,
}

impl DropAction {
    /// Apply this action to a FEN string.
    pub fn apply(self, fen: &str) -> String {
        match self {
            DropAction::Place(square, piece) => update_piece_at(fen, square, Some(piece)),
            DropAction::Move(from, to) => move_piece(fen, from, to),
            DropAction::Remove(square) => update_piece_at(fen, square, None),
            DropAction::Nothing => fen.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ActiveDrag {
    source: DragSource,
    start: (f64, f64),
    current: (f64, f64),
}

/// State of the drag interaction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging(ActiveDrag),
}

/// Tracks one drag at a time, from pick-up to drop.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    pub fn new() -> DragSession {
        DragSession::default()
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// The source of the drag in progress.
    pub fn source(&self) -> Option<DragSource> {
        match self.state {
            DragState::Dragging(drag) => Some(drag.source),
            DragState::Idle => None,
        }
    }

    /// Most recent pointer position of the drag in progress.
    pub fn position(&self) -> Option<(f64, f64)> {
        match self.state {
            DragState::Dragging(drag) => Some(drag.current),
            DragState::Idle => None,
        }
    }

    /// Pick up a piece at an absolute point, abandoning any earlier drag.
    pub fn start(&mut self, source: DragSource, x: f64, y: f64) {
        debug!(?source, x, y, "drag started");
        self.state = DragState::Dragging(ActiveDrag {
            source,
            start: (x, y),
            current: (x, y),
        });
    }

    /// Record pointer movement. Returns the offset from the start point for
    /// drawing the piece, or `None` when idle.
    pub fn update(&mut self, x: f64, y: f64) -> Option<(f64, f64)> {
        match &mut self.state {
            DragState::Dragging(drag) => {
                drag.current = (x, y);
                Some((x - drag.start.0, y - drag.start.1))
            }
            DragState::Idle => None,
        }
    }

    /// Abandon the drag without editing anything.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Decide what dropping at an absolute point would do, without ending the drag.
    pub fn resolve(&self, x: f64, y: f64, geometry: &BoardGeometry) -> DropAction {
        let DragState::Dragging(drag) = self.state else {
            return DropAction::Nothing;
        };

        match drag.source {
            DragSource::Bank(piece) => match geometry.square_at(x, y) {
                Some(square) => DropAction::Place(square, piece),
                None => DropAction::Nothing,
            },
            DragSource::Board(from) => {
                let size = geometry.square_size();
                let origin = geometry.display_cell(from);
                let left = origin.col as f64 * size + (x - drag.start.0);
                let top = origin.row as f64 * size + (y - drag.start.1);
                let target = calculate_board_drop_target(left, top, size)
                    .and_then(|cell| geometry.square_in_cell(cell));
                match target {
                    Some(to) => DropAction::Move(from, to),
                    None => DropAction::Remove(from),
                }
            }
        }
    }

    /// Drop at an absolute point and return the edited FEN.
    pub fn end(&mut self, fen: &str, x: f64, y: f64, geometry: &BoardGeometry) -> String {
        let action = self.resolve(x, y, geometry);
        self.state = DragState::Idle;
        debug!(?action, x, y, "drag ended");
        action.apply(fen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fenedit_core::{STARTING_FEN, get_piece_at};

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn geometry(flipped: bool) -> BoardGeometry {
        BoardGeometry::new(BoardLayout::new(0.0, 0.0, 404.0, 404.0), 50.0, flipped).unwrap()
    }

    #[test]
    fn bank_drop_places_piece() {
        let mut session = DragSession::new();
        session.start(DragSource::Bank(Piece::from_fen_char('Q').unwrap()), 500.0, 500.0);
        assert!(session.is_dragging());
        let fen = session.end("8/8/8/8/8/8/8/8 w - - 0 1", 2.0, 352.0, &geometry(false));
        assert_eq!(fen, "8/8/8/8/8/8/8/Q7 w - - 0 1");
        assert!(!session.is_dragging());
    }

    #[test]
    fn bank_drop_outside_changes_nothing() {
        let mut session = DragSession::new();
        session.start(DragSource::Bank(Piece::BLACK_KING), 500.0, 500.0);
        assert_eq!(session.end(STARTING_FEN, 0.0, 200.0, &geometry(false)), STARTING_FEN);
    }

    #[test]
    fn board_drag_moves_piece() {
        // e2 pawn: display cell (6, 4). Drag two squares up.
        let mut session = DragSession::new();
        session.start(DragSource::Board(sq("e2")), 227.0, 327.0);
        assert_eq!(session.update(227.0, 250.0), Some((0.0, -77.0)));
        assert_eq!(session.position(), Some((227.0, 250.0)));
        let fen = session.end(STARTING_FEN, 227.0, 227.0, &geometry(false));
        assert_eq!(fen, "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 1");
    }

    #[test]
    fn board_drag_on_flipped_board() {
        // Flipped: e2 shows at display cell (1, 3). Moving down two rows reaches e4.
        let mut session = DragSession::new();
        session.start(DragSource::Board(sq("e2")), 177.0, 77.0);
        let fen = session.end(STARTING_FEN, 177.0, 177.0, &geometry(true));
        assert_eq!(get_piece_at(&fen, sq("e4")), Piece::from_fen_char('P'));
        assert_eq!(get_piece_at(&fen, sq("e2")), None);
    }

    #[test]
    fn board_drag_off_board_removes_piece() {
        let mut session = DragSession::new();
        session.start(DragSource::Board(sq("a1")), 27.0, 377.0);
        let fen = session.end(STARTING_FEN, 27.0, 600.0, &geometry(false));
        assert_eq!(fen, "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/1NBQKBNR w KQkq - 0 1");
    }

    #[test]
    fn small_wobble_keeps_square() {
        let mut session = DragSession::new();
        session.start(DragSource::Board(sq("g1")), 327.0, 377.0);
        assert_eq!(
            session.resolve(340.0, 365.0, &geometry(false)),
            DropAction::Move(sq("g1"), sq("g1"))
        );
        assert_eq!(session.end(STARTING_FEN, 340.0, 365.0, &geometry(false)), STARTING_FEN);
    }

    #[test]
    fn idle_session_does_nothing() {
        let mut session = DragSession::new();
        assert_eq!(session.update(1.0, 1.0), None);
        assert_eq!(session.end(STARTING_FEN, 2.0, 352.0, &geometry(false)), STARTING_FEN);

        session.start(DragSource::Board(sq("e2")), 0.0, 0.0);
        session.cancel();
        assert_eq!(session.source(), None);
        assert_eq!(session.resolve(0.0, 0.0, &geometry(false)), DropAction::Nothing);
    }

    #[test]
    fn geometry_rejects_bad_square_size() {
        let layout = BoardLayout::new(0.0, 0.0, 404.0, 404.0);
        assert!(BoardGeometry::new(layout, 0.0, false).is_err());
        assert!(BoardGeometry::new(layout, -5.0, false).is_err());
        assert!(BoardGeometry::new(layout, f64::NAN, false).is_err());
    }
}
