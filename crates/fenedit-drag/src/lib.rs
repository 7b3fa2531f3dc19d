//! Pointer geometry for the board editor: screen points to squares, and
//! drag sessions that turn a drop into a single FEN edit.

pub mod drop;
pub mod error;
pub mod layout;
pub mod session;

pub use drop::{
    DEFAULT_BORDER_INSET, DropConfig, calculate_board_drop_target, calculate_drop_square,
    calculate_drop_square_with,
};
pub use error::GeometryError;
pub use layout::BoardLayout;
pub use session::{BoardGeometry, DragSession, DragSource, DropAction};
