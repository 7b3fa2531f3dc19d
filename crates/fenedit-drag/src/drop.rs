//! Mapping pointer positions onto board squares.
//!
//! There are two mappers with different input conventions:
//!
//! | Function | Input point | Origin | Border inset | Flip |
//! |----------|-------------|--------|--------------|------|
//! | [`calculate_drop_square`] | raw touch point | screen | yes | yes |
//! | [`calculate_board_drop_target`] | dragged piece's top-left | inner board | no | caller |
//!
//! Bank-to-board drops use the first; drags that start on the board use the
//! second, since the dragged piece rather than the finger decides the target.

use tracing::trace;

use fenedit_core::{Coords, Square, coords_to_square};

use crate::error::GeometryError;
use crate::layout::BoardLayout;

/// Border drawn around the rendered board, in pixels, on every side.
pub const DEFAULT_BORDER_INSET: f64 = 2.0;

/// Tunables for absolute-point mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropConfig {
    border_inset: f64,
}

impl DropConfig {
    /// Create a config, rejecting a negative or non-finite inset.
    pub fn new(border_inset: f64) -> Result<DropConfig, GeometryError> {
        if !border_inset.is_finite() || border_inset < 0.0 {
            return Err(GeometryError::InvalidBorderInset {
                value: border_inset,
            });
        }
        Ok(DropConfig { border_inset })
    }

    #[inline]
    pub fn border_inset(&self) -> f64 {
        self.border_inset
    }
}

impl Default for DropConfig {
    fn default() -> Self {
        DropConfig {
            border_inset: DEFAULT_BORDER_INSET,
        }
    }
}

/// Square under an absolute screen point, with the default 2px border.
///
/// See [`calculate_drop_square_with`].
pub fn calculate_drop_square(
    drop_x: f64,
    drop_y: f64,
    layout: &BoardLayout,
    square_size: f64,
    flipped: bool,
) -> Option<Square> {
    calculate_drop_square_with(&DropConfig::default(), drop_x, drop_y, layout, square_size, flipped)
}

/// Square under an absolute screen point.
///
/// The point is made relative to the inner board, the rectangle left after
/// removing the border from each side of `layout`. Each axis is half-open,
/// `[0, inner)`, so a point exactly on the border or on the far edge is off
/// the board. When `flipped`, row and column are mirrored before naming the
/// square.
pub fn calculate_drop_square_with(
    config: &DropConfig,
    drop_x: f64,
    drop_y: f64,
    layout: &BoardLayout,
    square_size: f64,
    flipped: bool,
) -> Option<Square> {
    let inset = config.border_inset;
    let rel_x = drop_x - layout.x - inset;
    let rel_y = drop_y - layout.y - inset;
    let inner_width = layout.width - 2.0 * inset;
    let inner_height = layout.height - 2.0 * inset;

    let inside = (0.0..inner_width).contains(&rel_x) && (0.0..inner_height).contains(&rel_y);
    if !inside || !(square_size > 0.0) {
        trace!(drop_x, drop_y, "drop outside board");
        return None;
    }

    let coords = cell_at(rel_x / square_size, rel_y / square_size)?;
    let coords = if flipped { coords.flipped() } else { coords };
    coords_to_square(coords)
}

/// Cell under a dragged piece, given the piece's board-relative top-left.
///
/// Half a square is added on each axis so the piece's center decides the
/// cell. No layout offset, border or flip is applied: convert to inner-board
/// coordinates and un-flip with [`Coords::flipped`] at the call site.
pub fn calculate_board_drop_target(x: f64, y: f64, square_size: f64) -> Option<Coords> {
    if !(square_size > 0.0) {
        return None;
    }
    let half = square_size / 2.0;
    cell_at((x + half) / square_size, (y + half) / square_size)
}

/// Floor fractional cell units, rejecting anything outside `[0, 8)`.
fn cell_at(col: f64, row: f64) -> Option<Coords> {
    let col = col.floor();
    let row = row.floor();
    if !(0.0..8.0).contains(&col) || !(0.0..8.0).contains(&row) {
        return None;
    }
    Some(Coords::new(row as usize, col as usize))
}
