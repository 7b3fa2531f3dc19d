//! Screen-space rectangles reported by the layout collaborator.

/// Where a rendered component sits on screen, in pixels.
///
/// The mapper never measures anything itself; callers re-supply the layout
/// after each mount, rotation or resize.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoardLayout {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoardLayout {
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> BoardLayout {
        BoardLayout {
            x,
            y,
            width,
            height,
        }
    }
}
