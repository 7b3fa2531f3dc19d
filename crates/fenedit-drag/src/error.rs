//! Errors from building board geometry.

/// Rejected geometry parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// Square size must be finite and greater than zero.
    #[error("invalid square size: {value}")]
    InvalidSquareSize {
        /// The rejected size.
        value: f64,
    },

    /// Border inset must be finite and not negative.
    #[error("invalid border inset: {value}")]
    InvalidBorderInset {
        /// The rejected inset.
        value: f64,
    },
}
