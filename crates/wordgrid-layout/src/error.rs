//! Error types for grid construction.

use thiserror::Error;
use wordgrid_core::Axis;

/// Errors raised when building a grid.
///
/// Everything past construction (zero bounds, hidden children, zero weights)
/// is a numeric degenerate case that resolves to zero-sized geometry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A grid needs at least one track to anchor its layout on.
    #[error("a {axis:?} grid needs at least one track")]
    EmptyGrid {
        /// Main axis of the rejected grid
        axis: Axis,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_error_display() {
        let err = LayoutError::EmptyGrid {
            axis: Axis::Horizontal,
        };
        assert_eq!(err.to_string(), "a Horizontal grid needs at least one track");
    }
}
