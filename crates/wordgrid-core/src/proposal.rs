//! Size proposals passed to elements when they are measured.

use crate::geometry::{Axis, Size};
use serde::{Deserialize, Serialize};

/// Upper bounds offered to an element when asking for its natural size.
///
/// `None` on an axis means the element may grow freely along it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Proposal {
    /// Maximum width, if bounded
    pub max_width: Option<f32>,
    /// Maximum height, if bounded
    pub max_height: Option<f32>,
}

impl Proposal {
    /// Create a new proposal.
    #[must_use]
    pub const fn new(max_width: Option<f32>, max_height: Option<f32>) -> Self {
        Self {
            max_width,
            max_height,
        }
    }

    /// No bound on either axis.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(None, None)
    }

    /// Bounded on both axes.
    #[must_use]
    pub const fn bounded(size: Size) -> Self {
        Self::new(Some(size.width), Some(size.height))
    }

    /// Build a proposal from bounds along `axis` and its cross axis.
    #[must_use]
    pub const fn from_axes(axis: Axis, main: Option<f32>, cross: Option<f32>) -> Self {
        match axis {
            Axis::Horizontal => Self::new(main, cross),
            Axis::Vertical => Self::new(cross, main),
        }
    }

    /// The bound along `axis`.
    #[must_use]
    pub const fn max_along(&self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::Horizontal => self.max_width,
            Axis::Vertical => self.max_height,
        }
    }

    /// Check if both dimensions are bounded.
    #[must_use]
    pub const fn is_bounded(&self) -> bool {
        self.max_width.is_some() && self.max_height.is_some()
    }

    /// Clamp a size so it does not exceed either bound.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            self.max_width.map_or(size.width, |w| size.width.min(w)),
            self.max_height.map_or(size.height, |h| size.height.min(h)),
        )
        .non_negative()
    }
}
