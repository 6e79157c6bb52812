//! Loading overlay shown while a request is in flight.

use std::cell::Cell;
use std::rc::Rc;
use wordgrid_core::{Element, Leaf, Measure, Proposal, Rect, Size};

/// Shared show/hide handle.
///
/// Clones share state, so a screen model can keep one handle while another
/// sits in a grid track; the track collapses whenever the overlay is hidden.
///
/// # Examples
///
/// ```
/// use wordgrid_app::LoadingOverlay;
///
/// let overlay = LoadingOverlay::new();
/// let in_grid = overlay.clone();
///
/// overlay.show();
/// assert!(in_grid.is_visible());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LoadingOverlay {
    visible: Rc<Cell<bool>>,
    frame: Rect,
}

impl LoadingOverlay {
    /// Side of the activity indicator, which is all the overlay asks for
    /// when sized by content.
    pub const INDICATOR_SIZE: f32 = 37.0;

    /// Create a hidden overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the overlay visible.
    ///
    /// Grids holding a clone pick this up on their next layout pass; the
    /// hosting surface has to be invalidated for one to run.
    pub fn show(&self) {
        self.visible.set(true);
    }

    /// Hide the overlay, collapsing its track on the next layout pass.
    pub fn hide(&self) {
        self.visible.set(false);
    }

    /// Check if the overlay is showing.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }
}

impl Measure for LoadingOverlay {
    fn measure(&self, proposal: Proposal) -> Size {
        proposal.constrain(Size::new(Self::INDICATOR_SIZE, Self::INDICATOR_SIZE))
    }

    fn is_hidden(&self) -> bool {
        !self.visible.get()
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.visible.set(!hidden);
    }
}

impl Leaf for LoadingOverlay {
    fn place(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn frame(&self) -> Rect {
        self.frame
    }
}

impl From<LoadingOverlay> for Element {
    fn from(overlay: LoadingOverlay) -> Self {
        Self::leaf(overlay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordgrid_core::Block;
    use wordgrid_layout::{Grid, Track};

    #[test]
    fn test_clones_share_visibility() {
        let overlay = LoadingOverlay::new();
        let other = overlay.clone();
        assert!(!other.is_visible());

        overlay.show();
        assert!(other.is_visible());
        other.hide();
        assert!(!overlay.is_visible());
    }

    #[test]
    fn test_hidden_flag_mirrors_handle() {
        let mut overlay = LoadingOverlay::new();
        assert!(overlay.is_hidden());
        overlay.set_hidden(false);
        assert!(overlay.is_visible());
    }

    #[test]
    fn test_overlay_track_collapses_when_hidden() {
        let overlay = LoadingOverlay::new();
        let mut grid = Grid::column(vec![
            Track::auto_max(60.0, overlay.clone()),
            Track::proportional(1.0, Block::opaque()),
        ])
        .unwrap();
        let bounds = Rect::new(0.0, 0.0, 100.0, 300.0);

        grid.relayout(bounds);
        assert_eq!(grid.frame(1).map(|f| f.y), Some(0.0));

        overlay.show();
        grid.relayout(bounds);
        let indicator = LoadingOverlay::INDICATOR_SIZE;
        assert_eq!(grid.frame(0).map(|f| f.height), Some(indicator));
        assert_eq!(grid.frame(1).map(|f| f.y), Some(indicator));
    }
}
