//! Host surface owning the root grid.

use crate::grid::Grid;
use tracing::debug;
use wordgrid_core::{Measure, Proposal, Rect, Size};

/// Owns a root [`Grid`] and relays it out when its bounds change.
///
/// Visibility, margin and sizing changes made through [`Surface::root_mut`]
/// mark the tree dirty; the next [`Surface::resize`] or
/// [`Surface::layout_if_needed`] runs a full pass.
#[derive(Debug)]
pub struct Surface {
    root: Grid,
    bounds: Option<Rect>,
    dirty: bool,
    passes: u64,
}

impl Surface {
    /// Create a surface that has not been laid out yet.
    #[must_use]
    pub const fn new(root: Grid) -> Self {
        Self {
            root,
            bounds: None,
            dirty: true,
            passes: 0,
        }
    }

    /// Apply new host bounds.
    ///
    /// Returns `true` when a layout pass ran.
    pub fn resize(&mut self, bounds: Rect) -> bool {
        if self.bounds != Some(bounds) {
            self.bounds = Some(bounds);
            self.dirty = true;
        }
        self.layout_if_needed()
    }

    /// Mark the tree as needing a layout pass.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Check if a layout pass is pending.
    #[must_use]
    pub const fn needs_layout(&self) -> bool {
        self.dirty
    }

    /// Run a pending layout pass.
    ///
    /// Nothing happens before the first [`Surface::resize`], since there are
    /// no bounds to lay out against.
    pub fn layout_if_needed(&mut self) -> bool {
        let Some(bounds) = self.bounds else {
            return false;
        };
        if !self.dirty {
            return false;
        }

        self.root.relayout(bounds);
        self.dirty = false;
        self.passes += 1;
        debug!(
            passes = self.passes,
            width = bounds.width,
            height = bounds.height,
            "surface laid out"
        );
        true
    }

    /// Current host bounds, if any.
    #[must_use]
    pub const fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// The root grid.
    #[must_use]
    pub const fn root(&self) -> &Grid {
        &self.root
    }

    /// The root grid, mutably. Marks the tree dirty.
    pub fn root_mut(&mut self) -> &mut Grid {
        self.dirty = true;
        &mut self.root
    }

    /// Number of layout passes run so far.
    #[must_use]
    pub const fn passes(&self) -> u64 {
        self.passes
    }

    /// Natural size of the root grid within `proposal`.
    #[must_use]
    pub fn fit_size(&self, proposal: Proposal) -> Size {
        self.root.measure(proposal)
    }
}
