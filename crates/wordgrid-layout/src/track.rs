//! Track descriptors and per-track layout state.

use serde::{Deserialize, Serialize};
use wordgrid_core::{Element, Insets, Rect};

/// How a track claims space along the grid's main axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TrackSize {
    /// Constant extent, margins included
    Fixed(f32),
    /// Weighted share of what fixed and auto tracks leave over
    Proportional(f32),
    /// Natural size of the element plus margins, optionally capped
    Auto {
        /// Upper bound on the element's extent
        max: Option<f32>,
    },
}

impl Default for TrackSize {
    fn default() -> Self {
        Self::Proportional(1.0)
    }
}

impl TrackSize {
    /// Content-sized track without a cap.
    pub const AUTO: Self = Self::Auto { max: None };

    /// Create a fixed size.
    #[must_use]
    pub const fn fixed(value: f32) -> Self {
        Self::Fixed(value)
    }

    /// Create a proportional weight.
    #[must_use]
    pub const fn proportional(weight: f32) -> Self {
        Self::Proportional(weight)
    }

    /// Content-sized track capped at `max`.
    #[must_use]
    pub const fn auto_max(max: f32) -> Self {
        Self::Auto { max: Some(max) }
    }

    /// Check if the track is content-sized.
    #[must_use]
    pub const fn is_auto(&self) -> bool {
        matches!(self, Self::Auto { .. })
    }
}

/// Placement of an element inside the extent available to it.
///
/// "Near" is the left or top edge, "far" the right or bottom edge, depending
/// on the axis the alignment is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Alignment {
    /// Occupy the whole extent
    #[default]
    Fill,
    /// Given size, pinned to the near edge
    FixedNear(f32),
    /// Given size, pinned to the far edge
    FixedFar(f32),
    /// Natural size, pinned to the near edge
    AutoNear,
    /// Natural size, pinned to the far edge
    AutoFar,
}

impl Alignment {
    /// Check if the element's natural size is needed to resolve this alignment.
    #[must_use]
    pub const fn is_auto(&self) -> bool {
        matches!(self, Self::AutoNear | Self::AutoFar)
    }
}

/// One slot along a grid's main axis.
///
/// # Examples
///
/// ```
/// use wordgrid_core::{Block, Insets, Size};
/// use wordgrid_layout::{Alignment, Track, TrackSize};
///
/// let track = Track::fixed(48.0, Block::new(Size::new(20.0, 20.0)))
///     .margin(Insets::uniform(4.0))
///     .cross(Alignment::AutoNear);
///
/// assert_eq!(track.size(), TrackSize::Fixed(48.0));
/// assert_eq!(track.cross_alignment(), Alignment::AutoNear);
/// ```
#[derive(Debug)]
pub struct Track {
    size: TrackSize,
    element: Element,
    cross: Alignment,
    main: Alignment,
    margin: Insets,
}

impl Track {
    /// Create a track with the given sizing mode.
    pub fn new(size: TrackSize, element: impl Into<Element>) -> Self {
        Self {
            size,
            element: element.into(),
            cross: Alignment::Fill,
            main: Alignment::Fill,
            margin: Insets::ZERO,
        }
    }

    /// A fixed-size track.
    pub fn fixed(value: f32, element: impl Into<Element>) -> Self {
        Self::new(TrackSize::Fixed(value), element)
    }

    /// A proportional track.
    pub fn proportional(weight: f32, element: impl Into<Element>) -> Self {
        Self::new(TrackSize::Proportional(weight), element)
    }

    /// A content-sized track.
    pub fn auto(element: impl Into<Element>) -> Self {
        Self::new(TrackSize::AUTO, element)
    }

    /// A content-sized track capped at `max`.
    pub fn auto_max(max: f32, element: impl Into<Element>) -> Self {
        Self::new(TrackSize::auto_max(max), element)
    }

    /// Set the cross-axis alignment.
    #[must_use]
    pub const fn cross(mut self, alignment: Alignment) -> Self {
        self.cross = alignment;
        self
    }

    /// Set the alignment of the element inside its track along the main axis.
    #[must_use]
    pub const fn main(mut self, alignment: Alignment) -> Self {
        self.main = alignment;
        self
    }

    /// Set the margin.
    #[must_use]
    pub const fn margin(mut self, margin: Insets) -> Self {
        self.margin = margin;
        self
    }

    /// Sizing mode.
    #[must_use]
    pub const fn size(&self) -> TrackSize {
        self.size
    }

    /// Cross-axis alignment.
    #[must_use]
    pub const fn cross_alignment(&self) -> Alignment {
        self.cross
    }

    /// Main-axis alignment inside the track.
    #[must_use]
    pub const fn main_alignment(&self) -> Alignment {
        self.main
    }

    /// Margin around the element.
    #[must_use]
    pub const fn margins(&self) -> Insets {
        self.margin
    }

    /// The owned element.
    #[must_use]
    pub const fn element(&self) -> &Element {
        &self.element
    }

    /// The owned element, mutably.
    pub fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    /// Change the sizing mode. Takes effect on the next relayout.
    pub fn set_size(&mut self, size: TrackSize) {
        self.size = size;
    }

    /// Change the margin. Takes effect on the next relayout.
    pub fn set_margin(&mut self, margin: Insets) {
        self.margin = margin;
    }

    /// Change the cross-axis alignment. Takes effect on the next relayout.
    pub fn set_cross(&mut self, alignment: Alignment) {
        self.cross = alignment;
    }

    /// Whether the track currently takes no space at all.
    ///
    /// Only content-sized tracks collapse when their element is hidden;
    /// fixed and proportional tracks keep their slot.
    pub fn is_collapsed(&self) -> bool {
        self.size.is_auto() && self.element.is_hidden()
    }
}

/// Layout state of one track, recomputed on every pass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackState {
    /// Element extent along the main axis
    pub main_size: f32,
    /// Leftover space around the element on each side
    pub spacing: Insets,
    /// Rectangle applied to the element
    pub frame: Rect,
    /// Whether the track took no space in the last pass
    pub collapsed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordgrid_core::{Block, Size};

    #[test]
    fn test_track_size_default() {
        assert_eq!(TrackSize::default(), TrackSize::Proportional(1.0));
    }

    #[test]
    fn test_track_size_constructors() {
        assert_eq!(TrackSize::fixed(10.0), TrackSize::Fixed(10.0));
        assert_eq!(TrackSize::proportional(2.0), TrackSize::Proportional(2.0));
        assert_eq!(TrackSize::auto_max(5.0), TrackSize::Auto { max: Some(5.0) });
        assert!(TrackSize::AUTO.is_auto());
        assert!(!TrackSize::fixed(1.0).is_auto());
    }

    #[test]
    fn test_alignment_default_is_fill() {
        assert_eq!(Alignment::default(), Alignment::Fill);
        assert!(Alignment::AutoFar.is_auto());
        assert!(!Alignment::FixedNear(3.0).is_auto());
    }

    #[test]
    fn test_track_builder() {
        let track = Track::auto_max(30.0, Block::new(Size::new(10.0, 10.0)))
            .margin(Insets::uniform(2.0))
            .cross(Alignment::FixedFar(8.0))
            .main(Alignment::AutoNear);

        assert_eq!(track.size(), TrackSize::Auto { max: Some(30.0) });
        assert_eq!(track.margins(), Insets::uniform(2.0));
        assert_eq!(track.cross_alignment(), Alignment::FixedFar(8.0));
        assert_eq!(track.main_alignment(), Alignment::AutoNear);
    }

    #[test]
    fn test_only_hidden_auto_tracks_collapse() {
        let mut auto = Track::auto(Block::new(Size::new(10.0, 10.0)));
        let mut fixed = Track::fixed(10.0, Block::new(Size::new(10.0, 10.0)));
        assert!(!auto.is_collapsed());

        auto.element_mut().set_hidden(true);
        fixed.element_mut().set_hidden(true);
        assert!(auto.is_collapsed());
        assert!(!fixed.is_collapsed());
    }

    #[test]
    fn test_track_setters() {
        let mut track = Track::fixed(10.0, Block::opaque());
        track.set_size(TrackSize::Proportional(3.0));
        track.set_margin(Insets::symmetric(1.0, 2.0));
        track.set_cross(Alignment::AutoFar);
        assert_eq!(track.size(), TrackSize::Proportional(3.0));
        assert_eq!(track.margins().vertical(), 4.0);
        assert_eq!(track.cross_alignment(), Alignment::AutoFar);
    }
}
