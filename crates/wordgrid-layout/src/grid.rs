//! Row and column grids.
//!
//! A grid lays its tracks out one after another along its main axis and
//! aligns each of them independently across the full cross extent. Fixed and
//! content-sized tracks are resolved first; proportional tracks share what is
//! left by weight.

use crate::error::LayoutError;
use crate::solve::{align, proportional_share, star_multiplier, Span};
use crate::track::{Alignment, Track, TrackSize, TrackState};
use std::any::Any;
use tracing::{debug, trace};
use wordgrid_core::{Axis, Container, Element, Insets, Measure, Proposal, Rect, Size};

/// An ordered run of tracks along one axis.
///
/// # Examples
///
/// ```
/// use wordgrid_core::{Block, Rect};
/// use wordgrid_layout::{Grid, Track};
///
/// let mut grid = Grid::row(vec![
///     Track::fixed(50.0, Block::opaque()),
///     Track::fixed(30.0, Block::opaque()),
/// ])
/// .unwrap();
///
/// grid.relayout(Rect::new(0.0, 0.0, 100.0, 40.0));
/// assert_eq!(grid.frame(1), Some(Rect::new(50.0, 0.0, 30.0, 40.0)));
/// ```
#[derive(Debug)]
pub struct Grid {
    axis: Axis,
    tracks: Vec<Track>,
    states: Vec<TrackState>,
    bounds: Rect,
    used_main: f32,
    hidden: bool,
}

impl Grid {
    /// Create a grid packing `tracks` along `axis`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::EmptyGrid`] when `tracks` is empty.
    pub fn new(axis: Axis, tracks: Vec<Track>) -> Result<Self, LayoutError> {
        if tracks.is_empty() {
            return Err(LayoutError::EmptyGrid { axis });
        }
        let states = vec![TrackState::default(); tracks.len()];
        Ok(Self {
            axis,
            tracks,
            states,
            bounds: Rect::default(),
            used_main: 0.0,
            hidden: false,
        })
    }

    /// Create a grid whose tracks run left to right.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::EmptyGrid`] when `tracks` is empty.
    pub fn row(tracks: Vec<Track>) -> Result<Self, LayoutError> {
        Self::new(Axis::Horizontal, tracks)
    }

    /// Create a grid whose tracks run top to bottom.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::EmptyGrid`] when `tracks` is empty.
    pub fn column(tracks: Vec<Track>) -> Result<Self, LayoutError> {
        Self::new(Axis::Vertical, tracks)
    }

    /// Main axis.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Number of tracks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Always false for a constructed grid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// All tracks in order.
    #[must_use]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Track at `index`.
    #[must_use]
    pub fn track(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Track at `index`, mutably. Changes apply on the next relayout.
    pub fn track_mut(&mut self, index: usize) -> Option<&mut Track> {
        self.tracks.get_mut(index)
    }

    /// Layout state of the track at `index`.
    #[must_use]
    pub fn state(&self, index: usize) -> Option<&TrackState> {
        self.states.get(index)
    }

    /// Layout state of every track.
    #[must_use]
    pub fn states(&self) -> &[TrackState] {
        &self.states
    }

    /// Frame assigned to the track at `index` by the last relayout.
    #[must_use]
    pub fn frame(&self, index: usize) -> Option<Rect> {
        self.states.get(index).map(|s| s.frame)
    }

    /// Frames of every track, in order.
    #[must_use]
    pub fn frames(&self) -> Vec<Rect> {
        self.states.iter().map(|s| s.frame).collect()
    }

    /// Element of the track at `index`.
    #[must_use]
    pub fn element(&self, index: usize) -> Option<&Element> {
        self.tracks.get(index).map(Track::element)
    }

    /// Element of the track at `index`, mutably.
    pub fn element_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.tracks.get_mut(index).map(Track::element_mut)
    }

    /// Grid nested in the track at `index`.
    #[must_use]
    pub fn nested(&self, index: usize) -> Option<&Self> {
        self.element(index).and_then(Element::downcast_ref::<Self>)
    }

    /// Grid nested in the track at `index`, mutably.
    pub fn nested_mut(&mut self, index: usize) -> Option<&mut Self> {
        self.element_mut(index).and_then(Element::downcast_mut::<Self>)
    }

    /// Show or hide the element at `index`.
    ///
    /// Returns `false` when there is no such track. The change applies on
    /// the next relayout.
    pub fn set_hidden(&mut self, index: usize, hidden: bool) -> bool {
        match self.tracks.get_mut(index) {
            Some(track) => {
                track.element_mut().set_hidden(hidden);
                true
            }
            None => false,
        }
    }

    /// Bounds passed to the last relayout.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Distance along the main axis from the leading edge to the end of the
    /// last track, including its trailing margin and spacing.
    #[must_use]
    pub const fn used_main_extent(&self) -> f32 {
        self.used_main
    }

    /// Natural main extent of an auto track's element, clipped to its cap.
    fn auto_natural(&self, track: &Track, cross_available: f32, max: Option<f32>) -> f32 {
        let proposal = Proposal::from_axes(self.axis, None, Some(cross_available));
        let natural = track.element().measure(proposal).along(self.axis);
        max.map_or(natural, |cap| natural.min(cap)).max(0.0)
    }

    /// Solve every track against `bounds` and place the elements.
    ///
    /// Container elements are laid out again inside the frame they receive,
    /// so nested grids are solved top-down. Calling this twice with the same
    /// bounds produces the same frames.
    pub fn relayout(&mut self, bounds: Rect) {
        let axis = self.axis;
        let cross_axis = axis.cross();
        let extent = bounds.extent(axis).max(0.0);
        let cross_extent = bounds.extent(cross_axis).max(0.0);

        debug!(
            axis = ?axis,
            x = bounds.x,
            y = bounds.y,
            width = bounds.width,
            height = bounds.height,
            tracks = self.tracks.len(),
            "grid relayout"
        );

        // Natural sizes of visible auto tracks, measured once per pass.
        let naturals: Vec<Option<f32>> = self
            .tracks
            .iter()
            .map(|track| match track.size() {
                TrackSize::Auto { max } if !track.is_collapsed() => {
                    let cross_available =
                        (cross_extent - track.margins().along(cross_axis)).max(0.0);
                    Some(self.auto_natural(track, cross_available, max))
                }
                _ => None,
            })
            .collect();

        let mut fixed_and_auto = 0.0;
        let mut total_weight = 0.0;
        for (track, natural) in self.tracks.iter().zip(&naturals) {
            match track.size() {
                TrackSize::Fixed(value) => fixed_and_auto += value.max(0.0),
                TrackSize::Proportional(weight) => total_weight += weight.max(0.0),
                TrackSize::Auto { .. } => {
                    if let Some(natural) = natural {
                        fixed_and_auto += natural + track.margins().along(axis);
                    }
                }
            }
        }
        let star = star_multiplier(extent, fixed_and_auto);

        let mut cursor = bounds.start(axis);
        for (index, (track, natural)) in self.tracks.iter_mut().zip(&naturals).enumerate() {
            let margin = track.margins();
            let margins_main = margin.along(axis);

            if track.is_collapsed() {
                let frame = Rect::from_axes(axis, cursor, bounds.start(cross_axis), 0.0, 0.0);
                track.element_mut().place(frame);
                self.states[index] = TrackState {
                    main_size: 0.0,
                    spacing: Insets::ZERO,
                    frame,
                    collapsed: true,
                };
                trace!(index, "collapsed hidden auto track");
                continue;
            }

            let slot = match track.size() {
                TrackSize::Fixed(value) => (value - margins_main).max(0.0),
                TrackSize::Proportional(weight) => {
                    (proportional_share(extent, weight, total_weight, star) - margins_main)
                        .max(0.0)
                }
                TrackSize::Auto { .. } => natural
                    .unwrap_or(0.0)
                    .min((extent - margins_main).max(0.0)),
            };

            let cross_available = (cross_extent - margin.along(cross_axis)).max(0.0);

            let main_alignment = match track.main_alignment() {
                Alignment::FixedNear(size) => Alignment::FixedNear(size.min(slot)),
                Alignment::FixedFar(size) => Alignment::FixedFar(size.min(slot)),
                other => other,
            };
            let element = track.element();
            let main: Span = align(main_alignment, slot, || {
                element
                    .measure(Proposal::from_axes(axis, Some(slot), Some(cross_available)))
                    .along(axis)
            });
            let cross: Span = align(track.cross_alignment(), cross_available, || {
                element
                    .measure(Proposal::from_axes(axis, Some(main.len), Some(cross_available)))
                    .along(cross_axis)
            });

            let mut spacing = Insets::ZERO;
            spacing.set_near(axis, main.lead);
            spacing.set_far(axis, main.trail);
            spacing.set_near(cross_axis, cross.lead);
            spacing.set_far(cross_axis, cross.trail);

            let main_pos = cursor + margin.near(axis) + main.lead;
            let cross_pos = bounds.start(cross_axis) + margin.near(cross_axis) + cross.offset;
            let frame = Rect::from_axes(axis, main_pos, cross_pos, main.len, cross.len);
            cursor = main_pos + main.len + margin.far(axis) + main.trail;

            trace!(
                index,
                slot,
                main_size = main.len,
                cross_size = cross.len,
                "resolved track"
            );

            track.element_mut().place(frame);
            self.states[index] = TrackState {
                main_size: main.len,
                spacing,
                frame,
                collapsed: false,
            };
        }

        self.bounds = bounds;
        self.used_main = cursor - bounds.start(axis);
    }
}

impl Measure for Grid {
    /// Sum of main-axis contributions and the largest cross contribution.
    ///
    /// Fixed tracks contribute their value whether or not the element is
    /// visible; hidden proportional and auto tracks contribute nothing.
    fn measure(&self, proposal: Proposal) -> Size {
        let axis = self.axis;
        let cross_axis = axis.cross();
        let cross_bound = proposal.max_along(cross_axis);

        let mut main = 0.0_f32;
        let mut cross = 0.0_f32;
        for track in &self.tracks {
            let margin = track.margins();
            let hidden = track.element().is_hidden();
            let child_cross = cross_bound.map(|c| (c - margin.along(cross_axis)).max(0.0));

            let natural = match track.size() {
                TrackSize::Fixed(value) => {
                    main += value.max(0.0);
                    if hidden {
                        continue;
                    }
                    let child_main = Some((value - margin.along(axis)).max(0.0));
                    track
                        .element()
                        .measure(Proposal::from_axes(axis, child_main, child_cross))
                }
                TrackSize::Proportional(_) | TrackSize::Auto { .. } => {
                    if hidden {
                        continue;
                    }
                    let natural = track
                        .element()
                        .measure(Proposal::from_axes(axis, None, child_cross));
                    let natural_main = match track.size() {
                        TrackSize::Auto { max: Some(cap) } => natural.along(axis).min(cap),
                        _ => natural.along(axis),
                    };
                    main += natural_main + margin.along(axis);
                    natural
                }
            };
            cross = cross.max(natural.along(cross_axis) + margin.along(cross_axis));
        }

        proposal.constrain(Size::from_axes(axis, main, cross))
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
}

impl Container for Grid {
    fn relayout(&mut self, bounds: Rect) {
        Self::relayout(self, bounds);
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn child_frames(&self) -> Vec<Rect> {
        self.frames()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl From<Grid> for Element {
    fn from(grid: Grid) -> Self {
        Self::container(grid)
    }
}
