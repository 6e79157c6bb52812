//! Element capabilities seen by a layout container.
//!
//! Every child placed in a grid can report its natural size and whether it
//! is hidden. Beyond that, elements come in two flavours:
//!
//! - [`Leaf`]: receives the frame it was placed at and does nothing else.
//! - [`Container`]: receives its bounds and lays out its own children.
//!
//! [`Element`] carries one of the two so containers can dispatch without
//! inspecting concrete types.
//!
//! # Examples
//!
//! ```
//! use wordgrid_core::{Block, Element, Proposal, Rect, Size};
//!
//! let mut element = Element::leaf(Block::new(Size::new(40.0, 20.0)));
//! assert_eq!(element.measure(Proposal::unbounded()), Size::new(40.0, 20.0));
//!
//! element.place(Rect::new(0.0, 0.0, 40.0, 20.0));
//! assert!(!element.is_container());
//! ```

use crate::geometry::{Rect, Size};
use crate::proposal::Proposal;
use std::any::Any;
use std::fmt;

/// Natural sizing and visibility, required of every placed element.
pub trait Measure {
    /// Natural size of the element within `proposal`.
    ///
    /// Must not have side effects visible to layout.
    fn measure(&self, proposal: Proposal) -> Size;

    /// Whether the element is currently hidden.
    fn is_hidden(&self) -> bool {
        false
    }

    /// Show or hide the element.
    fn set_hidden(&mut self, hidden: bool);
}

/// An element without children of its own.
pub trait Leaf: Measure {
    /// Apply the frame computed for this element.
    fn place(&mut self, frame: Rect);

    /// Last frame applied with [`Leaf::place`].
    fn frame(&self) -> Rect;
}

/// An element that lays out children of its own.
pub trait Container: Measure {
    /// Re-solve the children against `bounds`.
    fn relayout(&mut self, bounds: Rect);

    /// Bounds passed to the last [`Container::relayout`].
    fn bounds(&self) -> Rect;

    /// Frames assigned to the children by the last relayout, in order.
    fn child_frames(&self) -> Vec<Rect>;

    /// Concrete container, for [`Element::downcast_ref`].
    fn as_any(&self) -> &dyn Any;

    /// Concrete container, for [`Element::downcast_mut`].
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A child owned by a layout track.
pub enum Element {
    /// Sized by content, placed by its parent.
    Leaf(Box<dyn Leaf>),
    /// Lays out its own children once placed.
    Container(Box<dyn Container>),
}

impl Element {
    /// Wrap a leaf element.
    pub fn leaf(leaf: impl Leaf + 'static) -> Self {
        Self::Leaf(Box::new(leaf))
    }

    /// Wrap a container element.
    pub fn container(container: impl Container + 'static) -> Self {
        Self::Container(Box::new(container))
    }

    /// Natural size within `proposal`.
    pub fn measure(&self, proposal: Proposal) -> Size {
        match self {
            Self::Leaf(leaf) => leaf.measure(proposal),
            Self::Container(container) => container.measure(proposal),
        }
    }

    /// Whether the element is hidden.
    pub fn is_hidden(&self) -> bool {
        match self {
            Self::Leaf(leaf) => leaf.is_hidden(),
            Self::Container(container) => container.is_hidden(),
        }
    }

    /// Show or hide the element.
    pub fn set_hidden(&mut self, hidden: bool) {
        match self {
            Self::Leaf(leaf) => leaf.set_hidden(hidden),
            Self::Container(container) => container.set_hidden(hidden),
        }
    }

    /// Apply `frame`: leaves record it, containers relay out inside it.
    pub fn place(&mut self, frame: Rect) {
        match self {
            Self::Leaf(leaf) => leaf.place(frame),
            Self::Container(container) => container.relayout(frame),
        }
    }

    /// The frame last applied to the element.
    pub fn frame(&self) -> Rect {
        match self {
            Self::Leaf(leaf) => leaf.frame(),
            Self::Container(container) => container.bounds(),
        }
    }

    /// Frames of the element's own children; empty for leaves.
    pub fn child_frames(&self) -> Vec<Rect> {
        match self {
            Self::Leaf(_) => Vec::new(),
            Self::Container(container) => container.child_frames(),
        }
    }

    /// Check whether this element lays out children.
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Container(_))
    }

    /// The container as `T`, if it is one.
    pub fn downcast_ref<T: Container + 'static>(&self) -> Option<&T> {
        match self {
            Self::Leaf(_) => None,
            Self::Container(container) => container.as_any().downcast_ref(),
        }
    }

    /// The container as `T`, mutably, if it is one.
    pub fn downcast_mut<T: Container + 'static>(&mut self) -> Option<&mut T> {
        match self {
            Self::Leaf(_) => None,
            Self::Container(container) => container.as_any_mut().downcast_mut(),
        }
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(leaf) => f
                .debug_struct("Leaf")
                .field("frame", &leaf.frame())
                .field("hidden", &leaf.is_hidden())
                .finish(),
            Self::Container(container) => f
                .debug_struct("Container")
                .field("bounds", &container.bounds())
                .field("hidden", &container.is_hidden())
                .finish(),
        }
    }
}
