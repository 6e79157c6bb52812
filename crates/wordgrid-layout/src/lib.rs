#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::doc_markdown)]
//! Grid layout engine for wordgrid.
//!
//! A [`Grid`] packs an ordered list of [`Track`]s along one axis:
//!
//! - **Fixed** tracks take a constant extent, margins included.
//! - **Auto** tracks take the natural size of their element plus margins,
//!   optionally capped. Hidden auto tracks collapse entirely.
//! - **Proportional** tracks share whatever is left, by weight.
//!
//! Each track is aligned across the full cross extent on its own, and
//! container elements such as nested grids are laid out again inside the
//! frame they receive. A [`Surface`] owns the root grid and decides when a
//! pass is needed.
//!
//! # Examples
//!
//! ```
//! use wordgrid_core::{Block, Insets, Rect, Size};
//! use wordgrid_layout::{Alignment, Grid, Surface, Track};
//!
//! let header = Grid::row(vec![
//!     Track::auto(Block::new(Size::new(24.0, 24.0))).margin(Insets::uniform(8.0)),
//!     Track::proportional(1.0, Block::opaque()),
//! ])
//! .unwrap();
//!
//! let root = Grid::column(vec![
//!     Track::fixed(40.0, header),
//!     Track::proportional(1.0, Block::opaque()).cross(Alignment::Fill),
//! ])
//! .unwrap();
//!
//! let mut surface = Surface::new(root);
//! surface.resize(Rect::new(0.0, 0.0, 320.0, 480.0));
//!
//! assert_eq!(surface.root().frame(1), Some(Rect::new(0.0, 40.0, 320.0, 440.0)));
//! ```

mod error;
mod grid;
mod solve;
mod surface;
mod track;

pub use error::LayoutError;
pub use grid::Grid;
pub use surface::Surface;
pub use track::{Alignment, Track, TrackSize, TrackState};
