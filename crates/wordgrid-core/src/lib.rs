//! Core types and traits for the wordgrid layout engine.
//!
//! This crate provides the foundation the grid solver is built on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`Insets`], [`Axis`]
//! - Size proposals: [`Proposal`]
//! - Element capabilities: [`Measure`], [`Leaf`], [`Container`], [`Element`]
//! - Stock leaves: [`Block`], [`TextBlock`]

mod element;
mod geometry;
mod leaf;
mod proposal;

pub use element::{Container, Element, Leaf, Measure};
pub use geometry::{Axis, Insets, Point, Rect, Size};
pub use leaf::{Block, TextBlock};
pub use proposal::Proposal;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_inset_never_negative(
            w in 0.0f32..500.0,
            h in 0.0f32..500.0,
            m in 0.0f32..400.0,
        ) {
            let r = Rect::new(0.0, 0.0, w, h).inset_by(Insets::uniform(m));
            prop_assert!(r.width >= 0.0);
            prop_assert!(r.height >= 0.0);
        }

        #[test]
        fn prop_constrain_within_bounds(
            w in 0.0f32..1000.0,
            h in 0.0f32..1000.0,
            mw in 0.0f32..1000.0,
            mh in 0.0f32..1000.0,
        ) {
            let size = Proposal::bounded(Size::new(mw, mh)).constrain(Size::new(w, h));
            prop_assert!(size.width <= mw);
            prop_assert!(size.height <= mh);
        }

        #[test]
        fn prop_text_respects_width_bound(
            words in proptest::collection::vec("[a-z]{1,12}", 1..20),
            max in 1.0f32..400.0,
        ) {
            let text = TextBlock::new(words.join(" "));
            let size = text.measure(Proposal::new(Some(max), None));
            prop_assert!(size.width <= max);
            prop_assert!(size.height > 0.0);
        }
    }

    #[test]
    fn test_geometry_serde_round_trip() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        let json = serde_json::to_string(&rect).unwrap();
        let back: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(rect, back);
    }
}
