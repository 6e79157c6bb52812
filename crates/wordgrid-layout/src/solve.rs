//! Numeric pieces of the grid solver.
//!
//! These operate on plain extents along one axis so the grid can apply them
//! to either orientation.

use crate::track::Alignment;

/// Where an element sits inside the extent available to it along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct Span {
    /// Offset of the element from the near edge; negative when a fixed size
    /// pinned to the far edge overflows
    pub(crate) offset: f32,
    /// Element extent
    pub(crate) len: f32,
    /// Leftover space before the element
    pub(crate) lead: f32,
    /// Leftover space after the element
    pub(crate) trail: f32,
}

/// Fraction of the main extent left for proportional tracks.
///
/// A zero or negative extent yields zero, as does an extent already consumed
/// by fixed and auto tracks.
pub(crate) fn star_multiplier(extent: f32, fixed_and_auto: f32) -> f32 {
    if extent > 0.0 {
        ((extent - fixed_and_auto) / extent).max(0.0)
    } else {
        0.0
    }
}

/// Track extent (margins included) owed to a proportional track.
pub(crate) fn proportional_share(extent: f32, weight: f32, total_weight: f32, star: f32) -> f32 {
    if total_weight > 0.0 {
        (extent * weight.max(0.0) / total_weight * star).max(0.0)
    } else {
        0.0
    }
}

/// Resolve `alignment` inside `available`.
///
/// `natural` is only evaluated by the auto variants. Fixed sizes are kept
/// even when they exceed `available`; the recorded leftover never goes
/// negative.
pub(crate) fn align(alignment: Alignment, available: f32, natural: impl FnOnce() -> f32) -> Span {
    let available = available.max(0.0);
    match alignment {
        Alignment::Fill => Span {
            offset: 0.0,
            len: available,
            lead: 0.0,
            trail: 0.0,
        },
        Alignment::FixedNear(size) => {
            let len = size.max(0.0);
            Span {
                offset: 0.0,
                len,
                lead: 0.0,
                trail: (available - len).max(0.0),
            }
        }
        Alignment::FixedFar(size) => {
            let len = size.max(0.0);
            Span {
                offset: available - len,
                len,
                lead: (available - len).max(0.0),
                trail: 0.0,
            }
        }
        Alignment::AutoNear => {
            let len = natural().clamp(0.0, available);
            Span {
                offset: 0.0,
                len,
                lead: 0.0,
                trail: available - len,
            }
        }
        Alignment::AutoFar => {
            let len = natural().clamp(0.0, available);
            Span {
                offset: available - len,
                len,
                lead: available - len,
                trail: 0.0,
            }
        }
    }
}
