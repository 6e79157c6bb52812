//! Geometric primitives: Point, Size, Rect, `Insets`, `Axis`.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A 2D point with x and y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Layout axis.
///
/// A row grid packs its tracks along [`Axis::Horizontal`], a column grid
/// along [`Axis::Vertical`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Axis {
    /// Left to right
    Horizontal,
    /// Top to bottom
    #[default]
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// A 2D size with width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Build a size from extents along `axis` and its cross axis.
    #[must_use]
    pub const fn from_axes(axis: Axis, main: f32, cross: f32) -> Self {
        match axis {
            Axis::Horizontal => Self::new(main, cross),
            Axis::Vertical => Self::new(cross, main),
        }
    }

    /// Extent along `axis`.
    #[must_use]
    pub const fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Check if this size can contain another size.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.width >= other.width && self.height >= other.height
    }

    /// Size with both extents clamped to be non-negative.
    #[must_use]
    pub fn non_negative(&self) -> Self {
        Self::new(self.width.max(0.0), self.height.max(0.0))
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::ZERO
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X position of top-left corner
    pub x: f32,
    /// Y position of top-left corner
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create from size at origin.
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Build a rectangle from main/cross offsets and extents.
    #[must_use]
    pub const fn from_axes(
        axis: Axis,
        main_pos: f32,
        cross_pos: f32,
        main_len: f32,
        cross_len: f32,
    ) -> Self {
        match axis {
            Axis::Horizontal => Self::new(main_pos, cross_pos, main_len, cross_len),
            Axis::Vertical => Self::new(cross_pos, main_pos, cross_len, main_len),
        }
    }

    /// Get the origin (top-left) point.
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Get the size.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Leading coordinate along `axis` (left or top edge).
    #[must_use]
    pub const fn start(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Trailing coordinate along `axis` (right or bottom edge).
    #[must_use]
    pub fn end(&self, axis: Axis) -> f32 {
        self.start(axis) + self.size().along(axis)
    }

    /// Extent along `axis`.
    #[must_use]
    pub const fn extent(&self, axis: Axis) -> f32 {
        self.size().along(axis)
    }

    /// Get the area.
    #[must_use]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Check if a point is inside the rectangle (inclusive).
    #[must_use]
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Check if this rectangle intersects another.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    /// Shrink by `insets`, clamping the size at zero.
    #[must_use]
    pub fn inset_by(&self, insets: Insets) -> Self {
        Self::new(
            self.x + insets.left,
            self.y + insets.top,
            (self.width - insets.horizontal()).max(0.0),
            (self.height - insets.vertical()).max(0.0),
        )
    }

    /// Create a new rectangle with the given size.
    #[must_use]
    pub const fn with_size(&self, size: Size) -> Self {
        Self::new(self.x, self.y, size.width, size.height)
    }

    /// Create a new rectangle with the given height.
    #[must_use]
    pub const fn with_height(&self, height: f32) -> Self {
        Self::new(self.x, self.y, self.width, height)
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Four-sided inset used for margins and spacing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Insets {
    /// Top inset
    pub top: f32,
    /// Left inset
    pub left: f32,
    /// Bottom inset
    pub bottom: f32,
    /// Right inset
    pub right: f32,
}

impl Insets {
    /// No inset on any side.
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    /// Create insets with individual values.
    #[must_use]
    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Same inset on every side.
    #[must_use]
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Horizontal and vertical insets.
    #[must_use]
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Total horizontal inset.
    #[must_use]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical inset.
    #[must_use]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Inset on the leading side of `axis` (left or top).
    #[must_use]
    pub const fn near(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// Inset on the trailing side of `axis` (right or bottom).
    #[must_use]
    pub const fn far(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.bottom,
        }
    }

    /// Sum of both insets along `axis`.
    #[must_use]
    pub fn along(&self, axis: Axis) -> f32 {
        self.near(axis) + self.far(axis)
    }

    /// Set the leading inset along `axis`.
    pub fn set_near(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::Horizontal => self.left = value,
            Axis::Vertical => self.top = value,
        }
    }

    /// Set the trailing inset along `axis`.
    pub fn set_far(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::Horizontal => self.right = value,
            Axis::Vertical => self.bottom = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_default() {
        assert_eq!(Point::default(), Point::ORIGIN);
    }

    #[test]
    fn test_point_arithmetic() {
        let p = Point::new(1.0, 2.0) + Point::new(3.0, 4.0);
        assert_eq!(p, Point::new(4.0, 6.0));
        assert_eq!(p - Point::new(4.0, 6.0), Point::ORIGIN);
    }

    #[test]
    fn test_axis_cross() {
        assert_eq!(Axis::Horizontal.cross(), Axis::Vertical);
        assert_eq!(Axis::Vertical.cross(), Axis::Horizontal);
    }

    #[test]
    fn test_size_axes() {
        let s = Size::from_axes(Axis::Vertical, 10.0, 20.0);
        assert_eq!(s, Size::new(20.0, 10.0));
        assert_eq!(s.along(Axis::Vertical), 10.0);
        assert_eq!(s.along(Axis::Horizontal), 20.0);
    }

    #[test]
    fn test_size_non_negative() {
        assert_eq!(Size::new(-1.0, 3.0).non_negative(), Size::new(0.0, 3.0));
    }

    #[test]
    fn test_rect_default() {
        let r = Rect::default();
        assert_eq!(r.x, 0.0);
        assert_eq!(r.area(), 0.0);
    }

    #[test]
    fn test_rect_axes() {
        let r = Rect::from_axes(Axis::Vertical, 5.0, 1.0, 10.0, 2.0);
        assert_eq!(r, Rect::new(1.0, 5.0, 2.0, 10.0));
        assert_eq!(r.start(Axis::Vertical), 5.0);
        assert_eq!(r.end(Axis::Vertical), 15.0);
        assert_eq!(r.extent(Axis::Horizontal), 2.0);
    }

    #[test]
    fn test_rect_inset_by_clamps() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0).inset_by(Insets::uniform(8.0));
        assert_eq!(r, Rect::new(8.0, 8.0, 0.0, 0.0));
    }

    #[test]
    fn test_insets_axis_access() {
        let mut i = Insets::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(i.near(Axis::Vertical), 1.0);
        assert_eq!(i.far(Axis::Horizontal), 4.0);
        assert_eq!(i.along(Axis::Horizontal), 6.0);
        i.set_far(Axis::Vertical, 9.0);
        assert_eq!(i.bottom, 9.0);
        i.set_near(Axis::Horizontal, 0.5);
        assert_eq!(i.left, 0.5);
    }
}
