//! Geometric primitives for diagram layout and positioning.
//!
//! # Coordinate System
//!
//! Coordinates follow SVG conventions:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward

/// A 2D point in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use mermaid_lite_core::geometry::Point;
/// let start = Point::new(28.0, 28.0);
/// let mid = start.midpoint(Point::new(196.0, 84.0));
/// assert_eq!(mid.x(), 112.0);
/// assert_eq!(mid.y(), 56.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Creates a new point with the specified x-coordinate
    pub fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Returns the midpoint between this point and `other`
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Creates bounds of the given size centered on this point.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mermaid_lite_core::geometry::{Point, Size};
    /// let bounds = Point::new(112.0, 56.0).to_bounds(Size::new(168.0, 56.0));
    /// assert_eq!(bounds.min_x(), 28.0);
    /// assert_eq!(bounds.min_y(), 28.0);
    /// ```
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds {
            min_x: self.x - size.width / 2.0,
            min_y: self.y - size.height / 2.0,
            max_x: self.x + size.width / 2.0,
            max_y: self.y + size.height / 2.0,
        }
    }
}

/// Width and height of an element
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }
}

/// A rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point::new(self.min_x, self.min_y)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_with_and_sub() {
        let p = Point::new(1.0, 2.0).with_x(5.0).with_y(7.0);
        assert_approx_eq!(f32, p.x(), 5.0);
        assert_approx_eq!(f32, p.y(), 7.0);

        let delta = p.sub_point(Point::new(1.0, 1.0));
        assert_eq!(delta, Point::new(4.0, 6.0));
    }

    #[test]
    fn test_point_midpoint() {
        let mid = Point::new(0.0, 10.0).midpoint(Point::new(20.0, 30.0));
        assert_approx_eq!(f32, mid.x(), 10.0);
        assert_approx_eq!(f32, mid.y(), 20.0);
    }

    #[test]
    fn test_point_to_bounds_is_centered() {
        let bounds = Point::new(112.0, 56.0).to_bounds(Size::new(168.0, 56.0));
        assert_approx_eq!(f32, bounds.min_x(), 28.0);
        assert_approx_eq!(f32, bounds.min_y(), 28.0);
        assert_approx_eq!(f32, bounds.max_x(), 196.0);
        assert_approx_eq!(f32, bounds.max_y(), 84.0);
        assert_approx_eq!(f32, bounds.width(), 168.0);
        assert_approx_eq!(f32, bounds.height(), 56.0);
        assert_eq!(bounds.min_point(), Point::new(28.0, 28.0));
    }
}
