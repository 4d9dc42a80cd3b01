//! Fractional rectangles and points in the engine's coordinate space.
//!
//! The editing engine works in "pixels"; on a cell grid one pixel is one
//! cell, but values still arrive as floats and may carry fractions. A
//! [`PRect`] doubles as the clip region of a surface.

/// A point in window-relative cell coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point from integer cell coordinates.
    #[must_use]
    pub fn from_ints(x: i32, y: i32) -> Self {
        Self::new(f64::from(x), f64::from(y))
    }
}

/// A rectangle with fractional edges. `right` and `bottom` are exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PRect {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle from integer cell edges.
    #[must_use]
    pub fn from_ints(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(
            f64::from(left),
            f64::from(top),
            f64::from(right),
            f64::from(bottom),
        )
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Check if this rectangle is empty (zero or negative area).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    /// Check if a point is inside this rectangle.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.left && pt.x < self.right && pt.y >= self.top && pt.y < self.bottom
    }

    /// Compute intersection with another rectangle.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let rect = Self::new(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
        );
        (!rect.is_empty()).then_some(rect)
    }

    /// The same rectangle translated by `(dx, dy)`.
    #[must_use]
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(
            self.left + dx,
            self.top + dy,
            self.right + dx,
            self.bottom + dy,
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)] // Exact float comparison is intentional in tests
    use super::*;

    #[test]
    fn test_rect_dimensions() {
        let rect = PRect::from_ints(2, 3, 12, 4);
        assert_eq!(rect.width(), 10.0);
        assert_eq!(rect.height(), 1.0);
        assert!(!rect.is_empty());
        assert!(PRect::default().is_empty());
    }

    #[test]
    fn test_rect_contains() {
        let rect = PRect::from_ints(10, 10, 30, 30);
        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(rect.contains(Point::new(29.5, 29.5)));
        assert!(!rect.contains(Point::new(30.0, 10.0)));
        assert!(!rect.contains(Point::new(9.9, 10.0)));
    }

    #[test]
    fn test_rect_intersect() {
        let a = PRect::from_ints(0, 0, 10, 10);
        let b = PRect::new(5.5, 5.0, 20.0, 20.0);
        assert_eq!(a.intersect(&b), Some(PRect::new(5.5, 5.0, 10.0, 10.0)));

        let c = PRect::from_ints(10, 0, 20, 10);
        assert_eq!(a.intersect(&c), None);
    }

    #[test]
    fn test_rect_offset() {
        let rect = PRect::from_ints(1, 2, 3, 4).offset(-1.0, 2.0);
        assert_eq!(rect, PRect::from_ints(0, 4, 2, 6));
        assert_eq!(Point::from_ints(3, -1), Point::new(3.0, -1.0));
    }
}
