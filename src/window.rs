//! Rectangles over the terminal's cell grid.

use crate::geometry::PRect;

/// A window over the cell grid, in absolute screen cells.
///
/// All four bounds are inclusive, so a 1x1 window has `left == right`.
/// Nothing here checks the bounds against the physical screen; placement
/// and clamping belong to [`crate::popup`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellWindow {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl CellWindow {
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Window at `(left, top)` spanning `width` x `height` cells.
    #[must_use]
    pub const fn with_size(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self::new(left, top, left + width - 1, top + height - 1)
    }

    #[must_use]
    pub const fn width(&self) -> i32 {
        self.right - self.left + 1
    }

    #[must_use]
    pub const fn height(&self) -> i32 {
        self.bottom - self.top + 1
    }

    /// Translate to `(x, y)`, keeping the size.
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.right += x - self.left;
        self.bottom += y - self.top;
        self.left = x;
        self.top = y;
    }

    /// Change the size, keeping the top-left corner.
    pub fn set_size(&mut self, width: i32, height: i32) {
        self.right = self.left + width - 1;
        self.bottom = self.top + height - 1;
    }

    /// Client rectangle in window-relative coordinates: `(0, 0, width, height)`.
    #[must_use]
    pub fn position(&self) -> PRect {
        PRect::from_ints(0, 0, self.width(), self.height())
    }

    /// Check if an absolute screen cell lies inside the window.
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}
