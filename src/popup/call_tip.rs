//! The call-tip window.

use crate::cell::Cell;
use crate::color::Rgba;
use crate::geometry::PRect;
use crate::grid::CellGrid;
use crate::window::CellWindow;

/// Window for the engine's call-tip text.
///
/// Only the placement and background live here; the engine paints the tip's
/// contents through a surface attached to [`CallTipWindow::window`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CallTipWindow {
    window: Option<CellWindow>,
    background: Rgba,
}

impl CallTipWindow {
    #[must_use]
    pub const fn new(background: Rgba) -> Self {
        Self {
            window: None,
            background,
        }
    }

    /// Open the window for `rc` (absolute cells, right edge exclusive),
    /// shifted and clamped into `parent`. An open window is left alone.
    pub fn create(&mut self, rc: PRect, parent: &CellWindow) {
        if self.window.is_some() {
            return;
        }

        let mut left = rc.left as i32;
        let mut top = rc.top as i32;
        let mut right = rc.right as i32 - 1;
        let mut bottom = rc.bottom as i32;

        let shift_x = parent.left - left;
        if shift_x > 0 {
            left += shift_x;
            right += shift_x;
        }
        let shift_y = parent.top - top;
        if shift_y > 0 {
            top += shift_y;
            bottom += shift_y;
        }
        if right - left > parent.width() {
            right = left + parent.width() - 1;
        }
        if bottom - top > parent.height() {
            bottom = top + parent.height() - 1;
        }

        let window = CellWindow::new(left, top, right.max(left), bottom.max(top));
        tracing::debug!(?window, "created call tip window");
        self.window = Some(window);
    }

    #[must_use]
    pub const fn window(&self) -> Option<CellWindow> {
        self.window
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.window.is_some()
    }

    #[must_use]
    pub const fn background(&self) -> Rgba {
        self.background
    }

    pub fn set_background(&mut self, background: Rgba) {
        self.background = background;
    }

    pub fn destroy(&mut self) {
        self.window = None;
    }

    /// Fill the window with the background color.
    pub fn paint_background(&self, grid: &mut CellGrid) {
        let Some(win) = self.window else {
            return;
        };
        let blank = Cell::clear(self.background);
        for y in win.top..=win.bottom {
            for x in win.left..=win.right {
                grid.set(x, y, blank);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tip() -> CallTipWindow {
        CallTipWindow::new(Rgba::from_rgb(0xFF_FF_C6))
    }

    #[test]
    fn test_create_inside_parent() {
        let mut ct = tip();
        ct.create(PRect::from_ints(5, 2, 15, 4), &CellWindow::new(0, 0, 79, 23));
        assert_eq!(ct.window(), Some(CellWindow::new(5, 2, 14, 4)));
        assert!(ct.is_open());
    }

    #[test]
    fn test_create_shifts_into_parent() {
        let mut ct = tip();
        ct.create(PRect::from_ints(-3, -1, 7, 2), &CellWindow::new(0, 0, 79, 23));
        assert_eq!(ct.window(), Some(CellWindow::new(0, 0, 9, 3)));
    }

    #[test]
    fn test_create_clamps_to_parent_size() {
        let mut ct = tip();
        ct.create(PRect::from_ints(2, 1, 40, 30), &CellWindow::new(0, 0, 19, 9));
        assert_eq!(ct.window(), Some(CellWindow::new(2, 1, 21, 10)));
    }

    #[test]
    fn test_create_keeps_open_window() {
        let mut ct = tip();
        let parent = CellWindow::new(0, 0, 79, 23);
        ct.create(PRect::from_ints(5, 2, 15, 4), &parent);
        ct.create(PRect::from_ints(0, 0, 3, 1), &parent);
        assert_eq!(ct.window(), Some(CellWindow::new(5, 2, 14, 4)));
        ct.destroy();
        ct.create(PRect::from_ints(0, 0, 3, 1), &parent);
        assert_eq!(ct.window(), Some(CellWindow::new(0, 0, 2, 1)));
    }

    #[test]
    fn test_paint_background() {
        let mut grid = CellGrid::new(10, 5);
        let mut ct = tip();
        ct.paint_background(&mut grid);
        assert!(grid.iter_cells().all(|(_, _, c)| c.bg == Rgba::BLACK));

        ct.create(PRect::from_ints(1, 1, 4, 2), &CellWindow::new(0, 0, 9, 4));
        ct.paint_background(&mut grid);
        let colored: Vec<(i32, i32)> = grid
            .iter_cells()
            .filter(|(_, _, c)| c.bg == ct.background())
            .map(|(x, y, _)| (x, y))
            .collect();
        assert_eq!(colored, vec![(1, 1), (2, 1), (3, 1), (1, 2), (2, 2), (3, 2)]);
    }
}
