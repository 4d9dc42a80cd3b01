//! The terminal's global cell buffer.
//!
//! [`CellGrid`] is the one shared resource every window draws into. Draw
//! calls mutate it in place; nothing reaches the terminal until the host
//! presents it (see [`crate::present::Presenter`]).
//!
//! # Examples
//!
//! ```
//! use termsurface::{Cell, CellGrid, Rgba};
//!
//! let mut grid = CellGrid::new(80, 24);
//! grid.clear(Rgba::BLACK);
//! grid.set(3, 1, Cell::new('x', Rgba::WHITE, Rgba::BLACK, Default::default()));
//! assert_eq!(grid.get(3, 1).map(|c| c.ch), Some('x'));
//!
//! // Writes outside the grid are dropped.
//! grid.set(-1, 0, Cell::default());
//! grid.set(80, 0, Cell::default());
//! ```

use crate::cell::Cell;
use crate::color::Rgba;
use crate::unicode::WidthMethod;

/// Fixed matrix of terminal cells plus the hardware cursor position.
///
/// The grid also fixes how wide ambiguous-width characters are: everything
/// that measures text for this grid or presents it uses
/// [`width_method`](Self::width_method).
///
/// # Coordinate System
///
/// Coordinates are absolute (x, y) screen cells where (0, 0) is the top-left
/// corner. They are signed because window arithmetic routinely produces
/// positions left of or above the screen; such writes are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellGrid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
    cursor: Option<(i32, i32)>,
    width_method: WidthMethod,
}

impl CellGrid {
    /// Create a new grid with the given dimensions.
    ///
    /// Zero or negative dimensions are clamped to 1.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let size = (width as usize).saturating_mul(height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
            cursor: None,
            width_method: WidthMethod::default(),
        }
    }

    /// Measure ambiguous-width characters with `method`.
    #[must_use]
    pub fn with_width_method(mut self, method: WidthMethod) -> Self {
        self.width_method = method;
        self
    }

    #[must_use]
    pub fn width_method(&self) -> WidthMethod {
        self.width_method
    }

    /// Get grid dimensions.
    #[must_use]
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Compute cell index with overflow protection.
    #[inline]
    fn cell_index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        let row_offset = (y as usize).checked_mul(self.width as usize)?;
        let idx = row_offset.checked_add(x as usize)?;
        (idx < self.cells.len()).then_some(idx)
    }

    /// Get cell at position.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.cell_index(x, y).map(|idx| &self.cells[idx])
    }

    /// Get mutable cell at position.
    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        self.cell_index(x, y).map(|idx| &mut self.cells[idx])
    }

    /// Set cell at position. Out-of-range positions are ignored.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(idx) = self.cell_index(x, y) {
            self.cells[idx] = cell;
        }
    }

    /// Clear entire grid with background color.
    pub fn clear(&mut self, bg: Rgba) {
        self.cells.fill(Cell::clear(bg));
    }

    /// Resize the grid, clearing its contents.
    pub fn resize(&mut self, width: i32, height: i32) {
        let width = width.max(1);
        let height = height.max(1);
        if (width, height) == (self.width, self.height) {
            return;
        }
        tracing::debug!(width, height, "resizing cell grid");
        self.width = width;
        self.height = height;
        let size = (width as usize).saturating_mul(height as usize);
        self.cells = vec![Cell::default(); size];
    }

    /// Place the hardware cursor, or hide it with `None`.
    pub fn set_cursor(&mut self, position: Option<(i32, i32)>) {
        self.cursor = position;
    }

    #[must_use]
    pub fn cursor(&self) -> Option<(i32, i32)> {
        self.cursor
    }

    /// Get raw cell slice.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells of one row, or an empty slice when `y` is out of range.
    #[must_use]
    pub fn row(&self, y: i32) -> &[Cell] {
        match self.cell_index(0, y) {
            Some(start) => &self.cells[start..start + self.width as usize],
            None => &[],
        }
    }

    /// Characters of one row as a string.
    #[must_use]
    pub fn row_text(&self, y: i32) -> String {
        self.row(y).iter().map(|cell| cell.ch).collect()
    }

    /// Iterate over cells with positions.
    pub fn iter_cells(&self) -> impl Iterator<Item = (i32, i32, &Cell)> {
        self.cells.iter().enumerate().map(|(i, cell)| {
            let x = (i as i32) % self.width;
            let y = (i as i32) / self.width;
            (x, y, cell)
        })
    }
}

impl Default for CellGrid {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::TextAttributes;

    fn glyph(ch: char) -> Cell {
        Cell::new(ch, Rgba::WHITE, Rgba::BLACK, TextAttributes::empty())
    }

    // =========================================================================
    // Creation & Sizing
    // =========================================================================

    #[test]
    fn test_grid_creation() {
        let grid = CellGrid::new(80, 24);
        assert_eq!(grid.size(), (80, 24));
        assert_eq!(grid.cells().len(), 80 * 24);
        assert_eq!(grid.cursor(), None);
    }

    #[test]
    fn test_zero_dimensions_clamped() {
        let grid = CellGrid::new(0, -3);
        assert_eq!(grid.size(), (1, 1));
    }

    #[test]
    fn test_resize_clears() {
        let mut grid = CellGrid::new(10, 10);
        grid.set(5, 5, glyph('X'));
        grid.resize(20, 5);
        assert_eq!(grid.size(), (20, 5));
        assert_eq!(grid.get(5, 0).map(|c| c.ch), Some(' '));
        assert!(grid.get(5, 5).is_none());
    }

    #[test]
    fn test_resize_same_size_keeps_contents() {
        let mut grid = CellGrid::new(10, 10);
        grid.set(5, 5, glyph('X'));
        grid.resize(10, 10);
        assert_eq!(grid.get(5, 5).map(|c| c.ch), Some('X'));
    }

    #[test]
    fn test_width_method_survives_resize() {
        let mut grid = CellGrid::new(10, 10).with_width_method(WidthMethod::Unicode);
        grid.resize(4, 4);
        assert_eq!(grid.width_method(), WidthMethod::Unicode);
        assert_eq!(CellGrid::new(1, 1).width_method(), WidthMethod::WcWidth);
    }

    // =========================================================================
    // Cell Access
    // =========================================================================

    #[test]
    fn test_set_out_of_bounds_ignored() {
        let mut grid = CellGrid::new(4, 2);
        let before = grid.clone();
        grid.set(-1, 0, glyph('a'));
        grid.set(0, -1, glyph('a'));
        grid.set(4, 0, glyph('a'));
        grid.set(0, 2, glyph('a'));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_get_mut() {
        let mut grid = CellGrid::new(4, 2);
        if let Some(cell) = grid.get_mut(1, 1) {
            cell.bg = Rgba::RED;
        }
        assert_eq!(grid.get(1, 1).map(|c| c.bg), Some(Rgba::RED));
    }

    #[test]
    fn test_row_text() {
        let mut grid = CellGrid::new(4, 2);
        grid.set(0, 1, glyph('a'));
        grid.set(3, 1, glyph('z'));
        assert_eq!(grid.row_text(1), "a  z");
        assert_eq!(grid.row_text(2), "");
    }

    #[test]
    fn test_clear() {
        let mut grid = CellGrid::new(3, 3);
        grid.set(1, 1, glyph('a'));
        grid.clear(Rgba::BLUE);
        assert!(grid.iter_cells().all(|(_, _, c)| c.ch == ' ' && c.bg == Rgba::BLUE));
    }

    #[test]
    fn test_iter_cells_positions() {
        let grid = CellGrid::new(3, 2);
        let last = grid.iter_cells().last().map(|(x, y, _)| (x, y));
        assert_eq!(last, Some((2, 1)));
    }
}
