//! The cell-grid drawing surface.

use super::Surface;
use crate::cell::Cell;
use crate::color::Rgba;
use crate::geometry::{PRect, Point};
use crate::grid::CellGrid;
use crate::marker::{LineMarker, MarkerSymbol, glyph_for};
use crate::style::{Font, TextAttributes};
use crate::unicode::{WidthMethod, fit_bytes, glyphs};
use crate::window::CellWindow;

/// Glyph drawn for whitespace indicators.
pub const WHITESPACE_DOT: char = '\u{00B7}';

const UP_ARROW: char = '\u{25B2}';
const DOWN_ARROW: char = '\u{25BC}';

/// Fill edges closer than this to a whole cell count as whole.
const FRACTION_EPSILON: f64 = 0.1;

/// Draws into a [`CellGrid`] through a target window.
///
/// All coordinates are relative to the window. A surface may be created
/// before it has a window; until one is attached every drawing call is a
/// no-op. Cells outside the window are never written.
///
/// # Examples
///
/// ```
/// use termsurface::surface::{CellSurface, Surface};
/// use termsurface::{CellGrid, CellWindow, Font, PRect, Rgba};
///
/// let mut grid = CellGrid::new(20, 5);
/// let mut surface = CellSurface::attached(&mut grid, CellWindow::new(2, 1, 11, 3));
/// surface.draw_text_no_clip(
///     PRect::from_ints(0, 0, 10, 1),
///     &Font::default(),
///     0.0,
///     b"hi",
///     Rgba::WHITE,
///     Rgba::BLACK,
/// );
/// assert_eq!(grid.get(2, 1).map(|c| c.ch), Some('h'));
/// ```
#[derive(Debug)]
pub struct CellSurface<'g> {
    grid: &'g mut CellGrid,
    window: Option<CellWindow>,
    clip: PRect,
}

impl<'g> CellSurface<'g> {
    /// A surface with no target window yet.
    #[must_use]
    pub fn new(grid: &'g mut CellGrid) -> Self {
        Self {
            grid,
            window: None,
            clip: PRect::default(),
        }
    }

    #[must_use]
    pub fn attached(grid: &'g mut CellGrid, window: CellWindow) -> Self {
        let mut surface = Self::new(grid);
        surface.attach(window);
        surface
    }

    pub fn attach(&mut self, window: CellWindow) {
        self.window = Some(window);
    }

    pub fn detach(&mut self) {
        self.window = None;
    }

    #[must_use]
    pub fn window(&self) -> Option<CellWindow> {
        self.window
    }

    /// Current clip rectangle; empty after [`Surface::pop_clip`].
    #[must_use]
    pub fn clip(&self) -> PRect {
        self.clip
    }

    /// Write one cell at window-relative `(x, y)` if it lies inside the window.
    fn put(&mut self, win: CellWindow, x: i32, y: i32, cell: Cell) {
        if x < 0 || y < 0 || x >= win.width() || y >= win.height() {
            return;
        }
        self.grid.set(win.left + x, win.top + y, cell);
    }

    fn draw_text(&mut self, mut rc: PRect, font: &Font, mut text: &[u8], fore: Rgba, back: Rgba) {
        let Some(win) = self.window else {
            return;
        };

        let method = self.grid.width_method();
        if rc.left < self.clip.left {
            // Keep margin content left of the clip intact.
            let clip_columns = (self.clip.left - rc.left) as i64;
            text = &text[fit_bytes(text, clip_columns, method)..];
            rc.left = self.clip.left;
        }

        let visible = fit_bytes(text, i64::from(win.width()) - rc.left as i64, method);
        if visible == 0 {
            return;
        }

        let y = rc.top as i32;
        let mut x = rc.left as i32;
        for glyph in glyphs(text, method) {
            if glyph.offset >= visible {
                break;
            }
            let cell = Cell::new(glyph.ch, fore, back, font.attributes());
            self.put(win, x, y, cell);
            x += glyph.width as i32;
        }
    }
}

impl Surface for CellSurface<'_> {
    fn width_method(&self) -> WidthMethod {
        self.grid.width_method()
    }

    fn set_clip(&mut self, rc: PRect) {
        self.clip = rc;
    }

    fn pop_clip(&mut self) {
        self.clip = PRect::default();
    }

    fn fill_rectangle(&mut self, rc: PRect, fill: Rgba) {
        let Some(win) = self.window else {
            return;
        };

        let ch = if (rc.left - rc.left.trunc()).abs() > FRACTION_EPSILON {
            WHITESPACE_DOT
        } else {
            ' '
        };
        let cell = Cell::new(ch, Rgba::WHITE, fill, TextAttributes::empty());

        let left = (rc.left as i32).max(0);
        let top = (rc.top as i32).max(0);
        let right = (rc.right as i32).min(win.width());
        let bottom = (rc.bottom as i32).min(win.height());
        for y in top..bottom {
            for x in left..right {
                self.put(win, x, y, cell);
            }
        }
    }

    fn draw_text_no_clip(
        &mut self,
        rc: PRect,
        font: &Font,
        _ybase: f64,
        text: &[u8],
        fore: Rgba,
        back: Rgba,
    ) {
        self.draw_text(rc, font, text, fore, back);
    }

    fn draw_text_clipped(
        &mut self,
        mut rc: PRect,
        font: &Font,
        _ybase: f64,
        text: &[u8],
        fore: Rgba,
        back: Rgba,
    ) {
        if rc.left >= rc.right {
            // Degenerate rectangles (caret, text blobs) carry pixel padding
            // that a cell grid does not have.
            rc = PRect::new(rc.left - 2.0, rc.top - 1.0, rc.right - 2.0, rc.bottom - 1.0);
        }
        self.draw_text(rc, font, text, fore, back);
    }

    fn draw_text_transparent(&mut self, rc: PRect, font: &Font, _ybase: f64, text: &[u8], fore: Rgba) {
        let Some(win) = self.window else {
            return;
        };
        let y = win.top + rc.top as i32;
        if y > win.bottom {
            return;
        }
        let x = win.left + rc.left as i32;
        let back = self.grid.get(x, y).map_or(Rgba::BLACK, |cell| cell.bg);
        self.draw_text(rc, font, text, fore, back);
    }

    fn polygon(&mut self, pts: &[Point], fill: Rgba, _stroke: Rgba) {
        let Some(win) = self.window else {
            return;
        };
        let (Some(first), Some(last)) = (pts.first(), pts.last()) else {
            return;
        };
        // Only call-tip arrows reach here.
        let x = (last.x - 2.0) as i32;
        let (arrow, y) = if first.y < last.y {
            (UP_ARROW, first.y as i32)
        } else if first.y > last.y {
            (DOWN_ARROW, (first.y - 2.0) as i32)
        } else {
            tracing::trace!(points = pts.len(), "flat polygon not drawn");
            return;
        };
        self.put(win, x, y, Cell::new(arrow, Rgba::BLACK, fill, TextAttributes::empty()));
    }

    fn draw_line_marker(&mut self, rc: PRect, font: &Font, marker: &LineMarker) {
        let Some(win) = self.window else {
            return;
        };
        match marker.symbol {
            MarkerSymbol::FullRect => self.fill_rectangle(rc, marker.back),
            MarkerSymbol::Character(ch) => {
                let mut buf = [0u8; 4];
                let text = ch.encode_utf8(&mut buf).as_bytes();
                self.draw_text_clipped(rc, font, 0.0, text, marker.fore, marker.back);
            }
            symbol => {
                let Some(glyph) = glyph_for(symbol) else {
                    tracing::trace!(?symbol, "marker has no cell glyph");
                    return;
                };
                let cell = Cell::new(glyph, marker.fore, marker.back, TextAttributes::empty());
                self.put(win, rc.left as i32, rc.top as i32, cell);
            }
        }
    }
}
