//! Diff-based presentation of the cell grid.
//!
//! [`Presenter`] keeps the last frame it wrote and, on each
//! [`present`](Presenter::present), emits ANSI output only for the cells
//! that changed since then. A size change, an [`invalidate`](Presenter::invalidate)
//! call, or a frame where more than half the cells changed repaints
//! everything.
//!
//! Wide glyphs occupy one grid cell but two terminal columns. The cell to
//! the right of a wide glyph is never written (it would clobber the glyph's
//! second half), and it is repainted when the glyph that covered it goes
//! away.

use crate::ansi::{self, AnsiWriter, ColorMode};
use crate::cell::Cell;
use crate::grid::CellGrid;
use crate::unicode::WidthMethod;
use std::io::{self, Write};

/// Presentation statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PresentStats {
    pub frames: u64,
    /// Cells written by the most recent frame.
    pub last_frame_cells: usize,
    /// Whether the most recent frame was a full repaint.
    pub last_frame_full: bool,
}

/// Writes [`CellGrid`] frames to a terminal.
pub struct Presenter<W: Write> {
    writer: AnsiWriter<W>,
    front: Option<CellGrid>,
    dirty: Vec<(i32, i32)>,
    force_redraw: bool,
    sync_output: bool,
    stats: PresentStats,
}

impl<W: Write> Presenter<W> {
    #[must_use]
    pub fn new(writer: W, color_mode: ColorMode) -> Self {
        Self {
            writer: AnsiWriter::with_color_mode(writer, color_mode),
            front: None,
            dirty: Vec::new(),
            force_redraw: true,
            sync_output: false,
            stats: PresentStats::default(),
        }
    }

    /// Wrap each frame in synchronized-update sequences.
    #[must_use]
    pub fn with_sync_output(mut self, enabled: bool) -> Self {
        self.sync_output = enabled;
        self
    }

    #[must_use]
    pub fn color_mode(&self) -> ColorMode {
        self.writer.color_mode()
    }

    pub fn set_color_mode(&mut self, mode: ColorMode) {
        if mode != self.writer.color_mode() {
            self.writer.set_color_mode(mode);
            self.force_redraw = true;
        }
    }

    #[must_use]
    pub fn stats(&self) -> &PresentStats {
        &self.stats
    }

    /// Repaint everything on the next frame.
    pub fn invalidate(&mut self) {
        self.force_redraw = true;
    }

    pub fn get_ref(&self) -> &W {
        self.writer.get_ref()
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    /// Switch to the alternate screen, optionally with mouse reporting.
    pub fn enter_screen(&mut self, mouse: bool) -> io::Result<()> {
        self.writer.write_str(ansi::ALT_SCREEN_ON);
        if mouse {
            self.writer.write_str(ansi::MOUSE_ON);
        }
        self.force_redraw = true;
        self.writer.flush()
    }

    /// Undo [`enter_screen`](Self::enter_screen) and show the cursor.
    pub fn leave_screen(&mut self) -> io::Result<()> {
        self.writer.reset();
        self.writer.write_str(ansi::MOUSE_OFF);
        self.writer.write_str(ansi::ALT_SCREEN_OFF);
        self.writer.write_str(ansi::CURSOR_SHOW);
        self.writer.flush()
    }

    /// Write `grid` to the terminal and remember it as the current frame.
    pub fn present(&mut self, grid: &CellGrid) -> io::Result<()> {
        let mut full = self.force_redraw
            || self.front.as_ref().is_none_or(|front| {
                front.size() != grid.size() || front.width_method() != grid.width_method()
            });
        self.dirty.clear();
        if let (false, Some(front)) = (full, self.front.as_ref()) {
            collect_changes(front, grid, &mut self.dirty);
            full = should_full_redraw(self.dirty.len(), grid);
        }

        if self.sync_output {
            self.writer.write_str(ansi::sync::BEGIN);
        }
        self.writer.write_str(ansi::CURSOR_HIDE);
        // The writer tracks the cursor from (0,0); home the terminal to match.
        self.writer.write_str(ansi::CURSOR_HOME);
        self.writer.reset_state();
        self.writer.set_width_method(grid.width_method());

        let written = if full {
            self.writer.write_str(ansi::RESET);
            self.writer.write_str(ansi::CLEAR_SCREEN);
            self.write_all_cells(grid)
        } else {
            let dirty = std::mem::take(&mut self.dirty);
            for &(x, y) in &dirty {
                if let Some(cell) = grid.get(x, y) {
                    self.goto(x, y, grid.width());
                    self.writer.write_cell(cell);
                }
            }
            let written = dirty.len();
            self.dirty = dirty;
            written
        };
        self.writer.reset();

        let (width, height) = grid.size();
        match grid.cursor() {
            Some((x, y)) if (0..width).contains(&x) && (0..height).contains(&y) => {
                self.writer.place_cursor(y as u32, x as u32);
                self.writer.write_str(ansi::CURSOR_SHOW);
            }
            _ => {}
        }

        if self.sync_output {
            self.writer.write_str(ansi::sync::END);
        }
        self.writer.flush()?;

        self.stats.frames = self.stats.frames.saturating_add(1);
        self.stats.last_frame_cells = written;
        self.stats.last_frame_full = full;
        self.force_redraw = false;
        match self.front.as_mut() {
            Some(front) if front.size() == grid.size() => front.clone_from(grid),
            _ => self.front = Some(grid.clone()),
        }
        Ok(())
    }

    /// Move to `(x, y)`. After a write reaches the right edge the terminal
    /// holds the cursor in its pending-wrap state, so only an absolute move
    /// lands reliably.
    fn goto(&mut self, x: i32, y: i32, width: i32) {
        let (_, col) = self.writer.cursor();
        if col >= width as u32 {
            self.writer.place_cursor(y as u32, x as u32);
        } else {
            self.writer.move_cursor(y as u32, x as u32);
        }
    }

    fn write_all_cells(&mut self, grid: &CellGrid) -> usize {
        let (_, height) = grid.size();
        let method = grid.width_method();
        let mut written = 0;
        for y in 0..height {
            let mut covered = false;
            for (x, cell) in grid.row(y).iter().enumerate() {
                if covered {
                    covered = false;
                    continue;
                }
                self.goto(x as i32, y, grid.width());
                self.writer.write_cell(cell);
                covered = is_wide(cell, method);
                written += 1;
            }
        }
        written
    }
}

impl<W: Write> std::fmt::Debug for Presenter<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Presenter")
            .field("color_mode", &self.writer.color_mode())
            .field("force_redraw", &self.force_redraw)
            .field("sync_output", &self.sync_output)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

fn is_wide(cell: &Cell, method: WidthMethod) -> bool {
    cell.display_width(method) > 1
}

/// Cells of `back` that must be rewritten to turn `front` into it.
///
/// Both grids have the same size.
fn collect_changes(front: &CellGrid, back: &CellGrid, out: &mut Vec<(i32, i32)>) {
    let (_, height) = back.size();
    let method = back.width_method();
    for y in 0..height {
        let old = front.row(y);
        let new = back.row(y);
        let mut left_changed = false;
        let mut left_old_wide = false;
        let mut left_new_wide = false;
        for (x, (o, n)) in old.iter().zip(new).enumerate() {
            let changed = o != n;
            let uncovered = left_changed && left_old_wide;
            if (changed || uncovered) && !left_new_wide {
                out.push((x as i32, y));
            }
            left_changed = changed;
            left_old_wide = is_wide(o, method);
            left_new_wide = is_wide(n, method);
        }
    }
}

fn should_full_redraw(changed: usize, grid: &CellGrid) -> bool {
    let (width, height) = grid.size();
    let total = (width as usize).saturating_mul(height as usize);
    changed.saturating_mul(2) > total
}
