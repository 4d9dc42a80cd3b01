//! Buffered ANSI output writer with state tracking.

use crate::ansi::{self, ColorMode, attr};
use crate::cell::Cell;
use crate::color::Rgba;
use crate::style::TextAttributes;
use crate::unicode::WidthMethod;
use std::io::{self, Write};

/// Buffered writer that tracks ANSI state to minimize escape sequences.
pub struct AnsiWriter<W: Write> {
    writer: W,
    buffer: Vec<u8>,

    // Color output mode
    color_mode: ColorMode,
    // How far a written glyph advances the cursor
    width_method: WidthMethod,

    // Current state for delta encoding
    current_fg: Option<Rgba>,
    current_bg: Option<Rgba>,
    current_attrs: TextAttributes,

    // Cursor position
    cursor_row: u32,
    cursor_col: u32,
}

impl<W: Write> AnsiWriter<W> {
    /// Create a new ANSI writer wrapping the given output.
    pub fn new(writer: W) -> Self {
        Self::with_color_mode(writer, ColorMode::TrueColor)
    }

    /// Create a new ANSI writer with specified color mode.
    pub fn with_color_mode(writer: W, color_mode: ColorMode) -> Self {
        Self {
            writer,
            buffer: Vec::with_capacity(8192),
            color_mode,
            width_method: WidthMethod::default(),
            current_fg: None,
            current_bg: None,
            current_attrs: TextAttributes::empty(),
            cursor_row: 0,
            cursor_col: 0,
        }
    }

    pub fn set_color_mode(&mut self, mode: ColorMode) {
        self.color_mode = mode;
    }

    #[must_use]
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub fn set_width_method(&mut self, method: WidthMethod) {
        self.width_method = method;
    }

    /// Forget the tracked style and cursor so the next writes are explicit.
    pub fn reset_state(&mut self) {
        self.current_fg = None;
        self.current_bg = None;
        self.current_attrs = TextAttributes::empty();
        self.cursor_row = 0;
        self.cursor_col = 0;
    }

    /// Write a raw string to the buffer.
    pub fn write_str(&mut self, s: &str) {
        self.buffer.extend_from_slice(s.as_bytes());
    }

    /// Move cursor to position, using relative moves if more efficient.
    pub fn move_cursor(&mut self, row: u32, col: u32) {
        if row == self.cursor_row && col == self.cursor_col {
            return;
        }

        let dy = row as i32 - self.cursor_row as i32;
        let dx = col as i32 - self.cursor_col as i32;

        // ESC[r;cH = 4 + digits
        let abs_cost = 4 + digits(row + 1) + digits(col + 1);
        let rel_cost = if dy != 0 { 3 + digits(dy.unsigned_abs()) } else { 0 }
            + if dx != 0 { 3 + digits(dx.unsigned_abs()) } else { 0 };

        if rel_cost < abs_cost {
            let _ = ansi::write_cursor_move(&mut self.buffer, dx, dy);
        } else {
            let _ = ansi::write_cursor_position(&mut self.buffer, row, col);
        }

        self.cursor_row = row;
        self.cursor_col = col;
    }

    /// Tracked cursor position as `(row, col)`.
    #[must_use]
    pub const fn cursor(&self) -> (u32, u32) {
        (self.cursor_row, self.cursor_col)
    }

    /// Position the cursor absolutely, regardless of the tracked position.
    pub fn place_cursor(&mut self, row: u32, col: u32) {
        let _ = ansi::write_cursor_position(&mut self.buffer, row, col);
        self.cursor_row = row;
        self.cursor_col = col;
    }

    /// Set foreground color if different from current.
    pub fn set_fg(&mut self, color: Rgba) {
        if self.current_fg != Some(color) {
            let _ = ansi::write_fg_color_with_mode(&mut self.buffer, color, self.color_mode);
            self.current_fg = Some(color);
        }
    }

    /// Set background color if different from current.
    pub fn set_bg(&mut self, color: Rgba) {
        if self.current_bg != Some(color) {
            let _ = ansi::write_bg_color_with_mode(&mut self.buffer, color, self.color_mode);
            self.current_bg = Some(color);
        }
    }

    /// Set text attributes, only writing changes.
    pub fn set_attributes(&mut self, attrs: TextAttributes) {
        let attrs = attrs.flags_only();
        if self.current_attrs == attrs {
            return;
        }

        let removed = self.current_attrs - attrs;
        if !removed.is_empty() {
            let mut codes = Vec::new();
            if removed.intersects(TextAttributes::BOLD | TextAttributes::DIM) {
                codes.push(attr::RESET_INTENSITY);
            }
            if removed.contains(TextAttributes::ITALIC) {
                codes.push(attr::RESET_ITALIC);
            }
            if removed.contains(TextAttributes::UNDERLINE) {
                codes.push(attr::RESET_UNDERLINE);
            }
            if removed.contains(TextAttributes::BLINK) {
                codes.push(attr::RESET_BLINK);
            }
            if removed.contains(TextAttributes::REVERSE) {
                codes.push(attr::RESET_INVERSE);
            }

            if !codes.is_empty() {
                self.buffer.extend_from_slice(b"\x1b[");
                for (i, code) in codes.iter().enumerate() {
                    if i > 0 {
                        self.buffer.push(b';');
                    }
                    self.buffer.extend_from_slice(code.as_bytes());
                }
                self.buffer.push(b'm');
            }

            // 22 clears both intensities; re-add whichever survives.
            self.current_attrs -= removed;
            if removed.intersects(TextAttributes::BOLD | TextAttributes::DIM) {
                self.current_attrs -= TextAttributes::BOLD | TextAttributes::DIM;
            }
        }

        let to_add = attrs - self.current_attrs;
        if !to_add.is_empty() {
            let _ = ansi::write_attributes(&mut self.buffer, to_add);
        }

        self.current_attrs = attrs;
    }

    /// Write a cell at the current cursor position.
    pub fn write_cell(&mut self, cell: &Cell) {
        self.set_attributes(cell.attributes);
        self.set_fg(cell.fg);
        self.set_bg(cell.bg);
        let _ = cell.write_content(&mut self.buffer);
        self.cursor_col += cell.display_width(self.width_method) as u32;
    }

    /// Write a cell at a specific position.
    pub fn write_cell_at(&mut self, row: u32, col: u32, cell: &Cell) {
        self.move_cursor(row, col);
        self.write_cell(cell);
    }

    /// Reset all ANSI attributes.
    pub fn reset(&mut self) {
        self.write_str(ansi::RESET);
        self.current_fg = None;
        self.current_bg = None;
        self.current_attrs = TextAttributes::empty();
    }

    /// Flush the buffer to the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.write_all(&self.buffer)?;
        self.buffer.clear();
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Bytes written since the last flush.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
    }
}

/// Count decimal digits in a number.
fn digits(n: u32) -> usize {
    if n == 0 { 1 } else { (n.ilog10() + 1) as usize }
}
