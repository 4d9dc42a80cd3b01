//! Terminal cell type representing a single character position.
//!
//! A terminal display is a grid of cells, where each cell holds one Unicode
//! scalar value plus a foreground color, background color and attribute bits.
//! Wide characters (CJK, emoji) are written into one cell; the terminal
//! paints them across two columns and the next cell is simply overdrawn.
//!
//! # Examples
//!
//! ```
//! use termsurface::{Cell, Rgba, TextAttributes};
//!
//! let cell = Cell::new('A', Rgba::WHITE, Rgba::BLACK, TextAttributes::BOLD);
//! assert_eq!(cell.packed_fg(), 0x00FF_FFFF | TextAttributes::BOLD.bits());
//!
//! let blank = Cell::clear(Rgba::BLACK);
//! assert_eq!(blank.ch, ' ');
//! ```

use crate::color::Rgba;
use crate::style::TextAttributes;
use crate::unicode::{WidthMethod, display_width_char};
use std::io::Write;

/// A single terminal cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgba,
    pub bg: Rgba,
    pub attributes: TextAttributes,
}

impl Cell {
    #[must_use]
    pub const fn new(ch: char, fg: Rgba, bg: Rgba, attributes: TextAttributes) -> Self {
        Self {
            ch,
            fg,
            bg,
            attributes,
        }
    }

    /// A blank cell with the given background (renders as space).
    #[must_use]
    pub const fn clear(bg: Rgba) -> Self {
        Self::new(' ', Rgba::WHITE, bg, TextAttributes::empty())
    }

    /// Foreground color packed together with the attribute bits.
    #[must_use]
    pub const fn packed_fg(&self) -> u32 {
        self.fg.to_rgb() | self.attributes.bits()
    }

    /// Display width of the cell's character in columns.
    #[must_use]
    pub fn display_width(&self, method: WidthMethod) -> usize {
        display_width_char(self.ch, method)
    }

    /// Write the cell's character as UTF-8. Control characters are written as
    /// spaces so they cannot move the terminal cursor.
    pub fn write_content<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        let ch = if self.ch.is_control() { ' ' } else { self.ch };
        let mut buf = [0u8; 4];
        w.write_all(ch.encode_utf8(&mut buf).as_bytes())
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::clear(Rgba::BLACK)
    }
}
