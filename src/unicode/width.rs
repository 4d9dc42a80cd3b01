//! Display width calculation for terminal rendering.

use unicode_width::UnicodeWidthChar;

/// Width calculation method for ambiguous-width characters.
///
/// Each [`crate::CellGrid`] carries its own method; every measurement of
/// text destined for that grid uses it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WidthMethod {
    /// POSIX-like wcwidth: ambiguous width = 1.
    #[default]
    WcWidth,
    /// Unicode East Asian Width: ambiguous width = 2.
    Unicode,
}

/// Get the display width of a character in terminal columns.
///
/// Characters the width tables have no answer for (controls) count as one
/// column, like a negative `wcwidth` result in a terminal library. Combining
/// marks are zero width.
#[inline]
#[must_use]
pub fn display_width_char(c: char, method: WidthMethod) -> usize {
    // Fast path: ASCII printable characters are always width 1
    if c.is_ascii() && (' '..='~').contains(&c) {
        return 1;
    }
    match method {
        WidthMethod::WcWidth => UnicodeWidthChar::width(c).unwrap_or(1),
        WidthMethod::Unicode => UnicodeWidthChar::width_cjk(c).unwrap_or(1),
    }
}
