//! Unicode utilities for UTF-8 decoding and display width.

mod utf8;
mod width;

pub use utf8::{
    Glyph, Glyphs, decode_scalar, draw_bytes, fit_bytes, glyphs, grapheme_width, is_trail_byte,
    measure_run, sequence_len, text_width,
};
pub use width::{WidthMethod, display_width_char};
