//! Byte-level UTF-8 walking for text runs handed over by the engine.
//!
//! Runs are raw bytes and may be malformed. Width is tallied per byte: a
//! lead byte contributes the width of the scalar it starts, a continuation
//! (trail) byte contributes nothing. A lead byte that does not start a valid
//! sequence counts as one column.
//!
//! Every measurement takes the [`WidthMethod`] of the grid the text is
//! destined for.

use super::width::{WidthMethod, display_width_char};

/// Check whether `byte` is a UTF-8 continuation byte (`10xxxxxx`).
#[inline]
#[must_use]
pub const fn is_trail_byte(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Sequence length announced by a lead byte; 1 for bytes that cannot lead.
#[inline]
#[must_use]
pub const fn sequence_len(lead: u8) -> usize {
    match lead {
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 1,
    }
}

/// Decode the scalar value at the start of `bytes`.
///
/// Returns the character and its encoded length, or `None` for empty input
/// and malformed or truncated sequences.
#[must_use]
pub fn decode_scalar(bytes: &[u8]) -> Option<(char, usize)> {
    let lead = *bytes.first()?;
    if lead.is_ascii() {
        return Some((char::from(lead), 1));
    }
    let len = sequence_len(lead);
    if len == 1 || bytes.len() < len {
        return None;
    }
    let ch = std::str::from_utf8(&bytes[..len]).ok()?.chars().next()?;
    Some((ch, len))
}

/// Number of bytes the first character of `bytes` occupies when drawn;
/// 1 for a malformed sequence, 0 for empty input.
#[must_use]
pub fn draw_bytes(bytes: &[u8]) -> usize {
    match decode_scalar(bytes) {
        Some((_, len)) => len,
        None => usize::from(!bytes.is_empty()),
    }
}

/// Display width of the scalar starting at `bytes`.
///
/// Decoding failure is width 1, never an error.
#[must_use]
pub fn grapheme_width(bytes: &[u8], method: WidthMethod) -> usize {
    decode_scalar(bytes).map_or(1, |(ch, _)| display_width_char(ch, method))
}

/// Running column count after each byte, aligned 1:1 with `text`.
#[must_use]
pub fn measure_run(text: &[u8], method: WidthMethod) -> Vec<usize> {
    let mut columns = 0;
    text.iter()
        .enumerate()
        .map(|(i, &byte)| {
            if !is_trail_byte(byte) {
                columns += grapheme_width(&text[i..], method);
            }
            columns
        })
        .collect()
}

/// Total display width of `text`.
#[must_use]
pub fn text_width(text: &[u8], method: WidthMethod) -> usize {
    text.iter()
        .enumerate()
        .filter(|&(_, &byte)| !is_trail_byte(byte))
        .map(|(i, _)| grapheme_width(&text[i..], method))
        .sum()
}

/// Length of the longest byte prefix of `text` whose running width stays
/// within `columns`.
///
/// The prefix ends just before the byte whose width pushes the tally past
/// `columns`; trailing continuation bytes of the last fitting scalar are
/// included.
#[must_use]
pub fn fit_bytes(text: &[u8], columns: i64, method: WidthMethod) -> usize {
    if columns < 0 {
        return 0;
    }
    let mut tally = 0i64;
    for (i, &byte) in text.iter().enumerate() {
        if !is_trail_byte(byte) {
            tally += grapheme_width(&text[i..], method) as i64;
        }
        if tally > columns {
            return i;
        }
    }
    text.len()
}

/// A decoded scalar ready to be placed in a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    /// Byte offset within the run.
    pub offset: usize,
    /// Columns to advance after placing the glyph.
    pub width: usize,
}

/// Iterate the drawable scalars of a byte run.
///
/// Malformed lead bytes yield U+FFFD one column wide; stray continuation
/// bytes are skipped, matching their zero contribution in [`measure_run`].
#[must_use]
pub fn glyphs(text: &[u8], method: WidthMethod) -> Glyphs<'_> {
    Glyphs {
        text,
        pos: 0,
        method,
    }
}

/// Iterator returned by [`glyphs`].
#[derive(Clone, Debug)]
pub struct Glyphs<'a> {
    text: &'a [u8],
    pos: usize,
    method: WidthMethod,
}

impl Iterator for Glyphs<'_> {
    type Item = Glyph;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.text.len() {
            let offset = self.pos;
            let rest = &self.text[offset..];
            if let Some((ch, len)) = decode_scalar(rest) {
                self.pos += len;
                return Some(Glyph {
                    ch,
                    offset,
                    width: display_width_char(ch, self.method),
                });
            }
            self.pos += 1;
            if !is_trail_byte(rest[0]) {
                return Some(Glyph {
                    ch: char::REPLACEMENT_CHARACTER,
                    offset,
                    width: 1,
                });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WC: WidthMethod = WidthMethod::WcWidth;

    #[test]
    fn test_trail_bytes() {
        assert!(!is_trail_byte(b'a'));
        assert!(is_trail_byte(0x80));
        assert!(is_trail_byte(0xBF));
        assert!(!is_trail_byte(0xC3));
    }

    #[test]
    fn test_decode_scalar() {
        assert_eq!(decode_scalar(b"abc"), Some(('a', 1)));
        assert_eq!(decode_scalar("é!".as_bytes()), Some(('é', 2)));
        assert_eq!(decode_scalar("漢".as_bytes()), Some(('漢', 3)));
        assert_eq!(decode_scalar("😀".as_bytes()), Some(('😀', 4)));
        assert_eq!(decode_scalar(b""), None);
        assert_eq!(decode_scalar(&[0xE6, 0xBC]), None); // truncated
        assert_eq!(decode_scalar(&[0xC0, 0x80]), None); // overlong
        assert_eq!(decode_scalar(&[0x80]), None);
    }

    #[test]
    fn test_draw_bytes() {
        assert_eq!(draw_bytes("■x".as_bytes()), 3);
        assert_eq!(draw_bytes(&[0xFF, b'a']), 1);
        assert_eq!(draw_bytes(b""), 0);
    }

    #[test]
    fn test_grapheme_width_fail_soft() {
        assert_eq!(grapheme_width(b"a", WC), 1);
        assert_eq!(grapheme_width("漢".as_bytes(), WC), 2);
        assert_eq!(grapheme_width("\u{0301}".as_bytes(), WC), 0);
        assert_eq!(grapheme_width(&[0xFF], WC), 1);
        assert_eq!(grapheme_width(&[0xE6, 0xBC], WC), 1);
    }

    #[test]
    fn test_measure_run_prefix_sum() {
        assert_eq!(measure_run(b"abc", WC), vec![1, 2, 3]);
        // 'a' + 'é' (2 bytes, 1 col) + '漢' (3 bytes, 2 cols)
        assert_eq!(measure_run("aé漢".as_bytes(), WC), vec![1, 2, 2, 4, 4, 4]);
        // Combining mark adds nothing
        assert_eq!(measure_run("e\u{0301}".as_bytes(), WC), vec![1, 1, 1]);
        assert!(measure_run(b"", WC).is_empty());
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("aé漢".as_bytes(), WC), 4);
        assert_eq!(text_width(&[0xFF, 0xFE], WC), 2);
    }

    #[test]
    fn test_fit_bytes() {
        assert_eq!(fit_bytes(b"abcd", 2, WC), 2);
        assert_eq!(fit_bytes(b"abcd", 10, WC), 4);
        assert_eq!(fit_bytes(b"abcd", 0, WC), 0);
        assert_eq!(fit_bytes(b"abcd", -3, WC), 0);
        // The wide glyph does not fit in one remaining column.
        assert_eq!(fit_bytes("a漢".as_bytes(), 2, WC), 1);
        assert_eq!(fit_bytes("a漢".as_bytes(), 3, WC), 4);
    }

    #[test]
    fn test_glyphs() {
        let run: Vec<_> = glyphs("a漢b".as_bytes(), WC).map(|g| (g.ch, g.offset, g.width)).collect();
        assert_eq!(run, vec![('a', 0, 1), ('漢', 1, 2), ('b', 4, 1)]);

        let bad: Vec<_> = glyphs(&[b'x', 0xFF, 0x80, b'y'], WC).map(|g| g.ch).collect();
        assert_eq!(bad, vec!['x', char::REPLACEMENT_CHARACTER, 'y']);
    }

    #[test]
    fn test_ambiguous_width_follows_method() {
        let text = "①x".as_bytes();
        assert_eq!(text_width(text, WidthMethod::WcWidth), 2);
        assert_eq!(text_width(text, WidthMethod::Unicode), 3);
        assert_eq!(fit_bytes(text, 1, WidthMethod::WcWidth), 3);
        assert_eq!(fit_bytes(text, 1, WidthMethod::Unicode), 0);
        let widths: Vec<_> = glyphs(text, WidthMethod::Unicode).map(|g| g.width).collect();
        assert_eq!(widths, vec![2, 1]);
    }
}
