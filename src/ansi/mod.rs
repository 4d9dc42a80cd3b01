//! ANSI escape sequence generation.

pub mod output;
pub mod sequences;

pub use output::AnsiWriter;
pub use sequences::*;

use crate::color::Rgba;
use crate::style::TextAttributes;
use std::io::{self, Write};

/// Color output mode for ANSI sequences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// True color (24-bit RGB).
    #[default]
    TrueColor,
    /// 256-color palette.
    Color256,
    /// 16-color (basic ANSI).
    Color16,
    /// No color output.
    NoColor,
}

/// Write a u8 as decimal digits to a writer without formatting overhead.
#[inline]
fn write_u8_decimal(w: &mut impl Write, n: u8) -> io::Result<()> {
    if n >= 100 {
        w.write_all(&[b'0' + n / 100, b'0' + (n / 10) % 10, b'0' + n % 10])
    } else if n >= 10 {
        w.write_all(&[b'0' + n / 10, b'0' + n % 10])
    } else {
        w.write_all(&[b'0' + n])
    }
}

/// Write a u32 as decimal digits to a writer without formatting overhead.
#[inline]
fn write_u32_decimal(w: &mut impl Write, n: u32) -> io::Result<()> {
    if n < 10 {
        return w.write_all(&[b'0' + n as u8]);
    }
    let mut buf = [0u8; 10];
    let mut i = buf.len();
    let mut val = n;
    while val > 0 {
        i -= 1;
        buf[i] = b'0' + (val % 10) as u8;
        val /= 10;
    }
    w.write_all(&buf[i..])
}

fn write_color(
    w: &mut impl Write,
    color: Rgba,
    mode: ColorMode,
    truecolor: &[u8],
    palette: &[u8],
    base: u8,
    bright_base: u8,
) -> io::Result<()> {
    match mode {
        ColorMode::TrueColor => {
            w.write_all(truecolor)?;
            write_u8_decimal(w, color.r)?;
            w.write_all(b";")?;
            write_u8_decimal(w, color.g)?;
            w.write_all(b";")?;
            write_u8_decimal(w, color.b)?;
            w.write_all(b"m")
        }
        ColorMode::Color256 => {
            w.write_all(palette)?;
            write_u8_decimal(w, color.to_256_color())?;
            w.write_all(b"m")
        }
        ColorMode::Color16 => {
            let idx = color.to_16_color();
            let code = if idx < 8 { base + idx } else { bright_base + idx - 8 };
            w.write_all(b"\x1b[")?;
            write_u8_decimal(w, code)?;
            w.write_all(b"m")
        }
        ColorMode::NoColor => Ok(()),
    }
}

/// Write the SGR sequence selecting `color` as foreground.
pub fn write_fg_color_with_mode(w: &mut impl Write, color: Rgba, mode: ColorMode) -> io::Result<()> {
    write_color(w, color, mode, b"\x1b[38;2;", b"\x1b[38;5;", 30, 90)
}

/// Write the SGR sequence selecting `color` as background.
pub fn write_bg_color_with_mode(w: &mut impl Write, color: Rgba, mode: ColorMode) -> io::Result<()> {
    write_color(w, color, mode, b"\x1b[48;2;", b"\x1b[48;5;", 40, 100)
}

/// Write the SGR sequence turning on `attrs`.
///
/// `BRIGHT` has no SGR code of its own; it is folded into the color.
pub fn write_attributes(w: &mut impl Write, attrs: TextAttributes) -> io::Result<()> {
    let mut codes: [&[u8]; 6] = [b""; 6];
    let mut count = 0;
    for (flag, code) in [
        (TextAttributes::BOLD, b"1" as &[u8]),
        (TextAttributes::DIM, b"2"),
        (TextAttributes::ITALIC, b"3"),
        (TextAttributes::UNDERLINE, b"4"),
        (TextAttributes::BLINK, b"5"),
        (TextAttributes::REVERSE, b"7"),
    ] {
        if attrs.contains(flag) {
            codes[count] = code;
            count += 1;
        }
    }

    if count == 0 {
        return Ok(());
    }
    w.write_all(b"\x1b[")?;
    for (i, code) in codes[..count].iter().enumerate() {
        if i > 0 {
            w.write_all(b";")?;
        }
        w.write_all(code)?;
    }
    w.write_all(b"m")
}

/// Write an absolute cursor position sequence (0-indexed input).
pub fn write_cursor_position(w: &mut impl Write, row: u32, col: u32) -> io::Result<()> {
    w.write_all(b"\x1b[")?;
    write_u32_decimal(w, row + 1)?;
    w.write_all(b";")?;
    write_u32_decimal(w, col + 1)?;
    w.write_all(b"H")
}

/// Write a relative cursor movement.
pub fn write_cursor_move(w: &mut impl Write, dx: i32, dy: i32) -> io::Result<()> {
    if dy < 0 {
        w.write_all(b"\x1b[")?;
        write_u32_decimal(w, dy.unsigned_abs())?;
        w.write_all(b"A")?;
    } else if dy > 0 {
        w.write_all(b"\x1b[")?;
        write_u32_decimal(w, dy as u32)?;
        w.write_all(b"B")?;
    }

    if dx > 0 {
        w.write_all(b"\x1b[")?;
        write_u32_decimal(w, dx as u32)?;
        w.write_all(b"C")?;
    } else if dx < 0 {
        w.write_all(b"\x1b[")?;
        write_u32_decimal(w, dx.unsigned_abs())?;
        w.write_all(b"D")?;
    }
    Ok(())
}
