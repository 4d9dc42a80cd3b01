//! RGB color type used by every cell of the grid.
//!
//! The editing engine describes colors as packed `0xRRGGBB` integers and the
//! terminal grid stores them the same way, so [`Rgba`] keeps 8-bit channels
//! rather than floating-point ones. It supports:
//!
//! - **Color creation**: From u8 components, packed integers or hex strings
//! - **Color conversion**: To 256-color and 16-color terminal palettes for
//!   terminals without true color
//!
//! # Examples
//!
//! ```
//! use termsurface::Rgba;
//!
//! let thumb = Rgba::from_rgb(0xD8D8D8);
//! assert_eq!(thumb.to_rgb(), 0xD8D8D8);
//! assert_eq!(Rgba::from_hex("#d8d8d8"), Some(thumb));
//! ```

use std::fmt;

/// Color with 8-bit components.
///
/// Alpha is carried for the engine's translucent fills; the cell grid has no
/// compositing, so only the RGB part reaches the terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);

    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);

    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0, 255);

    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    /// Create a new color from u8 components.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from u8 RGB components.
    #[must_use]
    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create an opaque color from a packed `0xRRGGBB` value.
    ///
    /// Bits above the low 24 are ignored.
    #[must_use]
    pub const fn from_rgb(packed: u32) -> Self {
        Self::from_rgb_u8(
            ((packed >> 16) & 0xFF) as u8,
            ((packed >> 8) & 0xFF) as u8,
            (packed & 0xFF) as u8,
        )
    }

    /// Pack into `0xRRGGBB`, the layout the cell grid stores next to attribute bits.
    #[must_use]
    pub const fn to_rgb(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Parse a hex color string (e.g., "#FF0000" or "FF0000").
    ///
    /// Supports 3-char (#RGB), 6-char (#RRGGBB), and 8-char (#RRGGBBAA) formats.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }

        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB
                let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
                Some(Self::from_rgb_u8(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::from_rgb_u8(r, g, b))
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Self::new(r, g, b, a))
            }
            _ => None,
        }
    }

    /// Return a new color with the specified alpha value.
    #[must_use]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self { a: alpha, ..self }
    }

    /// Convert to nearest 256-color palette index.
    ///
    /// Uses the 6x6x6 color cube (colors 16-231) or grayscale ramp (232-255)
    /// depending on which provides the closest match.
    #[must_use]
    pub fn to_256_color(self) -> u8 {
        let (r, g, b) = (self.r, self.g, self.b);

        let gray = ((r as u16 + g as u16 + b as u16) / 3) as u8;
        let is_grayscale = (r as i16 - gray as i16).abs() < 10
            && (g as i16 - gray as i16).abs() < 10
            && (b as i16 - gray as i16).abs() < 10;

        if is_grayscale {
            // 24 levels from dark to light
            let gray_idx = (gray as u16 * 24 / 256) as u8;
            return 232 + gray_idx.min(23);
        }

        let ri = Self::nearest_cube_index(r);
        let gi = Self::nearest_cube_index(g);
        let bi = Self::nearest_cube_index(b);

        16 + 36 * ri + 6 * gi + bi
    }

    /// Find the nearest index in the 6x6x6 cube for a component value.
    ///
    /// The cube values are [0, 95, 135, 175, 215, 255] with boundaries
    /// at midpoints: 48, 115, 155, 195, 235.
    #[inline]
    fn nearest_cube_index(val: u8) -> u8 {
        if val < 48 {
            0
        } else if val < 115 {
            1
        } else if val < 155 {
            2
        } else if val < 195 {
            3
        } else if val < 235 {
            4
        } else {
            5
        }
    }

    /// Convert to nearest 16-color (basic ANSI) palette index.
    ///
    /// Returns a value 0-15 for the standard ANSI colors:
    /// 0-7: black, red, green, yellow, blue, magenta, cyan, white (normal)
    /// 8-15: bright versions of the above
    #[must_use]
    pub fn to_16_color(self) -> u8 {
        let r = i32::from(self.r);
        let g = i32::from(self.g);
        let b = i32::from(self.b);

        #[rustfmt::skip]
        const PALETTE: [(i32, i32, i32); 16] = [
            (0, 0, 0),       // 0 Black
            (128, 0, 0),     // 1 Red
            (0, 128, 0),     // 2 Green
            (128, 128, 0),   // 3 Yellow
            (0, 0, 128),     // 4 Blue
            (128, 0, 128),   // 5 Magenta
            (0, 128, 128),   // 6 Cyan
            (192, 192, 192), // 7 White
            (128, 128, 128), // 8 Bright Black
            (255, 0, 0),     // 9 Bright Red
            (0, 255, 0),     // 10 Bright Green
            (255, 255, 0),   // 11 Bright Yellow
            (0, 0, 255),     // 12 Bright Blue
            (255, 0, 255),   // 13 Bright Magenta
            (0, 255, 255),   // 14 Bright Cyan
            (255, 255, 255), // 15 Bright White
        ];

        let mut best_idx = 0;
        let mut min_dist = i32::MAX;

        for (i, &(pr, pg, pb)) in PALETTE.iter().enumerate() {
            let dr = r - pr;
            let dg = g - pg;
            let db = b - pb;
            let dist = dr * dr + dg * dg + db * db;

            if dist < min_dist {
                min_dist = dist;
                best_idx = i;
            }
        }

        best_idx as u8
    }
}

impl From<u32> for Rgba {
    fn from(packed: u32) -> Self {
        Self::from_rgb(packed)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02X}{:02X}{:02X}{:02X}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}
