//! Terminal text attributes and the fonts that carry them.
//!
//! This module provides:
//!
//! - [`TextAttributes`]: Bitflags for bold, italic, underline, etc.
//! - [`FontWeight`] / [`FontParameters`]: the engine's abstract font request
//! - [`Font`]: the value a surface draws with, reduced to attribute bits
//!
//! Attribute bits sit above the 24 color bits so that a packed foreground
//! (`0xRRGGBB | attributes`) carries both in one word, the way the cell grid
//! stores them.
//!
//! # Examples
//!
//! ```
//! use termsurface::style::{FontParameters, FontWeight, TextAttributes, attributes_for};
//!
//! assert_eq!(attributes_for(FontWeight::BOLD, false), TextAttributes::BOLD);
//! let font = termsurface::Font::new(&FontParameters::new(FontWeight::NORMAL).italic());
//! assert!(font.attributes().contains(TextAttributes::ITALIC));
//! ```

use bitflags::bitflags;

bitflags! {
    /// Text rendering attributes (bold, italic, underline, etc.).
    ///
    /// Not all terminals support all attributes.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u32 {
        /// Bold/increased intensity.
        const BOLD      = 0x0100_0000;
        /// Underlined text.
        const UNDERLINE = 0x0200_0000;
        /// Swapped foreground/background.
        const REVERSE   = 0x0400_0000;
        /// Italic (not widely supported).
        const ITALIC    = 0x0800_0000;
        /// Blinking text (rarely supported).
        const BLINK     = 0x1000_0000;
        /// Bright variant of the first eight palette colors.
        const BRIGHT    = 0x4000_0000;
        /// Dim/decreased intensity.
        const DIM       = 0x8000_0000;
    }
}

impl TextAttributes {
    /// Mask for the low 24 bits shared with the packed color.
    pub const COLOR_MASK: u32 = 0x00FF_FFFF;

    /// Return only the named style flags, dropping anything passed through
    /// the weight channel below the attribute range.
    #[must_use]
    pub const fn flags_only(self) -> Self {
        Self::from_bits_truncate(self.bits())
    }
}

/// Abstract font weight on the usual 100..=900 scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub i32);

impl FontWeight {
    pub const NORMAL: Self = Self(400);
    pub const SEMI_BOLD: Self = Self(600);
    pub const BOLD: Self = Self(700);
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Font request issued by the editing engine.
///
/// Face name and size are meaningless on a cell grid and are not kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FontParameters {
    pub weight: FontWeight,
    pub italic: bool,
}

impl FontParameters {
    #[must_use]
    pub const fn new(weight: FontWeight) -> Self {
        Self {
            weight,
            italic: false,
        }
    }

    #[must_use]
    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

/// Map a font weight and style to terminal attribute bits.
///
/// Bold maps to [`TextAttributes::BOLD`]. Any weight other than normal,
/// semi-bold or bold is copied into the attribute bits unchanged: the engine
/// uses the weight field to request raw terminal attributes (for example
/// `FontWeight(0x0200_0000)` for underline). Callers choosing such values
/// must keep them clear of the bold bit.
#[must_use]
pub const fn attributes_for(weight: FontWeight, italic: bool) -> TextAttributes {
    let mut bits = match weight {
        FontWeight::BOLD => TextAttributes::BOLD.bits(),
        FontWeight::NORMAL | FontWeight::SEMI_BOLD => 0,
        FontWeight(raw) => raw as u32,
    };
    if italic {
        bits |= TextAttributes::ITALIC.bits();
    }
    TextAttributes::from_bits_retain(bits)
}

/// A realised font: nothing but the attribute bits every glyph is drawn with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Font {
    attributes: TextAttributes,
}

impl Font {
    #[must_use]
    pub const fn new(params: &FontParameters) -> Self {
        Self {
            attributes: attributes_for(params.weight, params.italic),
        }
    }

    #[must_use]
    pub const fn attributes(&self) -> TextAttributes {
        self.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_bits_clear_of_color() {
        for flag in TextAttributes::all().iter() {
            assert_eq!(flag.bits() & TextAttributes::COLOR_MASK, 0, "{flag:?}");
        }
    }

    #[test]
    fn test_normal_and_semibold_have_no_attributes() {
        assert!(attributes_for(FontWeight::NORMAL, false).is_empty());
        assert!(attributes_for(FontWeight::SEMI_BOLD, false).is_empty());
    }

    #[test]
    fn test_bold_maps_to_single_bit() {
        let attrs = attributes_for(FontWeight::BOLD, false);
        assert_eq!(attrs, TextAttributes::BOLD);
        assert_eq!(attrs.bits().count_ones(), 1);
    }

    #[test]
    fn test_italic_adds_bit() {
        let attrs = attributes_for(FontWeight::BOLD, true);
        assert_eq!(attrs, TextAttributes::BOLD | TextAttributes::ITALIC);
        assert_eq!(
            attributes_for(FontWeight::NORMAL, true),
            TextAttributes::ITALIC
        );
    }

    #[test]
    fn test_raw_weight_passes_through() {
        let underline = FontWeight(TextAttributes::UNDERLINE.bits() as i32);
        assert_eq!(attributes_for(underline, false), TextAttributes::UNDERLINE);

        // Ordinary weights outside the named three land in the low bits as-is.
        let light = attributes_for(FontWeight(300), false);
        assert_eq!(light.bits(), 300);
        assert!(light.flags_only().is_empty());
    }

    #[test]
    fn test_font_from_parameters() {
        let font = Font::new(&FontParameters::new(FontWeight::BOLD).italic());
        assert!(font.attributes().contains(TextAttributes::BOLD));
        assert!(font.attributes().contains(TextAttributes::ITALIC));
        assert!(Font::default().attributes().is_empty());
    }
}
