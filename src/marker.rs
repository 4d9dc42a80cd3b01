//! Line marker symbols and their terminal glyphs.
//!
//! The editing engine identifies margin markers by number. Each maps to one
//! glyph except [`MarkerSymbol::FullRect`], which highlights the whole
//! marker rectangle, and [`MarkerSymbol::Character`], which carries its own
//! glyph.

use crate::color::Rgba;

/// Raw marker numbers at or above this value draw the character
/// `raw - CHARACTER_BASE`.
pub const CHARACTER_BASE: i32 = 10_000;

/// Marker symbol kinds understood by the cell surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerSymbol {
    Circle,
    RoundRect,
    Arrow,
    SmallRect,
    ShortArrow,
    Empty,
    ArrowDown,
    Minus,
    Plus,
    VLine,
    LCorner,
    TCorner,
    BoxPlus,
    BoxPlusConnected,
    BoxMinus,
    BoxMinusConnected,
    LCornerCurve,
    TCornerCurve,
    CirclePlus,
    CirclePlusConnected,
    CircleMinus,
    CircleMinusConnected,
    Background,
    DotDotDot,
    Arrows,
    Pixmap,
    FullRect,
    LeftRect,
    Available,
    Underline,
    RgbaImage,
    Bookmark,
    VerticalBookmark,
    Bar,
    /// Draw this character as text.
    Character(char),
    /// A marker number with no terminal rendering.
    Unknown(i32),
}

impl MarkerSymbol {
    /// Decode the engine's marker number. Total: unrecognised values become
    /// [`MarkerSymbol::Unknown`].
    #[must_use]
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Self::Circle,
            1 => Self::RoundRect,
            2 => Self::Arrow,
            3 => Self::SmallRect,
            4 => Self::ShortArrow,
            5 => Self::Empty,
            6 => Self::ArrowDown,
            7 => Self::Minus,
            8 => Self::Plus,
            9 => Self::VLine,
            10 => Self::LCorner,
            11 => Self::TCorner,
            12 => Self::BoxPlus,
            13 => Self::BoxPlusConnected,
            14 => Self::BoxMinus,
            15 => Self::BoxMinusConnected,
            16 => Self::LCornerCurve,
            17 => Self::TCornerCurve,
            18 => Self::CirclePlus,
            19 => Self::CirclePlusConnected,
            20 => Self::CircleMinus,
            21 => Self::CircleMinusConnected,
            22 => Self::Background,
            23 => Self::DotDotDot,
            24 => Self::Arrows,
            25 => Self::Pixmap,
            26 => Self::FullRect,
            27 => Self::LeftRect,
            28 => Self::Available,
            29 => Self::Underline,
            30 => Self::RgbaImage,
            31 => Self::Bookmark,
            32 => Self::VerticalBookmark,
            33 => Self::Bar,
            raw if raw >= CHARACTER_BASE => match char::from_u32((raw - CHARACTER_BASE) as u32) {
                Some(ch) => Self::Character(ch),
                None => Self::Unknown(raw),
            },
            raw => Self::Unknown(raw),
        }
    }
}

/// Glyph drawn for a marker symbol.
///
/// Returns `None` for symbols that draw nothing as a single glyph, which
/// includes [`MarkerSymbol::FullRect`] (a fill, not a symbol).
#[must_use]
pub const fn glyph_for(symbol: MarkerSymbol) -> Option<char> {
    let glyph = match symbol {
        MarkerSymbol::Circle => '\u{25CF}',
        MarkerSymbol::SmallRect | MarkerSymbol::RoundRect => '\u{25A0}',
        MarkerSymbol::Arrow => '\u{25B6}',
        MarkerSymbol::ShortArrow => '\u{2192}',
        MarkerSymbol::Empty => ' ',
        MarkerSymbol::ArrowDown => '\u{25BC}',
        MarkerSymbol::Minus => '\u{2500}',
        MarkerSymbol::BoxMinus | MarkerSymbol::BoxMinusConnected => '\u{229F}',
        MarkerSymbol::CircleMinus | MarkerSymbol::CircleMinusConnected => '\u{2295}',
        MarkerSymbol::Plus => '\u{253C}',
        MarkerSymbol::BoxPlus | MarkerSymbol::BoxPlusConnected => '\u{229E}',
        MarkerSymbol::CirclePlus | MarkerSymbol::CirclePlusConnected => '\u{2296}',
        MarkerSymbol::VLine => '\u{2502}',
        MarkerSymbol::LCorner | MarkerSymbol::LCornerCurve => '\u{2514}',
        MarkerSymbol::TCorner | MarkerSymbol::TCornerCurve => '\u{251C}',
        MarkerSymbol::DotDotDot => '\u{22EF}',
        MarkerSymbol::Arrows => '\u{22D9}',
        MarkerSymbol::LeftRect => '\u{258E}',
        MarkerSymbol::Bookmark => '\u{2211}',
        MarkerSymbol::Bar => '\u{2590}',
        MarkerSymbol::Character(ch) => ch,
        MarkerSymbol::FullRect
        | MarkerSymbol::Background
        | MarkerSymbol::Pixmap
        | MarkerSymbol::Available
        | MarkerSymbol::Underline
        | MarkerSymbol::RgbaImage
        | MarkerSymbol::VerticalBookmark
        | MarkerSymbol::Unknown(_) => return None,
    };
    Some(glyph)
}

/// A margin marker as the engine hands it to the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineMarker {
    pub symbol: MarkerSymbol,
    pub fore: Rgba,
    pub back: Rgba,
}

impl LineMarker {
    #[must_use]
    pub const fn new(symbol: MarkerSymbol, fore: Rgba, back: Rgba) -> Self {
        Self { symbol, fore, back }
    }
}

impl Default for LineMarker {
    fn default() -> Self {
        Self::new(MarkerSymbol::Circle, Rgba::from_rgb(0xC0_C0_C0), Rgba::BLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_known_values() {
        assert_eq!(MarkerSymbol::from_raw(0), MarkerSymbol::Circle);
        assert_eq!(MarkerSymbol::from_raw(26), MarkerSymbol::FullRect);
        assert_eq!(MarkerSymbol::from_raw(33), MarkerSymbol::Bar);
        assert_eq!(MarkerSymbol::from_raw(34), MarkerSymbol::Unknown(34));
        assert_eq!(MarkerSymbol::from_raw(-1), MarkerSymbol::Unknown(-1));
    }

    #[test]
    fn test_character_marker_uses_embedded_char() {
        let symbol = MarkerSymbol::from_raw(CHARACTER_BASE + i32::from(b'x'));
        assert_eq!(symbol, MarkerSymbol::Character('x'));
        assert_eq!(glyph_for(symbol), Some('x'));
    }

    #[test]
    fn test_character_marker_keeps_full_scalar() {
        let symbol = MarkerSymbol::from_raw(CHARACTER_BASE + 0xE9);
        assert_eq!(glyph_for(symbol), Some('é'));
        let symbol = MarkerSymbol::from_raw(CHARACTER_BASE + 0x263A);
        assert_eq!(glyph_for(symbol), Some('☺'));
        // Surrogates are not characters.
        let raw = CHARACTER_BASE + 0xD800;
        assert_eq!(MarkerSymbol::from_raw(raw), MarkerSymbol::Unknown(raw));
        assert_eq!(glyph_for(MarkerSymbol::from_raw(raw)), None);
    }

    #[test]
    fn test_glyph_table_is_total() {
        for raw in -5..40 {
            let _ = glyph_for(MarkerSymbol::from_raw(raw));
        }
        assert_eq!(glyph_for(MarkerSymbol::Circle), Some('●'));
        assert_eq!(glyph_for(MarkerSymbol::BoxPlus), Some('⊞'));
        assert_eq!(glyph_for(MarkerSymbol::BoxMinusConnected), Some('⊟'));
        assert_eq!(glyph_for(MarkerSymbol::TCornerCurve), Some('├'));
        assert_eq!(glyph_for(MarkerSymbol::Empty), Some(' '));
    }

    #[test]
    fn test_non_glyph_symbols() {
        assert_eq!(glyph_for(MarkerSymbol::FullRect), None);
        assert_eq!(glyph_for(MarkerSymbol::Background), None);
        assert_eq!(glyph_for(MarkerSymbol::Unknown(99)), None);
    }
}
