//! Keyboard input types.
//!
//! Keys travel as plain `i32` codes: Unicode scalar values for characters
//! and the values in [`keys`] for editing keys, the numbering the editing
//! engine's key map uses.

use bitflags::bitflags;

bitflags! {
    /// Keyboard modifier flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        /// Shift key.
        const SHIFT = 0b0000_0001;
        /// Control key.
        const CTRL = 0b0000_0010;
        /// Alt/Option key.
        const ALT = 0b0000_0100;
        /// Super/Windows key.
        const SUPER = 0b0000_1000;
        /// Meta key (distinct from Alt on some systems).
        const META = 0b0001_0000;
    }
}

impl KeyModifiers {
    /// Build from the three flags hosts usually track.
    #[must_use]
    pub fn from_flags(shift: bool, ctrl: bool, alt: bool) -> Self {
        let mut modifiers = Self::empty();
        modifiers.set(Self::SHIFT, shift);
        modifiers.set(Self::CTRL, ctrl);
        modifiers.set(Self::ALT, alt);
        modifiers
    }
}

/// Codes for non-character keys.
pub mod keys {
    pub const DOWN: i32 = 300;
    pub const UP: i32 = 301;
    pub const LEFT: i32 = 302;
    pub const RIGHT: i32 = 303;
    pub const HOME: i32 = 304;
    pub const END: i32 = 305;
    pub const PRIOR: i32 = 306;
    pub const NEXT: i32 = 307;
    pub const DELETE: i32 = 308;
    pub const INSERT: i32 = 309;
    pub const ESCAPE: i32 = 7;
    pub const BACK: i32 = 8;
    pub const TAB: i32 = 9;
    pub const RETURN: i32 = 13;
    pub const ADD: i32 = 310;
    pub const SUBTRACT: i32 = 311;
    pub const DIVIDE: i32 = 312;
    pub const WIN: i32 = 313;
    pub const RWIN: i32 = 314;
    pub const MENU: i32 = 315;

    /// Whether `key` names an editing key rather than a character.
    #[must_use]
    pub const fn is_special(key: i32) -> bool {
        matches!(key, DOWN..=MENU)
    }
}

/// The character `key` types, if it is a printable one.
#[must_use]
pub fn printable_char(key: i32) -> Option<char> {
    if keys::is_special(key) {
        return None;
    }
    u32::try_from(key)
        .ok()
        .and_then(char::from_u32)
        .filter(|ch| !ch.is_control())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags() {
        assert_eq!(KeyModifiers::from_flags(false, false, false), KeyModifiers::empty());
        assert_eq!(
            KeyModifiers::from_flags(true, false, true),
            KeyModifiers::SHIFT | KeyModifiers::ALT
        );
    }

    #[test]
    fn test_printable_char() {
        assert_eq!(printable_char('a' as i32), Some('a'));
        assert_eq!(printable_char('漢' as i32), Some('漢'));
        assert_eq!(printable_char(keys::RETURN), None);
        assert_eq!(printable_char(keys::LEFT), None);
        assert_eq!(printable_char(-1), None);
        assert_eq!(printable_char(0xD800), None);
    }
}
