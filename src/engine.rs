//! The editing engine the adapter renders and routes input for.
//!
//! The engine owns the document, layout, selection, and styling. It paints
//! through a [`Surface`] and reaches adapter services (popups, scrollbars,
//! the clipboard, notifications) through the [`Platform`] it is handed.

use crate::error::Result;
use crate::geometry::{PRect, Point};
use crate::input::KeyModifiers;
use crate::platform::Platform;
use crate::surface::Surface;

/// Events raised to the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    /// A key neither the engine nor the adapter consumed.
    Key { key: i32, modifiers: KeyModifiers },
    /// An engine notification passed through unchanged.
    Engine { code: u32, wparam: usize, lparam: isize },
}

/// Engine message numbers the adapter treats specially.
pub mod message {
    pub const SET_BUFFERED_DRAW: u32 = 2035;
    pub const SET_WHITESPACE_SIZE: u32 = 2086;
    pub const GET_DIRECT_FUNCTION: u32 = 2184;
    pub const GET_DIRECT_POINTER: u32 = 2185;
    pub const SET_EXTRA_ASCENT: u32 = 2525;
    pub const SET_EXTRA_DESCENT: u32 = 2527;
    pub const SET_PHASES_DRAW: u32 = 2674;

    /// Messages that configure pixel-level drawing or expose direct
    /// function pointers; on a cell grid they are answered with 0.
    #[must_use]
    pub const fn is_ignored(msg: u32) -> bool {
        matches!(
            msg,
            SET_BUFFERED_DRAW
                | SET_WHITESPACE_SIZE
                | GET_DIRECT_FUNCTION
                | GET_DIRECT_POINTER
                | SET_EXTRA_ASCENT
                | SET_EXTRA_DESCENT
                | SET_PHASES_DRAW
        )
    }
}

/// An editing engine driven by the adapter.
///
/// Points and rectangles are relative to the main window. Methods with a
/// default body are optional.
pub trait Engine {
    /// Paint the region `rc` of the main view.
    fn paint(&mut self, surface: &mut dyn Surface, rc: PRect);

    /// Paint the call tip's contents; the background is already filled.
    fn paint_call_tip(&mut self, _surface: &mut dyn Surface, _rc: PRect) {}

    /// The main window changed size.
    fn change_size(&mut self, _platform: &mut Platform) {}

    /// Handle a message sent through [`crate::Adapter::send_message`].
    fn wnd_proc(&mut self, platform: &mut Platform, msg: u32, wparam: usize, lparam: isize) -> Result<isize>;

    /// Offer a key to the engine's key map; returns whether it was consumed.
    fn key_down(&mut self, _platform: &mut Platform, _key: i32, _modifiers: KeyModifiers) -> bool {
        false
    }

    /// Insert typed text at the caret.
    fn insert_character(&mut self, platform: &mut Platform, text: &[u8]);

    fn is_unicode_mode(&self) -> bool {
        true
    }

    fn button_down(&mut self, _platform: &mut Platform, _pt: Point, _time: u32, _modifiers: KeyModifiers) {}

    fn button_move(&mut self, _platform: &mut Platform, _pt: Point, _time: u32, _modifiers: KeyModifiers) {}

    fn button_up(&mut self, _platform: &mut Platform, _pt: Point, _time: u32, _modifiers: KeyModifiers) {}

    /// A click at `pt`, relative to the call tip.
    fn call_tip_click(&mut self, _platform: &mut Platform, _pt: Point) {}

    /// Make `line` the first visible line.
    fn scroll_to(&mut self, platform: &mut Platform, line: i32);

    /// Scroll horizontally to column `x`.
    fn horizontal_scroll_to(&mut self, platform: &mut Platform, x: i32);

    fn top_line(&self) -> i32;

    fn x_offset(&self) -> i32 {
        0
    }

    fn max_scroll_position(&self) -> i32;

    fn lines_on_screen(&self) -> i32;

    /// Width of the widest line in columns.
    fn scroll_width(&self) -> i32 {
        1
    }

    /// Caret position, if it is on screen.
    fn caret_point(&self) -> Option<Point> {
        None
    }

    fn has_focus(&self) -> bool {
        true
    }
}
