//! Child windows layered over the main view.
//!
//! The adapter has at most two popups open at once: the autocompletion
//! [`ListBox`] and the [`CallTipWindow`]. Both are placed relative to the
//! main window and clamped so they never extend past it.

mod call_tip;
mod list_box;

pub use call_tip::CallTipWindow;
pub use list_box::{IMAGE_MAX, ListBox, ListBoxDelegate, ListBoxEvent, ListColors, ListItem};

use crate::geometry::PRect;
use crate::window::CellWindow;

/// Absolute position for a popup wanting `rc` (relative to `parent`) so that
/// it fits inside the parent.
///
/// A popup wider than the parent is flush left; one overflowing the right
/// edge is flush right. One overflowing the bottom is flush bottom, and over
/// a single-row parent it moves one more row up so it sits above the parent
/// instead of covering it. The result never has a negative top.
#[must_use]
pub fn position_relative(rc: PRect, parent: &CellWindow) -> (i32, i32) {
    let mut x = (parent.left + rc.left as i32).max(parent.left);
    let mut y = (parent.top + rc.top as i32).max(parent.top);

    let size_x = (rc.right - rc.left) as i32;
    let size_y = (rc.bottom - rc.top) as i32;
    let parent_width = parent.width();
    let parent_height = parent.height();

    if size_x > parent_width {
        x = parent.left;
    } else if x + size_x > parent.left + parent_width {
        x = parent.left + parent_width - size_x;
    }
    if y + size_y > parent.top + parent_height {
        y = parent.top + parent_height - size_y;
        if parent_height == 1 {
            y -= 1;
        }
    }
    if y < 0 {
        y = parent.top;
    }

    tracing::debug!(x, y, size_x, size_y, "positioned popup");
    (x, y)
}

/// Move `window` to the position [`position_relative`] computes.
pub fn set_position_relative(window: &mut CellWindow, rc: PRect, parent: &CellWindow) {
    let (x, y) = position_relative(rc, parent);
    window.move_to(x, y);
}

/// Popup state owned by the adapter.
#[derive(Debug, Default)]
pub struct Popups {
    pub list_box: Option<ListBox>,
    pub call_tip: Option<CallTipWindow>,
}

impl Popups {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The list box, if one exists and has a window.
    #[must_use]
    pub fn active_list_box(&self) -> Option<&ListBox> {
        self.list_box.as_ref().filter(|lb| lb.window().is_some())
    }

    /// The call tip, if one is open.
    #[must_use]
    pub fn active_call_tip(&self) -> Option<&CallTipWindow> {
        self.call_tip.as_ref().filter(|ct| ct.window().is_some())
    }
}

/// Context menus have no terminal rendering; every operation is a no-op.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Menu;

impl Menu {
    pub fn create_pop_up(&mut self) {}

    pub fn show(&mut self, _x: i32, _y: i32, _parent: &CellWindow) {}

    pub fn destroy(&mut self) {}
}
