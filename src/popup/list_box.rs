//! The autocompletion list box.

use std::fmt;

use crate::cell::Cell;
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::PRect;
use crate::grid::CellGrid;
use crate::style::TextAttributes;
use crate::unicode::glyphs;
use crate::window::CellWindow;

/// Highest valid type index in the glyph registry.
pub const IMAGE_MAX: i32 = 31;

const REGISTRY_SLOTS: usize = IMAGE_MAX as usize + 1;

/// Notifications a list box sends to its delegate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListBoxEvent {
    SelectionChange,
    DoubleClick,
}

/// Receives [`ListBoxEvent`]s. Any `FnMut(ListBoxEvent)` qualifies.
pub trait ListBoxDelegate {
    fn list_notify(&mut self, event: ListBoxEvent);
}

impl<F: FnMut(ListBoxEvent)> ListBoxDelegate for F {
    fn list_notify(&mut self, event: ListBoxEvent) {
        self(event);
    }
}

/// Row colors for the list box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListColors {
    pub selected_fg: Rgba,
    pub selected_bg: Rgba,
    pub unselected_fg: Rgba,
    pub unselected_bg: Rgba,
}

impl Default for ListColors {
    fn default() -> Self {
        Self {
            selected_fg: Rgba::from_rgb(0x38_38_38),
            selected_bg: Rgba::from_rgb(0x7C_AF_C2),
            unselected_fg: Rgba::from_rgb(0xD8_D8_D8),
            unselected_bg: Rgba::from_rgb(0x38_38_38),
        }
    }
}

impl ListColors {
    const fn pair(&self, selected: bool) -> (Rgba, Rgba) {
        if selected {
            (self.selected_fg, self.selected_bg)
        } else {
            (self.unselected_fg, self.unselected_bg)
        }
    }
}

/// One entry: the type glyph shown in the first column and the item text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListItem {
    pub glyph: char,
    pub text: String,
    /// Type index the item was appended with, or -1.
    pub type_index: i32,
}

/// Scrolling list of completion candidates.
///
/// The box shows `visible_rows` items at a time, keeping the selection
/// centered where the list allows. Its width grows to fit the longest item
/// plus two columns for the type glyph.
pub struct ListBox {
    window: Option<CellWindow>,
    items: Vec<ListItem>,
    types: [char; REGISTRY_SLOTS],
    visible_rows: i32,
    width: i32,
    selection: i32,
    delegate: Option<Box<dyn ListBoxDelegate>>,
    colors: ListColors,
}

impl fmt::Debug for ListBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListBox")
            .field("window", &self.window)
            .field("items", &self.items.len())
            .field("visible_rows", &self.visible_rows)
            .field("width", &self.width)
            .field("selection", &self.selection)
            .field("has_delegate", &self.delegate.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for ListBox {
    fn default() -> Self {
        Self::new(5, 10, ListColors::default())
    }
}

impl ListBox {
    #[must_use]
    pub fn new(visible_rows: i32, width: i32, colors: ListColors) -> Self {
        Self {
            window: None,
            items: Vec::new(),
            types: [' '; REGISTRY_SLOTS],
            visible_rows: visible_rows.max(1),
            width: width.max(0),
            selection: 0,
            delegate: None,
            colors,
        }
    }

    /// Attach a minimal window; showing the list sizes it.
    pub fn create(&mut self) {
        self.window = Some(CellWindow::new(0, 0, 1, 1));
    }

    /// Release the window. Items survive until [`ListBox::clear`].
    pub fn destroy(&mut self) {
        self.window = None;
    }

    #[must_use]
    pub const fn window(&self) -> Option<CellWindow> {
        self.window
    }

    pub fn set_delegate(&mut self, delegate: Box<dyn ListBoxDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn set_visible_rows(&mut self, rows: i32) {
        self.visible_rows = rows.max(1);
        if let Some(win) = self.window.as_mut() {
            win.bottom = win.top + self.visible_rows - 1;
        }
    }

    #[must_use]
    pub const fn visible_rows(&self) -> i32 {
        self.visible_rows
    }

    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Size the engine should reserve for the box.
    #[must_use]
    pub fn desired_rect(&self) -> PRect {
        PRect::from_ints(0, 0, self.width, self.visible_rows)
    }

    /// Columns between the box's left edge and the caret.
    #[must_use]
    pub const fn caret_from_edge(&self) -> i32 {
        2
    }

    /// Remove every item and reset the width.
    pub fn clear(&mut self) {
        self.items.clear();
        self.width = 0;
    }

    /// Append `text` with the glyph registered for `type_index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] if the item list cannot grow.
    pub fn append(&mut self, text: &str, type_index: i32) -> Result<()> {
        let glyph = self.glyph_for_type(type_index);
        self.items.try_reserve(1).map_err(|_| Error::OutOfMemory {
            requested: std::mem::size_of::<ListItem>(),
        })?;
        self.items.push(ListItem {
            glyph,
            text: text.to_owned(),
            type_index,
        });

        let len = i32::try_from(text.len()).unwrap_or(i32::MAX - 2);
        self.width = self.width.max(len + 2);
        if let Some(win) = self.window.as_mut() {
            win.right = win.left + self.width - 1;
            win.bottom = win.top + self.visible_rows - 1;
        }
        Ok(())
    }

    /// Replace the items with the entries of `text`.
    ///
    /// Entries are split on `separator`; a trailing `type_separator` and
    /// number give the entry's type (parsed leniently, so `"x/"` is type 0).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] if the item list cannot grow.
    pub fn set_list(&mut self, text: &str, separator: char, type_separator: char) -> Result<()> {
        self.clear();
        for entry in text.split(separator) {
            match entry.rfind(type_separator) {
                Some(at) => {
                    let type_index = parse_leading_int(&entry[at + type_separator.len_utf8()..]);
                    self.append(&entry[..at], type_index)?;
                }
                None => self.append(entry, -1)?,
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    /// Item text, without its type glyph.
    #[must_use]
    pub fn value(&self, n: usize) -> Option<&str> {
        self.items.get(n).map(|item| item.text.as_str())
    }

    #[must_use]
    pub fn item_type(&self, n: usize) -> Option<i32> {
        self.items.get(n).map(|item| item.type_index)
    }

    /// Index of the first item whose text starts with `prefix`.
    #[must_use]
    pub fn find(&self, prefix: &str) -> Option<usize> {
        self.items.iter().position(|item| item.text.starts_with(prefix))
    }

    /// Register the first character of `glyph` for `type_index`.
    pub fn register_image(&mut self, type_index: i32, glyph: &str) {
        let Some(slot) = registry_slot(type_index) else {
            return;
        };
        if let Some(ch) = glyph.chars().next() {
            self.types[slot] = ch;
        }
    }

    /// Reset every registered glyph to a space.
    pub fn clear_registered_images(&mut self) {
        self.types = [' '; REGISTRY_SLOTS];
    }

    fn glyph_for_type(&self, type_index: i32) -> char {
        registry_slot(type_index).map_or(' ', |slot| self.types[slot])
    }

    #[must_use]
    pub const fn selection(&self) -> i32 {
        self.selection
    }

    /// First item shown for the current selection.
    #[must_use]
    pub fn viewport_start(&self) -> i32 {
        self.viewport_for(self.selection)
    }

    fn viewport_for(&self, n: i32) -> i32 {
        let len = i32::try_from(self.items.len()).unwrap_or(i32::MAX);
        let mut start = n - self.visible_rows / 2;
        if start + self.visible_rows > len {
            start = len - self.visible_rows;
        }
        start.max(0)
    }

    /// Select item `n`, repaint, and tell the delegate.
    ///
    /// `n` is stored as given; only the viewport is kept within the list.
    pub fn select(&mut self, n: i32, grid: &mut CellGrid) {
        self.paint(n, grid);
        self.selection = n;
        tracing::debug!(selection = n, items = self.items.len(), "list box select");
        self.notify(ListBoxEvent::SelectionChange);
    }

    /// Send `event` to the delegate, if any.
    pub fn notify(&mut self, event: ListBoxEvent) {
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.list_notify(event);
        }
    }

    fn paint(&self, n: i32, grid: &mut CellGrid) {
        let Some(win) = self.window else {
            return;
        };
        let start = self.viewport_for(n);
        for row in 0..self.visible_rows {
            let index = start + row;
            let (fg, bg) = self.colors.pair(index == n);
            let y = win.top + row;
            let blank = Cell::new(' ', fg, bg, TextAttributes::empty());

            let item = usize::try_from(index).ok().and_then(|i| self.items.get(i));
            let mut x = 0;
            if let Some(item) = item {
                grid.set(win.left, y, Cell::new(item.glyph, fg, bg, TextAttributes::empty()));
                x = 1;
                for glyph in glyphs(item.text.as_bytes(), grid.width_method()) {
                    let advance = glyph.width as i32;
                    if x + advance > self.width {
                        break;
                    }
                    grid.set(win.left + x, y, Cell::new(glyph.ch, fg, bg, TextAttributes::empty()));
                    x += advance;
                }
            }
            for col in x..self.width {
                grid.set(win.left + col, y, blank);
            }
        }
    }

    /// Move the window to fit `rc` inside `parent`.
    pub fn set_position_relative(&mut self, rc: PRect, parent: &CellWindow) {
        if let Some(win) = self.window.as_mut() {
            super::set_position_relative(win, rc, parent);
        }
    }
}

fn registry_slot(type_index: i32) -> Option<usize> {
    if (0..=IMAGE_MAX).contains(&type_index) {
        usize::try_from(type_index).ok()
    } else {
        None
    }
}

/// Leading optional sign and digits of `s`, or 0.
fn parse_leading_int(s: &str) -> i32 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let mut value: i32 = 0;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value.saturating_mul(10).saturating_add(i32::from(byte - b'0'));
    }
    if negative { -value } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn shown(items: &[&str]) -> ListBox {
        let mut lb = ListBox::new(3, 0, ListColors::default());
        lb.create();
        for item in items {
            lb.append(item, -1).unwrap();
        }
        lb
    }

    // =========================================================================
    // Content
    // =========================================================================

    #[test]
    fn test_append_grows_width_and_window() {
        let mut lb = ListBox::new(4, 0, ListColors::default());
        lb.create();
        lb.append("abc", -1).unwrap();
        assert_eq!(lb.width(), 5);
        lb.append("a", -1).unwrap();
        assert_eq!(lb.width(), 5);
        lb.append("abcdefgh", -1).unwrap();
        assert_eq!(lb.width(), 10);
        assert_eq!(lb.window(), Some(CellWindow::new(0, 0, 9, 3)));
        assert_eq!(lb.desired_rect(), PRect::from_ints(0, 0, 10, 4));
        // Glyph column plus separator.
        assert_eq!(lb.caret_from_edge(), 2);
    }

    #[test]
    fn test_set_list_parses_types() {
        let mut lb = ListBox::default();
        lb.set_list("a/1|b/2|c", '|', '/').unwrap();
        let values: Vec<_> = (0..3).filter_map(|i| lb.value(i)).collect();
        assert_eq!(values, vec!["a", "b", "c"]);
        let types: Vec<_> = (0..3).filter_map(|i| lb.item_type(i)).collect();
        assert_eq!(types, vec![1, 2, -1]);
    }

    #[test]
    fn test_set_list_lenient_type_numbers() {
        let mut lb = ListBox::default();
        lb.set_list("x/|y/a/7|z/3q", ' ', '/').unwrap();
        assert_eq!(lb.len(), 1);
        lb.set_list("x/ y/a/7 z/3q", ' ', '/').unwrap();
        assert_eq!(lb.value(0), Some("x"));
        assert_eq!(lb.item_type(0), Some(0));
        assert_eq!(lb.value(1), Some("y/a"));
        assert_eq!(lb.item_type(1), Some(7));
        assert_eq!(lb.item_type(2), Some(3));
    }

    #[test]
    fn test_set_list_replaces_items() {
        let mut lb = ListBox::default();
        lb.set_list("one,two", ',', '?').unwrap();
        lb.set_list("three", ',', '?').unwrap();
        assert_eq!(lb.len(), 1);
        assert_eq!(lb.width(), 7);
    }

    #[test]
    fn test_find_prefix() {
        let lb = shown(&["apple", "banana", "band"]);
        assert_eq!(lb.find("ban"), Some(1));
        assert_eq!(lb.find("band"), Some(2));
        assert_eq!(lb.find("cherry"), None);
        assert_eq!(lb.find(""), Some(0));
    }

    #[test]
    fn test_registered_glyphs() {
        let mut lb = ListBox::default();
        lb.register_image(1, "*x");
        lb.register_image(3, "■");
        lb.register_image(32, "!");
        lb.register_image(-1, "!");
        lb.append("a", 1).unwrap();
        lb.append("b", 3).unwrap();
        lb.append("c", 2).unwrap();
        lb.append("d", 40).unwrap();
        let glyphs: Vec<char> = lb.items().iter().map(|item| item.glyph).collect();
        assert_eq!(glyphs, vec!['*', '■', ' ', ' ']);

        lb.clear_registered_images();
        lb.append("e", 1).unwrap();
        assert_eq!(lb.items()[4].glyph, ' ');
    }

    #[test]
    fn test_clear_resets_width() {
        let mut lb = shown(&["abc"]);
        lb.clear();
        assert!(lb.is_empty());
        assert_eq!(lb.width(), 0);
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("12"), 12);
        assert_eq!(parse_leading_int("  -4x"), -4);
        assert_eq!(parse_leading_int("x"), 0);
        assert_eq!(parse_leading_int(""), 0);
    }

    // =========================================================================
    // Selection
    // =========================================================================

    #[test]
    fn test_viewport_centers_selection() {
        let mut grid = CellGrid::new(20, 10);
        let mut lb = shown(&["a", "b", "c", "d", "e", "f", "g"]);
        lb.select(0, &mut grid);
        assert_eq!(lb.viewport_start(), 0);
        lb.select(3, &mut grid);
        assert_eq!(lb.viewport_start(), 2);
        lb.select(6, &mut grid);
        assert_eq!(lb.viewport_start(), 4);
    }

    #[test]
    fn test_select_out_of_range_keeps_viewport_in_list() {
        let mut grid = CellGrid::new(20, 10);
        let mut lb = shown(&["a", "b", "c"]);
        lb.set_visible_rows(2);
        lb.select(10, &mut grid);
        assert_eq!(lb.selection(), 10);
        assert_eq!(lb.viewport_start(), 1);
    }

    #[test]
    fn test_select_paints_rows() {
        let mut grid = CellGrid::new(12, 5);
        let mut lb = shown(&["foo", "bar"]);
        lb.register_image(0, "+");
        lb.append("baz", 0).unwrap();
        lb.select(1, &mut grid);

        let colors = ListColors::default();
        assert_eq!(&grid.row_text(0)[..5], " foo ");
        assert_eq!(&grid.row_text(1)[..5], " bar ");
        assert_eq!(&grid.row_text(2)[..5], "+baz ");
        assert_eq!(grid.get(0, 1).map(|c| c.bg), Some(colors.selected_bg));
        assert_eq!(grid.get(4, 1).map(|c| c.fg), Some(colors.selected_fg));
        assert_eq!(grid.get(4, 0).map(|c| c.bg), Some(colors.unselected_bg));
        // Nothing painted past the list width.
        assert_eq!(grid.get(5, 0).map(|c| c.bg), Some(Rgba::BLACK));
    }

    #[test]
    fn test_rows_past_end_are_blank() {
        let mut grid = CellGrid::new(12, 5);
        let mut lb = shown(&["only"]);
        lb.select(0, &mut grid);
        assert_eq!(&grid.row_text(1)[..6], "      ");
        assert_eq!(grid.get(0, 2).map(|c| c.bg), Some(ListColors::default().unselected_bg));
    }

    #[test]
    fn test_select_notifies_delegate() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let mut lb = shown(&["a", "b"]);
        lb.set_delegate(Box::new(move |event| sink.borrow_mut().push(event)));
        let mut grid = CellGrid::new(10, 5);
        lb.select(1, &mut grid);
        lb.notify(ListBoxEvent::DoubleClick);
        assert_eq!(
            *events.borrow(),
            vec![ListBoxEvent::SelectionChange, ListBoxEvent::DoubleClick]
        );
    }

    #[test]
    fn test_select_without_window_only_records() {
        let mut grid = CellGrid::new(10, 5);
        let before = grid.clone();
        let mut lb = ListBox::default();
        lb.append("a", -1).unwrap();
        lb.select(0, &mut grid);
        assert_eq!(lb.selection(), 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_position_relative_moves_window() {
        let mut lb = shown(&["abcd"]);
        assert_eq!(lb.window(), Some(CellWindow::new(0, 0, 5, 2)));
        lb.set_position_relative(PRect::from_ints(4, 2, 10, 5), &CellWindow::new(0, 0, 39, 9));
        assert_eq!(lb.window(), Some(CellWindow::new(4, 2, 9, 4)));
        lb.destroy();
        assert_eq!(lb.window(), None);
    }
}
