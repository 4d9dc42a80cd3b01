//! Adapter services available to the editing engine.

use std::fmt;

use crate::color::Rgba;
use crate::engine::Notification;
use crate::error::{Error, Result};
use crate::geometry::PRect;
use crate::grid::CellGrid;
use crate::options::AdapterOptions;
use crate::popup::{CallTipWindow, ListBox, Menu, Popups};
use crate::scrollbar::{Axis, Scrollbar, thumb_position};
use crate::surface::{CellSurface, PatternSurface};
use crate::window::CellWindow;

/// Callback receiving [`Notification`]s.
pub type Notifier = Box<dyn FnMut(Notification)>;

/// Everything the adapter owns besides the engine itself.
///
/// Engine callbacks get `&mut Platform` so they can open popups, update the
/// scrollbars, copy to the clipboard, capture the mouse, and notify the
/// host while the adapter is driving them.
pub struct Platform {
    grid: CellGrid,
    window: CellWindow,
    popups: Popups,
    menu: Menu,
    vertical: Scrollbar,
    horizontal: Scrollbar,
    clipboard: Vec<u8>,
    clipboard_rectangular: bool,
    mouse_captured: bool,
    options: AdapterOptions,
    notifier: Option<Notifier>,
}

impl fmt::Debug for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Platform")
            .field("window", &self.window)
            .field("popups", &self.popups)
            .field("vertical", &self.vertical)
            .field("horizontal", &self.horizontal)
            .field("clipboard_len", &self.clipboard.len())
            .field("mouse_captured", &self.mouse_captured)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Platform {
    /// A platform whose main window covers a `width` x `height` grid.
    #[must_use]
    pub fn new(width: i32, height: i32, options: AdapterOptions) -> Self {
        let grid = CellGrid::new(width, height).with_width_method(options.width_method);
        let (width, height) = grid.size();
        Self {
            grid,
            window: CellWindow::with_size(0, 0, width, height),
            popups: Popups::new(),
            menu: Menu,
            vertical: Scrollbar::new(Axis::Vertical),
            horizontal: Scrollbar::new(Axis::Horizontal),
            clipboard: Vec::new(),
            clipboard_rectangular: false,
            mouse_captured: false,
            options,
            notifier: None,
        }
    }

    // =========================================================================
    // Grid & Windows
    // =========================================================================

    #[must_use]
    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut CellGrid {
        &mut self.grid
    }

    /// The main window.
    #[must_use]
    pub fn window(&self) -> CellWindow {
        self.window
    }

    #[must_use]
    pub fn options(&self) -> &AdapterOptions {
        &self.options
    }

    /// Resize the main window in place, growing the grid to cover it.
    pub fn resize_window(&mut self, width: i32, height: i32) {
        self.window.set_size(width.max(1), height.max(1));
        self.cover_window();
    }

    /// Move the main window, growing the grid to cover it.
    pub fn move_window(&mut self, x: i32, y: i32) {
        self.window.move_to(x.max(0), y.max(0));
        self.cover_window();
    }

    /// Resize the grid to the terminal's size, shrinking the main window
    /// to fit inside it.
    pub fn resize_grid(&mut self, width: i32, height: i32) {
        self.grid.resize(width, height);
        let (width, height) = self.grid.size();
        let left = self.window.left.min(width - 1);
        let top = self.window.top.min(height - 1);
        let window_width = self.window.width().min(width - left);
        let window_height = self.window.height().min(height - top);
        self.window.move_to(left, top);
        self.window.set_size(window_width, window_height);
    }

    fn cover_window(&mut self) {
        let (width, height) = self.grid.size();
        let needed_width = width.max(self.window.right + 1);
        let needed_height = height.max(self.window.bottom + 1);
        self.grid.resize(needed_width, needed_height);
    }

    /// A surface drawing into the main window.
    pub fn surface(&mut self) -> CellSurface<'_> {
        CellSurface::attached(&mut self.grid, self.window)
    }

    /// A pixmap placeholder of the given size.
    #[must_use]
    pub fn pattern_surface(&self, width: i32, height: i32) -> PatternSurface {
        PatternSurface::new(width, height)
    }

    #[must_use]
    pub fn menu(&self) -> Menu {
        self.menu
    }

    // =========================================================================
    // List Box
    // =========================================================================

    /// Replace any list box with a fresh, empty one.
    pub fn create_list_box(&mut self) -> &mut ListBox {
        let mut list_box = ListBox::new(
            self.options.list_rows,
            self.options.list_width,
            self.options.list_colors,
        );
        list_box.create();
        self.popups.list_box.insert(list_box)
    }

    /// The list box, if one is showing.
    #[must_use]
    pub fn list_box(&self) -> Option<&ListBox> {
        self.popups.active_list_box()
    }

    pub fn list_box_mut(&mut self) -> Option<&mut ListBox> {
        self.popups.list_box.as_mut().filter(|lb| lb.window().is_some())
    }

    /// Place the list box for `rc`, relative to the main window.
    pub fn position_list_box(&mut self, rc: PRect) {
        let parent = self.window;
        if let Some(list_box) = self.list_box_mut() {
            list_box.set_position_relative(rc, &parent);
        }
    }

    /// Select item `n` and repaint the list.
    pub fn select_list_item(&mut self, n: i32) {
        if let Some(list_box) = self.popups.list_box.as_mut().filter(|lb| lb.window().is_some()) {
            list_box.select(n, &mut self.grid);
        }
    }

    pub fn close_list_box(&mut self) {
        if let Some(mut list_box) = self.popups.list_box.take() {
            list_box.destroy();
        }
    }

    // =========================================================================
    // Call Tip
    // =========================================================================

    /// Open the call tip for `rc` (absolute cells). An open tip keeps its
    /// window.
    pub fn open_call_tip(&mut self, rc: PRect) {
        let background = self.options.call_tip_background;
        let parent = self.window;
        self.popups
            .call_tip
            .get_or_insert_with(|| CallTipWindow::new(background))
            .create(rc, &parent);
    }

    #[must_use]
    pub fn call_tip(&self) -> Option<&CallTipWindow> {
        self.popups.active_call_tip()
    }

    pub fn set_call_tip_background(&mut self, color: Rgba) {
        self.options.call_tip_background = color;
        if let Some(call_tip) = self.popups.call_tip.as_mut() {
            call_tip.set_background(color);
        }
    }

    pub fn close_call_tip(&mut self) {
        if let Some(mut call_tip) = self.popups.call_tip.take() {
            call_tip.destroy();
        }
    }

    /// Fill the call tip's background and return a surface over it.
    pub fn call_tip_surface(&mut self) -> Option<CellSurface<'_>> {
        let call_tip = self.popups.active_call_tip()?;
        let window = call_tip.window()?;
        call_tip.paint_background(&mut self.grid);
        Some(CellSurface::attached(&mut self.grid, window))
    }

    // =========================================================================
    // Scrollbars
    // =========================================================================

    #[must_use]
    pub fn vertical_scrollbar(&self) -> &Scrollbar {
        &self.vertical
    }

    #[must_use]
    pub fn horizontal_scrollbar(&self) -> &Scrollbar {
        &self.horizontal
    }

    pub(crate) fn scrollbar_mut(&mut self, axis: Axis) -> &mut Scrollbar {
        match axis {
            Axis::Vertical => &mut self.vertical,
            Axis::Horizontal => &mut self.horizontal,
        }
    }

    /// Recompute thumb lengths for a document of `n_max` lines showing
    /// `n_page` at once, and lines up to `scroll_width` columns wide.
    pub fn modify_scrollbars(&mut self, n_max: i32, n_page: i32, scroll_width: i32) -> bool {
        let height = self.window.height();
        let width = self.window.width();
        self.vertical.set_extent(f64::from(n_page), f64::from(n_max), height);
        self.horizontal.set_extent(f64::from(width), f64::from(scroll_width), width);
        true
    }

    /// Position and paint the vertical bar for `top_line`.
    pub fn set_vertical_scroll_pos(&mut self, top_line: i32, max_scroll: i32, lines_on_screen: i32) {
        if !self.options.vertical_scrollbar {
            return;
        }
        let span = f64::from(max_scroll) + f64::from(lines_on_screen) - 1.0;
        let track = self.window.height();
        self.vertical.set_position(f64::from(top_line), span, track);
        self.vertical.paint(
            &mut self.grid,
            &self.window,
            self.options.scrollbar_gutter,
            self.options.scrollbar_thumb,
        );
    }

    /// Position and paint the horizontal bar for `x_offset`.
    pub fn set_horizontal_scroll_pos(&mut self, x_offset: i32, scroll_width: i32) {
        if !self.options.horizontal_scrollbar {
            return;
        }
        let track = self.window.width();
        self.horizontal.set_position(f64::from(x_offset), f64::from(scroll_width), track);
        self.horizontal.paint(
            &mut self.grid,
            &self.window,
            self.options.scrollbar_gutter,
            self.options.scrollbar_thumb,
        );
    }

    /// Thumb offset the vertical bar would have for `top_line`.
    #[must_use]
    pub fn vertical_thumb_for(&self, top_line: i32, max_scroll: i32, lines_on_screen: i32) -> i32 {
        let span = f64::from(max_scroll) + f64::from(lines_on_screen) - 1.0;
        thumb_position(f64::from(top_line), span, self.window.height())
    }

    // =========================================================================
    // Clipboard, Capture & Notifications
    // =========================================================================

    /// Replace the internal clipboard with `text`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] if the copy cannot be allocated; the
    /// previous contents are kept.
    pub fn copy_to_clipboard(&mut self, text: &[u8], rectangular: bool) -> Result<()> {
        let mut copy = Vec::new();
        copy.try_reserve_exact(text.len())
            .map_err(|_| Error::OutOfMemory { requested: text.len() })?;
        copy.extend_from_slice(text);
        self.clipboard = copy;
        self.clipboard_rectangular = rectangular;
        Ok(())
    }

    #[must_use]
    pub fn clipboard(&self) -> &[u8] {
        &self.clipboard
    }

    #[must_use]
    pub fn clipboard_is_rectangular(&self) -> bool {
        self.clipboard_rectangular
    }

    pub fn set_mouse_capture(&mut self, on: bool) {
        self.mouse_captured = on;
    }

    #[must_use]
    pub fn has_mouse_capture(&self) -> bool {
        self.mouse_captured
    }

    pub fn set_notifier(&mut self, notifier: Notifier) {
        self.notifier = Some(notifier);
    }

    /// Pass `notification` to the host, if it registered a callback.
    pub fn notify(&mut self, notification: Notification) {
        match self.notifier.as_mut() {
            Some(notifier) => notifier(notification),
            None => tracing::trace!(?notification, "notification without a listener"),
        }
    }
}
