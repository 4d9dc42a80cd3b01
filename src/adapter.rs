//! Host-facing entry points.
//!
//! [`Adapter`] ties an [`Engine`] to the [`Platform`] services it paints and
//! scrolls through. Hosts create one per editing view, forward terminal key
//! and mouse events to it, and call [`Adapter::refresh`] to repaint and
//! present.

use std::io::Write;
use std::panic::{self, AssertUnwindSafe};

use crate::color::Rgba;
use crate::engine::{Engine, Notification, message};
use crate::error::{Result, Status};
use crate::input::{InputRouter, KeyModifiers, printable_char};
use crate::options::AdapterOptions;
use crate::platform::{Notifier, Platform};
use crate::present::Presenter;

/// Default grid size when the host does not give one.
const DEFAULT_SIZE: (i32, i32) = (80, 24);

/// An editing engine hosted on a terminal cell grid.
pub struct Adapter<E: Engine> {
    pub(crate) engine: E,
    pub(crate) platform: Platform,
    pub(crate) router: InputRouter,
    presenter: Option<Presenter<Box<dyn Write>>>,
    status: Status,
    last_size: Option<(i32, i32)>,
}

impl<E: Engine + std::fmt::Debug> std::fmt::Debug for Adapter<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Adapter")
            .field("engine", &self.engine)
            .field("platform", &self.platform)
            .field("presenter", &self.presenter)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl<E: Engine> Adapter<E> {
    /// Host `engine` on an 80x24 grid.
    #[must_use]
    pub fn new(engine: E, options: AdapterOptions) -> Self {
        Self::with_size(engine, options, DEFAULT_SIZE.0, DEFAULT_SIZE.1)
    }

    /// Host `engine` on a `width` x `height` grid.
    #[must_use]
    pub fn with_size(engine: E, options: AdapterOptions, width: i32, height: i32) -> Self {
        Self {
            engine,
            platform: Platform::new(width, height, options),
            router: InputRouter::new(),
            presenter: None,
            status: Status::Ok,
            last_size: None,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    #[must_use]
    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut Platform {
        &mut self.platform
    }

    /// Present frames to `output` from now on.
    pub fn set_output(&mut self, output: Box<dyn Write>) {
        let color_mode = self.platform.options().color_mode;
        self.presenter = Some(Presenter::new(output, color_mode));
    }

    pub fn presenter_mut(&mut self) -> Option<&mut Presenter<Box<dyn Write>>> {
        self.presenter.as_mut()
    }

    /// Receive notifications the adapter and engine do not consume.
    pub fn set_notifier(&mut self, notifier: Notifier) {
        self.platform.set_notifier(notifier);
    }

    // =========================================================================
    // Messages
    // =========================================================================

    /// Dispatch a message to the engine.
    ///
    /// Engine errors and panics never reach the caller: they are recorded
    /// in [`status`](Self::status) and the call returns 0.
    pub fn send_message(&mut self, msg: u32, wparam: usize, lparam: isize) -> isize {
        if message::is_ignored(msg) {
            tracing::debug!(msg, "ignoring message");
            return 0;
        }

        let engine = &mut self.engine;
        let platform = &mut self.platform;
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            engine.wnd_proc(platform, msg, wparam, lparam)
        }));

        match result {
            Ok(Ok(value)) => value,
            Ok(Err(err)) => {
                self.status = Status::from_error(&err);
                tracing::warn!(msg, error = %err, status = ?self.status, "message failed");
                0
            }
            Err(payload) => {
                let reason = if let Some(s) = payload.downcast_ref::<&str>() {
                    (*s).to_string()
                } else if let Some(s) = payload.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "unknown panic".to_string()
                };
                self.status = Status::Failure;
                tracing::warn!(msg, %reason, "engine panicked while handling message");
                0
            }
        }
    }

    /// Status recorded by the last failed [`send_message`](Self::send_message).
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    pub fn clear_status(&mut self) {
        self.status = Status::Ok;
    }

    // =========================================================================
    // Keyboard & Clipboard
    // =========================================================================

    /// Forward a key; returns whether the engine or adapter consumed it.
    pub fn send_key(&mut self, key: i32, modifiers: KeyModifiers) -> bool {
        if self.engine.key_down(&mut self.platform, key, modifiers) {
            return true;
        }

        if modifiers.is_empty() {
            if let Some(ch) = printable_char(key) {
                if self.engine.is_unicode_mode() {
                    let mut utf8 = [0u8; 4];
                    let text = ch.encode_utf8(&mut utf8);
                    self.engine.insert_character(&mut self.platform, text.as_bytes());
                    return true;
                }
                if let Ok(byte) = u8::try_from(key) {
                    self.engine.insert_character(&mut self.platform, &[byte]);
                    return true;
                }
            }
        }

        self.platform.notify(Notification::Key { key, modifiers });
        false
    }

    /// Copy of the internal clipboard; may contain NUL bytes.
    #[must_use]
    pub fn clipboard(&self) -> Vec<u8> {
        self.platform.clipboard().to_vec()
    }

    // =========================================================================
    // Painting
    // =========================================================================

    /// Repaint the view, scrollbars, and popups, then present.
    pub fn refresh(&mut self) -> Result<()> {
        let window = self.platform.window();
        let size = (window.width(), window.height());
        if self.last_size != Some(size) {
            self.last_size = Some(size);
            self.engine.change_size(&mut self.platform);
        }

        let rc = window.position();
        self.engine.paint(&mut self.platform.surface(), rc);

        let top_line = self.engine.top_line();
        let max_scroll = self.engine.max_scroll_position();
        let lines = self.engine.lines_on_screen();
        let scroll_width = self.engine.scroll_width();
        self.platform
            .modify_scrollbars(max_scroll + lines - 1, lines, scroll_width);
        self.platform.set_vertical_scroll_pos(top_line, max_scroll, lines);
        self.platform
            .set_horizontal_scroll_pos(self.engine.x_offset(), scroll_width);

        if let Some(selection) = self.platform.list_box().map(|lb| lb.selection()) {
            self.platform.select_list_item(selection);
        } else if let Some(mut surface) = self.platform.call_tip_surface() {
            let clip = surface.window().map(|w| w.position());
            if let Some(clip) = clip {
                self.engine.paint_call_tip(&mut surface, clip);
            }
        }

        let cursor = if self.engine.has_focus() {
            self.engine.caret_point().and_then(|pt| {
                let (x, y) = (window.left + pt.x as i32, window.top + pt.y as i32);
                window.contains(x, y).then_some((x, y))
            })
        } else {
            None
        };
        self.platform.grid_mut().set_cursor(cursor);

        if let Some(presenter) = self.presenter.as_mut() {
            presenter.present(self.platform.grid())?;
        }
        Ok(())
    }

    /// Resize the main window in place, then clear and refresh.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<()> {
        self.platform.resize_window(width, height);
        self.platform.grid_mut().clear(Rgba::BLACK);
        self.refresh()
    }

    /// Follow a terminal size change: the grid takes the new size exactly
    /// and the main window shrinks to fit if it no longer does. Clears and
    /// refreshes; the next frame is a full repaint.
    pub fn resize_terminal(&mut self, width: i32, height: i32) -> Result<()> {
        self.platform.resize_grid(width, height);
        self.platform.grid_mut().clear(Rgba::BLACK);
        self.refresh()
    }

    /// Move the main window, then clear and refresh.
    pub fn move_to(&mut self, x: i32, y: i32) -> Result<()> {
        self.platform.move_window(x, y);
        self.platform.grid_mut().clear(Rgba::BLACK);
        self.refresh()
    }
}
