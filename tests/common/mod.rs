//! Shared fixtures for integration tests: a recording engine and helpers.

#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry
#![allow(dead_code)] // Not every test binary uses every helper

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use termsurface::surface::Surface;
use termsurface::{
    Adapter, AdapterOptions, Engine, Error, Font, KeyModifiers, Notification, PRect, Platform,
    Point, Result, Rgba,
};

pub const VIEW_BACKGROUND: Rgba = Rgba::from_rgb(0x10_10_10);

/// An engine callback observed by [`RecordingEngine`].
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    ChangeSize,
    ButtonDown(Point, u32),
    ButtonMove(Point),
    ButtonUp(Point, u32),
    CallTipClick(Point),
    ScrollTo(i32),
    HorizontalScrollTo(i32),
    Insert(Vec<u8>),
    Message(u32),
}

/// A scriptable engine that paints its lines and records every callback.
#[derive(Debug)]
pub struct RecordingEngine {
    pub calls: Vec<Call>,
    pub lines: Vec<String>,
    pub top_line: i32,
    pub x_offset: i32,
    pub lines_on_screen: i32,
    pub scroll_width: i32,
    /// Take the mouse capture on button-down.
    pub capture_on_press: bool,
    /// Keys the engine's key map consumes.
    pub bound_keys: Vec<i32>,
    pub caret: Option<Point>,
    pub focused: bool,
    pub call_tip_text: String,
}

impl RecordingEngine {
    pub fn new(lines: usize, lines_on_screen: i32) -> Self {
        Self {
            calls: Vec::new(),
            lines: (0..lines).map(|i| format!("line {i}")).collect(),
            top_line: 0,
            x_offset: 0,
            lines_on_screen,
            scroll_width: 40,
            capture_on_press: false,
            bound_keys: Vec::new(),
            caret: None,
            focused: true,
            call_tip_text: "tip".to_string(),
        }
    }

    pub fn scrolls(&self) -> Vec<i32> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::ScrollTo(line) => Some(*line),
                _ => None,
            })
            .collect()
    }

    pub fn horizontal_scrolls(&self) -> Vec<i32> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::HorizontalScrollTo(x) => Some(*x),
                _ => None,
            })
            .collect()
    }
}

impl Engine for RecordingEngine {
    fn paint(&mut self, surface: &mut dyn Surface, rc: PRect) {
        surface.fill_rectangle(rc, VIEW_BACKGROUND);
        for row in 0..self.lines_on_screen {
            let Some(line) = usize::try_from(self.top_line + row)
                .ok()
                .and_then(|i| self.lines.get(i))
            else {
                break;
            };
            let top = f64::from(row);
            surface.draw_text_no_clip(
                PRect::new(0.0, top, rc.right, top + 1.0),
                &Font::default(),
                0.0,
                line.as_bytes(),
                Rgba::WHITE,
                VIEW_BACKGROUND,
            );
        }
    }

    fn paint_call_tip(&mut self, surface: &mut dyn Surface, rc: PRect) {
        surface.draw_text_clipped(
            rc,
            &Font::default(),
            0.0,
            self.call_tip_text.as_bytes(),
            Rgba::BLACK,
            Rgba::from_rgb(0xFF_FF_C6),
        );
    }

    fn change_size(&mut self, _platform: &mut Platform) {
        self.calls.push(Call::ChangeSize);
    }

    fn wnd_proc(&mut self, platform: &mut Platform, msg: u32, wparam: usize, _lparam: isize) -> Result<isize> {
        self.calls.push(Call::Message(msg));
        match msg {
            // Copy
            2178 => platform.copy_to_clipboard(b"copied\0text", wparam != 0).map(|()| 0),
            // Line count
            2154 => Ok(self.lines.len() as isize),
            // Out of memory on demand
            9000 => Err(Error::OutOfMemory { requested: wparam }),
            9001 => panic!("engine bug"),
            _ => Ok(0),
        }
    }

    fn key_down(&mut self, _platform: &mut Platform, key: i32, _modifiers: KeyModifiers) -> bool {
        self.bound_keys.contains(&key)
    }

    fn insert_character(&mut self, _platform: &mut Platform, text: &[u8]) {
        self.calls.push(Call::Insert(text.to_vec()));
    }

    fn button_down(&mut self, platform: &mut Platform, pt: Point, time: u32, _modifiers: KeyModifiers) {
        self.calls.push(Call::ButtonDown(pt, time));
        if self.capture_on_press {
            platform.set_mouse_capture(true);
        }
    }

    fn button_move(&mut self, _platform: &mut Platform, pt: Point, _time: u32, _modifiers: KeyModifiers) {
        self.calls.push(Call::ButtonMove(pt));
    }

    fn button_up(&mut self, platform: &mut Platform, pt: Point, time: u32, _modifiers: KeyModifiers) {
        self.calls.push(Call::ButtonUp(pt, time));
        platform.set_mouse_capture(false);
    }

    fn call_tip_click(&mut self, _platform: &mut Platform, pt: Point) {
        self.calls.push(Call::CallTipClick(pt));
    }

    fn scroll_to(&mut self, _platform: &mut Platform, line: i32) {
        self.calls.push(Call::ScrollTo(line));
        self.top_line = line.clamp(0, self.max_scroll_position());
    }

    fn horizontal_scroll_to(&mut self, _platform: &mut Platform, x: i32) {
        self.calls.push(Call::HorizontalScrollTo(x));
        self.x_offset = x.max(0);
    }

    fn top_line(&self) -> i32 {
        self.top_line
    }

    fn x_offset(&self) -> i32 {
        self.x_offset
    }

    fn max_scroll_position(&self) -> i32 {
        (self.lines.len() as i32 - self.lines_on_screen).max(0)
    }

    fn lines_on_screen(&self) -> i32 {
        self.lines_on_screen
    }

    fn scroll_width(&self) -> i32 {
        self.scroll_width
    }

    fn caret_point(&self) -> Option<Point> {
        self.caret
    }

    fn has_focus(&self) -> bool {
        self.focused
    }
}

/// An adapter over a `width` x `height` grid whose engine has `lines` lines
/// and shows a full window of them.
pub fn adapter(width: i32, height: i32, lines: usize) -> Adapter<RecordingEngine> {
    adapter_with(AdapterOptions::default(), width, height, lines)
}

pub fn adapter_with(
    options: AdapterOptions,
    width: i32,
    height: i32,
    lines: usize,
) -> Adapter<RecordingEngine> {
    Adapter::with_size(RecordingEngine::new(lines, height), options, width, height)
}

/// Notifications collected from an adapter.
pub fn collect_notifications(adapter: &mut Adapter<RecordingEngine>) -> Rc<RefCell<Vec<Notification>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    adapter.set_notifier(Box::new(move |n| sink.borrow_mut().push(n)));
    seen
}

/// A writer that can be handed to the adapter as `Box<dyn Write>` while the
/// test keeps reading what was written.
#[derive(Clone, Debug, Default)]
pub struct SharedOutput(pub Rc<RefCell<Vec<u8>>>);

impl SharedOutput {
    pub fn take(&self) -> Vec<u8> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

impl Write for SharedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
