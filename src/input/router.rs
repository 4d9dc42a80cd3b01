//! Pointer routing between popups, scrollbars, and the engine.
//!
//! A pointer sequence runs press, moves, release. The press decides who
//! owns it: the list box, the call tip, a scrollbar (paging or starting a
//! thumb drag), or the engine's own hit testing. Moves continue a thumb
//! drag or become hover/drag events for the engine; the release ends any
//! thumb drag or hands the button-up to the engine when it captured the
//! mouse.

use crate::adapter::Adapter;
use crate::engine::Engine;
use crate::geometry::Point;
use crate::input::{MouseButton, MouseEvent, MouseEventKind};
use crate::popup::ListBoxEvent;
use crate::scrollbar::{Axis, ThumbHit};

/// Router state that outlives a single pointer sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputRouter {
    /// Time of the last press inside the list box.
    last_list_click: Option<u32>,
}

impl InputRouter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_list_click: None,
        }
    }

    /// Whether a list press at `time` follows the previous one closely
    /// enough to count as a double click.
    fn is_double_click(&self, time: u32, threshold_ms: u32) -> bool {
        self.last_list_click
            .is_some_and(|last| time.wrapping_sub(last) < threshold_ms)
    }
}

impl<E: Engine> Adapter<E> {
    /// Forward a mouse event in absolute screen cells; returns whether it
    /// was consumed.
    ///
    /// Presses outside the main window are ignored unless they are wheel
    /// steps. Moves and releases are always processed so drags that leave
    /// the window keep tracking.
    pub fn send_mouse(&mut self, event: MouseEvent) -> bool {
        let window = self.platform.window();
        if event.kind == MouseEventKind::Press
            && !event.is_wheel()
            && !window.contains(event.x, event.y)
        {
            return false;
        }

        let x = event.x - window.left;
        let y = event.y - window.top;
        match event.kind {
            MouseEventKind::Press => self.press(&event, x, y),
            MouseEventKind::Move => self.mouse_move(&event, x, y),
            MouseEventKind::Release => self.release(&event, x, y),
        }
    }

    fn press(&mut self, event: &MouseEvent, x: i32, y: i32) -> bool {
        let is_left = event.button == MouseButton::Left;
        if is_left || event.is_wheel() {
            if let Some(handled) = self.press_list_box(event) {
                return handled;
            }
        }
        if is_left && self.press_call_tip(event) {
            return true;
        }

        let window = self.platform.window();
        let options = *self.platform.options();
        match event.button {
            MouseButton::Left => {
                if options.vertical_scrollbar && x == window.width() - 1 {
                    let top_line = self.engine.top_line();
                    let page = self.engine.lines_on_screen();
                    match self.platform.vertical_scrollbar().hit(y) {
                        ThumbHit::Before => self.engine.scroll_to(&mut self.platform, top_line - page),
                        ThumbHit::After => self.engine.scroll_to(&mut self.platform, top_line + page),
                        ThumbHit::Thumb => self.platform.scrollbar_mut(Axis::Vertical).begin_drag(y),
                    }
                } else if options.horizontal_scrollbar && y == window.height() - 1 {
                    let x_offset = self.engine.x_offset();
                    let page = window.width() / 2;
                    match self.platform.horizontal_scrollbar().hit(x) {
                        ThumbHit::Before => {
                            self.engine
                                .horizontal_scroll_to(&mut self.platform, x_offset - page);
                        }
                        ThumbHit::After => {
                            self.engine
                                .horizontal_scroll_to(&mut self.platform, x_offset + page);
                        }
                        ThumbHit::Thumb => self.platform.scrollbar_mut(Axis::Horizontal).begin_drag(x),
                    }
                } else {
                    self.engine.button_down(
                        &mut self.platform,
                        Point::from_ints(x, y),
                        event.time,
                        event.modifiers,
                    );
                }
                true
            }
            MouseButton::WheelUp | MouseButton::WheelDown => {
                let mut lines = (window.height() / 4).max(1);
                if event.button == MouseButton::WheelUp {
                    lines = -lines;
                }
                let top_line = self.engine.top_line();
                self.engine.scroll_to(&mut self.platform, top_line + lines);
                true
            }
            MouseButton::Middle | MouseButton::Right => false,
        }
    }

    /// Route a press to the list box. `None` means the press is not the
    /// list's and routing continues.
    fn press_list_box(&mut self, event: &MouseEvent) -> Option<bool> {
        let list_box = self.platform.list_box()?;
        let lw = list_box.window()?;
        let rx = event.x - lw.left;
        let ry = event.y - lw.top;
        let (width, height) = (lw.width(), lw.height());

        if rx < -1 || ry < -1 || rx > width || ry > height {
            return None;
        }
        if rx < 0 || ry < 0 || rx == width || ry == height {
            // Border.
            return Some(true);
        }

        let selection = list_box.selection();
        let len = i32::try_from(list_box.len()).unwrap_or(i32::MAX);
        let first_row = list_box.viewport_start();
        match event.button {
            MouseButton::Left => {
                let n = first_row + ry;
                let threshold = self.platform.options().double_click_ms;
                if n < len {
                    if n == selection && self.router.is_double_click(event.time, threshold) {
                        tracing::debug!(n, "list double click");
                        if let Some(list_box) = self.platform.list_box_mut() {
                            list_box.notify(ListBoxEvent::DoubleClick);
                        }
                    } else {
                        self.platform.select_list_item(n);
                    }
                }
                self.router.last_list_click = Some(event.time);
            }
            MouseButton::WheelUp if selection > 0 => self.platform.select_list_item(selection - 1),
            MouseButton::WheelDown if selection < len - 1 => {
                self.platform.select_list_item(selection + 1);
            }
            _ => {}
        }
        Some(true)
    }

    /// Route a left press to the call tip; returns whether it hit.
    fn press_call_tip(&mut self, event: &MouseEvent) -> bool {
        let Some(cw) = self.platform.call_tip().and_then(|ct| ct.window()) else {
            return false;
        };
        if !cw.contains(event.x, event.y) {
            return false;
        }
        let pt = Point::from_ints(event.x - cw.left, event.y - cw.top);
        self.engine.call_tip_click(&mut self.platform, pt);
        true
    }

    fn mouse_move(&mut self, event: &MouseEvent, x: i32, y: i32) -> bool {
        let window = self.platform.window();
        let vertical = *self.platform.vertical_scrollbar();
        let horizontal = *self.platform.horizontal_scrollbar();

        if vertical.is_dragging() {
            let (pos, max) = vertical.drag_target(y, window.height());
            if max > 0 {
                let line = i64::from(pos) * i64::from(self.engine.max_scroll_position()) / i64::from(max);
                self.engine.scroll_to(&mut self.platform, clamp_i32(line));
            }
            return true;
        }
        if horizontal.is_dragging() {
            let (pos, max) = horizontal.drag_target(x, window.width());
            if max > 0 {
                let scrollable = (self.engine.scroll_width() - window.width()).max(0);
                let offset = i64::from(pos) * i64::from(scrollable) / i64::from(max);
                self.engine
                    .horizontal_scroll_to(&mut self.platform, clamp_i32(offset));
            }
            return true;
        }

        self.engine.button_move(
            &mut self.platform,
            Point::from_ints(x, y),
            event.time,
            event.modifiers,
        );
        self.platform.has_mouse_capture()
    }

    fn release(&mut self, event: &MouseEvent, x: i32, y: i32) -> bool {
        let was_vertical = self.platform.scrollbar_mut(Axis::Vertical).end_drag();
        let was_horizontal = self.platform.scrollbar_mut(Axis::Horizontal).end_drag();
        if was_vertical || was_horizontal {
            return true;
        }
        if self.platform.has_mouse_capture() {
            self.engine.button_up(
                &mut self.platform,
                Point::from_ints(x, y),
                event.time,
                event.modifiers,
            );
            return true;
        }
        false
    }
}

fn clamp_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_click_window() {
        let mut router = InputRouter::new();
        assert!(!router.is_double_click(100, 500));
        router.last_list_click = Some(100);
        assert!(router.is_double_click(599, 500));
        assert!(!router.is_double_click(600, 500));
        // Clock wrap between the two presses.
        router.last_list_click = Some(u32::MAX - 10);
        assert!(router.is_double_click(20, 500));
    }

    #[test]
    fn test_clamp_i32() {
        assert_eq!(clamp_i32(5), 5);
        assert_eq!(clamp_i32(i64::MAX), i32::MAX);
        assert_eq!(clamp_i32(i64::MIN), i32::MIN);
    }
}
