//! Adapter configuration.

use crate::ansi::ColorMode;
use crate::color::Rgba;
use crate::popup::ListColors;
use crate::unicode::WidthMethod;

/// Tunables for an [`crate::Adapter`].
///
/// # Examples
///
/// ```
/// use termsurface::{AdapterOptions, Rgba};
///
/// let options = AdapterOptions::default()
///     .with_double_click_ms(300)
///     .with_horizontal_scrollbar(true)
///     .with_call_tip_background(Rgba::WHITE);
/// assert_eq!(options.double_click_ms, 300);
/// assert!(options.vertical_scrollbar);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdapterOptions {
    /// Longest gap between two list clicks that still counts as a double click.
    pub double_click_ms: u32,
    pub vertical_scrollbar: bool,
    pub horizontal_scrollbar: bool,
    pub scrollbar_gutter: Rgba,
    pub scrollbar_thumb: Rgba,
    pub list_colors: ListColors,
    /// Rows a new list box shows.
    pub list_rows: i32,
    /// Starting width of a new list box; items widen it.
    pub list_width: i32,
    pub call_tip_background: Rgba,
    pub width_method: WidthMethod,
    pub color_mode: ColorMode,
}

impl Default for AdapterOptions {
    fn default() -> Self {
        Self {
            double_click_ms: 500,
            vertical_scrollbar: true,
            horizontal_scrollbar: false,
            scrollbar_gutter: Rgba::from_rgb(0x28_28_28),
            scrollbar_thumb: Rgba::from_rgb(0xD8_D8_D8),
            list_colors: ListColors::default(),
            list_rows: 5,
            list_width: 10,
            call_tip_background: Rgba::from_rgb(0xFF_FF_C6),
            width_method: WidthMethod::WcWidth,
            color_mode: ColorMode::TrueColor,
        }
    }
}

impl AdapterOptions {
    #[must_use]
    pub fn with_double_click_ms(mut self, ms: u32) -> Self {
        self.double_click_ms = ms;
        self
    }

    #[must_use]
    pub fn with_vertical_scrollbar(mut self, enabled: bool) -> Self {
        self.vertical_scrollbar = enabled;
        self
    }

    #[must_use]
    pub fn with_horizontal_scrollbar(mut self, enabled: bool) -> Self {
        self.horizontal_scrollbar = enabled;
        self
    }

    #[must_use]
    pub fn with_scrollbar_colors(mut self, gutter: Rgba, thumb: Rgba) -> Self {
        self.scrollbar_gutter = gutter;
        self.scrollbar_thumb = thumb;
        self
    }

    #[must_use]
    pub fn with_list_colors(mut self, colors: ListColors) -> Self {
        self.list_colors = colors;
        self
    }

    #[must_use]
    pub fn with_list_size(mut self, rows: i32, width: i32) -> Self {
        self.list_rows = rows;
        self.list_width = width;
        self
    }

    #[must_use]
    pub fn with_call_tip_background(mut self, color: Rgba) -> Self {
        self.call_tip_background = color;
        self
    }

    #[must_use]
    pub fn with_width_method(mut self, method: WidthMethod) -> Self {
        self.width_method = method;
        self
    }

    #[must_use]
    pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }
}
