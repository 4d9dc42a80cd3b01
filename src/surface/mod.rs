//! Drawing surfaces the editing engine paints through.
//!
//! The engine speaks in fractional "pixel" rectangles and byte runs of
//! UTF-8. On a cell grid one pixel is one cell, text is one cell per scalar,
//! and most vector operations have no meaningful rendering. [`Surface`]
//! captures the whole capability set with those operations defaulting to
//! no-ops and the font metrics fixed at one cell.
//!
//! Two implementations exist:
//!
//! - [`CellSurface`]: draws into a [`crate::CellGrid`] through a target window
//! - [`PatternSurface`]: a pixmap placeholder that only remembers a fill color

mod cell;
mod pattern;

pub use cell::CellSurface;
pub use pattern::PatternSurface;

use crate::color::Rgba;
use crate::geometry::{PRect, Point};
use crate::marker::LineMarker;
use crate::style::Font;
use crate::unicode::{WidthMethod, measure_run, text_width};

/// Optional capabilities a surface may report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feature {
    LineDrawsFinal,
    PixelDivisions,
    FractionalStrokeWidth,
    TranslucentStroke,
    PixelModification,
    ThreadSafeMeasureWidths,
}

/// One stop of a gradient fill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub position: f64,
    pub color: Rgba,
}

fn unsupported(op: &'static str) {
    tracing::trace!(op, "no cell rendering");
}

/// The drawing interface the editing engine renders through.
///
/// Coordinates are relative to the surface's target window.
pub trait Surface {
    /// Install a clip rectangle for subsequent text drawing.
    fn set_clip(&mut self, rc: PRect);

    /// Clear the clip rectangle.
    fn pop_clip(&mut self);

    /// Fill `rc` with a solid color.
    fn fill_rectangle(&mut self, rc: PRect, fill: Rgba);

    /// Fill `rc` from a pattern surface, using its remembered color or black.
    fn fill_rectangle_pattern(&mut self, rc: PRect, pattern: &dyn Surface) {
        let fill = pattern.pattern_color().unwrap_or(Rgba::BLACK);
        self.fill_rectangle(rc, fill);
    }

    /// Color recorded by a pattern placeholder, if this is one and it has
    /// been filled.
    fn pattern_color(&self) -> Option<Rgba> {
        None
    }

    /// Draw `text` without clipping to `rc` (the clip rectangle still applies).
    fn draw_text_no_clip(
        &mut self,
        rc: PRect,
        font: &Font,
        ybase: f64,
        text: &[u8],
        fore: Rgba,
        back: Rgba,
    );

    /// Draw `text` clipped to `rc`.
    fn draw_text_clipped(
        &mut self,
        rc: PRect,
        font: &Font,
        ybase: f64,
        text: &[u8],
        fore: Rgba,
        back: Rgba,
    );

    /// Draw `text` over whatever background is already there.
    fn draw_text_transparent(&mut self, rc: PRect, font: &Font, ybase: f64, text: &[u8], fore: Rgba);

    /// Fill `positions` with the running column count after each byte of `text`.
    ///
    /// Only `min(positions.len(), text.len())` entries are written.
    fn measure_widths(&mut self, _font: &Font, text: &[u8], positions: &mut [f64]) {
        for (slot, columns) in positions.iter_mut().zip(measure_run(text, self.width_method())) {
            *slot = columns as f64;
        }
    }

    /// Total width of `text` in columns.
    fn width_text(&mut self, _font: &Font, text: &[u8]) -> f64 {
        text_width(text, self.width_method()) as f64
    }

    /// How ambiguous-width characters are measured on this surface.
    fn width_method(&self) -> WidthMethod {
        WidthMethod::default()
    }

    /// Fill a polygon. Only call-tip arrows have a cell rendering.
    fn polygon(&mut self, _pts: &[Point], _fill: Rgba, _stroke: Rgba) {
        unsupported("polygon");
    }

    /// Draw a margin marker into `rc`.
    fn draw_line_marker(&mut self, _rc: PRect, _font: &Font, _marker: &LineMarker) {
        unsupported("draw_line_marker");
    }

    fn draw_wrap_marker(&mut self, _rc: PRect, _is_end_marker: bool, _color: Rgba) {
        unsupported("draw_wrap_marker");
    }

    fn draw_tab_arrow(&mut self, _rc: PRect) {
        unsupported("draw_tab_arrow");
    }

    fn line_draw(&mut self, _start: Point, _end: Point, _stroke: Rgba) {
        unsupported("line_draw");
    }

    fn polyline(&mut self, _pts: &[Point], _stroke: Rgba) {
        unsupported("polyline");
    }

    fn rectangle_draw(&mut self, _rc: PRect, _fill: Rgba, _stroke: Rgba) {
        unsupported("rectangle_draw");
    }

    fn rectangle_frame(&mut self, _rc: PRect, _stroke: Rgba) {
        unsupported("rectangle_frame");
    }

    fn rounded_rectangle(&mut self, _rc: PRect, _fill: Rgba, _stroke: Rgba) {
        unsupported("rounded_rectangle");
    }

    fn alpha_rectangle(&mut self, _rc: PRect, _corner_size: f64, _fill: Rgba, _stroke: Rgba) {
        unsupported("alpha_rectangle");
    }

    fn gradient_rectangle(&mut self, _rc: PRect, _stops: &[ColorStop]) {
        unsupported("gradient_rectangle");
    }

    fn draw_rgba_image(&mut self, _rc: PRect, _width: i32, _height: i32, _pixels: &[u8]) {
        unsupported("draw_rgba_image");
    }

    fn ellipse(&mut self, _rc: PRect, _fill: Rgba, _stroke: Rgba) {
        unsupported("ellipse");
    }

    fn stadium(&mut self, _rc: PRect, _fill: Rgba, _stroke: Rgba) {
        unsupported("stadium");
    }

    fn copy(&mut self, _rc: PRect, _from: Point, _source: &dyn Surface) {
        unsupported("copy");
    }

    fn flush_cached_state(&mut self) {}

    fn flush_drawing(&mut self) {}

    fn ascent(&self, _font: &Font) -> f64 {
        0.0
    }

    fn descent(&self, _font: &Font) -> f64 {
        0.0
    }

    fn internal_leading(&self, _font: &Font) -> f64 {
        0.0
    }

    fn height(&self, _font: &Font) -> f64 {
        1.0
    }

    fn average_char_width(&self, _font: &Font) -> f64 {
        1.0
    }

    fn log_pixels_y(&self) -> i32 {
        1
    }

    fn pixel_divisions(&self) -> i32 {
        1
    }

    fn device_height_font(&self, _points: i32) -> i32 {
        1
    }

    fn supports_feature(&self, _feature: Feature) -> bool {
        false
    }

    fn initialised(&self) -> bool {
        true
    }
}
