//! Pixmap placeholder.

use super::Surface;
use crate::color::Rgba;
use crate::geometry::PRect;
use crate::style::Font;

/// Stand-in for an off-screen pixmap.
///
/// A cell grid cannot hold pixel patterns. The engine fills a pixmap with a
/// color and later uses it as a fill pattern, so the placeholder records the
/// last solid fill and hands it back through [`Surface::pattern_color`].
/// Text drawing on it does nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PatternSurface {
    width: i32,
    height: i32,
    color: Option<Rgba>,
}

impl PatternSurface {
    /// Allocation never fails; no pixel storage is reserved.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        tracing::debug!(width, height, "allocating pattern placeholder");
        Self {
            width,
            height,
            color: None,
        }
    }

    #[must_use]
    pub const fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }
}

impl Surface for PatternSurface {
    fn set_clip(&mut self, _rc: PRect) {}

    fn pop_clip(&mut self) {}

    fn fill_rectangle(&mut self, _rc: PRect, fill: Rgba) {
        self.color = Some(fill);
    }

    fn pattern_color(&self) -> Option<Rgba> {
        self.color
    }

    fn draw_text_no_clip(
        &mut self,
        _rc: PRect,
        _font: &Font,
        _ybase: f64,
        _text: &[u8],
        _fore: Rgba,
        _back: Rgba,
    ) {
    }

    fn draw_text_clipped(
        &mut self,
        _rc: PRect,
        _font: &Font,
        _ybase: f64,
        _text: &[u8],
        _fore: Rgba,
        _back: Rgba,
    ) {
    }

    fn draw_text_transparent(
        &mut self,
        _rc: PRect,
        _font: &Font,
        _ybase: f64,
        _text: &[u8],
        _fore: Rgba,
    ) {
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_records_color() {
        let mut pixmap = PatternSurface::new(8, 8);
        assert_eq!(pixmap.pattern_color(), None);
        pixmap.fill_rectangle(PRect::from_ints(0, 0, 8, 8), Rgba::RED);
        pixmap.fill_rectangle(PRect::from_ints(0, 0, 1, 1), Rgba::BLUE);
        assert_eq!(pixmap.pattern_color(), Some(Rgba::BLUE));
        assert_eq!(pixmap.size(), (8, 8));
    }

    #[test]
    fn test_pattern_fill_between_placeholders() {
        let mut source = PatternSurface::new(1, 1);
        source.fill_rectangle(PRect::default(), Rgba::GREEN);
        let mut target = PatternSurface::new(1, 1);
        target.fill_rectangle_pattern(PRect::default(), &source);
        assert_eq!(target.pattern_color(), Some(Rgba::GREEN));

        let blank = PatternSurface::new(1, 1);
        target.fill_rectangle_pattern(PRect::default(), &blank);
        assert_eq!(target.pattern_color(), Some(Rgba::BLACK));
    }
}
