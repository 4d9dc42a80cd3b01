//! Scrollbar thumb geometry and drag state.
//!
//! Each axis keeps a thumb offset and length in cells along its track (the
//! main window's height for the vertical bar, its width for the horizontal
//! one). Geometry is recomputed whenever the engine's viewport or content
//! extent changes; the drag fields are only touched by the input router.

use crate::cell::Cell;
use crate::color::Rgba;
use crate::grid::CellGrid;
use crate::style::TextAttributes;
use crate::window::CellWindow;

/// Scrollbar orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

/// Where a track coordinate falls relative to the thumb.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThumbHit {
    Before,
    Thumb,
    After,
}

/// Thumb length for a viewport of `page` units over `total` units.
///
/// Always within `[1, track]`; an empty or fully visible document fills the
/// track.
#[must_use]
pub fn thumb_length(page: f64, total: f64, track: i32) -> i32 {
    let track = track.max(1);
    if total <= 0.0 || page >= total {
        return track;
    }
    ((page / total * f64::from(track)).round() as i32).clamp(1, track)
}

/// Thumb offset for a viewport starting at `offset` within `span` units.
#[must_use]
pub fn thumb_position(offset: f64, span: f64, track: i32) -> i32 {
    if span <= 0.0 {
        return 0;
    }
    ((offset / span * f64::from(track)).floor() as i32).max(0)
}

/// State of one scrollbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scrollbar {
    axis: Axis,
    thumb_pos: i32,
    thumb_len: i32,
    dragging: bool,
    drag_offset: i32,
}

impl Scrollbar {
    #[must_use]
    pub const fn new(axis: Axis) -> Self {
        Self {
            axis,
            thumb_pos: 0,
            thumb_len: 1,
            dragging: false,
            drag_offset: 0,
        }
    }

    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    #[must_use]
    pub const fn thumb_pos(&self) -> i32 {
        self.thumb_pos
    }

    #[must_use]
    pub const fn thumb_len(&self) -> i32 {
        self.thumb_len
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[must_use]
    pub const fn drag_offset(&self) -> i32 {
        self.drag_offset
    }

    /// Track length of this axis within `window`.
    #[must_use]
    pub const fn track(&self, window: &CellWindow) -> i32 {
        match self.axis {
            Axis::Vertical => window.height(),
            Axis::Horizontal => window.width(),
        }
    }

    /// Recompute the thumb length from the visible and total extents.
    pub fn set_extent(&mut self, page: f64, total: f64, track: i32) {
        self.thumb_len = thumb_length(page, total, track);
        tracing::debug!(axis = ?self.axis, page, total, track, len = self.thumb_len, "scrollbar extent");
    }

    /// Recompute the thumb offset from the scroll position.
    pub fn set_position(&mut self, offset: f64, span: f64, track: i32) {
        self.thumb_pos = thumb_position(offset, span, track);
    }

    /// Classify a track coordinate.
    #[must_use]
    pub const fn hit(&self, coord: i32) -> ThumbHit {
        if coord < self.thumb_pos {
            ThumbHit::Before
        } else if coord >= self.thumb_pos + self.thumb_len {
            ThumbHit::After
        } else {
            ThumbHit::Thumb
        }
    }

    /// Start dragging the thumb grabbed at `coord`.
    pub fn begin_drag(&mut self, coord: i32) {
        self.dragging = true;
        self.drag_offset = coord - self.thumb_pos;
    }

    /// Stop dragging; returns whether a drag was in progress.
    pub fn end_drag(&mut self) -> bool {
        std::mem::replace(&mut self.dragging, false)
    }

    /// Thumb offset for the pointer at `coord`, clamped to
    /// `[0, track - thumb_len]`, together with that upper bound.
    #[must_use]
    pub fn drag_target(&self, coord: i32, track: i32) -> (i32, i32) {
        let max = (track - self.thumb_len).max(0);
        ((coord - self.drag_offset).clamp(0, max), max)
    }

    /// Paint the gutter and thumb along the window's last column (vertical)
    /// or last row (horizontal).
    pub fn paint(&self, grid: &mut CellGrid, window: &CellWindow, gutter: Rgba, thumb: Rgba) {
        let track = self.track(window);
        for i in 0..track {
            let color = if self.hit(i) == ThumbHit::Thumb {
                thumb
            } else {
                gutter
            };
            let cell = Cell::new(' ', color, color, TextAttributes::empty());
            match self.axis {
                Axis::Vertical => grid.set(window.right, window.top + i, cell),
                Axis::Horizontal => grid.set(window.left + i, window.bottom, cell),
            }
        }
    }
}
