//! Fuzz target for drawing arbitrary bytes through a cell surface.
//!
//! Malformed UTF-8, odd rectangles, and clip regions must never panic or
//! write outside the target window.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use termsurface::surface::{CellSurface, Surface};
use termsurface::{Cell, CellGrid, CellWindow, Font, PRect, Rgba};

#[derive(Arbitrary, Debug)]
struct Input {
    text: Vec<u8>,
    left: i8,
    top: i8,
    right: i8,
    clip_left: i8,
    fractional: bool,
}

fuzz_target!(|input: Input| {
    let mut grid = CellGrid::new(16, 6);
    let sentinel = Cell::clear(Rgba::RED);
    grid.clear(Rgba::RED);
    let window = CellWindow::new(2, 1, 11, 4);

    {
        let mut surface = CellSurface::attached(&mut grid, window);
        let left = f64::from(input.left) + if input.fractional { 0.5 } else { 0.0 };
        let rc = PRect::new(left, f64::from(input.top), f64::from(input.right), f64::from(input.top) + 1.0);
        surface.set_clip(PRect::new(f64::from(input.clip_left), 0.0, 10.0, 4.0));
        surface.draw_text_clipped(rc, &Font::default(), 0.0, &input.text, Rgba::WHITE, Rgba::BLACK);
        surface.draw_text_transparent(rc, &Font::default(), 0.0, &input.text, Rgba::WHITE);
        surface.fill_rectangle(rc, Rgba::BLUE);
        let _ = surface.width_text(&Font::default(), &input.text);
    }

    for (x, y, cell) in grid.iter_cells() {
        if !window.contains(x, y) {
            assert_eq!(*cell, sentinel, "write outside window at ({x}, {y})");
        }
    }
});
