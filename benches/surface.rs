//! Cell surface and presenter performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use termsurface::surface::{CellSurface, Surface};
use termsurface::{CellGrid, CellWindow, ColorMode, Font, PRect, Presenter, Rgba};

const LINE: &[u8] = "fn paint(&mut self, surface: &mut dyn Surface) { // 漢字 e\u{301}".as_bytes();

fn paint_view(grid: &mut CellGrid, offset: usize) {
    let (width, height) = grid.size();
    let window = CellWindow::with_size(0, 0, width, height);
    let mut surface = CellSurface::attached(grid, window);
    let font = Font::default();
    surface.fill_rectangle(window.position(), Rgba::BLACK);
    for row in 0..height {
        let top = f64::from(row);
        let rc = PRect::new(4.0, top, f64::from(width), top + 1.0);
        let start = (offset + row as usize) % 8;
        surface.draw_text_clipped(rc, &font, 0.0, &LINE[start..], Rgba::WHITE, Rgba::BLACK);
    }
}

fn draw_text(c: &mut Criterion) {
    let mut grid = CellGrid::new(80, 24);
    let window = CellWindow::new(0, 0, 79, 23);
    let font = Font::default();

    c.bench_function("draw_text_clipped_line", |b| {
        let mut surface = CellSurface::attached(&mut grid, window);
        b.iter(|| {
            surface.draw_text_clipped(
                PRect::from_ints(0, 5, 80, 6),
                &font,
                0.0,
                black_box(LINE),
                Rgba::WHITE,
                Rgba::BLACK,
            )
        });
    });

    c.bench_function("fill_rectangle_full_window", |b| {
        let mut surface = CellSurface::attached(&mut grid, window);
        b.iter(|| surface.fill_rectangle(black_box(PRect::from_ints(0, 0, 80, 24)), Rgba::BLUE));
    });

    c.bench_function("paint_view_80x24", |b| {
        b.iter(|| paint_view(black_box(&mut grid), 0));
    });
}

fn present(c: &mut Criterion) {
    let mut grid = CellGrid::new(80, 24);

    c.bench_function("present_full_80x24", |b| {
        let mut presenter = Presenter::new(std::io::sink(), ColorMode::TrueColor);
        paint_view(&mut grid, 0);
        b.iter(|| {
            presenter.invalidate();
            presenter.present(black_box(&grid)).unwrap();
        });
    });

    c.bench_function("present_scrolling_80x24", |b| {
        let mut presenter = Presenter::new(std::io::sink(), ColorMode::TrueColor);
        let mut offset = 0;
        b.iter(|| {
            offset += 1;
            paint_view(&mut grid, offset);
            presenter.present(black_box(&grid)).unwrap();
        });
    });
}

criterion_group!(benches, draw_text, present);
criterion_main!(benches);
