//! `termsurface` - a character-cell backend for a pixel-oriented text
//! editing engine.
//!
//! The engine (document model, layout, styling, selection) is external and
//! plugs in through the [`Engine`] trait. This crate supplies what it needs
//! to live in a terminal: a [`CellGrid`] every window draws into, a
//! [`surface::Surface`] that maps pixel rectangles and UTF-8 runs onto
//! cells, scrollbars, autocompletion and call-tip popups, pointer routing,
//! and a diffing [`Presenter`] that writes frames as ANSI output.
//!
//! # Quick Start
//!
//! ```no_run
//! use termsurface::{Adapter, AdapterOptions, Engine, Platform, PRect, Rgba, Result};
//! use termsurface::surface::Surface;
//!
//! struct Blank;
//!
//! impl Engine for Blank {
//!     fn paint(&mut self, surface: &mut dyn Surface, rc: PRect) {
//!         surface.fill_rectangle(rc, Rgba::BLACK);
//!     }
//!     fn wnd_proc(&mut self, _: &mut Platform, _: u32, _: usize, _: isize) -> Result<isize> {
//!         Ok(0)
//!     }
//!     fn insert_character(&mut self, _: &mut Platform, _: &[u8]) {}
//!     fn scroll_to(&mut self, _: &mut Platform, _: i32) {}
//!     fn horizontal_scroll_to(&mut self, _: &mut Platform, _: i32) {}
//!     fn top_line(&self) -> i32 { 0 }
//!     fn max_scroll_position(&self) -> i32 { 0 }
//!     fn lines_on_screen(&self) -> i32 { 24 }
//! }
//!
//! fn main() -> Result<()> {
//!     let mut adapter = Adapter::new(Blank, AdapterOptions::default());
//!     adapter.set_output(Box::new(std::io::stdout()));
//!     adapter.refresh()
//! }
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)] // Unsafe code needs justification (required for terminal ioctls)
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::cast_sign_loss)] // Intentional coordinate conversions
#![allow(clippy::cast_precision_loss)] // Intentional for width math
#![allow(clippy::cast_possible_wrap)] // Intentional coordinate conversions
#![allow(clippy::module_name_repetitions)] // Allow ListBox::ListBoxEvent etc
#![allow(clippy::struct_excessive_bools)] // Options carry several toggles
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::too_many_arguments)] // Surface text calls mirror the engine's

pub mod adapter;
pub mod ansi;
pub mod cell;
pub mod color;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod input;
pub mod marker;
pub mod options;
pub mod platform;
pub mod popup;
pub mod present;
pub mod scrollbar;
pub mod style;
pub mod surface;
pub mod terminal;
pub mod unicode;
pub mod window;

// Re-export core types at crate root
pub use cell::Cell;
pub use color::Rgba;
pub use error::{Error, Result, Status};
pub use geometry::{PRect, Point};
pub use grid::CellGrid;
pub use style::{Font, FontParameters, FontWeight, TextAttributes};
pub use window::CellWindow;

// Re-export the engine boundary
pub use adapter::Adapter;
pub use engine::{Engine, Notification};
pub use options::AdapterOptions;
pub use platform::Platform;

// Re-export input types
pub use input::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind, keys};

// Re-export output types
pub use ansi::ColorMode;
pub use present::{PresentStats, Presenter};
pub use terminal::{is_tty, terminal_size};
pub use unicode::WidthMethod;
