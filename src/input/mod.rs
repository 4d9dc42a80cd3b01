//! Host input: key codes, mouse events, and pointer routing.
//!
//! Hosts decode their terminal's input themselves and hand the adapter
//! [`MouseEvent`]s in absolute screen cells plus key codes with
//! [`KeyModifiers`]. The router decides whether a pointer event belongs to a
//! popup, a scrollbar, or the editing engine.

mod keyboard;
mod mouse;
mod router;

pub use keyboard::{KeyModifiers, keys, printable_char};
pub use mouse::{MouseButton, MouseEvent, MouseEventKind};
pub use router::InputRouter;
