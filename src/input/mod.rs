//! Input module: events screens and widgets react to.
//!
//! Events are independent of the terminal library; [`InputEvent::from_crossterm`]
//! converts from crossterm.

mod convert;
mod event;

pub use event::{InputEvent, KeyCode, KeyModifiers, MouseButton, MouseEvent};
