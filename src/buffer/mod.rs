//! Buffer module: the in-memory cell grid behind [`crate::surface::BufferSurface`].
//!
//! - [`Cell`]: one terminal cell
//! - [`Buffer`]: a grid of cells with per-cell layer ownership
//! - [`Rgb`]: true-color representation
//! - [`Modifiers`]: text style bitflags

mod cell;
#[allow(clippy::module_inception)]
mod buffer;

pub use cell::{Cell, Modifiers, Rgb};
pub use buffer::Buffer;
