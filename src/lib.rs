//! # Trellis
//!
//! Layout, theming and compositing core for console task and time-tracking
//! tools.
//!
//! Trellis sits between application screens and a terminal backend. It
//! decides where things go, what color they are, and in which order they
//! are drawn; the backend only has to flush cells.
//!
//! ## Core Concepts
//!
//! - **Named regions**: symbolic constraints (`"25%"`, `FILL`, `BOTTOM-2`) resolved per terminal size
//! - **Stacks**: flex-style distribution of fixed and stretching children along one axis
//! - **Theme properties**: solid colors and multi-stop gradients, resolved by name and cached
//! - **Z-ordered composition**: each screen draws its parts on explicit layers, isolating faults
//!
//! ## Example
//!
//! ```rust
//! use trellis::compose::{AppContext, ScreenComposer, ScreenStack};
//! use trellis::surface::BufferSurface;
//!
//! let mut stack = ScreenStack::new(AppContext::new().shared());
//! stack.resize(80, 24).unwrap();
//!
//! let mut home = ScreenComposer::new("Today", stack.context().clone());
//! home.status_bar_mut().set_left("3 tasks");
//! stack.push(home).unwrap();
//!
//! let mut surface = BufferSurface::new(80, 24);
//! stack.render(&mut surface);
//! assert!(surface.row_text(1).starts_with(" Today"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod compose;
pub mod error;
pub mod input;
pub mod layout;
pub mod surface;
pub mod theme;
pub mod widget;

// Re-exports for convenience
pub use buffer::{Buffer, Cell, Modifiers, Rgb};
pub use compose::{AppContext, ScreenComposer, ScreenStack, SharedContext, WidgetId};
pub use error::{DrawError, Error, LayoutError, Result, ThemeError};
pub use input::{InputEvent, KeyCode, KeyModifiers};
pub use layout::{solve_stack, Rect, RegionConstraint, RegionLayout, RegionSpec, StackConfig, StackItem};
pub use surface::{BufferSurface, CompositionSurface};
pub use theme::{Gradient, GradientDirection, GradientStop, ThemeConfig, ThemeProperty, ThemeResolver};
pub use widget::Widget;
