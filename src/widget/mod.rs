//! Widget module: the `Widget` trait and the standard screen chrome.
//!
//! Every screen owns one [`MenuBar`], [`Header`], [`Footer`] and
//! [`StatusBar`]; application widgets go in the content area, optionally
//! grouped with a [`StackPanel`]. Widgets draw through a
//! [`CompositionSurface`](crate::surface::CompositionSurface) and take
//! their colors from a [`ThemeResolver`](crate::theme::ThemeResolver) by
//! property name, so a theme reload restyles every screen.
//!
//! # Example
//!
//! ```rust
//! use trellis::layout::Rect;
//! use trellis::surface::BufferSurface;
//! use trellis::theme::ThemeResolver;
//! use trellis::widget::{StatusBar, Widget};
//!
//! let theme = ThemeResolver::with_defaults();
//! let mut surface = BufferSurface::new(40, 1);
//! let mut status = StatusBar::new();
//! status.set_bounds(Rect::new(0, 0, 40, 1));
//! status.set_left("ready");
//! status.draw(&mut surface, &theme).unwrap();
//! assert!(surface.row_text(0).starts_with("ready"));
//! ```

mod footer;
mod header;
mod menu_bar;
mod stack_panel;
mod status_bar;
mod traits;

pub use footer::{Footer, KeyHint};
pub use header::Header;
pub use menu_bar::{Menu, MenuBar, MenuItem};
pub use stack_panel::StackPanel;
pub use status_bar::{StatusBar, StatusBarConfig};
pub use traits::{fill_background, fit_width, text_width, Widget};
