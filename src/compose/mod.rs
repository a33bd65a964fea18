//! Compose module: screens, their lifecycle, and the context they share.
//!
//! A [`ScreenComposer`] is one screen: chrome plus content widgets, laid
//! out from the [`AppContext`] regions and painted with its theme. A
//! [`ScreenStack`] holds the screens the user navigated through and keeps
//! exactly the top one active.

mod composer;
mod context;
mod stack;

pub use composer::{ScreenComposer, WidgetId};
pub use context::{AppContext, ComposerConfig, Keymap, SharedContext};
pub use stack::ScreenStack;
