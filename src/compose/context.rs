//! Application context shared by every screen.

use std::cell::RefCell;
use std::rc::Rc;

use crate::input::{InputEvent, KeyCode, KeyModifiers};
use crate::layout::RegionLayout;
use crate::theme::{props, ThemeResolver};

/// Keys the composer reserves for itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keymap {
    /// Activates the menu bar from anywhere.
    pub open_menu: KeyCode,
    /// Modifier that turns a letter into a menu shortcut.
    pub shortcut_modifiers: KeyModifiers,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            open_menu: KeyCode::F(10),
            shortcut_modifiers: KeyModifiers::ALT,
        }
    }
}

impl Keymap {
    /// Whether `event` is the open-menu key.
    pub fn is_open_menu(&self, event: &InputEvent) -> bool {
        matches!(event.as_key(), Some((code, _)) if code == self.open_menu)
    }

    /// The letter of a menu shortcut, if `event` is one.
    pub fn shortcut_letter(&self, event: &InputEvent) -> Option<char> {
        match event.as_key()? {
            (KeyCode::Char(c), modifiers) if modifiers == self.shortcut_modifiers && c.is_alphanumeric() => Some(c),
            _ => None,
        }
    }
}

/// State every screen reads: where regions go, what colors mean, which
/// keys are reserved.
///
/// Created by the application before the first screen and dropped after
/// [`ScreenStack::shutdown`](super::ScreenStack::shutdown).
#[derive(Debug)]
pub struct AppContext {
    /// Region layout, standard regions included.
    pub regions: RegionLayout,
    /// Theme used by every widget.
    pub theme: ThemeResolver,
    /// Reserved keys.
    pub keymap: Keymap,
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Context handle held by each screen.
pub type SharedContext = Rc<RefCell<AppContext>>;

impl AppContext {
    /// Standard regions, the built-in theme and the default keymap.
    pub fn new() -> Self {
        Self {
            regions: RegionLayout::new(),
            theme: ThemeResolver::with_defaults(),
            keymap: Keymap::default(),
        }
    }

    /// Replace the theme.
    #[must_use]
    pub fn with_theme(mut self, theme: ThemeResolver) -> Self {
        self.theme = theme;
        self
    }

    /// Wrap the context for sharing between screens.
    pub fn shared(self) -> SharedContext {
        Rc::new(RefCell::new(self))
    }
}

/// Per-screen composer settings.
#[derive(Debug, Clone)]
pub struct ComposerConfig {
    /// Property painted behind content widgets.
    pub content_bg: String,
    /// Text color of render error markers.
    pub error_fg: String,
    /// Background of render error markers.
    pub error_bg: String,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            content_bg: props::CONTENT_BG.to_string(),
            error_fg: props::ERROR_FG.to_string(),
            error_bg: props::ERROR_BG.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keymap_defaults() {
        let keymap = Keymap::default();
        assert!(keymap.is_open_menu(&InputEvent::key(KeyCode::F(10))));
        assert!(!keymap.is_open_menu(&InputEvent::key(KeyCode::F(9))));

        let alt_f = InputEvent::key_with(KeyCode::Char('f'), KeyModifiers::ALT);
        assert_eq!(keymap.shortcut_letter(&alt_f), Some('f'));
        assert_eq!(keymap.shortcut_letter(&InputEvent::key(KeyCode::Char('f'))), None);
    }

    #[test]
    fn test_context_defaults() {
        let context = AppContext::new();
        assert!(context.regions.contains(crate::layout::regions::CONTENT));
        assert!(context.theme.contains(props::HEADER_BG));
    }
}
