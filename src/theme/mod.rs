//! Theme module: symbolic color properties resolved to concrete colors.
//!
//! - [`ThemeProperty`]: a solid color or a multi-stop [`Gradient`]
//! - [`ThemeResolver`]: name lookup with palette fallback and a color cache
//! - [`ThemeConfig`]: the serializable form of a theme

mod config;
mod defaults;
mod property;
mod resolver;

pub use config::{PropertyConfig, StopConfig, ThemeConfig};
pub use defaults::STANDARD_PROPERTIES;
pub use property::{Gradient, GradientDirection, GradientStop, ThemeProperty};
pub use resolver::ThemeResolver;

/// Property names resolved by the standard widgets.
pub mod props {
    /// Menu bar text.
    pub const MENU_BAR_FG: &str = "MenuBar.Foreground";
    /// Menu bar background.
    pub const MENU_BAR_BG: &str = "MenuBar.Background";
    /// Shortcut letter of a menu title.
    pub const MENU_BAR_HOTKEY: &str = "MenuBar.Hotkey";
    /// Selected menu title or item text.
    pub const MENU_SELECTED_FG: &str = "Menu.Selected.Foreground";
    /// Selected menu title or item background.
    pub const MENU_SELECTED_BG: &str = "Menu.Selected.Background";
    /// Dropdown item text.
    pub const MENU_FG: &str = "Menu.Foreground";
    /// Dropdown background.
    pub const MENU_BG: &str = "Menu.Background";
    /// Dropdown border.
    pub const MENU_BORDER: &str = "Menu.Border";
    /// Header title text.
    pub const HEADER_FG: &str = "Header.Foreground";
    /// Header background.
    pub const HEADER_BG: &str = "Header.Background";
    /// Content area text.
    pub const CONTENT_FG: &str = "Content.Foreground";
    /// Content area background.
    pub const CONTENT_BG: &str = "Content.Background";
    /// Footer hint text.
    pub const FOOTER_FG: &str = "Footer.Foreground";
    /// Footer background.
    pub const FOOTER_BG: &str = "Footer.Background";
    /// Footer key labels.
    pub const FOOTER_KEY: &str = "Footer.Key";
    /// Status bar background.
    pub const STATUS_BG: &str = "StatusBar.Background";
    /// Status bar left section.
    pub const STATUS_LEFT: &str = "StatusBar.Left";
    /// Status bar center section.
    pub const STATUS_CENTER: &str = "StatusBar.Center";
    /// Status bar right section.
    pub const STATUS_RIGHT: &str = "StatusBar.Right";
    /// Render error marker text.
    pub const ERROR_FG: &str = "Error.Foreground";
    /// Render error marker background.
    pub const ERROR_BG: &str = "Error.Background";
}
