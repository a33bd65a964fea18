//! Built-in theme used until the application loads its own.

use super::props;
use super::property::{Gradient, GradientDirection, GradientStop, ThemeProperty};
use crate::buffer::Rgb;

/// Every property the standard widgets resolve.
pub const STANDARD_PROPERTIES: &[&str] = &[
    props::MENU_BAR_FG,
    props::MENU_BAR_BG,
    props::MENU_BAR_HOTKEY,
    props::MENU_SELECTED_FG,
    props::MENU_SELECTED_BG,
    props::MENU_FG,
    props::MENU_BG,
    props::MENU_BORDER,
    props::HEADER_FG,
    props::HEADER_BG,
    props::CONTENT_FG,
    props::CONTENT_BG,
    props::FOOTER_FG,
    props::FOOTER_BG,
    props::FOOTER_KEY,
    props::STATUS_BG,
    props::STATUS_LEFT,
    props::STATUS_CENTER,
    props::STATUS_RIGHT,
    props::ERROR_FG,
    props::ERROR_BG,
];

const fn solid(r: u8, g: u8, b: u8) -> ThemeProperty {
    ThemeProperty::Solid(Rgb::new(r, g, b))
}

/// The built-in property set.
pub fn default_properties() -> Vec<(&'static str, ThemeProperty)> {
    let header = Gradient::new(
        GradientDirection::Horizontal,
        [
            GradientStop::new(0.0, Rgb::new(0, 95, 135)),
            GradientStop::new(0.6, Rgb::new(38, 38, 58)),
            GradientStop::new(1.0, Rgb::new(28, 28, 28)),
        ],
    );

    vec![
        (props::MENU_BAR_FG, solid(220, 220, 220)),
        (props::MENU_BAR_BG, solid(48, 48, 48)),
        (props::MENU_BAR_HOTKEY, solid(255, 175, 0)),
        (props::MENU_SELECTED_FG, solid(18, 18, 18)),
        (props::MENU_SELECTED_BG, solid(95, 175, 255)),
        (props::MENU_FG, solid(220, 220, 220)),
        (props::MENU_BG, solid(38, 38, 38)),
        (props::MENU_BORDER, solid(95, 135, 175)),
        (props::HEADER_FG, solid(255, 255, 255)),
        (props::HEADER_BG, ThemeProperty::Gradient(header)),
        (props::CONTENT_FG, solid(208, 208, 208)),
        (props::CONTENT_BG, solid(28, 28, 28)),
        (props::FOOTER_FG, solid(150, 150, 150)),
        (props::FOOTER_BG, solid(28, 28, 28)),
        (props::FOOTER_KEY, solid(95, 175, 255)),
        (props::STATUS_BG, solid(40, 40, 40)),
        (props::STATUS_LEFT, solid(255, 255, 255)),
        (props::STATUS_CENTER, solid(150, 150, 150)),
        (props::STATUS_RIGHT, solid(100, 200, 100)),
        (props::ERROR_FG, solid(255, 80, 80)),
        (props::ERROR_BG, solid(58, 0, 0)),
    ]
}
