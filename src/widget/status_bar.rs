//! Status Bar Widget: Three-section status bar.
//!
//! A one-row bar with left, center, and right sections, drawn at the bottom
//! of every screen.

use super::traits::{fill_background, fit_width, text_width, Widget};
use crate::error::DrawError;
use crate::layout::Rect;
use crate::surface::CompositionSurface;
use crate::theme::{props, ThemeResolver};

/// Theme properties the status bar resolves.
#[derive(Debug, Clone)]
pub struct StatusBarConfig {
    /// Background property.
    pub bg: String,
    /// Left section text property.
    pub left_fg: String,
    /// Center section text property.
    pub center_fg: String,
    /// Right section text property.
    pub right_fg: String,
}

impl Default for StatusBarConfig {
    fn default() -> Self {
        Self {
            bg: props::STATUS_BG.to_string(),
            left_fg: props::STATUS_LEFT.to_string(),
            center_fg: props::STATUS_CENTER.to_string(),
            right_fg: props::STATUS_RIGHT.to_string(),
        }
    }
}

/// A three-section status bar (left, center, right).
#[derive(Debug, Default)]
pub struct StatusBar {
    /// Left section content.
    left: String,
    /// Center section content.
    center: String,
    /// Right section content.
    right: String,
    /// Widget bounds.
    bounds: Rect,
    /// Configuration.
    config: StatusBarConfig,
}

impl StatusBar {
    /// Create an empty status bar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a status bar with custom theme properties.
    pub fn with_config(config: StatusBarConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Set the left section content.
    pub fn set_left(&mut self, text: impl Into<String>) {
        self.left = text.into();
    }

    /// Set the center section content.
    pub fn set_center(&mut self, text: impl Into<String>) {
        self.center = text.into();
    }

    /// Set the right section content.
    pub fn set_right(&mut self, text: impl Into<String>) {
        self.right = text.into();
    }

    /// Set all sections at once.
    pub fn set_all(&mut self, left: impl Into<String>, center: impl Into<String>, right: impl Into<String>) {
        self.left = left.into();
        self.center = center.into();
        self.right = right.into();
    }

    /// Get the left section content.
    pub fn left(&self) -> &str {
        &self.left
    }

    /// Get the center section content.
    pub fn center(&self) -> &str {
        &self.center
    }

    /// Get the right section content.
    pub fn right(&self) -> &str {
        &self.right
    }
}

impl Widget for StatusBar {
    fn name(&self) -> &str {
        "StatusBar"
    }

    fn desired_size(&self) -> (u16, u16) {
        (0, 1)
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn draw(&self, surface: &mut dyn CompositionSurface, theme: &ThemeResolver) -> Result<(), DrawError> {
        let area = Rect::new(self.bounds.x, self.bounds.y, self.bounds.width, self.bounds.height.min(1));
        if area.is_empty() {
            return Ok(());
        }
        fill_background(surface, area, theme, &self.config.bg);

        let section = area.width / 3;
        let (x, y) = (area.x, area.y);

        // Left-aligned
        let left = fit_width(&self.left, section);
        surface.write_text(x, y, left, theme.resolve_foreground(&self.config.left_fg), None);

        // Centered
        let center = fit_width(&self.center, section);
        let center_x = x + (area.width - text_width(center)) / 2;
        surface.write_text(center_x, y, center, theme.resolve_foreground(&self.config.center_fg), None);

        // Right-aligned
        let right = fit_width(&self.right, section);
        let right_x = x + area.width - text_width(right);
        surface.write_text(right_x, y, right, theme.resolve_foreground(&self.config.right_fg), None);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::BufferSurface;

    #[test]
    fn test_status_bar_basic() {
        let mut bar = StatusBar::new();

        bar.set_left("Left");
        bar.set_center("Center");
        bar.set_right("Right");

        assert_eq!(bar.left(), "Left");
        assert_eq!(bar.center(), "Center");
        assert_eq!(bar.right(), "Right");
    }

    #[test]
    fn test_status_bar_set_all() {
        let mut bar = StatusBar::new();

        bar.set_all("A", "B", "C");

        assert_eq!(bar.left(), "A");
        assert_eq!(bar.center(), "B");
        assert_eq!(bar.right(), "C");
    }

    #[test]
    fn test_status_bar_draw_sections() {
        let theme = ThemeResolver::with_defaults();
        let mut surface = BufferSurface::new(30, 1);
        let mut bar = StatusBar::new();
        bar.set_bounds(Rect::new(0, 0, 30, 1));
        bar.set_all("3 tasks", "idle", "00:42");

        bar.draw(&mut surface, &theme).unwrap();

        let row = surface.row_text(0);
        assert!(row.starts_with("3 tasks"));
        assert!(row.ends_with("00:42"));
        assert_eq!(&row[13..17], "idle");
        assert_eq!(
            Some(surface.cell(20, 0).unwrap().bg()),
            theme.resolve_background(props::STATUS_BG, 1, 0)
        );
    }

    #[test]
    fn test_status_bar_truncates_sections() {
        let theme = ThemeResolver::with_defaults();
        let mut surface = BufferSurface::new(9, 1);
        let mut bar = StatusBar::new();
        bar.set_bounds(Rect::new(0, 0, 9, 1));
        bar.set_left("overflowing");

        bar.draw(&mut surface, &theme).unwrap();

        assert_eq!(surface.row_text(0), "ove      ");
    }
}
