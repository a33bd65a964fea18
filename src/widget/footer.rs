//! Footer Widget: a row of key hints.

use super::traits::{fill_background, text_width, Widget};
use crate::error::DrawError;
use crate::layout::Rect;
use crate::surface::CompositionSurface;
use crate::theme::{props, ThemeResolver};

/// A key and what it does, shown as `Key Label`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// Key label, e.g. `F10`.
    pub key: String,
    /// Action label, e.g. `Menu`.
    pub label: String,
}

impl KeyHint {
    /// Create a hint.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// One-row footer listing key hints left to right.
///
/// Hints that don't fit entirely are dropped rather than cut.
#[derive(Debug, Default)]
pub struct Footer {
    hints: Vec<KeyHint>,
    bounds: Rect,
}

impl Footer {
    /// Create an empty footer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all hints.
    pub fn set_hints(&mut self, hints: impl IntoIterator<Item = KeyHint>) {
        self.hints = hints.into_iter().collect();
    }

    /// Append a hint.
    pub fn push_hint(&mut self, key: impl Into<String>, label: impl Into<String>) {
        self.hints.push(KeyHint::new(key, label));
    }

    /// Current hints.
    pub fn hints(&self) -> &[KeyHint] {
        &self.hints
    }
}

impl Widget for Footer {
    fn name(&self) -> &str {
        "Footer"
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
        let area = self.bounds;
        if area.is_empty() {
            return Ok(());
        }
        fill_background(surface, area, theme, props::FOOTER_BG);

        let key_fg = theme.resolve_foreground(props::FOOTER_KEY);
        let label_fg = theme.resolve_foreground(props::FOOTER_FG);
        let mut x = area.x + 1;
        for hint in &self.hints {
            let key_width = text_width(&hint.key);
            let label_width = text_width(&hint.label);
            let needed = key_width.saturating_add(label_width).saturating_add(1);
            if x.saturating_add(needed) > area.right() {
                break;
            }
            surface.write_text(x, area.y, &hint.key, key_fg, None);
            surface.write_text(x + key_width + 1, area.y, &hint.label, label_fg, None);
            x = x.saturating_add(needed).saturating_add(2);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::BufferSurface;

    #[test]
    fn test_footer_hints() {
        let theme = ThemeResolver::with_defaults();
        let mut surface = BufferSurface::new(30, 1);
        let mut footer = Footer::new();
        footer.push_hint("F1", "Help");
        footer.push_hint("F10", "Menu");
        footer.set_bounds(Rect::new(0, 0, 30, 1));

        footer.draw(&mut surface, &theme).unwrap();

        assert!(surface.row_text(0).starts_with(" F1 Help  F10 Menu"));
        assert_eq!(
            Some(surface.cell(1, 0).unwrap().fg()),
            theme.resolve_foreground(props::FOOTER_KEY)
        );
    }

    #[test]
    fn test_footer_drops_hints_that_do_not_fit() {
        let theme = ThemeResolver::with_defaults();
        let mut surface = BufferSurface::new(12, 1);
        let mut footer = Footer::new();
        footer.set_hints([KeyHint::new("F1", "Help"), KeyHint::new("F2", "Rename")]);
        footer.set_bounds(Rect::new(0, 0, 12, 1));

        footer.draw(&mut surface, &theme).unwrap();

        assert_eq!(surface.row_text(0), " F1 Help    ");
    }
}
