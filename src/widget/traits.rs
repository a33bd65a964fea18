//! The `Widget` trait and painting helpers shared by the standard widgets.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::error::DrawError;
use crate::input::InputEvent;
use crate::layout::Rect;
use crate::surface::CompositionSurface;
use crate::theme::{GradientDirection, ThemeResolver};

/// A UI component that draws into an assigned rectangle and handles input.
///
/// Containers own their children as `Box<dyn Widget>`, so a screen is a
/// tree of widgets rooted at the composer.
pub trait Widget {
    /// Short name used in logs and render error markers.
    fn name(&self) -> &str {
        "widget"
    }

    /// Preferred size in cells. Zero on an axis means "as much as offered".
    fn desired_size(&self) -> (u16, u16) {
        (0, 0)
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect;

    /// Set the bounds of this widget.
    fn set_bounds(&mut self, bounds: Rect);

    /// Lay the widget out inside `area`.
    ///
    /// Called on every resize. The default takes the whole area.
    fn arrange(&mut self, area: Rect) {
        self.set_bounds(area);
    }

    /// Draw this widget. Writes should stay within [`Widget::bounds`].
    fn draw(&self, surface: &mut dyn CompositionSurface, theme: &ThemeResolver) -> Result<(), DrawError>;

    /// Handle an input event.
    ///
    /// Returns `true` if the event was consumed by this widget,
    /// `false` if it should propagate to other widgets.
    fn handle_input(&mut self, _event: &InputEvent) -> bool {
        false
    }
}

/// Paint `area` with the background of a theme property.
///
/// Gradients are spread across the area's width or height, following the
/// gradient's direction. Unknown properties leave the area untouched.
pub fn fill_background(surface: &mut dyn CompositionSurface, area: Rect, theme: &ThemeResolver, property: &str) {
    if area.is_empty() {
        return;
    }
    match theme.gradient_direction(property) {
        Some(GradientDirection::Horizontal) => {
            let Some(run) = theme.resolve_gradient(property, usize::from(area.width)) else {
                return;
            };
            for (col, color) in (area.x..area.right()).zip(run.iter()) {
                surface.fill_rect(Rect::new(col, area.y, 1, area.height), ' ', None, Some(*color));
            }
        }
        Some(GradientDirection::Vertical) => {
            let Some(run) = theme.resolve_gradient(property, usize::from(area.height)) else {
                return;
            };
            for (row, color) in (area.y..area.bottom()).zip(run.iter()) {
                surface.fill_rect(Rect::new(area.x, row, area.width, 1), ' ', None, Some(*color));
            }
        }
        None => {
            if let Some(color) = theme.resolve_background(property, 1, 0) {
                surface.fill_rect(area, ' ', None, Some(color));
            }
        }
    }
}

/// The longest prefix of `text` that fits in `max_width` columns.
pub fn fit_width(text: &str, max_width: u16) -> &str {
    let mut used = 0usize;
    let limit = usize::from(max_width);
    for (offset, grapheme) in text.grapheme_indices(true) {
        used += grapheme.width();
        if used > limit {
            return &text[..offset];
        }
    }
    text
}

/// Display width of `text` in columns, saturating at `u16::MAX`.
pub fn text_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}
