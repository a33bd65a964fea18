//! Header Widget: screen title and breadcrumb over the header gradient.

use super::traits::{fill_background, fit_width, text_width, Widget};
use crate::buffer::Modifiers;
use crate::error::DrawError;
use crate::layout::Rect;
use crate::surface::CompositionSurface;
use crate::theme::{props, ThemeResolver};

const CRUMB_SEPARATOR: &str = " > ";

/// One-row screen header: ` Title  Crumb > Crumb ...  info `, with the
/// title in bold.
#[derive(Debug, Default)]
pub struct Header {
    title: String,
    breadcrumb: Vec<String>,
    info: String,
    bounds: Rect,
}

impl Header {
    /// Create a header with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// The title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the breadcrumb trail.
    pub fn set_breadcrumb<I, S>(&mut self, crumbs: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.breadcrumb = crumbs.into_iter().map(Into::into).collect();
    }

    /// The breadcrumb trail.
    pub fn breadcrumb(&self) -> &[String] {
        &self.breadcrumb
    }

    /// Right-aligned text, such as a date or a clock.
    pub fn set_info(&mut self, info: impl Into<String>) {
        self.info = info.into();
    }
}

impl Widget for Header {
    fn name(&self) -> &str {
        "Header"
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
        fill_background(surface, area, theme, props::HEADER_BG);

        let fg = theme.resolve_foreground(props::HEADER_FG);
        let info = fit_width(&self.info, area.width.saturating_sub(1));
        let info_width = if info.is_empty() { 0 } else { text_width(info) + 1 };
        let mut budget = area.width.saturating_sub(info_width);

        let title = format!(" {}", self.title);
        let title = fit_width(&title, budget);
        surface.set_modifiers(Modifiers::BOLD);
        let col = area.x.saturating_add(surface.write_text(area.x, area.y, title, fg, None));
        surface.set_modifiers(Modifiers::empty());
        budget -= text_width(title);

        if !self.breadcrumb.is_empty() {
            let trail = format!("  {}", self.breadcrumb.join(CRUMB_SEPARATOR));
            let trail = fit_width(&trail, budget);
            surface.write_text(col, area.y, trail, fg, None);
            budget -= text_width(trail);
        }

        if !info.is_empty() && budget > 0 {
            surface.write_text(area.right() - info_width, area.y, info, fg, None);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::BufferSurface;

    #[test]
    fn test_header_title_and_breadcrumb() {
        let theme = ThemeResolver::with_defaults();
        let mut surface = BufferSurface::new(40, 1);
        let mut header = Header::new("Tasks");
        header.set_breadcrumb(["Home", "Today"]);
        header.set_info("Mon");
        header.set_bounds(Rect::new(0, 0, 40, 1));

        header.draw(&mut surface, &theme).unwrap();

        let row = surface.row_text(0);
        assert!(row.starts_with(" Tasks  Home > Today"));
        assert!(row.ends_with("Mon "));

        assert_eq!(surface.cell(1, 0).unwrap().modifiers(), Modifiers::BOLD);
        assert_eq!(surface.cell(8, 0).unwrap().modifiers(), Modifiers::empty());
        assert_eq!(surface.modifiers(), Modifiers::empty());
    }

    #[test]
    fn test_header_paints_gradient() {
        let theme = ThemeResolver::with_defaults();
        let mut surface = BufferSurface::new(20, 1);
        let mut header = Header::new("x");
        header.set_bounds(Rect::new(0, 0, 20, 1));

        header.draw(&mut surface, &theme).unwrap();

        let run = theme.resolve_gradient(props::HEADER_BG, 20).unwrap();
        assert_eq!(surface.cell(0, 0).unwrap().bg(), run[0]);
        assert_eq!(surface.cell(19, 0).unwrap().bg(), run[19]);
        assert_ne!(run[0], run[19]);
    }
}
