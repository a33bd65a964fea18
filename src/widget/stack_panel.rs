//! Stack Panel: a container laying its children out along one axis.

use super::traits::Widget;
use crate::error::DrawError;
use crate::input::InputEvent;
use crate::layout::{solve_stack, Orientation, Rect, StackConfig, StackItem};
use crate::surface::CompositionSurface;
use crate::theme::ThemeResolver;

/// Owns child widgets and places them with [`solve_stack`].
///
/// Each child's [`Widget::desired_size`] is its intrinsic size: a zero on
/// the main axis makes the child stretch. Children draw in insertion order
/// and receive input in reverse, so later children sit on top.
#[derive(Default)]
pub struct StackPanel {
    children: Vec<Box<dyn Widget>>,
    config: StackConfig,
    bounds: Rect,
}

impl std::fmt::Debug for StackPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StackPanel")
            .field("children", &self.children.len())
            .field("config", &self.config)
            .field("bounds", &self.bounds)
            .finish()
    }
}

impl StackPanel {
    /// Create an empty panel.
    pub fn new(config: StackConfig) -> Self {
        Self {
            children: Vec::new(),
            config,
            bounds: Rect::ZERO,
        }
    }

    /// Append a child and lay the panel out again.
    pub fn push(&mut self, child: Box<dyn Widget>) {
        self.children.push(child);
        self.layout();
    }

    /// Builder form of [`StackPanel::push`].
    #[must_use]
    pub fn with_child(mut self, child: impl Widget + 'static) -> Self {
        self.push(Box::new(child));
        self
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the panel has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The child at `index`.
    pub fn child(&self, index: usize) -> Option<&dyn Widget> {
        self.children.get(index).map(AsRef::as_ref)
    }

    /// Layout settings.
    pub const fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Replace the layout settings.
    pub fn set_config(&mut self, config: StackConfig) {
        self.config = config;
        self.layout();
    }

    fn layout(&mut self) {
        let vertical = self.config.orientation == Orientation::Vertical;
        let items: Vec<StackItem> = self
            .children
            .iter()
            .map(|child| {
                let (width, height) = child.desired_size();
                if vertical {
                    StackItem::fixed(height, width)
                } else {
                    StackItem::fixed(width, height)
                }
            })
            .collect();

        let rects = solve_stack(&items, self.bounds, &self.config);
        for (child, rect) in self.children.iter_mut().zip(rects) {
            child.arrange(rect);
        }
    }
}

impl Widget for StackPanel {
    fn name(&self) -> &str {
        "StackPanel"
    }

    fn desired_size(&self) -> (u16, u16) {
        let spacing = u16::try_from(self.children.len().saturating_sub(1))
            .unwrap_or(u16::MAX)
            .saturating_mul(self.config.spacing);
        let sizes = self.children.iter().map(|child| child.desired_size());
        let (main, cross) = match self.config.orientation {
            Orientation::Vertical => sizes.fold((0u16, 0u16), |(main, cross), (w, h)| {
                (main.saturating_add(h), cross.max(w))
            }),
            Orientation::Horizontal => sizes.fold((0u16, 0u16), |(main, cross), (w, h)| {
                (main.saturating_add(w), cross.max(h))
            }),
        };
        let main = main.saturating_add(spacing);
        match self.config.orientation {
            Orientation::Vertical => (cross, main),
            Orientation::Horizontal => (main, cross),
        }
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.layout();
    }

    fn draw(&self, surface: &mut dyn CompositionSurface, theme: &ThemeResolver) -> Result<(), DrawError> {
        for child in &self.children {
            child.draw(surface, theme)?;
        }
        Ok(())
    }

    fn handle_input(&mut self, event: &InputEvent) -> bool {
        self.children.iter_mut().rev().any(|child| child.handle_input(event))
    }
}
