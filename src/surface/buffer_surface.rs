//! `BufferSurface`: a [`CompositionSurface`] over an in-memory [`Buffer`].
//!
//! Within a frame each cell remembers the layer that last wrote it, and
//! writes from a lower layer are dropped. Drawing layers in ascending order
//! therefore behaves like last-write-wins, and drawing out of order still
//! composites correctly. `begin_frame` wipes the grid, so nothing from a
//! previous frame can occlude the next one.

use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::{layers, BorderStyle, CompositionSurface};
use crate::buffer::{Buffer, Cell, Modifiers, Rgb};
use crate::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NamedRegion {
    rect: Rect,
    z: Option<i32>,
}

/// An in-memory composition target.
#[derive(Debug, Clone)]
pub struct BufferSurface {
    buffer: Buffer,
    layer: i32,
    modifiers: Modifiers,
    regions: HashMap<String, NamedRegion>,
}

impl BufferSurface {
    /// Create a surface of the given size.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            layer: layers::BASE,
            modifiers: Modifiers::empty(),
            regions: HashMap::new(),
        }
    }

    /// The underlying cell grid.
    pub const fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Consume the surface, returning its cell grid.
    pub fn into_buffer(self) -> Buffer {
        self.buffer
    }

    /// The cell at (x, y).
    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        self.buffer.get(x, y)
    }

    /// Text of row `y`.
    pub fn row_text(&self, y: u16) -> String {
        self.buffer.row_text(y)
    }

    /// A declared region's rectangle.
    pub fn region(&self, name: &str) -> Option<Rect> {
        self.regions.get(name).map(|region| region.rect)
    }

    /// Reset cells, layer ownership, regions and the pen state.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.regions.clear();
        self.layer = layers::BASE;
        self.modifiers = Modifiers::empty();
    }

    /// Resize and clear the surface.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.buffer.resize(width, height);
        self.regions.clear();
        self.layer = layers::BASE;
        self.modifiers = Modifiers::empty();
    }

    fn write_clipped(&mut self, x: u16, y: u16, limit: u16, text: &str, fg: Option<Rgb>, bg: Option<Rgb>) -> u16 {
        let limit = limit.min(self.buffer.width());
        let layer = self.layer;
        let mut col = x;
        for grapheme in text.graphemes(true) {
            let Ok(width) = u16::try_from(grapheme.width()) else {
                break;
            };
            if width == 0 {
                continue;
            }
            if col.saturating_add(width) > limit {
                break;
            }
            let Some(symbol) = grapheme.chars().next() else {
                continue;
            };
            let cell_bg = bg.unwrap_or_else(|| self.buffer.bg_at(col, y));
            let cell = Cell::new(symbol)
                .with_fg(fg.unwrap_or(Rgb::DEFAULT_FG))
                .with_bg(cell_bg)
                .with_modifiers(self.modifiers);
            self.buffer.set_layered(col, y, cell, layer);
            if width == 2 {
                self.buffer.set_layered(col + 1, y, Cell::continuation(cell_bg), layer);
            }
            col += width;
        }
        col - x
    }

    fn paint(&mut self, x: u16, y: u16, ch: char, fg: Option<Rgb>, bg: Option<Rgb>) {
        let (layer, modifiers) = (self.layer, self.modifiers);
        self.buffer.update_layered(x, y, layer, |cell| {
            *cell = Cell::new(ch)
                .with_fg(fg.unwrap_or_else(|| cell.fg()))
                .with_bg(bg.unwrap_or_else(|| cell.bg()))
                .with_modifiers(modifiers);
        });
    }
}

impl CompositionSurface for BufferSurface {
    fn size(&self) -> (u16, u16) {
        (self.buffer.width(), self.buffer.height())
    }

    fn begin_frame(&mut self) {
        self.clear();
    }

    fn write_text(&mut self, x: u16, y: u16, text: &str, fg: Option<Rgb>, bg: Option<Rgb>) -> u16 {
        self.write_clipped(x, y, u16::MAX, text, fg, bg)
    }

    fn fill_rect(&mut self, rect: Rect, ch: char, fg: Option<Rgb>, bg: Option<Rgb>) {
        let bottom = rect.bottom().min(self.buffer.height());
        let right = rect.right().min(self.buffer.width());
        for row in rect.y..bottom {
            for col in rect.x..right {
                self.paint(col, row, ch, fg, bg);
            }
        }
    }

    fn draw_box(&mut self, rect: Rect, border: BorderStyle, fg: Option<Rgb>, bg: Option<Rgb>) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let [top_left, top_right, bottom_left, bottom_right, horizontal, vertical] = border.chars();
        let right = rect.right() - 1;
        let bottom = rect.bottom() - 1;

        for col in rect.x.saturating_add(1)..right {
            self.paint(col, rect.y, horizontal, fg, bg);
            self.paint(col, bottom, horizontal, fg, bg);
        }
        for row in rect.y.saturating_add(1)..bottom {
            self.paint(rect.x, row, vertical, fg, bg);
            self.paint(right, row, vertical, fg, bg);
        }
        self.paint(rect.x, rect.y, top_left, fg, bg);
        self.paint(right, rect.y, top_right, fg, bg);
        self.paint(rect.x, bottom, bottom_left, fg, bg);
        self.paint(right, bottom, bottom_right, fg, bg);
    }

    fn declare_region(&mut self, name: &str, rect: Rect, z: Option<i32>) {
        self.regions.insert(name.to_string(), NamedRegion { rect, z });
    }

    fn write_to_region(&mut self, name: &str, text: &str, fg: Option<Rgb>, bg: Option<Rgb>) -> bool {
        let Some(region) = self.regions.get(name).copied() else {
            return false;
        };
        if region.rect.is_empty() {
            return true;
        }
        let previous = self.layer;
        if let Some(z) = region.z {
            self.layer = z;
        }
        self.write_clipped(region.rect.x, region.rect.y, region.rect.right(), text, fg, bg);
        self.layer = previous;
        true
    }

    fn begin_layer(&mut self, z: i32) {
        self.layer = z;
    }

    fn layer(&self) -> i32 {
        self.layer
    }

    fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}
