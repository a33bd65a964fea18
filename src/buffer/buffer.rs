//! Buffer: A grid of cells representing the terminal screen.
//!
//! Cells are stored in row-major order alongside a parallel z-buffer that
//! records which layer last wrote each cell.

use super::cell::{Cell, Rgb};

/// A grid of cells with per-cell layer tracking.
///
/// Access is in row-major order: `index = y * width + x`. Writes go through
/// [`Buffer::set_layered`], which refuses to overwrite a cell owned by a
/// higher layer.
#[derive(Clone, PartialEq, Eq)]
pub struct Buffer {
    cells: Vec<Cell>,
    layers: Vec<i32>,
    width: u16,
    height: u16,
}

impl Buffer {
    /// Layer value of a cell nothing has written to yet.
    pub const UNWRITTEN: i32 = i32::MIN;

    /// Create a new buffer with the given dimensions.
    ///
    /// A zero dimension yields an empty buffer that ignores every write.
    pub fn new(width: u16, height: u16) -> Self {
        let size = usize::from(width) * usize::from(height);
        Self {
            cells: vec![Cell::EMPTY; size],
            layers: vec![Self::UNWRITTEN; size],
            width,
            height,
        }
    }

    /// Get the buffer width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the buffer height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Get the total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the buffer has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert (x, y) coordinates to a linear index.
    #[inline]
    pub fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    /// Get a reference to a cell at (x, y).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Layer that last wrote the cell at (x, y).
    #[inline]
    pub fn layer_at(&self, x: u16, y: u16) -> Option<i32> {
        self.index_of(x, y).map(|i| self.layers[i])
    }

    /// Set a cell at (x, y) unconditionally, on the lowest layer.
    ///
    /// Returns `false` if coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        self.set_layered(x, y, cell, Self::UNWRITTEN)
    }

    /// Set a cell at (x, y) on behalf of `layer`.
    ///
    /// The write is dropped when the cell is owned by a higher layer.
    /// Returns `true` if the cell was written.
    #[inline]
    pub fn set_layered(&mut self, x: u16, y: u16, cell: Cell, layer: i32) -> bool {
        let Some(idx) = self.index_of(x, y) else {
            return false;
        };
        if self.layers[idx] > layer {
            return false;
        }
        self.cells[idx] = cell;
        self.layers[idx] = layer;
        true
    }

    /// Mutate the cell at (x, y) in place on behalf of `layer`.
    pub fn update_layered(&mut self, x: u16, y: u16, layer: i32, f: impl FnOnce(&mut Cell)) -> bool {
        let Some(idx) = self.index_of(x, y) else {
            return false;
        };
        if self.layers[idx] > layer {
            return false;
        }
        f(&mut self.cells[idx]);
        self.layers[idx] = layer;
        true
    }

    /// Background color at (x, y), or the default background when out of bounds.
    #[inline]
    pub fn bg_at(&self, x: u16, y: u16) -> Rgb {
        self.get(x, y).map_or(Rgb::DEFAULT_BG, Cell::bg)
    }

    /// Clear the entire buffer (fill with empty cells, forget layers).
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
        self.layers.fill(Self::UNWRITTEN);
    }

    /// Resize the buffer. All content is discarded.
    pub fn resize(&mut self, new_width: u16, new_height: u16) {
        if new_width == self.width && new_height == self.height {
            self.clear();
            return;
        }
        *self = Self::new(new_width, new_height);
    }

    /// Text content of row `y`, skipping wide-character continuations.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = usize::from(y) * usize::from(self.width);
        self.cells[start..start + usize::from(self.width)]
            .iter()
            .filter(|c| !c.is_continuation())
            .map(Cell::symbol)
            .collect()
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_new() {
        let buffer = Buffer::new(80, 24);
        assert_eq!(buffer.width(), 80);
        assert_eq!(buffer.height(), 24);
        assert_eq!(buffer.len(), 80 * 24);
    }

    #[test]
    fn test_buffer_zero_size_ignores_writes() {
        let mut buffer = Buffer::new(0, 24);
        assert!(buffer.is_empty());
        assert!(!buffer.set(0, 0, Cell::new('X')));
    }

    #[test]
    fn test_buffer_bounds() {
        let buffer = Buffer::new(80, 24);
        assert!(buffer.get(79, 23).is_some());
        assert!(buffer.get(80, 23).is_none());
        assert!(buffer.get(79, 24).is_none());
    }

    #[test]
    fn test_layered_writes_respect_higher_layers() {
        let mut buffer = Buffer::new(4, 1);
        assert!(buffer.set_layered(0, 0, Cell::new('A'), 10));
        assert!(!buffer.set_layered(0, 0, Cell::new('B'), 5));
        assert_eq!(buffer.get(0, 0).unwrap().symbol(), 'A');

        assert!(buffer.set_layered(0, 0, Cell::new('C'), 10));
        assert_eq!(buffer.get(0, 0).unwrap().symbol(), 'C');
        assert_eq!(buffer.layer_at(0, 0), Some(10));
    }

    #[test]
    fn test_buffer_clear_forgets_layers() {
        let mut buffer = Buffer::new(10, 5);
        buffer.set_layered(5, 2, Cell::new('X'), 100);
        buffer.clear();
        assert_eq!(buffer.get(5, 2), Some(&Cell::EMPTY));
        assert_eq!(buffer.layer_at(5, 2), Some(Buffer::UNWRITTEN));
    }

    #[test]
    fn test_row_text_skips_continuations() {
        let mut buffer = Buffer::new(4, 1);
        buffer.set(0, 0, Cell::new('日'));
        buffer.set(1, 0, Cell::continuation(Rgb::BLACK));
        buffer.set(2, 0, Cell::new('a'));
        assert_eq!(buffer.row_text(0), "日a ");
    }

    #[test]
    fn test_buffer_resize() {
        let mut buffer = Buffer::new(80, 24);
        buffer.resize(100, 30);
        assert_eq!(buffer.width(), 100);
        assert_eq!(buffer.height(), 30);
        assert_eq!(buffer.len(), 3000);
    }
}
