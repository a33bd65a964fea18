//! Surface module: the draw-target contract widgets render through.
//!
//! [`CompositionSurface`] is what a terminal backend implements. Writes are
//! cell addressed, grouped into explicit z-layers with [`begin_layer`], and
//! a later layer occludes an earlier one at the same cell. Layer ownership
//! lasts for one frame, and [`begin_frame`] starts the next.
//! [`BufferSurface`] is the in-memory implementation backed by
//! [`crate::buffer::Buffer`].
//!
//! [`begin_layer`]: CompositionSurface::begin_layer
//! [`begin_frame`]: CompositionSurface::begin_frame

mod buffer_surface;

pub use buffer_surface::BufferSurface;

use crate::buffer::{Modifiers, Rgb};
use crate::layout::Rect;

/// Standard z-layers used by the screen composer.
pub mod layers {
    /// Screen chrome and content backgrounds.
    pub const BASE: i32 = 0;
    /// Content widgets.
    pub const CONTENT: i32 = 10;
    /// Footer and status bar.
    pub const CHROME: i32 = 20;
    /// Menu bar and its dropdowns.
    pub const OVERLAY: i32 = 100;
}

/// Line characters for [`CompositionSurface::draw_box`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BorderStyle {
    /// `┌─┐│└┘`
    #[default]
    Single,
    /// `╔═╗║╚╝`
    Double,
    /// `╭─╮│╰╯`
    Rounded,
    /// `+-+|++`
    Ascii,
}

impl BorderStyle {
    /// Corner and edge characters: top-left, top-right, bottom-left,
    /// bottom-right, horizontal, vertical.
    pub const fn chars(self) -> [char; 6] {
        match self {
            Self::Single => ['┌', '┐', '└', '┘', '─', '│'],
            Self::Double => ['╔', '╗', '╚', '╝', '═', '║'],
            Self::Rounded => ['╭', '╮', '╰', '╯', '─', '│'],
            Self::Ascii => ['+', '+', '+', '+', '-', '|'],
        }
    }
}

/// A cell-addressable draw target with named regions and z-layers.
///
/// Colors are optional: `None` keeps whatever color the cell already has.
/// Writes outside the surface are clipped silently. Like the current layer,
/// text modifiers are pen state applied to every subsequent write.
pub trait CompositionSurface {
    /// Surface size in cells.
    fn size(&self) -> (u16, u16);

    /// Start a frame: forget cell contents, layer ownership and regions
    /// from the previous frame, and reset the layer and modifiers.
    fn begin_frame(&mut self);

    /// Write text starting at (x, y). Returns the number of columns used.
    fn write_text(&mut self, x: u16, y: u16, text: &str, fg: Option<Rgb>, bg: Option<Rgb>) -> u16;

    /// Fill a rectangle with one character.
    fn fill_rect(&mut self, rect: Rect, ch: char, fg: Option<Rgb>, bg: Option<Rgb>);

    /// Draw a border along the edges of a rectangle.
    fn draw_box(&mut self, rect: Rect, border: BorderStyle, fg: Option<Rgb>, bg: Option<Rgb>);

    /// Declare a named region, optionally pinned to a layer.
    fn declare_region(&mut self, name: &str, rect: Rect, z: Option<i32>);

    /// Write text at the top-left of a declared region, clipped to it.
    ///
    /// Returns `false` when the region was never declared.
    fn write_to_region(&mut self, name: &str, text: &str, fg: Option<Rgb>, bg: Option<Rgb>) -> bool;

    /// Attribute subsequent writes to layer `z`, until the next call.
    fn begin_layer(&mut self, z: i32);

    /// The layer writes are currently attributed to.
    fn layer(&self) -> i32;

    /// Apply `modifiers` to subsequent writes, until the next call.
    fn set_modifiers(&mut self, modifiers: Modifiers);

    /// The modifiers currently applied to writes.
    fn modifiers(&self) -> Modifiers;
}
