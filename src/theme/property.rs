//! Theme property definitions: solid colors and multi-stop gradients.

use std::cmp::Ordering;

use crate::buffer::Rgb;
use crate::error::ThemeError;

/// Axis a gradient runs along.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GradientDirection {
    /// Index runs along columns.
    #[default]
    Horizontal,
    /// Index runs along rows.
    Vertical,
}

impl GradientDirection {
    /// Parse `horizontal` / `vertical` (case-insensitive).
    pub fn parse(input: &str) -> Result<Self, ThemeError> {
        match input.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            _ => Err(ThemeError::UnknownDirection(input.to_string())),
        }
    }
}

/// One color stop of a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Position in `[0, 1]`.
    pub position: f64,
    /// Color at this position.
    pub color: Rgb,
}

impl GradientStop {
    /// Create a stop; the position is clamped into `[0, 1]`.
    pub fn new(position: f64, color: Rgb) -> Self {
        let position = if position.is_nan() { 0.0 } else { position.clamp(0.0, 1.0) };
        Self { position, color }
    }
}

/// A multi-stop linear gradient. Stops are always sorted by position.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    direction: GradientDirection,
    stops: Vec<GradientStop>,
}

impl Gradient {
    /// Create a gradient, sorting the stops ascending by position.
    ///
    /// Stops sharing a position keep their given order.
    pub fn new(direction: GradientDirection, stops: impl IntoIterator<Item = GradientStop>) -> Self {
        let mut stops: Vec<GradientStop> = stops.into_iter().collect();
        stops.sort_by(|a, b| a.position.partial_cmp(&b.position).unwrap_or(Ordering::Equal));
        Self { direction, stops }
    }

    /// Direction the gradient runs along.
    pub const fn direction(&self) -> GradientDirection {
        self.direction
    }

    /// The sorted stops.
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Color of the lowest-position stop.
    pub fn first_color(&self) -> Option<Rgb> {
        self.stops.first().map(|stop| stop.color)
    }

    /// Color at `ratio` in `[0, 1]`, clamped to the outermost stops.
    pub fn color_at(&self, ratio: f64) -> Option<Rgb> {
        let first = self.stops.first()?;
        let last = self.stops.last()?;
        if ratio <= first.position {
            return Some(first.color);
        }
        if ratio >= last.position {
            return Some(last.color);
        }
        self.stops
            .windows(2)
            .find(|pair| ratio >= pair[0].position && ratio <= pair[1].position)
            .map(|pair| {
                let span = pair[1].position - pair[0].position;
                let t = if span > 0.0 { (ratio - pair[0].position) / span } else { 0.0 };
                pair[0].color.lerp(pair[1].color, t)
            })
            .or(Some(last.color))
    }

    /// Sample `width` evenly spaced colors; cell `i` sits at `i / (width - 1)`.
    #[allow(clippy::cast_precision_loss)]
    pub fn sample(&self, width: usize) -> Vec<Rgb> {
        if self.stops.is_empty() {
            return Vec::new();
        }
        (0..width)
            .filter_map(|i| {
                let ratio = if width > 1 { i as f64 / (width - 1) as f64 } else { 0.0 };
                self.color_at(ratio)
            })
            .collect()
    }
}

/// A themed color: one solid color or a gradient.
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeProperty {
    /// A single color.
    Solid(Rgb),
    /// A color ramp resolved per cell.
    Gradient(Gradient),
}

impl ThemeProperty {
    /// A solid property from a hex string.
    pub fn solid_hex(hex: &str) -> Result<Self, ThemeError> {
        Rgb::from_hex(hex).map(Self::Solid)
    }

    /// Whether the property is a gradient.
    pub const fn is_gradient(&self) -> bool {
        matches!(self, Self::Gradient(_))
    }
}

impl From<Rgb> for ThemeProperty {
    fn from(color: Rgb) -> Self {
        Self::Solid(color)
    }
}

impl From<Gradient> for ThemeProperty {
    fn from(gradient: Gradient) -> Self {
        Self::Gradient(gradient)
    }
}
