//! Cell: The atomic unit of terminal display.
//!
//! A cell holds one grapheme (its first `char`, plus the display width of
//! the full cluster), colors and text modifiers. Wide characters occupy two
//! columns: the second is marked as a continuation.

use bitflags::bitflags;

use crate::error::ThemeError;

/// True-color RGB representation.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Default foreground (white)
    pub const DEFAULT_FG: Self = Self::WHITE;
    /// Default background (black)
    pub const DEFAULT_BG: Self = Self::BLACK;

    /// Create from a packed 24-bit color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(packed: u32) -> Self {
        Self::new(
            ((packed >> 16) & 0xFF) as u8,
            ((packed >> 8) & 0xFF) as u8,
            (packed & 0xFF) as u8,
        )
    }

    /// Pack into a 24-bit integer (`0xRRGGBB`).
    #[inline]
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Parse a `RRGGBB` or `#RRGGBB` hex string.
    ///
    /// Exactly six hex digits are accepted.
    pub fn from_hex(hex: &str) -> Result<Self, ThemeError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ThemeError::InvalidHex(hex.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_u32)
            .map_err(|_| ThemeError::InvalidHex(hex.to_string()))
    }

    /// Linear interpolation between two colors, channel by channel.
    ///
    /// `t` is clamped to `[0, 1]`; channels are rounded to nearest.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let channel = |from: u8, to: u8| -> u8 {
            let mixed = f64::from(from) + (f64::from(to) - f64::from(from)) * t;
            mixed.round().clamp(0.0, 255.0) as u8
        };
        Self::new(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<u32> for Rgb {
    #[inline]
    fn from(packed: u32) -> Self {
        Self::from_u32(packed)
    }
}

impl std::str::FromStr for Rgb {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

bitflags! {
    /// Text style modifiers.
    ///
    /// These can be combined using bitwise OR.
    ///
    /// # Example
    /// ```
    /// use trellis::Modifiers;
    /// let style = Modifiers::BOLD | Modifiers::REVERSED;
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Italic text
        const ITALIC = 0b0000_0100;
        /// Underlined text
        const UNDERLINE = 0b0000_1000;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0010_0000;
    }
}

impl std::fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// A single terminal cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    symbol: char,
    width: u8,
    fg: Rgb,
    bg: Rgb,
    modifiers: Modifiers,
    continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Cell {
    /// An empty cell (space character with default colors).
    pub const EMPTY: Self = Self {
        symbol: ' ',
        width: 1,
        fg: Rgb::DEFAULT_FG,
        bg: Rgb::DEFAULT_BG,
        modifiers: Modifiers::empty(),
        continuation: false,
    };

    /// Create a cell from any character.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(symbol: char) -> Self {
        let width = unicode_width::UnicodeWidthChar::width(symbol).unwrap_or(0).min(2) as u8;
        Self {
            symbol,
            width,
            ..Self::EMPTY
        }
    }

    /// Create a cell for the trailing column of a wide character.
    #[inline]
    pub const fn continuation(bg: Rgb) -> Self {
        Self {
            symbol: ' ',
            width: 0,
            fg: Rgb::DEFAULT_FG,
            bg,
            modifiers: Modifiers::empty(),
            continuation: true,
        }
    }

    /// The displayed character.
    #[inline]
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    /// Display width (0 for continuations, 1, or 2 for wide characters).
    #[inline]
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Whether this is the trailing half of a wide character.
    #[inline]
    pub const fn is_continuation(&self) -> bool {
        self.continuation
    }

    /// Get the foreground color.
    #[inline]
    pub const fn fg(&self) -> Rgb {
        self.fg
    }

    /// Get the background color.
    #[inline]
    pub const fn bg(&self) -> Rgb {
        self.bg
    }

    /// Get the modifiers.
    #[inline]
    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Set the foreground color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    /// Set the modifiers (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("symbol", &self.symbol)
            .field("width", &self.width)
            .field("fg", &self.fg)
            .field("bg", &self.bg)
            .field("modifiers", &self.modifiers)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_hex() {
        assert_eq!(Rgb::from_hex("#FF8000").unwrap(), Rgb::new(255, 128, 0));
        assert_eq!(Rgb::from_hex("0a0b0c").unwrap(), Rgb::new(10, 11, 12));
    }

    #[test]
    fn test_rgb_from_hex_rejects_malformed() {
        assert!(Rgb::from_hex("#FFF").is_err());
        assert!(Rgb::from_hex("#GG0000").is_err());
        assert!(Rgb::from_hex("#FF00001").is_err());
        assert!(Rgb::from_hex("").is_err());
    }

    #[test]
    fn test_rgb_packing() {
        let rgb = Rgb::new(0x12, 0x34, 0x56);
        assert_eq!(rgb.to_u32(), 0x0012_3456);
        assert_eq!(Rgb::from_u32(0x0012_3456), rgb);
    }

    #[test]
    fn test_rgb_lerp() {
        let black = Rgb::BLACK;
        let white = Rgb::WHITE;
        assert_eq!(black.lerp(white, 0.0), black);
        assert_eq!(black.lerp(white, 1.0), white);
        assert_eq!(black.lerp(white, 0.5), Rgb::new(128, 128, 128));
        assert_eq!(black.lerp(white, 7.0), white);
    }

    #[test]
    fn test_cell_wide_char() {
        let cell = Cell::new('日');
        assert_eq!(cell.symbol(), '日');
        assert_eq!(cell.width(), 2);

        let cont = Cell::continuation(Rgb::BLACK);
        assert!(cont.is_continuation());
        assert_eq!(cont.width(), 0);
    }

    #[test]
    fn test_cell_builder_pattern() {
        let cell = Cell::new('X')
            .with_fg(Rgb::new(255, 0, 0))
            .with_bg(Rgb::new(0, 0, 255))
            .with_modifiers(Modifiers::BOLD | Modifiers::UNDERLINE);

        assert_eq!(cell.fg(), Rgb::new(255, 0, 0));
        assert_eq!(cell.bg(), Rgb::new(0, 0, 255));
        assert!(cell.modifiers().contains(Modifiers::BOLD));
        assert!(!cell.modifiers().contains(Modifiers::ITALIC));
    }
}
