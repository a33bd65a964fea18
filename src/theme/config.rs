//! Serializable theme definitions.
//!
//! ```toml
//! [palette]
//! accent = "#5fafff"
//!
//! [properties]
//! "Header.Foreground" = "accent"
//! "Content.Background" = "#1c1c1c"
//! "Header.Background" = { gradient = "horizontal", stops = [
//!     { at = 0.0, color = "#005f87" },
//!     { at = 1.0, color = "accent" },
//! ] }
//! ```
//!
//! Where the document comes from is up to the application.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::property::{Gradient, GradientDirection, GradientStop, ThemeProperty};
use crate::buffer::Rgb;
use crate::error::ThemeError;

/// A complete theme document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Named base colors, used as fallbacks and as references from properties.
    #[serde(default)]
    pub palette: BTreeMap<String, String>,
    /// Property name to definition.
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyConfig>,
}

/// One property as written in a theme document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyConfig {
    /// `#RRGGBB` or a palette name.
    Color(String),
    /// A gradient table.
    Gradient {
        /// `horizontal` or `vertical`.
        gradient: String,
        /// Color stops in any order.
        stops: Vec<StopConfig>,
    },
}

/// One gradient stop as written in a theme document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopConfig {
    /// Position in `[0, 1]`.
    pub at: f64,
    /// `#RRGGBB` or a palette name.
    pub color: String,
}

impl ThemeConfig {
    /// Parse a TOML theme document.
    pub fn from_toml_str(source: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(source)?)
    }

    /// Parse every palette entry, returning the good ones and the failures.
    pub(crate) fn parse_palette(&self) -> (BTreeMap<String, Rgb>, Vec<(String, ThemeError)>) {
        let mut palette = BTreeMap::new();
        let mut failures = Vec::new();
        for (name, hex) in &self.palette {
            match Rgb::from_hex(hex) {
                Ok(color) => {
                    palette.insert(name.clone(), color);
                }
                Err(err) => failures.push((name.clone(), err)),
            }
        }
        (palette, failures)
    }
}

impl PropertyConfig {
    /// Build a property, resolving palette references.
    pub fn build(&self, name: &str, palette: &BTreeMap<String, Rgb>) -> Result<ThemeProperty, ThemeError> {
        match self {
            Self::Color(value) => color_ref(value, palette).map(ThemeProperty::Solid),
            Self::Gradient { gradient, stops } => {
                if stops.is_empty() {
                    return Err(ThemeError::EmptyGradient(name.to_string()));
                }
                let direction = GradientDirection::parse(gradient)?;
                let stops = stops
                    .iter()
                    .map(|stop| color_ref(&stop.color, palette).map(|c| GradientStop::new(stop.at, c)))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(ThemeProperty::Gradient(Gradient::new(direction, stops)))
            }
        }
    }
}

fn color_ref(value: &str, palette: &BTreeMap<String, Rgb>) -> Result<Rgb, ThemeError> {
    if value.starts_with('#') {
        return Rgb::from_hex(value);
    }
    palette
        .get(value)
        .copied()
        .map_or_else(|| Rgb::from_hex(value).map_err(|_| ThemeError::UnknownColor(value.to_string())), Ok)
}
