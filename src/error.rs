//! Error types.
//!
//! Only wiring mistakes surface as errors to callers. Theme and render
//! faults are recovered where they happen and logged.

use thiserror::Error;

/// Errors raised by region resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A region name that was never defined was requested.
    #[error("unknown layout region '{name}' (known regions: {})", known.join(", "))]
    UnknownRegion {
        /// The requested name.
        name: String,
        /// Every defined region name, sorted.
        known: Vec<String>,
    },
}

/// Errors raised while parsing theme definitions.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A color string is not six hex digits.
    #[error("invalid hex color '{0}' (expected #RRGGBB)")]
    InvalidHex(String),

    /// A color reference is neither a hex color nor a palette entry.
    #[error("'{0}' is neither a hex color nor a palette entry")]
    UnknownColor(String),

    /// A gradient was defined without stops.
    #[error("gradient '{0}' has no stops")]
    EmptyGradient(String),

    /// A gradient direction keyword was not recognized.
    #[error("unknown gradient direction '{0}'")]
    UnknownDirection(String),

    /// The theme document could not be parsed.
    #[error("failed to parse theme: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A widget failed to draw itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The widget reported a failure.
    #[error("{0}")]
    Failed(String),

    /// The widget panicked while drawing.
    #[error("panicked: {0}")]
    Panicked(String),
}

impl DrawError {
    /// Create a failure with a message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// Crate-level error.
#[derive(Debug, Error)]
pub enum Error {
    /// Region resolution failed.
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Theme parsing failed.
    #[error(transparent)]
    Theme(#[from] ThemeError),

    /// Drawing failed.
    #[error(transparent)]
    Draw(#[from] DrawError),
}

/// Crate-level result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;
