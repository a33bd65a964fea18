//! Symbolic per-axis region constraints.
//!
//! Constraints are written the way screen definitions spell them: `12`,
//! `"25%"`, `"FILL"`, `"BOTTOM"`, `"BOTTOM-3"`, `"CENTER"`. Parsing never
//! fails; input that matches no form is kept as
//! [`RegionConstraint::Unrecognized`] and degrades when resolved.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// One axis value of a region definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RegionConstraint {
    /// Absolute cell value.
    Literal(i32),
    /// `N%` of the axis total, floored.
    Percent(u32),
    /// Take the rest of the axis (extents only).
    Fill,
    /// Last row (Y only).
    Bottom,
    /// `N` rows above the bottom edge, i.e. `total - N` (Y only).
    BottomOffset(u32),
    /// Centered on the axis (positions only).
    Center,
    /// Anything else; kept for diagnostics.
    Unrecognized(String),
}

impl RegionConstraint {
    /// Parse a constraint keyword. Keywords are case-insensitive.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        let upper = trimmed.to_ascii_uppercase();

        if let Ok(n) = trimmed.parse::<i32>() {
            return Self::Literal(n);
        }
        if let Some(pct) = trimmed.strip_suffix('%') {
            return pct
                .trim()
                .parse::<u32>()
                .map_or_else(|_| Self::Unrecognized(trimmed.to_string()), Self::Percent);
        }
        match upper.as_str() {
            "FILL" => Self::Fill,
            "BOTTOM" => Self::Bottom,
            "CENTER" => Self::Center,
            _ => upper
                .strip_prefix("BOTTOM-")
                .and_then(|n| n.trim().parse::<u32>().ok())
                .map_or_else(|| Self::Unrecognized(trimmed.to_string()), Self::BottomOffset),
        }
    }
}

impl FromStr for RegionConstraint {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for RegionConstraint {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<i32> for RegionConstraint {
    fn from(n: i32) -> Self {
        Self::Literal(n)
    }
}

impl From<u16> for RegionConstraint {
    fn from(n: u16) -> Self {
        Self::Literal(i32::from(n))
    }
}

impl fmt::Display for RegionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(n) => write!(f, "{n}"),
            Self::Percent(n) => write!(f, "{n}%"),
            Self::Fill => f.write_str("FILL"),
            Self::Bottom => f.write_str("BOTTOM"),
            Self::BottomOffset(n) => write!(f, "BOTTOM-{n}"),
            Self::Center => f.write_str("CENTER"),
            Self::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

/// The four constraints that define a named region.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegionSpec {
    /// Column of the left edge.
    pub x: RegionConstraint,
    /// Row of the top edge.
    pub y: RegionConstraint,
    /// Width in columns.
    pub width: RegionConstraint,
    /// Height in rows.
    pub height: RegionConstraint,
}

impl RegionSpec {
    /// Build a spec from anything convertible into constraints.
    pub fn new(
        x: impl Into<RegionConstraint>,
        y: impl Into<RegionConstraint>,
        width: impl Into<RegionConstraint>,
        height: impl Into<RegionConstraint>,
    ) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            width: width.into(),
            height: height.into(),
        }
    }
}
