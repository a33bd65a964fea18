//! Named region resolution.
//!
//! A [`RegionLayout`] maps region names to [`RegionSpec`]s and resolves them
//! against a terminal size. X and width resolve against the total width,
//! Y and height against the total height, independently of each other.
//!
//! Resolution never fails on a bad constraint: unusable positions become 0
//! and unusable extents become 1. Asking for a region name that was never
//! defined is a wiring bug and returns [`LayoutError::UnknownRegion`].

use std::collections::HashMap;

use tracing::debug;

use super::constraint::{RegionConstraint, RegionSpec};
use super::rect::Rect;
use crate::error::LayoutError;

/// Names of the regions every [`RegionLayout`] starts with.
pub mod regions {
    /// Top menu bar row.
    pub const MENU_BAR: &str = "MenuBar";
    /// Screen title row under the menu bar.
    pub const HEADER: &str = "Header";
    /// Main content area.
    pub const CONTENT: &str = "Content";
    /// Key-hint row above the status bar.
    pub const FOOTER: &str = "Footer";
    /// Bottom status row.
    pub const STATUS_BAR: &str = "StatusBar";
    /// Left navigation column.
    pub const SIDEBAR: &str = "Sidebar";
    /// Content area to the right of the sidebar.
    pub const MAIN_WITH_SIDEBAR: &str = "MainWithSidebar";
}

/// Axis a constraint is resolved on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Resolves named symbolic regions to absolute rectangles.
#[derive(Debug, Clone)]
pub struct RegionLayout {
    specs: HashMap<String, RegionSpec>,
    reserved_footer: u16,
    reserved_status_bar: u16,
}

impl Default for RegionLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionLayout {
    /// Create a layout holding the standard region set.
    pub fn new() -> Self {
        let mut layout = Self::empty();
        layout.define_region(regions::MENU_BAR, RegionSpec::new(0, 0, "FILL", 1));
        layout.define_region(regions::HEADER, RegionSpec::new(0, 1, "FILL", 1));
        layout.define_region(regions::CONTENT, RegionSpec::new(0, 2, "FILL", "FILL"));
        layout.define_region(regions::FOOTER, RegionSpec::new(0, "BOTTOM-2", "FILL", 1));
        layout.define_region(regions::STATUS_BAR, RegionSpec::new(0, "BOTTOM", "FILL", 1));
        layout.define_region(regions::SIDEBAR, RegionSpec::new(0, 2, "25%", "FILL"));
        layout.define_region(regions::MAIN_WITH_SIDEBAR, RegionSpec::new("25%", 2, "FILL", "FILL"));
        layout
    }

    /// Create a layout with no regions defined.
    pub fn empty() -> Self {
        Self {
            specs: HashMap::new(),
            reserved_footer: 1,
            reserved_status_bar: 1,
        }
    }

    /// Rows kept free below `FILL` heights for the footer and status bar.
    pub const fn reserved(&self) -> (u16, u16) {
        (self.reserved_footer, self.reserved_status_bar)
    }

    /// Change the rows kept free below `FILL` heights.
    pub const fn set_reserved(&mut self, footer: u16, status_bar: u16) {
        self.reserved_footer = footer;
        self.reserved_status_bar = status_bar;
    }

    /// Define a region, replacing any previous definition with the same name.
    pub fn define_region(&mut self, name: impl Into<String>, spec: RegionSpec) {
        self.specs.insert(name.into(), spec);
    }

    /// Remove a region, returning its definition.
    pub fn remove_region(&mut self, name: &str) -> Option<RegionSpec> {
        self.specs.remove(name)
    }

    /// Whether a region with this name is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.specs.contains_key(name)
    }

    /// The definition of a region.
    pub fn spec(&self, name: &str) -> Option<&RegionSpec> {
        self.specs.get(name)
    }

    /// All defined region names, sorted.
    pub fn region_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.specs.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Resolve a named region for a terminal of the given size.
    pub fn region(&self, name: &str, total_width: u16, total_height: u16) -> Result<Rect, LayoutError> {
        let spec = self.specs.get(name).ok_or_else(|| LayoutError::UnknownRegion {
            name: name.to_string(),
            known: self.region_names(),
        })?;
        let rect = self.resolve(spec, total_width, total_height);
        debug!(region = name, ?rect, total_width, total_height, "resolved region");
        Ok(rect)
    }

    /// Resolve every defined region, sorted by name.
    pub fn resolve_all(&self, total_width: u16, total_height: u16) -> Vec<(String, Rect)> {
        let mut resolved: Vec<(String, Rect)> = self
            .specs
            .iter()
            .map(|(name, spec)| (name.clone(), self.resolve(spec, total_width, total_height)))
            .collect();
        resolved.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        resolved
    }

    /// Resolve an unnamed spec for a terminal of the given size.
    pub fn resolve(&self, spec: &RegionSpec, total_width: u16, total_height: u16) -> Rect {
        let (x, width) = self.resolve_axis(&spec.x, &spec.width, i64::from(total_width), Axis::Horizontal);
        let (y, height) = self.resolve_axis(&spec.y, &spec.height, i64::from(total_height), Axis::Vertical);
        Rect::clamped(x, y, width, height)
    }

    /// Resolve one position/extent pair.
    ///
    /// `CENTER` needs the extent first, so the extent is resolved as if the
    /// position were 0 and the position is derived from it.
    fn resolve_axis(
        &self,
        position: &RegionConstraint,
        extent: &RegionConstraint,
        total: i64,
        axis: Axis,
    ) -> (i64, i64) {
        if *position == RegionConstraint::Center {
            let size = self.resolve_extent(extent, total, 0, axis);
            return (((total - size) / 2).max(0), size);
        }
        let origin = resolve_position(position, total, axis);
        (origin, self.resolve_extent(extent, total, origin, axis))
    }

    fn resolve_extent(&self, constraint: &RegionConstraint, total: i64, origin: i64, axis: Axis) -> i64 {
        match (constraint, axis) {
            (RegionConstraint::Literal(n), _) => i64::from(*n).max(0),
            (RegionConstraint::Percent(n), _) => percent_of(total, *n),
            (RegionConstraint::Fill, Axis::Horizontal) => (total - origin).max(1),
            (RegionConstraint::Fill, Axis::Vertical) => {
                let reserved = i64::from(self.reserved_footer) + i64::from(self.reserved_status_bar);
                (total - origin - reserved - 1).max(1)
            }
            (other, _) => {
                debug!(constraint = %other, ?axis, "unusable extent constraint, using 1");
                1
            }
        }
    }
}

fn resolve_position(constraint: &RegionConstraint, total: i64, axis: Axis) -> i64 {
    match (constraint, axis) {
        (RegionConstraint::Literal(n), _) => i64::from(*n).max(0),
        (RegionConstraint::Percent(n), _) => percent_of(total, *n),
        (RegionConstraint::Bottom, Axis::Vertical) => (total - 1).max(0),
        (RegionConstraint::BottomOffset(n), Axis::Vertical) => (total - i64::from(*n)).max(0),
        (other, _) => {
            debug!(constraint = %other, ?axis, "unusable position constraint, using 0");
            0
        }
    }
}

fn percent_of(total: i64, percent: u32) -> i64 {
    (total * i64::from(percent)).div_euclid(100).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(spec: RegionSpec) -> RegionLayout {
        let mut layout = RegionLayout::empty();
        layout.define_region("Custom", spec);
        layout
    }

    #[test]
    fn test_percent_width_floors() {
        for (total, pct, expected) in [(80, 100, 80), (80, 0, 0), (81, 50, 40), (79, 33, 26)] {
            let layout = custom(RegionSpec::new(0, 0, format!("{pct}%").as_str(), 1));
            let rect = layout.region("Custom", total, 24).unwrap();
            assert_eq!(rect.width, expected, "{pct}% of {total}");
        }
    }

    #[test]
    fn test_fill_height_subtracts_reserved_rows_and_margin() {
        let layout = RegionLayout::new();
        let content = layout.region(regions::CONTENT, 80, 24).unwrap();
        // 24 - 2 (y) - 1 (footer) - 1 (status bar) - 1 (margin)
        assert_eq!(content, Rect::new(0, 2, 80, 19));
    }

    #[test]
    fn test_fill_height_never_below_one() {
        let layout = RegionLayout::new();
        for height in 0..8 {
            let content = layout.region(regions::CONTENT, 80, height).unwrap();
            assert!(content.height >= 1);
        }
    }

    #[test]
    fn test_fill_width_is_rest_of_row() {
        let layout = custom(RegionSpec::new(30, 0, "FILL", 1));
        assert_eq!(layout.region("Custom", 80, 24).unwrap().width, 50);
        assert_eq!(layout.region("Custom", 20, 24).unwrap().width, 1);
    }

    #[test]
    fn test_bottom_rows() {
        let layout = RegionLayout::new();
        assert_eq!(layout.region(regions::STATUS_BAR, 80, 24).unwrap(), Rect::new(0, 23, 80, 1));
        assert_eq!(layout.region(regions::FOOTER, 80, 24).unwrap(), Rect::new(0, 22, 80, 1));
        assert_eq!(layout.region(regions::FOOTER, 80, 1).unwrap().y, 0);
        assert_eq!(layout.region(regions::STATUS_BAR, 80, 0).unwrap().y, 0);
    }

    #[test]
    fn test_sidebar_split() {
        let layout = RegionLayout::new();
        let sidebar = layout.region(regions::SIDEBAR, 100, 30).unwrap();
        let main = layout.region(regions::MAIN_WITH_SIDEBAR, 100, 30).unwrap();
        assert_eq!(sidebar.width, 25);
        assert_eq!(main.x, 25);
        assert_eq!(main.width, 75);
    }

    #[test]
    fn test_malformed_constraints_degrade() {
        let layout = custom(RegionSpec::new("LEFT", "BOTTOM-x", "BOTTOM", "whatever"));
        assert_eq!(layout.region("Custom", 80, 24).unwrap(), Rect::new(0, 0, 1, 1));
    }

    #[test]
    fn test_bottom_on_horizontal_axis_degrades() {
        let layout = custom(RegionSpec::new("BOTTOM", 0, 5, 1));
        assert_eq!(layout.region("Custom", 80, 24).unwrap().x, 0);
    }

    #[test]
    fn test_negative_literals_clamp() {
        let layout = custom(RegionSpec::new(-4, -1, -10, -2));
        assert_eq!(layout.region("Custom", 80, 24).unwrap(), Rect::ZERO);
    }

    #[test]
    fn test_center_resolves_extent_first() {
        let layout = custom(RegionSpec::new("CENTER", "CENTER", 40, 10));
        assert_eq!(layout.region("Custom", 100, 30).unwrap(), Rect::new(30, 10, 40, 10));

        let wide = custom(RegionSpec::new("CENTER", 0, 120, 1));
        assert_eq!(wide.region("Custom", 100, 30).unwrap().x, 0);
    }

    #[test]
    fn test_unknown_region_is_an_error() {
        let layout = RegionLayout::new();
        let err = layout.region("Nope", 80, 24).unwrap_err();
        let LayoutError::UnknownRegion { name, known } = err;
        assert_eq!(name, "Nope");
        assert_eq!(known.len(), 7);
        assert!(known.contains(&regions::CONTENT.to_string()));
    }

    #[test]
    fn test_define_and_remove_region() {
        let mut layout = RegionLayout::new();
        layout.define_region("Dialog", RegionSpec::new("CENTER", "CENTER", "50%", "50%"));
        assert!(layout.contains("Dialog"));
        assert_eq!(layout.region("Dialog", 80, 24).unwrap(), Rect::new(20, 6, 40, 12));

        let removed = layout.remove_region("Dialog");
        assert!(removed.is_some());
        assert!(layout.region("Dialog", 80, 24).is_err());
    }

    #[test]
    fn test_reserved_rows_are_configurable() {
        let mut layout = RegionLayout::new();
        layout.set_reserved(0, 0);
        assert_eq!(layout.region(regions::CONTENT, 80, 24).unwrap().height, 21);
    }
}
