//! One-dimensional stack distribution.
//!
//! [`solve_stack`] places children along a main axis. Children with a
//! nonzero intrinsic size keep it; children with size 0 stretch and share
//! what is left equally (floored, the remainder stays unused). The result
//! is recomputed from scratch on every call.

use super::rect::Rect;

/// Direction children flow in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    #[default]
    Vertical,
}

/// Alignment on the main axis (direction of flow).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MainAxisAlignment {
    /// Pack children at the start.
    #[default]
    Start,
    /// Center the packed children.
    Center,
    /// Pack children at the end.
    End,
    /// Start at the origin; stretch children absorb the free space.
    Stretch,
}

/// Alignment on the cross axis (perpendicular to flow).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CrossAxisAlignment {
    /// Align to start of cross axis.
    Start,
    /// Center on cross axis.
    Center,
    /// Align to end of cross axis.
    End,
    /// Fill the cross axis.
    #[default]
    Stretch,
}

/// Sizing input for one child.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StackItem {
    /// Size along the main axis; 0 means stretch.
    pub main: u16,
    /// Size along the cross axis; 0 means the full cross extent.
    pub cross: u16,
}

impl StackItem {
    /// A child with fixed main and cross sizes.
    pub const fn fixed(main: u16, cross: u16) -> Self {
        Self { main, cross }
    }

    /// A child that stretches along the main axis.
    pub const fn stretch() -> Self {
        Self { main: 0, cross: 0 }
    }

    /// Whether this child takes a share of the free space.
    pub const fn is_stretch(&self) -> bool {
        self.main == 0
    }
}

/// How a stack distributes its children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StackConfig {
    /// Flow direction.
    pub orientation: Orientation,
    /// Cells between consecutive children.
    pub spacing: u16,
    /// Main-axis alignment.
    pub main_align: MainAxisAlignment,
    /// Cross-axis alignment.
    pub cross_align: CrossAxisAlignment,
}

impl StackConfig {
    /// A vertical stack with no spacing.
    pub const fn vertical() -> Self {
        Self {
            orientation: Orientation::Vertical,
            spacing: 0,
            main_align: MainAxisAlignment::Start,
            cross_align: CrossAxisAlignment::Stretch,
        }
    }

    /// A horizontal stack with no spacing.
    pub const fn horizontal() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            ..Self::vertical()
        }
    }

    /// Set the spacing (builder pattern).
    #[must_use]
    pub const fn with_spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the main-axis alignment (builder pattern).
    #[must_use]
    pub const fn with_main_align(mut self, align: MainAxisAlignment) -> Self {
        self.main_align = align;
        self
    }

    /// Set the cross-axis alignment (builder pattern).
    #[must_use]
    pub const fn with_cross_align(mut self, align: CrossAxisAlignment) -> Self {
        self.cross_align = align;
        self
    }
}

/// Compute one rectangle per item inside `area`.
///
/// Rectangles are returned in item order. Fixed children that overflow the
/// area are not shrunk; clipping is left to the caller.
pub fn solve_stack(items: &[StackItem], area: Rect, config: &StackConfig) -> Vec<Rect> {
    if items.is_empty() {
        return Vec::new();
    }

    let (main_origin, main_extent, cross_origin, cross_extent) = match config.orientation {
        Orientation::Horizontal => (area.x, area.width, area.y, area.height),
        Orientation::Vertical => (area.y, area.height, area.x, area.width),
    };

    let count = i64::try_from(items.len()).unwrap_or(i64::MAX);
    let spacing = i64::from(config.spacing);
    let available = i64::from(main_extent) - spacing * (count - 1);

    let fixed_total: i64 = items.iter().map(|item| i64::from(item.main)).sum();
    let stretch_count = items.iter().filter(|item| item.is_stretch()).count();
    let stretch_size = if stretch_count == 0 {
        0
    } else {
        let shares = i64::try_from(stretch_count).unwrap_or(i64::MAX);
        ((available - fixed_total) / shares).max(0)
    };

    let sizes: Vec<i64> = items
        .iter()
        .map(|item| if item.is_stretch() { stretch_size } else { i64::from(item.main) })
        .collect();
    let used: i64 = sizes.iter().sum();
    let slack = (available - used).max(0);

    let mut offset = i64::from(main_origin)
        + match config.main_align {
            MainAxisAlignment::Start | MainAxisAlignment::Stretch => 0,
            MainAxisAlignment::Center => slack / 2,
            MainAxisAlignment::End => slack,
        };

    let mut rects = Vec::with_capacity(items.len());
    for (item, size) in items.iter().zip(sizes) {
        let (cross_offset, cross_size) = place_cross(item.cross, cross_extent, config.cross_align);
        let cross_pos = i64::from(cross_origin) + cross_offset;
        let rect = match config.orientation {
            Orientation::Horizontal => Rect::clamped(offset, cross_pos, size, cross_size),
            Orientation::Vertical => Rect::clamped(cross_pos, offset, cross_size, size),
        };
        rects.push(rect);
        offset += size + spacing;
    }
    rects
}

fn place_cross(intrinsic: u16, extent: u16, align: CrossAxisAlignment) -> (i64, i64) {
    let extent = i64::from(extent);
    let size = if intrinsic == 0 || align == CrossAxisAlignment::Stretch {
        extent
    } else {
        i64::from(intrinsic).min(extent)
    };
    let offset = match align {
        CrossAxisAlignment::Start | CrossAxisAlignment::Stretch => 0,
        CrossAxisAlignment::Center => (extent - size) / 2,
        CrossAxisAlignment::End => extent - size,
    };
    (offset, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn main_sizes(rects: &[Rect]) -> Vec<u16> {
        rects.iter().map(|r| r.width).collect()
    }

    #[test]
    fn test_three_stretch_children_share_floor() {
        let items = [StackItem::stretch(); 3];
        let config = StackConfig::horizontal().with_spacing(1);
        let rects = solve_stack(&items, Rect::new(0, 0, 100, 1), &config);

        assert_eq!(main_sizes(&rects), vec![32, 32, 32]);
        assert_eq!(rects.iter().map(|r| r.x).collect::<Vec<_>>(), vec![0, 33, 66]);

        let used: u16 = rects.iter().map(|r| r.width).sum::<u16>() + 2;
        assert!(used <= 100);
    }

    #[test]
    fn test_fixed_and_stretch_mix() {
        let items = [StackItem::fixed(10, 0), StackItem::stretch(), StackItem::fixed(20, 0)];
        let rects = solve_stack(&items, Rect::new(5, 0, 100, 3), &StackConfig::horizontal());

        assert_eq!(main_sizes(&rects), vec![10, 70, 20]);
        assert_eq!(rects[0].x, 5);
        assert_eq!(rects[1].x, 15);
        assert_eq!(rects[2].x, 85);
    }

    #[test]
    fn test_main_alignment_offsets_by_slack() {
        let items = [StackItem::fixed(10, 0), StackItem::fixed(10, 0)];
        let area = Rect::new(0, 0, 50, 1);

        let start = solve_stack(&items, area, &StackConfig::horizontal());
        assert_eq!(start[0].x, 0);

        let center = solve_stack(
            &items,
            area,
            &StackConfig::horizontal().with_main_align(MainAxisAlignment::Center),
        );
        assert_eq!(center[0].x, 15);
        assert_eq!(center[1].x, 25);

        let end = solve_stack(
            &items,
            area,
            &StackConfig::horizontal().with_main_align(MainAxisAlignment::End),
        );
        assert_eq!(end[0].x, 30);
        assert_eq!(end[1].right(), 50);

        let stretch = solve_stack(
            &items,
            area,
            &StackConfig::horizontal().with_main_align(MainAxisAlignment::Stretch),
        );
        assert_eq!(stretch[0].x, 0);
    }

    #[test]
    fn test_cross_alignment() {
        let item = [StackItem::fixed(2, 4)];
        let area = Rect::new(0, 0, 10, 10);
        let place = |align| solve_stack(&item, area, &StackConfig::vertical().with_cross_align(align))[0];

        assert_eq!(place(CrossAxisAlignment::Start), Rect::new(0, 0, 4, 2));
        assert_eq!(place(CrossAxisAlignment::Center), Rect::new(3, 0, 4, 2));
        assert_eq!(place(CrossAxisAlignment::End), Rect::new(6, 0, 4, 2));
        assert_eq!(place(CrossAxisAlignment::Stretch), Rect::new(0, 0, 10, 2));
    }

    #[test]
    fn test_cross_size_clamps_to_extent() {
        let item = [StackItem::fixed(1, 40)];
        let config = StackConfig::vertical().with_cross_align(CrossAxisAlignment::Center);
        let rect = solve_stack(&item, Rect::new(0, 0, 10, 5), &config)[0];
        assert_eq!(rect, Rect::new(0, 0, 10, 1));
    }

    #[test]
    fn test_empty_stack_is_noop() {
        assert!(solve_stack(&[], Rect::new(0, 0, 10, 10), &StackConfig::vertical()).is_empty());
    }

    #[test]
    fn test_zero_extent_clamps_stretch_to_zero() {
        let items = [StackItem::stretch(), StackItem::fixed(3, 0), StackItem::stretch()];
        let config = StackConfig::vertical().with_spacing(2);
        let rects = solve_stack(&items, Rect::new(0, 0, 10, 0), &config);

        assert_eq!(rects[0].height, 0);
        assert_eq!(rects[1].height, 3);
        assert_eq!(rects[2].height, 0);
    }

    #[test]
    fn test_vertical_walk_accumulates_spacing() {
        let items = [StackItem::fixed(2, 0), StackItem::fixed(3, 0), StackItem::fixed(1, 0)];
        let config = StackConfig::vertical().with_spacing(1);
        let rects = solve_stack(&items, Rect::new(4, 10, 20, 20), &config);

        assert_eq!(rects.iter().map(|r| r.y).collect::<Vec<_>>(), vec![10, 13, 17]);
        assert!(rects.iter().all(|r| r.x == 4 && r.width == 20));
    }
}
