//! Layout module: named region resolution and one-dimensional stacks.
//!
//! Both solvers are pure: they are recomputed on every resize or on demand,
//! and keep no state between calls.

mod constraint;
mod rect;
mod region;
mod stack;

pub use constraint::{RegionConstraint, RegionSpec};
pub use rect::Rect;
pub use region::{regions, RegionLayout};
pub use stack::{
    solve_stack, CrossAxisAlignment, MainAxisAlignment, Orientation, StackConfig, StackItem,
};
