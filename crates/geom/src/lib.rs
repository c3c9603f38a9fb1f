//! Geometry primitives used across weft.
//!
//! All types here are small `Copy` values on an unsigned integer grid. The
//! operations are total: intersections that come up empty return `None`, and
//! degenerate constructions collapse to zero-sized values rather than
//! erroring, so drawing and layout code can stay branch-light.

/// Width/height size type.
mod expanse;
/// Frame extraction from rectangles.
mod frame;
/// Horizontal line helpers.
mod line;
/// Point helpers.
mod point;
/// Rectangle operations.
mod rect;

pub use expanse::Expanse;
pub use frame::Frame;
pub use line::Line;
pub use point::Point;
pub use rect::Rect;

/// The axis a one-dimensional operation runs along.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Axis {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
}
