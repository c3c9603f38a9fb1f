//! Layout strategies: computing child geometry within a container.
//!
//! A layout operates only on visible children, never reorders the child
//! list, and treats each child's min/max size as a hard clamp on whatever
//! size the algorithm would otherwise assign. When children cannot fit, the
//! result is best-effort degradation, never an error.

mod border;
mod boxlayout;
mod flow;

pub use border::BorderLayout;
pub use boxlayout::BoxLayout;
pub use flow::FlowLayout;

use geom::{Expanse, Point, Rect};

use crate::canvas::Canvas;

/// A hint attached to a child, consulted only by the layout in effect on
/// its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Position(Position),
    Size(SizeSpec),
}

/// Where a child wants to sit within its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Anchor(Anchor),
    Absolute(u32, u32),
}

/// The nine anchor points of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    Top,
    TopRight,
    Left,
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

/// How a child wants to be sized along a layout's main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeSpec {
    /// Exactly this many cells.
    Fixed(u32),
    /// A percentage of the container's extent.
    Percentage(u8),
    /// Absorb as much space as the layout will give.
    Fill,
    /// Whatever the child itself prefers.
    Preferred,
}

/// A strategy computing child geometry within a container.
///
/// `layout_children` assigns geometry; `preferred_size` is a pure query
/// derived from the children's current sizes, used for auto-sizing
/// ancestors. The hooks exist for layouts keeping incremental bookkeeping
/// and default to no-ops.
pub trait Layout {
    /// Recompute the geometry of `children` within a container of size
    /// `area`. Invisible children are left untouched.
    fn layout_children(&mut self, area: Expanse, children: &mut [Box<dyn Canvas>]);

    /// The container size this layout would prefer for the given children,
    /// without mutating them.
    fn preferred_size(&self, area: Expanse, children: &[Box<dyn Canvas>]) -> Expanse;

    /// Notification that a child was inserted at `index`.
    fn child_added(&mut self, _index: usize) {}

    /// Notification that the child at `index` was removed.
    fn child_removed(&mut self, _index: usize) {}
}

/// The identity layout: child geometry set by hand is preserved, except
/// that children carrying a [`Position`] constraint are re-anchored within
/// the container each pass.
pub struct NoLayout;

impl Layout for NoLayout {
    fn layout_children(&mut self, area: Expanse, children: &mut [Box<dyn Canvas>]) {
        for child in children.iter_mut() {
            if !child.visible() {
                continue;
            }
            if let Some(Constraint::Position(pos)) = child.constraint() {
                let sz = child.rect().expanse();
                child.set_position(place(pos, area, sz));
            }
        }
    }

    fn preferred_size(&self, _area: Expanse, children: &[Box<dyn Canvas>]) -> Expanse {
        // The bounding box of the children as currently placed.
        let mut w = 0;
        let mut h = 0;
        for child in children.iter().filter(|c| c.visible()) {
            let r = child.rect();
            w = w.max(r.tl.x + r.w);
            h = h.max(r.tl.y + r.h);
        }
        Expanse::new(w, h)
    }
}

/// Resolve a position constraint to a top-left point for a child of size
/// `sz` in a container of size `area`. Anchors that would overflow clamp
/// to the container's origin edge.
pub(crate) fn place(pos: Position, area: Expanse, sz: Expanse) -> Point {
    let right = area.w.saturating_sub(sz.w);
    let bottom = area.h.saturating_sub(sz.h);
    match pos {
        Position::Absolute(x, y) => Point::new(x, y),
        Position::Anchor(a) => match a {
            Anchor::TopLeft => Point::zero(),
            Anchor::Top => Point::new(right / 2, 0),
            Anchor::TopRight => Point::new(right, 0),
            Anchor::Left => Point::new(0, bottom / 2),
            Anchor::Center => Point::new(right / 2, bottom / 2),
            Anchor::Right => Point::new(right, bottom / 2),
            Anchor::BottomLeft => Point::new(0, bottom),
            Anchor::Bottom => Point::new(right / 2, bottom),
            Anchor::BottomRight => Point::new(right, bottom),
        },
    }
}

/// The size a child would take if given free choice, clamped into its
/// min/max bounds.
pub(crate) fn desired_size(child: &dyn Canvas) -> Expanse {
    child.state().clamp_size(child.preferred_size())
}

/// Assign a rect to a child, clamping the size into the child's bounds.
pub(crate) fn assign(child: &mut dyn Canvas, r: Rect) {
    let sz = child.state().clamp_size(r.expanse());
    child.set_position(r.tl);
    child.set_size(sz);
}
