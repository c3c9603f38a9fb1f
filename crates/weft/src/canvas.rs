//! The drawable tree node abstraction.

use geom::{Expanse, Point, Rect};

use crate::{Result, layout::Constraint, surface::Surface};

/// Geometry and bookkeeping shared by every canvas. Implementors embed one
/// of these and expose it through [`Canvas::state`]/[`Canvas::state_mut`];
/// the trait's provided methods do the rest.
#[derive(Debug, Clone)]
pub struct CanvasState {
    /// Position and size, in the parent's local coordinate system.
    pub rect: Rect,
    /// Hard lower bound on size assigned by layout.
    pub min_size: Expanse,
    /// Hard upper bound on size assigned by layout.
    pub max_size: Expanse,
    /// Invisible canvases are skipped by paint and left untouched by layout.
    pub visible: bool,
    /// Paint order among siblings; higher paints later (on top).
    pub z_index: i32,
    /// Optional hint consulted only by the parent's layout.
    pub constraint: Option<Constraint>,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            rect: Rect::zero(),
            min_size: Expanse::default(),
            max_size: Expanse::new(u32::MAX, u32::MAX),
            visible: true,
            z_index: 0,
            constraint: None,
        }
    }
}

impl CanvasState {
    /// Clamp a requested size into this canvas's `[min, max]` bounds.
    pub fn clamp_size(&self, e: Expanse) -> Expanse {
        e.clamp(self.min_size, self.max_size)
    }
}

/// A positioned, sized, paintable tree node.
///
/// `paint` receives a surface already scoped to the canvas's own rectangle:
/// the canvas draws from a local (0, 0) origin and cannot reach outside its
/// window. Painting is a pure side effect of writing cells and must succeed
/// for any surface size, including 0×0, where writes become no-ops.
pub trait Canvas {
    fn state(&self) -> &CanvasState;
    fn state_mut(&mut self) -> &mut CanvasState;

    /// Draw this canvas onto `surf`.
    fn paint(&mut self, surf: &mut Surface<'_>) -> Result<()>;

    /// The size this canvas would take given free choice. Defaults to the
    /// current size. Pure query; must not mutate geometry.
    fn preferred_size(&self) -> Expanse {
        self.state().rect.expanse()
    }

    /// Shrink-wrap this canvas around its content. Default: nothing to do.
    fn pack(&mut self) -> Result<()> {
        Ok(())
    }

    fn rect(&self) -> Rect {
        self.state().rect
    }

    fn set_position(&mut self, p: Point) {
        self.state_mut().rect.tl = p;
    }

    fn set_size(&mut self, e: Expanse) {
        let r = self.state().rect;
        self.state_mut().rect = Rect {
            tl: r.tl,
            w: e.w,
            h: e.h,
        };
    }

    fn min_size(&self) -> Expanse {
        self.state().min_size
    }

    fn set_min_size(&mut self, e: Expanse) {
        self.state_mut().min_size = e;
    }

    fn max_size(&self) -> Expanse {
        self.state().max_size
    }

    fn set_max_size(&mut self, e: Expanse) {
        self.state_mut().max_size = e;
    }

    fn visible(&self) -> bool {
        self.state().visible
    }

    fn set_visible(&mut self, v: bool) {
        self.state_mut().visible = v;
    }

    fn z_index(&self) -> i32 {
        self.state().z_index
    }

    fn set_z_index(&mut self, z: i32) {
        self.state_mut().z_index = z;
    }

    fn constraint(&self) -> Option<Constraint> {
        self.state().constraint
    }

    fn set_constraint(&mut self, c: Option<Constraint>) {
        self.state_mut().constraint = c;
    }
}
