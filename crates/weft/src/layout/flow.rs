use geom::{Expanse, Point};

use super::{Layout, desired_size};
use crate::canvas::Canvas;

/// Places children left-to-right at their preferred sizes, wrapping to a
/// new row when the next child would overrun the container width. Rows are
/// as tall as their tallest member.
pub struct FlowLayout {
    /// Horizontal gap between children in a row.
    pub gap_x: u32,
    /// Vertical gap between rows.
    pub gap_y: u32,
}

impl FlowLayout {
    pub fn new() -> Self {
        Self { gap_x: 0, gap_y: 0 }
    }

    pub fn with_gaps(gap_x: u32, gap_y: u32) -> Self {
        Self { gap_x, gap_y }
    }

    /// Run the placement pass, invoking `f` for each visible child with its
    /// index, origin and size. Returns the bounding expanse of the flow.
    fn flow<F>(&self, area: Expanse, children: &[Box<dyn Canvas>], mut f: F) -> Expanse
    where
        F: FnMut(usize, Point, Expanse),
    {
        let mut x = 0u32;
        let mut y = 0u32;
        let mut row_h = 0u32;
        let mut max_w = 0u32;
        for (i, child) in children.iter().enumerate() {
            if !child.visible() {
                continue;
            }
            let sz = desired_size(child.as_ref());
            // Wrap if this child overruns the row, unless it starts the row.
            if x > 0 && x + sz.w > area.w {
                y = y.saturating_add(row_h).saturating_add(self.gap_y);
                x = 0;
                row_h = 0;
            }
            f(i, Point::new(x, y), sz);
            x = x.saturating_add(sz.w).saturating_add(self.gap_x);
            row_h = row_h.max(sz.h);
            max_w = max_w.max(x.saturating_sub(self.gap_x));
        }
        if row_h > 0 {
            y = y.saturating_add(row_h);
        }
        Expanse::new(max_w, y)
    }
}

impl Default for FlowLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl Layout for FlowLayout {
    fn layout_children(&mut self, area: Expanse, children: &mut [Box<dyn Canvas>]) {
        let mut placements = Vec::new();
        self.flow(area, children, |i, p, sz| placements.push((i, p, sz)));
        for (i, p, sz) in placements {
            children[i].set_position(p);
            children[i].set_size(sz);
        }
    }

    fn preferred_size(&self, area: Expanse, children: &[Box<dyn Canvas>]) -> Expanse {
        self.flow(area, children, |_, _, _| ())
    }
}
