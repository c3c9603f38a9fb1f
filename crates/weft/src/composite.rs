//! A canvas that owns and paints an ordered set of child canvases.

use geom::{Expanse, Rect};
use tracing::trace;

use crate::{
    Result,
    canvas::{Canvas, CanvasState},
    layout::{Layout, NoLayout},
    surface::Surface,
};

/// An ordered collection of child canvases, laid out by a pluggable
/// [`Layout`] strategy.
///
/// The child list is insertion-ordered and re-sorted by z-index on every
/// add, so list order is paint order. Any structural change or resize
/// notifies the layout and triggers a full synchronous relayout; there is no
/// deferred or batched pass, so geometry is always valid by the time anyone
/// can paint.
pub struct Composite {
    state: CanvasState,
    children: Vec<Box<dyn Canvas>>,
    layout: Box<dyn Layout>,
}

impl Composite {
    pub fn new(layout: Box<dyn Layout>) -> Self {
        Self {
            state: CanvasState::default(),
            children: Vec::new(),
            layout,
        }
    }

    /// A composite that leaves child geometry alone.
    pub fn unmanaged() -> Self {
        Self::new(Box::new(NoLayout))
    }

    pub fn children(&self) -> &[Box<dyn Canvas>] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&dyn Canvas> {
        self.children.get(index).map(|c| c.as_ref())
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut Box<dyn Canvas>> {
        self.children.get_mut(index)
    }

    /// Append a child, keeping the list sorted by z-index (stable, so equal
    /// z keeps insertion order), then relayout.
    pub fn add_child(&mut self, child: Box<dyn Canvas>) {
        let z = child.z_index();
        self.children.push(child);
        self.children.sort_by_key(|c| c.z_index());
        // The sort is stable, so the new child is the last entry with its
        // z value; notify with the index it actually ends up at.
        if let Some(idx) = self.children.iter().rposition(|c| c.z_index() == z) {
            self.layout.child_added(idx);
        }
        self.relayout();
    }

    /// Remove and return the child at `index`, then relayout. Returns `None`
    /// if the index is out of range.
    pub fn remove_child(&mut self, index: usize) -> Option<Box<dyn Canvas>> {
        if index >= self.children.len() {
            return None;
        }
        let child = self.children.remove(index);
        self.layout.child_removed(index);
        self.relayout();
        Some(child)
    }

    pub fn remove_all_children(&mut self) {
        while !self.children.is_empty() {
            let idx = self.children.len() - 1;
            self.children.pop();
            self.layout.child_removed(idx);
        }
        self.relayout();
    }

    /// Swap in a new layout strategy and immediately recompute geometry.
    pub fn set_layout(&mut self, layout: Box<dyn Layout>) {
        self.layout = layout;
        self.relayout();
    }

    /// Run the layout pass over the current children.
    pub fn relayout(&mut self) {
        let area = self.state.rect.expanse();
        trace!(w = area.w, h = area.h, children = self.children.len(), "relayout");
        self.layout.layout_children(area, &mut self.children);
    }
}

impl Canvas for Composite {
    fn state(&self) -> &CanvasState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut CanvasState {
        &mut self.state
    }

    fn set_size(&mut self, e: Expanse) {
        let tl = self.state.rect.tl;
        self.state.rect = Rect {
            tl,
            w: e.w,
            h: e.h,
        };
        self.relayout();
    }

    fn preferred_size(&self) -> Expanse {
        self.layout
            .preferred_size(self.state.rect.expanse(), &self.children)
    }

    fn pack(&mut self) -> Result<()> {
        for child in &mut self.children {
            child.pack()?;
        }
        let min = self
            .layout
            .preferred_size(self.state.rect.expanse(), &self.children);
        self.state.min_size = min;
        // Grow to the minimum, never shrink below the current size.
        let cur = self.state.rect.expanse();
        self.set_size(Expanse::new(cur.w.max(min.w), cur.h.max(min.h)));
        Ok(())
    }

    /// Paint children in list order. Invisible or zero-sized children are
    /// skipped; each visible child gets a fresh surface clipped to its own
    /// rectangle, so children compose without seeing each other's
    /// coordinates.
    fn paint(&mut self, surf: &mut Surface<'_>) -> Result<()> {
        for child in &mut self.children {
            let st = child.state();
            if !st.visible || st.rect.is_empty() {
                continue;
            }
            let mut cs = surf.clip(st.rect);
            child.paint(&mut cs)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buf;
    use crate::buffer::Buffer;
    use crate::tutils::BufTest;
    use geom::Point;

    /// A leaf that fills its window with one glyph.
    struct Fill {
        state: CanvasState,
        ch: char,
    }

    impl Fill {
        fn new(ch: char, rect: Rect) -> Self {
            let mut state = CanvasState::default();
            state.rect = rect;
            Self { state, ch }
        }
    }

    impl Canvas for Fill {
        fn state(&self) -> &CanvasState {
            &self.state
        }
        fn state_mut(&mut self) -> &mut CanvasState {
            &mut self.state
        }
        fn paint(&mut self, surf: &mut Surface<'_>) -> Result<()> {
            let w = surf.window();
            surf.fill(w.rect(), self.ch);
            Ok(())
        }
    }

    #[test]
    fn paints_children_in_z_order() {
        let mut c = Composite::unmanaged();
        c.set_size(Expanse::new(4, 2));
        let mut top = Fill::new('b', Rect::new(1, 0, 2, 1));
        top.set_z_index(1);
        c.add_child(Box::new(top));
        // Added later but z 0, so it paints first and 'b' wins the overlap.
        c.add_child(Box::new(Fill::new('a', Rect::new(0, 0, 3, 1))));

        let mut buf = Buffer::new((4, 2));
        c.paint(&mut Surface::root(&mut buf)).unwrap();
        BufTest::new(&buf).assert_matches(buf![
            "abbX"
            "XXXX"
        ]);
    }

    #[test]
    fn skips_invisible_and_empty_children() {
        let mut c = Composite::unmanaged();
        c.set_size(Expanse::new(4, 1));
        let mut hidden = Fill::new('h', Rect::new(0, 0, 4, 1));
        hidden.set_visible(false);
        c.add_child(Box::new(hidden));
        c.add_child(Box::new(Fill::new('z', Rect::new(1, 0, 0, 1))));

        let mut buf = Buffer::new((4, 1));
        c.paint(&mut Surface::root(&mut buf)).unwrap();
        BufTest::new(&buf).assert_matches(buf!["XXXX"]);
    }

    #[test]
    fn children_clip_to_their_rect() {
        let mut c = Composite::unmanaged();
        c.set_size(Expanse::new(5, 3));
        // Child rect pokes off the right edge of the composite's window.
        c.add_child(Box::new(Fill::new('x', Rect::new(3, 1, 5, 1))));

        let mut buf = Buffer::new((5, 3));
        c.paint(&mut Surface::root(&mut buf)).unwrap();
        BufTest::new(&buf).assert_matches(buf![
            "XXXXX"
            "XXXxx"
            "XXXXX"
        ]);
    }

    #[test]
    fn sibling_draws_do_not_leak() {
        let mut c = Composite::unmanaged();
        c.set_size(Expanse::new(6, 1));
        c.add_child(Box::new(Fill::new('a', Rect::new(0, 0, 2, 1))));
        c.add_child(Box::new(Fill::new('b', Rect::new(4, 0, 2, 1))));

        let mut buf = Buffer::new((6, 1));
        c.paint(&mut Surface::root(&mut buf)).unwrap();
        BufTest::new(&buf).assert_matches(buf!["aaXXbb"]);
    }

    #[test]
    fn structural_changes_relayout_immediately() {
        use crate::layout::{BoxLayout, Constraint, SizeSpec};

        let mut c = Composite::new(Box::new(BoxLayout::horizontal()));
        c.set_size(Expanse::new(10, 1));

        let mut a = Fill::new('a', Rect::zero());
        a.set_constraint(Some(Constraint::Size(SizeSpec::Fill)));
        c.add_child(Box::new(a));
        // Geometry is already assigned; no explicit relayout call.
        assert_eq!(c.child(0).unwrap().rect(), Rect::new(0, 0, 10, 1));

        let mut b = Fill::new('b', Rect::zero());
        b.set_constraint(Some(Constraint::Size(SizeSpec::Fill)));
        c.add_child(Box::new(b));
        assert_eq!(c.child(0).unwrap().rect(), Rect::new(0, 0, 5, 1));
        assert_eq!(c.child(1).unwrap().rect(), Rect::new(5, 0, 5, 1));

        c.set_size(Expanse::new(6, 1));
        assert_eq!(c.child(0).unwrap().rect(), Rect::new(0, 0, 3, 1));
        assert_eq!(c.child(1).unwrap().rect(), Rect::new(3, 0, 3, 1));

        c.remove_child(0);
        assert_eq!(c.child(0).unwrap().rect(), Rect::new(0, 0, 6, 1));
    }

    #[test]
    fn child_added_reports_post_sort_index() {
        use std::cell::RefCell;
        use std::rc::Rc;

        struct Recorder(Rc<RefCell<Vec<usize>>>);

        impl Layout for Recorder {
            fn layout_children(&mut self, _area: Expanse, _children: &mut [Box<dyn Canvas>]) {}
            fn preferred_size(&self, _area: Expanse, _children: &[Box<dyn Canvas>]) -> Expanse {
                Expanse::default()
            }
            fn child_added(&mut self, index: usize) {
                self.0.borrow_mut().push(index);
            }
        }

        let added = Rc::new(RefCell::new(Vec::new()));
        let mut c = Composite::new(Box::new(Recorder(added.clone())));

        let mut top = Fill::new('t', Rect::zero());
        top.set_z_index(1);
        c.add_child(Box::new(top));
        // Lower z sorts ahead of the existing child, so its final index
        // is 0, not the pre-sort tail position.
        c.add_child(Box::new(Fill::new('u', Rect::zero())));
        assert_eq!(*added.borrow(), vec![0, 0]);
    }

    #[test]
    fn remove_child_returns_it() {
        let mut c = Composite::unmanaged();
        c.add_child(Box::new(Fill::new('a', Rect::new(0, 0, 1, 1))));
        assert_eq!(c.children().len(), 1);
        assert!(c.remove_child(5).is_none());
        assert!(c.remove_child(0).is_some());
        assert!(c.children().is_empty());
    }

    #[test]
    fn paint_on_zero_surface_is_noop() {
        let mut c = Composite::unmanaged();
        c.set_size(Expanse::new(4, 4));
        c.add_child(Box::new(Fill::new('x', Rect::new(0, 0, 4, 4))));
        let mut buf = Buffer::new((0, 0));
        c.paint(&mut Surface::root(&mut buf)).unwrap();
        assert_eq!(buf.get(Point::zero()), None);
    }
}
