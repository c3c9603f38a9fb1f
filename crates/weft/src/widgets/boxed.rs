use geom::{Expanse, Rect};

use crate::{
    Result,
    canvas::{Canvas, CanvasState},
    surface::Surface,
};

/// The character set used to draw a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub topleft: char,
    pub topright: char,
    pub bottomleft: char,
    pub bottomright: char,
    pub horizontal: char,
    pub vertical: char,
}

/// Single line thin Unicode box drawing set
pub const SINGLE: BorderGlyphs = BorderGlyphs {
    topleft: '┌',
    topright: '┐',
    bottomleft: '└',
    bottomright: '┘',
    horizontal: '─',
    vertical: '│',
};

/// Double line Unicode box drawing set
pub const DOUBLE: BorderGlyphs = BorderGlyphs {
    topleft: '╔',
    topright: '╗',
    bottomleft: '╚',
    bottomright: '╝',
    horizontal: '═',
    vertical: '║',
};

/// Single line thick Unicode box drawing set
pub const SINGLE_THICK: BorderGlyphs = BorderGlyphs {
    topleft: '┏',
    topright: '┓',
    bottomleft: '┗',
    bottomright: '┛',
    horizontal: '━',
    vertical: '┃',
};

/// Wraps a single child in a one-cell border. The child always occupies the
/// interior, at local position (1, 1); at degenerate sizes the interior
/// collapses and nothing inside is painted.
pub struct Boxed<N: Canvas> {
    state: CanvasState,
    glyphs: BorderGlyphs,
    child: N,
}

impl<N: Canvas> Boxed<N> {
    pub fn new(child: N) -> Self {
        Self {
            state: CanvasState::default(),
            glyphs: SINGLE,
            child,
        }
    }

    /// Build with a specified glyph set
    pub fn with_glyphs(mut self, glyphs: BorderGlyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn child(&self) -> &N {
        &self.child
    }

    pub fn child_mut(&mut self) -> &mut N {
        &mut self.child
    }

    fn inner_rect(&self) -> Rect {
        Rect::from(self.state.rect.expanse()).inner(1)
    }

    fn place_child(&mut self) {
        let inner = self.inner_rect();
        self.child.set_position(inner.tl);
        self.child.set_size(inner.expanse());
    }
}

impl<N: Canvas> Canvas for Boxed<N> {
    fn state(&self) -> &CanvasState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut CanvasState {
        &mut self.state
    }

    fn set_size(&mut self, e: Expanse) {
        self.state.rect.w = e.w;
        self.state.rect.h = e.h;
        self.place_child();
    }

    fn preferred_size(&self) -> Expanse {
        let inner = self.child.preferred_size();
        Expanse::new(inner.w.saturating_add(2), inner.h.saturating_add(2))
    }

    fn pack(&mut self) -> Result<()> {
        self.child.pack()?;
        let cm = self.child.min_size();
        self.state.min_size = Expanse::new(cm.w.saturating_add(2), cm.h.saturating_add(2));
        // Grow to fit the packed child, never shrink.
        let cur = self.state.rect.expanse();
        self.set_size(Expanse::new(
            cur.w.max(self.state.min_size.w),
            cur.h.max(self.state.min_size.h),
        ));
        Ok(())
    }

    fn paint(&mut self, surf: &mut Surface<'_>) -> Result<()> {
        let sz = self.state.rect.expanse();
        let frame = geom::Frame::new(sz.rect(), 1);

        surf.fill(frame.topleft, self.glyphs.topleft);
        surf.fill(frame.topright, self.glyphs.topright);
        surf.fill(frame.bottomleft, self.glyphs.bottomleft);
        surf.fill(frame.bottomright, self.glyphs.bottomright);
        surf.fill(frame.top, self.glyphs.horizontal);
        surf.fill(frame.bottom, self.glyphs.horizontal);
        surf.fill(frame.left, self.glyphs.vertical);
        surf.fill(frame.right, self.glyphs.vertical);

        let inner = self.inner_rect();
        if !inner.is_empty() && self.child.visible() {
            let mut cs = surf.clip(inner);
            self.child.paint(&mut cs)?;
        }
        Ok(())
    }
}
