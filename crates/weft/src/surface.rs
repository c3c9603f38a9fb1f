//! Clipped, translated drawing handles over a [`Buffer`].
//!
//! A `Surface` lets a component draw as if it owned an independent surface
//! with origin (0, 0), while its writes land in a shared root buffer.
//! Nesting is flat by construction: clipping a surface produces a new
//! `Surface` whose offset is the arithmetic sum of the chain of offsets and
//! whose window is the running intersection, always targeting the root
//! buffer directly. There is never a wrapper-of-wrapper chain to walk per
//! cell.
//!
//! Surfaces are transient: one is created for each child for the duration of
//! a paint call and discarded afterwards, since it captures an offset
//! snapshot.

use geom::{Expanse, Point, Rect};

use crate::{
    buffer::Buffer,
    style::{AttrSet, Color, Style},
};

/// A translated, bounded view onto a [`Buffer`].
///
/// Local coordinates are signed: rasterizers may compute cell positions off
/// the window edge, and those writes drop silently. A write lands only if it
/// passes the local window check and, after translation, the root buffer's
/// own bounds check.
pub struct Surface<'a> {
    root: &'a mut Buffer,
    offset: Point,
    window: Expanse,
}

impl<'a> Surface<'a> {
    /// A surface covering an entire buffer.
    pub fn root(buf: &'a mut Buffer) -> Self {
        let window = buf.size();
        Self {
            root: buf,
            offset: Point::zero(),
            window,
        }
    }

    /// The local coordinate window.
    pub fn window(&self) -> Expanse {
        self.window
    }

    /// The accumulated offset into the root buffer.
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// A nested surface scoped to `r`, expressed in this surface's local
    /// coordinates. The requested rectangle is intersected with the current
    /// window, so the nested view can never reach outside it; an empty
    /// intersection yields a zero-sized surface on which every draw is a
    /// no-op.
    pub fn clip(&mut self, r: Rect) -> Surface<'_> {
        match self.window.rect().intersect(&r) {
            Some(isec) => Surface {
                offset: self.offset + isec.tl,
                window: isec.expanse(),
                root: self.root,
            },
            None => Surface {
                offset: self.offset,
                window: Expanse::default(),
                root: self.root,
            },
        }
    }

    fn translate(&self, x: i32, y: i32) -> Option<Point> {
        if x < 0 || y < 0 || x as u32 >= self.window.w || y as u32 >= self.window.h {
            return None;
        }
        Some(Point {
            x: self.offset.x + x as u32,
            y: self.offset.y + y as u32,
        })
    }

    /// Write one glyph with an explicit style.
    pub fn put_styled(&mut self, x: i32, y: i32, ch: char, style: Style) {
        if let Some(p) = self.translate(x, y) {
            // Buffer re-checks against root bounds before mutating.
            self.root.put(p, ch, style);
        }
    }

    /// Write one glyph using the surface-wide drawing state.
    pub fn put(&mut self, x: i32, y: i32, ch: char) {
        let style = self.root.state();
        self.put_styled(x, y, ch, style);
    }

    /// Write a string left-to-right from `(x, y)`, truncating at the window
    /// edge. Never wraps.
    pub fn print_styled(&mut self, x: i32, y: i32, txt: &str, style: Style) {
        for (i, ch) in txt.chars().enumerate() {
            let lx = x + i as i32;
            if lx >= self.window.w as i32 {
                break;
            }
            self.put_styled(lx, y, ch, style);
        }
    }

    /// Write a string using the surface-wide drawing state.
    pub fn print(&mut self, x: i32, y: i32, txt: &str) {
        let style = self.root.state();
        self.print_styled(x, y, txt, style);
    }

    /// Fill a local rectangle with a glyph and explicit style.
    pub fn fill_styled(&mut self, r: Rect, ch: char, style: Style) {
        if let Some(isec) = self.window.rect().intersect(&r) {
            for y in isec.tl.y..isec.tl.y + isec.h {
                for x in isec.tl.x..isec.tl.x + isec.w {
                    self.put_styled(x as i32, y as i32, ch, style);
                }
            }
        }
    }

    /// Fill a local rectangle using the surface-wide drawing state.
    pub fn fill(&mut self, r: Rect, ch: char) {
        let style = self.root.state();
        self.fill_styled(r, ch, style);
    }

    /// A horizontal run of one glyph.
    pub fn hline(&mut self, x: i32, y: i32, len: u32, ch: char) {
        for i in 0..len {
            self.put(x + i as i32, y, ch);
        }
    }

    /// A vertical run of one glyph.
    pub fn vline(&mut self, x: i32, y: i32, len: u32, ch: char) {
        for i in 0..len {
            self.put(x, y + i as i32, ch);
        }
    }

    // The style setters below are surface-wide drawing state, not per-cell
    // writes, so they forward to the root unclipped and affect subsequent
    // unstyled draws on every view of the buffer.

    pub fn set_fg(&mut self, fg: Color) {
        self.root.set_fg(fg);
    }

    pub fn set_bg(&mut self, bg: Color) {
        self.root.set_bg(bg);
    }

    pub fn set_attrs(&mut self, attrs: AttrSet) {
        self.root.set_attrs(attrs);
    }

    pub fn reset_style(&mut self) {
        self.root.reset_state();
    }
}
