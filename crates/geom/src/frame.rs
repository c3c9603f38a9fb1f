use super::Rect;

/// The eight border rectangles extracted from a rectangle with a given
/// border width.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Frame {
    /// The top edge, not including corners.
    pub top: Rect,
    /// The bottom edge, not including corners.
    pub bottom: Rect,
    /// The left edge, not including corners.
    pub left: Rect,
    /// The right edge, not including corners.
    pub right: Rect,
    /// The top left corner.
    pub topleft: Rect,
    /// The top right corner.
    pub topright: Rect,
    /// The bottom left corner.
    pub bottomleft: Rect,
    /// The bottom right corner.
    pub bottomright: Rect,
    outer: Rect,
    border: u32,
}

impl Frame {
    /// Construct a frame over `rect`. If the rect is too small to hold the
    /// border, all component rects are zero but the outer rect is kept.
    pub fn new(rect: Rect, border: u32) -> Self {
        if rect.w <= border * 2 || rect.h <= border * 2 {
            let mut f = Self::zero();
            f.outer = rect;
            f.border = border;
            return f;
        }
        let x = rect.tl.x;
        let y = rect.tl.y;
        Self {
            top: Rect::new(x + border, y, rect.w - 2 * border, border),
            bottom: Rect::new(
                x + border,
                y + rect.h - border,
                rect.w - 2 * border,
                border,
            ),
            left: Rect::new(x, y + border, border, rect.h - 2 * border),
            right: Rect::new(
                x + rect.w - border,
                y + border,
                border,
                rect.h - 2 * border,
            ),
            topleft: Rect::new(x, y, border, border),
            topright: Rect::new(x + rect.w - border, y, border, border),
            bottomleft: Rect::new(x, y + rect.h - border, border, border),
            bottomright: Rect::new(
                x + rect.w - border,
                y + rect.h - border,
                border,
                border,
            ),
            outer: rect,
            border,
        }
    }

    pub fn zero() -> Self {
        Self {
            top: Rect::zero(),
            bottom: Rect::zero(),
            left: Rect::zero(),
            right: Rect::zero(),
            topleft: Rect::zero(),
            topright: Rect::zero(),
            bottomleft: Rect::zero(),
            bottomright: Rect::zero(),
            outer: Rect::zero(),
            border: 0,
        }
    }

    /// The space inside the frame.
    pub fn inner(&self) -> Rect {
        self.outer.inner(self.border)
    }

    /// The original rect the frame was extracted from.
    pub fn outer(&self) -> Rect {
        self.outer
    }
}
