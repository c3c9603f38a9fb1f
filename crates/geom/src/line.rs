use super::{Point, Rect};

/// A horizontal line one character high - a Rect with height 1.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Line {
    pub tl: Point,
    pub w: u32,
}

impl Line {
    pub fn new(x: u32, y: u32, w: u32) -> Self {
        Self {
            tl: Point { x, y },
            w,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            tl: self.tl,
            w: self.w,
            h: 1,
        }
    }
}
