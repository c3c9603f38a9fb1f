use super::{Expanse, Line, Point};

/// A rectangle on the character grid.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub tl: Point,
    /// Width.
    pub w: u32,
    /// Height.
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            tl: Point { x, y },
            w,
            h,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// True if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// The size of this rectangle, discarding its location.
    pub fn expanse(&self) -> Expanse {
        Expanse {
            w: self.w,
            h: self.h,
        }
    }

    /// Does this rectangle contain the point? Empty rectangles contain
    /// nothing.
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.tl.x
            && p.x < self.tl.x + self.w
            && p.y >= self.tl.y
            && p.y < self.tl.y + self.h
    }

    /// Does this rectangle completely enclose the other? Empty rectangles
    /// are enclosed by anything.
    pub fn contains_rect(&self, other: &Self) -> bool {
        if other.is_empty() {
            return true;
        }
        other.tl.x >= self.tl.x
            && other.tl.y >= self.tl.y
            && other.tl.x + other.w <= self.tl.x + self.w
            && other.tl.y + other.h <= self.tl.y + self.h
    }

    /// The overlap between this rectangle and another, or `None` if they are
    /// disjoint.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let x1 = self.tl.x.max(other.tl.x);
        let y1 = self.tl.y.max(other.tl.y);
        let x2 = (self.tl.x + self.w).min(other.tl.x + other.w);
        let y2 = (self.tl.y + self.h).min(other.tl.y + other.h);
        if x1 < x2 && y1 < y2 {
            Some(Self {
                tl: Point { x: x1, y: y1 },
                w: x2 - x1,
                h: y2 - y1,
            })
        } else {
            None
        }
    }

    /// Move the rectangle by a signed offset, saturating at the grid edges.
    pub fn shift(&self, dx: i32, dy: i32) -> Self {
        Self {
            tl: self.tl.shift(dx, dy),
            w: self.w,
            h: self.h,
        }
    }

    /// Relocate the rectangle, keeping its size.
    pub fn at(&self, tl: impl Into<Point>) -> Self {
        Self {
            tl: tl.into(),
            w: self.w,
            h: self.h,
        }
    }

    /// The inner rectangle remaining after removing a border of the given
    /// width on every side. Collapses to a zero rect when the border doesn't
    /// fit.
    pub fn inner(&self, border: u32) -> Self {
        if self.w <= border * 2 || self.h <= border * 2 {
            return Self::zero();
        }
        Self {
            tl: Point {
                x: self.tl.x + border,
                y: self.tl.y + border,
            },
            w: self.w - border * 2,
            h: self.h - border * 2,
        }
    }

    /// The horizontal line at row `y` within this rectangle (0-based,
    /// unclamped).
    pub fn line(&self, y: u32) -> Line {
        Line {
            tl: Point {
                x: self.tl.x,
                y: self.tl.y + y,
            },
            w: self.w,
        }
    }

    /// Given a point within this rectangle, rebase it to be relative to our
    /// origin. Points outside return `None`.
    pub fn rebase(&self, p: Point) -> Option<Point> {
        if !self.contains_point(p) {
            return None;
        }
        Some(Point {
            x: p.x - self.tl.x,
            y: p.y - self.tl.y,
        })
    }
}

impl From<Expanse> for Rect {
    fn from(e: Expanse) -> Self {
        e.rect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains() {
        let r = Rect::new(10, 10, 10, 10);
        assert!(r.contains_point(Point::new(10, 10)));
        assert!(r.contains_point(Point::new(19, 19)));
        assert!(!r.contains_point(Point::new(20, 19)));
        assert!(!r.contains_point(Point::new(9, 10)));

        assert!(r.contains_rect(&Rect::new(10, 10, 10, 10)));
        assert!(r.contains_rect(&Rect::new(12, 12, 2, 2)));
        assert!(!r.contains_rect(&Rect::new(15, 15, 10, 10)));
        // Empty rects are contained anywhere.
        assert!(r.contains_rect(&Rect::zero()));
    }

    #[test]
    fn intersect() {
        let a = Rect::new(0, 0, 10, 10);
        assert_eq!(
            a.intersect(&Rect::new(5, 5, 10, 10)),
            Some(Rect::new(5, 5, 5, 5))
        );
        assert_eq!(a.intersect(&Rect::new(10, 0, 5, 5)), None);
        assert_eq!(a.intersect(&Rect::new(0, 0, 0, 5)), None);
        assert_eq!(a.intersect(&a), Some(a));
    }

    #[test]
    fn inner() {
        assert_eq!(Rect::new(0, 0, 10, 10).inner(1), Rect::new(1, 1, 8, 8));
        assert_eq!(Rect::new(5, 5, 4, 4).inner(2), Rect::zero());
        assert_eq!(Rect::new(0, 0, 3, 3).inner(1), Rect::new(1, 1, 1, 1));
    }

    #[test]
    fn rebase() {
        let r = Rect::new(10, 10, 10, 10);
        assert_eq!(r.rebase(Point::new(11, 12)), Some(Point::new(1, 2)));
        assert_eq!(r.rebase(Point::new(9, 9)), None);
    }

    #[test]
    fn shift() {
        assert_eq!(Rect::new(5, 5, 2, 2).shift(-10, 1), Rect::new(0, 6, 2, 2));
    }
}
