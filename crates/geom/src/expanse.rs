use super::{Point, Rect};

/// An `Expanse` is a rectangle with a width and height but no location, used
/// where we want to deal with sizes abstractly or mandate an origin of
/// (0, 0).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Expanse {
    pub w: u32,
    pub h: u32,
}

impl Expanse {
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// The area of this expanse.
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }

    /// True if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// A `Rect` of this size located at (0, 0).
    pub fn rect(&self) -> Rect {
        Rect {
            tl: Point::default(),
            w: self.w,
            h: self.h,
        }
    }

    /// True if this size can completely enclose `other` in both dimensions.
    pub fn contains(&self, other: &Self) -> bool {
        self.w >= other.w && self.h >= other.h
    }

    /// Clamp both dimensions into `[min, max]`.
    pub fn clamp(&self, min: Self, max: Self) -> Self {
        Self {
            w: self.w.clamp(min.w, max.w),
            h: self.h.clamp(min.h, max.h),
        }
    }
}

impl From<Rect> for Expanse {
    fn from(r: Rect) -> Self {
        Self { w: r.w, h: r.h }
    }
}

impl From<(u32, u32)> for Expanse {
    fn from(v: (u32, u32)) -> Self {
        Self { w: v.0, h: v.1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains() {
        assert!(Expanse::new(3, 3).contains(&Expanse::new(3, 2)));
        assert!(!Expanse::new(3, 3).contains(&Expanse::new(4, 2)));
    }

    #[test]
    fn clamp() {
        let min = Expanse::new(2, 2);
        let max = Expanse::new(5, 5);
        assert_eq!(Expanse::new(1, 7).clamp(min, max), Expanse::new(2, 5));
        assert_eq!(Expanse::new(3, 3).clamp(min, max), Expanse::new(3, 3));
    }
}
