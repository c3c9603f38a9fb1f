use std::ops::Add;

/// A location on the character grid.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Shift the point by a signed offset, saturating at the grid edges
    /// rather than under- or overflowing.
    pub fn shift(&self, dx: i32, dy: i32) -> Self {
        let nx = if dx < 0 {
            self.x.saturating_sub(dx.unsigned_abs())
        } else {
            self.x.saturating_add(dx.unsigned_abs())
        };
        let ny = if dy < 0 {
            self.y.saturating_sub(dy.unsigned_abs())
        } else {
            self.y.saturating_add(dy.unsigned_abs())
        };
        Self { x: nx, y: ny }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl From<(u32, u32)> for Point {
    #[inline]
    fn from(v: (u32, u32)) -> Self {
        Self { x: v.0, y: v.1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_saturates() {
        assert_eq!(Point::new(1, 1).shift(-5, -5), Point::zero());
        assert_eq!(Point::new(1, 1).shift(2, 3), Point::new(3, 4));
        assert_eq!(
            Point::new(u32::MAX - 1, 0).shift(5, 0),
            Point::new(u32::MAX, 0)
        );
    }

    #[test]
    fn add() {
        assert_eq!(Point::zero() + Point::new(2, 3), Point::new(2, 3));
    }
}
