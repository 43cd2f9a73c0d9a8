use crate::Float;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: Float,
    pub y: Float,
}

impl Default for Point {
    fn default() -> Self {
        Self { x: 0., y: 0. }
    }
}

impl Point {
    pub fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`
    #[inline(always)]
    pub fn distance(&self, other: &Self) -> Float {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Euclidean distance between `a` and `b`
#[inline(always)]
pub fn distance(a: Point, b: Point) -> Float {
    a.distance(&b)
}
