use serde::{Deserialize, Serialize};

/// A screen- or sheet-space point in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned integer rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of size `w`×`h` with its top-left corner at `origin`.
    pub const fn at(origin: Point, w: i32, h: i32) -> Self {
        Self::new(origin.x, origin.y, w, h)
    }

    /// Half-open hit test: the left/top edges are inside, the right/bottom edges are not.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_interior_point() {
        let r = Rect::new(10, 20, 40, 40);
        assert!(r.contains(Point::new(30, 40)));
    }

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(10, 20, 40, 40);
        assert!(r.contains(Point::new(10, 20)));
        assert!(!r.contains(Point::new(50, 40)));
        assert!(!r.contains(Point::new(30, 60)));
        assert!(!r.contains(Point::new(9, 40)));
    }
}
