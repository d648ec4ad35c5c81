//! Geometry primitives: [`Point`] and [`Direction`].
//!
//! Room positions exist only to feed the shortest-path heuristic, so the
//! geometry here is deliberately small: integer points, the four passage
//! directions, and the placement rule that derives a room's position from the
//! room it hangs off.

use std::fmt;
use std::ops::{Add, Mul, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Point {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// A passage direction out of a room.
///
/// The declaration order is the traversal order used by every search:
/// North, South, East, West.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions, in traversal order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Position of this direction in [`Direction::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }

    /// Unit offset for this direction.
    ///
    /// North and South move along X, East and West along Y. Layouts and
    /// heuristic distances downstream rely on this convention.
    #[inline]
    pub const fn unit(self) -> Point {
        match self {
            Direction::North => Point::new(1, 0),
            Direction::South => Point::new(-1, 0),
            Direction::East => Point::new(0, 1),
            Direction::West => Point::new(0, -1),
        }
    }

    /// Position of a room attached in this direction to a room at `base`
    /// whose height is `scale`. Coordinates saturate at the `i32` bounds.
    #[inline]
    pub fn place(self, base: Point, scale: i32) -> Point {
        let step = self.unit();
        Point::new(
            base.x.saturating_add(step.x.saturating_mul(scale)),
            base.y.saturating_add(step.y.saturating_mul(scale)),
        )
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
        assert_eq!(a * 3, Point::new(3, 6));
        assert_eq!(a.shift(-1, 5), Point::new(0, 7));
    }

    #[test]
    fn direction_order_matches_index() {
        for (i, d) in Direction::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
        }
    }

    #[test]
    fn placement_offsets_by_scale() {
        let base = Point::ZERO;
        assert_eq!(Direction::North.place(base, 10), Point::new(10, 0));
        assert_eq!(Direction::South.place(base, 10), Point::new(-10, 0));
        assert_eq!(Direction::East.place(base, 10), Point::new(0, 10));
        assert_eq!(Direction::West.place(base, 10), Point::new(0, -10));
    }

    #[test]
    fn placement_saturates_instead_of_overflowing() {
        let far = Point::new(i32::MAX - 5, i32::MIN + 5);
        assert_eq!(Direction::North.place(far, i32::MAX), Point::new(i32::MAX, i32::MIN + 5));
        assert_eq!(Direction::West.place(far, i32::MAX), Point::new(i32::MAX - 5, i32::MIN));
        assert_eq!(Direction::South.place(Point::ZERO, i32::MIN), Point::new(i32::MAX, 0));
    }

    #[test]
    fn placement_is_relative_to_base() {
        let base = Point::new(3, -4);
        assert_eq!(Direction::East.place(base, 5), Point::new(3, 1));
    }
}
