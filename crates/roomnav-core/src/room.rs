//! The [`Room`] payload carried by every graph node.

use crate::geom::Point;

/// A named room with a position and a footprint.
///
/// The name is how callers address a room; nothing prevents two rooms from
/// sharing one. Position and size only matter for placing attached rooms and
/// for distance estimates.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    name: String,
    position: Point,
    width: i32,
    height: i32,
}

impl Room {
    /// Width and height given to rooms that don't specify a size.
    pub const DEFAULT_SIZE: i32 = 10;

    /// Create a room at the origin with the default size.
    pub fn new(name: impl Into<String>) -> Self {
        Self::at(name, Point::ZERO)
    }

    /// Create a room at `position` with the default size.
    pub fn at(name: impl Into<String>, position: Point) -> Self {
        Self {
            name: name.into(),
            position,
            width: Self::DEFAULT_SIZE,
            height: Self::DEFAULT_SIZE,
        }
    }

    /// Builder-style size override.
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Move the room. The graph calls this once, when the room is first
    /// attached to a parent.
    #[inline]
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }
}

impl Default for Room {
    fn default() -> Self {
        Self::new("")
    }
}
