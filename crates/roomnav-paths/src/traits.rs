use roomnav_core::{Direction, Point, Room};

use crate::distance::euclidean;

/// Edge costs and distance estimates for the shortest-path search.
pub trait CostModel {
    /// Cost of taking the passage from `from` to `to`. Must be > 0.
    fn cost(&self, from: &Room, to: &Room, direction: Direction) -> f32;

    /// Heuristic estimate of the remaining cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> f32;
}

/// Every passage costs `weight`; the estimate is the straight-line distance
/// expressed in passages.
///
/// `span` is the longest straight-line distance any single passage covers.
/// No route can close more than `span` of distance per step, so
/// `distance / span * weight` never overestimates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformCost {
    pub weight: f32,
    pub span: f32,
}

impl UniformCost {
    pub fn new(weight: f32, span: f32) -> Self {
        Self { weight, span }
    }
}

impl Default for UniformCost {
    fn default() -> Self {
        Self::new(1.0, Room::DEFAULT_SIZE as f32)
    }
}

impl CostModel for UniformCost {
    fn cost(&self, _from: &Room, _to: &Room, _direction: Direction) -> f32 {
        self.weight
    }

    fn estimate(&self, from: Point, to: Point) -> f32 {
        if self.span <= 0.0 {
            return 0.0;
        }
        euclidean(from, to) / self.span * self.weight
    }
}
