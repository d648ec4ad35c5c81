//! Directional room graphs and the searches that run over them.
//!
//! A [`Graph`] is a network of rooms joined by one-way North/South/East/West
//! passages, grown outwards from a root room. It answers three kinds of
//! question:
//!
//! - **Where is room X?** breadth-first lookup by name ([`Graph::find`]),
//!   which is also how [`Graph::insert`] locates the parent of a new room
//! - **Can I reach room X?** depth-first existence search
//!   ([`Graph::path_exists`], [`Graph::path_to`])
//! - **What is the cheapest way to room X?** A* over passage costs with a
//!   straight-line heuristic ([`Graph::shortest_path`])
//!
//! All searches are iterative and track visited nodes, so deep or cyclic
//! networks are safe. They run through a [`Navigator`], which owns and reuses
//! the scratch state; the `Graph` shortcuts build a fresh one per call.
//!
//! # Visited-set semantics
//!
//! | Search | Visited by |
//! |---|---|
//! | lookup / insertion | node identity |
//! | existence | room name |
//! | shortest path | node identity |

mod astar;
mod bfs;
mod dfs;
mod distance;
mod error;
mod graph;
mod navigator;
mod node;
mod traits;

#[cfg(test)]
mod test_support;

pub use distance::{euclidean, manhattan};
pub use error::{GraphError, Result};
pub use graph::{DEFAULT_PARENT, Graph, ROOT_NAME};
pub use navigator::{Navigator, RoomPath, SearchConfig, ShortestPath};
pub use node::{Node, NodeId};
pub use traits::{CostModel, UniformCost};

pub use roomnav_core::{Direction, Point, Room};
