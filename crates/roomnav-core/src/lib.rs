//! **roomnav-core**: core types for directional room networks.
//!
//! This crate provides the foundational types shared across the *roomnav*
//! workspace: integer geometry, the four passage directions with their
//! placement rule, and the [`Room`] payload stored in graph nodes.

pub mod geom;
pub mod room;

pub use geom::{Direction, Point};
pub use room::Room;
