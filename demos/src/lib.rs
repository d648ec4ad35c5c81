//! Shared code for the roomnav demos: a random room-network builder.

use std::collections::VecDeque;

use rand::{Rng, RngExt};
use roomnav_core::{Direction, Room};
use roomnav_paths::{DEFAULT_PARENT, Graph, NodeId, Result};

/// Names of the four rooms every generated network starts from.
pub const START_ROOMS: [(Direction, &str); 4] = [
    (Direction::North, "StartNorth"),
    (Direction::South, "StartSouth"),
    (Direction::East, "StartEast"),
    (Direction::West, "StartWest"),
];

/// Grow a tree-shaped network of roughly `rooms` rooms breadth-first.
///
/// Four start rooms hang off the root. Each room taken off the frontier
/// then gets one to three children, in direction order, named `room0`,
/// `room1`, ... Returns the graph and every generated room id.
pub fn generate_network<R: Rng>(rooms: usize, rng: &mut R) -> Result<(Graph, Vec<NodeId>)> {
    let mut graph = Graph::new();
    let mut all = Vec::with_capacity(rooms);
    let mut frontier = VecDeque::new();

    for (dir, name) in START_ROOMS {
        let id = graph.insert_room(dir, Room::new(name), DEFAULT_PARENT)?;
        all.push(id);
        frontier.push_back(id);
    }

    let mut counter = 0usize;
    while all.len() < rooms {
        let Some(parent) = frontier.pop_front() else {
            break;
        };
        let fan_out = rng.random_range(1..4usize);
        for &dir in Direction::ALL.iter().take(fan_out) {
            if all.len() >= rooms {
                break;
            }
            let id = graph.add_room(Room::new(format!("room{counter}")));
            counter += 1;
            graph.add_neighbor(parent, dir, id);
            all.push(id);
            frontier.push_back(id);
        }
    }

    log::debug!("generated {} rooms", all.len());
    Ok((graph, all))
}
