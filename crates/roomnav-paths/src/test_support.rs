use std::collections::HashMap;

use roomnav_core::{Direction, Room};

use crate::graph::{DEFAULT_PARENT, Graph};
use crate::node::NodeId;

/// Nine rooms with three loops, hung north of the root:
///
/// ```text
///           B -> C
///           ^    ^
///           |    v
/// I -> F <- A    D <-
/// ^    |         |  |
/// |    v         v  |
/// H <- G         E ->
/// ```
pub(crate) fn nine_room_network() -> (Graph, HashMap<&'static str, NodeId>) {
    let mut g = Graph::new();
    let ids: HashMap<&'static str, NodeId> = ["A", "B", "C", "D", "E", "F", "G", "H", "I"]
        .into_iter()
        .map(|name| (name, g.add_room(Room::new(name))))
        .collect();

    let passages = [
        (Direction::North, "A", DEFAULT_PARENT),
        (Direction::North, "B", "A"),
        (Direction::West, "F", "A"),
        (Direction::East, "C", "B"),
        (Direction::South, "D", "C"),
        (Direction::North, "C", "D"),
        (Direction::South, "E", "D"),
        (Direction::East, "D", "E"),
        (Direction::South, "G", "F"),
        (Direction::West, "H", "G"),
        (Direction::North, "I", "H"),
        (Direction::East, "F", "I"),
    ];
    for (dir, node, parent) in passages {
        assert!(g.insert(dir, ids[node], parent), "{node} under {parent}");
    }
    (g, ids)
}
