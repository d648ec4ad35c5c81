use std::fmt;

use roomnav_core::{Direction, Room};

/// Identity of a node inside a [`Graph`](crate::Graph).
///
/// Ids index the graph's node table. Two nodes holding rooms with the same
/// name still have distinct ids.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Slot of this node in the graph's node table.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A graph vertex: one room plus its outgoing passages.
///
/// Each direction keeps an ordered, duplicate-free list of neighbor ids. The
/// same neighbor may sit under several directions.
#[derive(Debug, Clone)]
pub struct Node {
    room: Room,
    neighbors: [Vec<NodeId>; 4],
}

impl Node {
    /// Create a node with no passages.
    pub fn new(room: Room) -> Self {
        Self {
            room,
            neighbors: Default::default(),
        }
    }

    #[inline]
    pub fn room(&self) -> &Room {
        &self.room
    }

    #[inline]
    pub(crate) fn room_mut(&mut self) -> &mut Room {
        &mut self.room
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.room.name()
    }

    /// Append `node` under `direction` unless it is already listed there.
    ///
    /// Returns `true` if the passage was added. Placement of the neighbor's
    /// room is handled by [`Graph::add_neighbor`](crate::Graph::add_neighbor).
    pub fn add_neighbor(&mut self, direction: Direction, node: NodeId) -> bool {
        let list = &mut self.neighbors[direction.index()];
        if list.contains(&node) {
            return false;
        }
        list.push(node);
        true
    }

    /// Remove `node` from `direction`. Missing passages are ignored.
    pub fn remove_neighbor(&mut self, direction: Direction, node: NodeId) -> bool {
        let list = &mut self.neighbors[direction.index()];
        match list.iter().position(|&n| n == node) {
            Some(i) => {
                list.remove(i);
                true
            }
            None => false,
        }
    }

    /// Whether any direction has at least one passage.
    pub fn has_neighbors(&self) -> bool {
        self.neighbors.iter().any(|l| !l.is_empty())
    }

    /// Neighbors under a single direction, in insertion order.
    #[inline]
    pub fn neighbors(&self, direction: Direction) -> &[NodeId] {
        &self.neighbors[direction.index()]
    }

    /// All neighbors: North, then South, East, West, each in insertion order.
    pub fn all_neighbors(&self) -> Vec<NodeId> {
        self.iter_neighbors().map(|(_, id)| id).collect()
    }

    /// Iterate `(direction, neighbor)` pairs in traversal order.
    pub fn iter_neighbors(&self) -> impl Iterator<Item = (Direction, NodeId)> + '_ {
        Direction::ALL
            .into_iter()
            .flat_map(move |d| self.neighbors[d.index()].iter().map(move |&id| (d, id)))
    }

    /// Total number of outgoing passages.
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum()
    }

    /// The `i`-th entry of [`all_neighbors`](Self::all_neighbors), without
    /// allocating.
    pub(crate) fn neighbor_at(&self, mut i: usize) -> Option<NodeId> {
        for list in &self.neighbors {
            if i < list.len() {
                return Some(list[i]);
            }
            i -= list.len();
        }
        None
    }

    /// Drop every passage for which `keep` returns `false`.
    pub(crate) fn retain_neighbors(&mut self, mut keep: impl FnMut(NodeId) -> bool) {
        for list in self.neighbors.iter_mut() {
            list.retain(|&n| keep(n));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_neighbor_rejects_duplicates_per_direction() {
        let mut node = Node::new(Room::new("hub"));
        let id = NodeId(7);
        assert!(node.add_neighbor(Direction::North, id));
        assert!(!node.add_neighbor(Direction::North, id));
        // Same node under another direction is fine.
        assert!(node.add_neighbor(Direction::East, id));
        assert_eq!(node.neighbor_count(), 2);
    }

    #[test]
    fn remove_missing_neighbor_is_noop() {
        let mut node = Node::new(Room::new("hub"));
        assert!(!node.remove_neighbor(Direction::West, NodeId(3)));
        assert!(!node.has_neighbors());

        node.add_neighbor(Direction::West, NodeId(3));
        assert!(!node.remove_neighbor(Direction::North, NodeId(3)));
        assert!(node.remove_neighbor(Direction::West, NodeId(3)));
        assert!(!node.has_neighbors());
    }

    #[test]
    fn all_neighbors_follow_direction_order() {
        let (a, b, c, d, e) = (NodeId(0), NodeId(1), NodeId(2), NodeId(3), NodeId(4));
        let mut node = Node::new(Room::new("hub"));
        node.add_neighbor(Direction::West, a);
        node.add_neighbor(Direction::East, b);
        node.add_neighbor(Direction::North, c);
        node.add_neighbor(Direction::South, d);
        node.add_neighbor(Direction::North, e);
        assert_eq!(node.all_neighbors(), vec![c, e, d, b, a]);
    }

    #[test]
    fn neighbor_at_matches_all_neighbors() {
        let mut node = Node::new(Room::new("hub"));
        node.add_neighbor(Direction::East, NodeId(1));
        node.add_neighbor(Direction::East, NodeId(2));
        node.add_neighbor(Direction::South, NodeId(3));
        let all = node.all_neighbors();
        for (i, id) in all.iter().enumerate() {
            assert_eq!(node.neighbor_at(i), Some(*id));
        }
        assert_eq!(node.neighbor_at(all.len()), None);
    }

    #[test]
    fn retain_neighbors_strips_across_directions() {
        let mut node = Node::new(Room::new("hub"));
        node.add_neighbor(Direction::North, NodeId(1));
        node.add_neighbor(Direction::South, NodeId(1));
        node.add_neighbor(Direction::South, NodeId(2));
        node.retain_neighbors(|n| n != NodeId(1));
        assert_eq!(node.all_neighbors(), vec![NodeId(2)]);
    }
}
