use roomnav_core::{Direction, Room};

use crate::distance::euclidean;
use crate::error::{GraphError, Result};
use crate::navigator::{Navigator, RoomPath, SearchConfig, ShortestPath};
use crate::node::{Node, NodeId};
use crate::traits::UniformCost;

/// Name of the room every graph starts with.
pub const ROOT_NAME: &str = "Unlisted";

/// Parent name used when the caller has no better anchor: the root.
pub const DEFAULT_PARENT: &str = ROOT_NAME;

/// A directed network of rooms, grown outwards from a root room.
///
/// The graph owns every node in a flat table; passages refer to nodes by
/// [`NodeId`]. Mutations need `&mut Graph` while queries take `&Graph`, so a
/// query can never observe an insertion half-way through.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<Option<Node>>,
    /// Whether each node's room has been given its position yet.
    placed: Vec<bool>,
    root: NodeId,
    live: usize,
    config: SearchConfig,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Create a graph holding only the root room, named [`ROOT_NAME`].
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    /// Create a graph whose query shortcuts run with `config`.
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            nodes: vec![Some(Node::new(Room::new(ROOT_NAME)))],
            placed: vec![true],
            root: NodeId(0),
            live: 1,
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    // -----------------------------------------------------------------------
    // Node table
    // -----------------------------------------------------------------------

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Add a detached node holding `room`. It becomes reachable once it is
    /// attached with [`insert`](Self::insert) or
    /// [`add_neighbor`](Self::add_neighbor).
    pub fn add_room(&mut self, room: Room) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(Node::new(room)));
        self.placed.push(false);
        self.live += 1;
        id
    }

    /// Whether `id` refers to a node that has not been released.
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        matches!(self.nodes.get(id.0), Some(Some(_)))
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    #[inline]
    pub fn room(&self, id: NodeId) -> Option<&Room> {
        self.node(id).map(Node::room)
    }

    /// Number of live nodes, detached ones included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.live
    }

    /// Number of slots in the node table. Released slots are not reused.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }

    /// Ids of all live nodes, in creation order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.is_some())
            .map(|(i, _)| NodeId(i))
    }

    /// Whether the root has been released by [`teardown`](Self::teardown).
    pub fn is_torn_down(&self) -> bool {
        !self.contains(self.root)
    }

    fn live_root(&self) -> NodeId {
        assert!(!self.is_torn_down(), "graph has been torn down");
        self.root
    }

    // -----------------------------------------------------------------------
    // Passages
    // -----------------------------------------------------------------------

    /// Add a passage `from --direction--> to`.
    ///
    /// The reverse passage is not added. The first time `to` is attached
    /// anywhere, its room is placed one step of `from`'s height away from
    /// `from` in `direction`; later attachments leave it where it is.
    /// Returns `false` if either node is missing or the passage already
    /// exists.
    pub fn add_neighbor(&mut self, from: NodeId, direction: Direction, to: NodeId) -> bool {
        if !self.contains(to) {
            return false;
        }
        let Some(parent) = self.node_mut(from) else {
            return false;
        };
        if !parent.add_neighbor(direction, to) {
            return false;
        }
        let base = parent.room().position();
        let scale = parent.room().height();

        if !self.placed[to.0] {
            self.placed[to.0] = true;
            if let Some(child) = self.node_mut(to) {
                child.room_mut().set_position(direction.place(base, scale));
            }
        }
        true
    }

    /// Remove the passage `from --direction--> to`, if present.
    pub fn remove_neighbor(&mut self, from: NodeId, direction: Direction, to: NodeId) -> bool {
        self.node_mut(from)
            .is_some_and(|n| n.remove_neighbor(direction, to))
    }

    // -----------------------------------------------------------------------
    // Insertion
    // -----------------------------------------------------------------------

    /// Attach `node` in `direction` of the first room named `parent_name`
    /// found breadth-first from the root.
    ///
    /// Nothing is mutated on error.
    pub fn try_insert(&mut self, direction: Direction, node: NodeId, parent_name: &str) -> Result<()> {
        if !self.contains(node) {
            return Err(GraphError::InvalidArgument(format!("node {node} is not in the graph")));
        }
        let parent = self.locate_parent(parent_name)?;
        self.add_neighbor(parent, direction, node);
        log::debug!("attached {node} {direction} of {parent_name:?} ({parent})");
        Ok(())
    }

    /// Like [`try_insert`](Self::try_insert), reporting failure as `false`.
    pub fn insert(&mut self, direction: Direction, node: NodeId, parent_name: &str) -> bool {
        match self.try_insert(direction, node, parent_name) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("insert of {node} rejected: {e}");
                false
            }
        }
    }

    /// Create a node for `room` and attach it in `direction` of the room
    /// named `parent_name`.
    ///
    /// The parent is located before the node is created, so a failed call
    /// leaves [`node_count`](Self::node_count) unchanged.
    pub fn insert_room(&mut self, direction: Direction, room: Room, parent_name: &str) -> Result<NodeId> {
        let parent = self.locate_parent(parent_name)?;
        let id = self.add_room(room);
        self.add_neighbor(parent, direction, id);
        log::debug!("attached new {id} {direction} of {parent_name:?} ({parent})");
        Ok(id)
    }

    fn locate_parent(&self, parent_name: &str) -> Result<NodeId> {
        if parent_name.is_empty() {
            return Err(GraphError::InvalidArgument("parent name is empty".into()));
        }
        self.find(parent_name)
            .ok_or_else(|| GraphError::NotFound(format!("room {parent_name:?}")))
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    fn navigator(&self) -> Navigator {
        Navigator::with_config(self.config)
    }

    /// First node named `name`, breadth-first from the root.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        let root = self.live_root();
        self.navigator().find_from(self, root, name)
    }

    /// Whether a room named `name` is reachable from the root.
    pub fn path_exists(&self, name: &str) -> bool {
        self.path_to(name).is_some()
    }

    /// Depth-first route from the root to a room named `name`.
    pub fn path_to(&self, name: &str) -> Option<RoomPath> {
        let root = self.live_root();
        self.navigator().path_from(self, root, name)
    }

    /// Depth-first route from any node to a room named `name`.
    pub fn path_from(&self, start: NodeId, name: &str) -> Option<RoomPath> {
        self.navigator().path_from(self, start, name)
    }

    /// Cheapest route from the root to `target`.
    pub fn shortest_path(&self, target: NodeId) -> Option<ShortestPath> {
        let root = self.live_root();
        self.shortest_path_from(root, target)
    }

    pub fn shortest_path_from(&self, start: NodeId, target: NodeId) -> Option<ShortestPath> {
        self.navigator().shortest_path_from(self, start, target)
    }

    /// Uniform cost model for this graph: every passage costs `weight`, and
    /// the estimate is scaled by the longest passage so it stays admissible.
    pub fn cost_model(&self, weight: f32) -> UniformCost {
        UniformCost::new(weight, self.passage_span())
    }

    /// Longest straight-line distance covered by any live passage.
    ///
    /// Measured at query time: a detached node keeps its outgoing passages
    /// while its own position changes on first attachment.
    pub fn passage_span(&self) -> f32 {
        let mut span = 0.0f32;
        for node in self.nodes.iter().flatten() {
            let from = node.room().position();
            for (_, to) in node.iter_neighbors() {
                if let Some(room) = self.room(to) {
                    span = span.max(euclidean(from, room.position()));
                }
            }
        }
        span
    }

    // -----------------------------------------------------------------------
    // Teardown
    // -----------------------------------------------------------------------

    /// Release every node reachable from `start`, `start` included, and drop
    /// the passages surviving nodes had into them. Returns how many nodes
    /// were released.
    ///
    /// Releasing the root tears the graph down; root-based calls panic
    /// afterwards.
    pub fn release_subtree(&mut self, start: NodeId) -> usize {
        if !self.contains(start) {
            return 0;
        }
        let doomed = Navigator::new().reachable_from(self, start);
        for id in &doomed {
            self.nodes[id.0] = None;
            self.placed[id.0] = false;
        }
        self.live -= doomed.len();

        let alive: Vec<bool> = self.nodes.iter().map(Option::is_some).collect();
        for node in self.nodes.iter_mut().flatten() {
            node.retain_neighbors(|n| alive[n.0]);
        }

        log::debug!("released {} nodes starting at {start}", doomed.len());
        doomed.len()
    }

    /// Release everything reachable from the root.
    pub fn teardown(&mut self) -> usize {
        self.release_subtree(self.root)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn direction() -> impl Strategy<Value = Direction> {
        prop::sample::select(Direction::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn every_inserted_room_is_reachable(
            steps in prop::collection::vec((direction(), any::<prop::sample::Index>()), 1..60)
        ) {
            let mut g = Graph::new();
            let mut names = vec![ROOT_NAME.to_string()];
            for (i, (dir, pick)) in steps.iter().enumerate() {
                let parent = names[pick.index(names.len())].clone();
                let name = format!("room{i}");
                prop_assert!(g.insert_room(*dir, Room::new(name.clone()), &parent).is_ok());
                prop_assert!(g.path_exists(&name));
                names.push(name);
            }
            prop_assert_eq!(g.node_count(), steps.len() + 1);
            prop_assert!(!g.path_exists("never-inserted"));
        }

        #[test]
        fn rejected_inserts_leave_graph_untouched(
            dirs in prop::collection::vec(direction(), 1..20)
        ) {
            let mut g = Graph::new();
            g.insert_room(Direction::North, Room::new("anchor"), DEFAULT_PARENT).unwrap();
            let before = g.node_count();
            let root_passages = g.node(g.root()).unwrap().neighbor_count();
            for dir in dirs {
                prop_assert!(g.insert_room(dir, Room::new("x"), "").is_err());
                prop_assert!(g.insert_room(dir, Room::new("x"), "ghost").is_err());
                prop_assert!(!g.insert(dir, NodeId(usize::MAX), "anchor"));
            }
            prop_assert_eq!(g.node_count(), before);
            prop_assert_eq!(g.node(g.root()).unwrap().neighbor_count(), root_passages);
            prop_assert!(!g.path_exists("x"));
        }
    }
}
