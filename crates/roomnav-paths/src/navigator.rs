use std::collections::VecDeque;
use std::fmt;

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::node::NodeId;

// ---------------------------------------------------------------------------
// Query results
// ---------------------------------------------------------------------------

/// A route through the graph, from the start node to the matched room.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomPath {
    nodes: Vec<NodeId>,
    names: Vec<String>,
}

impl RoomPath {
    pub(crate) fn collect(graph: &Graph, nodes: Vec<NodeId>) -> Self {
        let names = nodes
            .iter()
            .filter_map(|&id| graph.room(id).map(|r| r.name().to_string()))
            .collect();
        Self { nodes, names }
    }

    /// Node ids along the route, start first.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Room names along the route, start first.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of passages taken.
    pub fn len(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Whether the route never leaves the start room.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for RoomPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names.join("->"))
    }
}

/// Result of a cost-aware search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortestPath {
    pub path: RoomPath,
    pub cost: f32,
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Knobs shared by every search a [`Navigator`] runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Cost of one passage in the shortest-path search.
    pub edge_weight: f32,
    /// Stop a search after this many expansions. `None` means unbounded.
    pub max_expansions: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            edge_weight: 1.0,
            max_expansions: None,
        }
    }
}

impl SearchConfig {
    /// Check that `edge_weight` is finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        if is_valid_cost(self.edge_weight) {
            Ok(())
        } else {
            Err(GraphError::InvalidArgument(format!(
                "edge weight must be finite and positive, got {}",
                self.edge_weight
            )))
        }
    }
}

/// Passage costs the shortest-path search can settle on.
#[inline]
pub(crate) fn is_valid_cost(cost: f32) -> bool {
    cost.is_finite() && cost > 0.0
}

/// Per-query expansion counter.
pub(crate) struct Budget {
    remaining: Option<usize>,
    pub(crate) spent: usize,
}

impl Budget {
    pub(crate) fn new(limit: Option<usize>) -> Self {
        Self {
            remaining: limit,
            spent: 0,
        }
    }

    /// Account for one expansion. Returns `false` once the limit is used up.
    #[inline]
    pub(crate) fn spend(&mut self) -> bool {
        if let Some(r) = self.remaining.as_mut() {
            if *r == 0 {
                return false;
            }
            *r -= 1;
        }
        self.spent += 1;
        true
    }
}

// ---------------------------------------------------------------------------
// Internal node for the priority-queue search
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct SearchNode {
    pub(crate) g: f32,
    pub(crate) f: f32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            g: 0.0,
            f: 0.0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Heap entry ordered by `f`, then by push order.
#[derive(Clone, Copy)]
pub(crate) struct HeapEntry {
    pub(crate) idx: usize,
    pub(crate) f: f32,
    pub(crate) seq: u64,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f, then oldest push.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for HeapEntry {}

/// Depth-first stack frame: a node and the next neighbor to try.
#[derive(Clone, Copy)]
pub(crate) struct Frame {
    pub(crate) node: NodeId,
    pub(crate) cursor: usize,
}

// ---------------------------------------------------------------------------
// Navigator
// ---------------------------------------------------------------------------

/// Central coordinator for searches over a [`Graph`].
///
/// `Navigator` owns all scratch state (cost table, visited marks, queue,
/// stack) so that repeated queries only allocate when the graph has grown
/// since the previous one. It holds no reference to the graph; every query
/// takes the graph it should run on.
pub struct Navigator {
    pub(crate) config: SearchConfig,
    // shortest-path caches
    pub(crate) search_nodes: Vec<SearchNode>,
    pub(crate) search_generation: u32,
    // identity-visited marks for breadth-first walks
    pub(crate) marks: Vec<u32>,
    pub(crate) mark_generation: u32,
    pub(crate) queue: VecDeque<NodeId>,
    // depth-first stack
    pub(crate) stack: Vec<Frame>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Create a navigator with the default [`SearchConfig`].
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            search_nodes: Vec::new(),
            search_generation: 0,
            marks: Vec::new(),
            mark_generation: 0,
            queue: VecDeque::new(),
            stack: Vec::new(),
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
    // Cache helpers
    // -----------------------------------------------------------------------

    /// Start a new shortest-path generation over `len` node slots.
    pub(crate) fn begin_search(&mut self, len: usize) -> u32 {
        if self.search_nodes.len() < len {
            self.search_nodes.resize(len, SearchNode::default());
        }
        self.search_generation = self.search_generation.wrapping_add(1);
        if self.search_generation == 0 {
            // Wrapped: old entries could alias the new generation.
            self.search_nodes.fill(SearchNode::default());
            self.search_generation = 1;
        }
        self.search_generation
    }

    /// Start a new visited-mark generation over `len` node slots.
    pub(crate) fn begin_marks(&mut self, len: usize) -> u32 {
        if self.marks.len() < len {
            self.marks.resize(len, 0);
        }
        self.mark_generation = self.mark_generation.wrapping_add(1);
        if self.mark_generation == 0 {
            self.marks.fill(0);
            self.mark_generation = 1;
        }
        self.queue.clear();
        self.mark_generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn caches_grow_but_never_shrink() {
        let mut nav = Navigator::new();
        nav.begin_search(20);
        nav.begin_marks(20);
        assert_eq!(nav.search_nodes.len(), 20);
        assert_eq!(nav.marks.len(), 20);

        nav.begin_search(5);
        nav.begin_marks(5);
        assert_eq!(nav.search_nodes.len(), 20);
        assert_eq!(nav.marks.len(), 20);
    }

    #[test]
    fn generations_skip_zero_on_wrap() {
        let mut nav = Navigator::new();
        nav.search_generation = u32::MAX;
        nav.mark_generation = u32::MAX;
        assert_eq!(nav.begin_search(4), 1);
        assert_eq!(nav.begin_marks(4), 1);
        assert!(nav.marks.iter().all(|&m| m == 0));
    }

    #[test]
    fn heap_pops_lowest_f_then_oldest() {
        let mut heap = BinaryHeap::new();
        heap.push(HeapEntry { idx: 0, f: 2.0, seq: 0 });
        heap.push(HeapEntry { idx: 1, f: 1.0, seq: 2 });
        heap.push(HeapEntry { idx: 2, f: 1.0, seq: 1 });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|e| e.idx)).collect();
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn edge_weight_must_be_finite_and_positive() {
        assert!(SearchConfig::default().validate().is_ok());
        for bad in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let config = SearchConfig {
                edge_weight: bad,
                ..Default::default()
            };
            assert!(matches!(config.validate(), Err(GraphError::InvalidArgument(_))));
        }
    }

    #[test]
    fn budget_stops_at_limit() {
        let mut b = Budget::new(Some(2));
        assert!(b.spend());
        assert!(b.spend());
        assert!(!b.spend());
        assert_eq!(b.spent, 2);

        let mut unbounded = Budget::new(None);
        for _ in 0..100 {
            assert!(unbounded.spend());
        }
    }
}
