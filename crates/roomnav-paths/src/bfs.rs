use crate::graph::Graph;
use crate::navigator::{Budget, Navigator};
use crate::node::NodeId;

impl Navigator {
    /// Breadth-first search from `start` for the first node whose room is
    /// named `name`.
    ///
    /// Neighbors are queued North, South, East, West, each in insertion
    /// order. Nodes are visited once by identity, so cycles and rooms sharing
    /// a name cannot stall the walk.
    pub fn find_from(&mut self, graph: &Graph, start: NodeId, name: &str) -> Option<NodeId> {
        graph.node(start)?;
        let cur_gen = self.begin_marks(graph.capacity());
        self.marks[start.0] = cur_gen;
        self.queue.push_back(start);

        let mut budget = Budget::new(self.config.max_expansions);

        while let Some(id) = self.queue.pop_front() {
            if !budget.spend() {
                log::debug!("room lookup for {name:?} gave up after {} expansions", budget.spent);
                return None;
            }
            let Some(node) = graph.node(id) else {
                continue;
            };
            if node.name() == name {
                log::trace!("room lookup for {name:?} matched {id} after {} expansions", budget.spent);
                return Some(id);
            }
            for (_, n) in node.iter_neighbors() {
                if self.marks[n.0] == cur_gen {
                    continue;
                }
                self.marks[n.0] = cur_gen;
                self.queue.push_back(n);
            }
        }

        None
    }

    /// Every live node reachable from `start`, including `start`, in
    /// breadth-first order. Not subject to the expansion budget.
    pub fn reachable_from(&mut self, graph: &Graph, start: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        if graph.node(start).is_none() {
            return out;
        }
        let cur_gen = self.begin_marks(graph.capacity());
        self.marks[start.0] = cur_gen;
        self.queue.push_back(start);

        while let Some(id) = self.queue.pop_front() {
            let Some(node) = graph.node(id) else {
                continue;
            };
            out.push(id);
            for (_, n) in node.iter_neighbors() {
                if self.marks[n.0] != cur_gen {
                    self.marks[n.0] = cur_gen;
                    self.queue.push_back(n);
                }
            }
        }
        out
    }
}
