use std::collections::BinaryHeap;

use crate::graph::Graph;
use crate::navigator::{Budget, HeapEntry, Navigator, RoomPath, ShortestPath, is_valid_cost};
use crate::node::NodeId;
use crate::traits::CostModel;

impl Navigator {
    /// Cheapest route from `start` to the room of `target` under the graph's
    /// uniform cost model (see [`Graph::cost_model`]).
    ///
    /// Returns `None` when the configured edge weight is rejected by
    /// [`SearchConfig::validate`](crate::SearchConfig::validate).
    pub fn shortest_path_from(
        &mut self,
        graph: &Graph,
        start: NodeId,
        target: NodeId,
    ) -> Option<ShortestPath> {
        if let Err(e) = self.config.validate() {
            log::debug!("shortest path skipped: {e}");
            return None;
        }
        let model = graph.cost_model(self.config.edge_weight);
        self.shortest_path_with(graph, &model, start, target)
    }

    /// Compute the cheapest route from `start` to `target` using A*.
    ///
    /// The search succeeds as soon as a node whose room carries the target's
    /// name is dequeued. Returns `None` if either node is not in the graph,
    /// the frontier runs dry, or the expansion budget is exhausted.
    ///
    /// Passages the model prices at zero, below zero or not at all (NaN or
    /// infinite) are never taken.
    pub fn shortest_path_with<C: CostModel>(
        &mut self,
        graph: &Graph,
        model: &C,
        start: NodeId,
        target: NodeId,
    ) -> Option<ShortestPath> {
        let start_room = graph.room(start)?;
        let goal = graph.room(target)?;
        let goal_pos = goal.position();
        let goal_name = goal.name();

        let cur_gen = self.begin_search(graph.capacity());

        // Initialise the start node.
        {
            let node = &mut self.search_nodes[start.0];
            node.g = 0.0;
            node.f = model.estimate(start_room.position(), goal_pos);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut seq: u64 = 0;
        let mut open: BinaryHeap<HeapEntry> = BinaryHeap::new();
        open.push(HeapEntry {
            idx: start.0,
            f: self.search_nodes[start.0].f,
            seq,
        });

        let mut budget = Budget::new(self.config.max_expansions);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search None;
            };

            let ci = current.idx;

            // Skip stale entries.
            if self.search_nodes[ci].generation != cur_gen || !self.search_nodes[ci].open {
                continue;
            }

            let Some(node) = graph.node(NodeId(ci)) else {
                continue;
            };

            if node.name() == goal_name {
                break 'search Some(ci);
            }

            if !budget.spend() {
                log::debug!(
                    "shortest path to {goal_name:?} gave up after {} expansions",
                    budget.spent
                );
                break 'search None;
            }

            self.search_nodes[ci].open = false;
            let current_g = self.search_nodes[ci].g;

            for (direction, ni) in node.iter_neighbors() {
                let Some(next) = graph.node(ni) else {
                    continue;
                };
                let step = model.cost(node.room(), next.room(), direction);
                if !is_valid_cost(step) {
                    log::trace!("skipping {direction} passage from {} at cost {step}", NodeId(ci));
                    continue;
                }
                let tentative_g = current_g + step;

                let n = &mut self.search_nodes[ni.0];
                if n.generation == cur_gen {
                    // Already reached this generation.
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative_g;
                n.f = tentative_g + model.estimate(next.room().position(), goal_pos);
                n.parent = ci;
                n.open = true;

                seq += 1;
                open.push(HeapEntry {
                    idx: ni.0,
                    f: n.f,
                    seq,
                });
            }
        };

        let goal_idx = found?;

        // Reconstruct path.
        let mut nodes = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            nodes.push(NodeId(ci));
            ci = self.search_nodes[ci].parent;
        }
        nodes.reverse();

        let cost = self.search_nodes[goal_idx].g;
        log::trace!(
            "shortest path to {goal_name:?}: {} hops, cost {cost}, {} expansions",
            nodes.len() - 1,
            budget.spent
        );
        Some(ShortestPath {
            path: RoomPath::collect(graph, nodes),
            cost,
        })
    }
}
