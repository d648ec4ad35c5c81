use std::collections::HashSet;

use crate::graph::Graph;
use crate::navigator::{Budget, Frame, Navigator, RoomPath};
use crate::node::NodeId;

impl Navigator {
    /// Depth-first search from `start` for a room named `target`.
    ///
    /// Passages are tried North, South, East, West, each in insertion order,
    /// and the first route that reaches the target wins; it need not be the
    /// shortest. Rooms are marked visited by *name*: once a name has been
    /// expanded, any other node carrying the same name is not expanded again.
    /// A node is still matched against `target` before that check.
    pub fn path_from(&mut self, graph: &Graph, start: NodeId, target: &str) -> Option<RoomPath> {
        let start_node = graph.node(start)?;
        if start_node.name() == target {
            return Some(RoomPath::collect(graph, vec![start]));
        }

        let mut seen: HashSet<&str> = HashSet::new();
        seen.insert(start_node.name());

        let mut budget = Budget::new(self.config.max_expansions);

        self.stack.clear();
        self.stack.push(Frame {
            node: start,
            cursor: 0,
        });

        while let Some(frame) = self.stack.last_mut() {
            let next = graph.node(frame.node).and_then(|n| n.neighbor_at(frame.cursor));
            let Some(child) = next else {
                self.stack.pop();
                continue;
            };
            frame.cursor += 1;

            if !budget.spend() {
                log::debug!("path search for {target:?} gave up after {} expansions", budget.spent);
                return None;
            }

            let Some(child_node) = graph.node(child) else {
                continue;
            };
            let name = child_node.name();
            if name == target {
                let mut nodes: Vec<NodeId> = self.stack.iter().map(|f| f.node).collect();
                nodes.push(child);
                log::trace!("path search for {target:?} found {} hops", nodes.len() - 1);
                return Some(RoomPath::collect(graph, nodes));
            }
            if seen.insert(name) {
                self.stack.push(Frame {
                    node: child,
                    cursor: 0,
                });
            }
        }

        None
    }

    /// Whether a room named `target` can be reached from `start`.
    pub fn path_exists_from(&mut self, graph: &Graph, start: NodeId, target: &str) -> bool {
        self.path_from(graph, start, target).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::SearchConfig;
    use crate::test_support::nine_room_network;
    use roomnav_core::{Direction, Room};

    #[test]
    fn nine_room_network_reaches_c_via_b() {
        let (g, ids) = nine_room_network();
        let mut nav = Navigator::new();

        let path = nav.path_from(&g, ids["A"], "C").unwrap();
        assert_eq!(path.to_string(), "A->B->C");
        assert_eq!(path.nodes(), &[ids["A"], ids["B"], ids["C"]]);
        assert_eq!(path.len(), 2);

        assert!(nav.path_from(&g, ids["A"], "Z").is_none());
    }

    #[test]
    fn nine_room_network_walks_cycles() {
        let (g, ids) = nine_room_network();
        let mut nav = Navigator::new();

        // F -> G -> H -> I -> F is a loop; E is only reachable through C, D.
        assert!(nav.path_exists_from(&g, ids["F"], "I"));
        assert!(!nav.path_exists_from(&g, ids["F"], "E"));
        let path = nav.path_from(&g, ids["E"], "C").unwrap();
        assert_eq!(path.to_string(), "E->D->C");
    }

    #[test]
    fn first_route_wins_not_shortest() {
        let mut g = Graph::new();
        // North branch is long, East branch is direct; North is tried first.
        g.insert_room(Direction::North, Room::new("n1"), "Unlisted").unwrap();
        g.insert_room(Direction::North, Room::new("n2"), "n1").unwrap();
        let goal = g.insert_room(Direction::North, Room::new("goal"), "n2").unwrap();
        g.add_neighbor(g.root(), Direction::East, goal);

        let mut nav = Navigator::new();
        let path = nav.path_from(&g, g.root(), "goal").unwrap();
        assert_eq!(path.to_string(), "Unlisted->n1->n2->goal");
    }

    #[test]
    fn start_matching_target_is_a_single_room_path() {
        let g = Graph::new();
        let mut nav = Navigator::new();
        let path = nav.path_from(&g, g.root(), "Unlisted").unwrap();
        assert!(path.is_empty());
        assert_eq!(path.names(), &["Unlisted".to_string()]);
    }

    #[test]
    fn shared_names_shadow_each_other() {
        let mut g = Graph::new();
        // Two distinct "twin" rooms; only the second leads to "prize".
        g.insert_room(Direction::North, Room::new("twin"), "Unlisted").unwrap();
        let second = g.add_room(Room::new("twin"));
        assert!(g.insert(Direction::South, second, "Unlisted"));
        let prize = g.add_room(Room::new("prize"));
        g.add_neighbor(second, Direction::East, prize);

        let mut nav = Navigator::new();
        // The first "twin" claims the name, so the second is never expanded.
        assert!(nav.path_from(&g, g.root(), "prize").is_none());
        // Starting from the second twin directly still works.
        assert!(nav.path_exists_from(&g, second, "prize"));
    }

    #[test]
    fn deep_chain_does_not_overflow() {
        let mut g = Graph::new();
        let mut prev = g.root();
        for i in 0..50_000 {
            let id = g.add_room(Room::new(format!("r{i}")));
            g.add_neighbor(prev, Direction::North, id);
            prev = id;
        }
        let mut nav = Navigator::new();
        let path = nav.path_from(&g, g.root(), "r49999").unwrap();
        assert_eq!(path.len(), 50_000);
    }

    #[test]
    fn budget_limits_expansions() {
        let (g, ids) = nine_room_network();
        let mut nav = Navigator::with_config(SearchConfig {
            max_expansions: Some(1),
            ..Default::default()
        });
        assert!(nav.path_from(&g, ids["A"], "B").is_some());
        assert!(nav.path_from(&g, ids["A"], "C").is_none());
    }
}
