use crate::error::{Result, SkeinError};
use crate::graph::traversal::{DepthFirst, TraversalHooks};
use crate::graph::view::GraphView;

/// Hooks collecting DFS postorder; a back edge aborts the sort
#[derive(Debug, Default)]
struct PostorderHooks {
    postorder: Vec<String>,
}

impl TraversalHooks for PostorderHooks {
    fn postvisit(&mut self, node: &str) {
        self.postorder.push(node.to_string());
    }

    fn back_edge(&mut self, _from: &str, to: &str) -> Result<()> {
        Err(SkeinError::CycleDetected { id: to.to_string() })
    }
}

/// Topological sorting over the subgraph reachable from a start node
///
/// Wraps the iterative DFS engine: the sorted order is the reversed
/// DFS postorder. An edge into a node still on the active DFS path is
/// a back edge, so the reachable subgraph is cyclic and the sort fails
/// with `CycleDetected` instead of returning a degenerate order.
pub struct TopologicalSorter<'g> {
    dfs: DepthFirst<'g>,
}

impl<'g> TopologicalSorter<'g> {
    pub fn new(graph: &'g dyn GraphView) -> Self {
        TopologicalSorter {
            dfs: DepthFirst::new(graph),
        }
    }

    /// Order the nodes reachable from `start` so that for every edge
    /// `(u, v)` in that subgraph, `u` precedes `v`
    #[tracing::instrument(skip(self), fields(start = %start))]
    pub fn sort(&mut self, start: &str) -> Result<Vec<String>> {
        self.dfs.reset();
        let mut hooks = PostorderHooks::default();
        self.dfs.run(start, &mut hooks)?;
        hooks.postorder.reverse();
        Ok(hooks.postorder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::Graph;

    fn index_of(order: &[String], node: &str) -> usize {
        order.iter().position(|n| n == node).unwrap()
    }

    #[test]
    fn test_sort_respects_every_edge() {
        // Diamond DAG: 0 -> 1 -> 3, 0 -> 2 -> 3
        let graph = Graph::from_edge_list(
            &[
                ("0", "1", None),
                ("0", "2", None),
                ("1", "3", None),
                ("2", "3", None),
            ],
            true,
        );
        let mut sorter = TopologicalSorter::new(&graph);
        let order = sorter.sort("0").unwrap();

        assert_eq!(order.len(), 4);
        for edge in graph.edges() {
            assert!(
                index_of(&order, &edge.from) < index_of(&order, &edge.to),
                "edge {} -> {} violated by {:?}",
                edge.from,
                edge.to,
                order
            );
        }
    }

    #[test]
    fn test_sort_starts_at_start_node() {
        let graph = Graph::from_edge_list(&[("a", "b", None), ("b", "c", None)], true);
        let mut sorter = TopologicalSorter::new(&graph);
        let order = sorter.sort("a").unwrap();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_only_reachable_subgraph() {
        let graph = Graph::from_edge_list(&[("a", "b", None), ("x", "y", None)], true);
        let mut sorter = TopologicalSorter::new(&graph);
        let order = sorter.sort("a").unwrap();
        assert_eq!(order, vec!["a", "b"]);
    }

    #[test]
    fn test_sort_detects_cycle() {
        let graph = Graph::from_edge_list(
            &[("a", "b", None), ("b", "c", None), ("c", "a", None)],
            true,
        );
        let mut sorter = TopologicalSorter::new(&graph);
        let err = sorter.sort("a").unwrap_err();
        assert!(matches!(err, SkeinError::CycleDetected { .. }));
    }

    #[test]
    fn test_sort_detects_self_loop() {
        let graph = Graph::from_edge_list(&[("a", "b", None), ("b", "b", None)], true);
        let mut sorter = TopologicalSorter::new(&graph);
        let err = sorter.sort("a").unwrap_err();
        assert_eq!(
            err,
            SkeinError::CycleDetected {
                id: "b".to_string()
            }
        );
    }

    #[test]
    fn test_sort_missing_start_fails() {
        let graph = Graph::from_edge_list(&[("a", "b", None)], true);
        let mut sorter = TopologicalSorter::new(&graph);
        let err = sorter.sort("zzz").unwrap_err();
        assert!(matches!(err, SkeinError::NodeNotFound { .. }));
    }

    #[test]
    fn test_cycle_outside_reachable_subgraph_is_ignored() {
        let graph = Graph::from_edge_list(
            &[("a", "b", None), ("x", "y", None), ("y", "x", None)],
            true,
        );
        let mut sorter = TopologicalSorter::new(&graph);
        assert!(sorter.sort("a").is_ok());
    }

    #[test]
    fn test_repeated_sort_is_deterministic() {
        let graph = Graph::from_edge_list(
            &[
                ("0", "1", None),
                ("0", "2", None),
                ("2", "3", None),
                ("1", "3", None),
            ],
            true,
        );
        let mut sorter = TopologicalSorter::new(&graph);
        let first = sorter.sort("0").unwrap();
        let second = sorter.sort("0").unwrap();
        assert_eq!(first, second);
    }
}
