use crate::error::{Result, SkeinError};
use crate::graph::traversal::{TraversalHooks, TraversalState};
use crate::graph::view::GraphView;
use std::collections::VecDeque;

/// Breadth-first traversal
///
/// `previsit` fires when a node is discovered (enqueued); `postvisit`
/// fires once the dequeued node's full neighbor list has been scanned.
/// State persists across `run` calls until `reset()`.
pub struct BreadthFirst<'g> {
    graph: &'g dyn GraphView,
    state: TraversalState,
}

impl<'g> BreadthFirst<'g> {
    pub fn new(graph: &'g dyn GraphView) -> Self {
        BreadthFirst {
            graph,
            state: TraversalState::default(),
        }
    }

    pub fn state(&self) -> &TraversalState {
        &self.state
    }

    /// Discard all traversal state; idempotent
    pub fn reset(&mut self) {
        self.state.clear();
    }

    /// Traverse the component reachable from `start`
    ///
    /// No-op if `start` was already visited by an earlier run on this
    /// engine. Fails with `NodeNotFound` if `start` is absent from the
    /// graph.
    #[tracing::instrument(skip(self, hooks), fields(start = %start))]
    pub fn run(&mut self, start: &str, hooks: &mut dyn TraversalHooks) -> Result<()> {
        if !self.graph.contains_node(start) {
            return Err(SkeinError::node_not_found(start));
        }
        if self.state.visited.contains(start) {
            return Ok(());
        }

        let mut queue: VecDeque<String> = VecDeque::new();
        self.state.mark_discovered(start, None);
        hooks.previsit(start);
        queue.push_back(start.to_string());

        while let Some(current) = queue.pop_front() {
            for edge in self.graph.outbound_edges(&current) {
                if !self.state.visited.contains(&edge.to) {
                    self.state.mark_discovered(&edge.to, Some(&current));
                    hooks.previsit(&edge.to);
                    queue.push_back(edge.to);
                }
            }
            hooks.postvisit(&current);
        }

        Ok(())
    }
}
