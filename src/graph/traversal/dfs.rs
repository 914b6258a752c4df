use crate::error::{Result, SkeinError};
use crate::graph::traversal::{TraversalHooks, TraversalState};
use crate::graph::types::Edge;
use crate::graph::view::GraphView;
use std::collections::HashSet;

/// One entry on the explicit DFS stack: a node together with its cached
/// neighbor list and the index of the next neighbor to examine
#[derive(Debug)]
struct Frame {
    node: String,
    neighbors: Vec<Edge>,
    next: usize,
}

impl Frame {
    fn new(node: String, neighbors: Vec<Edge>) -> Self {
        Frame {
            node,
            neighbors,
            next: 0,
        }
    }
}

/// Iterative depth-first traversal
///
/// Uses an explicit frame stack so memory stays `O(V)` on large graphs
/// instead of growing the call stack. State persists across `run`
/// calls until `reset()`, letting callers cover disconnected graphs.
pub struct DepthFirst<'g> {
    graph: &'g dyn GraphView,
    state: TraversalState,
}

impl<'g> DepthFirst<'g> {
    pub fn new(graph: &'g dyn GraphView) -> Self {
        DepthFirst {
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

        self.state.mark_discovered(start, None);
        hooks.previsit(start);

        let mut stack = vec![Frame::new(
            start.to_string(),
            self.graph.outbound_edges(start),
        )];
        let mut on_path: HashSet<String> = HashSet::new();
        on_path.insert(start.to_string());

        loop {
            let (current, next_edge) = {
                let Some(frame) = stack.last_mut() else { break };
                if frame.next < frame.neighbors.len() {
                    let edge = frame.neighbors[frame.next].clone();
                    frame.next += 1;
                    (frame.node.clone(), Some(edge))
                } else {
                    (frame.node.clone(), None)
                }
            };

            match next_edge {
                Some(edge) => {
                    if !self.state.visited.contains(&edge.to) {
                        self.state.mark_discovered(&edge.to, Some(&current));
                        hooks.previsit(&edge.to);
                        on_path.insert(edge.to.clone());
                        let neighbors = self.graph.outbound_edges(&edge.to);
                        stack.push(Frame::new(edge.to, neighbors));
                    } else if on_path.contains(&edge.to) {
                        hooks.back_edge(&current, &edge.to)?;
                    }
                }
                None => {
                    on_path.remove(&current);
                    stack.pop();
                    hooks.postvisit(&current);
                }
            }
        }

        Ok(())
    }
}

/// Recursive depth-first traversal
///
/// Identical hook contract to [`DepthFirst`], but each descent consumes
/// a call-stack frame. Offered for small graphs only; prefer the
/// iterative engine whenever depth is unbounded.
pub struct RecursiveDepthFirst<'g> {
    graph: &'g dyn GraphView,
    state: TraversalState,
}

impl<'g> RecursiveDepthFirst<'g> {
    pub fn new(graph: &'g dyn GraphView) -> Self {
        RecursiveDepthFirst {
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

    #[tracing::instrument(skip(self, hooks), fields(start = %start))]
    pub fn run(&mut self, start: &str, hooks: &mut dyn TraversalHooks) -> Result<()> {
        if !self.graph.contains_node(start) {
            return Err(SkeinError::node_not_found(start));
        }
        if self.state.visited.contains(start) {
            return Ok(());
        }
        self.visit(start, None, &mut HashSet::new(), hooks)
    }

    fn visit(
        &mut self,
        node: &str,
        predecessor: Option<&str>,
        on_path: &mut HashSet<String>,
        hooks: &mut dyn TraversalHooks,
    ) -> Result<()> {
        self.state.mark_discovered(node, predecessor);
        hooks.previsit(node);
        on_path.insert(node.to_string());

        for edge in self.graph.outbound_edges(node) {
            if !self.state.visited.contains(&edge.to) {
                self.visit(&edge.to, Some(node), on_path, hooks)?;
            } else if on_path.contains(&edge.to) {
                hooks.back_edge(node, &edge.to)?;
            }
        }

        on_path.remove(node);
        hooks.postvisit(node);
        Ok(())
    }
}
