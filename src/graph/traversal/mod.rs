//! Graph traversal engines with previsit/postvisit hooks
//!
//! Contains the traversal variants:
//! - `dfs`: iterative depth-first search (explicit frame stack), plus a
//!   recursive variant for small graphs
//! - `bfs`: breadth-first search
//! - `topo`: topological sorting built by composing the DFS engine
//!
//! Hook contract, shared by every engine: `previsit` fires exactly once
//! per node, at the moment the node is first marked visited and before
//! its neighbors are explored. `postvisit` fires exactly once per node;
//! for DFS after all reachable unvisited descendants have completed
//! both hooks, for BFS after the node's full neighbor list has been
//! scanned.

pub mod bfs;
pub mod dfs;
pub mod topo;

pub use bfs::BreadthFirst;
pub use dfs::{DepthFirst, RecursiveDepthFirst};
pub use topo::TopologicalSorter;

use crate::error::Result;
use std::collections::{HashMap, HashSet};

/// Hooks invoked as a traversal discovers and finishes nodes
///
/// Implementations compose with an engine instead of subclassing it;
/// every method has a no-op default so callers override only what they
/// observe.
pub trait TraversalHooks {
    /// Called exactly once when `node` is first discovered
    fn previsit(&mut self, _node: &str) {}

    /// Called exactly once when `node` is finished
    fn postvisit(&mut self, _node: &str) {}

    /// Called by DFS for an edge whose target is still on the active
    /// traversal path. On undirected graphs this includes the reverse
    /// of each tree edge, so the default accepts silently; directed
    /// consumers such as topological sort return an error here.
    fn back_edge(&mut self, _from: &str, _to: &str) -> Result<()> {
        Ok(())
    }
}

/// Hooks that observe nothing
#[derive(Debug, Default)]
pub struct NoopHooks;

impl TraversalHooks for NoopHooks {}

/// Per-run traversal bookkeeping
///
/// Grows monotonically within a run and across `run` calls on the same
/// engine, so a caller can cover a disconnected graph by iterating over
/// all nodes and skipping the already-visited ones. Cleared only by an
/// explicit `reset()` on the owning engine.
#[derive(Debug, Default, Clone)]
pub struct TraversalState {
    pub visited: HashSet<String>,
    pub discovery_order: Vec<String>,
    pub predecessors: HashMap<String, String>,
}

impl TraversalState {
    pub(crate) fn mark_discovered(&mut self, node: &str, predecessor: Option<&str>) {
        self.visited.insert(node.to_string());
        self.discovery_order.push(node.to_string());
        if let Some(pred) = predecessor {
            self.predecessors
                .insert(node.to_string(), pred.to_string());
        }
    }

    pub(crate) fn clear(&mut self) {
        self.visited.clear();
        self.discovery_order.clear();
        self.predecessors.clear();
    }
}
