use crate::error::{Result, SkeinError};
use crate::graph::view::GraphView;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance)
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub node_id: String,
    pub distance: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.node_id == other.node_id && self.distance == other.distance
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .partial_cmp(&other.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
    }
}

/// Single-source shortest path distances and predecessors
///
/// Nodes unreachable from the source are absent from both maps; their
/// distance is reported as infinity, which is a normal outcome rather
/// than an error.
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPathResult {
    pub source: String,
    pub distances: HashMap<String, f64>,
    pub predecessors: HashMap<String, String>,
}

impl ShortestPathResult {
    /// Minimum total edge weight from the source to `node`
    pub fn distance(&self, node: &str) -> f64 {
        self.distances.get(node).copied().unwrap_or(f64::INFINITY)
    }

    /// One shortest path to `target` as an ordered node sequence, or
    /// `None` if the target is unreachable
    pub fn path_to(&self, target: &str) -> Option<Vec<String>> {
        if !self.distances.contains_key(target) {
            return None;
        }
        let mut path = vec![target.to_string()];
        let mut current = target;
        while let Some(pred) = self.predecessors.get(current) {
            path.push(pred.clone());
            current = pred;
        }
        path.reverse();
        Some(path)
    }

    /// The same path as `(u, v)` pairs, for edge highlighting
    pub fn path_edges(&self, target: &str) -> Option<Vec<(String, String)>> {
        let path = self.path_to(target)?;
        Some(
            path.windows(2)
                .map(|pair| (pair[0].clone(), pair[1].clone()))
                .collect(),
        )
    }
}

/// Single-source shortest paths with nonnegative edge weights
///
/// Standard cut-property invariant: the minimum-distance unfinalized
/// node popped from the heap has a provably optimal distance, which
/// holds only when no edge weight is negative. The heap may contain
/// stale entries for already-finalized nodes; they are discarded on
/// pop. Per-run state is owned by each `run` call.
pub struct DijkstraSolver<'g> {
    graph: &'g dyn GraphView,
}

impl<'g> DijkstraSolver<'g> {
    pub fn new(graph: &'g dyn GraphView) -> Self {
        DijkstraSolver { graph }
    }

    /// Compute shortest distances and one shortest path from `source`
    /// to every reachable node
    #[tracing::instrument(skip(self), fields(source = %source))]
    pub fn run(&self, source: &str) -> Result<ShortestPathResult> {
        if !self.graph.contains_node(source) {
            return Err(SkeinError::node_not_found(source));
        }

        let mut distances: HashMap<String, f64> = HashMap::new();
        let mut predecessors: HashMap<String, String> = HashMap::new();
        let mut finalized: HashSet<String> = HashSet::new();
        let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();

        distances.insert(source.to_string(), 0.0);
        heap.push(Reverse(HeapEntry {
            node_id: source.to_string(),
            distance: 0.0,
        }));

        while let Some(Reverse(HeapEntry { node_id, distance })) = heap.pop() {
            if finalized.contains(&node_id) {
                continue;
            }
            finalized.insert(node_id.clone());

            for edge in self.graph.outbound_edges(&node_id) {
                let weight = edge.weight_or_default();
                if weight < 0.0 {
                    return Err(SkeinError::InvalidWeight {
                        from: edge.from,
                        to: edge.to,
                        weight,
                    });
                }

                let candidate = distance + weight;
                let known = distances.get(&edge.to).copied().unwrap_or(f64::INFINITY);
                if candidate < known {
                    distances.insert(edge.to.clone(), candidate);
                    predecessors.insert(edge.to.clone(), node_id.clone());
                    heap.push(Reverse(HeapEntry {
                        node_id: edge.to,
                        distance: candidate,
                    }));
                }
            }
        }

        tracing::debug!(reached = distances.len(), "dijkstra finished");
        Ok(ShortestPathResult {
            source: source.to_string(),
            distances,
            predecessors,
        })
    }
}

#[cfg(test)]
mod tests;
