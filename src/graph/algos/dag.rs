use crate::error::Result;
use crate::graph::algos::dijkstra::ShortestPathResult;
use crate::graph::traversal::TopologicalSorter;
use crate::graph::view::GraphView;
use serde::Serialize;
use std::collections::HashMap;

/// Shortest distances under an edge-count budget
///
/// `dist[node][i]` is the minimum weight of a path from the source to
/// `node` using exactly `i` edges; the unconstrained answer for a
/// budget of `k` is the minimum over `0..=k`.
#[derive(Debug, Clone, Serialize)]
pub struct BoundedPathResult {
    pub source: String,
    pub budget: usize,
    distances: HashMap<String, Vec<f64>>,
    #[serde(skip)]
    predecessors: HashMap<String, Vec<Option<String>>>,
}

impl BoundedPathResult {
    /// Minimum path weight to `node` over all edge counts up to the
    /// budget; infinity when unreachable within the budget
    pub fn distance(&self, node: &str) -> f64 {
        self.distances
            .get(node)
            .map(|row| row.iter().copied().fold(f64::INFINITY, f64::min))
            .unwrap_or(f64::INFINITY)
    }

    /// Minimum path weight to `node` using exactly `edges_used` edges
    pub fn distance_with_budget(&self, node: &str, edges_used: usize) -> f64 {
        self.distances
            .get(node)
            .and_then(|row| row.get(edges_used))
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    /// One minimum-weight path within the budget, as an ordered node
    /// sequence; `None` when unreachable
    pub fn path_to(&self, target: &str) -> Option<Vec<String>> {
        let row = self.distances.get(target)?;
        let (mut step, best) = row
            .iter()
            .copied()
            .enumerate()
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))?;
        if best.is_infinite() {
            return None;
        }

        let mut path = vec![target.to_string()];
        let mut current = target.to_string();
        while step > 0 {
            let pred = self
                .predecessors
                .get(&current)
                .and_then(|row| row.get(step))
                .cloned()
                .flatten()?;
            path.push(pred.clone());
            current = pred;
            step -= 1;
        }
        path.reverse();
        Some(path)
    }
}

/// Dynamic-programming shortest paths over a directed acyclic graph
///
/// Processing order comes from [`TopologicalSorter`], so every
/// predecessor's distance is final before a node is relaxed. Cyclic
/// input fails with `CycleDetected` before any distance is computed.
pub struct DagShortestPath<'g> {
    graph: &'g dyn GraphView,
}

impl<'g> DagShortestPath<'g> {
    pub fn new(graph: &'g dyn GraphView) -> Self {
        DagShortestPath { graph }
    }

    /// Shortest distances from `source` to every node reachable from it
    ///
    /// Ties between predecessors are broken by the first predecessor
    /// encountered in the fixed inbound enumeration order (strict
    /// less-than during the minimum scan).
    #[tracing::instrument(skip(self), fields(source = %source))]
    pub fn run(&self, source: &str) -> Result<ShortestPathResult> {
        let order = TopologicalSorter::new(self.graph).sort(source)?;

        let mut distances: HashMap<String, f64> = HashMap::new();
        let mut predecessors: HashMap<String, String> = HashMap::new();
        distances.insert(source.to_string(), 0.0);

        for node in order.iter().skip(1) {
            let mut best = f64::INFINITY;
            let mut best_pred: Option<String> = None;
            for edge in self.graph.inbound_edges(node) {
                // Predecessors outside the reachable subgraph stay infinite
                let Some(&pred_dist) = distances.get(&edge.from) else {
                    continue;
                };
                let candidate = pred_dist + edge.weight_or_default();
                if candidate < best {
                    best = candidate;
                    best_pred = Some(edge.from);
                }
            }
            if let Some(pred) = best_pred {
                distances.insert(node.clone(), best);
                predecessors.insert(node.clone(), pred);
            }
        }

        Ok(ShortestPathResult {
            source: source.to_string(),
            distances,
            predecessors,
        })
    }

    /// Budget-constrained variant: no path may use more than `budget`
    /// edges. `O(budget * E)` over the reachable subgraph.
    #[tracing::instrument(skip(self), fields(source = %source, budget))]
    pub fn run_bounded(&self, source: &str, budget: usize) -> Result<BoundedPathResult> {
        let order = TopologicalSorter::new(self.graph).sort(source)?;

        let mut distances: HashMap<String, Vec<f64>> = order
            .iter()
            .map(|node| (node.clone(), vec![f64::INFINITY; budget + 1]))
            .collect();
        let mut predecessors: HashMap<String, Vec<Option<String>>> = order
            .iter()
            .map(|node| (node.clone(), vec![None; budget + 1]))
            .collect();
        if let Some(row) = distances.get_mut(source) {
            row[0] = 0.0;
        }

        for edges_used in 1..=budget {
            for node in order.iter().skip(1) {
                let mut best = f64::INFINITY;
                let mut best_pred: Option<String> = None;
                for edge in self.graph.inbound_edges(node) {
                    let Some(prev) = distances
                        .get(&edge.from)
                        .map(|row| row[edges_used - 1])
                    else {
                        continue;
                    };
                    let candidate = prev + edge.weight_or_default();
                    if candidate < best {
                        best = candidate;
                        best_pred = Some(edge.from);
                    }
                }
                if let Some(row) = distances.get_mut(node) {
                    row[edges_used] = best;
                }
                if let Some(row) = predecessors.get_mut(node) {
                    row[edges_used] = best_pred;
                }
            }
        }

        Ok(BoundedPathResult {
            source: source.to_string(),
            budget,
            distances,
            predecessors,
        })
    }
}
