use crate::error::{Result, SkeinError};
use crate::graph::algos::disjoint_set::DisjointSet;
use crate::graph::types::Edge;
use crate::graph::view::GraphView;
use serde::Serialize;

/// Minimum spanning forest: accepted edges plus their total weight
///
/// On a connected graph this is a single spanning tree; on a
/// disconnected graph, one tree per component.
#[derive(Debug, Clone, Serialize)]
pub struct MstResult {
    pub edges: Vec<Edge>,
    pub total_weight: f64,
}

impl MstResult {
    /// Accepted edges as `(u, v)` pairs, for edge highlighting
    pub fn edge_pairs(&self) -> Vec<(String, String)> {
        self.edges
            .iter()
            .map(|edge| (edge.from.clone(), edge.to.clone()))
            .collect()
    }
}

/// Kruskal's minimum spanning forest over a disjoint-set forest
///
/// Edges are taken in ascending weight order, ties broken by input
/// order for determinism; an edge joining two distinct sets is
/// accepted and the sets merged. Every edge must carry an explicit
/// weight.
pub struct KruskalMst<'g> {
    graph: &'g dyn GraphView,
}

impl<'g> KruskalMst<'g> {
    pub fn new(graph: &'g dyn GraphView) -> Self {
        KruskalMst { graph }
    }

    #[tracing::instrument(skip(self), fields(nodes = self.graph.node_count()))]
    pub fn run(&self) -> Result<MstResult> {
        let mut sets = DisjointSet::new();
        for node in self.graph.nodes() {
            sets.make_set(&node);
        }

        // Validate weights up front so no partial forest escapes
        let mut edges: Vec<(usize, f64, Edge)> = Vec::new();
        for (input_order, edge) in self.graph.edges().into_iter().enumerate() {
            let weight = edge.weight.ok_or_else(|| SkeinError::MissingWeight {
                from: edge.from.clone(),
                to: edge.to.clone(),
            })?;
            edges.push((input_order, weight, edge));
        }

        edges.sort_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });

        let mut accepted: Vec<Edge> = Vec::new();
        let mut total_weight = 0.0;
        for (_, weight, edge) in edges {
            if sets.find(&edge.from)? != sets.find(&edge.to)? {
                sets.union(&edge.from, &edge.to)?;
                total_weight += weight;
                accepted.push(edge);
            }
        }

        tracing::debug!(edges = accepted.len(), total_weight, "kruskal finished");
        Ok(MstResult {
            edges: accepted,
            total_weight,
        })
    }
}
