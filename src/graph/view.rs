use crate::graph::types::{Edge, Graph};

/// Trait for read-only access to graph adjacency and topology
///
/// Algorithms borrow a `GraphView` for the duration of a run, which
/// keeps the graph immutable by contract. Edge order must be
/// deterministic so discovery order is reproducible.
pub trait GraphView {
    fn is_directed(&self) -> bool;
    fn node_count(&self) -> usize;
    /// All nodes in a deterministic order
    fn nodes(&self) -> Vec<String>;
    fn contains_node(&self, id: &str) -> bool;
    /// Edges leaving `id`; for undirected graphs, all incident edges
    /// oriented away from `id`
    fn outbound_edges(&self, id: &str) -> Vec<Edge>;
    /// Edges arriving at `id`; for undirected graphs, all incident
    /// edges oriented into `id`
    fn inbound_edges(&self, id: &str) -> Vec<Edge>;
    /// Edge records in input order, one per edge
    fn edges(&self) -> Vec<Edge>;
}

impl GraphView for Graph {
    fn is_directed(&self) -> bool {
        self.directed()
    }

    fn node_count(&self) -> usize {
        self.node_count()
    }

    fn nodes(&self) -> Vec<String> {
        self.nodes().to_vec()
    }

    fn contains_node(&self, id: &str) -> bool {
        self.contains_node(id)
    }

    fn outbound_edges(&self, id: &str) -> Vec<Edge> {
        self.outbound_of(id).to_vec()
    }

    fn inbound_edges(&self, id: &str) -> Vec<Edge> {
        self.inbound_of(id).to_vec()
    }

    fn edges(&self) -> Vec<Edge> {
        self.edges().to_vec()
    }
}
