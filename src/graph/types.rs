use serde::Serialize;
use std::collections::HashMap;

/// Weight applied to an edge whose record carries none
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A single edge between two nodes, optionally weighted
///
/// Directed edges are ordered `from -> to`. For undirected graphs the
/// edge is stored once in the edge list and mirrored in the adjacency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: Option<f64>) -> Self {
        Edge {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// Weight of this edge, falling back to [`DEFAULT_WEIGHT`]
    pub fn weight_or_default(&self) -> f64 {
        self.weight.unwrap_or(DEFAULT_WEIGHT)
    }

    /// The same edge oriented in the opposite direction
    pub fn reversed(&self) -> Edge {
        Edge {
            from: self.to.clone(),
            to: self.from.clone(),
            weight: self.weight,
        }
    }
}

/// An in-memory node/edge collection with deterministic iteration order
///
/// Nodes and edges keep their insertion order, so traversal discovery
/// order is reproducible across runs. The graph is treated as immutable
/// for the duration of any single algorithm run; algorithms borrow it
/// through [`crate::graph::view::GraphView`].
#[derive(Debug, Clone, Default)]
pub struct Graph {
    directed: bool,
    nodes: Vec<String>,
    node_index: HashMap<String, usize>,
    outbound: Vec<Vec<Edge>>,
    inbound: Vec<Vec<Edge>>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new(directed: bool) -> Self {
        Graph {
            directed,
            ..Default::default()
        }
    }

    /// Build a graph from edge-list records: `(from, to, optional weight)`
    ///
    /// This is the seam an external loader targets; one record per edge,
    /// weight defaulting to 1.0 when absent. Directedness is a
    /// construction-time flag, never inferred from the data.
    pub fn from_edge_list(records: &[(&str, &str, Option<f64>)], directed: bool) -> Self {
        let mut graph = Graph::new(directed);
        for (from, to, weight) in records {
            graph.add_edge(from, to, *weight);
        }
        graph
    }

    pub fn directed(&self) -> bool {
        self.directed
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Edge records in input order, one per added edge
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// Add a node if not already present; returns its index
    pub fn add_node(&mut self, id: &str) -> usize {
        if let Some(&idx) = self.node_index.get(id) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(id.to_string());
        self.node_index.insert(id.to_string(), idx);
        self.outbound.push(Vec::new());
        self.inbound.push(Vec::new());
        idx
    }

    /// Add an edge, creating missing endpoints
    ///
    /// For undirected graphs the adjacency is mirrored in both
    /// directions while the edge list records the edge once.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: Option<f64>) {
        let from_idx = self.add_node(from);
        let to_idx = self.add_node(to);
        let edge = Edge::new(from, to, weight);

        self.outbound[from_idx].push(edge.clone());
        self.inbound[to_idx].push(edge.clone());
        if !self.directed && from_idx != to_idx {
            self.outbound[to_idx].push(edge.reversed());
            self.inbound[from_idx].push(edge.reversed());
        }
        self.edges.push(edge);
    }

    pub(crate) fn outbound_of(&self, id: &str) -> &[Edge] {
        self.node_index
            .get(id)
            .map(|&idx| self.outbound[idx].as_slice())
            .unwrap_or(&[])
    }

    pub(crate) fn inbound_of(&self, id: &str) -> &[Edge] {
        self.node_index
            .get(id)
            .map(|&idx| self.inbound[idx].as_slice())
            .unwrap_or(&[])
    }
}
