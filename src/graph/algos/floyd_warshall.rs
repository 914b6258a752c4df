use crate::error::{Result, SkeinError};
use crate::graph::view::GraphView;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// All-pairs shortest distances with representative edge-set paths
///
/// Distances are stored as a flattened `n x n` matrix over the graph's
/// deterministic node order; each pair also carries the edge set of one
/// shortest path, built by unioning sub-path edge sets.
#[derive(Debug, Clone, Serialize)]
pub struct AllPairsResult {
    pub nodes: Vec<String>,
    #[serde(skip)]
    index: HashMap<String, usize>,
    dist: Vec<f64>,
    #[serde(skip)]
    paths: Vec<BTreeSet<(String, String)>>,
}

impl AllPairsResult {
    fn index_of(&self, id: &str) -> Result<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| SkeinError::node_not_found(id))
    }

    /// Shortest distance for the ordered pair `(from, to)`; infinity
    /// when no path exists
    pub fn distance(&self, from: &str, to: &str) -> Result<f64> {
        let i = self.index_of(from)?;
        let j = self.index_of(to)?;
        Ok(self.dist[i * self.nodes.len() + j])
    }

    /// Edge set of one shortest path for `(from, to)`, in deterministic
    /// order; empty when no path exists (or `from == to`)
    pub fn path_edges(&self, from: &str, to: &str) -> Result<Vec<(String, String)>> {
        let i = self.index_of(from)?;
        let j = self.index_of(to)?;
        Ok(self.paths[i * self.nodes.len() + j].iter().cloned().collect())
    }
}

/// All-pairs shortest paths by the Floyd-Warshall recurrence
///
/// `O(n^3)` time and `O(n^2)` space: the tradeoff favors dense or small
/// graphs and many-pairs queries over repeated single-source runs.
/// Negative edge weights are allowed; a negative cycle is reported
/// after the main loop via the diagonal check.
pub struct FloydWarshallSolver<'g> {
    graph: &'g dyn GraphView,
}

impl<'g> FloydWarshallSolver<'g> {
    pub fn new(graph: &'g dyn GraphView) -> Self {
        FloydWarshallSolver { graph }
    }

    /// Compute shortest distances and representative paths between
    /// every ordered node pair
    #[tracing::instrument(skip(self), fields(nodes = self.graph.node_count()))]
    pub fn run(&self) -> Result<AllPairsResult> {
        let nodes = self.graph.nodes();
        let n = nodes.len();
        let index: HashMap<String, usize> = nodes
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();

        let (mut dist, mut paths) = init_tables(self.graph, &nodes, &index);

        for k in 0..n {
            for i in 0..n {
                if dist[i * n + k].is_infinite() {
                    continue;
                }
                for j in 0..n {
                    let through_k = dist[i * n + k] + dist[k * n + j];
                    if through_k < dist[i * n + j] {
                        dist[i * n + j] = through_k;
                        let merged: BTreeSet<(String, String)> = paths[i * n + k]
                            .union(&paths[k * n + j])
                            .cloned()
                            .collect();
                        paths[i * n + j] = merged;
                    }
                }
            }
        }

        for (i, id) in nodes.iter().enumerate() {
            if dist[i * n + i] < 0.0 {
                return Err(SkeinError::NegativeCycleDetected { id: id.clone() });
            }
        }

        Ok(AllPairsResult {
            nodes,
            index,
            dist,
            paths,
        })
    }
}

type PathTable = Vec<BTreeSet<(String, String)>>;

/// Base cases: 0 on the diagonal, direct edge weights (minimum over
/// parallel edges, self-loops included), infinity elsewhere
fn init_tables(
    graph: &dyn GraphView,
    nodes: &[String],
    index: &HashMap<String, usize>,
) -> (Vec<f64>, PathTable) {
    let n = nodes.len();
    let mut dist = vec![f64::INFINITY; n * n];
    let mut paths: PathTable = vec![BTreeSet::new(); n * n];

    for i in 0..n {
        dist[i * n + i] = 0.0;
    }

    for node in nodes {
        for edge in graph.outbound_edges(node) {
            let (Some(&i), Some(&j)) = (index.get(&edge.from), index.get(&edge.to)) else {
                continue;
            };
            let weight = edge.weight_or_default();
            if weight < dist[i * n + j] {
                dist[i * n + j] = weight;
                paths[i * n + j] = BTreeSet::from([(edge.from.clone(), edge.to.clone())]);
            }
        }
    }

    (dist, paths)
}
