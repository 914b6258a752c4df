//! Graph representation, traversal, and path-finding operations
//!
//! Provides the core graph algorithms:
//! - BFS/DFS traversal with previsit/postvisit hooks
//! - Topological sorting with cycle detection
//! - Dijkstra and Floyd-Warshall shortest paths
//! - DAG dynamic-programming shortest paths (plus edge-budget variant)
//! - Kruskal minimum spanning forest over a disjoint-set forest
//! - Graph view trait for pluggable data sources

pub mod algos;
pub mod traversal;
pub mod types;
pub mod view;

pub use algos::{
    AllPairsResult, BoundedPathResult, DagShortestPath, DijkstraSolver, DisjointSet,
    FloydWarshallSolver, KruskalMst, MstResult, ShortestPathResult,
};
pub use traversal::{
    BreadthFirst, DepthFirst, RecursiveDepthFirst, TopologicalSorter, TraversalHooks,
    TraversalState,
};
pub use types::{Edge, Graph, DEFAULT_WEIGHT};
pub use view::GraphView;
