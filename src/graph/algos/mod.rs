//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `dijkstra`: single-source shortest paths, nonnegative weights
//! - `floyd_warshall`: all-pairs shortest paths with representative
//!   edge-set paths
//! - `dag`: shortest path over a DAG by dynamic programming, with an
//!   edge-budget-constrained variant
//! - `disjoint_set`: union-find forest over node identifiers
//! - `kruskal`: minimum spanning forest built on the disjoint-set

pub mod dag;
pub mod dijkstra;
pub mod disjoint_set;
pub mod floyd_warshall;
pub mod kruskal;

pub use dag::{BoundedPathResult, DagShortestPath};
pub use dijkstra::{DijkstraSolver, ShortestPathResult};
pub use disjoint_set::DisjointSet;
pub use floyd_warshall::{AllPairsResult, FloydWarshallSolver};
pub use kruskal::{KruskalMst, MstResult};
