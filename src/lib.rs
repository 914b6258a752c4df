//! Skein Core Library
//!
//! Graph traversal and path-finding algorithms over immutable in-memory
//! graphs: BFS/DFS with visit hooks, topological sorting, Dijkstra,
//! Floyd-Warshall, DAG dynamic programming, and Kruskal's minimum
//! spanning forest.

pub mod error;
pub mod graph;
pub mod logging;
