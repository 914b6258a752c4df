use super::*;
use crate::graph::types::Graph;

/// Test HeapEntry comparison ordering
#[test]
fn test_heap_entry_ordering() {
    let entry1 = HeapEntry {
        node_id: "A".to_string(),
        distance: 1.0,
    };
    let entry2 = HeapEntry {
        node_id: "B".to_string(),
        distance: 2.0,
    };
    let entry3 = HeapEntry {
        node_id: "C".to_string(),
        distance: 1.0,
    };

    // Lower distance should compare as less (normal ordering)
    assert_eq!(entry1.cmp(&entry2), std::cmp::Ordering::Less);
    assert_eq!(entry2.cmp(&entry1), std::cmp::Ordering::Greater);

    // Equal distances with different node_ids
    assert_eq!(entry1.cmp(&entry3), std::cmp::Ordering::Equal);

    assert_eq!(entry1, entry1.clone());
    assert_ne!(entry1, entry2);
}

fn weighted_graph() -> Graph {
    // Nodes {0..4}; shortest 0 -> 3 is 0-2-1-3 with weight 4
    Graph::from_edge_list(
        &[
            ("0", "1", Some(4.0)),
            ("0", "2", Some(1.0)),
            ("2", "1", Some(2.0)),
            ("1", "3", Some(1.0)),
            ("2", "3", Some(5.0)),
            ("3", "4", Some(3.0)),
        ],
        false,
    )
}

#[test]
fn test_dijkstra_reference_scenario() {
    let graph = weighted_graph();
    let solver = DijkstraSolver::new(&graph);
    let result = solver.run("0").unwrap();

    assert_eq!(result.distance("3"), 4.0);
    assert_eq!(
        result.path_to("3").unwrap(),
        vec!["0", "2", "1", "3"]
    );
    assert_eq!(result.distance("4"), 7.0);
}

#[test]
fn test_dijkstra_source_distance_zero() {
    let graph = weighted_graph();
    let result = DijkstraSolver::new(&graph).run("0").unwrap();
    assert_eq!(result.distance("0"), 0.0);
    assert_eq!(result.path_to("0").unwrap(), vec!["0"]);
}

#[test]
fn test_dijkstra_unreachable_is_infinite_not_error() {
    let graph = Graph::from_edge_list(&[("a", "b", Some(1.0)), ("x", "y", Some(1.0))], true);
    let result = DijkstraSolver::new(&graph).run("a").unwrap();
    assert!(result.distance("x").is_infinite());
    assert!(result.path_to("x").is_none());
    assert!(result.path_edges("x").is_none());
}

#[test]
fn test_dijkstra_missing_source_fails() {
    let graph = weighted_graph();
    let err = DijkstraSolver::new(&graph).run("zzz").unwrap_err();
    assert!(matches!(err, SkeinError::NodeNotFound { .. }));
}

#[test]
fn test_dijkstra_negative_weight_fails() {
    let graph = Graph::from_edge_list(&[("a", "b", Some(1.0)), ("b", "c", Some(-2.0))], true);
    let err = DijkstraSolver::new(&graph).run("a").unwrap_err();
    assert_eq!(err.error_type(), "invalid_weight");
}

#[test]
fn test_dijkstra_unweighted_edges_default_to_one() {
    let graph = Graph::from_edge_list(&[("a", "b", None), ("b", "c", None)], true);
    let result = DijkstraSolver::new(&graph).run("a").unwrap();
    assert_eq!(result.distance("c"), 2.0);
}

#[test]
fn test_dijkstra_prefers_cheaper_indirect_route() {
    // a -> c direct is 10, a -> b -> c is 3
    let graph = Graph::from_edge_list(
        &[
            ("a", "c", Some(10.0)),
            ("a", "b", Some(1.0)),
            ("b", "c", Some(2.0)),
        ],
        true,
    );
    let result = DijkstraSolver::new(&graph).run("a").unwrap();
    assert_eq!(result.distance("c"), 3.0);
    assert_eq!(result.path_to("c").unwrap(), vec!["a", "b", "c"]);
}

#[test]
fn test_dijkstra_repeated_runs_identical() {
    let graph = weighted_graph();
    let solver = DijkstraSolver::new(&graph);
    let first = solver.run("0").unwrap();
    let second = solver.run("0").unwrap();
    assert_eq!(first.distances, second.distances);
    assert_eq!(first.predecessors, second.predecessors);
}

#[test]
fn test_dijkstra_path_edges_for_highlighting() {
    let graph = weighted_graph();
    let result = DijkstraSolver::new(&graph).run("0").unwrap();
    assert_eq!(
        result.path_edges("3").unwrap(),
        vec![
            ("0".to_string(), "2".to_string()),
            ("2".to_string(), "1".to_string()),
            ("1".to_string(), "3".to_string()),
        ]
    );
}

#[test]
fn test_dijkstra_result_serializes() {
    let graph = weighted_graph();
    let result = DijkstraSolver::new(&graph).run("0").unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["source"], "0");
    assert_eq!(json["distances"]["3"], 4.0);
}
