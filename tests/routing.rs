mod common;

use common::{triangle_graph, triangle_model};
use footway::routing::dijkstra::dijkstra_path_weights;
use footway::{Error, StreetGraph, find_route, shortest_path};
use geo::Point;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

#[test]
fn triangle_shortcut_prefers_two_hop_path() {
    let graph = triangle_graph();
    let start = graph.node_index("A").unwrap();
    let end = graph.node_index("C").unwrap();

    let result = shortest_path(&graph, start, end).unwrap();

    assert_eq!(result.nodes, vec!["A", "B", "C"]);
    assert_eq!(result.segments.len(), 2);
    assert_eq!(result.segments[0].from, "A");
    assert_eq!(result.segments[0].to, "B");
    assert_eq!(result.segments[0].distance, 100.0);
    assert_eq!(result.segments[1].from, "B");
    assert_eq!(result.segments[1].to, "C");
    assert_eq!(result.segments[1].distance, 50.0);
    assert_eq!(result.total_distance, 150.0);
}

#[test]
fn parallel_edges_settle_on_the_cheaper_one() {
    let mut graph = StreetGraph::new();
    graph.add_edge("A", "B", 100.0);
    graph.add_edge("A", "B", 80.0);

    let start = graph.node_index("A").unwrap();
    let end = graph.node_index("B").unwrap();
    let result = shortest_path(&graph, start, end).unwrap();

    assert_eq!(result.nodes, vec!["A", "B"]);
    assert_eq!(result.segments.len(), 1);
    assert_eq!(result.segments[0].distance, 80.0);
    assert_eq!(result.total_distance, 80.0);
}

#[test]
fn disconnected_components_return_path_not_found() {
    let mut graph = StreetGraph::new();
    graph.add_edge("A", "B", 100.0);
    graph.add_edge("C", "D", 50.0);

    let start = graph.node_index("A").unwrap();
    let end = graph.node_index("C").unwrap();
    let err = shortest_path(&graph, start, end).unwrap_err();

    assert!(matches!(err, Error::PathNotFound));
}

#[test]
fn start_equals_end_yields_single_node_path() {
    let graph = triangle_graph();
    let start = graph.node_index("A").unwrap();

    let result = shortest_path(&graph, start, start).unwrap();

    assert_eq!(result.nodes, vec!["A"]);
    assert!(result.segments.is_empty());
    assert_eq!(result.total_distance, 0.0);
}

#[test]
fn repeated_queries_are_deterministic() {
    let model = triangle_model();
    let origin = Point::new(-82.351, 29.639);
    let destination = Point::new(-82.339, 29.651);

    let first = find_route(&model, &origin, &destination).unwrap();
    for _ in 0..10 {
        let again = find_route(&model, &origin, &destination).unwrap();
        assert_eq!(again.nodes, first.nodes);
        assert_eq!(again.total_distance, first.total_distance);
    }
}

#[test]
fn solver_distance_matches_brute_force_enumeration() {
    // Braided network with several competing simple paths from s to t
    let mut graph = StreetGraph::new();
    graph.add_edge("s", "a", 2.0);
    graph.add_edge("s", "b", 4.0);
    graph.add_edge("a", "b", 1.0);
    graph.add_edge("a", "c", 7.0);
    graph.add_edge("b", "c", 3.0);
    graph.add_edge("c", "t", 2.0);
    graph.add_edge("a", "t", 12.0);
    graph.add_edge("b", "t", 9.0);

    let start = graph.node_index("s").unwrap();
    let end = graph.node_index("t").unwrap();

    let mut best = f64::INFINITY;
    let mut visited = vec![start];
    brute_force_min(&graph, start, end, &mut visited, 0.0, &mut best);

    let result = shortest_path(&graph, start, end).unwrap();
    assert_eq!(result.total_distance, best);
    // s -> a -> b -> c -> t = 2 + 1 + 3 + 2
    assert_eq!(result.nodes, vec!["s", "a", "b", "c", "t"]);
    assert_eq!(result.total_distance, 8.0);
}

#[test]
fn distance_map_covers_all_reachable_nodes() {
    let graph = triangle_graph();
    let start = graph.node_index("A").unwrap();

    let distances = dijkstra_path_weights(&graph, start, None, None);

    assert_eq!(distances[&start], 0.0);
    assert_eq!(distances[&graph.node_index("B").unwrap()], 100.0);
    assert_eq!(distances[&graph.node_index("C").unwrap()], 150.0);
}

#[test]
fn early_exit_still_finalizes_the_target() {
    let graph = triangle_graph();
    let start = graph.node_index("A").unwrap();
    let end = graph.node_index("C").unwrap();

    let distances = dijkstra_path_weights(&graph, start, Some(end), None);

    assert_eq!(distances[&end], 150.0);
}

#[test]
fn zero_weight_edges_are_traversable() {
    let mut graph = StreetGraph::new();
    graph.add_edge("A", "B", 0.0);
    graph.add_edge("B", "C", 10.0);

    let start = graph.node_index("A").unwrap();
    let end = graph.node_index("C").unwrap();
    let result = shortest_path(&graph, start, end).unwrap();

    assert_eq!(result.nodes, vec!["A", "B", "C"]);
    assert_eq!(result.total_distance, 10.0);
}

/// Exhaustive simple-path enumeration, small fixtures only.
fn brute_force_min(
    graph: &StreetGraph,
    current: NodeIndex,
    target: NodeIndex,
    visited: &mut Vec<NodeIndex>,
    cost: f64,
    best: &mut f64,
) {
    if current == target {
        if cost < *best {
            *best = cost;
        }
        return;
    }
    for edge in graph.edges(current) {
        let next = edge.target();
        if visited.contains(&next) {
            continue;
        }
        visited.push(next);
        brute_force_min(graph, next, target, visited, cost + edge.weight().length, best);
        visited.pop();
    }
}
