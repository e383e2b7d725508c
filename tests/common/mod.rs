#![allow(dead_code)]

use footway::{NodeCoordinates, StreetGraph, StreetModel};
use geo::Point;
use petgraph::visit::EdgeRef;

/// Triangle fixture: A-B=100, B-C=50, A-C=200.
pub fn triangle_graph() -> StreetGraph {
    let mut graph = StreetGraph::new();
    graph.add_edge("A", "B", 100.0);
    graph.add_edge("B", "C", 50.0);
    graph.add_edge("A", "C", 200.0);
    graph
}

/// Triangle fixture with coordinates roughly matching a small campus area.
pub fn triangle_model() -> StreetModel {
    let mut coords = NodeCoordinates::new();
    coords.insert("A", Point::new(-82.350, 29.640));
    coords.insert("B", Point::new(-82.345, 29.645));
    coords.insert("C", Point::new(-82.340, 29.650));
    StreetModel::new(triangle_graph(), coords)
}

/// Neighbor list of `id` as (external id, weight) pairs.
pub fn neighbor_weights(graph: &StreetGraph, id: &str) -> Vec<(String, f64)> {
    let node = graph.node_index(id).expect("node should exist");
    graph
        .edges(node)
        .map(|edge| {
            let neighbor = graph
                .external_id(edge.target())
                .expect("endpoint should exist");
            (neighbor.to_string(), edge.weight().length)
        })
        .collect()
}
