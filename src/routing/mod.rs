//! Shortest-path queries over the street model

pub mod dijkstra;
pub mod path;
mod to_geojson;

pub use path::{PathResult, Segment, assemble_path};

use geo::Point;
use petgraph::graph::NodeIndex;

use crate::Error;
use crate::model::{StreetGraph, StreetModel};

/// Point-to-point query: snap both endpoints to the graph and route
/// between them.
///
/// # Errors
///
/// Returns [`Error::NoPointsFound`] if either endpoint cannot be snapped
/// and [`Error::PathNotFound`] if the snapped nodes are not connected.
pub fn find_route(
    model: &StreetModel,
    origin: &Point<f64>,
    destination: &Point<f64>,
) -> Result<PathResult, Error> {
    let start = model.nearest_node(origin)?;
    let end = model.nearest_node(destination)?;
    shortest_path(&model.graph, start, end)
}

/// Shortest path between two graph nodes.
///
/// # Errors
///
/// Returns [`Error::PathNotFound`] if `end` is unreachable from `start`.
pub fn shortest_path(
    graph: &StreetGraph,
    start: NodeIndex,
    end: NodeIndex,
) -> Result<PathResult, Error> {
    let trace = dijkstra::dijkstra_trace(graph, start, Some(end));
    assemble_path(graph, &trace, start, end)
}
