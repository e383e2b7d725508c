//! Shortest-path routing engine for pedestrian street networks.
//!
//! The crate builds an undirected, weighted street graph from a delimited
//! edge list, snaps geographic query points to the nearest graph node and
//! answers point-to-point shortest-path queries with per-segment and total
//! distances. Geocoding, rendering and any other presentation concerns are
//! left to the calling application; everything here is a pure, synchronous
//! computation over an immutable model.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;

// Re-export of key components
pub use loading::{StreetModelConfig, create_street_model};
pub use model::{NodeCoordinates, StreetGraph, StreetModel};
pub use routing::{PathResult, Segment, find_route, shortest_path};

/// Distance along the street network, in meters.
pub type Distance = f64;

/// Canonical node identifier inside the routing graph.
///
/// External string ids from the edge list are interned to graph indices
/// once, at the ingestion boundary; everything past that boundary works
/// with indices only.
pub type StreetNodeId = petgraph::graph::NodeIndex;
