// Re-export key components
pub use crate::loading::{StreetModelConfig, create_street_model};
pub use crate::model::{NodeCoordinates, StreetGraph, StreetModel};
pub use crate::routing::dijkstra::{DijkstraTrace, dijkstra_path_weights, dijkstra_trace};
pub use crate::routing::{PathResult, Segment, find_route, shortest_path};

// Core types for the street network
pub use crate::Distance; // meters
pub use crate::StreetNodeId;

pub use crate::Error;
