//! This module is responsible for loading the edge list and coordinate
//! table from disk and building a routing model from them.

mod builder;
mod config;
pub mod coords;
pub mod edges;

pub use builder::create_street_model;
pub use config::StreetModelConfig;
pub use coords::{node_coordinates_from_path, node_coordinates_from_reader};
pub use edges::{street_graph_from_path, street_graph_from_reader};
