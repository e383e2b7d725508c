//! Data model for street network routing
//!
//! Contains types and structures for representing the routing graph
//! and its geographic coordinate table.

// Re-export of main modules
pub mod coords;
pub mod street_model;
pub mod streets;

// Re-export of the main model structure
pub use street_model::StreetModel;

// Re-export of basic types for convenience
pub use coords::NodeCoordinates;
pub use streets::{StreetEdge, StreetGraph, StreetNode};
