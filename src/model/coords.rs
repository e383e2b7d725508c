//! Geographic coordinate table for graph nodes
//!
//! Coordinates live outside the routing graph: the graph only needs
//! topology and weights, while snapping and output rendering need
//! longitude/latitude pairs keyed by the same external ids.

use std::collections::BTreeMap;

use geo::Point;

/// Node id -> coordinate table, ordered by external id.
///
/// Ordered storage keeps snapping tie-breaks deterministic between runs.
#[derive(Debug, Clone, Default)]
pub struct NodeCoordinates {
    coords: BTreeMap<String, Point<f64>>,
}

impl NodeCoordinates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a coordinate; x is longitude, y is latitude, in degrees.
    pub fn insert(&mut self, id: impl Into<String>, point: Point<f64>) {
        self.coords.insert(id.into(), point);
    }

    pub fn get(&self, id: &str) -> Option<Point<f64>> {
        self.coords.get(id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Point<f64>)> {
        self.coords.iter().map(|(id, point)| (id.as_str(), *point))
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}
