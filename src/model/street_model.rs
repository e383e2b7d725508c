use geo::Point;
use petgraph::graph::NodeIndex;

use super::{NodeCoordinates, StreetGraph};
use crate::Error;

/// Complete routing model: the street graph together with the coordinate
/// table it was loaded alongside.
#[derive(Debug, Clone)]
pub struct StreetModel {
    pub graph: StreetGraph,
    pub coordinates: NodeCoordinates,
}

impl StreetModel {
    pub fn new(graph: StreetGraph, coordinates: NodeCoordinates) -> Self {
        Self { graph, coordinates }
    }

    /// Snap a query point to the nearest graph node.
    ///
    /// Scans the whole coordinate table, skipping entries whose id has no
    /// edges in the graph (an isolated node is never a useful snap target).
    /// Distance is squared planar distance in degree space; over the small
    /// regions this crate targets only the relative ranking matters, so no
    /// geodesic correction is applied. The first entry reaching the minimum
    /// in table order wins.
    ///
    /// Linear in the table size. Large deployments would put a spatial
    /// index in front of this.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoPointsFound`] if no table entry belongs to the
    /// graph.
    pub fn nearest_node(&self, point: &Point<f64>) -> Result<NodeIndex, Error> {
        let mut best: Option<(NodeIndex, f64)> = None;

        for (id, coord) in self.coordinates.iter() {
            let Some(index) = self.graph.node_index(id) else {
                continue;
            };

            let d_lon = point.x() - coord.x();
            let d_lat = point.y() - coord.y();
            let dist = d_lat * d_lat + d_lon * d_lon;

            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((index, dist)),
            }
        }

        best.map(|(index, _)| index).ok_or(Error::NoPointsFound)
    }
}
