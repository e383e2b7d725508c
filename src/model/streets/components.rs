//! Street network components - nodes and edges

use crate::Distance;

/// Street graph node
#[derive(Debug, Clone)]
pub struct StreetNode {
    /// Upstream id of the node, exactly as written in the edge list
    pub id: String,
}

/// Street graph edge (street segment)
#[derive(Debug, Clone)]
pub struct StreetEdge {
    /// Segment length in meters
    pub length: Distance,
}
