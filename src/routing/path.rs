//! Path reconstruction from solver output

use petgraph::graph::NodeIndex;
use serde::Serialize;

use super::dijkstra::DijkstraTrace;
use crate::model::StreetGraph;
use crate::{Distance, Error};

/// One traversed edge of the final path.
#[derive(Debug, Clone, Serialize)]
pub struct Segment {
    pub from: String,
    pub to: String,
    /// Length of this segment in meters
    pub distance: Distance,
}

/// A complete start-to-end route.
///
/// Node ids are the external string ids from the edge list; conversion
/// back from graph indices happens here, at the output boundary.
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    /// Visited node ids, start and end inclusive
    pub nodes: Vec<String>,
    /// One entry per consecutive node pair
    pub segments: Vec<Segment>,
    /// Sum of segment distances, in meters
    pub total_distance: Distance,
}

/// Reconstruct the ordered start-to-end path from a solver trace.
///
/// Walks the predecessor chain backward from `end`, reusing the edge
/// weight each relaxation carried. A chain that stops anywhere other than
/// `start` means the two nodes are not connected; that is reported as an
/// error rather than a partial route. `start == end` yields a single-node
/// path with no segments.
///
/// # Errors
///
/// Returns [`Error::PathNotFound`] if the predecessor chain from `end`
/// never reaches `start`.
pub fn assemble_path(
    graph: &StreetGraph,
    trace: &DijkstraTrace,
    start: NodeIndex,
    end: NodeIndex,
) -> Result<PathResult, Error> {
    // Backward walk, collecting the edge weight used at each hop
    let mut hops: Vec<(NodeIndex, Distance)> = Vec::new();
    let mut current = end;
    while current != start {
        let Some(&(prev, weight)) = trace.predecessors.get(&current) else {
            return Err(Error::PathNotFound);
        };
        hops.push((current, weight));
        current = prev;
    }

    let mut prev_id = external_id(graph, start)?;
    let mut nodes = Vec::with_capacity(hops.len() + 1);
    nodes.push(prev_id.clone());

    let mut segments = Vec::with_capacity(hops.len());
    let mut total_distance = 0.0;

    for &(node, weight) in hops.iter().rev() {
        let to = external_id(graph, node)?;
        segments.push(Segment {
            from: prev_id,
            to: to.clone(),
            distance: weight,
        });
        total_distance += weight;
        nodes.push(to.clone());
        prev_id = to;
    }

    Ok(PathResult {
        nodes,
        segments,
        total_distance,
    })
}

fn external_id(graph: &StreetGraph, node: NodeIndex) -> Result<String, Error> {
    graph
        .external_id(node)
        .map(str::to_owned)
        .ok_or(Error::InvalidNodeIndex)
}
