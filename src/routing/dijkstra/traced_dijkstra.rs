use std::collections::BinaryHeap;

use hashbrown::HashMap;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use super::state::State;
use crate::Distance;
use crate::model::StreetGraph;

/// Solver output for one query: best known distance per reached node and,
/// for every reached node except the start, the predecessor on that best
/// path together with the weight of the edge the relaxation actually used.
///
/// Carrying the relaxed weight means path reconstruction never has to look
/// the edge up again, so reported segment distances stay consistent with
/// the distance map even when parallel edges of differing length connect
/// the same pair of nodes.
#[derive(Debug, Clone, Default)]
pub struct DijkstraTrace {
    pub distances: HashMap<NodeIndex, Distance>,
    pub predecessors: HashMap<NodeIndex, (NodeIndex, Distance)>,
}

/// Dijkstra's algorithm with predecessor tracking.
///
/// Stops as soon as `target` pops off the heap; its distance is exact at
/// that point and the rest of the graph is left unfinalized. Nodes absent
/// from the maps were not reached.
pub fn dijkstra_trace(
    graph: &StreetGraph,
    start: NodeIndex,
    target: Option<NodeIndex>,
) -> DijkstraTrace {
    // Estimate capacity based on graph size (adjust as needed)
    let estimated_nodes = graph.node_count().min(1000);
    let mut trace = DijkstraTrace {
        distances: HashMap::with_capacity(estimated_nodes),
        predecessors: HashMap::with_capacity(estimated_nodes),
    };
    let mut heap = BinaryHeap::with_capacity(estimated_nodes / 4);

    heap.push(State {
        cost: 0.0,
        node: start,
    });
    trace.distances.insert(start, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        if let Some(target_node) = target {
            if node == target_node {
                break;
            }
        }

        // Skip stale heap entries superseded by a better relaxation
        if let Some(&best) = trace.distances.get(&node) {
            if cost > best {
                continue;
            }
        }

        for edge in graph.edges(node) {
            let next = edge.target();
            let weight = edge.weight().length;
            let next_cost = cost + weight;

            match trace.distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                    trace.predecessors.insert(next, (node, weight));
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                        trace.predecessors.insert(next, (node, weight));
                    }
                }
            }
        }
    }

    trace
}
