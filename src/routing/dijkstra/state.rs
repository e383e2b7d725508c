use std::cmp::Ordering;

use petgraph::graph::NodeIndex;

use crate::Distance;

#[derive(Copy, Clone, PartialEq)]
pub(super) struct State {
    pub(super) cost: Distance,
    pub(super) node: NodeIndex,
}

impl Eq for State {}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap).
        // Costs are finite by construction, so total_cmp is plain numeric
        // order; ties fall back to the node index.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.index().cmp(&self.node.index()))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
