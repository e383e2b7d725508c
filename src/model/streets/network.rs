use hashbrown::HashMap;
use petgraph::Undirected;
use petgraph::graph::{Edges, NodeIndex, UnGraph};

use super::{StreetEdge, StreetNode};
use crate::Distance;

/// Undirected street graph with interned node identifiers.
///
/// External ids from the edge list are interned to `NodeIndex` values
/// exactly once, on insertion; all routing works on indices. The graph is
/// built once and then queried immutably, so it can be shared between
/// threads without locking.
#[derive(Debug, Clone)]
pub struct StreetGraph {
    pub graph: UnGraph<StreetNode, StreetEdge>,
    node_indices: HashMap<String, NodeIndex>,
}

impl StreetGraph {
    pub fn new() -> Self {
        Self {
            graph: UnGraph::new_undirected(),
            node_indices: HashMap::new(),
        }
    }

    /// Insert an undirected street segment between `u` and `v`.
    ///
    /// Endpoints are interned on first use. Parallel edges between the same
    /// pair are kept as-is; relaxation in the solver settles on the cheapest
    /// one. `length` must be a finite non-negative number of meters - the
    /// file loaders guarantee this, programmatic callers must uphold it.
    pub fn add_edge(&mut self, u: &str, v: &str, length: Distance) {
        let a = self.intern(u);
        let b = self.intern(v);
        self.graph.add_edge(a, b, StreetEdge { length });
    }

    fn intern(&mut self, id: &str) -> NodeIndex {
        if let Some(&index) = self.node_indices.get(id) {
            return index;
        }
        let index = self.graph.add_node(StreetNode { id: id.to_owned() });
        self.node_indices.insert(id.to_owned(), index);
        index
    }

    /// Resolve an external id to its graph index.
    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.node_indices.get(id).copied()
    }

    /// External id of a graph node.
    pub fn external_id(&self, node: NodeIndex) -> Option<&str> {
        self.graph.node_weight(node).map(|node| node.id.as_str())
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node_indices.contains_key(id)
    }

    /// Edges incident to `node`, oriented so that `target()` is the
    /// neighboring endpoint.
    pub fn edges(&self, node: NodeIndex) -> Edges<'_, StreetEdge, Undirected> {
        self.graph.edges(node)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for StreetGraph {
    fn default() -> Self {
        Self::new()
    }
}
