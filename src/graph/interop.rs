//! Conversion to petgraph.
//!
//! Gives callers access to petgraph's algorithm library for graphs too large
//! for the quadratic analyses in this crate.

use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

use super::store::{Graph, Vertex};
use super::weight::Weight;

/// A petgraph copy of a [`Graph`] and the node index of each vertex.
#[derive(Debug, Clone)]
pub struct PetgraphView<T> {
    /// The converted graph; node weights are the vertices
    pub graph: DiGraph<T, Weight>,
    /// Maps each vertex to its node index for O(1) lookup
    pub node_indices: HashMap<T, NodeIndex>,
}

impl<T: Vertex> PetgraphView<T> {
    /// Returns the node index of a vertex.
    pub fn index_of(&self, vertex: &T) -> Option<NodeIndex> {
        self.node_indices.get(vertex).copied()
    }

    /// Returns the vertex stored at a node index.
    pub fn vertex_at(&self, index: NodeIndex) -> Option<&T> {
        self.graph.node_weight(index)
    }
}

impl<T: Vertex> Graph<T> {
    /// Copies this graph into a petgraph `DiGraph`.
    ///
    /// Nodes are added in vertex insertion order and edges in adjacency order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphscope::graph::{Graph, Weight};
    ///
    /// let graph = Graph::from_edges([("a", "b", Weight::Value(2.0))]);
    /// let view = graph.to_petgraph();
    ///
    /// assert_eq!(view.graph.node_count(), 2);
    /// assert_eq!(view.graph.edge_count(), 1);
    /// assert_eq!(view.vertex_at(view.index_of(&"b").unwrap()), Some(&"b"));
    /// ```
    pub fn to_petgraph(&self) -> PetgraphView<T> {
        let mut graph = DiGraph::with_capacity(self.vertex_count(), self.edge_count());
        let mut node_indices = HashMap::with_capacity(self.vertex_count());

        for vertex in self.vertices().iter() {
            let index = graph.add_node(vertex.clone());
            node_indices.insert(vertex.clone(), index);
        }
        for (source, target, weight) in self.edges() {
            if let (Some(&from), Some(&to)) = (node_indices.get(source), node_indices.get(target)) {
                graph.add_edge(from, to, weight);
            }
        }

        PetgraphView {
            graph,
            node_indices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::algo::tarjan_scc;
    use petgraph::visit::EdgeRef;

    #[test]
    fn test_to_petgraph_preserves_edges() {
        let graph = Graph::from_edges([
            (1, 2, Weight::Value(0.0)),
            (2, 3, Weight::Unit),
            (3, 1, Weight::Value(4.0)),
        ]);
        let view = graph.to_petgraph();

        assert_eq!(view.graph.node_count(), 3);
        assert_eq!(view.graph.edge_count(), 3);

        let three = view.index_of(&3).unwrap();
        let edge = view.graph.edges(three).next().unwrap();
        assert_eq!(view.vertex_at(edge.target()), Some(&1));
        assert_eq!(*edge.weight(), Weight::Value(4.0));
    }

    #[test]
    fn test_to_petgraph_scc_matches() {
        let graph = Graph::from_edges([
            (1, 2, Weight::Unit),
            (2, 1, Weight::Unit),
            (2, 3, Weight::Unit),
        ]);
        let view = graph.to_petgraph();
        assert_eq!(tarjan_scc(&view.graph).len(), graph.connected_components().len());
    }

    #[test]
    fn test_missing_vertex_lookup() {
        let graph: Graph<u8> = Graph::new();
        let view = graph.to_petgraph();
        assert!(view.index_of(&0).is_none());
    }
}
