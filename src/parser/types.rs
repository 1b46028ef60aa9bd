//! Serializable form of a graph.
//!
//! A graph description is a JSON object mapping each vertex name to an
//! object of its outgoing neighbors and their weights:
//!
//! ```json
//! {
//!     "Arya": { "Sansa": 1, "Jon": true },
//!     "Sansa": { "Arya": 1 },
//!     "Jon": {}
//! }
//! ```
//!
//! Key order is preserved and becomes vertex insertion order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::graph::{Graph, Weight};

/// An adjacency description keyed by vertex name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GraphDescription {
    /// Vertex name to outgoing neighbors and weights
    pub adjacency: IndexMap<String, IndexMap<String, Weight>>,
}

impl GraphDescription {
    /// Returns the number of declared vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the total number of edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(IndexMap::len).sum()
    }

    /// Returns `(source, target)` pairs whose target is not a declared vertex.
    pub fn undeclared_targets(&self) -> Vec<(&str, &str)> {
        self.adjacency
            .iter()
            .flat_map(|(source, neighbors)| {
                neighbors
                    .keys()
                    .filter(move |target| !self.adjacency.contains_key(*target))
                    .map(move |target| (source.as_str(), target.as_str()))
            })
            .collect()
    }

    /// Converts the description into a graph at version 0.
    pub fn into_graph(self) -> Graph<String> {
        Graph::from_adjacency(self.adjacency)
    }
}

impl From<&Graph<String>> for GraphDescription {
    fn from(graph: &Graph<String>) -> Self {
        let mut adjacency: IndexMap<String, IndexMap<String, Weight>> = graph
            .vertices()
            .iter()
            .map(|vertex| (vertex.clone(), IndexMap::new()))
            .collect();
        for (source, target, weight) in graph.edges() {
            if let Some(neighbors) = adjacency.get_mut(source) {
                neighbors.insert(target.clone(), weight);
            }
        }
        Self { adjacency }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GraphDescription {
        serde_json::from_str(r#"{"a": {"b": 2, "c": true}, "b": {}, "c": {"a": 0}}"#).unwrap()
    }

    #[test]
    fn test_counts() {
        let description = sample();
        assert_eq!(description.vertex_count(), 3);
        assert_eq!(description.edge_count(), 3);
    }

    #[test]
    fn test_default_is_empty() {
        let description = GraphDescription::default();
        assert_eq!(description.vertex_count(), 0);
        assert!(description.undeclared_targets().is_empty());
    }

    #[test]
    fn test_undeclared_targets() {
        let description: GraphDescription =
            serde_json::from_str(r#"{"a": {"b": 1, "ghost": 1}, "b": {}}"#).unwrap();
        assert_eq!(description.undeclared_targets(), vec![("a", "ghost")]);
    }

    #[test]
    fn test_into_graph() {
        let graph = sample().into_graph();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(
            graph.weight(&"c".to_string(), &"a".to_string()).unwrap(),
            Some(Weight::Value(0.0))
        );
        assert_eq!(
            graph.weight(&"a".to_string(), &"c".to_string()).unwrap(),
            Some(Weight::Unit)
        );
    }

    #[test]
    fn test_from_graph_round_trip() {
        let description = sample();
        let graph = description.clone().into_graph();
        assert_eq!(GraphDescription::from(&graph), description);
    }

    #[test]
    fn test_serialize_keeps_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(json, r#"{"a":{"b":2.0,"c":true},"b":{},"c":{"a":0.0}}"#);
    }
}
