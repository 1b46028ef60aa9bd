//! Single-source shortest paths.
//!
//! Label-setting Dijkstra with a linear scan for the closest unsettled
//! vertex, O(V^2) overall. Weights are assumed non-negative; negative
//! weights are not checked and give unspecified results.

use indexmap::IndexMap;

use super::error::{GraphError, GraphResult};
use super::store::{Graph, Vertex};

/// Distances and paths from one source to every vertex.
#[derive(Debug, Clone)]
pub struct ShortestPaths<T> {
    source: T,
    distances: IndexMap<T, f64>,
    paths: IndexMap<T, Vec<T>>,
}

impl<T: Vertex> ShortestPaths<T> {
    /// The vertex the paths start from.
    pub fn source(&self) -> &T {
        &self.source
    }

    /// Distance to `target`; infinite when unreachable, `None` when the
    /// vertex is not in the graph.
    pub fn distance(&self, target: &T) -> Option<f64> {
        self.distances.get(target).copied()
    }

    /// Cheapest path from the source to `target`, both ends included.
    ///
    /// Empty when `target` is unreachable or not in the graph.
    pub fn path(&self, target: &T) -> &[T] {
        self.paths.get(target).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Checks if `target` can be reached from the source.
    pub fn is_reachable(&self, target: &T) -> bool {
        self.distance(target).is_some_and(f64::is_finite)
    }

    /// Every distance, in vertex insertion order.
    pub fn distances(&self) -> &IndexMap<T, f64> {
        &self.distances
    }
}

impl<T: Vertex> Graph<T> {
    /// Computes the cheapest distance and path from `source` to every vertex.
    ///
    /// # Errors
    ///
    /// [`GraphError::VertexNotFound`] if `source` is absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphscope::graph::{Graph, Weight};
    ///
    /// let graph = Graph::from_edges([
    ///     ("A", "B", Weight::Value(2.0)),
    ///     ("B", "C", Weight::Value(3.0)),
    ///     ("A", "C", Weight::Value(10.0)),
    /// ]);
    ///
    /// let paths = graph.dijkstra(&"A").unwrap();
    /// assert_eq!(paths.distance(&"B"), Some(2.0));
    /// assert_eq!(paths.distance(&"C"), Some(5.0));
    /// assert_eq!(paths.path(&"C"), &["A", "B", "C"]);
    /// ```
    pub fn dijkstra(&self, source: &T) -> GraphResult<ShortestPaths<T>> {
        if !self.contains(source) {
            return Err(GraphError::vertex_not_found(source));
        }

        let vertices = self.vertices();
        let mut distances: IndexMap<T, f64> = vertices
            .iter()
            .map(|vertex| (vertex.clone(), f64::INFINITY))
            .collect();
        let mut paths: IndexMap<T, Vec<T>> = vertices
            .iter()
            .map(|vertex| (vertex.clone(), Vec::new()))
            .collect();
        distances.insert(source.clone(), 0.0);
        paths.insert(source.clone(), vec![source.clone()]);

        let mut pending: Vec<T> = vertices.to_vec();
        while !pending.is_empty() {
            let closest = pending
                .iter()
                .enumerate()
                .min_by(|(_, a), (_, b)| distances[*a].total_cmp(&distances[*b]))
                .map(|(index, _)| index);
            let Some(index) = closest else { break };
            let vertex = pending.remove(index);

            let base = distances[&vertex];
            if base.is_infinite() {
                // Everything left is unreachable
                break;
            }

            let Some(neighbors) = self.neighbors(&vertex) else {
                continue;
            };
            for (next, weight) in neighbors {
                let candidate = base + weight.cost();
                if candidate < distances[next] {
                    distances.insert(next.clone(), candidate);
                    let mut path = paths[&vertex].clone();
                    path.push(next.clone());
                    paths.insert(next.clone(), path);
                }
            }
        }

        Ok(ShortestPaths {
            source: source.clone(),
            distances,
            paths,
        })
    }

    /// Returns the cheapest path from `source` to `target`, or an empty path
    /// when `target` cannot be reached.
    ///
    /// # Errors
    ///
    /// [`GraphError::VertexNotFound`] if either vertex is absent.
    pub fn path(&self, source: &T, target: &T) -> GraphResult<Vec<T>> {
        if !self.contains(target) {
            return Err(GraphError::vertex_not_found(target));
        }
        let paths = self.dijkstra(source)?;
        Ok(paths.path(target).to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Weight;

    fn sample() -> Graph<&'static str> {
        Graph::from_edges([
            ("A", "B", Weight::Value(2.0)),
            ("B", "C", Weight::Value(3.0)),
            ("A", "C", Weight::Value(10.0)),
        ])
    }

    #[test]
    fn test_dijkstra_distances() {
        let paths = sample().dijkstra(&"A").unwrap();
        assert_eq!(paths.source(), &"A");
        assert_eq!(paths.distance(&"A"), Some(0.0));
        assert_eq!(paths.distance(&"B"), Some(2.0));
        assert_eq!(paths.distance(&"C"), Some(5.0));
    }

    #[test]
    fn test_path_through_cheaper_route() {
        let graph = sample();
        assert_eq!(graph.path(&"A", &"C").unwrap(), vec!["A", "B", "C"]);
        assert_eq!(graph.path(&"A", &"A").unwrap(), vec!["A"]);
    }

    #[test]
    fn test_unreachable_path_is_empty() {
        let graph = sample();
        assert!(graph.path(&"C", &"A").unwrap().is_empty());

        let paths = graph.dijkstra(&"C").unwrap();
        assert_eq!(paths.distance(&"A"), Some(f64::INFINITY));
        assert!(!paths.is_reachable(&"A"));
        assert!(paths.is_reachable(&"C"));
    }

    #[test]
    fn test_missing_vertices() {
        let graph = sample();
        assert!(graph.dijkstra(&"Z").is_err());
        assert!(graph.path(&"Z", &"A").is_err());
        assert!(graph.path(&"A", &"Z").is_err());
        let paths = graph.dijkstra(&"A").unwrap();
        assert_eq!(paths.distance(&"Z"), None);
        assert!(paths.path(&"Z").is_empty());
    }

    #[test]
    fn test_unit_and_zero_weights() {
        let graph = Graph::from_edges([
            (1, 2, Weight::Unit),
            (2, 3, Weight::Value(0.0)),
            (1, 3, Weight::Value(1.5)),
        ]);
        let paths = graph.dijkstra(&1).unwrap();
        assert_eq!(paths.distance(&3), Some(1.0));
        assert_eq!(paths.path(&3), &[1, 2, 3]);
    }

    #[test]
    fn test_ties_resolve_in_insertion_order() {
        let mut graph = Graph::new();
        graph.add("S").add("P").add("Q").add("R");
        graph
            .connect(&"S", &"P", Weight::Value(1.0))
            .connect(&"S", &"R", Weight::Value(1.0))
            .connect(&"P", &"Q", Weight::Value(1.0))
            .connect(&"R", &"Q", Weight::Value(1.0));

        assert_eq!(graph.path(&"S", &"Q").unwrap(), vec!["S", "P", "Q"]);
        assert_eq!(graph.dijkstra(&"S").unwrap().distance(&"Q"), Some(2.0));
    }

    #[test]
    fn test_distances_in_vertex_order() {
        let paths = sample().dijkstra(&"B").unwrap();
        let keys: Vec<_> = paths.distances().keys().copied().collect();
        assert_eq!(keys, vec!["A", "B", "C"]);
    }
}
