//! Connected and strongly connected components.
//!
//! For undirected graphs a component is everything reachable from a vertex.
//! For directed graphs it is the strongly connected component: the vertices
//! reachable both forward and backward from it.
//!
//! Each component costs two full walks, so partitioning the whole graph is
//! O(V * (V + E)) in the worst case. That is fine for interactive-sized
//! graphs; use [`Graph::to_petgraph`] and a linear SCC algorithm for large ones.

use indexmap::IndexSet;
use std::collections::HashSet;
use std::rc::Rc;

use super::cache::CacheKey;
use super::error::{GraphError, GraphResult};
use super::store::{Graph, Vertex};
use super::traversal::Order;

impl<T: Vertex> Graph<T> {
    /// Returns the (strongly) connected component containing `start`, in
    /// depth-first visit order from `start`.
    ///
    /// # Errors
    ///
    /// [`GraphError::VertexNotFound`] if `start` is absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphscope::graph::{Graph, Weight};
    ///
    /// let graph = Graph::from_edges([
    ///     ("a", "b", Weight::Unit),
    ///     ("b", "a", Weight::Unit),
    ///     ("b", "c", Weight::Unit),
    /// ]);
    ///
    /// // c is reachable from a, but a is not reachable from c
    /// assert_eq!(graph.connected_component(&"a").unwrap(), vec!["a", "b"]);
    /// assert_eq!(graph.connected_component(&"c").unwrap(), vec!["c"]);
    /// ```
    pub fn connected_component(&self, start: &T) -> GraphResult<Vec<T>> {
        if !self.contains(start) {
            return Err(GraphError::vertex_not_found(start));
        }
        Ok(self.component_in_order(start, Order::Depth))
    }

    /// Component of a present vertex, walked in the given order.
    pub(crate) fn component_in_order(&self, start: &T, order: Order) -> Vec<T> {
        let forward = self.reach(start, order);
        if !self.is_directed() {
            return forward;
        }

        let backward: HashSet<T> = self
            .reverse_graph()
            .reach(start, order)
            .into_iter()
            .collect();
        forward
            .into_iter()
            .filter(|vertex| backward.contains(vertex))
            .collect()
    }

    /// Partitions the graph into its components.
    ///
    /// Strongly connected components for directed graphs, connected
    /// components otherwise. Components are discovered starting from the
    /// earliest-inserted vertex not yet covered, and each lists its vertices
    /// in depth-first order from that vertex.
    pub fn connected_components(&self) -> Rc<Vec<Vec<T>>> {
        self.cached(CacheKey::ConnectedComponents, || {
            let mut components = Vec::new();
            let mut remaining: IndexSet<T> = self.vertices().iter().cloned().collect();

            while let Some(start) = remaining.first().cloned() {
                let component = self.component_in_order(&start, Order::Depth);
                for vertex in &component {
                    remaining.shift_remove(vertex);
                }
                components.push(component);
            }

            Rc::new(components)
        })
    }

    /// Checks if the component of the first vertex covers the whole graph.
    ///
    /// For directed graphs this means strongly connected. An empty graph is
    /// considered connected.
    pub fn is_connected(&self) -> bool {
        self.cached(CacheKey::IsConnected, || {
            let vertices = self.vertices();
            match vertices.first() {
                Some(first) => {
                    self.component_in_order(first, Order::Depth).len() == vertices.len()
                }
                None => true,
            }
        })
    }
}
