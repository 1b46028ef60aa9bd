//! The mutable graph store.
//!
//! Vertices map to their outgoing neighbors and edge weights. Both levels are
//! insertion-ordered, so enumerations are stable across runs and removing a
//! vertex never reorders the survivors.
//!
//! Every state-changing mutation bumps the graph's version. Derived properties
//! are memoized against that version through [`Graph::cached`], so a query
//! after any mutation always sees the post-change state.

use indexmap::map::Keys;
use indexmap::IndexMap;
use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;
use std::time::Instant;

use super::cache::{CacheKey, VersionedCache};
use super::error::{GraphError, GraphResult};
use super::weight::Weight;

/// Bound shared by every vertex type.
///
/// The graph never looks inside a vertex; it only compares, hashes and clones
/// it. `Debug` is needed to name missing vertices in errors.
pub trait Vertex: Eq + Hash + Clone + fmt::Debug + 'static {}

impl<T> Vertex for T where T: Eq + Hash + Clone + fmt::Debug + 'static {}

/// Outgoing neighbors of a vertex and the weight of each edge.
pub type Neighbors<T> = IndexMap<T, Weight>;

/// A weighted directed graph with versioned, lazily computed analyses.
///
/// An undirected graph is one where every edge has an equal-weight twin in
/// the opposite direction; see [`Graph::is_directed`].
///
/// Mutations referencing an absent vertex are silent no-ops and every
/// mutator returns `&mut Self` for chaining. Use [`Graph::contains`] to tell
/// a no-op from a change.
///
/// The memo table uses interior mutability, so a `Graph` is not `Sync`. An
/// embedding that needs to share one across threads must wrap the whole
/// graph in a single lock.
///
/// # Example
///
/// ```rust
/// use graphscope::graph::{Graph, Weight};
///
/// let mut graph = Graph::new();
/// graph.add("a").add("b").add("c");
/// graph
///     .connect(&"a", &"b", Weight::Unit)
///     .connect(&"b", &"a", Weight::Unit);
///
/// assert_eq!(graph.vertex_count(), 3);
/// assert!(graph.connected(&"a", &"b"));
/// assert!(!graph.is_directed());
/// assert_eq!(graph.connected_components().len(), 2);
/// ```
pub struct Graph<T> {
    adjacency: IndexMap<T, Neighbors<T>>,
    version: u64,
    cache: RefCell<VersionedCache<CacheKey>>,
}

impl<T: Vertex> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Vertex> Graph<T> {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: IndexMap::new(),
            version: 0,
            cache: RefCell::new(VersionedCache::new()),
        }
    }

    /// Creates a graph from an adjacency description.
    ///
    /// Neighbors that are not themselves keys are added as vertices, after
    /// all keys. The new graph starts at version 0.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphscope::graph::{Graph, Weight};
    /// use indexmap::IndexMap;
    ///
    /// let mut adjacency = IndexMap::new();
    /// adjacency.insert("a", IndexMap::from([("b", Weight::Value(2.0))]));
    ///
    /// let graph = Graph::from_adjacency(adjacency);
    /// assert_eq!(graph.vertices().as_ref(), &["a", "b"]);
    /// assert_eq!(graph.weight(&"a", &"b").unwrap(), Some(Weight::Value(2.0)));
    /// assert_eq!(graph.version(), 0);
    /// ```
    pub fn from_adjacency(adjacency: IndexMap<T, Neighbors<T>>) -> Self {
        let mut graph = Self::new();
        for vertex in adjacency.keys() {
            graph.add(vertex.clone());
        }
        for (source, neighbors) in adjacency {
            for (target, weight) in neighbors {
                graph.add(target.clone());
                graph.connect(&source, &target, weight);
            }
        }
        graph.version = 0;
        graph
    }

    /// Creates a graph from a list of edges, adding endpoints as needed.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (T, T, Weight)>,
    {
        let mut graph = Self::new();
        for (source, target, weight) in edges {
            graph.add(source.clone());
            graph.add(target.clone());
            graph.connect(&source, &target, weight);
        }
        graph.version = 0;
        graph
    }

    /// Returns the current version. It grows by one on every state change.
    pub fn version(&self) -> u64 {
        self.version
    }

    fn change(&mut self) {
        self.version += 1;
        log::trace!("graph changed: version = {}", self.version);
    }

    /// Returns the value memoized under `key` for the current version,
    /// running `compute` on a miss.
    ///
    /// `compute` may itself query other cached properties of this graph.
    pub(crate) fn cached<V, F>(&self, key: CacheKey, compute: F) -> V
    where
        V: Clone + 'static,
        F: FnOnce() -> V,
    {
        let hit = self.cache.borrow().get::<V>(&key, self.version);
        if let Some(value) = hit {
            return value;
        }

        let started = Instant::now();
        let value = compute();
        log::debug!(
            "computed '{}' at version {} in {:?}",
            key,
            self.version,
            started.elapsed()
        );

        self.cache
            .borrow_mut()
            .insert(key, value.clone(), self.version);
        value
    }

    // Vertex operations

    /// Checks if a vertex exists in the graph.
    pub fn contains(&self, vertex: &T) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Adds a vertex with no neighbors. Does nothing if it already exists.
    pub fn add(&mut self, vertex: T) -> &mut Self {
        if !self.contains(&vertex) {
            self.adjacency.insert(vertex, IndexMap::new());
            self.change();
        }
        self
    }

    /// Removes a vertex and every edge that starts or ends at it.
    ///
    /// Does nothing if the vertex is absent.
    pub fn remove(&mut self, vertex: &T) -> &mut Self {
        if self.adjacency.shift_remove(vertex).is_some() {
            for neighbors in self.adjacency.values_mut() {
                neighbors.shift_remove(vertex);
            }
            self.change();
        }
        self
    }

    /// Returns every vertex in order of first insertion.
    pub fn vertices(&self) -> Rc<[T]> {
        self.cached(CacheKey::Vertices, || {
            self.adjacency.keys().cloned().collect::<Rc<[T]>>()
        })
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(IndexMap::len).sum()
    }

    /// Checks if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns the outgoing neighbors of a vertex.
    ///
    /// # Errors
    ///
    /// [`GraphError::VertexNotFound`] if the vertex is absent.
    pub fn adjacent(&self, vertex: &T) -> GraphResult<Keys<'_, T, Weight>> {
        self.adjacency
            .get(vertex)
            .map(IndexMap::keys)
            .ok_or_else(|| GraphError::vertex_not_found(vertex))
    }

    /// Returns the incoming neighbors of a vertex, read from the reverse graph.
    ///
    /// # Errors
    ///
    /// [`GraphError::VertexNotFound`] if the vertex is absent.
    pub fn predecessors(&self, vertex: &T) -> GraphResult<Vec<T>> {
        let reverse = self.reverse_graph();
        let predecessors = reverse.adjacent(vertex)?.cloned().collect();
        Ok(predecessors)
    }

    pub(crate) fn neighbors(&self, vertex: &T) -> Option<&Neighbors<T>> {
        self.adjacency.get(vertex)
    }

    // Edge operations

    /// Checks if there is an edge from `source` to `target`.
    ///
    /// Returns false when either vertex is absent.
    pub fn connected(&self, source: &T, target: &T) -> bool {
        self.adjacency
            .get(source)
            .is_some_and(|neighbors| neighbors.contains_key(target))
    }

    /// Returns the weight of the edge from `source` to `target`, or `None`
    /// when the vertices exist but are not connected.
    ///
    /// # Errors
    ///
    /// [`GraphError::VertexNotFound`] if either vertex is absent.
    pub fn weight(&self, source: &T, target: &T) -> GraphResult<Option<Weight>> {
        if !self.contains(target) {
            return Err(GraphError::vertex_not_found(target));
        }
        let neighbors = self
            .adjacency
            .get(source)
            .ok_or_else(|| GraphError::vertex_not_found(source))?;
        Ok(neighbors.get(target).copied())
    }

    /// Sets the weight of the edge from `source` to `target`, creating it if
    /// needed.
    ///
    /// Does nothing if either vertex is absent, or if the edge already has
    /// exactly this weight.
    pub fn connect(&mut self, source: &T, target: &T, weight: Weight) -> &mut Self {
        if !self.contains(target) {
            return self;
        }
        let Some(neighbors) = self.adjacency.get_mut(source) else {
            return self;
        };
        if neighbors.get(target) == Some(&weight) {
            return self;
        }
        neighbors.insert(target.clone(), weight);
        self.change();
        self
    }

    /// Removes the edge from `source` to `target`.
    ///
    /// Does nothing if either vertex or the edge is absent.
    pub fn disconnect(&mut self, source: &T, target: &T) -> &mut Self {
        let removed = self
            .adjacency
            .get_mut(source)
            .and_then(|neighbors| neighbors.shift_remove(target))
            .is_some();
        if removed {
            self.change();
        }
        self
    }

    /// Iterates over every edge as `(source, target, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (&T, &T, Weight)> + '_ {
        self.adjacency.iter().flat_map(|(source, neighbors)| {
            neighbors
                .iter()
                .map(move |(target, weight)| (source, target, *weight))
        })
    }

    // Whole-graph operations

    /// Returns an independent duplicate of this graph at version 0.
    pub fn copy(&self) -> Self {
        Self {
            adjacency: self.adjacency.clone(),
            version: 0,
            cache: RefCell::new(VersionedCache::new()),
        }
    }

    /// Returns the subgraph induced by `vertices`.
    ///
    /// Only edges with both endpoints in the subset are kept. Vertices that
    /// are not in this graph are ignored, and the result keeps this graph's
    /// vertex order.
    pub fn subgraph(&self, vertices: &[T]) -> Self {
        let keep: HashSet<&T> = vertices.iter().collect();
        let adjacency = self
            .adjacency
            .iter()
            .filter(|(vertex, _)| keep.contains(vertex))
            .map(|(vertex, neighbors)| {
                let neighbors = neighbors
                    .iter()
                    .filter(|(target, _)| keep.contains(target))
                    .map(|(target, weight)| (target.clone(), *weight))
                    .collect();
                (vertex.clone(), neighbors)
            })
            .collect();

        Self {
            adjacency,
            version: 0,
            cache: RefCell::new(VersionedCache::new()),
        }
    }

    /// Returns the graph with every edge `(u, v, w)` turned into `(v, u, w)`.
    pub fn reverse_graph(&self) -> Rc<Self> {
        self.cached(CacheKey::ReverseGraph, || {
            let mut adjacency: IndexMap<T, Neighbors<T>> = self
                .adjacency
                .keys()
                .map(|vertex| (vertex.clone(), IndexMap::new()))
                .collect();

            for (source, neighbors) in &self.adjacency {
                for (target, weight) in neighbors {
                    if let Some(reversed) = adjacency.get_mut(target) {
                        reversed.insert(source.clone(), *weight);
                    }
                }
            }

            Rc::new(Self {
                adjacency,
                version: 0,
                cache: RefCell::new(VersionedCache::new()),
            })
        })
    }

    /// Checks if any edge lacks a twin of equal cost in the opposite
    /// direction.
    ///
    /// Twins are compared by [`Weight::cost`], so `Unit` matches
    /// `Value(1.0)`. A missing twin always counts as different, even against
    /// a zero weight.
    pub fn is_directed(&self) -> bool {
        self.cached(CacheKey::IsDirected, || {
            self.edges().any(|(source, target, weight)| {
                let twin = self
                    .adjacency
                    .get(target)
                    .and_then(|neighbors| neighbors.get(source));
                twin.map(Weight::cost) != Some(weight.cost())
            })
        })
    }
}

impl<T: Vertex> Clone for Graph<T> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<T: fmt::Debug> fmt::Debug for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("adjacency", &self.adjacency)
            .field("version", &self.version)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.adjacency.keys().map(ToString::to_string).collect();
        writeln!(f, "Vertices: {}", names.join(", "))?;
        writeln!(f)?;
        for (source, neighbors) in &self.adjacency {
            for (target, weight) in neighbors {
                writeln!(f, "{} --- {} --> {}", source, weight, target)?;
            }
        }
        Ok(())
    }
}
