//! Cut vertices and strong articulation points.
//!
//! Undirected graphs use the low-link depth-first search: a non-root vertex
//! `v` is a cut vertex when some DFS child cannot reach above `v` without
//! passing through it, and a DFS root is one when it has two or more DFS
//! children.
//!
//! Directed graphs use dominators, after Italiano, Laura and Santaroni,
//! "Finding strong bridges and strong articulation points in linear time"
//! (Theoretical Computer Science 447, 2012): the strong articulation points
//! are the non-trivial dominators of the graph united with those of its
//! reverse. Dominator sets come from an iterative fixpoint per strongly
//! connected component, which is quadratic in the component size rather than
//! the linear construction of the paper.

use indexmap::IndexSet;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use super::cache::CacheKey;
use super::store::{Graph, Vertex};

/// A vertex on the explicit DFS stack of the low-link search.
struct Frame<T> {
    vertex: T,
    parent: Option<T>,
    neighbors: Vec<T>,
    next: usize,
    children: usize,
}

impl<T: Vertex> Graph<T> {
    /// Returns the vertices whose removal splits a component.
    ///
    /// For undirected graphs these are the articulation points. For directed
    /// graphs they are the strong articulation points: removing one increases
    /// the number of strongly connected components. The result follows vertex
    /// insertion order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphscope::graph::{Graph, Weight};
    ///
    /// // Undirected path a - b - c
    /// let mut graph = Graph::new();
    /// graph.add("a").add("b").add("c");
    /// for (u, v) in [("a", "b"), ("b", "c")] {
    ///     graph
    ///         .connect(&u, &v, Weight::Unit)
    ///         .connect(&v, &u, Weight::Unit);
    /// }
    ///
    /// let cut = graph.cut_vertices();
    /// assert_eq!(cut.len(), 1);
    /// assert!(cut.contains(&"b"));
    /// ```
    pub fn cut_vertices(&self) -> Rc<IndexSet<T>> {
        self.cached(CacheKey::CutVertices, || {
            let points = if self.is_directed() {
                self.strong_articulation_points()
            } else {
                self.articulation_points()
            };
            Rc::new(points)
        })
    }

    fn frame(&self, vertex: T, parent: Option<T>) -> Frame<T> {
        let neighbors = self
            .neighbors(&vertex)
            .map(|neighbors| neighbors.keys().cloned().collect())
            .unwrap_or_default();
        Frame {
            vertex,
            parent,
            neighbors,
            next: 0,
            children: 0,
        }
    }

    fn articulation_points(&self) -> IndexSet<T> {
        let vertices = self.vertices();
        // 1-based discovery index and lowest index reachable, per vertex
        let mut discovery: HashMap<T, usize> = HashMap::with_capacity(vertices.len());
        let mut low: HashMap<T, usize> = HashMap::with_capacity(vertices.len());
        let mut cut: HashSet<T> = HashSet::new();

        for root in vertices.iter() {
            if discovery.contains_key(root) {
                continue;
            }
            let index = discovery.len() + 1;
            discovery.insert(root.clone(), index);
            low.insert(root.clone(), index);
            let mut stack = vec![self.frame(root.clone(), None)];

            while let Some(frame) = stack.last_mut() {
                if let Some(child) = frame.neighbors.get(frame.next).cloned() {
                    frame.next += 1;

                    if !discovery.contains_key(&child) {
                        frame.children += 1;
                        let index = discovery.len() + 1;
                        discovery.insert(child.clone(), index);
                        low.insert(child.clone(), index);
                        let parent = frame.vertex.clone();
                        stack.push(self.frame(child, Some(parent)));
                    } else if frame.parent.as_ref() != Some(&child) {
                        // Back edge
                        let reached = discovery[&child];
                        if let Some(value) = low.get_mut(&frame.vertex) {
                            *value = (*value).min(reached);
                        }
                    }
                    continue;
                }

                let Some(done) = stack.pop() else { break };
                let done_low = low[&done.vertex];

                match (done.parent.as_ref(), stack.last()) {
                    (Some(parent), Some(parent_frame)) => {
                        if let Some(value) = low.get_mut(parent) {
                            *value = (*value).min(done_low);
                        }
                        if parent_frame.parent.is_some() && discovery[parent] <= done_low {
                            cut.insert(parent.clone());
                        }
                    }
                    _ => {
                        if done.children >= 2 {
                            cut.insert(done.vertex);
                        }
                    }
                }
            }
        }

        log::debug!("found {} articulation points", cut.len());
        self.in_vertex_order(&cut)
    }

    fn strong_articulation_points(&self) -> IndexSet<T> {
        let mut points: HashSet<T> = self.dominators().into_iter().collect();
        points.extend(self.reverse_graph().dominators());

        log::debug!("found {} strong articulation points", points.len());
        self.in_vertex_order(&points)
    }

    fn in_vertex_order(&self, set: &HashSet<T>) -> IndexSet<T> {
        self.vertices()
            .iter()
            .filter(|vertex| set.contains(*vertex))
            .cloned()
            .collect()
    }

    /// Returns the non-trivial dominators of every strongly connected
    /// component with more than two vertices.
    ///
    /// Within a component, dominators are taken relative to the component's
    /// first vertex in depth-first order. That start vertex counts as a
    /// dominator when deleting it splits the rest of the component.
    pub fn dominators(&self) -> IndexSet<T> {
        let mut dominators = HashSet::new();
        for component in self.connected_components().iter() {
            if component.len() > 2 {
                dominators.extend(self.component_dominators(component));
            }
        }
        self.in_vertex_order(&dominators)
    }

    fn component_dominators(&self, component: &[T]) -> HashSet<T> {
        let Some(start) = component.first() else {
            return HashSet::new();
        };

        let mut dominators = HashSet::new();
        for (vertex, mut dominated_by) in self.dominator_sets(component) {
            dominated_by.remove(start);
            dominated_by.remove(&vertex);
            dominators.extend(dominated_by);
        }

        // The start vertex dominates everything trivially, so check it by
        // deleting it and counting what is left.
        let mut rest = self.subgraph(component);
        rest.remove(start);
        if rest.connected_components().len() > 1 {
            dominators.insert(start.clone());
        }

        dominators
    }

    /// Dominator set of every vertex of a component, relative to its first
    /// vertex, computed as a fixpoint over in-component predecessors.
    fn dominator_sets(&self, component: &[T]) -> HashMap<T, HashSet<T>> {
        let Some((start, others)) = component.split_first() else {
            return HashMap::new();
        };
        let members: HashSet<T> = component.iter().cloned().collect();
        let reverse = self.reverse_graph();

        let mut dom: HashMap<T, HashSet<T>> = others
            .iter()
            .map(|vertex| (vertex.clone(), members.clone()))
            .collect();
        dom.insert(start.clone(), HashSet::from([start.clone()]));

        let mut changed = true;
        let mut passes = 0;
        while changed {
            changed = false;
            passes += 1;

            for vertex in others {
                let mut candidate = dom[vertex].clone();
                if let Some(predecessors) = reverse.neighbors(vertex) {
                    for predecessor in predecessors.keys().filter(|p| members.contains(*p)) {
                        let bound = &dom[predecessor];
                        candidate.retain(|d| bound.contains(d));
                    }
                }
                candidate.insert(vertex.clone());

                if candidate != dom[vertex] {
                    dom.insert(vertex.clone(), candidate);
                    changed = true;
                }
            }
        }

        log::trace!(
            "dominator fixpoint for {} vertices reached after {} passes",
            component.len(),
            passes
        );
        dom
    }
}
