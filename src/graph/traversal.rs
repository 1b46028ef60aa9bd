//! Breadth- and depth-first walks.
//!
//! A single walk primitive is parameterized by which edges it follows
//! ([`Direction`]) and how it drains its frontier ([`Order`]).

use indexmap::IndexSet;
use std::collections::{HashSet, VecDeque};
use std::fmt;

use super::error::{GraphError, GraphResult};
use super::store::{Graph, Vertex};

/// Which edges a walk follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Follow outgoing edges
    #[default]
    Forward,
    /// Follow incoming edges (outgoing edges of the reverse graph)
    Backward,
}

/// How a walk picks the next vertex from its frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
    /// Stack discipline: most recently discovered first
    #[default]
    Depth,
    /// Queue discipline: earliest discovered first
    Width,
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "forward" | "fwd" => Ok(Direction::Forward),
            "backward" | "back" => Ok(Direction::Backward),
            _ => Err(format!(
                "Unknown direction: '{}'. Valid directions: forward, backward",
                s
            )),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Backward => write!(f, "backward"),
        }
    }
}

impl std::str::FromStr for Order {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "depth" | "dfs" => Ok(Order::Depth),
            "width" | "breadth" | "bfs" => Ok(Order::Width),
            _ => Err(format!("Unknown order: '{}'. Valid orders: depth, width", s)),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Depth => write!(f, "depth"),
            Order::Width => write!(f, "width"),
        }
    }
}

/// Pending vertices of a walk, drained as a stack or a queue.
struct Frontier<T> {
    order: Order,
    pending: VecDeque<T>,
}

impl<T> Frontier<T> {
    fn new(order: Order, start: T) -> Self {
        Self {
            order,
            pending: VecDeque::from([start]),
        }
    }

    fn pop(&mut self) -> Option<T> {
        match self.order {
            Order::Depth => self.pending.pop_back(),
            Order::Width => self.pending.pop_front(),
        }
    }

    fn push(&mut self, vertex: T) {
        self.pending.push_back(vertex);
    }
}

impl<T: Vertex> Graph<T> {
    /// Walks from `start` and returns the vertices in visit order.
    ///
    /// Only vertices reachable from `start` along `direction` are visited.
    ///
    /// # Errors
    ///
    /// [`GraphError::VertexNotFound`] if `start` is absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphscope::graph::{Direction, Graph, Order, Weight};
    ///
    /// let graph = Graph::from_edges([
    ///     ("a", "b", Weight::Unit),
    ///     ("a", "c", Weight::Unit),
    ///     ("b", "d", Weight::Unit),
    /// ]);
    ///
    /// let bfs = graph.traverse(&"a", Direction::Forward, Order::Width).unwrap();
    /// assert_eq!(bfs, vec!["a", "b", "c", "d"]);
    ///
    /// let back = graph.traverse(&"d", Direction::Backward, Order::Depth).unwrap();
    /// assert_eq!(back, vec!["d", "b", "a"]);
    /// ```
    pub fn traverse(&self, start: &T, direction: Direction, order: Order) -> GraphResult<Vec<T>> {
        if !self.contains(start) {
            return Err(GraphError::vertex_not_found(start));
        }
        let visited = match direction {
            Direction::Forward => self.reach(start, order),
            Direction::Backward => self.reverse_graph().reach(start, order),
        };
        Ok(visited)
    }

    /// Forward walk over this graph's own edges. `start` must be present.
    pub(crate) fn reach(&self, start: &T, order: Order) -> Vec<T> {
        let mut visited = Vec::new();
        // Visited or waiting in the frontier
        let mut seen: HashSet<T> = HashSet::from([start.clone()]);
        let mut frontier = Frontier::new(order, start.clone());

        while let Some(vertex) = frontier.pop() {
            if let Some(neighbors) = self.neighbors(&vertex) {
                for next in neighbors.keys() {
                    if seen.insert(next.clone()) {
                        frontier.push(next.clone());
                    }
                }
            }
            visited.push(vertex);
        }

        visited
    }

    /// Visits every vertex, one component at a time.
    ///
    /// The first pass starts at `start`; each later pass starts at the
    /// earliest-inserted vertex not yet covered. Components are the
    /// (strongly) connected components of [`Graph::connected_component`].
    /// Should a vertex reappear in a later pass, its later position wins.
    ///
    /// # Errors
    ///
    /// [`GraphError::VertexNotFound`] if `start` is absent.
    pub fn travel_full_graph(&self, start: &T, order: Order) -> GraphResult<Vec<T>> {
        if !self.contains(start) {
            return Err(GraphError::vertex_not_found(start));
        }

        let mut visited: Vec<T> = Vec::with_capacity(self.vertex_count());
        let mut remaining: IndexSet<T> = self.vertices().iter().cloned().collect();
        let mut start = start.clone();

        loop {
            let component = self.component_in_order(&start, order);
            {
                let members: HashSet<&T> = component.iter().collect();
                visited.retain(|vertex| !members.contains(vertex));
            }
            for vertex in &component {
                remaining.shift_remove(vertex);
            }
            visited.extend(component);

            match remaining.first() {
                Some(next) => start = next.clone(),
                None => break,
            }
        }

        Ok(visited)
    }
}
