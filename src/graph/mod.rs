//! Graph module: the mutable graph store and its structural analyses.
//!
//! This module provides the [`Graph`] struct, a weighted directed graph that
//! supports incremental edits and computes derived properties on demand:
//! reachability, (strongly) connected components, cut vertices and strong
//! articulation points, and single-source shortest paths. Derived results
//! are memoized against a version counter that every mutation bumps.
//!
//! # Example
//!
//! ```rust
//! use graphscope::graph::{Graph, Weight};
//!
//! let mut graph = Graph::new();
//! graph.add("a").add("b").add("c");
//! for (u, v) in [("a", "b"), ("b", "c")] {
//!     graph
//!         .connect(&u, &v, Weight::Unit)
//!         .connect(&v, &u, Weight::Unit);
//! }
//!
//! assert!(graph.is_connected());
//! assert!(graph.cut_vertices().contains(&"b"));
//!
//! graph
//!     .connect(&"a", &"c", Weight::Unit)
//!     .connect(&"c", &"a", Weight::Unit);
//! assert!(graph.cut_vertices().is_empty());
//! ```

mod cache;
mod components;
mod cut_vertices;
mod error;
mod interop;
mod shortest_path;
mod store;
mod traversal;
mod weight;

pub use cache::{CacheKey, VersionedCache};
pub use error::{GraphError, GraphResult};
pub use interop::PetgraphView;
pub use shortest_path::ShortestPaths;
pub use store::{Graph, Neighbors, Vertex};
pub use traversal::{Direction, Order};
pub use weight::Weight;
