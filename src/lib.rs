//! GraphScope - mutable weighted graphs with cached structural analysis
//!
//! This crate provides a graph store that can be edited incrementally while
//! answering structural queries: traversals, (strongly) connected components,
//! cut vertices and strong articulation points, and shortest paths. Derived
//! results are memoized and invalidated by a version counter.

pub mod export;
pub mod graph;
pub mod parser;
