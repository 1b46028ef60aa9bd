//! Parser module for graph descriptions.
//!
//! Graphs are described as JSON adjacency objects; see [`types`] for the
//! format.
//!
//! # Example
//!
//! ```
//! use graphscope::parser::{build_graph, parse_str};
//!
//! let description = parse_str(r#"{
//!     "Arya": {"Sansa": 1},
//!     "Sansa": {"Arya": 1, "Jon": 3},
//!     "Jon": {"Sansa": 3}
//! }"#).unwrap();
//!
//! let graph = build_graph(description).unwrap();
//! assert!(!graph.is_directed());
//! assert!(graph.cut_vertices().contains(&"Sansa".to_string()));
//! ```

pub mod adjacency;
pub mod types;

// Re-export commonly used types for convenience
pub use adjacency::{
    build_graph, load_graph, parse_file, parse_str, validate, ParseError, ParseResult,
};

pub use types::GraphDescription;
