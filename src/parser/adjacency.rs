//! Loader for JSON adjacency descriptions.
//!
//! This module reads a [`GraphDescription`] from disk or a string, checks it
//! for edges into undeclared vertices, and builds a [`Graph`] from it.

use std::fs;
use std::path::Path;

use super::types::GraphDescription;
use crate::graph::Graph;

/// Errors that can occur while loading a graph description.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to read the file from disk.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse JSON content.
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The description is well-formed JSON but not a usable graph.
    #[error("Invalid graph: {0}")]
    InvalidGraph(String),
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a graph description from a file path.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use graphscope::parser::parse_file;
///
/// let description = parse_file(Path::new("houses.json")).unwrap();
/// println!("{} vertices", description.vertex_count());
/// ```
pub fn parse_file(path: &Path) -> ParseResult<GraphDescription> {
    let content = fs::read_to_string(path)?;
    parse_str(&content)
}

/// Parses a graph description from a string.
///
/// # Example
///
/// ```
/// use graphscope::parser::parse_str;
///
/// let description = parse_str(r#"{"a": {"b": 1}, "b": {}}"#).unwrap();
/// assert_eq!(description.vertex_count(), 2);
/// assert_eq!(description.edge_count(), 1);
/// ```
pub fn parse_str(content: &str) -> ParseResult<GraphDescription> {
    let description: GraphDescription = serde_json::from_str(content)?;
    Ok(description)
}

/// Validates a parsed description.
///
/// Every edge target must also be declared as a vertex.
pub fn validate(description: &GraphDescription) -> ParseResult<()> {
    let undeclared = description.undeclared_targets();
    if let Some((source, target)) = undeclared.first() {
        return Err(ParseError::InvalidGraph(format!(
            "edge {} -> {} points to an undeclared vertex ({} such edges)",
            source,
            target,
            undeclared.len()
        )));
    }
    Ok(())
}

/// Validates a description and builds the graph it describes.
pub fn build_graph(description: GraphDescription) -> ParseResult<Graph<String>> {
    validate(&description)?;
    let graph = description.into_graph();
    log::debug!(
        "built graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Reads, validates and builds a graph from a JSON file.
pub fn load_graph(path: &Path) -> ParseResult<Graph<String>> {
    log::info!("loading graph from {}", path.display());
    build_graph(parse_file(path)?)
}
