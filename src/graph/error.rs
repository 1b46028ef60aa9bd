//! Errors raised by graph queries.

/// Errors that can occur when querying a [`Graph`](super::Graph).
///
/// Mutations never fail: referencing an absent vertex leaves the graph
/// unchanged. Only queries that need the vertex to exist report an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The vertex is not part of the graph.
    #[error("Vertex not found: {0}")]
    VertexNotFound(String),
}

impl GraphError {
    /// Builds a [`GraphError::VertexNotFound`] from any printable vertex.
    pub fn vertex_not_found<T: std::fmt::Debug>(vertex: &T) -> Self {
        Self::VertexNotFound(format!("{:?}", vertex))
    }
}

/// Result type alias for graph queries.
pub type GraphResult<T> = Result<T, GraphError>;
