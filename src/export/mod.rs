//! Export functionality for graph analysis reports.
//!
//! This module provides exporters for outputting the structural analysis of
//! a graph in various formats: JSON and Markdown.

pub mod json;
pub mod markdown;

use crate::graph::{Graph, GraphResult, Vertex};
use std::fmt::Display;
use std::io::{self, Write};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// JSON format - machine-readable, full data
    #[default]
    Json,
    /// Markdown format - documentation/reporting
    Markdown,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Shortest path from the report's source to one vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct PathEntry {
    /// Target vertex
    pub target: String,
    /// Total cost, `None` when unreachable
    pub distance: Option<f64>,
    /// Vertices from source to target, empty when unreachable
    pub path: Vec<String>,
}

/// Single-source shortest paths included in a report.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSummary {
    /// Source vertex
    pub source: String,
    /// One entry per vertex, in vertex order
    pub entries: Vec<PathEntry>,
}

/// Snapshot of a graph's structural analysis.
///
/// Vertices are rendered with their `Display` form.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    /// Graph version the report was taken at
    pub version: u64,
    /// All vertices in insertion order
    pub vertices: Vec<String>,
    /// Number of directed edges
    pub edge_count: usize,
    /// Whether any edge lacks an equal-weight twin
    pub directed: bool,
    /// Whether the graph is (strongly) connected
    pub connected: bool,
    /// (Strongly) connected components
    pub components: Vec<Vec<String>>,
    /// Cut vertices, or strong articulation points for directed graphs
    pub cut_vertices: Vec<String>,
    /// Shortest paths, if requested
    pub shortest_paths: Option<PathSummary>,
}

fn names<'a, T: Display + 'a>(vertices: impl IntoIterator<Item = &'a T>) -> Vec<String> {
    vertices.into_iter().map(ToString::to_string).collect()
}

impl AnalysisReport {
    /// Runs every analysis on the graph and captures the results.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphscope::export::AnalysisReport;
    /// use graphscope::graph::{Graph, Weight};
    ///
    /// let graph = Graph::from_edges([("a", "b", Weight::Unit), ("b", "a", Weight::Unit)]);
    /// let report = AnalysisReport::new(&graph);
    ///
    /// assert!(!report.directed);
    /// assert_eq!(report.component_count(), 1);
    /// ```
    pub fn new<T: Vertex + Display>(graph: &Graph<T>) -> Self {
        Self {
            version: graph.version(),
            vertices: names(graph.vertices().iter()),
            edge_count: graph.edge_count(),
            directed: graph.is_directed(),
            connected: graph.is_connected(),
            components: graph
                .connected_components()
                .iter()
                .map(|component| names(component))
                .collect(),
            cut_vertices: names(graph.cut_vertices().iter()),
            shortest_paths: None,
        }
    }

    /// Adds shortest paths from `source` to every vertex.
    ///
    /// # Errors
    ///
    /// Fails if `source` is not in the graph.
    pub fn with_paths_from<T: Vertex + Display>(
        mut self,
        graph: &Graph<T>,
        source: &T,
    ) -> GraphResult<Self> {
        let paths = graph.dijkstra(source)?;
        let entries = graph
            .vertices()
            .iter()
            .map(|target| PathEntry {
                target: target.to_string(),
                distance: paths
                    .distance(target)
                    .filter(|distance| distance.is_finite()),
                path: names(paths.path(target)),
            })
            .collect();

        self.shortest_paths = Some(PathSummary {
            source: source.to_string(),
            entries,
        });
        Ok(self)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of (strongly) connected components.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Size of the largest component.
    pub fn largest_component(&self) -> usize {
        self.components.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Name of the cut-vertex notion that applies to this graph.
    pub fn cut_vertex_label(&self) -> &'static str {
        if self.directed {
            "Strong articulation points"
        } else {
            "Cut vertices"
        }
    }
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the report to the given writer.
    fn export<W: Write>(&self, report: &AnalysisReport, writer: &mut W) -> io::Result<()>;
}

/// Export a report in the specified format.
pub fn export<W: Write>(
    format: ExportFormat,
    report: &AnalysisReport,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ExportFormat::Json => json::JsonExporter.export(report, writer),
        ExportFormat::Markdown => markdown::MarkdownExporter.export(report, writer),
    }
}

/// Export a report to a string.
pub fn export_to_string(format: ExportFormat, report: &AnalysisReport) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, report, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
