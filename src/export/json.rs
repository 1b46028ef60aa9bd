//! JSON export implementation.
//!
//! Exports graph analysis reports in JSON format for machine-readable output.

use super::{AnalysisReport, Exporter};
use serde::Serialize;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Summary statistics for JSON output.
#[derive(Serialize)]
struct JsonSummary {
    version: u64,
    vertices: usize,
    edges: usize,
    directed: bool,
    connected: bool,
    components: usize,
    largest_component: usize,
    cut_vertices: usize,
}

/// Serializable shortest path for JSON output.
#[derive(Serialize)]
struct JsonPath<'a> {
    target: &'a str,
    distance: Option<f64>,
    path: &'a [String],
}

/// Serializable single-source result for JSON output.
#[derive(Serialize)]
struct JsonShortestPaths<'a> {
    source: &'a str,
    paths: Vec<JsonPath<'a>>,
}

/// Root JSON export structure.
#[derive(Serialize)]
struct JsonExport<'a> {
    summary: JsonSummary,
    vertices: &'a [String],
    components: &'a [Vec<String>],
    cut_vertices: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    shortest_paths: Option<JsonShortestPaths<'a>>,
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, report: &AnalysisReport, writer: &mut W) -> io::Result<()> {
        let shortest_paths = report.shortest_paths.as_ref().map(|summary| JsonShortestPaths {
            source: &summary.source,
            paths: summary
                .entries
                .iter()
                .map(|entry| JsonPath {
                    target: &entry.target,
                    distance: entry.distance,
                    path: &entry.path,
                })
                .collect(),
        });

        let export = JsonExport {
            summary: JsonSummary {
                version: report.version,
                vertices: report.vertex_count(),
                edges: report.edge_count,
                directed: report.directed,
                connected: report.connected,
                components: report.component_count(),
                largest_component: report.largest_component(),
                cut_vertices: report.cut_vertices.len(),
            },
            vertices: &report.vertices,
            components: &report.components,
            cut_vertices: &report.cut_vertices,
            shortest_paths,
        };

        let json = serde_json::to_string_pretty(&export)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}
