//! Markdown export implementation.
//!
//! Exports graph analysis reports in Markdown format for documentation and reporting.

use super::{AnalysisReport, Exporter};
use std::io::{self, Write};

/// Markdown exporter implementation.
pub struct MarkdownExporter;

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

impl Exporter for MarkdownExporter {
    fn export<W: Write>(&self, report: &AnalysisReport, writer: &mut W) -> io::Result<()> {
        // Title
        writeln!(writer, "# Graph Analysis Report")?;
        writeln!(writer)?;
        writeln!(writer, "**Version:** {}", report.version)?;
        writeln!(writer)?;

        // Summary section
        writeln!(writer, "## Summary")?;
        writeln!(writer)?;
        writeln!(writer, "| Metric | Value |")?;
        writeln!(writer, "|--------|-------|")?;
        writeln!(writer, "| Vertices | {} |", report.vertex_count())?;
        writeln!(writer, "| Edges | {} |", report.edge_count)?;
        writeln!(writer, "| Directed | {} |", yes_no(report.directed))?;
        writeln!(writer, "| Connected | {} |", yes_no(report.connected))?;
        writeln!(writer, "| Components | {} |", report.component_count())?;
        writeln!(
            writer,
            "| Largest Component | {} |",
            report.largest_component()
        )?;
        writeln!(
            writer,
            "| {} | {} |",
            report.cut_vertex_label(),
            report.cut_vertices.len()
        )?;
        writeln!(writer)?;

        // Components
        if !report.components.is_empty() {
            let heading = if report.directed {
                "Strongly Connected Components"
            } else {
                "Connected Components"
            };
            writeln!(writer, "## {} ({})", heading, report.component_count())?;
            writeln!(writer)?;
            writeln!(writer, "| # | Size | Vertices |")?;
            writeln!(writer, "|---|------|----------|")?;
            for (i, component) in report.components.iter().enumerate() {
                writeln!(
                    writer,
                    "| {} | {} | {} |",
                    i + 1,
                    component.len(),
                    component.join(", ")
                )?;
            }
            writeln!(writer)?;
        }

        // Cut vertices
        if !report.cut_vertices.is_empty() {
            writeln!(writer, "## {}", report.cut_vertex_label())?;
            writeln!(writer)?;
            writeln!(
                writer,
                "Removing any of these vertices increases the number of components:"
            )?;
            writeln!(writer)?;
            for vertex in &report.cut_vertices {
                writeln!(writer, "- `{}`", vertex)?;
            }
            writeln!(writer)?;
        }

        // Shortest paths
        if let Some(paths) = &report.shortest_paths {
            writeln!(writer, "## Shortest Paths from `{}`", paths.source)?;
            writeln!(writer)?;
            writeln!(writer, "| Target | Distance | Path |")?;
            writeln!(writer, "|--------|----------|------|")?;
            for entry in &paths.entries {
                match entry.distance {
                    Some(distance) => writeln!(
                        writer,
                        "| {} | {} | {} |",
                        entry.target,
                        distance,
                        entry.path.join(" -> ")
                    )?,
                    None => writeln!(writer, "| {} | unreachable | - |", entry.target)?,
                }
            }
            writeln!(writer)?;
        }

        // Footer
        writeln!(writer, "---")?;
        writeln!(writer, "*Generated by GraphScope*")?;

        Ok(())
    }
}
