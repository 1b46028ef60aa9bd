use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};

use graphscope::export::{self, AnalysisReport, ExportFormat};
use graphscope::graph::{Direction, Graph, Order};
use graphscope::parser::load_graph;

#[derive(Parser)]
#[command(name = "graphscope")]
#[command(author = "Zachary Woods <143150513+zach-fau@users.noreply.github.com>")]
#[command(version)]
#[command(about = "Structural analysis of weighted graphs described in JSON", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args)]
struct GlobalOpts {
    /// Enable debug logging (cache hits, recomputations)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Report components, cut vertices and connectivity of a graph
    Analyze {
        /// JSON adjacency description
        file: PathBuf,

        /// Output format (json, markdown)
        #[arg(short, long, default_value_t = ExportFormat::Json)]
        format: ExportFormat,

        /// Also report shortest paths from this vertex
        #[arg(short, long)]
        source: Option<String>,
    },
    /// Walk the graph from a vertex
    Traverse {
        /// JSON adjacency description
        file: PathBuf,

        /// Vertex to start from
        #[arg(short, long)]
        start: String,

        /// Frontier discipline (depth, width)
        #[arg(short, long, default_value_t = Order::Depth)]
        order: Order,

        /// Edges to follow (forward, backward)
        #[arg(short, long, default_value_t = Direction::Forward)]
        direction: Direction,

        /// Continue from unvisited vertices until the whole graph is covered
        #[arg(long)]
        full: bool,
    },
    /// Find the cheapest path between two vertices
    Path {
        /// JSON adjacency description
        file: PathBuf,

        /// Source vertex
        #[arg(long)]
        from: String,

        /// Target vertex
        #[arg(long)]
        to: String,
    },
    /// Show version information
    Version,
}

fn load(path: &Path) -> anyhow::Result<Graph<String>> {
    load_graph(path).with_context(|| format!("failed to load graph from {}", path.display()))
}

fn analyze(path: &Path, format: ExportFormat, source: Option<&str>) -> anyhow::Result<()> {
    let graph = load(path)?;
    let mut report = AnalysisReport::new(&graph);
    if let Some(source) = source {
        report = report.with_paths_from(&graph, &source.to_string())?;
    }

    let mut stdout = io::stdout().lock();
    export::export(format, &report, &mut stdout).context("failed to write report")
}

fn traverse(
    path: &Path,
    start: &str,
    order: Order,
    direction: Direction,
    full: bool,
) -> anyhow::Result<()> {
    let graph = load(path)?;
    let start = start.to_string();
    let visited = if full {
        if direction == Direction::Backward {
            graph.reverse_graph().travel_full_graph(&start, order)?
        } else {
            graph.travel_full_graph(&start, order)?
        }
    } else {
        graph.traverse(&start, direction, order)?
    };

    log::debug!("{} traversal from {} visited {} vertices", order, start, visited.len());
    println!("{}", visited.join(" "));
    Ok(())
}

fn shortest_path(path: &Path, from: &str, to: &str) -> anyhow::Result<()> {
    let graph = load(path)?;
    let (from, to) = (from.to_string(), to.to_string());
    let paths = graph.dijkstra(&from)?;

    if !paths.is_reachable(&to) {
        bail!("{} is not reachable from {}", to, from);
    }
    let distance = paths.distance(&to).unwrap_or(f64::INFINITY);
    println!("{} ({})", paths.path(&to).join(" -> "), distance);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // info+ on stderr; --verbose enables debug; RUST_LOG overrides
    let level = if cli.global.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_module("graphscope", level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    match &cli.command {
        Some(Command::Analyze {
            file,
            format,
            source,
        }) => analyze(file, *format, source.as_deref()),
        Some(Command::Traverse {
            file,
            start,
            order,
            direction,
            full,
        }) => traverse(file, start, *order, *direction, *full),
        Some(Command::Path { file, from, to }) => shortest_path(file, from, to),
        Some(Command::Version) => {
            println!("graphscope v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => {
            println!("GraphScope - Weighted Graph Analyzer");
            println!("Run 'graphscope analyze <FILE>' to analyze a graph");
            println!("Run 'graphscope --help' for more information");
            Ok(())
        }
    }
}
