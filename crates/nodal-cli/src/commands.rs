//! CLI command implementations.

use crate::MatrixFormat;
use colored::Colorize;
use nodal_core::Value;
use nodal_graph::{AdjacencyMatrix, Graph, ViewKind};
use std::path::Path;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn load(file: &Path) -> Result<Graph> {
    let graph = Graph::from_description_path(file)?;
    tracing::debug!(
        "Loaded {} nodes and {} edges from {}",
        graph.node_count(),
        graph.edge_count(),
        file.display()
    );
    Ok(graph)
}

/// Parses a fill value given on the command line.
///
/// JSON literals (`0`, `false`, `null`, `"x"`) keep their type; anything
/// else is taken as a plain string.
pub fn parse_fill(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Print the whole graph.
pub fn show(file: &Path) -> Result<()> {
    let graph = load(file)?;
    println!("{}", graph);
    Ok(())
}

/// Derive and print the adjacency matrix.
pub fn matrix(file: &Path, fill: &str, edge_key: Option<&str>, format: MatrixFormat) -> Result<()> {
    let graph = load(file)?;
    let matrix = graph.derive_adjacency_matrix(parse_fill(fill), edge_key)?;

    match format {
        MatrixFormat::Table => print!("{}", render_table(&matrix)),
        MatrixFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&matrix.to_records())?)
        }
        MatrixFormat::Csv => matrix.write_csv(std::io::stdout().lock())?,
    }

    Ok(())
}

/// Render a matrix as an aligned, colored table.
pub fn render_table(matrix: &AdjacencyMatrix) -> String {
    if matrix.is_empty() {
        return format!("{}\n", "(empty matrix)".dimmed());
    }

    let cells: Vec<Vec<String>> = matrix
        .cells()
        .iter()
        .map(|row| row.iter().map(Value::to_string).collect())
        .collect();
    let label_width = matrix.labels().iter().map(|s| display_width(s)).max().unwrap_or(0);
    let col_width = matrix
        .labels()
        .iter()
        .chain(cells.iter().flatten())
        .map(|s| display_width(s))
        .max()
        .unwrap_or(0);

    let mut out = format!("{:label_width$}", "");
    for label in matrix.labels() {
        out.push_str(&format!(" {}", format!("{:>col_width$}", label).cyan()));
    }
    out.push('\n');

    for (label, row) in matrix.labels().iter().zip(&cells) {
        out.push_str(&format!("{}", format!("{:<label_width$}", label).cyan()));
        for cell in row {
            out.push_str(&format!(" {:>col_width$}", cell));
        }
        out.push('\n');
    }
    out
}

// `{:>w$}` pads by chars, so widths are measured the same way.
fn display_width(s: &str) -> usize {
    s.chars().count()
}

/// Print a sample of the graph.
pub fn sample(file: &Path, nodes: usize, edges: usize, view: ViewKind) -> Result<()> {
    let graph = load(file)?;
    let sample = graph.sample(nodes, edges, view)?;
    println!("{}", sample);
    Ok(())
}

/// Show graph statistics.
pub fn stats(file: &Path) -> Result<()> {
    let graph = load(file)?;
    let stats = graph.stats();

    println!("{}", "Graph Status".cyan().bold());
    println!();
    println!("  {} {}", "Nodes:".dimmed(), stats.node_count);
    println!("  {} {}", "Edges:".dimmed(), stats.edge_count);
    println!("  {} {}", "Oriented:".dimmed(), stats.oriented_edges);
    println!("  {} {}", "Self-loops:".dimmed(), stats.self_loops);

    Ok(())
}
