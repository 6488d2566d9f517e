//! Nodal CLI - Command-line interface for Nodal
//!
//! Loads a graph from a JSON description and prints views of it.

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use nodal_graph::{ViewKind, DEFAULT_SAMPLE_LEN};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "nodal")]
#[command(author = "Nodal Contributors")]
#[command(version)]
#[command(about = "Attributed graphs and their adjacency matrices", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every edge and node of the graph
    Show {
        /// Graph description (JSON)
        file: PathBuf,
    },

    /// Derive the adjacency matrix
    Matrix {
        /// Graph description (JSON)
        file: PathBuf,

        /// Value for node pairs without an edge (JSON literal)
        #[arg(long, default_value = "false")]
        fill: String,

        /// Edge attribute to place in connected cells
        #[arg(long)]
        edge_key: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = MatrixFormat::Table)]
        format: MatrixFormat,
    },

    /// Print the first few edges and nodes
    Sample {
        /// Graph description (JSON)
        file: PathBuf,

        /// Number of nodes to show
        #[arg(long, default_value_t = DEFAULT_SAMPLE_LEN)]
        nodes: usize,

        /// Number of edges to show
        #[arg(long, default_value_t = DEFAULT_SAMPLE_LEN)]
        edges: usize,

        /// View kind: obj, table or plot
        #[arg(long, default_value = "obj")]
        view: ViewKind,
    },

    /// Show node and edge counts
    Stats {
        /// Graph description (JSON)
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MatrixFormat {
    /// Aligned table
    Table,
    /// Row records as JSON
    Json,
    /// Comma-separated values
    Csv,
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let result = match cli.command {
        Commands::Show { file } => commands::show(&file),
        Commands::Matrix {
            file,
            fill,
            edge_key,
            format,
        } => commands::matrix(&file, &fill, edge_key.as_deref(), format),
        Commands::Sample {
            file,
            nodes,
            edges,
            view,
        } => commands::sample(&file, nodes, edges, view),
        Commands::Stats { file } => commands::stats(&file),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
