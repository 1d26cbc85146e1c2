//! CLI entry point for the `gtrace` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graph_trace::cli::commands;
use graph_trace::{TraceError, TraceResult, TraversalMode};

#[derive(Parser)]
#[command(
    name = "gtrace",
    about = "Parse flowchart text and record replayable graph traversals"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the parsed nodes, adjacency and start node
    Parse {
        /// Graph text file, or - for stdin
        file: PathBuf,
    },
    /// Print every step of a traversal trace
    Trace {
        /// Graph text file, or - for stdin
        file: PathBuf,
        /// Traversal mode: bfs, dfs or linear
        #[arg(long, default_value = "bfs")]
        mode: String,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Show a single replay frame of a trace
    Replay {
        /// Graph text file, or - for stdin
        file: PathBuf,
        /// Traversal mode: bfs, dfs or linear
        #[arg(long, default_value = "bfs")]
        mode: String,
        /// Zero-based step index
        #[arg(long, default_value = "0")]
        step: usize,
        /// Number of consecutive steps to highlight
        #[arg(long, default_value = "1")]
        window: usize,
    },
    /// Compare the node sets of two versions of a graph file
    Diff {
        /// Previous version
        previous: PathBuf,
        /// Current version
        current: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn run(cli: Cli) -> TraceResult<()> {
    let json = cli.format == "json";

    match cli.command {
        Commands::Parse { file } => commands::cmd_parse(&file, json),
        Commands::Trace { file, mode, pretty } => {
            commands::cmd_trace(&file, TraversalMode::parse(&mode)?, json, pretty)
        }
        Commands::Replay {
            file,
            mode,
            step,
            window,
        } => commands::cmd_replay(&file, TraversalMode::parse(&mode)?, step, window, json),
        Commands::Diff { previous, current } => commands::cmd_diff(&previous, &current, json),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        let code = match &e {
            TraceError::Io(_) => 1,
            TraceError::UnknownMode(_) => 2,
            TraceError::StepOutOfRange { .. } => 3,
            _ => 5,
        };
        process::exit(code);
    }
}
