//! plytree CLI - compact move-tree statistics for game corpora
//!
//! This CLI provides a unified interface for:
//! - Cleaning raw PGN exports into one-game-per-line corpus files
//! - Building the merged move tree and its branching summary
//! - Reprinting statistics from archived runs

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "plytree")]
#[command(version, about = "Compact move-tree statistics for game corpora", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean a directory of PGN files into a corpus file
    Clean(plytree::cli::commands::clean::CleanArgs),

    /// Build the move tree from a corpus and report branching statistics
    Analyze(plytree::cli::commands::analyze::AnalyzeArgs),

    /// Reprint the statistics report from an archived run
    Stats(plytree::cli::commands::stats::StatsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Clean(args) => plytree::cli::commands::clean::execute(args),
        Commands::Analyze(args) => plytree::cli::commands::analyze::execute(args),
        Commands::Stats(args) => plytree::cli::commands::stats::execute(args),
    }
}
