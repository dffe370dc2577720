//! Analyze command - build the move tree and report branching statistics

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::{
    adapters::MsgPackRepository,
    analysis::{LengthStats, TreeStats},
    cli::output,
    corpus::{load_corpus, sample_games},
    export,
    ports::RunRepository,
    run::{AnalysisRun, RunConfig},
    tree::{MoveTree, summarize},
};

#[derive(Parser, Debug)]
#[command(about = "Build the move tree from a corpus and report branching statistics")]
pub struct AnalyzeArgs {
    /// Cleaned corpus file, one game per line
    pub corpus: PathBuf,

    /// Number of games to sample from the corpus (default: all)
    #[arg(long)]
    pub sample: Option<usize>,

    /// Random seed for reproducible sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export the record table to a file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export format
    #[arg(long, short = 'f', value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Archive the full run (records + statistics) as MessagePack
    #[arg(long)]
    pub archive: Option<PathBuf>,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ExportFormat {
    /// CSV format
    Csv,
    /// JSON format
    Json,
    /// JSONL format (JSON Lines)
    Jsonl,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let games = load_corpus(&args.corpus)?;
    let corpus_games = games.len();

    let games = match args.sample {
        Some(sample) => sample_games(&games, sample, args.seed),
        None => games,
    };
    println!(
        "Analyzing {} of {} games from {}",
        output::format_number(games.len()),
        output::format_number(corpus_games),
        args.corpus.display()
    );

    let progress = output::create_insert_progress(games.len() as u64)?;
    let mut tree = MoveTree::new();
    for (index, game) in games.iter().enumerate() {
        tree.insert(game)
            .with_context(|| format!("inserting game {}", index + 1))?;
        progress.inc(1);
    }
    progress.finish_with_message("tree built");

    let spinner = output::create_spinner("Compacting move tree...")?;
    let records = summarize(&tree);
    spinner.finish_and_clear();

    let run = AnalysisRun {
        config: RunConfig {
            source: args.corpus.display().to_string(),
            corpus_games,
            sampled_games: games.len(),
            seed: args.seed,
        },
        lengths: LengthStats::from_sequences(&games),
        tree: TreeStats::from_records(&records),
        records,
    };

    super::print_run_report(&run);

    if let Some(path) = args.export {
        match args.format {
            ExportFormat::Csv => export::write_csv(&run.records, &path)?,
            ExportFormat::Json => export::write_json(&run.records, &path)?,
            ExportFormat::Jsonl => export::write_jsonl(&run.records, &path)?,
        }
        println!("\nRecords exported to: {}", path.display());
    }

    if let Some(path) = args.archive {
        MsgPackRepository::new().save(&run, &path)?;
        println!("Run archived to: {}", path.display());
    }

    Ok(())
}
