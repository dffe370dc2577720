//! Clean command - strip raw PGN files into a one-game-per-line corpus

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{cli::output::format_number, corpus::clean_directory};

#[derive(Parser, Debug)]
#[command(about = "Clean a directory of PGN files into a corpus file")]
pub struct CleanArgs {
    /// Directory containing .pgn files
    pub input: PathBuf,

    /// Output corpus file, one game per line
    #[arg(long, short = 'o')]
    pub output: PathBuf,
}

pub fn execute(args: CleanArgs) -> Result<()> {
    println!("Cleaning PGN files in {}...", args.input.display());

    let written = clean_directory(&args.input, &args.output)?;

    println!(
        "Wrote {} games to {}",
        format_number(written),
        args.output.display()
    );
    Ok(())
}
