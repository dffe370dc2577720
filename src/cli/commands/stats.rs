//! Stats command - reprint the statistics report from an archived run

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{adapters::MsgPackRepository, cli::output::format_number, ports::RunRepository};

#[derive(Parser, Debug)]
#[command(about = "Reprint the statistics report from an archived run")]
pub struct StatsArgs {
    /// Archived analysis run (MessagePack)
    pub archive: PathBuf,
}

pub fn execute(args: StatsArgs) -> Result<()> {
    let run = MsgPackRepository::new().load(&args.archive)?;

    println!(
        "Loaded run of {} records from {}",
        format_number(run.records.len()),
        args.archive.display()
    );
    super::print_run_report(&run);
    Ok(())
}
