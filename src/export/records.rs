//! Record table serialization.
//!
//! All three formats share the same flat row schema; the CSV header
//! `state,depth,children,games` is the compatibility contract for
//! downstream tooling.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use serde::Serialize;

use crate::{
    error::{Error, Result},
    tree::traversal::SummaryRecord,
};

/// One serialized row. Field order fixes the CSV column order.
#[derive(Debug, Serialize)]
struct RecordRow {
    state: String,
    depth: usize,
    children: usize,
    games: usize,
}

impl From<&SummaryRecord> for RecordRow {
    fn from(record: &SummaryRecord) -> Self {
        Self {
            state: record.state(),
            depth: record.depth,
            children: record.reply_count,
            games: record.total_games,
        }
    }
}

/// Write the record table as CSV with a `state,depth,children,games` header.
///
/// The header is written even for an empty table.
pub fn write_csv(records: &[SummaryRecord], path: &Path) -> Result<()> {
    let file = create(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));
    writer.write_record(["state", "depth", "children", "games"])?;
    for record in records {
        writer.serialize(RecordRow::from(record))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the record table as a single JSON array of row objects.
pub fn write_json(records: &[SummaryRecord], path: &Path) -> Result<()> {
    let rows: Vec<RecordRow> = records.iter().map(RecordRow::from).collect();
    let file = create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), &rows)?;
    Ok(())
}

/// Write the record table as JSON Lines, one row object per line.
pub fn write_jsonl(records: &[SummaryRecord], path: &Path) -> Result<()> {
    let file = create(path)?;
    let mut writer = BufWriter::new(file);
    for record in records {
        let line = serde_json::to_string(&RecordRow::from(record))?;
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(())
}

fn create(path: &Path) -> Result<File> {
    File::create(path).map_err(|source| Error::Io {
        operation: format!("create export file {}", path.display()),
        source,
    })
}
