//! Statistical summaries of the corpus and the record table

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use statrs::statistics::{Data, OrderStatistics, Statistics};

use crate::{token::Token, tree::traversal::SummaryRecord};

/// How many modal lengths the corpus summary reports.
const MODAL_LENGTHS: usize = 3;

/// Distribution of tokenized sequence lengths across the analyzed games.
///
/// Lengths count tokens as inserted, start sentinel included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LengthStats {
    pub games: usize,
    pub mean_plies: f64,
    pub median_plies: f64,
    /// Most frequent lengths as `(length, occurrences)`, most frequent
    /// first, at most [`MODAL_LENGTHS`] entries.
    pub modal_plies: Vec<(usize, usize)>,
}

/// Branching statistics over the summary record table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeStats {
    pub total_records: usize,
    pub forced_records: usize,
    pub unforced_records: usize,
    pub mean_replies: f64,
    /// Mean reply count over unforced records only; `None` when every
    /// record is forced.
    pub mean_unforced_replies: Option<f64>,
}

impl LengthStats {
    /// Summarize the lengths of the analyzed game sequences.
    ///
    /// Returns `None` for an empty corpus; the consumer reports "no data"
    /// instead of computing undefined reductions.
    pub fn from_sequences(games: &[Vec<Token>]) -> Option<Self> {
        if games.is_empty() {
            return None;
        }

        let lengths: Vec<usize> = games.iter().map(Vec::len).collect();
        let as_f64: Vec<f64> = lengths.iter().map(|&n| n as f64).collect();

        let mean_plies = as_f64.iter().mean();
        let mut data = Data::new(as_f64);
        let median_plies = data.median();

        let mut histogram: HashMap<usize, usize> = HashMap::new();
        for length in lengths {
            *histogram.entry(length).or_insert(0) += 1;
        }
        let mut modal_plies: Vec<(usize, usize)> = histogram.into_iter().collect();
        modal_plies.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        modal_plies.truncate(MODAL_LENGTHS);

        Some(Self {
            games: games.len(),
            mean_plies,
            median_plies,
            modal_plies,
        })
    }
}

impl TreeStats {
    /// Summarize branching over the record table.
    ///
    /// Returns `None` for an empty table.
    pub fn from_records(records: &[SummaryRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let forced_records = records.iter().filter(|r| r.is_forced()).count();
        let unforced: Vec<f64> = records
            .iter()
            .filter(|r| !r.is_forced())
            .map(|r| r.reply_count as f64)
            .collect();

        let mean_replies = records.iter().map(|r| r.reply_count as f64).mean();
        let mean_unforced_replies = if unforced.is_empty() {
            None
        } else {
            Some(unforced.iter().mean())
        };

        Some(Self {
            total_records: records.len(),
            forced_records,
            unforced_records: records.len() - forced_records,
            mean_replies,
            mean_unforced_replies,
        })
    }
}
