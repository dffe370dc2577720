//! Analysis run snapshot: configuration, records, and derived statistics.
//!
//! An [`AnalysisRun`] captures everything a finished analysis produced, so
//! the statistics report can be reprinted from an archive without reloading
//! the corpus or rebuilding the tree.

use serde::{Deserialize, Serialize};

use crate::{
    analysis::{LengthStats, TreeStats},
    tree::traversal::SummaryRecord,
};

/// The inputs an analysis actually ran with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Corpus file the games came from.
    pub source: String,
    /// Games available in the corpus.
    pub corpus_games: usize,
    /// Games analyzed after sampling.
    pub sampled_games: usize,
    /// Sampling seed, when one was given.
    pub seed: Option<u64>,
}

/// A complete, serializable analysis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRun {
    pub config: RunConfig,
    pub records: Vec<SummaryRecord>,
    /// `None` for degenerate inputs; reported as "no data".
    pub lengths: Option<LengthStats>,
    pub tree: Option<TreeStats>,
}
