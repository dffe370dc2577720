//! Compact move-tree analysis of recorded game corpora
//!
//! This crate provides:
//! - A merged move tree over tokenized game sequences, with per-leaf
//!   observation counts
//! - Aggregate game counts and a compacting traversal that emits one
//!   branching record per shared prefix
//! - Corpus acquisition tools (PGN cleaning, tokenization, subsampling)
//! - Record table export (CSV/JSON/JSONL) and archived-run persistence
//! - Descriptive statistics over the record table and game lengths

pub mod adapters;
pub mod analysis;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod export;
pub mod ports;
pub mod run;
pub mod token;
pub mod tree;

pub use analysis::{LengthStats, TreeStats};
pub use error::{Error, Result};
pub use run::{AnalysisRun, RunConfig};
pub use token::Token;
pub use tree::{Edge, MoveTree, SummaryRecord, TreeNode, summarize, total_games};
