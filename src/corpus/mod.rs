//! Corpus acquisition: PGN cleaning, tokenization, and subsampling.

pub mod loader;
pub mod pgn;

pub use loader::{load_corpus, sample_games, tokenize_game};
pub use pgn::{clean_directory, clean_pgn};
