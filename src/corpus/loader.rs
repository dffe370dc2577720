//! Corpus loading, tokenization, and subsampling.

use std::{fs, path::Path};

use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};

use crate::{
    error::{Error, Result},
    token::Token,
};

/// Tokenize one recorded game line into a move sequence with the shared
/// `start` sentinel prepended.
///
/// Whitespace splitting drops empty fragments. A line with no moves yields
/// `None` rather than a bare-sentinel sequence.
pub fn tokenize_game(line: &str) -> Option<Vec<Token>> {
    let mut moves = vec![Token::start()];
    moves.extend(line.split_whitespace().map(Token::new));
    if moves.len() == 1 { None } else { Some(moves) }
}

/// Load a cleaned corpus file (one game per line) into tokenized sequences.
///
/// # Errors
///
/// [`Error::EmptyCorpus`] when the file holds no games; I/O failures carry
/// the path in their context.
pub fn load_corpus(path: &Path) -> Result<Vec<Vec<Token>>> {
    let contents = fs::read_to_string(path).map_err(|source| Error::Io {
        operation: format!("read corpus file {}", path.display()),
        source,
    })?;

    let games: Vec<Vec<Token>> = contents.lines().filter_map(tokenize_game).collect();
    if games.is_empty() {
        return Err(Error::EmptyCorpus {
            path: path.display().to_string(),
        });
    }
    Ok(games)
}

/// Sample `sample` games from the corpus without replacement.
///
/// Oversized requests are clamped to the corpus size. A seed makes the
/// selection reproducible; without one the RNG is drawn from OS entropy.
pub fn sample_games(games: &[Vec<Token>], sample: usize, seed: Option<u64>) -> Vec<Vec<Token>> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let amount = sample.min(games.len());
    games
        .choose_multiple(&mut rng, amount)
        .cloned()
        .collect()
}
