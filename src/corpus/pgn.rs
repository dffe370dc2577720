//! Cleaning of raw PGN files into one-game-per-line corpus files.
//!
//! A PGN export interleaves bracketed metadata tags with movetext. Cleaning
//! keeps only the movetext, splits concatenated games apart at the first
//! move number, and strips the numbering annotations themselves, leaving
//! each game as a plain whitespace-delimited move sequence ending in its
//! result marker.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::error::{Error, Result};

/// Extract cleaned game lines from one PGN file's contents.
///
/// Metadata lines (starting with `[`) and blank lines are dropped; the
/// remaining movetext is joined and split into games at every `" 1. "`
/// boundary. Move-number tokens (ending in `.`) are removed; result markers
/// like `1-0` survive and serve as the genuine end-of-record token that
/// keeps any game from being a proper prefix of another.
pub fn clean_pgn(contents: &str) -> Vec<String> {
    let movetext: Vec<&str> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('['))
        .collect();

    movetext
        .join(" ")
        .split(" 1. ")
        .map(strip_move_numbers)
        .filter(|game| !game.is_empty())
        .collect()
}

fn strip_move_numbers(game: &str) -> String {
    game.split_whitespace()
        .filter(|token| !token.ends_with('.'))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Clean every `.pgn` file under `input` into a single corpus file at
/// `output`, one game per line. Files are processed in path order so the
/// output is stable across runs. Returns the number of games written.
pub fn clean_directory(input: &Path, output: &Path) -> Result<usize> {
    let entries = fs::read_dir(input).map_err(|source| Error::Io {
        operation: format!("read directory {}", input.display()),
        source,
    })?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| Error::Io {
            operation: format!("read directory {}", input.display()),
            source,
        })?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "pgn") {
            paths.push(path);
        }
    }
    paths.sort();

    let file = File::create(output).map_err(|source| Error::Io {
        operation: format!("create corpus file {}", output.display()),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    let mut written = 0;
    for path in paths {
        let contents = fs::read_to_string(&path).map_err(|source| Error::Io {
            operation: format!("read PGN file {}", path.display()),
            source,
        })?;
        for game in clean_pgn(&contents) {
            writeln!(writer, "{game}")?;
            written += 1;
        }
    }
    writer.flush()?;

    Ok(written)
}
