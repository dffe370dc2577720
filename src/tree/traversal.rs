//! Compacting traversal of the move tree into per-prefix summary records.
//!
//! The traversal visits every branch node reachable through prefixes shared
//! by more than one game and emits one record per visit. Subtrees carrying a
//! single game are recorded at their entry point and never expanded: all
//! branching below them is the deterministic tail of one game, so the
//! aggregate count at the entry already says everything the statistics need.

use serde::{Deserialize, Serialize};

use super::{
    aggregate::total_games,
    move_tree::{Edge, MoveTree},
};
use crate::token::{self, Token};

/// One row of the branching summary: a prefix shared by `total_games`
/// recorded games, with `reply_count` distinct continuations observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// Root-to-node move path, inclusive.
    pub path: Vec<Token>,
    /// Length of the path.
    pub depth: usize,
    /// Number of distinct moves observed from this prefix.
    pub reply_count: usize,
    /// Number of games passing through or ending within this prefix.
    pub total_games: usize,
}

impl SummaryRecord {
    /// The space-delimited state label used in reports and exports.
    pub fn state(&self) -> String {
        token::join_path(&self.path)
    }

    /// Whether every continuing game was compelled into the same single next
    /// move despite more than one game being present.
    ///
    /// A lone game (`total_games == 1`) is never forced: with nothing else
    /// passing through, compulsion is vacuous.
    pub fn is_forced(&self) -> bool {
        self.reply_count == 1 && self.total_games > 1
    }
}

/// Walk the tree and emit one [`SummaryRecord`] per visited branch node.
///
/// The work list is seeded with the single-element `start` path and expanded
/// only below prefixes carrying more than one game. Terminal destinations
/// may be pushed; they resolve and skip on the next pop. Output ordering
/// follows the stack discipline and is not part of the contract; consumers
/// address records by path.
pub fn summarize(tree: &MoveTree) -> Vec<SummaryRecord> {
    let mut records = Vec::new();
    if tree.is_empty() {
        return records;
    }

    let mut pending = vec![vec![Token::start()]];

    while let Some(path) = pending.pop() {
        let Ok(edge) = tree.lookup(&path) else {
            // Corpora built without the start sentinel have nothing under
            // the seed path; nothing to summarize there.
            continue;
        };
        let Edge::Branch(node) = edge else {
            continue;
        };
        if node.is_empty() {
            continue;
        }

        let games = total_games(node);
        let replies = node.reply_count();

        if games > 1 {
            for (token, _) in node.edges() {
                let mut next = path.clone();
                next.push(token.clone());
                pending.push(next);
            }
        }

        records.push(SummaryRecord {
            depth: path.len(),
            reply_count: replies,
            total_games: games,
            path,
        });
    }

    records
}
