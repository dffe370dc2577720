//! Merged move tree over recorded game sequences.
//!
//! Every inserted game is one root-to-leaf path; games sharing an opening
//! share the corresponding prefix of the tree. A leaf carries the number of
//! games that ended exactly there, so the tree is a lossless multiset of the
//! corpus keyed by move sequence.

use std::collections::{HashMap, hash_map::Entry};

use crate::{
    error::{Error, Result},
    token::Token,
};

/// A child slot of a tree node.
///
/// An edge is exactly one of terminal or branch, never both: a game whose
/// move path is a proper prefix of another game's path has no representable
/// shape here and is rejected at insert time as a [`Error::PrefixConflict`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edge {
    /// One or more games end exactly after this move; the count is strictly
    /// positive.
    Terminal(usize),
    /// At least one game continues past this move.
    Branch(TreeNode),
}

/// A node of the move tree: the mapping from next move to child edge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    edges: HashMap<Token, Edge>,
}

impl TreeNode {
    /// Create a new node with no children.
    pub fn new() -> Self {
        Self::default()
    }

    /// The edge for a given move, if one was observed.
    pub fn edge(&self, token: &Token) -> Option<&Edge> {
        self.edges.get(token)
    }

    /// Iterate over the observed continuations of this node.
    pub fn edges(&self) -> impl Iterator<Item = (&Token, &Edge)> {
        self.edges.iter()
    }

    /// Number of distinct moves observed from this node.
    pub fn reply_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether no continuation was ever observed from this node.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// The merged tree of all inserted game sequences.
///
/// The root represents the empty prefix and is never itself terminal; with
/// conventional tokenization its single edge is the shared `start` sentinel.
/// The tree is built once from the full corpus batch and read-only afterward.
#[derive(Debug, Clone, Default)]
pub struct MoveTree {
    root: TreeNode,
}

impl MoveTree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// The root node (the empty prefix).
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Whether no game was inserted yet.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Insert one recorded game.
    ///
    /// No-op (empty) tokens are dropped before the walk. Re-inserting an
    /// identical sequence increments its terminal count in place.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptySequence`] when nothing remains after dropping no-ops.
    /// - [`Error::PrefixConflict`] when the game ends at a point another game
    ///   continues past, or continues past a point another game ended at.
    ///   The conflict names the shared prefix; the corpus contract (every
    ///   game terminates at a genuine end-of-record marker) rules this out
    ///   for well-formed input.
    pub fn insert(&mut self, moves: &[Token]) -> Result<()> {
        let moves: Vec<&Token> = moves.iter().filter(|token| !token.is_noop()).collect();
        let Some((last, prefix)) = moves.split_last() else {
            return Err(Error::EmptySequence);
        };

        let mut node = &mut self.root;
        for (idx, token) in prefix.iter().enumerate() {
            let edge = node
                .edges
                .entry((*token).clone())
                .or_insert_with(|| Edge::Branch(TreeNode::new()));
            node = match edge {
                Edge::Branch(child) => child,
                Edge::Terminal(_) => {
                    return Err(Error::PrefixConflict {
                        path: join_refs(&moves[..=idx]),
                    });
                }
            };
        }

        match node.edges.entry((*last).clone()) {
            Entry::Occupied(mut occupied) => match occupied.get_mut() {
                Edge::Terminal(count) => *count += 1,
                Edge::Branch(_) => {
                    return Err(Error::PrefixConflict {
                        path: join_refs(&moves),
                    });
                }
            },
            Entry::Vacant(vacant) => {
                vacant.insert(Edge::Terminal(1));
            }
        }

        Ok(())
    }

    /// Resolve the edge reached by following `path` from the root.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptySequence`] for the empty path (the root has no
    ///   incoming edge to resolve).
    /// - [`Error::PathNotFound`] when any step of the path has no edge, or
    ///   attempts to descend through a terminal.
    pub fn lookup(&self, path: &[Token]) -> Result<&Edge> {
        let (last, prefix) = path.split_last().ok_or(Error::EmptySequence)?;

        let mut node = &self.root;
        for (idx, token) in prefix.iter().enumerate() {
            match node.edge(token) {
                Some(Edge::Branch(child)) => node = child,
                _ => {
                    return Err(Error::PathNotFound {
                        path: crate::token::join_path(&path[..=idx]),
                    });
                }
            }
        }

        node.edge(last).ok_or_else(|| Error::PathNotFound {
            path: crate::token::join_path(path),
        })
    }
}

fn join_refs(tokens: &[&Token]) -> String {
    tokens
        .iter()
        .map(|token| token.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(moves: &[&str]) -> Vec<Token> {
        moves.iter().copied().map(Token::new).collect()
    }

    #[test]
    fn insert_creates_terminal_leaf() {
        let mut tree = MoveTree::new();
        tree.insert(&seq(&["start", "e4", "e5"])).unwrap();

        let edge = tree.lookup(&seq(&["start", "e4", "e5"])).unwrap();
        assert_eq!(edge, &Edge::Terminal(1));
    }

    #[test]
    fn reinsertion_increments_in_place() {
        let mut tree = MoveTree::new();
        for _ in 0..3 {
            tree.insert(&seq(&["start", "e4", "e5"])).unwrap();
        }

        let edge = tree.lookup(&seq(&["start", "e4", "e5"])).unwrap();
        assert_eq!(edge, &Edge::Terminal(3));
    }

    #[test]
    fn shared_prefixes_merge() {
        let mut tree = MoveTree::new();
        tree.insert(&seq(&["start", "e4", "e5"])).unwrap();
        tree.insert(&seq(&["start", "e4", "c5"])).unwrap();

        let Edge::Branch(node) = tree.lookup(&seq(&["start", "e4"])).unwrap() else {
            panic!("shared prefix should be a branch");
        };
        assert_eq!(node.reply_count(), 2);
    }

    #[test]
    fn extending_a_terminal_is_a_conflict() {
        let mut tree = MoveTree::new();
        tree.insert(&seq(&["start", "e4"])).unwrap();

        let err = tree.insert(&seq(&["start", "e4", "e5"])).unwrap_err();
        assert!(matches!(err, Error::PrefixConflict { .. }), "got {err:?}");
    }

    #[test]
    fn terminating_at_a_branch_is_a_conflict() {
        let mut tree = MoveTree::new();
        tree.insert(&seq(&["start", "e4", "e5"])).unwrap();

        let err = tree.insert(&seq(&["start", "e4"])).unwrap_err();
        assert!(matches!(err, Error::PrefixConflict { path } if path == "start e4"));
    }

    #[test]
    fn noop_tokens_do_not_extend_the_path() {
        let mut tree = MoveTree::new();
        tree.insert(&seq(&["start", "", "e4", ""])).unwrap();

        let edge = tree.lookup(&seq(&["start", "e4"])).unwrap();
        assert_eq!(edge, &Edge::Terminal(1));
    }

    #[test]
    fn all_noop_sequence_is_rejected() {
        let mut tree = MoveTree::new();
        let err = tree.insert(&seq(&["", ""])).unwrap_err();
        assert!(matches!(err, Error::EmptySequence));
    }

    #[test]
    fn lookup_of_unknown_path_fails() {
        let mut tree = MoveTree::new();
        tree.insert(&seq(&["start", "e4"])).unwrap();

        let err = tree.lookup(&seq(&["start", "d4"])).unwrap_err();
        assert!(matches!(err, Error::PathNotFound { path } if path == "start d4"));
    }

    #[test]
    fn lookup_cannot_descend_through_a_terminal() {
        let mut tree = MoveTree::new();
        tree.insert(&seq(&["start", "e4"])).unwrap();

        let err = tree.lookup(&seq(&["start", "e4", "e5"])).unwrap_err();
        assert!(matches!(err, Error::PathNotFound { path } if path == "start e4"));
    }
}
