//! Aggregate game counts over move-tree subtrees.

use super::move_tree::{Edge, TreeNode};

/// Total number of recorded games whose path passes through or ends within
/// `node`'s subtree.
///
/// Sums terminal counts across every edge of the node, descending
/// recursively into branches. A node with no edges sums to 0; that shape is
/// unreachable through insertion but is handled rather than rejected.
pub fn total_games(node: &TreeNode) -> usize {
    node.edges()
        .map(|(_, edge)| match edge {
            Edge::Terminal(count) => *count,
            Edge::Branch(child) => total_games(child),
        })
        .sum()
}
