//! Move tree construction, aggregation, and compacting traversal.

pub mod aggregate;
pub mod move_tree;
pub mod traversal;

pub use aggregate::total_games;
pub use move_tree::{Edge, MoveTree, TreeNode};
pub use traversal::{SummaryRecord, summarize};
