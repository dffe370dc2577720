//! CLI infrastructure for the plytree toolkit
//!
//! This module provides the command-line interface for cleaning game
//! corpora, building move trees, and reporting branching statistics.

pub mod commands;
pub mod output;
