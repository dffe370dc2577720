//! Statistical summaries over the corpus and the record table
//!
//! These are pure reducers: they take the already-materialized records and
//! game sequences and produce the numbers the report prints.

pub mod stats;

pub use stats::{LengthStats, TreeStats};
