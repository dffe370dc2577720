//! Repository port for analysis run persistence.
//!
//! This module defines the trait boundary between the domain and infrastructure
//! layers for storing and retrieving finished analysis runs.

use std::path::Path;

use crate::{Result, run::AnalysisRun};

/// Port for persisting and loading analysis runs.
///
/// This trait abstracts the storage mechanism, allowing different
/// implementations (MessagePack, JSON, in-memory, etc.) without coupling the
/// analysis logic to a specific serialization format.
///
/// # Examples
///
/// ```no_run
/// use plytree::ports::RunRepository;
/// use plytree::run::AnalysisRun;
/// use std::path::Path;
///
/// fn archive_run<R: RunRepository>(
///     repo: &R,
///     run: &AnalysisRun,
///     path: &Path,
/// ) -> plytree::Result<()> {
///     repo.save(run, path)
/// }
/// ```
pub trait RunRepository {
    /// Save an analysis run to persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be created or written to, or if
    /// serialization fails.
    fn save(&self, run: &AnalysisRun, path: &Path) -> Result<()>;

    /// Load an analysis run from persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be read, or if
    /// the stored data fails to deserialize.
    fn load(&self, path: &Path) -> Result<AnalysisRun>;
}
