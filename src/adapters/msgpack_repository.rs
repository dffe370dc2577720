//! MessagePack implementation of the run repository.
//!
//! This adapter implements the RunRepository port using rmp_serde for
//! compact binary serialization.

use std::{fs::File, path::Path};

use crate::{Result, error::Error, ports::RunRepository, run::AnalysisRun};

/// MessagePack-based run repository.
///
/// Provides persistent storage using the MessagePack binary format via
/// rmp_serde. This format offers good compression and fast
/// serialization/deserialization for large record tables.
///
/// # Examples
///
/// ```no_run
/// use plytree::adapters::MsgPackRepository;
/// use plytree::ports::RunRepository;
/// use std::path::Path;
///
/// let repo = MsgPackRepository;
/// let run = repo.load(Path::new("run.msgpack"))?;
/// println!("{} records", run.records.len());
/// # Ok::<(), plytree::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackRepository;

impl MsgPackRepository {
    /// Create a new MessagePack repository.
    pub fn new() -> Self {
        Self
    }
}

impl RunRepository for MsgPackRepository {
    fn save(&self, run: &AnalysisRun, path: &Path) -> Result<()> {
        let mut file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;

        rmp_serde::encode::write(&mut file, run).map_err(|e| Error::SerializationContext {
            operation: "serialize analysis run to MessagePack".to_string(),
            message: e.to_string(),
        })?;

        Ok(())
    }

    fn load(&self, path: &Path) -> Result<AnalysisRun> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;

        let run = rmp_serde::decode::from_read(&file).map_err(|e| Error::SerializationContext {
            operation: "deserialize analysis run from MessagePack".to_string(),
            message: e.to_string(),
        })?;

        Ok(run)
    }
}
