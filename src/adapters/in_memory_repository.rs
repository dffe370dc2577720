//! In-memory run repository for testing.
//!
//! This adapter provides a pure in-memory implementation of RunRepository,
//! enabling fast tests without any file system I/O.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex},
};

use crate::{Result, error::Error, ports::RunRepository, run::AnalysisRun};

/// In-memory repository for testing.
///
/// Stores runs in memory using a shared HashMap, avoiding file system I/O
/// entirely.
///
/// # Thread Safety
///
/// This repository is thread-safe and can be safely cloned and shared across
/// threads. All clones share the same underlying storage.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of runs currently stored.
    ///
    /// Useful for testing to verify save operations occurred.
    pub fn count(&self) -> usize {
        self.storage.lock().unwrap().len()
    }

    /// Clear all stored runs.
    pub fn clear(&self) {
        self.storage.lock().unwrap().clear();
    }

    /// Check if a run exists at the given path.
    pub fn contains(&self, path: &Path) -> bool {
        let key = path.to_string_lossy().to_string();
        self.storage.lock().unwrap().contains_key(&key)
    }
}

impl RunRepository for InMemoryRepository {
    fn save(&self, run: &AnalysisRun, path: &Path) -> Result<()> {
        let key = path.to_string_lossy().to_string();

        let bytes = rmp_serde::to_vec(run).map_err(|e| Error::SerializationContext {
            operation: "serialize analysis run for in-memory storage".to_string(),
            message: e.to_string(),
        })?;

        self.storage.lock().unwrap().insert(key, bytes);
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<AnalysisRun> {
        let key = path.to_string_lossy().to_string();
        let storage = self.storage.lock().unwrap();

        let bytes = storage.get(&key).ok_or_else(|| Error::Io {
            operation: format!("load analysis run from in-memory storage at {path:?}"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "key not found in memory"),
        })?;

        rmp_serde::from_slice(bytes).map_err(|e| Error::SerializationContext {
            operation: "deserialize analysis run from in-memory storage".to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::RunConfig;

    fn sample_run() -> AnalysisRun {
        AnalysisRun {
            config: RunConfig {
                source: "corpus.txt".to_string(),
                corpus_games: 0,
                sampled_games: 0,
                seed: None,
            },
            records: Vec::new(),
            lengths: None,
            tree: None,
        }
    }

    #[test]
    fn test_in_memory_save_and_load() {
        let repo = InMemoryRepository::new();
        let run = sample_run();
        let path = Path::new("test_run");

        assert_eq!(repo.count(), 0);
        assert!(!repo.contains(path));

        repo.save(&run, path).unwrap();
        assert_eq!(repo.count(), 1);
        assert!(repo.contains(path));

        let loaded = repo.load(path).unwrap();
        assert_eq!(run, loaded);
    }

    #[test]
    fn test_load_nonexistent_returns_error() {
        let repo = InMemoryRepository::new();
        let result = repo.load(Path::new("nonexistent"));
        assert!(result.is_err());
    }

    #[test]
    fn test_clone_shares_storage() {
        let repo1 = InMemoryRepository::new();
        let repo2 = repo1.clone();

        let run = sample_run();
        repo1.save(&run, Path::new("shared")).unwrap();

        let loaded = repo2.load(Path::new("shared")).unwrap();
        assert_eq!(run, loaded);
        assert_eq!(repo1.count(), 1);
        assert_eq!(repo2.count(), 1);
    }
}
