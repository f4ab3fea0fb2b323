//! Job-pair sources.

use crate::error::Result;
use crate::model::RawJobPair;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Loads raw job-pair tables.
///
/// Parsing a storage format (StarExec CSV exports, column-name
/// normalization) is the implementor's job; the pipeline only needs rows.
pub trait JobPairSource {
    /// Whether `path` can be loaded. Checked for every input before any
    /// scoring starts.
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    /// Loads every row of the table at `path`.
    fn load(&self, path: &Path) -> Result<Vec<RawJobPair>>;
}

/// A source backed by tables already in memory, keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    tables: HashMap<PathBuf, Vec<RawJobPair>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, path: impl Into<PathBuf>, rows: Vec<RawJobPair>) -> Self {
        self.tables.insert(path.into(), rows);
        self
    }
}

impl JobPairSource for MemorySource {
    fn exists(&self, path: &Path) -> bool {
        self.tables.contains_key(path)
    }

    fn load(&self, path: &Path) -> Result<Vec<RawJobPair>> {
        self.tables
            .get(path)
            .cloned()
            .ok_or_else(|| crate::error::ScoringError::MissingInput(path.to_path_buf()))
    }
}
