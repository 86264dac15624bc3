//! In-memory cache of loaded canonical datasets.
//!
//! Entries are keyed by path and revalidated against the file's modified time and
//! length on every lookup, so a preprocessing rewrite is picked up on the next query.

use moka::sync::Cache;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use tracing::debug;

use super::dataset::Dataset;
use super::error::{CatalogError, CatalogResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FileStamp {
    modified: Option<SystemTime>,
    len: u64,
}

impl FileStamp {
    fn of(path: &Path) -> CatalogResult<Self> {
        let metadata = std::fs::metadata(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CatalogError::DatasetNotFound {
                path: path.to_path_buf(),
            },
            _ => CatalogError::Io(e),
        })?;
        Ok(Self {
            modified: metadata.modified().ok(),
            len: metadata.len(),
        })
    }
}

#[derive(Debug, Clone)]
struct CachedDataset {
    stamp: FileStamp,
    dataset: Arc<Dataset>,
}

/// Shared, thread-safe dataset cache.
#[derive(Clone)]
pub struct CatalogCache {
    entries: Cache<PathBuf, CachedDataset>,
}

impl std::fmt::Debug for CatalogCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogCache")
            .field("entry_count", &self.entries.entry_count())
            .finish()
    }
}

impl Default for CatalogCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl CatalogCache {
    pub const DEFAULT_CAPACITY: u64 = 8;

    /// Creates a cache holding at most `capacity` datasets.
    pub fn new(capacity: u64) -> Self {
        Self {
            entries: Cache::builder().max_capacity(capacity).build(),
        }
    }

    /// Returns the dataset at `path`, loading it if absent or stale.
    pub fn get_or_load(&self, path: &Path) -> CatalogResult<Arc<Dataset>> {
        let stamp = FileStamp::of(path)?;

        if let Some(cached) = self.entries.get(path)
            && cached.stamp == stamp
        {
            return Ok(cached.dataset);
        }

        debug!(path = %path.display(), "Loading dataset into cache");
        let dataset = Arc::new(Dataset::load(path)?);
        self.entries.insert(
            path.to_path_buf(),
            CachedDataset {
                stamp,
                dataset: Arc::clone(&dataset),
            },
        );
        Ok(dataset)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    pub fn invalidate(&self, path: &Path) {
        self.entries.invalidate(path);
    }
}
