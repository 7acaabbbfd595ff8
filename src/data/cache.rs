use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use super::loader::load_or_empty;
use super::model::InventoryDataset;

#[derive(Debug)]
struct CacheEntry {
    /// `None` when the file did not exist (or had no readable mtime) at load time.
    modified: Option<SystemTime>,
    dataset: Arc<InventoryDataset>,
}

/// Caller-owned memo of parsed inventory files, keyed by path and
/// invalidated when the file's modification time changes.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: HashMap<PathBuf, CacheEntry>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the dataset for `path`, parsing it only if it is not cached
    /// or the file changed since it was cached.
    pub fn get(&mut self, path: &Path) -> Arc<InventoryDataset> {
        let modified = modification_time(path);

        if let Some(entry) = self.entries.get(path) {
            if entry.modified == modified {
                log::debug!("Cache hit for {}", path.display());
                return Arc::clone(&entry.dataset);
            }
            log::debug!("{} changed on disk, reloading", path.display());
        }

        let dataset = Arc::new(load_or_empty(path));
        self.entries.insert(
            path.to_path_buf(),
            CacheEntry {
                modified,
                dataset: Arc::clone(&dataset),
            },
        );
        dataset
    }

    /// Drop the cached entry for `path`; the next `get` re-parses.
    pub fn invalidate(&mut self, path: &Path) {
        self.entries.remove(path);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn modification_time(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}
