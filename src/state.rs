use std::path::{Path, PathBuf};
use std::sync::Arc;

use inventory_insight::analytics::{InventoryAnalysis, PipelineConfig};
use inventory_insight::data::cache::DatasetCache;
use inventory_insight::data::filter::{category_options, CategoryFilter};
use inventory_insight::data::model::InventoryDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which half of the dashboard is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    DeadStock,
    Forecast,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// File currently shown.
    pub data_path: PathBuf,

    /// Parsed files, re-read only when their mtime changes.
    pub cache: DatasetCache,

    /// Loaded dataset (empty when the file is missing or unreadable).
    pub dataset: Arc<InventoryDataset>,

    pub config: PipelineConfig,

    /// Category selection from the side panel.
    pub category: CategoryFilter,

    /// Selector entries: "All" + categories.
    pub category_options: Vec<String>,

    /// Analysis of the rows in view, recomputed on every selection change.
    pub analysis: InventoryAnalysis,

    pub active_tab: Tab,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(data_path: PathBuf, category: CategoryFilter) -> Self {
        let config = PipelineConfig::default();
        let mut state = Self {
            data_path,
            cache: DatasetCache::new(),
            dataset: Arc::new(InventoryDataset::empty()),
            analysis: InventoryAnalysis::compute(&[], &config),
            config,
            category,
            category_options: Vec::new(),
            active_tab: Tab::default(),
            status_message: None,
        };
        state.reload();
        state
    }

    pub fn has_data(&self) -> bool {
        !self.dataset.is_empty()
    }

    /// Switch to another file and reset the category selection.
    pub fn open(&mut self, path: &Path) {
        self.data_path = path.to_path_buf();
        self.category = CategoryFilter::All;
        self.reload();
    }

    /// Fetch the current file through the cache and re-run the analysis.
    pub fn reload(&mut self) {
        self.dataset = self.cache.get(&self.data_path);
        self.category_options = category_options(&self.dataset);

        if let CategoryFilter::Only(cat) = &self.category {
            if !self.dataset.categories.contains(cat) {
                log::warn!("Category '{cat}' not present in {}", self.data_path.display());
                self.category = CategoryFilter::All;
            }
        }

        self.status_message = if self.has_data() {
            None
        } else {
            Some(format!("Could not load {}", self.data_path.display()))
        };
        self.reanalyse();
    }

    /// Re-read the file from disk even if its mtime is unchanged.
    pub fn force_reload(&mut self) {
        self.cache.invalidate(&self.data_path);
        self.reload();
    }

    /// Change the category in view.
    pub fn set_category(&mut self, category: CategoryFilter) {
        if self.category != category {
            self.category = category;
            self.reanalyse();
        }
    }

    fn reanalyse(&mut self) {
        self.analysis = InventoryAnalysis::for_view(&self.dataset, &self.category, &self.config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_insight::data::synth::generate_inventory;
    use inventory_insight::data::writer::write_file;

    fn state_with_data(dir: &tempfile::TempDir) -> AppState {
        let path = dir.path().join("inventory_data.csv");
        write_file(&path, &generate_inventory(120, 99)).unwrap();
        AppState::new(path, CategoryFilter::All)
    }

    #[test]
    fn missing_file_leaves_state_without_data() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(dir.path().join("nope.csv"), CategoryFilter::All);
        assert!(!state.has_data());
        assert!(state.analysis.is_empty());
        assert!(state.status_message.is_some());
        assert_eq!(state.category_options, vec!["All"]);
    }

    #[test]
    fn category_change_reanalyses_the_subset() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_with_data(&dir);
        assert_eq!(state.analysis.kpis.total_skus, 120);

        state.set_category(CategoryFilter::Only("Toys".into()));
        let toys = state.dataset.rows.iter().filter(|r| r.category == "Toys").count();
        assert_eq!(state.analysis.kpis.total_skus, toys);
        assert!(state.analysis.rows.iter().all(|r| r.row.category == "Toys"));
    }

    #[test]
    fn unknown_category_falls_back_to_all_on_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory_data.csv");
        write_file(&path, &generate_inventory(20, 1)).unwrap();
        let state = AppState::new(path, CategoryFilter::Only("Garden".into()));
        assert_eq!(state.category, CategoryFilter::All);
        assert_eq!(state.analysis.kpis.total_skus, 20);
    }

    #[test]
    fn reload_reuses_cached_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_with_data(&dir);
        let before = Arc::clone(&state.dataset);
        state.reload();
        assert!(Arc::ptr_eq(&before, &state.dataset));

        state.force_reload();
        assert!(!Arc::ptr_eq(&before, &state.dataset));
        assert_eq!(*before, *state.dataset);
    }
}
