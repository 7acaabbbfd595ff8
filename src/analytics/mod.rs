/// Analytics layer: turns raw inventory rows into statuses and summaries.
///
/// ```text
///  rows in view
///      │
///      ├──► classifier  (kmeans over Stock_Qty × Days_Since_Last_Sale) → Status
///      ├──► forecast    (Stock_Qty / Avg_Daily_Sales, sentinel)         → runway
///      │        └──► restock (runway vs. lead time)                      → Restock_Status
///      ▼
///   summary  (KPIs, top-N slices)
/// ```

pub mod classifier;
pub mod forecast;
pub mod kmeans;
pub mod pipeline;
pub mod restock;
pub mod summary;

pub use pipeline::InventoryAnalysis;

/// Fixed parameters of the analytics pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Number of stock-aging groups.
    pub cluster_count: usize,
    pub cluster_seed: u64,
    pub max_iterations: usize,
    /// Views with fewer rows are labelled `Normal` without clustering.
    pub min_rows_for_clustering: usize,
    /// Outside the dead-stock group, items sold within this many days are hot.
    pub hot_item_days: u32,
    /// Runway reported when the sales rate is zero or unknown.
    pub stockout_sentinel: f64,
    /// Runway below `lead_time * warning_factor` is a warning.
    pub warning_factor: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            cluster_count: 3,
            cluster_seed: 42,
            max_iterations: 300,
            min_rows_for_clustering: 4,
            hot_item_days: 30,
            stockout_sentinel: 999.0,
            warning_factor: 1.5,
        }
    }
}
