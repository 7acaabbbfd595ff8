/// Data layer: core types, loading, caching, filtering and mock data.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐     ┌──────────┐
///   │  loader   │ ◄── │  cache    │  path + mtime → Arc<InventoryDataset>
///   └──────────┘     └──────────┘
///        │
///        ▼
///   ┌─────────────────┐
///   │ InventoryDataset │  Vec<InventoryRow>, category index
///   └─────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  category selection → row subset
///   └──────────┘
///
///   synth ──► writer   (mock dataset generator)
/// ```

pub mod cache;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod synth;
pub mod writer;
