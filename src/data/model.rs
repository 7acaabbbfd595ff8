use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// InventoryRow – one SKU as read from the input file
// ---------------------------------------------------------------------------

/// A single stock-keeping unit (one row of the input table).
///
/// Field names serialize to the column headers used by the input file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRow {
    #[serde(rename = "SKU")]
    pub sku: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Stock_Qty")]
    pub stock_qty: u32,
    #[serde(rename = "Days_Since_Last_Sale")]
    pub days_since_last_sale: u32,
    #[serde(rename = "Cost_Price")]
    pub cost_price: f64,
    /// Days needed to receive a new shipment after reordering.
    #[serde(rename = "Lead_Time_Days")]
    pub lead_time_days: u32,
    #[serde(rename = "Current_Price")]
    pub current_price: f64,
    /// `None` when the cell is empty or null in the source file.
    #[serde(rename = "Avg_Daily_Sales")]
    pub avg_daily_sales: Option<f64>,
}

/// Column headers in file order.
pub const COLUMNS: [&str; 8] = [
    "SKU",
    "Category",
    "Stock_Qty",
    "Days_Since_Last_Sale",
    "Cost_Price",
    "Lead_Time_Days",
    "Current_Price",
    "Avg_Daily_Sales",
];

impl InventoryRow {
    /// Capital tied up in this SKU at cost.
    pub fn inventory_value(&self) -> f64 {
        self.stock_qty as f64 * self.cost_price
    }
}

// ---------------------------------------------------------------------------
// Derived labels
// ---------------------------------------------------------------------------

/// Stock-health label assigned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StockStatus {
    DeadStock,
    HotItem,
    SlowMoving,
    /// Too few rows in view to cluster.
    Normal,
}

impl StockStatus {
    pub const ALL: [StockStatus; 4] = [
        StockStatus::DeadStock,
        StockStatus::HotItem,
        StockStatus::SlowMoving,
        StockStatus::Normal,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StockStatus::DeadStock => "Dead Stock",
            StockStatus::HotItem => "Hot Item",
            StockStatus::SlowMoving => "Slow Moving",
            StockStatus::Normal => "Normal",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Restock urgency derived from runway vs. lead time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RestockStatus {
    CriticalLow,
    Warning,
    Healthy,
}

impl RestockStatus {
    pub fn label(self) -> &'static str {
        match self {
            RestockStatus::CriticalLow => "Critical Low",
            RestockStatus::Warning => "Warning",
            RestockStatus::Healthy => "Healthy",
        }
    }
}

impl fmt::Display for RestockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// AnalyzedRow – a row enriched by the analytics pipeline
// ---------------------------------------------------------------------------

/// An [`InventoryRow`] together with everything the pipeline derives from it.
/// Recomputed on every load/filter change, never written back.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedRow {
    pub row: InventoryRow,
    /// Cluster index; `None` when the view was too small to cluster.
    pub cluster: Option<usize>,
    pub status: StockStatus,
    /// Days of stock left at the current sales rate (sentinel when unknown).
    pub days_until_stockout: f64,
    pub restock_status: RestockStatus,
}

impl AnalyzedRow {
    pub fn inventory_value(&self) -> f64 {
        self.row.inventory_value()
    }
}

// ---------------------------------------------------------------------------
// InventoryDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with a pre-computed category index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryDataset {
    pub rows: Vec<InventoryRow>,
    /// Sorted distinct `Category` values.
    pub categories: BTreeSet<String>,
}

impl InventoryDataset {
    /// Build the category index from the loaded rows.
    pub fn from_rows(rows: Vec<InventoryRow>) -> Self {
        let categories = rows.iter().map(|r| r.category.clone()).collect();
        InventoryDataset { rows, categories }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of SKUs.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn row(sku: &str, category: &str, stock_qty: u32, days: u32) -> InventoryRow {
    InventoryRow {
        sku: sku.to_string(),
        category: category.to_string(),
        stock_qty,
        days_since_last_sale: days,
        cost_price: 100.0,
        lead_time_days: 7,
        current_price: 150.0,
        avg_daily_sales: Some(1.0),
    }
}
