use crate::data::model::{AnalyzedRow, RestockStatus, StockStatus};

/// Rows shown in the "top risk" table.
pub const TOP_RISK_ROWS: usize = 8;
/// Rows shown in the runway chart.
pub const RUNWAY_CHART_ROWS: usize = 10;

/// Headline numbers for the KPI cards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Kpis {
    pub total_skus: usize,
    pub dead_stock_count: usize,
    pub critical_restock_count: usize,
    /// Σ Stock_Qty × Cost_Price over the rows in view.
    pub total_inventory_value: f64,
}

impl Kpis {
    pub fn from_rows(rows: &[AnalyzedRow]) -> Self {
        Kpis {
            total_skus: rows.len(),
            dead_stock_count: rows
                .iter()
                .filter(|r| r.status == StockStatus::DeadStock)
                .count(),
            critical_restock_count: rows
                .iter()
                .filter(|r| r.restock_status == RestockStatus::CriticalLow)
                .count(),
            total_inventory_value: rows.iter().map(AnalyzedRow::inventory_value).sum(),
        }
    }
}

/// Dead-stock rows with the most units on hand, largest first.
pub fn top_dead_stock(rows: &[AnalyzedRow], n: usize) -> Vec<&AnalyzedRow> {
    let mut dead = clearance_candidates(rows);
    dead.sort_by(|a, b| b.row.stock_qty.cmp(&a.row.stock_qty));
    dead.truncate(n);
    dead
}

/// Every dead-stock row, in input order.
pub fn clearance_candidates(rows: &[AnalyzedRow]) -> Vec<&AnalyzedRow> {
    rows.iter()
        .filter(|r| r.status == StockStatus::DeadStock)
        .collect()
}

/// Rows that need reordering, shortest runway first.
pub fn restock_queue(rows: &[AnalyzedRow]) -> Vec<&AnalyzedRow> {
    let mut queue: Vec<&AnalyzedRow> = rows
        .iter()
        .filter(|r| r.restock_status != RestockStatus::Healthy)
        .collect();
    queue.sort_by(|a, b| a.days_until_stockout.total_cmp(&b.days_until_stockout));
    queue
}
