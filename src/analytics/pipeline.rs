use super::classifier::classify;
use super::forecast::days_until_stockout;
use super::restock::restock_status;
use super::summary::{self, Kpis};
use super::PipelineConfig;
use crate::data::filter::{filter_rows, CategoryFilter};
use crate::data::model::{AnalyzedRow, InventoryDataset, InventoryRow};

// ---------------------------------------------------------------------------
// InventoryAnalysis – everything the dashboard shows for one view
// ---------------------------------------------------------------------------

/// Enriched rows and KPIs for one set of rows in view.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryAnalysis {
    pub rows: Vec<AnalyzedRow>,
    pub kpis: Kpis,
}

impl InventoryAnalysis {
    /// Classify, forecast and alert over `rows`, then aggregate.
    pub fn compute(rows: &[InventoryRow], config: &PipelineConfig) -> Self {
        let classifications = classify(rows, config);

        let rows: Vec<AnalyzedRow> = rows
            .iter()
            .zip(classifications)
            .map(|(row, class)| {
                let runway =
                    days_until_stockout(row.stock_qty, row.avg_daily_sales, config.stockout_sentinel);
                AnalyzedRow {
                    row: row.clone(),
                    cluster: class.cluster,
                    status: class.status,
                    days_until_stockout: runway,
                    restock_status: restock_status(runway, row.lead_time_days, config.warning_factor),
                }
            })
            .collect();

        let kpis = Kpis::from_rows(&rows);
        InventoryAnalysis { rows, kpis }
    }

    /// Filter the dataset by category and analyse what remains. Clustering
    /// only sees the filtered rows.
    pub fn for_view(dataset: &InventoryDataset, filter: &CategoryFilter, config: &PipelineConfig) -> Self {
        let in_view = filter_rows(&dataset.rows, filter);
        log::debug!("Analysing {} of {} rows for {filter}", in_view.len(), dataset.len());
        Self::compute(&in_view, config)
    }

    pub fn top_dead_stock(&self, n: usize) -> Vec<&AnalyzedRow> {
        summary::top_dead_stock(&self.rows, n)
    }

    pub fn clearance_candidates(&self) -> Vec<&AnalyzedRow> {
        summary::clearance_candidates(&self.rows)
    }

    pub fn restock_queue(&self) -> Vec<&AnalyzedRow> {
        summary::restock_queue(&self.rows)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{row, RestockStatus, StockStatus};
    use crate::data::synth::generate_inventory;

    #[test]
    fn small_view_is_all_normal_but_still_forecast() {
        let mut rows = vec![row("A", "Toys", 50, 400), row("B", "Toys", 5, 0)];
        rows[0].avg_daily_sales = Some(0.0);
        rows[1].avg_daily_sales = Some(1.0);
        let analysis = InventoryAnalysis::compute(&rows, &PipelineConfig::default());

        assert!(analysis.rows.iter().all(|r| r.status == StockStatus::Normal));
        assert_eq!(analysis.rows[0].days_until_stockout, 999.0);
        assert_eq!(analysis.rows[0].restock_status, RestockStatus::Healthy);
        assert_eq!(analysis.rows[1].days_until_stockout, 5.0);
        assert_eq!(analysis.rows[1].restock_status, RestockStatus::CriticalLow);
        assert_eq!(analysis.kpis.dead_stock_count, 0);
    }

    #[test]
    fn runway_is_always_defined() {
        let analysis = InventoryAnalysis::compute(&generate_inventory(500, 99), &PipelineConfig::default());
        assert_eq!(analysis.rows.len(), 500);
        for r in &analysis.rows {
            assert!(r.days_until_stockout.is_finite());
            assert!(r.days_until_stockout >= 0.0);
        }
    }

    #[test]
    fn restock_status_matches_runway_and_lead_time() {
        let config = PipelineConfig::default();
        let analysis = InventoryAnalysis::compute(&generate_inventory(300, 5), &config);
        for r in &analysis.rows {
            let lead = r.row.lead_time_days as f64;
            let expected = if r.days_until_stockout < lead {
                RestockStatus::CriticalLow
            } else if r.days_until_stockout < lead * config.warning_factor {
                RestockStatus::Warning
            } else {
                RestockStatus::Healthy
            };
            assert_eq!(r.restock_status, expected, "{:?}", r.row);
        }
    }

    #[test]
    fn wildcard_view_covers_whole_dataset() {
        let ds = InventoryDataset::from_rows(generate_inventory(40, 1));
        let config = PipelineConfig::default();
        let view = InventoryAnalysis::for_view(&ds, &CategoryFilter::All, &config);
        assert_eq!(view, InventoryAnalysis::compute(&ds.rows, &config));
    }

    #[test]
    fn status_is_relative_to_the_filtered_view() {
        let mut rows = Vec::new();
        for (i, days) in [350, 352, 351, 349].into_iter().enumerate() {
            rows.push(row(&format!("HOME-{i}"), "Home", 10 + i as u32, days));
        }
        for (i, days) in [100, 101, 102, 99].into_iter().enumerate() {
            rows.push(row(&format!("TOY-OLD-{i}"), "Toys", 10 + i as u32, days));
        }
        for (i, days) in [5, 6, 4, 3].into_iter().enumerate() {
            rows.push(row(&format!("TOY-NEW-{i}"), "Toys", 10 + i as u32, days));
        }
        let ds = InventoryDataset::from_rows(rows);
        let config = PipelineConfig::default();

        let all = InventoryAnalysis::for_view(&ds, &CategoryFilter::All, &config);
        let toys = InventoryAnalysis::for_view(&ds, &CategoryFilter::Only("Toys".into()), &config);

        let status_of = |analysis: &InventoryAnalysis, sku: &str| {
            analysis
                .rows
                .iter()
                .find(|r| r.row.sku == sku)
                .map(|r| r.status)
        };

        assert_eq!(status_of(&all, "HOME-0"), Some(StockStatus::DeadStock));
        assert_eq!(status_of(&all, "TOY-OLD-0"), Some(StockStatus::SlowMoving));
        assert_eq!(toys.rows.len(), 8);
        assert!((0..4).any(|i| {
            status_of(&toys, &format!("TOY-OLD-{i}")) == Some(StockStatus::DeadStock)
        }));
        assert!((0..4).all(|i| {
            status_of(&toys, &format!("TOY-NEW-{i}")) != Some(StockStatus::DeadStock)
        }));
    }
}
