//! Stock-health classification.
//!
//! Rows in view are grouped by k-means over (`Stock_Qty`,
//! `Days_Since_Last_Sale`). The group with the highest mean days unsold is
//! dead stock; every other row is hot or slow moving by its own recency.
//! Grouping is relative to the rows passed in, so the same SKU can be
//! labelled differently under different category filters.

use super::kmeans::{KMeans, Point};
use super::PipelineConfig;
use crate::data::model::{InventoryRow, StockStatus};

/// Stock-health result for one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub cluster: Option<usize>,
    pub status: StockStatus,
}

/// Label every row. Views smaller than `min_rows_for_clustering` are `Normal`.
pub fn classify(rows: &[InventoryRow], config: &PipelineConfig) -> Vec<Classification> {
    if rows.len() < config.min_rows_for_clustering {
        return vec![
            Classification {
                cluster: None,
                status: StockStatus::Normal,
            };
            rows.len()
        ];
    }

    let points: Vec<Point> = rows
        .iter()
        .map(|r| [r.stock_qty as f64, r.days_since_last_sale as f64])
        .collect();
    let clustering = KMeans::new(
        config.cluster_count,
        config.cluster_seed,
        config.max_iterations,
    )
    .fit(&points);

    let dead = dead_stock_cluster(rows, &clustering.assignments, config.cluster_count);
    log::debug!(
        "Cluster sizes {:?}, dead stock cluster {dead:?}",
        clustering.sizes()
    );

    rows.iter()
        .zip(&clustering.assignments)
        .map(|(row, &cluster)| {
            let status = if Some(cluster) == dead {
                StockStatus::DeadStock
            } else if row.days_since_last_sale < config.hot_item_days {
                StockStatus::HotItem
            } else {
                StockStatus::SlowMoving
            };
            Classification {
                cluster: Some(cluster),
                status,
            }
        })
        .collect()
}

/// Cluster with the highest mean `Days_Since_Last_Sale`. Empty clusters are
/// skipped; on equal means the lower index wins.
pub fn dead_stock_cluster(rows: &[InventoryRow], assignments: &[usize], k: usize) -> Option<usize> {
    let mut sums = vec![0.0f64; k];
    let mut counts = vec![0usize; k];
    for (row, &c) in rows.iter().zip(assignments) {
        sums[c] += row.days_since_last_sale as f64;
        counts[c] += 1;
    }

    let mut best: Option<(usize, f64)> = None;
    for j in 0..k {
        if counts[j] == 0 {
            continue;
        }
        let mean = sums[j] / counts[j] as f64;
        match best {
            Some((_, best_mean)) if mean <= best_mean => {}
            _ => best = Some((j, mean)),
        }
    }
    best.map(|(j, _)| j)
}
