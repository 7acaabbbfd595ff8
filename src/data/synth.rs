//! Mock inventory generator used by the `generate_inventory` binary.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::model::InventoryRow;

pub const DEFAULT_ROWS: usize = 500;
pub const DEFAULT_SEED: u64 = 99;

const CATEGORIES: [&str; 5] = ["Electronics", "Fashion", "Home", "Beauty", "Toys"];

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Daily sales rate correlated with how long ago the item last sold.
fn sales_rate(days_since_last_sale: u32, rng: &mut StdRng) -> f64 {
    if days_since_last_sale > 60 {
        rng.gen_range(0.0..0.5)
    } else if days_since_last_sale < 10 {
        rng.gen_range(2.0..10.0)
    } else {
        rng.gen_range(0.5..3.0)
    }
}

/// Generate `n` synthetic SKUs. The same seed always yields the same rows.
pub fn generate_inventory(n: usize, seed: u64) -> Vec<InventoryRow> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..n)
        .map(|i| {
            let category = CATEGORIES[rng.gen_range(0..CATEGORIES.len())];
            let stock_qty = rng.gen_range(0..300);
            let days_since_last_sale = rng.gen_range(0..365);
            let cost_price = round_to(rng.gen_range(50.0..2000.0), 2);
            let lead_time_days = rng.gen_range(7..45);
            let markup: f64 = rng.gen_range(1.3..1.8);
            let avg_daily_sales = round_to(sales_rate(days_since_last_sale, &mut rng), 1);

            InventoryRow {
                sku: format!("ITEM-{i:04}"),
                category: category.to_string(),
                stock_qty,
                days_since_last_sale,
                cost_price,
                lead_time_days,
                current_price: round_to(cost_price * markup, 2),
                avg_daily_sales: Some(avg_daily_sales),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_rows() {
        assert_eq!(generate_inventory(50, 7), generate_inventory(50, 7));
        assert_ne!(generate_inventory(50, 7), generate_inventory(50, 8));
    }

    #[test]
    fn fields_stay_in_documented_ranges() {
        for r in generate_inventory(DEFAULT_ROWS, DEFAULT_SEED) {
            assert!(r.stock_qty < 300);
            assert!(r.days_since_last_sale < 365);
            assert!((7..45).contains(&r.lead_time_days));
            assert!((50.0..=2000.0).contains(&r.cost_price));
            assert!(r.current_price >= r.cost_price * 1.3 - 0.01);
            assert!(r.current_price <= r.cost_price * 1.8 + 0.01);
            assert!(CATEGORIES.contains(&r.category.as_str()));
        }
    }

    #[test]
    fn sales_rate_follows_recency_bands() {
        for r in generate_inventory(DEFAULT_ROWS, DEFAULT_SEED) {
            let sales = r.avg_daily_sales.unwrap();
            if r.days_since_last_sale > 60 {
                assert!((0.0..=0.5).contains(&sales), "{r:?}");
            } else if r.days_since_last_sale < 10 {
                assert!((2.0..=10.0).contains(&sales), "{r:?}");
            } else {
                assert!((0.5..=3.0).contains(&sales), "{r:?}");
            }
        }
    }

    #[test]
    fn skus_are_zero_padded_and_sequential() {
        let rows = generate_inventory(12, DEFAULT_SEED);
        assert_eq!(rows[0].sku, "ITEM-0000");
        assert_eq!(rows[11].sku, "ITEM-0011");
    }
}
