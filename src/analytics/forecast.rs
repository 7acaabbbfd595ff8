//! Stock runway: days until the current stock sells out.

/// `stock_qty / avg_daily_sales`, or `sentinel` when the rate is zero,
/// negative or unknown. Always finite and non-negative.
pub fn days_until_stockout(stock_qty: u32, avg_daily_sales: Option<f64>, sentinel: f64) -> f64 {
    match avg_daily_sales {
        Some(rate) if rate > 0.0 => {
            let days = stock_qty as f64 / rate;
            if days.is_finite() {
                days
            } else {
                sentinel
            }
        }
        _ => sentinel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENTINEL: f64 = 999.0;

    #[test]
    fn ratio_of_stock_to_sales() {
        assert!((days_until_stockout(50, Some(2.0), SENTINEL) - 25.0).abs() < 1e-12);
        assert_eq!(days_until_stockout(0, Some(4.5), SENTINEL), 0.0);
    }

    #[test]
    fn zero_sales_uses_sentinel() {
        assert_eq!(days_until_stockout(50, Some(0.0), SENTINEL), 999.0);
        assert_eq!(days_until_stockout(0, Some(0.0), SENTINEL), 999.0);
    }

    #[test]
    fn unknown_or_invalid_sales_use_sentinel() {
        assert_eq!(days_until_stockout(50, None, SENTINEL), 999.0);
        assert_eq!(days_until_stockout(50, Some(f64::NAN), SENTINEL), 999.0);
        assert_eq!(days_until_stockout(50, Some(-1.0), SENTINEL), 999.0);
    }

    #[test]
    fn tiny_rates_stay_finite() {
        let days = days_until_stockout(u32::MAX, Some(f64::MIN_POSITIVE), SENTINEL);
        assert_eq!(days, 999.0);
    }
}
