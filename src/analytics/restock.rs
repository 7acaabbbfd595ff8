use crate::data::model::RestockStatus;

/// Compare runway against supplier lead time.
///
/// * runway < lead time                   → `CriticalLow`
/// * runway < lead time × `warning_factor` → `Warning`
/// * otherwise                            → `Healthy`
pub fn restock_status(days_until_stockout: f64, lead_time_days: u32, warning_factor: f64) -> RestockStatus {
    let lead = lead_time_days as f64;
    if days_until_stockout < lead {
        RestockStatus::CriticalLow
    } else if days_until_stockout < lead * warning_factor {
        RestockStatus::Warning
    } else {
        RestockStatus::Healthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_against_a_week_of_lead_time() {
        assert_eq!(restock_status(5.0, 7, 1.5), RestockStatus::CriticalLow);
        assert_eq!(restock_status(10.0, 7, 1.5), RestockStatus::Warning);
        assert_eq!(restock_status(12.0, 7, 1.5), RestockStatus::Healthy);
    }

    #[test]
    fn boundaries_are_exclusive() {
        assert_eq!(restock_status(7.0, 7, 1.5), RestockStatus::Warning);
        assert_eq!(restock_status(10.5, 7, 1.5), RestockStatus::Healthy);
    }

    #[test]
    fn sentinel_runway_is_healthy() {
        assert_eq!(restock_status(999.0, 44, 1.5), RestockStatus::Healthy);
    }
}
