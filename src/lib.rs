//! Inventory analytics: load a SKU table, derive stock health, runway and
//! restock urgency, and summarise the result for the dashboard and the
//! text report.

pub mod analytics;
pub mod data;
pub mod report;
