//! Plain-text rendering of an analysis, for `inventory-insight --report`.

use std::fmt::Write as _;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;

use crate::analytics::summary::TOP_RISK_ROWS;
use crate::analytics::InventoryAnalysis;
use crate::data::filter::CategoryFilter;
use crate::data::model::AnalyzedRow;

/// Group digits in threes: `1234567` → `"1,234,567"`.
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-dollar amount with digit grouping: `1250.4` → `"$1,250"`.
pub fn currency(value: f64) -> String {
    let rounded = value.round();
    if rounded < 0.0 {
        format!("-${}", thousands((-rounded) as u64))
    } else {
        format!("${}", thousands(rounded as u64))
    }
}

enum Col {
    Text(Vec<String>),
    Int(Vec<i64>),
}

fn table(columns: Vec<(&str, Col)>) -> Result<String> {
    let mut fields = Vec::with_capacity(columns.len());
    let mut arrays: Vec<ArrayRef> = Vec::with_capacity(columns.len());
    for (name, col) in columns {
        match col {
            Col::Text(values) => {
                fields.push(Field::new(name, DataType::Utf8, false));
                arrays.push(Arc::new(StringArray::from(values)));
            }
            Col::Int(values) => {
                fields.push(Field::new(name, DataType::Int64, false));
                arrays.push(Arc::new(Int64Array::from(values)));
            }
        }
    }
    let batch = RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)
        .context("building report table")?;
    Ok(pretty_format_batches(&[batch])
        .context("formatting report table")?
        .to_string())
}

fn text<F: Fn(&AnalyzedRow) -> String>(rows: &[&AnalyzedRow], f: F) -> Col {
    Col::Text(rows.iter().map(|&r| f(r)).collect())
}

fn int<F: Fn(&AnalyzedRow) -> u32>(rows: &[&AnalyzedRow], f: F) -> Col {
    Col::Int(rows.iter().map(|&r| f(r) as i64).collect())
}

/// Render KPIs plus the clearance and restock tables for one view.
pub fn render_report(analysis: &InventoryAnalysis, category: &CategoryFilter) -> Result<String> {
    let kpis = &analysis.kpis;
    let mut out = String::new();

    writeln!(out, "Inventory report ({category})")?;
    out.push_str(&table(vec![
        (
            "Metric",
            Col::Text(
                [
                    "Total SKUs",
                    "Dead Stock Items",
                    "Critical Restock",
                    "Total Inventory Value",
                ]
                .map(String::from)
                .to_vec(),
            ),
        ),
        (
            "Value",
            Col::Text(vec![
                thousands(kpis.total_skus as u64),
                kpis.dead_stock_count.to_string(),
                kpis.critical_restock_count.to_string(),
                currency(kpis.total_inventory_value),
            ]),
        ),
    ])?);

    let top = analysis.top_dead_stock(TOP_RISK_ROWS);
    writeln!(out, "\n\nTop risk items")?;
    out.push_str(&table(vec![
        ("SKU", text(&top, |r| r.row.sku.clone())),
        ("Stock_Qty", int(&top, |r| r.row.stock_qty)),
        ("Days_Since_Last_Sale", int(&top, |r| r.row.days_since_last_sale)),
    ])?);

    let clearance = analysis.clearance_candidates();
    writeln!(out, "\n\nClearance campaign candidates")?;
    out.push_str(&table(vec![
        ("SKU", text(&clearance, |r| r.row.sku.clone())),
        ("Category", text(&clearance, |r| r.row.category.clone())),
        ("Stock_Qty", int(&clearance, |r| r.row.stock_qty)),
        ("Days_Since_Last_Sale", int(&clearance, |r| r.row.days_since_last_sale)),
        ("Current_Price", text(&clearance, |r| format!("${:.2}", r.row.current_price))),
        ("Status", text(&clearance, |r| r.status.to_string())),
    ])?);

    let queue = analysis.restock_queue();
    writeln!(out, "\n\nRecommended order list")?;
    if queue.is_empty() {
        writeln!(out, "All stock levels are healthy! No restock needed.")?;
    } else {
        out.push_str(&table(vec![
            ("SKU", text(&queue, |r| r.row.sku.clone())),
            ("Stock_Qty", int(&queue, |r| r.row.stock_qty)),
            (
                "Avg_Daily_Sales",
                text(&queue, |r| match r.row.avg_daily_sales {
                    Some(v) => format!("{v:.1}"),
                    None => "-".to_string(),
                }),
            ),
            ("Days_Until_Stockout", text(&queue, |r| format!("{:.1}", r.days_until_stockout))),
            ("Restock_Status", text(&queue, |r| r.restock_status.to_string())),
        ])?);
        out.push('\n');
    }

    Ok(out)
}
