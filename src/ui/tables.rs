use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use inventory_insight::data::model::AnalyzedRow;

use crate::color::{normalize, restock_color, status_color, Gradient};

const ROW_HEIGHT: f32 = 20.0;

/// One rendered cell: text plus optional background shading.
struct Cell {
    text: String,
    color: Option<Color32>,
    background: Option<Color32>,
}

impl Cell {
    fn plain(text: impl Into<String>) -> Self {
        Cell {
            text: text.into(),
            color: None,
            background: None,
        }
    }

    fn colored(text: impl Into<String>, color: Color32) -> Self {
        Cell {
            color: Some(color),
            ..Cell::plain(text)
        }
    }

    fn shaded(text: impl Into<String>, gradient: Gradient, t: f32) -> Self {
        let (background, color) = gradient.shade(t);
        Cell {
            text: text.into(),
            color: Some(color),
            background: Some(background),
        }
    }
}

fn table(
    ui: &mut Ui,
    id: &str,
    headers: &[&str],
    rows: &[&AnalyzedRow],
    max_height: f32,
    cell: impl Fn(&AnalyzedRow, usize) -> Cell,
) {
    TableBuilder::new(ui)
        .id_salt(id)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(Column::auto().at_least(70.0), headers.len())
        .max_scroll_height(max_height)
        .header(ROW_HEIGHT, |mut header| {
            for h in headers {
                header.col(|ui| {
                    ui.strong(*h);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let r = rows[row.index()];
                for c in 0..headers.len() {
                    row.col(|ui| {
                        let cell = cell(r, c);
                        if let Some(bg) = cell.background {
                            ui.painter().rect_filled(ui.max_rect(), 0.0, bg);
                        }
                        let mut text = RichText::new(cell.text);
                        if let Some(color) = cell.color {
                            text = text.color(color);
                        }
                        ui.label(text);
                    });
                }
            });
        });
}

fn range(rows: &[&AnalyzedRow], value: impl Fn(&AnalyzedRow) -> f64) -> (f64, f64) {
    rows.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &r| {
        let v = value(r);
        (lo.min(v), hi.max(v))
    })
}

/// SKU / stock / days unsold for the largest dead-stock positions.
pub fn top_risk_table(ui: &mut Ui, rows: &[&AnalyzedRow]) {
    table(
        ui,
        "top_risk",
        &["SKU", "Stock_Qty", "Days_Since_Last_Sale"],
        rows,
        260.0,
        |r, c| match c {
            0 => Cell::plain(&r.row.sku),
            1 => Cell::plain(r.row.stock_qty.to_string()),
            _ => Cell::plain(r.row.days_since_last_sale.to_string()),
        },
    );
}

/// Every dead-stock row, days unsold shaded red.
pub fn clearance_table(ui: &mut Ui, rows: &[&AnalyzedRow]) {
    let (lo, hi) = range(rows, |r| r.row.days_since_last_sale as f64);
    table(
        ui,
        "clearance",
        &[
            "SKU",
            "Category",
            "Stock_Qty",
            "Days_Since_Last_Sale",
            "Current_Price",
            "Status",
        ],
        rows,
        320.0,
        |r, c| match c {
            0 => Cell::plain(&r.row.sku),
            1 => Cell::plain(&r.row.category),
            2 => Cell::plain(r.row.stock_qty.to_string()),
            3 => {
                let days = r.row.days_since_last_sale as f64;
                Cell::shaded(days.to_string(), Gradient::Reds, normalize(days, lo, hi))
            }
            4 => Cell::plain(format!("${:.2}", r.row.current_price)),
            _ => Cell::colored(r.status.label(), status_color(r.status)),
        },
    );
}

/// Rows that need reordering, runway shaded from red (short) to pale (long).
pub fn order_table(ui: &mut Ui, rows: &[&AnalyzedRow]) {
    let (lo, hi) = range(rows, |r| r.days_until_stockout);
    table(
        ui,
        "order_list",
        &[
            "SKU",
            "Stock_Qty",
            "Avg_Daily_Sales",
            "Days_Until_Stockout",
            "Restock_Status",
        ],
        rows,
        320.0,
        |r, c| match c {
            0 => Cell::plain(&r.row.sku),
            1 => Cell::plain(r.row.stock_qty.to_string()),
            2 => Cell::plain(
                r.row
                    .avg_daily_sales
                    .map(|v| format!("{v:.1}"))
                    .unwrap_or_else(|| "-".to_string()),
            ),
            3 => Cell::shaded(
                format!("{:.1}", r.days_until_stockout),
                Gradient::OrangeRedReversed,
                normalize(r.days_until_stockout, lo, hi),
            ),
            _ => Cell::colored(r.restock_status.label(), restock_color(r.restock_status)),
        },
    );
}
