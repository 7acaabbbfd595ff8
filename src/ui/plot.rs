use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, LineStyle, Plot, Points, VLine};

use inventory_insight::analytics::summary::RUNWAY_CHART_ROWS;
use inventory_insight::data::model::{AnalyzedRow, RestockStatus, StockStatus};

use crate::color::{restock_color, status_color};

/// Lead time marked on the runway chart.
const REFERENCE_LEAD_TIME_DAYS: f64 = 7.0;

// ---------------------------------------------------------------------------
// Stock aging scatter (dead stock tab)
// ---------------------------------------------------------------------------

/// Days unsold vs. stock level, one bubble per SKU sized by price and
/// coloured by status.
pub fn aging_scatter(ui: &mut Ui, rows: &[AnalyzedRow]) {
    let max_price = rows
        .iter()
        .map(|r| r.row.current_price)
        .fold(0.0f64, f64::max);

    Plot::new("aging_scatter")
        .legend(Legend::default())
        .height(450.0)
        .x_axis_label("Days Unsold")
        .y_axis_label("Stock Level")
        .label_formatter(|name, value| {
            if name.is_empty() {
                String::new()
            } else {
                format!("{name}\nDays unsold: {:.0}\nStock: {:.0}", value.x, value.y)
            }
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // Series are grouped by status so the legend has one entry each.
            for status in StockStatus::ALL {
                for r in rows.iter().filter(|r| r.status == status) {
                    let radius = if max_price > 0.0 {
                        2.0 + 8.0 * (r.row.current_price / max_price).sqrt() as f32
                    } else {
                        3.0
                    };
                    let point = vec![[
                        r.row.days_since_last_sale as f64,
                        r.row.stock_qty as f64,
                    ]];
                    plot_ui.points(
                        Points::new(point)
                            .name(status.label())
                            .color(status_color(status).gamma_multiply(0.8))
                            .filled(true)
                            .radius(radius),
                    );
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Stock runway bars (forecast tab)
// ---------------------------------------------------------------------------

/// Horizontal bars of days-until-stockout for the most urgent SKUs, most
/// urgent at the top, with the reference lead time marked.
pub fn runway_chart(ui: &mut Ui, queue: &[&AnalyzedRow]) {
    let shown: Vec<&AnalyzedRow> = queue.iter().take(RUNWAY_CHART_ROWS).copied().collect();
    let n = shown.len();
    let labels: Vec<String> = shown.iter().rev().map(|r| r.row.sku.clone()).collect();

    let chart_for = |status: RestockStatus| {
        let bars: Vec<Bar> = shown
            .iter()
            .enumerate()
            .filter(|(_, r)| r.restock_status == status)
            .map(|(i, r)| {
                Bar::new((n - 1 - i) as f64, r.days_until_stockout)
                    .name(format!("{} ({:.1} days)", r.row.sku, r.days_until_stockout))
                    .width(0.7)
            })
            .collect();
        BarChart::new(bars)
            .horizontal()
            .color(restock_color(status))
            .name(status.label())
    };
    let critical = chart_for(RestockStatus::CriticalLow);
    let warning = chart_for(RestockStatus::Warning);

    Plot::new("runway_chart")
        .legend(Legend::default())
        .height(380.0)
        .x_axis_label("Days Until Stockout")
        .y_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(critical);
            plot_ui.bar_chart(warning);
            plot_ui.vline(
                VLine::new(REFERENCE_LEAD_TIME_DAYS)
                    .name("Lead Time (7 Days)")
                    .style(LineStyle::dashed_loose())
                    .width(1.5),
            );
        });
}
