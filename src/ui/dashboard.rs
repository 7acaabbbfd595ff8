use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use inventory_insight::analytics::summary::TOP_RISK_ROWS;
use inventory_insight::data::loader::MISSING_DATA_MESSAGE;
use inventory_insight::report::{currency, thousands};

use crate::state::{AppState, Tab};
use crate::ui::{plot, tables};

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Render KPIs and the active tab. Without data only the error is shown.
pub fn central_panel(ui: &mut Ui, state: &mut AppState) {
    if !state.has_data() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading(RichText::new(MISSING_DATA_MESSAGE).color(Color32::RED));
        });
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Enterprise Inventory Dashboard");
            ui.label("Stock aging, runway and restock analysis for the selected category.");
            ui.add_space(8.0);

            kpi_row(ui, state);
            ui.separator();

            ui.horizontal(|ui: &mut Ui| {
                ui.selectable_value(&mut state.active_tab, Tab::DeadStock, "Dead Stock & Clearance");
                ui.selectable_value(&mut state.active_tab, Tab::Forecast, "Forecasting & Restock");
            });
            ui.separator();

            match state.active_tab {
                Tab::DeadStock => dead_stock_tab(ui, state),
                Tab::Forecast => forecast_tab(ui, state),
            }
        });
}

// ---------------------------------------------------------------------------
// KPI cards
// ---------------------------------------------------------------------------

fn kpi_card(ui: &mut Ui, title: &str, value: String, note: Option<&str>) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_min_width(ui.available_width());
        ui.label(RichText::new(title).weak());
        ui.label(RichText::new(value).size(24.0).strong());
        if let Some(note) = note {
            ui.label(RichText::new(note).small().color(Color32::RED));
        }
    });
}

fn kpi_row(ui: &mut Ui, state: &AppState) {
    let kpis = state.analysis.kpis;
    ui.columns(4, |cols| {
        kpi_card(&mut cols[0], "Total SKUs", thousands(kpis.total_skus as u64), None);
        kpi_card(&mut cols[1], "Dead Stock Items", kpis.dead_stock_count.to_string(), None);
        kpi_card(
            &mut cols[2],
            "Critical Restock",
            kpis.critical_restock_count.to_string(),
            (kpis.critical_restock_count > 0).then_some("Urgent"),
        );
        kpi_card(
            &mut cols[3],
            "Total Inventory Value",
            currency(kpis.total_inventory_value),
            None,
        );
    });
}

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

fn dead_stock_tab(ui: &mut Ui, state: &AppState) {
    let analysis = &state.analysis;
    ui.strong("Inventory Health Map");

    ui.columns(2, |cols| {
        cols[0].label(format!("Stock Aging Analysis ({})", state.category));
        plot::aging_scatter(&mut cols[0], &analysis.rows);

        cols[1].strong("Top Risk Items");
        tables::top_risk_table(&mut cols[1], &analysis.top_dead_stock(TOP_RISK_ROWS));
    });

    ui.add_space(8.0);
    ui.strong("Clearance Campaign Candidates");
    tables::clearance_table(ui, &analysis.clearance_candidates());
}

fn forecast_tab(ui: &mut Ui, state: &AppState) {
    ui.strong("Demand Forecasting & Replenishment");

    let queue = state.analysis.restock_queue();
    if queue.is_empty() {
        ui.label(
            RichText::new("All stock levels are healthy! No restock needed.")
                .color(Color32::from_rgb(0x00, 0xCC, 0x96)),
        );
        return;
    }

    ui.label("Stock Runway: Days Left Before Stockout");
    plot::runway_chart(ui, &queue);

    ui.add_space(8.0);
    ui.strong("Recommended Order List");
    tables::order_table(ui, &queue);
}
