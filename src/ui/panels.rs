use eframe::egui::{self, Color32, RichText, Ui};

use inventory_insight::data::filter::CategoryFilter;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – category filter
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Inventory Insight");
    ui.label(RichText::new("Stock health, runway and restock alerts").weak());
    ui.separator();

    ui.strong("Filters");
    if !state.has_data() {
        ui.label("No dataset loaded.");
        return;
    }

    let current = state.category.to_string();
    let mut selected: Option<CategoryFilter> = None;
    egui::ComboBox::from_id_salt("category")
        .selected_text(&current)
        .show_ui(ui, |ui: &mut Ui| {
            for option in &state.category_options {
                if ui.selectable_label(current == *option, option).clicked() {
                    selected = Some(CategoryFilter::from_selection(option));
                }
            }
        });
    if let Some(category) = selected {
        state.set_category(category);
    }

    ui.add_space(12.0);
    ui.label(
        RichText::new(
            "Tip: switch tabs to move between clearance planning and restock planning.",
        )
        .italics(),
    );
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.force_reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if state.has_data() {
            ui.label(format!(
                "{} SKUs loaded, {} in view",
                state.dataset.len(),
                state.analysis.rows.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open inventory data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        log::info!("Opening {}", path.display());
        state.open(&path);
    }
}
