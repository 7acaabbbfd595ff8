mod app;
mod color;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use eframe::egui;

use inventory_insight::analytics::{InventoryAnalysis, PipelineConfig};
use inventory_insight::data::filter::CategoryFilter;
use inventory_insight::data::loader::{load_or_empty, MISSING_DATA_MESSAGE};
use inventory_insight::report::render_report;

use app::InventoryInsightApp;
use state::AppState;

/// Inventory analytics dashboard: dead stock, stock runway and restock alerts.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Inventory file (.csv, .json or .parquet).
    #[arg(short, long, env = "INVENTORY_DATA", default_value = "inventory_data.csv")]
    data: PathBuf,

    /// Category in view ("All" for every category).
    #[arg(short, long, default_value = "All")]
    category: String,

    /// Print a text report to stdout instead of opening the dashboard.
    #[arg(long)]
    report: bool,
}

fn print_report(cli: &Cli) -> Result<()> {
    let dataset = load_or_empty(&cli.data);
    if dataset.is_empty() {
        bail!(MISSING_DATA_MESSAGE);
    }
    let category = CategoryFilter::from_selection(&cli.category);
    let analysis = InventoryAnalysis::for_view(&dataset, &category, &PipelineConfig::default());
    println!("{}", render_report(&analysis, &category)?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.report {
        return print_report(&cli);
    }

    let state = AppState::new(cli.data.clone(), CategoryFilter::from_selection(&cli.category));
    if !state.has_data() {
        log::error!("{MISSING_DATA_MESSAGE} (looked for {})", cli.data.display());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Inventory Insight – Inventory Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(InventoryInsightApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("dashboard exited with an error: {e}"))
}
