use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use inventory_insight::data::model::COLUMNS;
use inventory_insight::data::synth::{generate_inventory, DEFAULT_ROWS, DEFAULT_SEED};
use inventory_insight::data::writer::write_file;

/// Generate a reproducible mock inventory for the dashboard.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of SKUs to generate.
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// RNG seed; the same seed always produces the same file.
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Output file; the extension picks the format (.csv, .json, .parquet).
    #[arg(short, long, default_value = "inventory_data.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    log::info!("Generating {} SKUs with seed {}", args.rows, args.seed);
    let rows = generate_inventory(args.rows, args.seed);

    write_file(&args.output, &rows)
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!(
        "Wrote {} SKUs to {} (columns: {})",
        rows.len(),
        args.output.display(),
        COLUMNS.join(", ")
    );
    Ok(())
}
