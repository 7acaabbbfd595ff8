use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use super::error::{DataError, Result};
use super::loader::extension;
use super::model::InventoryRow;

/// Write rows to `path`, choosing the format from the extension
/// (`.csv`, `.json`, `.parquet` / `.pq`).
pub fn write_file(path: &Path, rows: &[InventoryRow]) -> Result<()> {
    match extension(path).as_str() {
        "csv" => write_csv(File::create(path)?, rows),
        "json" => write_json(BufWriter::new(File::create(path)?), rows),
        "parquet" | "pq" => write_parquet(File::create(path)?, rows),
        other => Err(DataError::UnsupportedFormat(other.to_string())),
    }
}

pub fn write_csv<W: Write>(writer: W, rows: &[InventoryRow]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(mut writer: W, rows: &[InventoryRow]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, rows)?;
    writer.flush()?;
    Ok(())
}

/// Arrow schema used for Parquet output. Only `Avg_Daily_Sales` is nullable.
pub fn inventory_schema() -> Schema {
    Schema::new(vec![
        Field::new("SKU", DataType::Utf8, false),
        Field::new("Category", DataType::Utf8, false),
        Field::new("Stock_Qty", DataType::Int64, false),
        Field::new("Days_Since_Last_Sale", DataType::Int64, false),
        Field::new("Cost_Price", DataType::Float64, false),
        Field::new("Lead_Time_Days", DataType::Int64, false),
        Field::new("Current_Price", DataType::Float64, false),
        Field::new("Avg_Daily_Sales", DataType::Float64, true),
    ])
}

pub fn write_parquet(file: File, rows: &[InventoryRow]) -> Result<()> {
    let schema = Arc::new(inventory_schema());
    let int_column = |f: fn(&InventoryRow) -> u32| -> ArrayRef {
        Arc::new(Int64Array::from_iter_values(
            rows.iter().map(|r| f(r) as i64),
        ))
    };

    let columns: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.sku.as_str()))),
        Arc::new(StringArray::from_iter_values(
            rows.iter().map(|r| r.category.as_str()),
        )),
        int_column(|r| r.stock_qty),
        int_column(|r| r.days_since_last_sale),
        Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.cost_price))),
        int_column(|r| r.lead_time_days),
        Arc::new(Float64Array::from_iter_values(
            rows.iter().map(|r| r.current_price),
        )),
        Arc::new(Float64Array::from(
            rows.iter().map(|r| r.avg_daily_sales).collect::<Vec<_>>(),
        )),
    ];

    let batch = RecordBatch::try_new(schema.clone(), columns)?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_file;
    use crate::data::model::row;

    fn sample_rows() -> Vec<InventoryRow> {
        let mut rows = vec![row("ITEM-0000", "Toys", 12, 3), row("ITEM-0001", "Home", 0, 90)];
        rows[1].avg_daily_sales = None;
        rows
    }

    #[test]
    fn parquet_output_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.parquet");
        write_file(&path, &sample_rows()).unwrap();
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.rows, sample_rows());
    }

    #[test]
    fn csv_output_keeps_headers_and_empty_sales() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &sample_rows()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(header, crate::data::model::COLUMNS.join(","));
        assert!(text.lines().nth(2).unwrap().ends_with(','));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.txt");
        assert!(matches!(
            write_file(&path, &sample_rows()),
            Err(DataError::UnsupportedFormat(_))
        ));
    }
}
