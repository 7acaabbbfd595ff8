use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type, Int64Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::error::{DataError, Result};
use super::model::{InventoryDataset, InventoryRow};

/// Shown instead of the dashboard/report when no rows could be loaded.
pub const MISSING_DATA_MESSAGE: &str = "Data not found! Please run 'generate_inventory' first.";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load an inventory dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the eight inventory columns
/// * `.json`    – `[{ "SKU": "...", "Category": "...", ... }, ...]`
/// * `.parquet` – flat columns with the same names
pub fn load_file(path: &Path) -> Result<InventoryDataset> {
    if !path.is_file() {
        return Err(DataError::NotFound(path.to_path_buf()));
    }

    let ext = extension(path);
    let rows = match ext.as_str() {
        "csv" => load_csv(File::open(path)?)?,
        "json" => load_json(BufReader::new(File::open(path)?))?,
        "parquet" | "pq" => load_parquet(File::open(path)?)?,
        other => return Err(DataError::UnsupportedFormat(other.to_string())),
    };

    Ok(InventoryDataset::from_rows(rows))
}

/// Load a dataset, turning every failure into an empty dataset.
///
/// Callers check `is_empty()` and stop; the reason is only logged.
pub fn load_or_empty(path: &Path) -> InventoryDataset {
    match load_file(path) {
        Ok(dataset) => {
            log::info!(
                "Loaded {} SKUs in {} categories from {}",
                dataset.len(),
                dataset.categories.len(),
                path.display()
            );
            dataset
        }
        Err(DataError::NotFound(p)) => {
            log::warn!("Inventory file {} does not exist", p.display());
            InventoryDataset::empty()
        }
        Err(e) => {
            log::error!("Failed to load {}: {e}", path.display());
            InventoryDataset::empty()
        }
    }
}

pub(crate) fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Parse CSV with a header row. Empty `Avg_Daily_Sales` cells become `None`.
pub fn load_csv<R: Read>(reader: R) -> Result<Vec<InventoryRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.deserialize() {
        let row: InventoryRow = result?;
        rows.push(row);
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON (`df.to_json(orient='records')`).
pub fn load_json<R: Read>(reader: R) -> Result<Vec<InventoryRow>> {
    Ok(serde_json::from_reader(reader)?)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one flat column per inventory field.
///
/// Integer columns may be any Arrow integer width and decimal columns any
/// float width; everything is normalised with an Arrow cast.  Works with
/// files written by both Pandas and Polars.
pub fn load_parquet(file: File) -> Result<Vec<InventoryRow>> {
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;

    let mut rows = Vec::new();
    for batch_result in reader {
        let batch = batch_result?;
        let offset = rows.len();
        rows.extend(rows_from_batch(&batch, offset)?);
    }
    Ok(rows)
}

fn rows_from_batch(batch: &RecordBatch, offset: usize) -> Result<Vec<InventoryRow>> {
    let sku = string_values(batch, "SKU", offset)?;
    let category = string_values(batch, "Category", offset)?;
    let stock_qty = u32_values(batch, "Stock_Qty", offset)?;
    let days = u32_values(batch, "Days_Since_Last_Sale", offset)?;
    let cost_price = required_f64(batch, "Cost_Price", offset)?;
    let lead_time = u32_values(batch, "Lead_Time_Days", offset)?;
    let current_price = required_f64(batch, "Current_Price", offset)?;
    let avg_sales = f64_values(batch, "Avg_Daily_Sales")?;

    let rows = (0..batch.num_rows())
        .map(|i| InventoryRow {
            sku: sku[i].clone(),
            category: category[i].clone(),
            stock_qty: stock_qty[i],
            days_since_last_sale: days[i],
            cost_price: cost_price[i],
            lead_time_days: lead_time[i],
            current_price: current_price[i],
            avg_daily_sales: avg_sales[i],
        })
        .collect();
    Ok(rows)
}

// -- Arrow column helpers --

fn column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a ArrayRef> {
    batch
        .column_by_name(name)
        .ok_or_else(|| DataError::MissingColumn(name.to_string()))
}

fn type_error(name: &str, col: &ArrayRef) -> DataError {
    DataError::ColumnType {
        column: name.to_string(),
        data_type: format!("{:?}", col.data_type()),
    }
}

fn string_values(batch: &RecordBatch, name: &str, offset: usize) -> Result<Vec<String>> {
    let col = column(batch, name)?;
    if !matches!(col.data_type(), DataType::Utf8 | DataType::LargeUtf8) {
        return Err(type_error(name, col));
    }
    let utf8 = cast(col, &DataType::Utf8)?;
    utf8.as_string::<i32>()
        .iter()
        .enumerate()
        .map(|(i, v)| {
            v.map(str::to_string).ok_or_else(|| DataError::NullValue {
                row: offset + i,
                column: name.to_string(),
            })
        })
        .collect()
}

fn f64_values(batch: &RecordBatch, name: &str) -> Result<Vec<Option<f64>>> {
    let col = column(batch, name)?;
    if !col.data_type().is_numeric() {
        return Err(type_error(name, col));
    }
    let floats = cast(col, &DataType::Float64)?;
    Ok(floats.as_primitive::<Float64Type>().iter().collect())
}

fn required_f64(batch: &RecordBatch, name: &str, offset: usize) -> Result<Vec<f64>> {
    f64_values(batch, name)?
        .into_iter()
        .enumerate()
        .map(|(i, v)| {
            v.ok_or_else(|| DataError::NullValue {
                row: offset + i,
                column: name.to_string(),
            })
        })
        .collect()
}

fn u32_values(batch: &RecordBatch, name: &str, offset: usize) -> Result<Vec<u32>> {
    let col = column(batch, name)?;
    if !col.data_type().is_numeric() {
        return Err(type_error(name, col));
    }
    let ints = cast(col, &DataType::Int64)?;
    ints.as_primitive::<Int64Type>()
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let v = v.ok_or_else(|| DataError::NullValue {
                row: offset + i,
                column: name.to_string(),
            })?;
            u32::try_from(v).map_err(|_| DataError::OutOfRange {
                row: offset + i,
                column: name.to_string(),
                value: v.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
SKU,Category,Stock_Qty,Days_Since_Last_Sale,Cost_Price,Lead_Time_Days,Current_Price,Avg_Daily_Sales
ITEM-0000,Electronics,120,5,250.00,14,400.50,6.2
ITEM-0001,Fashion,0,200,80.10,30,110.00,0.0
ITEM-0002,Home,45,40,1200.99,7,1700.00,
";

    #[test]
    fn load_sample_csv() {
        let rows = load_csv(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].sku, "ITEM-0000");
        assert_eq!(rows[0].category, "Electronics");
        assert_eq!(rows[0].stock_qty, 120);
        assert_eq!(rows[0].lead_time_days, 14);
        assert!((rows[0].current_price - 400.50).abs() < 1e-9);
        assert_eq!(rows[1].avg_daily_sales, Some(0.0));
        assert_eq!(rows[2].avg_daily_sales, None);
    }

    #[test]
    fn csv_with_missing_column_is_an_error() {
        let csv_data = "SKU,Category,Stock_Qty\nA,Toys,3\n";
        assert!(matches!(
            load_csv(csv_data.as_bytes()),
            Err(DataError::Csv(_))
        ));
    }

    #[test]
    fn load_records_json() {
        let json = r#"[
            {"SKU": "A", "Category": "Toys", "Stock_Qty": 3, "Days_Since_Last_Sale": 12,
             "Cost_Price": 10.0, "Lead_Time_Days": 9, "Current_Price": 14.0, "Avg_Daily_Sales": null}
        ]"#;
        let rows = load_json(json.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].days_since_last_sale, 12);
        assert_eq!(rows[0].avg_daily_sales, None);
    }

    #[test]
    fn missing_file_yields_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory_data.csv");
        assert!(matches!(load_file(&path), Err(DataError::NotFound(_))));
        assert!(load_or_empty(&path).is_empty());
    }

    #[test]
    fn unsupported_extension_is_swallowed_into_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.xlsx");
        std::fs::write(&path, b"not really a spreadsheet").unwrap();
        assert!(matches!(
            load_file(&path),
            Err(DataError::UnsupportedFormat(ext)) if ext == "xlsx"
        ));
        assert!(load_or_empty(&path).is_empty());
    }

    #[test]
    fn load_file_builds_category_index() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory_data.csv");
        std::fs::write(&path, SAMPLE_CSV).unwrap();
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.categories.len(), 3);
    }
}
