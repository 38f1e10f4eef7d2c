use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{
    Array, Float32Array, Float64Array, Int32Array, Int64Array, LargeStringArray, StringArray,
};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::error::DashboardError;
use super::model::{StadiumRecord, StadiumTable};

/// Columns every source must provide.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "stadium",
    "conference",
    "capacity",
    "built",
    "latitude",
    "longitude",
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the stadium table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row, one stadium per line (the usual source)
/// * `.json`    – `[{ "stadium": "...", "conference": "...", ... }, ...]`
/// * `.parquet` – flat columns named like the CSV header
///
/// Every failure is reported as [`DashboardError::DataUnavailable`].
pub fn load_file(path: &Path) -> Result<StadiumTable, DashboardError> {
    let table = load_any(path).map_err(|e| DashboardError::DataUnavailable {
        path: path.display().to_string(),
        reason: format!("{e:#}"),
    })?;
    log::info!("Loaded {} stadiums from {}", table.len(), path.display());
    Ok(table)
}

fn load_any(path: &Path) -> Result<StadiumTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let rows = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => bail!("Unsupported file extension: .{other}"),
    };

    for (i, row) in rows.iter().enumerate() {
        validate(row).with_context(|| format!("Row {i} ({})", row.stadium))?;
    }
    Ok(StadiumTable::new(rows))
}

fn validate(row: &StadiumRecord) -> Result<()> {
    if row.capacity == 0 {
        bail!("capacity must be positive");
    }
    if !(-90.0..=90.0).contains(&row.latitude) {
        bail!("latitude {} out of range", row.latitude);
    }
    if !(-180.0..=180.0).contains(&row.longitude) {
        bail!("longitude {} out of range", row.longitude);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with at least [`REQUIRED_COLUMNS`]; other columns
/// are ignored.
fn load_csv(path: &Path) -> Result<Vec<StadiumRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .context("opening CSV")?;

    let headers = reader.headers().context("reading CSV headers")?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            bail!("CSV missing '{column}' column");
        }
    }

    reader
        .deserialize::<StadiumRecord>()
        .enumerate()
        .map(|(row_no, result)| result.with_context(|| format!("CSV row {row_no}")))
        .collect()
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, i.e. what `df.to_json(orient='records')` writes.
fn load_json(path: &Path) -> Result<Vec<StadiumRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    serde_json::from_str(&text).context("parsing JSON stadium records")
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one flat column per field.
///
/// Text columns may be Utf8 or LargeUtf8, integer columns Int32 or Int64,
/// coordinate columns Float32 or Float64.
fn load_parquet(path: &Path) -> Result<Vec<StadiumRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let stadium = column(&batch, "stadium")?;
        let conference = column(&batch, "conference")?;
        let capacity = column(&batch, "capacity")?;
        let built = column(&batch, "built")?;
        let latitude = column(&batch, "latitude")?;
        let longitude = column(&batch, "longitude")?;

        for row in 0..batch.num_rows() {
            rows.push(StadiumRecord {
                stadium: string_at(stadium, row)?,
                conference: string_at(conference, row)?,
                capacity: u32::try_from(int_at(capacity, row)?)
                    .with_context(|| format!("Row {row}: capacity out of range"))?,
                built: i32::try_from(int_at(built, row)?)
                    .with_context(|| format!("Row {row}: built year out of range"))?,
                latitude: float_at(latitude, row)?,
                longitude: float_at(longitude, row)?,
            });
        }
    }
    Ok(rows)
}

// -- Parquet / Arrow helpers --

fn column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a Arc<dyn Array>> {
    let idx = batch
        .schema()
        .index_of(name)
        .map_err(|_| anyhow::anyhow!("Parquet file missing '{name}' column"))?;
    Ok(batch.column(idx))
}

fn non_null(col: &Arc<dyn Array>, row: usize) -> Result<()> {
    if col.is_null(row) {
        bail!("Row {row}: null value");
    }
    Ok(())
}

fn string_at(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    non_null(col, row)?;
    if let Some(arr) = col.as_any().downcast_ref::<StringArray>() {
        Ok(arr.value(row).to_string())
    } else if let Some(arr) = col.as_any().downcast_ref::<LargeStringArray>() {
        Ok(arr.value(row).to_string())
    } else {
        bail!("Row {row}: expected a string column, got {:?}", col.data_type())
    }
}

fn int_at(col: &Arc<dyn Array>, row: usize) -> Result<i64> {
    non_null(col, row)?;
    if let Some(arr) = col.as_any().downcast_ref::<Int64Array>() {
        Ok(arr.value(row))
    } else if let Some(arr) = col.as_any().downcast_ref::<Int32Array>() {
        Ok(arr.value(row) as i64)
    } else {
        bail!("Row {row}: expected an integer column, got {:?}", col.data_type())
    }
}

fn float_at(col: &Arc<dyn Array>, row: usize) -> Result<f64> {
    non_null(col, row)?;
    if let Some(arr) = col.as_any().downcast_ref::<Float64Array>() {
        Ok(arr.value(row))
    } else if let Some(arr) = col.as_any().downcast_ref::<Float32Array>() {
        Ok(arr.value(row) as f64)
    } else {
        bail!("Row {row}: expected a float column, got {:?}", col.data_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(capacity: u32, latitude: f64, longitude: f64) -> StadiumRecord {
        StadiumRecord {
            stadium: "Test Field".into(),
            conference: "SEC".into(),
            capacity,
            built: 1950,
            latitude,
            longitude,
        }
    }

    #[test]
    fn validate_accepts_sane_rows() {
        assert!(validate(&record(50_000, 33.2, -87.5)).is_ok());
    }

    #[test]
    fn validate_rejects_zero_capacity_and_bad_coordinates() {
        assert!(validate(&record(0, 33.2, -87.5)).is_err());
        assert!(validate(&record(100, 91.0, -87.5)).is_err());
        assert!(validate(&record(100, 33.2, -181.0)).is_err());
    }

    #[test]
    fn unknown_extension_is_unavailable() {
        let err = load_file(Path::new("stadiums.xlsx")).unwrap_err();
        match err {
            DashboardError::DataUnavailable { reason, .. } => {
                assert!(reason.contains("Unsupported file extension"))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_unavailable() {
        let err = load_file(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, DashboardError::DataUnavailable { .. }));
    }
}
