use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Int32Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use stadium_dashboard::data::loader::load_file;
use stadium_dashboard::data::model::StadiumTable;

/// Convert a stadium CSV (default: the bundled sample) into Parquet.
///
/// Usage: `generate_sample [input.csv] [output.parquet]`
fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args_os().skip(1);
    let input = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/stadiums.csv"));
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_stadiums.parquet"));

    let table = load_file(&input)?;
    write_parquet(&table, &output)?;

    println!("Wrote {} stadiums to {}", table.len(), output.display());
    Ok(())
}

fn write_parquet(table: &StadiumTable, path: &Path) -> Result<()> {
    let rows = table.rows();

    let stadium = StringArray::from(rows.iter().map(|r| r.stadium.as_str()).collect::<Vec<_>>());
    let conference =
        StringArray::from(rows.iter().map(|r| r.conference.as_str()).collect::<Vec<_>>());
    let capacity = Int64Array::from(rows.iter().map(|r| r.capacity as i64).collect::<Vec<_>>());
    let built = Int32Array::from(rows.iter().map(|r| r.built).collect::<Vec<_>>());
    let latitude = Float64Array::from(rows.iter().map(|r| r.latitude).collect::<Vec<_>>());
    let longitude = Float64Array::from(rows.iter().map(|r| r.longitude).collect::<Vec<_>>());

    let schema = Arc::new(Schema::new(vec![
        Field::new("stadium", DataType::Utf8, false),
        Field::new("conference", DataType::Utf8, false),
        Field::new("capacity", DataType::Int64, false),
        Field::new("built", DataType::Int32, false),
        Field::new("latitude", DataType::Float64, false),
        Field::new("longitude", DataType::Float64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(stadium),
            Arc::new(conference),
            Arc::new(capacity),
            Arc::new(built),
            Arc::new(latitude),
            Arc::new(longitude),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing record batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}
