use std::path::Path;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

pub const COL_FLIGHT_NUMBER: &str = "Flight Number";
pub const COL_LAUNCH_SITE: &str = "Launch Site";
pub const COL_PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const COL_CLASS: &str = "class";
pub const COL_BOOSTER_VERSION: &str = "Booster Version";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with `Launch Site`, `Payload Mass (kg)`, `class`,
///   `Booster Version` (other columns are ignored)
/// * `.json`    – `[{ "Launch Site": "...", "Payload Mass (kg)": 0.0, ... }, ...]`
/// * `.parquet` – same column names, numeric columns may be int or float
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    log::info!(
        "Loaded {} launch records from {} ({} sites, payload {}..={} kg)",
        dataset.len(),
        path.display(),
        dataset.sites.len(),
        dataset.payload_min,
        dataset.payload_max
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Row schema shared by the CSV and JSON loaders
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Flight Number", default)]
    flight_number: Option<u32>,
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    class: i64,
    #[serde(rename = "Booster Version")]
    booster_version: String,
}

/// Enforce the dataset invariants on a single row. `row` is the 1-based data
/// row (the header is not counted).
fn validate(
    row: usize,
    flight_number: Option<u32>,
    launch_site: String,
    payload_mass_kg: f64,
    class: i64,
    booster_version: String,
) -> Result<LaunchRecord> {
    if !payload_mass_kg.is_finite() || payload_mass_kg < 0.0 {
        bail!("Row {row}: payload mass {payload_mass_kg} must be a non-negative number");
    }
    let Some(outcome) = Outcome::from_class(class) else {
        bail!("Row {row}: class {class} must be 0 or 1");
    };
    Ok(LaunchRecord {
        flight_number,
        ..LaunchRecord::new(launch_site, payload_mass_kg, outcome, booster_version)
    })
}

/// A flight number must be a whole number that fits in `u32`.
fn flight_number_from(value: f64, row: usize) -> Result<u32> {
    if value.fract() != 0.0 || value < 0.0 || value > u32::MAX as f64 {
        bail!("Row {row}: flight number {value} must be a non-negative whole number");
    }
    Ok(value as u32)
}

impl RawRecord {
    fn into_record(self, row: usize) -> Result<LaunchRecord> {
        validate(
            row,
            self.flight_number,
            self.launch_site,
            self.payload_mass_kg,
            self.class,
            self.booster_version,
        )
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<LaunchDataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let mut records = Vec::new();

    for (i, result) in reader.deserialize::<RawRecord>().enumerate() {
        let row_no = i + 1;
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(raw.into_record(row_no)?);
    }

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, as written by `df.to_json(orient='records')`.
fn load_json(path: &Path) -> Result<LaunchDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let rows: Vec<RawRecord> = serde_json::from_str(&text).context("parsing JSON")?;

    let records = rows
        .into_iter()
        .enumerate()
        .map(|(i, raw)| raw.into_record(i + 1))
        .collect::<Result<Vec<_>>>()?;

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<LaunchDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();
    let mut row_offset = 0;

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let column = |name: &str| -> Result<ArrayRef> {
            let idx = schema
                .index_of(name)
                .map_err(|_| anyhow::anyhow!("Parquet file missing '{name}' column"))?;
            Ok(batch.column(idx).clone())
        };
        let site_col = column(COL_LAUNCH_SITE)?;
        let payload_col = column(COL_PAYLOAD_MASS)?;
        let class_col = column(COL_CLASS)?;
        let booster_col = column(COL_BOOSTER_VERSION)?;
        let flight_col = column(COL_FLIGHT_NUMBER).ok();

        for i in 0..batch.num_rows() {
            let row = row_offset + i + 1;
            let flight_number = match &flight_col {
                Some(col) if !col.is_null(i) => {
                    let value = extract_f64(col, i)
                        .with_context(|| format!("Row {row}: failed to read '{COL_FLIGHT_NUMBER}'"))?;
                    Some(flight_number_from(value, row)?)
                }
                _ => None,
            };
            let launch_site = extract_str(&site_col, i)
                .with_context(|| format!("Row {row}: failed to read '{COL_LAUNCH_SITE}'"))?;
            let payload = extract_f64(&payload_col, i)
                .with_context(|| format!("Row {row}: failed to read '{COL_PAYLOAD_MASS}'"))?;
            let class = extract_f64(&class_col, i)
                .with_context(|| format!("Row {row}: failed to read '{COL_CLASS}'"))?;
            let booster = extract_str(&booster_col, i)
                .with_context(|| format!("Row {row}: failed to read '{COL_BOOSTER_VERSION}'"))?;

            if class.fract() != 0.0 {
                bail!("Row {row}: class {class} must be 0 or 1");
            }
            records.push(validate(
                row,
                flight_number,
                launch_site,
                payload,
                class as i64,
                booster,
            )?);
        }
        row_offset += batch.num_rows();
    }

    Ok(LaunchDataset::from_records(records))
}

// -- Parquet / Arrow helpers --

/// Read a numeric cell of any common int/float width as `f64`.
fn extract_f64(col: &ArrayRef, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("null value in numeric column");
    }
    let value = match col.data_type() {
        DataType::Float64 => col.as_primitive::<Float64Type>().value(row),
        DataType::Float32 => col.as_primitive::<Float32Type>().value(row) as f64,
        DataType::Int64 => col.as_primitive::<Int64Type>().value(row) as f64,
        DataType::Int32 => col.as_primitive::<Int32Type>().value(row) as f64,
        other => bail!("Expected a numeric column, got {other:?}"),
    };
    Ok(value)
}

fn extract_str(col: &ArrayRef, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null value in string column");
    }
    match col.data_type() {
        DataType::Utf8 => Ok(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(row).to_string()),
        other => bail!("Expected a string column, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::Arc;

    use arrow::array::{Float64Array, Int64Array, StringArray};
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::ArrowWriter;
    use tempfile::TempDir;

    use super::*;

    const HEADER: &str =
        "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category";

    fn write_csv(dir: &TempDir, rows: &[&str]) -> std::path::PathBuf {
        let path = dir.path().join("launches.csv");
        let mut out = String::from(HEADER);
        out.push('\n');
        for row in rows {
            out.push_str(row);
            out.push('\n');
        }
        fs::write(&path, out).unwrap();
        path
    }

    #[test]
    fn loads_csv_and_ignores_extra_columns() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            &[
                "1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0",
                "2,KSC LC-39A,1,5300.0,F9 FT B1031.1,FT",
                "3,VAFB SLC-4E,1,9600,F9 B4 B1041.1,B4",
            ],
        );
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.sites, vec!["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"]);
        assert_eq!(ds.records[0].flight_number, Some(1));
        assert_eq!(ds.records[0].outcome, Outcome::Failure);
        assert_eq!(ds.records[1].booster_version, "F9 FT B1031.1");
        assert_eq!(ds.payload_max, 9600.0);
    }

    #[test]
    fn csv_rejects_invalid_class_and_payload() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            &["1,KSC LC-39A,1,100.0,F9 B5,B5", "2,KSC LC-39A,2,100.0,F9 B5,B5"],
        );
        let err = format!("{:#}", load_file(&path).unwrap_err());
        // Data rows are numbered from 1, not counting the header.
        assert!(err.contains("Row 2: class 2"), "{err}");

        let path = write_csv(&dir, &["1,KSC LC-39A,1,-5.0,F9 B5,B5"]);
        let err = format!("{:#}", load_file(&path).unwrap_err());
        assert!(err.contains("non-negative"), "{err}");
    }

    #[test]
    fn csv_missing_column_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "Launch Site,class\nKSC LC-39A,1\n").unwrap();
        assert!(load_file(&path).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(load_file(&dir.path().join("nope.csv")).is_err());
    }

    #[test]
    fn unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("launches.xlsx");
        fs::write(&path, "").unwrap();
        let err = format!("{:#}", load_file(&path).unwrap_err());
        assert!(err.contains(".xlsx"), "{err}");
    }

    #[test]
    fn loads_json_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("launches.json");
        fs::write(
            &path,
            r#"[
                {"Launch Site": "KSC LC-39A", "Payload Mass (kg)": 5000.0, "class": 1, "Booster Version": "F9 B5"},
                {"Launch Site": "VAFB SLC-4E", "Payload Mass (kg)": 9000, "class": 0, "Booster Version": "F9 B4", "Flight Number": 7}
            ]"#,
        )
        .unwrap();
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].flight_number, None);
        assert_eq!(ds.records[1].flight_number, Some(7));
        assert_eq!(ds.records[1].outcome, Outcome::Failure);
    }

    fn write_parquet(dir: &TempDir, columns: Vec<(&str, ArrayRef)>) -> std::path::PathBuf {
        let path = dir.path().join("launches.parquet");
        let batch = RecordBatch::try_from_iter(columns).unwrap();
        let file = fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, batch.schema(), None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();
        path
    }

    fn strings(values: &[&str]) -> ArrayRef {
        Arc::new(StringArray::from(values.to_vec()))
    }

    fn floats(values: &[f64]) -> ArrayRef {
        Arc::new(Float64Array::from(values.to_vec()))
    }

    fn ints(values: &[i64]) -> ArrayRef {
        Arc::new(Int64Array::from(values.to_vec()))
    }

    #[test]
    fn loads_parquet_with_integer_columns() {
        let dir = TempDir::new().unwrap();
        let path = write_parquet(
            &dir,
            vec![
                (COL_LAUNCH_SITE, strings(&["KSC LC-39A", "CCAFS SLC-40"])),
                (COL_PAYLOAD_MASS, floats(&[5000.0, 2000.0])),
                (COL_CLASS, ints(&[1, 0])),
                (COL_BOOSTER_VERSION, strings(&["F9 B5", "F9 FT"])),
            ],
        );

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].outcome, Outcome::Success);
        assert_eq!(ds.records[1].launch_site, "CCAFS SLC-40");
        assert_eq!(ds.records[1].flight_number, None);
    }

    #[test]
    fn parquet_flight_numbers() {
        let dir = TempDir::new().unwrap();
        let columns = |flight: ArrayRef| {
            vec![
                (COL_FLIGHT_NUMBER, flight),
                (COL_LAUNCH_SITE, strings(&["KSC LC-39A"])),
                (COL_PAYLOAD_MASS, floats(&[5000.0])),
                (COL_CLASS, ints(&[1])),
                (COL_BOOSTER_VERSION, strings(&["F9 B5"])),
            ]
        };

        let path = write_parquet(&dir, columns(floats(&[12.0])));
        assert_eq!(load_file(&path).unwrap().records[0].flight_number, Some(12));

        for bad in [-3.7, 4.5, -1.0, 5e12] {
            let path = write_parquet(&dir, columns(floats(&[bad])));
            let err = format!("{:#}", load_file(&path).unwrap_err());
            assert!(err.contains("Row 1: flight number"), "{bad}: {err}");
        }
    }

    #[test]
    fn parquet_rejects_invalid_rows() {
        let dir = TempDir::new().unwrap();
        let with = |payload: ArrayRef, class: ArrayRef| {
            vec![
                (COL_LAUNCH_SITE, strings(&["KSC LC-39A", "VAFB SLC-4E"])),
                (COL_PAYLOAD_MASS, payload),
                (COL_CLASS, class),
                (COL_BOOSTER_VERSION, strings(&["F9 B5", "F9 B4"])),
            ]
        };

        let path = write_parquet(&dir, with(floats(&[1.0, 2.0]), floats(&[1.0, 0.5])));
        let err = format!("{:#}", load_file(&path).unwrap_err());
        assert!(err.contains("Row 2: class 0.5"), "{err}");

        let path = write_parquet(&dir, with(floats(&[1.0, 2.0]), ints(&[0, 2])));
        let err = format!("{:#}", load_file(&path).unwrap_err());
        assert!(err.contains("Row 2: class 2"), "{err}");

        let path = write_parquet(&dir, with(floats(&[-5.0, 2.0]), ints(&[1, 1])));
        let err = format!("{:#}", load_file(&path).unwrap_err());
        assert!(err.contains("Row 1: payload mass -5"), "{err}");

        let path = write_parquet(
            &dir,
            vec![
                (COL_LAUNCH_SITE, strings(&["KSC LC-39A"])),
                (COL_CLASS, ints(&[1])),
                (COL_BOOSTER_VERSION, strings(&["F9 B5"])),
            ],
        );
        let err = format!("{:#}", load_file(&path).unwrap_err());
        assert!(err.contains("missing 'Payload Mass (kg)' column"), "{err}");
    }
}
