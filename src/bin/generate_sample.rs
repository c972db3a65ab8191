use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

#[derive(Debug, Serialize)]
struct Row {
    #[serde(rename = "Flight Number")]
    flight_number: i64,
    #[serde(rename = "Launch Site")]
    launch_site: String,
    class: i64,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version")]
    booster_version: String,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
}

/// Booster generations in flight order with their rough success rate.
const GENERATIONS: [(&str, f64); 5] = [
    ("v1.0", 0.4),
    ("v1.1", 0.5),
    ("FT", 0.75),
    ("B4", 0.6),
    ("B5", 0.95),
];

const SITES: [&str; 4] = ["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let n_flights = 56;

    let rows: Vec<Row> = (0..n_flights)
        .map(|i| {
            let generation = (i * GENERATIONS.len()) / n_flights;
            let (category, success_rate) = GENERATIONS[generation];
            let core = 1000 + rng.next_u64() % 70;
            // Payloads snap to 100 kg; a few early test flights carry nothing.
            let payload = if i < 2 {
                0.0
            } else {
                (rng.next_f64() * 96.0).round() * 100.0
            };
            Row {
                flight_number: i as i64 + 1,
                launch_site: rng.pick(&SITES[..]).to_string(),
                class: i64::from(rng.next_f64() < success_rate),
                payload_mass_kg: payload,
                booster_version: format!("F9 {category}  B{core}"),
                booster_category: category.to_string(),
            }
        })
        .collect();

    // Write CSV
    let csv_path = "spacex_launch_dash.csv";
    let mut writer = csv::Writer::from_path(csv_path).context("creating CSV")?;
    for row in &rows {
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;

    // Write Parquet
    let schema = Arc::new(Schema::new(vec![
        Field::new("Flight Number", DataType::Int64, false),
        Field::new("Launch Site", DataType::Utf8, false),
        Field::new("class", DataType::Int64, false),
        Field::new("Payload Mass (kg)", DataType::Float64, false),
        Field::new("Booster Version", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.flight_number))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.launch_site.as_str()))),
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.class))),
            Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.payload_mass_kg))),
            Arc::new(StringArray::from_iter_values(
                rows.iter().map(|r| r.booster_version.as_str()),
            )),
        ],
    )
    .context("building record batch")?;

    let parquet_path = "spacex_launch_dash.parquet";
    let file = std::fs::File::create(parquet_path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating writer")?;
    writer.write(&batch).context("writing batch")?;
    writer.close().context("closing writer")?;

    println!("Wrote {} launches to {csv_path} and {parquet_path}", rows.len());
    Ok(())
}
