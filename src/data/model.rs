use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Outcome – the binary `class` column
// ---------------------------------------------------------------------------

/// Launch outcome as stored in the `class` column (1 = success, 0 = failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Map a raw class value; anything outside {0, 1} is rejected.
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            1 => Some(Outcome::Success),
            0 => Some(Outcome::Failure),
            _ => None,
        }
    }

    /// The numeric class value, used as the scatter y coordinate and for sums.
    pub fn class(self) -> u32 {
        match self {
            Outcome::Success => 1,
            Outcome::Failure => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Success => "Success",
            Outcome::Failure => "Failure",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the source table
// ---------------------------------------------------------------------------

/// Raised when a booster version string has no category token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed record: booster version {booster_version:?} has no category token")]
pub struct MalformedRecord {
    pub booster_version: String,
}

/// A single launch attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    /// `Flight Number`, when the source carries one.
    pub flight_number: Option<u32>,
    pub launch_site: String,
    /// Payload mass in kilograms, non-negative.
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    /// Full booster version, e.g. `"F9 B5 B1048.4"`.
    pub booster_version: String,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        outcome: Outcome,
        booster_version: impl Into<String>,
    ) -> Self {
        LaunchRecord {
            flight_number: None,
            launch_site: launch_site.into(),
            payload_mass_kg,
            outcome,
            booster_version: booster_version.into(),
        }
    }

    /// Second whitespace-separated token of the booster version (`"F9 B5"` → `"B5"`).
    pub fn booster_category(&self) -> Result<&str, MalformedRecord> {
        self.booster_version
            .split_whitespace()
            .nth(1)
            .ok_or_else(|| MalformedRecord {
                booster_version: self.booster_version.clone(),
            })
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with a few pre-computed summaries.
#[derive(Debug, Clone, Default)]
pub struct LaunchDataset {
    /// All records, in file order.
    pub records: Vec<LaunchRecord>,
    /// Distinct launch sites in order of first appearance.
    pub sites: Vec<String>,
    /// Smallest payload mass (0.0 when empty).
    pub payload_min: f64,
    /// Largest payload mass (0.0 when empty).
    pub payload_max: f64,
}

impl LaunchDataset {
    /// Build the site index and payload bounds from the loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = Vec::new();
        for rec in &records {
            if !sites.contains(&rec.launch_site) {
                sites.push(rec.launch_site.clone());
            }
        }

        let (payload_min, payload_max) = if records.is_empty() {
            (0.0, 0.0)
        } else {
            records.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
                (lo.min(r.payload_mass_kg), hi.max(r.payload_mass_kg))
            })
        };

        LaunchDataset {
            records,
            sites,
            payload_min,
            payload_max,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
