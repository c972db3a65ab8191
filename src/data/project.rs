use super::filter::{PayloadRange, SiteSelection};
use super::model::{LaunchDataset, LaunchRecord};

/// A copy of a record plus its derived booster category.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedRecord {
    pub record: LaunchRecord,
    pub booster_category: String,
}

/// Scatter chart input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScatterProjection {
    pub points: Vec<AnnotatedRecord>,
    /// Records that passed the filters but had a malformed booster version.
    pub skipped: usize,
    pub title: String,
}

impl ScatterProjection {
    /// Distinct booster categories in first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for p in &self.points {
            if !seen.contains(&p.booster_category.as_str()) {
                seen.push(&p.booster_category);
            }
        }
        seen
    }
}

/// Records within `range` (inclusive) and, when a site is chosen, at that
/// site. Row order is preserved. The dataset is only read.
pub fn project(
    dataset: &LaunchDataset,
    site: &SiteSelection,
    range: &PayloadRange,
) -> ScatterProjection {
    let title = match site {
        SiteSelection::All => "All Sites Payload Mass Results".to_string(),
        SiteSelection::Site(name) => format!("{name} Payload Mass Results"),
    };

    let mut points = Vec::new();
    let mut skipped = 0;
    for record in dataset
        .records
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg))
        .filter(|r| site.matches(r))
    {
        match record.booster_category() {
            Ok(category) => points.push(AnnotatedRecord {
                record: record.clone(),
                booster_category: category.to_string(),
            }),
            Err(e) => {
                log::warn!("Skipping record: {e}");
                skipped += 1;
            }
        }
    }

    ScatterProjection {
        points,
        skipped,
        title,
    }
}
