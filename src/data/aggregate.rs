use super::filter::SiteSelection;
use super::model::{LaunchDataset, Outcome};

/// Pie chart input: parallel `labels` / `values` plus a title.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutcomeBreakdown {
    pub labels: Vec<String>,
    pub values: Vec<u32>,
    pub title: String,
}

impl OutcomeBreakdown {
    pub fn total(&self) -> u32 {
        self.values.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// `(label, value)` pairs in display order.
    pub fn slices(&self) -> impl Iterator<Item = (&str, u32)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

/// Outcome counts for the pie chart.
///
/// * `All` – successes per launch site, one slice per site in first-appearance
///   order. Sites without a success keep a zero slice.
/// * `Site(s)` – `Success` / `Failure` record counts for that site. A site with
///   no records yields an empty breakdown.
pub fn aggregate(dataset: &LaunchDataset, site: &SiteSelection) -> OutcomeBreakdown {
    match site {
        SiteSelection::All => {
            let labels = dataset.sites.clone();
            let mut values = vec![0u32; labels.len()];
            for rec in &dataset.records {
                if let Some(i) = labels.iter().position(|s| *s == rec.launch_site) {
                    values[i] += rec.outcome.class();
                }
            }
            OutcomeBreakdown {
                labels,
                values,
                title: "Successful Launch Breakdown".to_string(),
            }
        }
        SiteSelection::Site(name) => {
            let title = format!("Successful Launch Breakdown for {name}");
            let (mut success, mut failure) = (0u32, 0u32);
            for rec in dataset.records.iter().filter(|r| site.matches(r)) {
                match rec.outcome {
                    Outcome::Success => success += 1,
                    Outcome::Failure => failure += 1,
                }
            }
            if success + failure == 0 {
                return OutcomeBreakdown {
                    title,
                    ..Default::default()
                };
            }
            OutcomeBreakdown {
                labels: vec![
                    Outcome::Success.label().to_string(),
                    Outcome::Failure.label().to_string(),
                ],
                values: vec![success, failure],
                title,
            }
        }
    }
}
