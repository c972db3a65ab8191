use std::path::PathBuf;

use crate::data::model::LaunchDataset;

/// Static dashboard settings. Everything has a sensible default; there are
/// no command-line flags.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// File loaded at startup. A missing or malformed file is fatal.
    pub data_path: PathBuf,
    /// Sites always offered in the dropdown, in display order.
    pub known_sites: Vec<String>,
    /// Payload slider step in kilograms.
    pub payload_step: f64,
    pub window_title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("spacex_launch_dash.csv"),
            known_sites: ["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"]
                .into_iter()
                .map(String::from)
                .collect(),
            payload_step: 1000.0,
            window_title: "SpaceX Launch Records Dashboard".to_string(),
            window_size: [1200.0, 800.0],
            min_window_size: [600.0, 400.0],
        }
    }
}

impl DashboardConfig {
    /// Dropdown site options: the known sites, then any other site present in
    /// the dataset, without duplicates.
    pub fn site_options(&self, dataset: &LaunchDataset) -> Vec<String> {
        let mut options = self.known_sites.clone();
        for site in &dataset.sites {
            if !options.contains(site) {
                options.push(site.clone());
            }
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    #[test]
    fn site_options_extend_known_sites() {
        let config = DashboardConfig::default();
        let ds = LaunchDataset::from_records(vec![
            LaunchRecord::new("KSC LC-39A", 1.0, Outcome::Success, "F9 B5"),
            LaunchRecord::new("Starbase", 1.0, Outcome::Failure, "SH B7"),
        ]);
        let options = config.site_options(&ds);
        assert_eq!(options.len(), 5);
        assert_eq!(options[2], "KSC LC-39A");
        assert_eq!(options[4], "Starbase");
    }
}
