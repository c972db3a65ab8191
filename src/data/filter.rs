use std::fmt;

use thiserror::Error;

use super::model::LaunchRecord;

// ---------------------------------------------------------------------------
// Site selection
// ---------------------------------------------------------------------------

/// Dropdown value used for "no site filter".
pub const ALL_SITES: &str = "ALL";

/// Which launch site the user picked in the dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Parse a dropdown value; the literal `"ALL"` means no filter.
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    /// Whether a record passes this selection.
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => record.launch_site == *site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => f.write_str("All Sites"),
            SiteSelection::Site(site) => f.write_str(site),
        }
    }
}

// ---------------------------------------------------------------------------
// Payload range
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RangeError {
    #[error("payload bound {0} is negative or not finite")]
    InvalidBound(f64),
    #[error("payload range is inverted: min {min} > max {max}")]
    Inverted { min: f64, max: f64 },
}

/// Inclusive payload-mass interval in kilograms. Always `0 <= min <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    min: f64,
    max: f64,
}

impl PayloadRange {
    pub fn new(min: f64, max: f64) -> Result<Self, RangeError> {
        for bound in [min, max] {
            if !bound.is_finite() || bound < 0.0 {
                return Err(RangeError::InvalidBound(bound));
            }
        }
        if min > max {
            return Err(RangeError::Inverted { min, max });
        }
        Ok(PayloadRange { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Inclusive on both ends.
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.min <= payload_mass_kg && payload_mass_kg <= self.max
    }
}

impl Default for PayloadRange {
    fn default() -> Self {
        PayloadRange { min: 0.0, max: 0.0 }
    }
}

// ---------------------------------------------------------------------------
// Filter state: the two UI inputs driving both charts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

impl FilterState {
    /// All sites, payload range spanning the whole dataset.
    pub fn spanning(payload_min: f64, payload_max: f64) -> Self {
        let payload = PayloadRange::new(payload_min, payload_max).unwrap_or_default();
        FilterState {
            site: SiteSelection::All,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Outcome;

    #[test]
    fn parse_all_literal() {
        assert_eq!(SiteSelection::parse("ALL"), SiteSelection::All);
        assert_eq!(
            SiteSelection::parse("KSC LC-39A"),
            SiteSelection::Site("KSC LC-39A".into())
        );
        // Only the exact literal is special.
        assert_eq!(SiteSelection::parse("all"), SiteSelection::Site("all".into()));
    }

    #[test]
    fn site_matching() {
        let rec = LaunchRecord::new("KSC LC-39A", 1.0, Outcome::Success, "F9 B5");
        assert!(SiteSelection::All.matches(&rec));
        assert!(SiteSelection::parse("KSC LC-39A").matches(&rec));
        assert!(!SiteSelection::parse("VAFB SLC-4E").matches(&rec));
    }

    #[test]
    fn range_is_inclusive() {
        let range = PayloadRange::new(1000.0, 2000.0).unwrap();
        assert!(range.contains(1000.0));
        assert!(range.contains(2000.0));
        assert!(!range.contains(999.9));
        assert!(!range.contains(2000.1));

        let point = PayloadRange::new(0.0, 0.0).unwrap();
        assert!(point.contains(0.0));
        assert!(!point.contains(0.5));
    }

    #[test]
    fn range_validation() {
        assert_eq!(
            PayloadRange::new(5.0, 1.0),
            Err(RangeError::Inverted { min: 5.0, max: 1.0 })
        );
        assert_eq!(PayloadRange::new(-1.0, 1.0), Err(RangeError::InvalidBound(-1.0)));
        assert!(PayloadRange::new(0.0, f64::INFINITY).is_err());
        assert!(PayloadRange::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn spanning_defaults_to_all_sites() {
        let state = FilterState::spanning(0.0, 9600.0);
        assert_eq!(state.site, SiteSelection::All);
        assert_eq!(state.payload.max(), 9600.0);
    }
}
