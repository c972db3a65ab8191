use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::data::aggregate::OutcomeBreakdown;
use crate::data::filter::{ALL_SITES, FilterState, PayloadRange, SiteSelection};
use crate::data::model::LaunchDataset;
use crate::data::project::ScatterProjection;
use crate::reactive::{Bindings, Figure, InputKey, OutputKey};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Loaded dataset. Replaced wholesale on File → Open, never edited.
    pub dataset: LaunchDataset,

    /// Current dropdown and slider values.
    pub filters: FilterState,

    /// Options shown in the site dropdown (excluding "All Sites").
    pub site_options: Vec<String>,

    bindings: Bindings,

    /// Latest pie chart figure.
    pub pie: OutcomeBreakdown,

    /// Latest scatter chart figure.
    pub scatter: ScatterProjection,

    /// Colours for booster categories, stable across filter changes.
    pub booster_colors: ColorMap,

    /// Colours for pie slices (sites, or Success / Failure).
    pub slice_colors: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: DashboardConfig, dataset: LaunchDataset) -> Self {
        let mut state = Self {
            config,
            dataset: LaunchDataset::default(),
            filters: FilterState::default(),
            site_options: Vec::new(),
            bindings: Bindings::dashboard(),
            pie: OutcomeBreakdown::default(),
            scatter: ScatterProjection::default(),
            booster_colors: ColorMap::default(),
            slice_colors: ColorMap::default(),
            status_message: None,
        };
        state.set_dataset(dataset);
        state
    }

    /// Ingest a newly loaded dataset, reset filters and recompute both charts.
    pub fn set_dataset(&mut self, dataset: LaunchDataset) {
        self.filters = FilterState::spanning(dataset.payload_min, dataset.payload_max);
        self.site_options = self.config.site_options(&dataset);

        let categories: Vec<String> = dataset
            .records
            .iter()
            .filter_map(|r| r.booster_category().ok())
            .map(String::from)
            .collect();
        self.booster_colors = ColorMap::new(categories);

        let mut slices = self.site_options.clone();
        slices.extend(["Success".to_string(), "Failure".to_string()]);
        self.slice_colors = ColorMap::new(slices);

        self.dataset = dataset;
        self.status_message = None;

        let figures = self.bindings.refresh_all(&self.dataset, &self.filters);
        self.apply(figures);
    }

    /// Dropdown entries: "ALL" first, then every site option, each parsed the
    /// same way a raw dropdown value is.
    pub fn site_choices(&self) -> Vec<SiteSelection> {
        std::iter::once(ALL_SITES)
            .chain(self.site_options.iter().map(String::as_str))
            .map(SiteSelection::parse)
            .collect()
    }

    /// Dropdown changed.
    pub fn set_site(&mut self, site: SiteSelection) {
        if self.filters.site == site {
            return;
        }
        self.filters.site = site;
        self.input_changed(InputKey::Site);
    }

    /// Slider changed. Handles are reordered and clamped to non-negative.
    pub fn set_payload_range(&mut self, a: f64, b: f64) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let range = match PayloadRange::new(lo.max(0.0), hi.max(0.0)) {
            Ok(range) => range,
            Err(e) => {
                log::warn!("Ignoring payload range: {e}");
                return;
            }
        };
        if self.filters.payload == range {
            return;
        }
        self.filters.payload = range;
        self.input_changed(InputKey::PayloadRange);
    }

    fn input_changed(&mut self, key: InputKey) {
        let figures = self.bindings.dispatch(key, &self.dataset, &self.filters);
        self.apply(figures);
    }

    fn apply(&mut self, figures: Vec<(OutputKey, Figure)>) {
        for (output, figure) in figures {
            log::debug!("Refreshing {output:?}");
            match figure {
                Figure::Pie(pie) => self.pie = pie,
                Figure::Scatter(scatter) => {
                    if scatter.skipped > 0 {
                        log::warn!(
                            "{} records skipped for malformed booster versions",
                            scatter.skipped
                        );
                    }
                    self.scatter = scatter;
                }
            }
        }
    }
}
