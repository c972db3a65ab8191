//! Input → output bindings between the dashboard controls and its charts.
//!
//! Each binding names the inputs it tracks, the output it fills and a pure
//! handler over the dataset and current filters. When an input changes the
//! app calls [`Bindings::dispatch`] and stores whatever figures come back.

use crate::data::aggregate::{OutcomeBreakdown, aggregate};
use crate::data::filter::FilterState;
use crate::data::model::LaunchDataset;
use crate::data::project::{ScatterProjection, project};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKey {
    Site,
    PayloadRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKey {
    OutcomePie,
    PayloadScatter,
}

/// What a handler produces for its output slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    Pie(OutcomeBreakdown),
    Scatter(ScatterProjection),
}

pub type Handler = fn(&LaunchDataset, &FilterState) -> Figure;

struct Binding {
    inputs: Vec<InputKey>,
    output: OutputKey,
    handler: Handler,
}

/// Registry of `(inputs, output, handler)` triples.
#[derive(Default)]
pub struct Bindings {
    bindings: Vec<Binding>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// The dashboard wiring: site → pie; site or payload range → scatter.
    pub fn dashboard() -> Self {
        Self::new()
            .bind(&[InputKey::Site], OutputKey::OutcomePie, outcome_pie)
            .bind(
                &[InputKey::Site, InputKey::PayloadRange],
                OutputKey::PayloadScatter,
                payload_scatter,
            )
    }

    pub fn bind(mut self, inputs: &[InputKey], output: OutputKey, handler: Handler) -> Self {
        self.bindings.push(Binding {
            inputs: inputs.to_vec(),
            output,
            handler,
        });
        self
    }

    /// Run every handler tracking `changed`, in registration order.
    pub fn dispatch(
        &self,
        changed: InputKey,
        dataset: &LaunchDataset,
        filters: &FilterState,
    ) -> Vec<(OutputKey, Figure)> {
        self.bindings
            .iter()
            .filter(|b| b.inputs.contains(&changed))
            .map(|b| (b.output, (b.handler)(dataset, filters)))
            .collect()
    }

    /// Run every handler, e.g. after a new dataset is loaded.
    pub fn refresh_all(
        &self,
        dataset: &LaunchDataset,
        filters: &FilterState,
    ) -> Vec<(OutputKey, Figure)> {
        self.bindings
            .iter()
            .map(|b| (b.output, (b.handler)(dataset, filters)))
            .collect()
    }
}

fn outcome_pie(dataset: &LaunchDataset, filters: &FilterState) -> Figure {
    Figure::Pie(aggregate(dataset, &filters.site))
}

fn payload_scatter(dataset: &LaunchDataset, filters: &FilterState) -> Figure {
    Figure::Scatter(project(dataset, &filters.site, &filters.payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{PayloadRange, SiteSelection};
    use crate::data::model::{LaunchRecord, Outcome};

    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord::new("KSC LC-39A", 5000.0, Outcome::Success, "F9 B5"),
            LaunchRecord::new("VAFB SLC-4E", 9000.0, Outcome::Failure, "F9 B4"),
        ])
    }

    fn outputs(figures: &[(OutputKey, Figure)]) -> Vec<OutputKey> {
        figures.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn site_change_refreshes_both_charts() {
        let ds = dataset();
        let filters = FilterState::spanning(ds.payload_min, ds.payload_max);
        let figures = Bindings::dashboard().dispatch(InputKey::Site, &ds, &filters);
        assert_eq!(
            outputs(&figures),
            vec![OutputKey::OutcomePie, OutputKey::PayloadScatter]
        );
    }

    #[test]
    fn payload_change_refreshes_only_scatter() {
        let ds = dataset();
        let filters = FilterState {
            site: SiteSelection::All,
            payload: PayloadRange::new(4000.0, 6000.0).unwrap(),
        };
        let figures = Bindings::dashboard().dispatch(InputKey::PayloadRange, &ds, &filters);
        assert_eq!(outputs(&figures), vec![OutputKey::PayloadScatter]);
        match &figures[0].1 {
            Figure::Scatter(scatter) => assert_eq!(scatter.points.len(), 1),
            other => panic!("unexpected figure {other:?}"),
        }
    }

    #[test]
    fn custom_bindings() {
        fn empty_pie(_: &LaunchDataset, _: &FilterState) -> Figure {
            Figure::Pie(OutcomeBreakdown::default())
        }
        let bindings = Bindings::new().bind(&[InputKey::PayloadRange], OutputKey::OutcomePie, empty_pie);
        let ds = dataset();
        let filters = FilterState::default();
        assert!(bindings.dispatch(InputKey::Site, &ds, &filters).is_empty());
        assert_eq!(bindings.refresh_all(&ds, &filters).len(), 1);
    }
}
