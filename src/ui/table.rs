use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

/// Rows currently plotted in the scatter chart.
pub fn projected_rows(ui: &mut Ui, state: &AppState) {
    let points = &state.scatter.points;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(50.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::remainder().at_least(120.0))
        .column(Column::auto().at_least(60.0))
        .header(ROW_HEIGHT + 2.0, |mut header| {
            for title in [
                "Flight",
                "Launch Site",
                "Payload (kg)",
                "Outcome",
                "Booster Version",
                "Category",
            ] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, points.len(), |mut row| {
                let p = &points[row.index()];
                let rec = &p.record;
                row.col(|ui| {
                    ui.label(rec.flight_number.map(|n| n.to_string()).unwrap_or_default());
                });
                row.col(|ui| {
                    ui.label(&rec.launch_site);
                });
                row.col(|ui| {
                    ui.label(format!("{:.0}", rec.payload_mass_kg));
                });
                row.col(|ui| {
                    ui.label(rec.outcome.label());
                });
                row.col(|ui| {
                    ui.label(&rec.booster_version);
                });
                row.col(|ui| {
                    ui.label(
                        RichText::new(&p.booster_category)
                            .color(state.booster_colors.color_for(&p.booster_category)),
                    );
                });
            });
        });
}
