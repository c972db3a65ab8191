use std::f64::consts::TAU;

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::state::AppState;

/// Segments used to approximate a full circle.
const PIE_SEGMENTS: usize = 120;

// ---------------------------------------------------------------------------
// Outcome pie
// ---------------------------------------------------------------------------

/// Pie chart of the current outcome breakdown.
pub fn outcome_pie(ui: &mut Ui, state: &AppState, height: f32) {
    let pie = &state.pie;
    ui.heading(&pie.title);

    let total = pie.total();
    if pie.is_empty() || total == 0 {
        ui.label("No launches for this selection.");
        return;
    }

    Plot::new("outcome_pie")
        .height(height)
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            let mut start = 0.0;
            for (label, value) in pie.slices() {
                if value == 0 {
                    continue;
                }
                let share = value as f64 / total as f64;
                let end = start + share * TAU;
                let color = state.slice_colors.color_for(label);

                plot_ui.polygon(
                    Polygon::new(slice_outline(start, end))
                        .name(label)
                        .fill_color(color)
                        .stroke(Stroke::new(1.0, Color32::WHITE)),
                );

                let mid = (start + end) / 2.0;
                plot_ui.text(Text::new(
                    PlotPoint::new(0.65 * mid.cos(), 0.65 * mid.sin()),
                    RichText::new(format!("{:.1}%", share * 100.0)).strong(),
                ));
                start = end;
            }
        });
}

/// Closed outline of a unit-circle slice between two angles (radians).
fn slice_outline(start: f64, end: f64) -> PlotPoints<'static> {
    let steps = (((end - start) / TAU) * PIE_SEGMENTS as f64).ceil().max(1.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    points.push([0.0, 0.0]);
    for i in 0..=steps {
        let angle = start + (end - start) * i as f64 / steps as f64;
        points.push([angle.cos(), angle.sin()]);
    }
    PlotPoints::from(points)
}

// ---------------------------------------------------------------------------
// Payload scatter
// ---------------------------------------------------------------------------

/// Payload mass vs outcome class, coloured by booster category.
pub fn payload_scatter(ui: &mut Ui, state: &AppState, height: f32) {
    let scatter = &state.scatter;
    ui.heading(&scatter.title);

    let range = state.filters.payload;
    Plot::new("payload_scatter")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .include_x(range.min())
        .include_x(range.max())
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for category in scatter.categories() {
                let points: PlotPoints = scatter
                    .points
                    .iter()
                    .filter(|p| p.booster_category == category)
                    .map(|p| [p.record.payload_mass_kg, p.record.outcome.class() as f64])
                    .collect();

                plot_ui.points(
                    Points::new(points)
                        .name(category)
                        .color(state.booster_colors.color_for(category))
                        .radius(5.0),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_outline_starts_at_centre() {
        let outline = slice_outline(0.0, TAU / 4.0);
        let pts = outline.points();
        assert_eq!((pts[0].x, pts[0].y), (0.0, 0.0));
        let first_rim = pts[1];
        assert!((first_rim.x - 1.0).abs() < 1e-9 && first_rim.y.abs() < 1e-9);
        let last = pts[pts.len() - 1];
        assert!(last.x.abs() < 1e-9 && (last.y - 1.0).abs() < 1e-9);
        assert_eq!(pts.len(), PIE_SEGMENTS / 4 + 2);
    }
}
