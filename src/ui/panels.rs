use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::SiteSelection;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – site dropdown and payload range
// ---------------------------------------------------------------------------

/// Render the filter controls.
pub fn control_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // ---- Launch site dropdown ----
    ui.strong("Launch site");
    let mut chosen: Option<SiteSelection> = None;
    let options = state.site_choices();
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(state.filters.site.to_string())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for option in options {
                let is_current = state.filters.site == option;
                if ui
                    .selectable_label(is_current, option.to_string())
                    .clicked()
                {
                    chosen = Some(option);
                }
            }
        });
    if let Some(site) = chosen {
        state.set_site(site);
    }

    ui.add_space(8.0);

    // ---- Payload range (two handles) ----
    ui.strong("Payload range (kg)");
    let bounds = state.dataset.payload_min..=state.dataset.payload_max;
    let step = state.config.payload_step;
    let mut lo = state.filters.payload.min();
    let mut hi = state.filters.payload.max();
    let changed_lo = ui
        .add(egui::Slider::new(&mut lo, bounds.clone()).step_by(step).text("min"))
        .changed();
    let changed_hi = ui
        .add(egui::Slider::new(&mut hi, bounds).step_by(step).text("max"))
        .changed();
    if changed_lo || changed_hi {
        state.set_payload_range(lo, hi);
    }

    if ui.small_button("Reset range").clicked() {
        state.set_payload_range(state.dataset.payload_min, state.dataset.payload_max);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} launches loaded, {} in view",
            state.dataset.len(),
            state.scatter.points.len()
        ));
        if state.scatter.skipped > 0 {
            ui.label(
                RichText::new(format!("{} skipped", state.scatter.skipped))
                    .color(Color32::YELLOW),
            );
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => state.set_dataset(dataset),
            Err(e) => {
                // Keep the current dataset; the failure is only reported.
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
