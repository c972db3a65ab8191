use eframe::egui;

use crate::state::AppState;
use crate::ui::{charts, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashApp {
    pub state: AppState,
}

impl LaunchDashApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for LaunchDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::control_panel(ui, &mut self.state);
            });

        // ---- Central panel: charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(
                    egui::RichText::new(&self.state.config.window_title)
                        .size(28.0)
                        .color(egui::Color32::from_rgb(0x50, 0x3D, 0x36)),
                );
            });
            ui.separator();

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let chart_height = (ui.available_height() * 0.45).max(240.0);
                    charts::outcome_pie(ui, &self.state, chart_height);
                    ui.add_space(12.0);
                    charts::payload_scatter(ui, &self.state, chart_height);
                    ui.add_space(12.0);
                    egui::CollapsingHeader::new("Launches in view")
                        .default_open(false)
                        .show(ui, |ui| {
                            table::projected_rows(ui, &self.state);
                        });
                });
        });
    }
}
