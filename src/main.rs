mod app;
mod color;
mod config;
mod data;
mod reactive;
mod state;
mod ui;

use anyhow::Context;
use app::LaunchDashApp;
use config::DashboardConfig;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::default();

    // The dashboard has nothing to show without its data; a bad file is fatal.
    let dataset = data::loader::load_file(&config.data_path).map_err(|e| {
        log::error!("Startup load failed: {e:#}");
        e
    })?;
    if dataset.is_empty() {
        log::warn!("{} contains no launch records", config.data_path.display());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    let title = config.window_title.clone();
    let state = AppState::new(config, dataset);

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchDashApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
    .context("running the dashboard window")
}
