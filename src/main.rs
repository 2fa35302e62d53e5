mod app;
mod color;
mod config;
mod data;
mod predictor;
mod render;
mod state;
mod ui;

use app::BioRegenApp;
use config::DashboardConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::load();
    log::info!(
        "starting dashboard ({}x{} window)",
        config.window_size[0],
        config.window_size[1]
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        "BioRegen AI – Research Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(BioRegenApp::new(config)))),
    )
}
