use std::time::Instant;

use eframe::egui;

use crate::config::DashboardConfig;
use crate::state::{AppState, Tab};
use crate::ui::{biomarkers, panels, predictor, trials};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BioRegenApp {
    pub state: AppState,
}

impl BioRegenApp {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }
}

impl eframe::App for BioRegenApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Reveal finished predictions/searches, then wake up for the next one.
        if let Some(wait) = self.state.poll(Instant::now()) {
            ctx.request_repaint_after(wait);
        }

        // ---- Top panel: title and tabs ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: active tab ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("tab_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let tab = self.state.tab;
                    panels::tab_header(ui, tab);
                    match tab {
                        Tab::Optimizer => predictor::optimizer_tab(ui, &mut self.state),
                        Tab::Biomarkers => biomarkers::biomarker_tab(ui, &mut self.state),
                        Tab::Trials => trials::trials_tab(ui, &mut self.state),
                    }
                });
        });
    }
}
