use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{AppState, Tab};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar with tab navigation.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(RichText::new("BioRegen AI").strong().size(18.0));
        ui.separator();

        for tab in Tab::ALL {
            ui.selectable_value(&mut state.tab, tab, tab.title());
        }

        if let Some(msg) = state.status_message.clone() {
            ui.separator();
            ui.label(RichText::new(&msg).color(Color32::RED));
            if ui.small_button("✖").clicked() {
                state.status_message = None;
            }
        }
    });
}

/// Heading and one-line description shown above each tab's content.
pub fn tab_header(ui: &mut Ui, tab: Tab) {
    let (title, blurb) = match tab {
        Tab::Optimizer => (
            "Stem Cell Protocol Optimizer",
            "Predict the success rate of your stem cell protocols",
        ),
        Tab::Biomarkers => (
            "Aging Biomarker Dashboard",
            "Visualize correlations between aging biomarkers and diseases",
        ),
        Tab::Trials => (
            "Clinical Trial Matchmaker",
            "Find relevant clinical trials based on your research parameters",
        ),
    };
    ui.heading(title);
    ui.label(RichText::new(blurb).weak());
    ui.separator();
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn import_matrix_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open correlation matrix")
        .add_filter("Supported files", &["csv", "json", "xlsx"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    let Some(path) = file else {
        return;
    };

    match crate::data::loader::load_file(&path) {
        Ok(matrix) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            state.biomarkers.import(matrix, name);
            state.status_message = None;
        }
        Err(e) => {
            log::error!("Failed to import {}: {e:#}", path.display());
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
