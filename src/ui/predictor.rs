use std::time::Instant;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::predictor::{CellType, PH_RANGE, TEMPERATURE_RANGE};
use crate::state::AppState;

/// Protocol form plus the revealed prediction.
pub fn optimizer_tab(ui: &mut Ui, state: &mut AppState) {
    let delay = state.config.prediction_delay();
    let form = &mut state.predictor;

    egui::Grid::new("protocol_form")
        .num_columns(2)
        .spacing([24.0, 8.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("Cell Type");
            let selected = form
                .input
                .cell_type
                .map(|c| c.label())
                .unwrap_or("Select cell type");
            egui::ComboBox::from_id_salt("cell_type")
                .selected_text(selected)
                .width(320.0)
                .show_ui(ui, |ui: &mut Ui| {
                    for cell in CellType::ALL {
                        ui.selectable_value(&mut form.input.cell_type, Some(cell), cell.label());
                    }
                });
            ui.end_row();

            ui.label("Growth Factors (comma separated)");
            ui.add(
                egui::TextEdit::singleline(&mut form.input.growth_factors)
                    .hint_text("e.g., TGF-β, FGF2, EGF")
                    .desired_width(320.0),
            );
            ui.end_row();

            ui.label("Temperature (°C)");
            ui.add(
                egui::Slider::new(&mut form.input.temperature, TEMPERATURE_RANGE)
                    .step_by(0.1)
                    .fixed_decimals(1),
            );
            ui.end_row();

            ui.label("pH");
            ui.add(
                egui::Slider::new(&mut form.input.ph, PH_RANGE)
                    .step_by(0.1)
                    .fixed_decimals(1),
            );
            ui.end_row();
        });

    ui.add_space(8.0);

    let loading = form.loading();
    let label = if loading {
        "Analyzing Protocol..."
    } else {
        "Predict Success Rate"
    };
    ui.horizontal(|ui: &mut Ui| {
        if ui.add_enabled(!loading, egui::Button::new(label)).clicked() {
            form.submit(delay, Instant::now());
        }
        if loading {
            ui.spinner();
        }
    });

    if let Some(err) = &form.error {
        ui.label(RichText::new(format!("Please {err}.")).color(Color32::RED));
    }

    let Some(result) = &form.result else {
        return;
    };

    ui.add_space(12.0);
    ui.group(|ui: &mut Ui| {
        ui.horizontal(|ui: &mut Ui| {
            ui.strong("Success Probability");
            ui.label(format!("{}%", result.success));
        });
        ui.add(egui::ProgressBar::new(result.success as f32 / 100.0));

        let color = if result.is_confident() {
            Color32::from_rgb(0x2e, 0x7d, 0x32)
        } else {
            Color32::from_rgb(0xc6, 0x28, 0x28)
        };
        ui.label(RichText::new(result.headline()).strong().color(color));
        ui.label(result.to_string());

        ui.add_space(6.0);
        ui.strong("Recommendations:");
        for rec in &result.recommendations {
            ui.label(format!("• {rec}"));
        }
    });
}
