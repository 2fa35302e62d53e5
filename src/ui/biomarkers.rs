use eframe::egui::{self, RichText, Ui};

use super::{canvas, panels, plot};
use crate::data::model::{AgeRange, BiomarkerType, DiseaseFilter};
use crate::render::heatmap::HeatmapLayout;
use crate::state::{AppState, BiomarkerState, ChartView};

// ---------------------------------------------------------------------------
// Biomarker dashboard tab
// ---------------------------------------------------------------------------

pub fn biomarker_tab(ui: &mut Ui, state: &mut AppState) {
    selectors(ui, &mut state.biomarkers);
    ui.add_space(8.0);

    let mut import_requested = false;
    ui.group(|ui: &mut Ui| {
        ui.horizontal(|ui: &mut Ui| {
            ui.strong("Upload Your Data");
            if let Some(source) = &state.biomarkers.imported {
                ui.label(RichText::new(format!("showing {source}")).weak());
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
                if ui.button("Use Sample Data").clicked() {
                    state.biomarkers.use_sample_data();
                }
                if ui.button("Upload CSV/JSON…").clicked() {
                    import_requested = true;
                }
            });
        });
    });
    if import_requested {
        panels::import_matrix_dialog(state);
    }
    ui.add_space(8.0);

    let bio = &mut state.biomarkers;
    ui.horizontal(|ui: &mut Ui| {
        ui.selectable_value(&mut bio.view, ChartView::Heatmap, "Correlation Heatmap");
        ui.selectable_value(&mut bio.view, ChartView::Trends, "Age Trends");
    });
    ui.separator();

    match bio.view {
        ChartView::Heatmap => heatmap_view(ui, bio),
        ChartView::Trends => trends_view(ui, bio),
    }
}

fn selectors(ui: &mut Ui, bio: &mut BiomarkerState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Biomarker Type");
        let mut kind = bio.kind.clone();
        egui::ComboBox::from_id_salt("biomarker_type")
            .selected_text(kind.label().to_string())
            .show_ui(ui, |ui: &mut Ui| {
                for choice in BiomarkerType::choices() {
                    let label = choice.label().to_string();
                    ui.selectable_value(&mut kind, choice, label);
                }
            });
        bio.set_kind(kind);

        ui.separator();
        ui.label("Age Range");
        let mut age_range = bio.age_range;
        egui::ComboBox::from_id_salt("age_range")
            .selected_text(age_range.label())
            .show_ui(ui, |ui: &mut Ui| {
                for choice in AgeRange::CHOICES {
                    ui.selectable_value(&mut age_range, choice, choice.label());
                }
            });
        bio.set_age_range(age_range);

        ui.separator();
        ui.label("Disease Filter");
        let mut disease = bio.disease.clone();
        egui::ComboBox::from_id_salt("disease_filter")
            .selected_text(disease.label().to_string())
            .show_ui(ui, |ui: &mut Ui| {
                for choice in DiseaseFilter::choices() {
                    let label = choice.label().to_string();
                    ui.selectable_value(&mut disease, choice, label);
                }
            });
        bio.set_disease(disease);
    });
}

fn heatmap_view(ui: &mut Ui, bio: &BiomarkerState) {
    let layout = HeatmapLayout::new(bio.matrix.rows().len(), bio.matrix.cols().len());

    egui::ScrollArea::horizontal()
        .id_salt("heatmap_scroll")
        .show(ui, |ui: &mut Ui| {
            let response = canvas::show_scene(ui, &bio.heatmap);
            let hovered = response
                .hover_pos()
                .and_then(|p| layout.cell_at(p - response.rect.min.to_vec2()));
            if let Some((i, j)) = hovered {
                let text = format!(
                    "{} × {}: {:.3}",
                    bio.matrix.rows()[i],
                    bio.matrix.cols()[j],
                    bio.matrix.value(i, j)
                );
                response.on_hover_text_at_pointer(text);
            }
        });

    ui.vertical_centered(|ui: &mut Ui| {
        let caption = match &bio.imported {
            Some(source) => format!("Correlations loaded from {source}"),
            None => format!(
                "Correlation between {} biomarkers and age-related diseases",
                bio.kind
            ),
        };
        ui.label(RichText::new(caption).weak());
    });
}

fn trends_view(ui: &mut Ui, bio: &mut BiomarkerState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.checkbox(&mut bio.interactive, "Interactive");
        if ui.button("Resample").clicked() {
            bio.resample();
        }
    });

    if bio.interactive {
        plot::trend_plot(ui, bio);
    } else {
        egui::ScrollArea::horizontal()
            .id_salt("trend_scroll")
            .show(ui, |ui: &mut Ui| {
                canvas::show_scene(ui, &bio.trends);
            });
    }

    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(format!("Age-related changes in {} biomarkers", bio.kind)).weak());
    });
}
