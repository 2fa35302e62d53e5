use std::time::Instant;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::trials::{TrialRecord, TrialStatus};
use crate::state::{AppState, ResultsView};

const CELL_TYPES: [(&str, &str); 5] = [
    ("", "Any Cell Type"),
    ("iPSC", "iPSCs"),
    ("MSC", "MSCs"),
    ("HSC", "HSCs"),
    ("NSC", "NSCs"),
];

const CONDITIONS: [(&str, &str); 6] = [
    ("", "Any Condition"),
    ("Alzheimer", "Alzheimer's Disease"),
    ("Parkinson", "Parkinson's Disease"),
    ("Frailty", "Frailty"),
    ("Macular", "Macular Degeneration"),
    ("Immuno", "Immunosenescence"),
];

const PHASES: [(&str, &str); 5] = [
    ("", "Any Phase"),
    ("Phase 1", "Phase 1"),
    ("Phase 2", "Phase 2"),
    ("Phase 3", "Phase 3"),
    ("Phase 4", "Phase 4"),
];

fn choice_combo(ui: &mut Ui, id: &str, value: &mut String, choices: &[(&str, &str)]) {
    let selected = choices
        .iter()
        .find(|(key, _)| *key == value.as_str())
        .map(|(_, label)| *label)
        .unwrap_or(choices[0].1);
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected)
        .width(220.0)
        .show_ui(ui, |ui: &mut Ui| {
            for (key, label) in choices {
                if ui.selectable_label(value == key, *label).clicked() {
                    *value = key.to_string();
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Clinical trials tab
// ---------------------------------------------------------------------------

pub fn trials_tab(ui: &mut Ui, state: &mut AppState) {
    let delay = state.config.search_delay();
    let search = &mut state.trials;

    egui::Grid::new("trial_form")
        .num_columns(4)
        .spacing([16.0, 8.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("Search Terms");
            ui.add(
                egui::TextEdit::singleline(&mut search.criteria.search)
                    .hint_text("Enter keywords (e.g., stem cell, aging)")
                    .desired_width(220.0),
            );
            ui.label("Cell Type");
            choice_combo(ui, "trial_cell_type", &mut search.criteria.cell_type, &CELL_TYPES);
            ui.end_row();

            ui.label("Condition");
            choice_combo(ui, "trial_condition", &mut search.criteria.condition, &CONDITIONS);
            ui.label("Trial Phase");
            choice_combo(ui, "trial_phase", &mut search.criteria.phase, &PHASES);
            ui.end_row();
        });

    ui.horizontal(|ui: &mut Ui| {
        ui.checkbox(&mut search.criteria.virtual_only, "Virtual participation");
        ui.checkbox(&mut search.criteria.recruiting_only, "Recruiting only");
    });

    let loading = search.loading();
    let label = if loading {
        "Searching..."
    } else {
        "Find Matching Clinical Trials"
    };
    ui.horizontal(|ui: &mut Ui| {
        if ui.add_enabled(!loading, egui::Button::new(label)).clicked() {
            search.search(delay, Instant::now());
        }
        if loading {
            ui.spinner();
        }
    });

    let Some(results) = &search.results else {
        return;
    };
    ui.separator();
    if results.is_empty() {
        ui.label("No trials match these criteria.");
        return;
    }

    ui.heading(format!("Found {} matching trials", results.len()));
    ui.horizontal(|ui: &mut Ui| {
        ui.selectable_value(&mut search.view, ResultsView::List, "List View");
        ui.selectable_value(&mut search.view, ResultsView::Detail, "Detailed View");
    });

    match search.view {
        ResultsView::List => list_view(ui, results),
        ResultsView::Detail => detail_view(ui, results),
    }
}

fn status_badge(ui: &mut Ui, status: TrialStatus) {
    let text = RichText::new(status.to_string()).small();
    let text = if status == TrialStatus::Recruiting {
        text.strong().color(Color32::from_rgb(0x2e, 0x7d, 0x32))
    } else {
        text.weak()
    };
    ui.label(text);
}

fn list_view(ui: &mut Ui, results: &[&'static TrialRecord]) {
    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto())
        .column(Column::remainder().at_least(240.0))
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .header(20.0, |mut header| {
            for title in ["ID", "Title", "Status", "Phase", "Location", "Eligibility"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for trial in results {
                body.row(22.0, |mut row| {
                    row.col(|ui| {
                        ui.hyperlink_to(trial.id, trial.url);
                    });
                    row.col(|ui| {
                        ui.label(trial.title).on_hover_text(trial.sponsor);
                    });
                    row.col(|ui| status_badge(ui, trial.status));
                    row.col(|ui| {
                        ui.label(format!("{} • {}", trial.phase, trial.intervention));
                    });
                    row.col(|ui| {
                        ui.label(trial.location);
                    });
                    row.col(|ui| {
                        ui.label(trial.eligibility_summary());
                    });
                });
            }
        });
}

fn detail_view(ui: &mut Ui, results: &[&'static TrialRecord]) {
    ScrollArea::vertical()
        .id_salt("trial_details")
        .max_height(500.0)
        .auto_shrink([false, true])
        .show(ui, |ui: &mut Ui| {
            for trial in results {
                trial_detail(ui, trial);
                ui.separator();
            }
        });
}

fn trial_detail(ui: &mut Ui, trial: &TrialRecord) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading(trial.title);
        status_badge(ui, trial.status);
    });
    ui.label(RichText::new(format!("{} • {}", trial.id, trial.sponsor)).weak());

    ui.columns(2, |cols| {
        cols[0].strong("Trial Information");
        egui::Grid::new(("trial_info", trial.id))
            .num_columns(2)
            .show(&mut cols[0], |ui: &mut Ui| {
                for (key, value) in [
                    ("Phase:", trial.phase),
                    ("Condition:", trial.condition),
                    ("Intervention:", trial.intervention),
                    ("Location:", trial.location),
                    ("Participation:", trial.participation),
                    ("Last Updated:", trial.last_updated),
                ] {
                    ui.label(RichText::new(key).strong());
                    ui.label(value);
                    ui.end_row();
                }
            });

        cols[1].strong("Eligibility");
        cols[1].label(trial.eligibility);
        cols[1].strong("Biomarkers");
        cols[1].label(trial.biomarkers.join(", "));
        if !trial.cell_types.is_empty() {
            cols[1].strong("Cell Types");
            cols[1].label(trial.cell_types.join(", "));
        }
    });

    ui.strong("Description");
    ui.label(trial.description);
    ui.hyperlink_to("View on ClinicalTrials.gov", trial.url);
}
