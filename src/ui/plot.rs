use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points, VLine};

use crate::color::series_color;
use crate::data::generate::value_label;
use crate::state::BiomarkerState;

// ---------------------------------------------------------------------------
// Interactive trend plot
// ---------------------------------------------------------------------------

/// Zoomable alternative to the static trend chart, same series and colours.
pub fn trend_plot(ui: &mut Ui, state: &BiomarkerState) {
    let ages = state.series.ages();

    Plot::new("trend_plot")
        .legend(Legend::default())
        .height(400.0)
        .x_axis_label("Age (years)")
        .y_axis_label(value_label(&state.kind))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            if let Some((from, to)) = state.age_range.bounds() {
                for x in [from, to] {
                    plot_ui.vline(VLine::new(x).color(Color32::GRAY).width(1.0));
                }
            }

            for (index, (name, values)) in state.series.series().iter().enumerate() {
                let color = series_color(index);
                let points: Vec<[f64; 2]> = ages
                    .iter()
                    .zip(values.iter())
                    .map(|(&age, &v)| [age, v])
                    .collect();

                plot_ui.line(
                    Line::new(PlotPoints::from(points.clone()))
                        .name(name)
                        .color(color)
                        .width(2.0),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .name(name)
                        .color(color)
                        .radius(4.0),
                );
            }
        });
}
