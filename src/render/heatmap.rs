use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use eframe::egui::{pos2, vec2, Align2, Color32, Pos2, Rect, Vec2};

use super::Scene;
use crate::color::{correlation_color, legend_gradient};
use crate::data::model::CorrelationMatrix;

/// Left edge of the grid; row labels sit right-aligned just before it.
const GRID_LEFT: f32 = 150.0;
const GRID_TOP: f32 = 50.0;
const ROW_LABEL_X: f32 = 140.0;

const LEGEND_WIDTH: f32 = 20.0;
const LEGEND_HEIGHT: f32 = 200.0;
const LEGEND_SAMPLES: usize = 21;

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Surface size and cell geometry for a `rows × cols` heatmap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatmapLayout {
    pub rows: usize,
    pub cols: usize,
    pub size: Vec2,
    pub cell: Vec2,
}

impl HeatmapLayout {
    pub fn new(rows: usize, cols: usize) -> Self {
        let width = (cols as f32 * 100.0 + 150.0).max(600.0);
        let height = (rows as f32 * 40.0 + 100.0).max(400.0);
        // An empty axis still divides by one cell.
        let cell = vec2(
            (width - GRID_LEFT) / cols.max(1) as f32,
            (height - 100.0) / rows.max(1) as f32,
        );
        Self {
            rows,
            cols,
            size: vec2(width, height),
            cell,
        }
    }

    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        Rect::from_min_size(
            pos2(
                GRID_LEFT + col as f32 * self.cell.x,
                GRID_TOP + row as f32 * self.cell.y,
            ),
            self.cell,
        )
    }

    /// Cell under a surface position, if any.
    pub fn cell_at(&self, pos: Pos2) -> Option<(usize, usize)> {
        let col = ((pos.x - GRID_LEFT) / self.cell.x).floor();
        let row = ((pos.y - GRID_TOP) / self.cell.y).floor();
        if col < 0.0 || row < 0.0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        (row < self.rows && col < self.cols).then_some((row, col))
    }

    pub fn legend_rect(&self) -> Rect {
        Rect::from_min_size(
            pos2(self.size.x - 50.0, (self.size.y - LEGEND_HEIGHT) / 2.0),
            vec2(LEGEND_WIDTH, LEGEND_HEIGHT),
        )
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Lay out the correlation heatmap: labelled grid plus a gradient legend.
pub fn render(matrix: &CorrelationMatrix) -> Scene {
    let layout = HeatmapLayout::new(matrix.rows().len(), matrix.cols().len());
    let mut scene = Scene::new(layout.size.x, layout.size.y);
    let cell = layout.cell;

    for (i, label) in matrix.rows().iter().enumerate() {
        let y = GRID_TOP + i as f32 * cell.y + cell.y / 2.0;
        scene.text(pos2(ROW_LABEL_X, y), Align2::RIGHT_CENTER, label, Color32::BLACK);
    }

    let below_grid = GRID_TOP + layout.rows as f32 * cell.y + 10.0;
    for (j, label) in matrix.cols().iter().enumerate() {
        let x = GRID_LEFT + j as f32 * cell.x + cell.x / 2.0;
        scene.rotated_text(
            pos2(x, below_grid),
            Align2::CENTER_TOP,
            -FRAC_PI_4,
            label,
            Color32::BLACK,
        );
    }

    for (i, row) in matrix.values().iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            let rect = layout.cell_rect(i, j);
            scene.fill_rect(rect, correlation_color(value));
            scene.text(
                rect.center(),
                Align2::CENTER_CENTER,
                cell_label(value),
                Color32::WHITE,
            );
        }
    }

    draw_legend(&mut scene, layout.legend_rect());
    scene
}

/// Two-decimal cell text; a negative zero prints as `0.00`.
fn cell_label(value: f64) -> String {
    format!("{:.2}", value + 0.0)
}

fn draw_legend(scene: &mut Scene, rect: Rect) {
    let colors = (0..LEGEND_SAMPLES)
        .map(|k| legend_gradient(k as f32 / (LEGEND_SAMPLES - 1) as f32))
        .collect();
    scene.gradient(rect, colors);

    let label_x = rect.right() + 5.0;
    scene.text(pos2(label_x, rect.top()), Align2::LEFT_CENTER, "-1.0", Color32::BLACK);
    scene.text(pos2(label_x, rect.center().y), Align2::LEFT_CENTER, "0.0", Color32::BLACK);
    scene.text(pos2(label_x, rect.bottom()), Align2::LEFT_CENTER, "+1.0", Color32::BLACK);

    scene.rotated_text(
        pos2(rect.left() - 10.0, rect.center().y),
        Align2::CENTER_CENTER,
        -FRAC_PI_2,
        "Correlation",
        Color32::BLACK,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generate::correlation_matrix;
    use crate::data::model::{BiomarkerType, DiseaseFilter};
    use crate::render::Primitive;

    fn fills(scene: &Scene) -> Vec<(Rect, Color32)> {
        scene
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::FillRect { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn surface_grows_with_matrix_but_keeps_minimum() {
        assert_eq!(HeatmapLayout::new(5, 7).size, vec2(850.0, 400.0));
        assert_eq!(HeatmapLayout::new(7, 1).size, vec2(600.0, 400.0));
        assert_eq!(HeatmapLayout::new(9, 2).size, vec2(600.0, 460.0));
    }

    #[test]
    fn one_fill_per_cell_with_sign_colour() {
        let m = correlation_matrix(&BiomarkerType::Epigenetic, &DiseaseFilter::All);
        let scene = render(&m);
        let cells = fills(&scene);
        assert_eq!(cells.len(), 5 * 7);

        let layout = HeatmapLayout::new(5, 7);
        assert_eq!(cells[0].0, layout.cell_rect(0, 0));
        assert_eq!(cells[8].1, correlation_color(m.value(1, 1)));
        assert!(cells.iter().all(|(r, _)| r.width() > 0.0 && r.height() > 0.0));
    }

    #[test]
    fn labels_values_and_legend_text() {
        let m = correlation_matrix(&BiomarkerType::Telomere, &DiseaseFilter::Diabetes);
        let scene = render(&m);
        let texts: Vec<&str> = scene.texts().collect();
        assert!(texts.contains(&"Leukocyte TL"));
        assert!(texts.contains(&"Type 2 Diabetes"));
        assert!(texts.contains(&"0.00"));
        for label in ["-1.0", "0.0", "+1.0", "Correlation"] {
            assert!(texts.contains(&label), "{label}");
        }
    }

    #[test]
    fn negative_zero_cells_print_unsigned() {
        assert_eq!(cell_label(-0.0), "0.00");
        assert_eq!(cell_label(-0.25), "-0.25");

        let m = correlation_matrix(&BiomarkerType::Telomere, &DiseaseFilter::All);
        let col = m.cols().iter().position(|c| c == "Accelerated Aging").unwrap();
        assert!(m.value(0, col).is_sign_negative());
        let scene = render(&m);
        assert!(!scene.texts().any(|t| t == "-0.00"));
    }

    #[test]
    fn column_labels_are_rotated() {
        let m = correlation_matrix(&BiomarkerType::Metabolic, &DiseaseFilter::Cvd);
        let scene = render(&m);
        let rotated = scene.primitives.iter().any(|p| {
            matches!(p, Primitive::Text { text, angle, .. }
                if text == "Cardiovascular Disease" && (*angle + FRAC_PI_4).abs() < 1e-6)
        });
        assert!(rotated);
    }

    #[test]
    fn empty_matrix_draws_no_cells() {
        let m = CorrelationMatrix::new(vec![], vec![], vec![]).unwrap();
        let scene = render(&m);
        assert!(fills(&scene).is_empty());
        assert!(scene.all_finite());
        assert!(scene
            .primitives
            .iter()
            .any(|p| matches!(p, Primitive::Gradient { .. })));

        let rows_only =
            CorrelationMatrix::new(vec!["IL-6".into()], vec![], vec![vec![]]).unwrap();
        let scene = render(&rows_only);
        assert!(fills(&scene).is_empty());
        assert!(scene.all_finite());
    }

    #[test]
    fn rendering_is_idempotent() {
        let m = correlation_matrix(&BiomarkerType::Inflammatory, &DiseaseFilter::All);
        assert_eq!(render(&m), render(&m));
    }

    #[test]
    fn hit_testing_maps_positions_to_cells() {
        let layout = HeatmapLayout::new(4, 7);
        let centre = layout.cell_rect(2, 3).center();
        assert_eq!(layout.cell_at(centre), Some((2, 3)));
        assert_eq!(layout.cell_at(pos2(10.0, 60.0)), None);
        assert_eq!(layout.cell_at(pos2(200.0, 5.0)), None);
        assert_eq!(layout.cell_at(pos2(200.0, layout.size.y - 1.0)), None);
    }
}
