use std::f32::consts::FRAC_PI_2;

use eframe::egui::{pos2, Align2, Color32, Rect, Stroke};

use super::Scene;
use crate::color::series_color;
use crate::data::model::SeriesSet;

pub const WIDTH: f32 = 800.0;
pub const HEIGHT: f32 = 400.0;

const PAD_LEFT: f32 = 60.0;
const PAD_RIGHT: f32 = 40.0;
const PAD_TOP: f32 = 20.0;
const PAD_BOTTOM: f32 = 60.0;

const PLOT_WIDTH: f32 = WIDTH - PAD_LEFT - PAD_RIGHT;
const PLOT_HEIGHT: f32 = HEIGHT - PAD_TOP - PAD_BOTTOM;
const PLOT_BOTTOM: f32 = HEIGHT - PAD_BOTTOM;

const Y_TICKS: usize = 5;
const POINT_RADIUS: f32 = 4.0;

const GRID_COLOR: Color32 = Color32::from_rgb(0xee, 0xee, 0xee);
const BAND_COLOR: Color32 = Color32::from_rgba_premultiplied(20, 40, 70, 40);

// ---------------------------------------------------------------------------
// Vertical scale
// ---------------------------------------------------------------------------

/// Value range of the y axis with 10% headroom; the bottom never goes below 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YScale {
    pub min: f64,
    pub max: f64,
}

impl YScale {
    pub fn from_bounds(bounds: Option<(f64, f64)>) -> Self {
        let (lo, hi) = bounds.unwrap_or((0.0, 0.0));
        Self {
            min: (lo * 0.9).max(0.0),
            max: hi * 1.1,
        }
    }

    /// No usable span: every value is drawn on the middle line.
    pub fn is_degenerate(&self) -> bool {
        !(self.min.is_finite() && self.max.is_finite() && self.max > self.min)
    }

    /// Position of `value` in [0, 1] from the bottom of the plot area.
    pub fn fraction(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return 0.5;
        }
        let t = (value - self.min) / (self.max - self.min);
        if t.is_finite() {
            t
        } else {
            0.5
        }
    }

    fn y(&self, value: f64) -> f32 {
        PLOT_BOTTOM - self.fraction(value) as f32 * PLOT_HEIGHT
    }
}

// ---------------------------------------------------------------------------
// Horizontal placement
// ---------------------------------------------------------------------------

fn sample_x(index: usize, count: usize) -> f32 {
    if count <= 1 {
        return PAD_LEFT + PLOT_WIDTH / 2.0;
    }
    PAD_LEFT + index as f32 / (count - 1) as f32 * PLOT_WIDTH
}

/// Age mapped onto the axis spanned by the first and last sample.
fn age_x(ages: &[f64], age: f64) -> Option<f32> {
    let (&first, &last) = (ages.first()?, ages.last()?);
    if last <= first {
        return None;
    }
    let t = ((age - first) / (last - first)).clamp(0.0, 1.0);
    Some(PAD_LEFT + t as f32 * PLOT_WIDTH)
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Lay out the age-trend chart. `highlight` shades an inclusive age band.
pub fn render(set: &SeriesSet, y_title: &str, highlight: Option<(f64, f64)>) -> Scene {
    let mut scene = Scene::new(WIDTH, HEIGHT);
    let ages = set.ages();
    let scale = YScale::from_bounds(set.value_bounds());

    if let Some((from, to)) = highlight {
        if let (Some(x0), Some(x1)) = (age_x(ages, from), age_x(ages, to)) {
            scene.fill_rect(
                Rect::from_x_y_ranges(x0..=x1, PAD_TOP..=PLOT_BOTTOM),
                BAND_COLOR,
            );
        }
    }

    for tick in 0..=Y_TICKS {
        let t = tick as f64 / Y_TICKS as f64;
        let value = scale.min + (scale.max - scale.min) * t;
        let y = PLOT_BOTTOM - t as f32 * PLOT_HEIGHT;
        scene.line(
            pos2(PAD_LEFT, y),
            pos2(WIDTH - PAD_RIGHT, y),
            Stroke::new(1.0, GRID_COLOR),
        );
        scene.text(
            pos2(PAD_LEFT - 10.0, y),
            Align2::RIGHT_CENTER,
            format!("{value:.1}"),
            Color32::BLACK,
        );
    }

    scene.polyline(
        vec![
            pos2(PAD_LEFT, PAD_TOP),
            pos2(PAD_LEFT, PLOT_BOTTOM),
            pos2(WIDTH - PAD_RIGHT, PLOT_BOTTOM),
        ],
        Stroke::new(1.0, Color32::BLACK),
    );

    for (i, age) in ages.iter().enumerate() {
        scene.text(
            pos2(sample_x(i, ages.len()), PLOT_BOTTOM + 10.0),
            Align2::CENTER_TOP,
            age.to_string(),
            Color32::BLACK,
        );
    }
    scene.text(
        pos2(WIDTH / 2.0, HEIGHT - 15.0),
        Align2::CENTER_TOP,
        "Age (years)",
        Color32::BLACK,
    );
    scene.rotated_text(
        pos2(15.0, HEIGHT / 2.0),
        Align2::CENTER_CENTER,
        -FRAC_PI_2,
        y_title,
        Color32::BLACK,
    );

    for (index, (_, values)) in set.series().iter().enumerate() {
        let color = series_color(index);
        let points: Vec<_> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| pos2(sample_x(i, values.len()), scale.y(v)))
            .collect();
        scene.polyline(points.clone(), Stroke::new(2.0, color));
        for p in points {
            scene.circle(p, POINT_RADIUS, color);
        }
    }

    draw_legend(&mut scene, set);
    scene
}

fn draw_legend(scene: &mut Scene, set: &SeriesSet) {
    let x = WIDTH - PAD_RIGHT - 150.0;
    let top = PAD_TOP + 20.0;

    for (index, (name, _)) in set.series().iter().enumerate() {
        let y = top + index as f32 * 20.0;
        let color = series_color(index);
        scene.line(pos2(x, y), pos2(x + 20.0, y), Stroke::new(2.0, color));
        scene.circle(pos2(x + 10.0, y), POINT_RADIUS, color);
        scene.text(pos2(x + 30.0, y), Align2::LEFT_CENTER, name, Color32::BLACK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generate::{age_series, AGES};
    use crate::data::model::BiomarkerType;
    use crate::render::Primitive;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn constant(value: f64) -> SeriesSet {
        SeriesSet::new(
            AGES.to_vec(),
            vec![
                ("flat".into(), vec![value; AGES.len()]),
                ("twin".into(), vec![value; AGES.len()]),
            ],
        )
        .unwrap()
    }

    fn markers(scene: &Scene) -> Vec<(f32, f32, Color32)> {
        scene
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Circle { center, color, .. } => Some((center.x, center.y, *color)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn scale_adds_headroom_and_floors_at_zero() {
        let s = YScale::from_bounds(Some((50.0, 100.0)));
        assert!((s.min - 45.0).abs() < 1e-9);
        assert!((s.max - 110.0).abs() < 1e-9);
        assert_eq!(YScale::from_bounds(Some((-5.0, 10.0))).min, 0.0);
    }

    #[test]
    fn degenerate_scales() {
        assert!(YScale::from_bounds(None).is_degenerate());
        assert!(YScale::from_bounds(Some((0.0, 0.0))).is_degenerate());
        assert!(YScale::from_bounds(Some((-4.0, -2.0))).is_degenerate());
        assert!(!YScale::from_bounds(Some((3.0, 3.0))).is_degenerate());
    }

    #[test]
    fn zero_series_renders_on_the_middle_line() {
        let scene = render(&constant(0.0), "Biomarker Value", None);
        assert!(scene.all_finite());
        let mid = PLOT_BOTTOM - PLOT_HEIGHT / 2.0;
        let points = markers(&scene);
        // 2 series × 8 samples + 2 legend dots
        assert_eq!(points.len(), 18);
        assert!(points[..16].iter().all(|(_, y, _)| (*y - mid).abs() < 1e-3));
    }

    #[test]
    fn constant_series_never_produces_nan() {
        for value in [0.0, 5.0, -3.0, 1e-300] {
            assert!(render(&constant(value), "x", None).all_finite(), "{value}");
        }
    }

    #[test]
    fn empty_set_still_draws_axes() {
        let set = SeriesSet::new(AGES.to_vec(), vec![]).unwrap();
        let scene = render(&set, "Biomarker Value", None);
        assert!(scene.all_finite());
        assert!(markers(&scene).is_empty());
        assert!(scene.texts().any(|t| t == "Age (years)"));
    }

    #[test]
    fn points_span_the_plot_and_cycle_colours() {
        let set = age_series(&BiomarkerType::Epigenetic, &mut StdRng::seed_from_u64(1));
        let scene = render(&set, "Epigenetic Age (years)", None);
        let points = markers(&scene);
        assert_eq!(points.len(), 3 * 8 + 3);
        assert_eq!(points[0].0, PAD_LEFT);
        assert_eq!(points[7].0, WIDTH - PAD_RIGHT);
        assert_eq!(points[8].2, series_color(1));
        for (x, y, _) in &points[..24] {
            assert!(*x >= PAD_LEFT && *x <= WIDTH - PAD_RIGHT);
            assert!(*y >= PAD_TOP && *y <= PLOT_BOTTOM);
        }
    }

    #[test]
    fn axis_labels_and_legend() {
        let set = age_series(&BiomarkerType::Telomere, &mut StdRng::seed_from_u64(3));
        let scene = render(&set, "Telomere Length (kb)", None);
        let texts: Vec<&str> = scene.texts().collect();
        for age in ["20", "50", "90"] {
            assert!(texts.contains(&age));
        }
        assert!(texts.contains(&"Leukocyte TL"));
        assert!(texts.contains(&"Lymphocyte TL"));
        assert!(texts.contains(&"Telomere Length (kb)"));
        // six y ticks
        let ticks = texts.iter().filter(|t| t.contains('.')).count();
        assert_eq!(ticks, Y_TICKS + 1);
    }

    #[test]
    fn highlight_band_is_shaded() {
        let set = constant(10.0);
        let scene = render(&set, "x", Some((41.0, 60.0)));
        let band = scene.primitives.iter().find_map(|p| match p {
            Primitive::FillRect { rect, .. } => Some(*rect),
            _ => None,
        });
        let band = band.unwrap();
        let per_year = PLOT_WIDTH / 70.0;
        assert!((band.left() - (PAD_LEFT + 21.0 * per_year)).abs() < 1e-3);
        assert!((band.right() - (PAD_LEFT + 40.0 * per_year)).abs() < 1e-3);

        let plain = render(&set, "x", None);
        assert!(!plain
            .primitives
            .iter()
            .any(|p| matches!(p, Primitive::FillRect { .. })));
    }

    #[test]
    fn rendering_is_idempotent() {
        let set = age_series(&BiomarkerType::Inflammatory, &mut StdRng::seed_from_u64(9));
        assert_eq!(render(&set, "y", None), render(&set, "y", None));
    }
}
