//! Chart renderers.
//!
//! Renderers never touch the GUI directly. Each one lays its chart out on a
//! fixed-size [`Scene`], an ordered display list of primitives in surface
//! pixels with the origin at the top-left corner. `ui::canvas` replays a
//! scene onto an egui painter.

pub mod heatmap;
pub mod line_chart;

use eframe::egui::{Align2, Color32, Pos2, Rect, Stroke, Vec2};

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    FillRect {
        rect: Rect,
        color: Color32,
    },
    /// Top-to-bottom gradient, `colors` evenly spaced over the height.
    Gradient {
        rect: Rect,
        colors: Vec<Color32>,
    },
    Polyline {
        points: Vec<Pos2>,
        stroke: Stroke,
    },
    Circle {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
    /// `anchor` places the text box relative to `pos` before rotating it by
    /// `angle` radians around `pos`.
    Text {
        pos: Pos2,
        text: String,
        anchor: Align2,
        angle: f32,
        size: f32,
        color: Color32,
    },
}

impl Primitive {
    /// Every coordinate the primitive would hand to the painter.
    pub fn points(&self) -> Vec<Pos2> {
        match self {
            Primitive::FillRect { rect, .. } | Primitive::Gradient { rect, .. } => {
                vec![rect.min, rect.max]
            }
            Primitive::Polyline { points, .. } => points.clone(),
            Primitive::Circle { center, .. } => vec![*center],
            Primitive::Text { pos, .. } => vec![*pos],
        }
    }
}

/// A cleared drawing surface plus everything drawn on it since.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub size: Vec2,
    pub background: Color32,
    pub primitives: Vec<Primitive>,
}

/// Font size used for every chart label.
pub const LABEL_SIZE: f32 = 12.0;

fn has_area(rect: &Rect) -> bool {
    rect.is_finite() && rect.width() > 0.0 && rect.height() > 0.0
}

impl Scene {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            background: Color32::WHITE,
            primitives: Vec::new(),
        }
    }

    /// Fill a rectangle. Empty or non-finite rectangles are dropped.
    pub fn fill_rect(&mut self, rect: Rect, color: Color32) {
        if has_area(&rect) {
            self.primitives.push(Primitive::FillRect { rect, color });
        }
    }

    pub fn gradient(&mut self, rect: Rect, colors: Vec<Color32>) {
        if has_area(&rect) && colors.len() >= 2 {
            self.primitives.push(Primitive::Gradient { rect, colors });
        }
    }

    pub fn polyline(&mut self, points: Vec<Pos2>, stroke: Stroke) {
        if points.len() >= 2 {
            self.primitives.push(Primitive::Polyline { points, stroke });
        }
    }

    pub fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke) {
        self.polyline(vec![from, to], stroke);
    }

    pub fn circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.primitives.push(Primitive::Circle {
            center,
            radius,
            color,
        });
    }

    pub fn text(&mut self, pos: Pos2, anchor: Align2, text: impl Into<String>, color: Color32) {
        self.rotated_text(pos, anchor, 0.0, text, color);
    }

    pub fn rotated_text(
        &mut self,
        pos: Pos2,
        anchor: Align2,
        angle: f32,
        text: impl Into<String>,
        color: Color32,
    ) {
        self.primitives.push(Primitive::Text {
            pos,
            text: text.into(),
            anchor,
            angle,
            size: LABEL_SIZE,
            color,
        });
    }

    /// Text content of every label, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn all_finite(&self) -> bool {
        self.primitives
            .iter()
            .flat_map(|p| p.points())
            .all(|p| p.x.is_finite() && p.y.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::pos2;

    use super::*;

    #[test]
    fn degenerate_fills_are_dropped() {
        let mut scene = Scene::new(100.0, 100.0);
        scene.fill_rect(Rect::from_min_size(pos2(0.0, 0.0), Vec2::new(0.0, 10.0)), Color32::RED);
        scene.fill_rect(
            Rect::from_min_size(pos2(0.0, 0.0), Vec2::new(10.0, f32::NAN)),
            Color32::RED,
        );
        scene.gradient(
            Rect::from_min_size(pos2(0.0, 0.0), Vec2::new(10.0, 10.0)),
            vec![Color32::RED],
        );
        assert!(scene.primitives.is_empty());

        scene.fill_rect(Rect::from_min_size(pos2(0.0, 0.0), Vec2::splat(1.0)), Color32::RED);
        assert_eq!(scene.primitives.len(), 1);
    }

    #[test]
    fn single_point_polyline_is_dropped() {
        let mut scene = Scene::new(10.0, 10.0);
        scene.polyline(vec![pos2(1.0, 1.0)], Stroke::new(1.0, Color32::BLACK));
        assert!(scene.primitives.is_empty());
    }
}
