use eframe::egui::emath::Rot2;
use eframe::egui::epaint::{Mesh, TextShape};
use eframe::egui::{Color32, FontId, Painter, Pos2, Rect, Response, Sense, Shape, Ui, Vec2};

use crate::render::{Primitive, Scene};

// ---------------------------------------------------------------------------
// Scene → egui painter
// ---------------------------------------------------------------------------

/// Allocate the scene's exact size in `ui` and paint it. Scene coordinates are
/// offset by the top-left corner of the allocated rect.
pub fn show_scene(ui: &mut Ui, scene: &Scene) -> Response {
    let (response, painter) = ui.allocate_painter(scene.size, Sense::hover());
    let origin = response.rect.min.to_vec2();

    painter.rect_filled(response.rect, 0.0, scene.background);
    for primitive in &scene.primitives {
        paint(&painter, origin, primitive);
    }
    response
}

fn paint(painter: &Painter, origin: Vec2, primitive: &Primitive) {
    match primitive {
        Primitive::FillRect { rect, color } => {
            painter.rect_filled(rect.translate(origin), 0.0, *color);
        }
        Primitive::Gradient { rect, colors } => {
            painter.add(Shape::mesh(gradient_mesh(rect.translate(origin), colors)));
        }
        Primitive::Polyline { points, stroke } => {
            let points = points.iter().map(|p| *p + origin).collect();
            painter.add(Shape::line(points, *stroke));
        }
        Primitive::Circle {
            center,
            radius,
            color,
        } => {
            painter.circle_filled(*center + origin, *radius, *color);
        }
        Primitive::Text {
            pos,
            text,
            anchor,
            angle,
            size,
            color,
        } => {
            let galley = painter.layout_no_wrap(text.clone(), FontId::proportional(*size), *color);
            // Offset of the galley's top-left corner from the anchor point,
            // rotated together with the text.
            let offset = anchor.anchor_size(Pos2::ZERO, galley.size()).min.to_vec2();
            let top_left = *pos + origin + Rot2::from_angle(*angle) * offset;
            painter.add(TextShape::new(top_left, galley, *color).with_angle(*angle));
        }
    }
}

/// Horizontal bands between consecutive colours, blended per vertex.
fn gradient_mesh(rect: Rect, colors: &[Color32]) -> Mesh {
    let mut mesh = Mesh::default();
    if colors.len() < 2 {
        return mesh;
    }
    let bands = (colors.len() - 1) as f32;

    for (k, pair) in colors.windows(2).enumerate() {
        let y0 = rect.top() + rect.height() * k as f32 / bands;
        let y1 = rect.top() + rect.height() * (k + 1) as f32 / bands;
        let base = mesh.vertices.len() as u32;
        mesh.colored_vertex(Pos2::new(rect.left(), y0), pair[0]);
        mesh.colored_vertex(Pos2::new(rect.right(), y0), pair[0]);
        mesh.colored_vertex(Pos2::new(rect.right(), y1), pair[1]);
        mesh.colored_vertex(Pos2::new(rect.left(), y1), pair[1]);
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base, base + 2, base + 3);
    }
    mesh
}
