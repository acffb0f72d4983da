// src/renderer.rs
use std::f32::consts::TAU;

use eframe::egui::{self, Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke};

use crate::geometry::hit_testing::{centroid, midpoint, ray_angle};
use crate::state::InteractionStateMachine;

const POINT_RADIUS: f32 = 5.0;
const PENDING_RADIUS: f32 = 3.0;
const DRAG_RADIUS: f32 = 7.0;
const ANGLE_ARC_RADIUS: f32 = 25.0;
const ARC_SEGMENTS: usize = 24;

/// Draws the diagram, the transient construction state and highlights.
///
/// Pure view: reads the state machine, never mutates it.
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
    point_color: Color32,
    pending_color: Color32,
    drag_color: Color32,
    segment_color: Color32,
    triangle_color: Color32,
    angle_color: Color32,
    staged_color: Color32,
    label_color: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            point_color: Color32::from_rgb(0x00, 0x00, 0xff),
            pending_color: Color32::from_rgb(0xff, 0xaa, 0x00),
            drag_color: Color32::from_rgb(0xff, 0x00, 0xff),
            segment_color: Color32::from_rgb(0x00, 0xff, 0x00),
            triangle_color: Color32::from_rgb(0xff, 0x00, 0x00),
            angle_color: Color32::from_rgb(0xff, 0x99, 0x00),
            staged_color: Color32::from_rgb(0xff, 0xd7, 0x00),
            label_color: Color32::from_rgb(0x33, 0x33, 0x33),
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the current frame into `rect`; diagram coordinates are relative to `rect.min`
    pub fn render(&self, painter: &Painter, rect: Rect, editor: &InteractionStateMachine) {
        painter.rect_filled(rect, 0.0, self.background);

        let store = editor.store();
        let staged = editor.staged_references();
        let show_labels = editor.config().show_labels;
        let to_screen = |pos: Pos2| rect.min + pos.to_vec2();
        let stroke_for = |id: &str, color: Color32| {
            if staged.contains(id) {
                Stroke::new(4.0, self.staged_color)
            } else {
                Stroke::new(2.0, color)
            }
        };

        for segment in store.segments() {
            let Some((a, b)) = store.segment_endpoints(segment) else {
                continue;
            };
            let (a, b) = (to_screen(a), to_screen(b));
            painter.line_segment([a, b], stroke_for(segment.id(), self.segment_color));
            if show_labels {
                self.label(painter, midpoint(a, b) + egui::vec2(5.0, -15.0), segment.id());
            }
        }

        for triangle in store.triangles() {
            let Some(vertices) = store.triangle_vertices(triangle) else {
                continue;
            };
            let [a, b, c] = vertices.map(to_screen);
            painter.add(Shape::closed_line(
                vec![a, b, c],
                stroke_for(triangle.id(), self.triangle_color),
            ));
            if show_labels {
                self.label(painter, centroid(a, b, c) + egui::vec2(0.0, -10.0), triangle.id());
            }
        }

        for angle in store.angles() {
            let Some((p1, vertex, p2)) = store.angle_rays(angle) else {
                continue;
            };
            let (p1, vertex, p2) = (to_screen(p1), to_screen(vertex), to_screen(p2));
            let stroke = stroke_for(angle.id(), self.angle_color);
            painter.line_segment([vertex, p1], stroke);
            painter.line_segment([vertex, p2], stroke);
            painter.add(Shape::line(
                arc_points(vertex, ANGLE_ARC_RADIUS, ray_angle(vertex, p1), ray_angle(vertex, p2)),
                stroke,
            ));
            if show_labels {
                self.label(painter, vertex + egui::vec2(10.0, 10.0), angle.id());
            }
        }

        let drag_target = editor.drag_target();
        for point in store.points() {
            let center = to_screen(point.pos());
            let (fill, radius) = if drag_target == Some(point.id()) {
                (self.drag_color, DRAG_RADIUS)
            } else {
                (self.point_color, POINT_RADIUS)
            };
            if staged.contains(point.id()) {
                painter.circle_stroke(center, radius + 4.0, Stroke::new(2.0, self.staged_color));
            }
            painter.circle(center, radius, fill, Stroke::new(1.0, Color32::BLACK));
            if show_labels {
                self.label(painter, center + egui::vec2(8.0, -8.0), point.id());
            }
        }

        // Outline of the unfinished segment or triangle
        let outline: Vec<Pos2> = editor
            .state()
            .anchors()
            .iter()
            .filter_map(|anchor| anchor.pos(store))
            .map(to_screen)
            .collect();
        if outline.len() > 1 {
            painter.add(Shape::line(outline, Stroke::new(1.0, self.pending_color)));
        }

        for pending in editor.pending_points() {
            painter.circle(
                to_screen(pending.pos),
                PENDING_RADIUS,
                self.pending_color,
                Stroke::new(1.0, Color32::BLACK),
            );
        }
    }

    fn label(&self, painter: &Painter, pos: Pos2, text: &str) {
        painter.text(
            pos,
            Align2::LEFT_BOTTOM,
            text,
            FontId::proportional(10.0),
            self.label_color,
        );
    }
}

/// Polyline approximating the arc from `start` to `end` radians, sweeping in
/// the direction of increasing angle
pub fn arc_points(center: Pos2, radius: f32, start: f32, end: f32) -> Vec<Pos2> {
    let sweep = (end - start).rem_euclid(TAU);
    (0..=ARC_SEGMENTS)
        .map(|i| {
            let theta = start + sweep * i as f32 / ARC_SEGMENTS as f32;
            center + radius * egui::vec2(theta.cos(), theta.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PointerEvent;
    use crate::tools::Tool;

    #[test]
    fn test_arc_endpoints() {
        let center = Pos2::new(0.0, 0.0);
        let points = arc_points(center, 10.0, 0.0, TAU / 4.0);
        assert_eq!(points.len(), ARC_SEGMENTS + 1);
        assert!(points[0].distance(Pos2::new(10.0, 0.0)) < 1e-3);
        assert!(points[ARC_SEGMENTS].distance(Pos2::new(0.0, 10.0)) < 1e-3);
    }

    #[test]
    fn test_arc_wraps_forward() {
        let center = Pos2::new(0.0, 0.0);
        // From 90 degrees forward to 0 degrees is a three-quarter sweep.
        let points = arc_points(center, 10.0, TAU / 4.0, 0.0);
        let halfway = 10.0 * std::f32::consts::FRAC_1_SQRT_2;
        assert!(points[ARC_SEGMENTS / 2].distance(Pos2::new(-halfway, -halfway)) < 1e-2);
    }

    #[test]
    fn test_render_basics() {
        let mut editor = InteractionStateMachine::default();
        editor.select_tool(Tool::AddTriangle);
        editor.handle_pointer(PointerEvent::down(Pos2::new(10.0, 10.0))).unwrap();
        editor.handle_pointer(PointerEvent::down(Pos2::new(90.0, 10.0))).unwrap();

        let ctx = egui::Context::default();
        let layer_id = egui::LayerId::background();
        let rect = Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        // Fonts only exist inside a frame.
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            let painter = Painter::new(ctx.clone(), layer_id, rect);
            Renderer::new().render(&painter, rect, &editor);
        });
    }
}
