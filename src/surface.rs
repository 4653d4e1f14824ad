use std::sync::Arc;

use egui::emath::Rot2;
use egui::epaint::{Galley, TextShape};
use egui::{Color32, Pos2, Shape, Stroke as EguiStroke};

/// An immediate-mode 2D target that drawable items paint themselves onto.
///
/// Coordinates are in canvas space: `(0, 0)` is the top-left corner of the
/// drawing area regardless of where the surface actually lives.
pub trait Surface {
    /// Wipe the whole surface back to its background.
    fn clear(&mut self);

    /// Connected polyline with round caps and joins.
    fn polyline(&mut self, points: &[Pos2], width: f32, color: Color32);

    /// A text glyph centred on `center`, rotated by `rotation` radians.
    fn glyph(&mut self, glyph: &str, center: Pos2, rotation: f32, size: f32, color: Color32);
}

/// Shapes for a round-capped, round-joined polyline.
///
/// Fewer than two points draws nothing, so a click without movement leaves
/// no mark.
pub fn polyline_shapes(points: &[Pos2], width: f32, color: Color32) -> Vec<Shape> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut shapes = Vec::with_capacity(points.len() + 1);
    shapes.push(Shape::line(points.to_vec(), EguiStroke::new(width, color)));
    let radius = width / 2.0;
    shapes.extend(
        points
            .iter()
            .map(|&point| Shape::circle_filled(point, radius, color)),
    );
    shapes
}

/// A laid-out glyph rotated about its own centre.
pub fn glyph_shape(galley: Arc<Galley>, center: Pos2, rotation: f32, color: Color32) -> Shape {
    // TextShape rotates around its top-left corner, so shift the anchor
    // to keep the glyph centre fixed.
    let half = galley.size() / 2.0;
    let anchor = center - Rot2::from_angle(rotation) * half;
    let mut text = TextShape::new(anchor, galley, color);
    text.angle = rotation;
    Shape::Text(text)
}

/// One call made against a [`Recording`] surface
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Polyline {
        points: Vec<Pos2>,
        width: f32,
        color: Color32,
    },
    Glyph {
        glyph: String,
        center: Pos2,
        rotation: f32,
        size: f32,
        color: Color32,
    },
}

/// A surface that just remembers what was drawn on it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Recording {
    ops: Vec<DrawOp>,
}

impl Recording {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Only the operations after the most recent clear, i.e. what is visible.
    pub fn visible(&self) -> &[DrawOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, DrawOp::Clear))
            .map_or(0, |index| index + 1);
        &self.ops[start..]
    }
}

impl Surface for Recording {
    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        self.ops.push(DrawOp::Polyline {
            points: points.to_vec(),
            width,
            color,
        });
    }

    fn glyph(&mut self, glyph: &str, center: Pos2, rotation: f32, size: f32, color: Color32) {
        self.ops.push(DrawOp::Glyph {
            glyph: glyph.to_owned(),
            center,
            rotation,
            size,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_single_point_polyline_is_empty() {
        assert!(polyline_shapes(&[pos2(1.0, 1.0)], 3.0, Color32::BLACK).is_empty());
    }

    #[test]
    fn test_polyline_has_round_caps() {
        let shapes = polyline_shapes(&[pos2(0.0, 0.0), pos2(10.0, 0.0)], 4.0, Color32::BLACK);
        // line + one disc per vertex
        assert_eq!(shapes.len(), 3);
    }

    #[test]
    fn test_recording_visible_starts_after_last_clear() {
        let mut surface = Recording::new();
        surface.polyline(&[pos2(0.0, 0.0), pos2(1.0, 1.0)], 1.0, Color32::BLACK);
        surface.clear();
        surface.glyph("*", pos2(5.0, 5.0), 0.0, 10.0, Color32::BLACK);
        assert_eq!(surface.ops().len(), 3);
        assert_eq!(surface.visible().len(), 1);
    }
}
