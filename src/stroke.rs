use egui::Pos2;

use crate::config::PenStyle;
use crate::item::ItemId;
use crate::surface::Surface;

/// A free-hand polyline.
///
/// Width and ink are captured from the [`PenStyle`] at the moment the stroke
/// is started; later pen changes never reach an existing stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    id: ItemId,
    points: Vec<Pos2>,
    style: PenStyle,
}

impl Stroke {
    // Start a stroke with its first point
    pub fn begin(start: Pos2, style: PenStyle) -> Self {
        Self {
            id: ItemId::new(),
            points: vec![start],
            style,
        }
    }

    // Build a finished stroke from a list of points
    pub fn from_points(points: Vec<Pos2>, style: PenStyle) -> Self {
        Self {
            id: ItemId::new(),
            points,
            style,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn thickness(&self) -> f32 {
        self.style.width
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        if self.points.len() < 2 {
            return;
        }
        surface.polyline(&self.points, self.style.width, self.style.ink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawOp, Recording};
    use egui::{Color32, pos2};

    fn pen(width: f32) -> PenStyle {
        PenStyle::new(width, Color32::BLACK)
    }

    #[test]
    fn test_begin_seeds_one_point() {
        let stroke = Stroke::begin(pos2(3.0, 4.0), pen(1.0));
        assert_eq!(stroke.points(), &[pos2(3.0, 4.0)]);
    }

    #[test]
    fn test_single_point_renders_nothing() {
        let stroke = Stroke::begin(pos2(3.0, 4.0), pen(1.0));
        let mut surface = Recording::new();
        stroke.render(&mut surface);
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn test_renders_with_captured_width() {
        let mut stroke = Stroke::begin(pos2(0.0, 0.0), pen(5.0));
        stroke.add_point(pos2(10.0, 0.0));
        let mut surface = Recording::new();
        stroke.render(&mut surface);
        assert_eq!(
            surface.ops(),
            &[DrawOp::Polyline {
                points: vec![pos2(0.0, 0.0), pos2(10.0, 0.0)],
                width: 5.0,
                color: Color32::BLACK,
            }]
        );
    }
}
