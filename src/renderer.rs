use egui::{Color32, FontId, Painter, Pos2, Rect};

use crate::item::Item;
use crate::sketchpad::Sketchpad;
use crate::surface::{self, Surface};

/// Repaint the whole canvas from the sketchpad state.
///
/// Order is fixed: committed items oldest first, then the in-progress item,
/// then the tool preview (only while not drawing). Calling this twice on an
/// unchanged sketchpad draws the same thing twice.
pub fn render_scene(pad: &Sketchpad, surface: &mut dyn Surface) {
    surface.clear();
    render_items(pad.items(), surface);
    if let Some(current) = pad.current() {
        current.render(surface);
    }
    if !pad.is_drawing() {
        if let Some(preview) = pad.preview_item() {
            preview.render(surface);
        }
    }
}

/// Draw `items` in order without clearing first.
pub fn render_items(items: &[Item], surface: &mut dyn Surface) {
    for item in items {
        item.render(surface);
    }
}

/// [`Surface`] backed by an egui painter over the on-screen canvas rect.
pub struct PainterSurface {
    painter: Painter,
    canvas: Rect,
    background: Color32,
}

impl PainterSurface {
    /// Canvas-space `(0, 0)` maps to `canvas.min`; drawing is clipped to `canvas`.
    pub fn new(painter: &Painter, canvas: Rect, background: Color32) -> Self {
        Self {
            painter: painter.with_clip_rect(canvas),
            canvas,
            background,
        }
    }

    fn to_screen(&self, point: Pos2) -> Pos2 {
        point + self.canvas.min.to_vec2()
    }
}

impl Surface for PainterSurface {
    fn clear(&mut self) {
        self.painter.rect_filled(self.canvas, 0.0, self.background);
    }

    fn polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        let screen: Vec<Pos2> = points.iter().map(|&point| self.to_screen(point)).collect();
        self.painter
            .extend(surface::polyline_shapes(&screen, width, color));
    }

    fn glyph(&mut self, glyph: &str, center: Pos2, rotation: f32, size: f32, color: Color32) {
        let galley = self
            .painter
            .layout_no_wrap(glyph.to_owned(), FontId::proportional(size), color);
        self.painter.add(surface::glyph_shape(
            galley,
            self.to_screen(center),
            rotation,
            color,
        ));
    }
}
