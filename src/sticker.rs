use egui::{Color32, Pos2};

use crate::item::ItemId;
use crate::surface::Surface;

/// Sticker settings captured when a placement (or its preview) is created.
#[derive(Debug, Clone, PartialEq)]
pub struct StickerStyle {
    pub glyph: String,
    /// Degrees, clockwise
    pub rotation_deg: f32,
    /// Font size in points
    pub size: f32,
    pub ink: Color32,
}

impl StickerStyle {
    pub fn rotation_radians(&self) -> f32 {
        self.rotation_deg.to_radians()
    }

    pub fn render_at(&self, position: Pos2, surface: &mut dyn Surface) {
        surface.glyph(
            &self.glyph,
            position,
            self.rotation_radians(),
            self.size,
            self.ink,
        );
    }
}

/// One emoji dropped onto the canvas.
///
/// Dragging before release moves it; there is no path.
#[derive(Debug, Clone, PartialEq)]
pub struct StickerPlacement {
    id: ItemId,
    position: Pos2,
    style: StickerStyle,
}

impl StickerPlacement {
    pub fn new(position: Pos2, style: StickerStyle) -> Self {
        Self {
            id: ItemId::new(),
            position,
            style,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn move_to(&mut self, position: Pos2) {
        self.position = position;
    }

    pub fn style(&self) -> &StickerStyle {
        &self.style
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        self.style.render_at(self.position, surface);
    }
}

/// The set of stickers offered as buttons.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StickerPalette {
    glyphs: Vec<String>,
}

impl StickerPalette {
    pub fn new(glyphs: impl IntoIterator<Item = String>) -> Self {
        let mut palette = Self::default();
        for glyph in glyphs {
            palette.add(&glyph);
        }
        palette
    }

    /// Append a glyph. Blank input is refused and returns `None`.
    pub fn add(&mut self, glyph: &str) -> Option<&str> {
        let glyph = glyph.trim();
        if glyph.is_empty() {
            log::warn!("Ignoring empty sticker");
            return None;
        }
        self.glyphs.push(glyph.to_owned());
        self.glyphs.last().map(String::as_str)
    }

    pub fn glyphs(&self) -> &[String] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawOp, Recording};
    use egui::pos2;

    #[test]
    fn test_placement_renders_rotated_glyph() {
        let style = StickerStyle {
            glyph: "🎃".to_owned(),
            rotation_deg: 90.0,
            size: 40.0,
            ink: Color32::BLACK,
        };
        let placement = StickerPlacement::new(pos2(50.0, 50.0), style);
        let mut surface = Recording::new();
        placement.render(&mut surface);

        match &surface.ops()[0] {
            DrawOp::Glyph { glyph, center, rotation, size, .. } => {
                assert_eq!(glyph, "🎃");
                assert_eq!(*center, pos2(50.0, 50.0));
                assert!((rotation - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
                assert_eq!(*size, 40.0);
            }
            other => panic!("unexpected op {other:?}"),
        }
    }

    #[test]
    fn test_move_overwrites_position() {
        let style = StickerStyle {
            glyph: "👻".to_owned(),
            rotation_deg: 0.0,
            size: 32.0,
            ink: Color32::BLACK,
        };
        let mut placement = StickerPlacement::new(pos2(1.0, 1.0), style);
        placement.move_to(pos2(7.0, 9.0));
        assert_eq!(placement.position(), pos2(7.0, 9.0));
    }

    #[test]
    fn test_palette_rejects_blank_glyphs() {
        let mut palette = StickerPalette::new(["🦇".to_owned(), " ".to_owned()]);
        assert_eq!(palette.len(), 1);
        assert!(palette.add("").is_none());
        assert_eq!(palette.add(" 🧽 "), Some("🧽"));
        assert_eq!(palette.glyphs(), &["🦇".to_owned(), "🧽".to_owned()]);
    }
}
