use egui::Pos2;
use uuid::Uuid;

use crate::config::PenStyle;
use crate::sticker::{StickerPlacement, StickerStyle};
use crate::stroke::Stroke;
use crate::surface::Surface;

/// Stable identity of a drawable item, kept across undo/redo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

/// Overlay that follows the pointer while the user is not drawing.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolPreview {
    /// Pen crosshair, scaled with the pen width
    Crosshair {
        symbol: String,
        position: Pos2,
        pen: PenStyle,
    },
    /// Ghost of the sticker that the next click will place
    StickerGhost {
        position: Pos2,
        style: StickerStyle,
    },
}

impl ToolPreview {
    pub fn crosshair(symbol: &str, position: Pos2, pen: PenStyle) -> Self {
        Self::Crosshair {
            symbol: symbol.to_owned(),
            position,
            pen,
        }
    }

    pub fn sticker_ghost(position: Pos2, style: StickerStyle) -> Self {
        Self::StickerGhost { position, style }
    }

    pub fn position(&self) -> Pos2 {
        match self {
            Self::Crosshair { position, .. } | Self::StickerGhost { position, .. } => *position,
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            Self::Crosshair {
                symbol,
                position,
                pen,
            } => {
                // Sits slightly below the hotspot so the glyph's visual centre
                // lines up with the pen tip.
                let center = Pos2::new(position.x, position.y + 3.0 * pen.width);
                surface.glyph(symbol, center, 0.0, pen.width * 10.0, pen.ink);
            }
            Self::StickerGhost { position, style } => style.render_at(*position, surface),
        }
    }
}

/// Anything that can be drawn on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Stroke(Stroke),
    Sticker(StickerPlacement),
    Preview(ToolPreview),
}

impl Item {
    /// Draw this item onto `surface`.
    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            Self::Stroke(stroke) => stroke.render(surface),
            Self::Sticker(sticker) => sticker.render(surface),
            Self::Preview(preview) => preview.render(surface),
        }
    }

    /// Pointer moved while this item is being created.
    ///
    /// Strokes grow a new point, stickers jump to the pointer.
    pub fn drag(&mut self, position: Pos2) {
        match self {
            Self::Stroke(stroke) => stroke.add_point(position),
            Self::Sticker(sticker) => sticker.move_to(position),
            Self::Preview(_) => {}
        }
    }

    /// Previews are never stored, so they have no identity.
    pub fn id(&self) -> Option<ItemId> {
        match self {
            Self::Stroke(stroke) => Some(stroke.id()),
            Self::Sticker(sticker) => Some(sticker.id()),
            Self::Preview(_) => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Stroke(_) => "stroke",
            Self::Sticker(_) => "sticker",
            Self::Preview(_) => "preview",
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Self::Stroke(stroke) => Some(stroke),
            _ => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&StickerPlacement> {
        match self {
            Self::Sticker(sticker) => Some(sticker),
            _ => None,
        }
    }
}

impl From<Stroke> for Item {
    fn from(stroke: Stroke) -> Self {
        Self::Stroke(stroke)
    }
}

impl From<StickerPlacement> for Item {
    fn from(sticker: StickerPlacement) -> Self {
        Self::Sticker(sticker)
    }
}

impl From<ToolPreview> for Item {
    fn from(preview: ToolPreview) -> Self {
        Self::Preview(preview)
    }
}
