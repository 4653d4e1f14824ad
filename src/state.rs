use crate::item::Item;
use crate::sticker::StickerStyle;

/// What the next pointer-down creates.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Tool {
    #[default]
    Pen,
    /// A sticker is armed; it falls back to the pen once placed.
    Sticker { glyph: String },
}

impl Tool {
    pub fn is_sticker(&self) -> bool {
        matches!(self, Self::Sticker { .. })
    }

    pub fn sticker_glyph(&self) -> Option<&str> {
        match self {
            Self::Sticker { glyph } => Some(glyph),
            Self::Pen => None,
        }
    }
}

/// Interaction state machine: Idle until pointer-down, Drawing until up/leave.
#[derive(Debug, Clone, Default)]
pub enum ToolState {
    #[default]
    Idle,
    Drawing {
        /// The item under construction. Belongs to neither history nor undo buffer.
        current: Item,
    },
}

impl ToolState {
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    pub fn current(&self) -> Option<&Item> {
        match self {
            Self::Drawing { current } => Some(current),
            Self::Idle => None,
        }
    }

    pub fn current_mut(&mut self) -> Option<&mut Item> {
        match self {
            Self::Drawing { current } => Some(current),
            Self::Idle => None,
        }
    }

    /// Return to Idle, handing back the in-progress item if there was one.
    pub fn finish(&mut self) -> Option<Item> {
        match std::mem::take(self) {
            Self::Drawing { current } => Some(current),
            Self::Idle => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Drawing { .. } => "Drawing",
        }
    }
}

/// Live values of the sticker sliders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickerSliders {
    pub rotation_deg: f32,
    pub size: f32,
}

impl StickerSliders {
    /// Snapshot the sliders into a style for `glyph`.
    pub fn style_for(&self, glyph: &str, ink: egui::Color32) -> StickerStyle {
        StickerStyle {
            glyph: glyph.to_owned(),
            rotation_deg: self.rotation_deg,
            size: self.size,
            ink,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PenStyle;
    use crate::stroke::Stroke;
    use egui::{Color32, pos2};

    #[test]
    fn test_finish_returns_to_idle() {
        let stroke = Stroke::begin(pos2(0.0, 0.0), PenStyle::new(1.0, Color32::BLACK));
        let mut state = ToolState::Drawing {
            current: stroke.into(),
        };
        assert!(state.is_drawing());
        assert!(state.finish().is_some());
        assert!(!state.is_drawing());
        assert!(state.finish().is_none());
    }
}
