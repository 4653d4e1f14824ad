use egui::Pos2;

use crate::config::{
    PenStyle, STICKER_ROTATION_RANGE, STICKER_SIZE_RANGE, SketchpadConfig, Thickness,
};
use crate::event::{RepaintSignal, SketchEvent};
use crate::history::History;
use crate::input::InputEvent;
use crate::item::{Item, ToolPreview};
use crate::state::{StickerSliders, Tool, ToolState};
use crate::sticker::StickerPlacement;
use crate::stroke::Stroke;

/// The drawing session: committed history, the item being drawn, the tool
/// preview and the settings that new items are created with.
///
/// Every mutation marks the [`RepaintSignal`] dirty; the render loop takes
/// the signal once per frame and repaints from scratch.
#[derive(Debug)]
pub struct Sketchpad {
    config: SketchpadConfig,
    history: History,
    state: ToolState,
    tool: Tool,
    pen: PenStyle,
    sliders: StickerSliders,
    /// Always an [`Item::Preview`]
    preview: Option<Item>,
    /// Last pointer position over the canvas
    cursor: Option<Pos2>,
    signal: RepaintSignal,
}

impl Default for Sketchpad {
    fn default() -> Self {
        Self::new(SketchpadConfig::default())
    }
}

impl Sketchpad {
    pub fn new(config: SketchpadConfig) -> Self {
        Self {
            history: History::new(config.redo_policy),
            state: ToolState::Idle,
            tool: Tool::Pen,
            pen: config.initial_pen(),
            sliders: StickerSliders {
                rotation_deg: config.sticker_rotation,
                size: config.sticker_size,
            },
            preview: None,
            cursor: None,
            signal: RepaintSignal::new(),
            config,
        }
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { position } => self.pointer_down(position),
            InputEvent::PointerMove { position } => self.pointer_move(position),
            InputEvent::PointerUp { position } => self.pointer_up(position),
            InputEvent::PointerLeave => self.pointer_leave(),
        }
    }

    /// Start a new stroke, or a sticker placement if a sticker is armed.
    pub fn pointer_down(&mut self, position: Pos2) {
        if self.state.is_drawing() {
            // A missed release; keep what was drawn so far.
            self.commit_current();
        }

        let current: Item = match &self.tool {
            Tool::Pen => Stroke::begin(position, self.pen).into(),
            Tool::Sticker { glyph } => {
                let style = self.sliders.style_for(glyph, self.config.ink_color());
                StickerPlacement::new(position, style).into()
            }
        };
        log::trace!("Begin {} at {:?}", current.kind(), position);
        self.state = ToolState::Drawing { current };
        self.cursor = Some(position);
        self.signal.notify(SketchEvent::DrawingChanged);
    }

    pub fn pointer_move(&mut self, position: Pos2) {
        self.cursor = Some(position);
        self.preview = Some(self.make_preview(position).into());

        match self.state.current_mut() {
            Some(current) => {
                current.drag(position);
                self.signal.notify(SketchEvent::DrawingChanged);
            }
            None => self.signal.notify(SketchEvent::ToolMoved),
        }
    }

    pub fn pointer_up(&mut self, position: Pos2) {
        self.cursor = Some(position);
        self.commit_current();
        self.refresh_preview();
        self.signal.notify(SketchEvent::DrawingChanged);
    }

    /// Leaving the canvas commits, never discards, the in-progress item.
    pub fn pointer_leave(&mut self) {
        self.cursor = None;
        self.preview = None;
        self.commit_current();
        self.signal.notify(SketchEvent::DrawingChanged);
    }

    fn commit_current(&mut self) {
        if let Some(item) = self.state.finish() {
            if matches!(item, Item::Sticker(_)) {
                // Stickers are one-shot.
                self.tool = Tool::Pen;
            }
            self.history.commit(item);
        }
    }

    /// Remove everything: history, undo buffer and the in-progress item.
    pub fn clear(&mut self) {
        log::info!("Clearing canvas ({} items)", self.history.items().len());
        self.history.clear();
        self.state = ToolState::Idle;
        self.signal.notify(SketchEvent::DrawingChanged);
    }

    /// Returns false (and changes nothing) if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let changed = self.history.undo();
        if changed {
            self.signal.notify(SketchEvent::DrawingChanged);
        }
        changed
    }

    /// Returns false (and changes nothing) if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let changed = self.history.redo();
        if changed {
            self.signal.notify(SketchEvent::DrawingChanged);
        }
        changed
    }

    /// Pen width for strokes started from now on.
    pub fn set_thickness(&mut self, thickness: Thickness) {
        self.set_pen_width(thickness.width(&self.config));
    }

    pub fn set_pen_width(&mut self, width: f32) {
        self.pen.width = width.max(0.1);
        if !self.tool.is_sticker() {
            self.refresh_preview();
        }
    }

    /// Arm a sticker: the next pointer-down places `glyph`.
    pub fn select_sticker(&mut self, glyph: &str) {
        log::info!("Sticker selected: {glyph}");
        self.tool = Tool::Sticker {
            glyph: glyph.to_owned(),
        };
        self.refresh_preview();
        self.signal.notify(SketchEvent::ToolMoved);
    }

    /// Go back to free-hand drawing without placing the armed sticker.
    pub fn select_pen(&mut self) {
        log::info!("Pen selected");
        self.tool = Tool::Pen;
        self.refresh_preview();
        self.signal.notify(SketchEvent::ToolMoved);
    }

    pub fn set_sticker_rotation(&mut self, degrees: f32) {
        self.sliders.rotation_deg =
            degrees.clamp(*STICKER_ROTATION_RANGE.start(), *STICKER_ROTATION_RANGE.end());
        if self.tool.is_sticker() {
            self.refresh_preview();
        }
    }

    pub fn set_sticker_size(&mut self, size: f32) {
        self.sliders.size = size.clamp(*STICKER_SIZE_RANGE.start(), *STICKER_SIZE_RANGE.end());
        if self.tool.is_sticker() {
            self.refresh_preview();
        }
    }

    fn make_preview(&self, position: Pos2) -> ToolPreview {
        match &self.tool {
            Tool::Pen => ToolPreview::crosshair(&self.config.preview_symbol, position, self.pen),
            Tool::Sticker { glyph } => ToolPreview::sticker_ghost(
                position,
                self.sliders.style_for(glyph, self.config.ink_color()),
            ),
        }
    }

    /// Rebuild the preview at the last pointer position with the current settings.
    fn refresh_preview(&mut self) {
        if let Some(position) = self.cursor {
            self.preview = Some(self.make_preview(position).into());
            self.signal.notify(SketchEvent::ToolMoved);
        }
    }

    /// Take the pending repaint notification, if any.
    pub fn take_event(&mut self) -> Option<SketchEvent> {
        self.signal.take()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn items(&self) -> &[Item] {
        self.history.items()
    }

    pub fn current(&self) -> Option<&Item> {
        self.state.current()
    }

    pub fn is_drawing(&self) -> bool {
        self.state.is_drawing()
    }

    pub fn state(&self) -> &ToolState {
        &self.state
    }

    /// The preview overlay. Only drawn while not drawing.
    pub fn preview(&self) -> Option<&ToolPreview> {
        match &self.preview {
            Some(Item::Preview(preview)) => Some(preview),
            _ => None,
        }
    }

    /// The preview as a drawable item.
    pub fn preview_item(&self) -> Option<&Item> {
        self.preview.as_ref()
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    pub fn pen(&self) -> PenStyle {
        self.pen
    }

    pub fn sliders(&self) -> StickerSliders {
        self.sliders
    }

    pub fn config(&self) -> &SketchpadConfig {
        &self.config
    }
}
