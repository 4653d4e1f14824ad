use crate::config::SketchpadConfig;
use crate::export::{ExportSink, Exporter, default_sink};
use crate::input::InputHandler;
use crate::panels;
use crate::sketchpad::Sketchpad;
use crate::sticker::StickerPalette;

pub struct SketchpadApp {
    sketchpad: Sketchpad,
    palette: StickerPalette,
    input: InputHandler,
    exporter: Exporter,
    sink: Box<dyn ExportSink>,
    /// Text of the open add-sticker prompt
    sticker_prompt: Option<String>,
    /// Result of the last export, shown under the controls
    status: Option<String>,
}

impl SketchpadApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: SketchpadConfig) -> Self {
        let sink = default_sink(&config);
        Self::with_sink(config, sink)
    }

    /// Build the app around an explicit export destination.
    pub fn with_sink(config: SketchpadConfig, sink: Box<dyn ExportSink>) -> Self {
        log::info!(
            "Starting sketchpad {}x{} with {} stickers",
            config.canvas_width,
            config.canvas_height,
            config.stickers.len()
        );
        Self {
            palette: StickerPalette::new(config.stickers.iter().cloned()),
            sketchpad: Sketchpad::new(config),
            input: InputHandler::new(),
            exporter: Exporter::new(),
            sink,
            sticker_prompt: None,
            status: None,
        }
    }

    pub fn sketchpad(&self) -> &Sketchpad {
        &self.sketchpad
    }

    pub fn sketchpad_mut(&mut self) -> &mut Sketchpad {
        &mut self.sketchpad
    }

    pub fn palette(&self) -> &StickerPalette {
        &self.palette
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Feed this frame's pointer input over the canvas widget to the sketchpad.
    pub fn handle_canvas_input(&mut self, ctx: &egui::Context, canvas: &egui::Response) {
        for event in self.input.process_input(ctx, canvas) {
            self.sketchpad.handle_input(event);
        }
        if let Some(event) = self.sketchpad.take_event() {
            log::trace!("{event:?}");
            ctx.request_repaint();
        }
    }

    pub fn open_sticker_prompt(&mut self) {
        let suggestion = self.sketchpad.config().custom_sticker_suggestion.clone();
        self.sticker_prompt = Some(suggestion);
    }

    pub fn sticker_prompt_text(&self) -> Option<&str> {
        self.sticker_prompt.as_deref()
    }

    pub fn set_sticker_prompt_text(&mut self, text: String) {
        if self.sticker_prompt.is_some() {
            self.sticker_prompt = Some(text);
        }
    }

    pub fn close_sticker_prompt(&mut self) {
        self.sticker_prompt = None;
    }

    /// Add the prompt's glyph to the palette and close the prompt.
    pub fn confirm_sticker_prompt(&mut self, text: &str) {
        self.sticker_prompt = None;
        self.add_sticker(text);
    }

    /// Returns false if `glyph` was blank and nothing was added.
    pub fn add_sticker(&mut self, glyph: &str) -> bool {
        match self.palette.add(glyph) {
            Some(added) => {
                log::info!("Added sticker {added}");
                true
            }
            None => false,
        }
    }

    pub fn export(&mut self) {
        self.status = Some(
            match self.exporter.export(&self.sketchpad, self.sink.as_mut()) {
                Ok(summary) => format!(
                    "Exported {} ({}x{})",
                    summary.file_name, summary.width, summary.height
                ),
                Err(err) => {
                    log::error!("Export failed: {err}");
                    format!("Export failed: {err}")
                }
            },
        );
    }

    /// Lay out every panel for one frame.
    pub fn ui(&mut self, ctx: &egui::Context) {
        panels::controls_panel(self, ctx);
        panels::canvas_panel(self, ctx);
        panels::sticker_prompt(self, ctx);
    }
}

impl eframe::App for SketchpadApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::MemorySink;

    #[test]
    fn test_blank_custom_sticker_is_rejected() {
        let mut app = SketchpadApp::with_sink(SketchpadConfig::default(), Box::new(MemorySink::default()));
        app.open_sticker_prompt();
        assert_eq!(app.sticker_prompt_text(), Some("🧽"));
        app.confirm_sticker_prompt("   ");
        assert_eq!(app.palette().len(), 3);
        assert!(app.sticker_prompt_text().is_none());
    }

    #[test]
    fn test_confirmed_sticker_joins_palette() {
        let mut app = SketchpadApp::with_sink(SketchpadConfig::default(), Box::new(MemorySink::default()));
        app.open_sticker_prompt();
        app.confirm_sticker_prompt("🧽");
        assert_eq!(app.palette().glyphs().last().map(String::as_str), Some("🧽"));
    }

    #[test]
    fn test_export_sets_status() {
        let mut app = SketchpadApp::with_sink(SketchpadConfig::default(), Box::new(MemorySink::default()));
        app.export();
        assert_eq!(app.status(), Some("Exported sketchpad.png (1024x1024)"));
    }
}
