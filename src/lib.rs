#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod history;
pub mod input;
pub mod item;
pub mod panels;
pub mod renderer;
pub mod sketchpad;
pub mod state;
pub mod sticker;
pub mod stroke;
pub mod surface;

pub use app::SketchpadApp;
pub use config::{PenStyle, RedoPolicy, SketchpadConfig, Thickness};
pub use error::{ConfigError, ExportError};
pub use event::SketchEvent;
pub use export::{ExportSink, Exporter};
pub use history::History;
pub use input::{InputEvent, InputHandler};
pub use item::{Item, ItemId, ToolPreview};
pub use renderer::{PainterSurface, render_scene};
pub use sketchpad::Sketchpad;
pub use sticker::{StickerPalette, StickerPlacement, StickerStyle};
pub use stroke::Stroke;
pub use surface::Surface;
