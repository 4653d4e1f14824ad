use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable naming a JSON config file (native builds only)
pub const CONFIG_ENV_VAR: &str = "SKETCHPAD_CONFIG";

pub const STICKER_SIZE_RANGE: std::ops::RangeInclusive<f32> = 5.0..=100.0;
pub const STICKER_ROTATION_RANGE: std::ops::RangeInclusive<f32> = 0.0..=360.0;

/// Largest canvas side, in points
pub const MAX_CANVAS_SIDE: f32 = 4096.0;
/// Largest exported image side, in pixels
pub const MAX_EXPORT_SIDE: f32 = 8192.0;

/// What happens to the undo buffer when a new item is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedoPolicy {
    /// A new commit discards everything that could have been redone.
    ClearOnCommit,
    /// Undone items stay redoable even after new commits. Only undo and
    /// redo touch the undo buffer.
    #[default]
    Preserve,
}

/// Application configuration.
///
/// Every field has a default, so a config file only needs the keys it wants
/// to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing keys fall back to the defaults below
pub struct SketchpadConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub thin_width: f32,
    pub thick_width: f32,
    pub stickers: Vec<String>,
    pub custom_sticker_suggestion: String,
    pub sticker_size: f32,
    pub sticker_rotation: f32,
    pub export_scale: f32,
    pub export_file_name: String,
    pub export_dir: String,
    pub background: [u8; 4],
    pub ink: [u8; 4],
    pub redo_policy: RedoPolicy,
    pub preview_symbol: String,
}

impl Default for SketchpadConfig {
    fn default() -> Self {
        Self {
            canvas_width: 256.0,
            canvas_height: 256.0,
            thin_width: 1.0,
            thick_width: 5.0,
            stickers: vec!["🦇".to_owned(), "👻".to_owned(), "🎃".to_owned()],
            custom_sticker_suggestion: "🧽".to_owned(),
            sticker_size: 32.0,
            sticker_rotation: 0.0,
            export_scale: 4.0,
            export_file_name: "sketchpad.png".to_owned(),
            export_dir: ".".to_owned(),
            background: [255, 255, 255, 255],
            ink: [0, 0, 0, 255],
            redo_policy: RedoPolicy::default(),
            preview_symbol: "*".to_owned(),
        }
    }
}

impl SketchpadConfig {
    /// Parse a config from JSON text and sanitize it.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        Ok(config.sanitized())
    }

    /// Load the config named by [`CONFIG_ENV_VAR`], or the defaults if it is unset.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, ConfigError> {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Ok(Self::default());
        };
        let path = std::path::PathBuf::from(path);
        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        log::info!("Loaded config from {}", path.display());
        Self::from_json_str(&text)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::default())
    }

    /// Like [`Self::load`], but logs the failure and returns the defaults.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|err| {
            log::warn!("{err}; using default config");
            Self::default()
        })
    }

    /// Clamp values into the ranges the controls can represent.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        self.canvas_width = bounded(self.canvas_width, 1.0, MAX_CANVAS_SIDE, defaults.canvas_width);
        self.canvas_height =
            bounded(self.canvas_height, 1.0, MAX_CANVAS_SIDE, defaults.canvas_height);
        self.thin_width = self.thin_width.max(0.1);
        self.thick_width = self.thick_width.max(0.1);
        self.sticker_size = self
            .sticker_size
            .clamp(*STICKER_SIZE_RANGE.start(), *STICKER_SIZE_RANGE.end());
        self.sticker_rotation = self
            .sticker_rotation
            .clamp(*STICKER_ROTATION_RANGE.start(), *STICKER_ROTATION_RANGE.end());
        let max_scale = MAX_EXPORT_SIDE / self.canvas_width.max(self.canvas_height);
        self.export_scale = bounded(self.export_scale, 1.0, max_scale.max(1.0), defaults.export_scale);
        self.stickers.retain(|glyph| !glyph.trim().is_empty());
        if self.export_file_name.trim().is_empty() {
            self.export_file_name = defaults.export_file_name;
        }
        self
    }

    pub fn canvas_size(&self) -> egui::Vec2 {
        egui::vec2(self.canvas_width, self.canvas_height)
    }

    pub fn background_color(&self) -> Color32 {
        let [r, g, b, a] = self.background;
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }

    pub fn ink_color(&self) -> Color32 {
        let [r, g, b, a] = self.ink;
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }

    /// The pen style a fresh session starts with (thin).
    pub fn initial_pen(&self) -> PenStyle {
        PenStyle::new(self.thin_width, self.ink_color())
    }
}

/// `value` clamped to `min..=max`, or `fallback` if it is not a number.
fn bounded(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback.clamp(min, max)
    }
}

/// Pen settings copied into each stroke when it is started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenStyle {
    pub width: f32,
    pub ink: Color32,
}

impl PenStyle {
    pub fn new(width: f32, ink: Color32) -> Self {
        Self { width, ink }
    }
}

/// Pen width presets offered by the control surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thickness {
    Thin,
    Thick,
}

impl Thickness {
    pub fn width(self, config: &SketchpadConfig) -> f32 {
        match self {
            Self::Thin => config.thin_width,
            Self::Thick => config.thick_width,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Thin => "Thin",
            Self::Thick => "Thick",
        }
    }
}
