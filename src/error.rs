use thiserror::Error;

/// Errors that can occur while loading a [`crate::SketchpadConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors that can occur while exporting the drawing
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write export: {0}")]
    Write(#[from] std::io::Error),

    #[error("Export of {width}x{height} pixels exceeds the size limit")]
    TooLarge { width: f32, height: f32 },

    #[error("Cannot allocate a {width}x{height} image")]
    Canvas { width: u32, height: u32 },

    #[error("Browser download failed: {0}")]
    Browser(String),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
