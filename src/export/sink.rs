use crate::config::SketchpadConfig;
use crate::error::ExportResult;

/// Destination for an encoded export.
pub trait ExportSink {
    fn deliver(&mut self, file_name: &str, png: &[u8]) -> ExportResult<()>;
}

/// Writes exports into a directory.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileSink {
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ExportSink for FileSink {
    fn deliver(&mut self, file_name: &str, png: &[u8]) -> ExportResult<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        std::fs::write(&path, png)?;
        log::info!("Wrote {}", path.display());
        Ok(())
    }
}

/// Triggers a client-side download through a temporary Blob URL.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDownload;

#[cfg(target_arch = "wasm32")]
impl ExportSink for BrowserDownload {
    fn deliver(&mut self, file_name: &str, png: &[u8]) -> ExportResult<()> {
        use crate::error::ExportError;
        use wasm_bindgen::{JsCast as _, JsValue};

        let js_err = |err: JsValue| ExportError::Browser(format!("{err:?}"));

        let window = web_sys::window().ok_or_else(|| ExportError::Browser("No window".to_owned()))?;
        let document = window
            .document()
            .ok_or_else(|| ExportError::Browser("No document".to_owned()))?;

        let bytes = js_sys::Uint8Array::from(png);
        let parts = js_sys::Array::new();
        parts.push(&bytes);

        let options = web_sys::BlobPropertyBag::new();
        options.set_type("image/png");
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(js_err)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

        let anchor = document
            .create_element("a")
            .map_err(js_err)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| ExportError::Browser("Failed to create download link".to_owned()))?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();

        web_sys::Url::revoke_object_url(&url).map_err(js_err)?;
        Ok(())
    }
}

/// Keeps exports in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub files: Vec<(String, Vec<u8>)>,
}

impl ExportSink for MemorySink {
    fn deliver(&mut self, file_name: &str, png: &[u8]) -> ExportResult<()> {
        self.files.push((file_name.to_owned(), png.to_vec()));
        Ok(())
    }
}

/// The platform's natural export destination.
pub fn default_sink(config: &SketchpadConfig) -> Box<dyn ExportSink> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(FileSink::new(&config.export_dir))
    }
    #[cfg(target_arch = "wasm32")]
    {
        let _ = config;
        Box::new(BrowserDownload)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_file_sink_writes_into_dir() {
        let dir = std::env::temp_dir().join(format!("sketchpad-export-{}", uuid::Uuid::new_v4()));
        let mut sink = FileSink::new(&dir);
        sink.deliver("out.png", &[1, 2, 3]).unwrap();
        assert_eq!(std::fs::read(dir.join("out.png")).unwrap(), vec![1, 2, 3]);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
