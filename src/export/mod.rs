use std::io::Cursor;

use egui::epaint::text::{FontDefinitions, Fonts};
use egui::epaint::{Mesh, TessellationOptions, Tessellator};
use egui::{Color32, FontId, Pos2, Shape, Vec2};
use image::{ImageFormat, RgbaImage};

use crate::config::MAX_EXPORT_SIDE;
use crate::error::{ExportError, ExportResult};
use crate::item::Item;
use crate::renderer::render_items;
use crate::sketchpad::Sketchpad;
use crate::surface::{self, Surface};

mod raster;
mod sink;

use raster::Raster;
pub use sink::{ExportSink, MemorySink, default_sink};
#[cfg(target_arch = "wasm32")]
pub use sink::BrowserDownload;
#[cfg(not(target_arch = "wasm32"))]
pub use sink::FileSink;

/// Largest font atlas the exporter will grow to
const MAX_TEXTURE_SIDE: usize = 8192;

enum RasterOp {
    Polyline {
        points: Vec<Pos2>,
        width: f32,
        color: Color32,
    },
    Text(Shape),
}

/// Off-screen [`Surface`] that scales everything by a fixed factor and
/// produces an image.
pub struct RasterSurface<'f> {
    fonts: &'f Fonts,
    scale: f32,
    size: [u32; 2],
    background: Color32,
    ops: Vec<RasterOp>,
}

impl<'f> RasterSurface<'f> {
    pub fn new(fonts: &'f Fonts, scale: f32, size: [u32; 2], background: Color32) -> Self {
        Self {
            fonts,
            scale,
            size,
            background,
            ops: Vec::new(),
        }
    }

    fn scaled(&self, point: Pos2) -> Pos2 {
        (point.to_vec2() * self.scale).to_pos2()
    }

    /// Replay everything drawn so far onto a fresh pixmap.
    pub fn finish(self) -> ExportResult<RgbaImage> {
        let [width, height] = self.size;
        let mut raster = Raster::new(width, height, self.background)?;

        // Glyphs were added to the atlas during layout, so read it only now.
        let atlas = self.fonts.image();
        let prepared_discs = self.fonts.texture_atlas().lock().prepared_discs();
        let mut tessellator = Tessellator::new(
            self.fonts.pixels_per_point(),
            TessellationOptions {
                feathering: false,
                ..Default::default()
            },
            self.fonts.font_image_size(),
            prepared_discs,
        );

        for op in self.ops {
            match op {
                RasterOp::Polyline {
                    points,
                    width,
                    color,
                } => raster.polyline(&points, width, color),
                RasterOp::Text(shape) => {
                    let mut mesh = Mesh::default();
                    tessellator.tessellate_shape(shape, &mut mesh);
                    raster.mesh(&mesh, &atlas);
                }
            }
        }
        Ok(raster.into_image())
    }
}

impl Surface for RasterSurface<'_> {
    fn clear(&mut self) {
        self.ops.clear();
    }

    fn polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        let points = points.iter().map(|&point| self.scaled(point)).collect();
        self.ops.push(RasterOp::Polyline {
            points,
            width: width * self.scale,
            color,
        });
    }

    fn glyph(&mut self, glyph: &str, center: Pos2, rotation: f32, size: f32, color: Color32) {
        let galley = self.fonts.layout_no_wrap(
            glyph.to_owned(),
            FontId::proportional(size * self.scale),
            color,
        );
        self.ops.push(RasterOp::Text(surface::glyph_shape(
            galley,
            self.scaled(center),
            rotation,
            color,
        )));
    }
}

/// Renders committed items to images.
///
/// Owns its own font set at one pixel per point, so exports do not depend on
/// the display scale of the window they were triggered from.
#[derive(Default)]
pub struct Exporter {
    fonts: Option<Fonts>,
}

impl Exporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn fonts(&mut self) -> &Fonts {
        self.fonts.get_or_insert_with(|| {
            log::debug!("Loading export fonts");
            Fonts::new(1.0, MAX_TEXTURE_SIDE, FontDefinitions::default())
        })
    }

    /// Draw `items` onto a `base_size * scale` image.
    ///
    /// Fails without allocating if either side would exceed [`MAX_EXPORT_SIDE`].
    pub fn render(
        &mut self,
        items: &[Item],
        base_size: Vec2,
        scale: f32,
        background: Color32,
    ) -> ExportResult<RgbaImage> {
        let side = |length: f32| (length * scale).round().max(1.0);
        let (width, height) = (side(base_size.x), side(base_size.y));
        if !(width <= MAX_EXPORT_SIDE && height <= MAX_EXPORT_SIDE) {
            return Err(ExportError::TooLarge { width, height });
        }
        let size = [width as u32, height as u32];
        let mut surface = RasterSurface::new(self.fonts(), scale, size, background);
        surface.clear();
        render_items(items, &mut surface);
        surface.finish()
    }

    /// Export the sketchpad's committed history. The in-progress item and
    /// the tool preview are never included.
    pub fn render_sketchpad(&mut self, pad: &Sketchpad) -> ExportResult<RgbaImage> {
        let config = pad.config();
        self.render(
            pad.items(),
            config.canvas_size(),
            config.export_scale,
            config.background_color(),
        )
    }

    /// Render, encode as PNG and hand the file to `sink`.
    pub fn export(&mut self, pad: &Sketchpad, sink: &mut dyn ExportSink) -> ExportResult<ExportSummary> {
        let image = self.render_sketchpad(pad)?;
        let png = encode_png(&image)?;
        let file_name = pad.config().export_file_name.clone();
        sink.deliver(&file_name, &png)?;

        let summary = ExportSummary {
            file_name,
            width: image.width(),
            height: image.height(),
            bytes: png.len(),
        };
        log::info!(
            "Exported {} ({}x{}, {} bytes)",
            summary.file_name,
            summary.width,
            summary.height,
            summary.bytes
        );
        Ok(summary)
    }
}

/// What a successful export produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    pub bytes: usize,
}

pub fn encode_png(image: &RgbaImage) -> ExportResult<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}
