//! Draws onto a `tiny_skia::Pixmap`.
//!
//! Strokes go straight through tiny-skia's stroker. Text arrives as an egui
//! mesh whose vertices sample the font atlas, so every textured triangle is
//! filled with an atlas pattern mapped onto it.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use egui::epaint::{FontImage, Mesh, Vertex};
use egui::{Color32, Pos2};
use image::{Rgba, RgbaImage};
use tiny_skia::{
    Color, FillRule, FilterQuality, LineCap, LineJoin, Paint, PathBuilder, Pattern, Pixmap,
    PremultipliedColorU8, SpreadMode, Stroke, Transform,
};

use crate::error::{ExportError, ExportResult};

/// A pixmap plus the atlas textures built for it.
pub struct Raster {
    pixmap: Pixmap,
    /// Font atlas tinted per text color, premultiplied
    tinted: HashMap<Color32, Pixmap>,
}

impl Raster {
    pub fn new(width: u32, height: u32, background: Color32) -> ExportResult<Self> {
        let mut pixmap =
            Pixmap::new(width, height).ok_or(ExportError::Canvas { width, height })?;
        pixmap.fill(color(background));
        Ok(Self {
            pixmap,
            tinted: HashMap::new(),
        })
    }

    /// Round-capped, round-joined polyline. Fewer than two points draw nothing.
    pub fn polyline(&mut self, points: &[Pos2], width: f32, ink: Color32) {
        let [first, rest @ ..] = points else {
            return;
        };
        if rest.is_empty() {
            return;
        }

        let mut builder = PathBuilder::new();
        builder.move_to(first.x, first.y);
        for point in rest {
            builder.line_to(point.x, point.y);
        }
        let Some(path) = builder.finish() else {
            return;
        };

        let stroke = Stroke {
            width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(&path, &solid(ink, true), &stroke, Transform::identity(), None);
    }

    /// Fill the triangles of a tessellated text mesh.
    pub fn mesh(&mut self, mesh: &Mesh, atlas: &FontImage) {
        for triangle in mesh.indices.chunks_exact(3) {
            let vertex = |index: u32| &mesh.vertices[index as usize];
            self.triangle(
                [vertex(triangle[0]), vertex(triangle[1]), vertex(triangle[2])],
                atlas,
            );
        }
    }

    fn triangle(&mut self, [a, b, c]: [&Vertex; 3], atlas: &FontImage) {
        let mut builder = PathBuilder::new();
        builder.move_to(a.pos.x, a.pos.y);
        builder.line_to(b.pos.x, b.pos.y);
        builder.line_to(c.pos.x, c.pos.y);
        builder.close();
        let Some(path) = builder.finish() else {
            return;
        };

        let [width, height] = atlas.size;
        let texel = |vertex: &Vertex| Pos2::new(vertex.uv.x * width as f32, vertex.uv.y * height as f32);
        let uv = [texel(a), texel(b), texel(c)];

        // Neighbouring triangles share edges; anti-aliasing them would leave seams.
        match atlas_to_canvas(uv, [a.pos, b.pos, c.pos]) {
            Some(transform) => {
                let tinted = match self.tinted.entry(a.color) {
                    Entry::Occupied(entry) => entry.into_mut(),
                    Entry::Vacant(entry) => match tint(atlas, a.color) {
                        Some(pixmap) => entry.insert(pixmap),
                        None => return,
                    },
                };
                let mut paint = Paint::default();
                paint.shader = Pattern::new(
                    tinted.as_ref(),
                    SpreadMode::Pad,
                    FilterQuality::Bilinear,
                    1.0,
                    transform,
                );
                paint.anti_alias = false;
                self.pixmap
                    .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
            }
            None => {
                // Solid geometry: all three corners sample the same texel.
                let coverage = sample(atlas, uv[0]);
                if coverage > 0.0 {
                    let ink = a.color.gamma_multiply(coverage);
                    self.pixmap.fill_path(
                        &path,
                        &solid(ink, false),
                        FillRule::Winding,
                        Transform::identity(),
                        None,
                    );
                }
            }
        }
    }

    pub fn into_image(self) -> RgbaImage {
        let width = self.pixmap.width();
        let pixels = self.pixmap.pixels();
        RgbaImage::from_fn(width, self.pixmap.height(), |x, y| {
            let pixel = pixels[y as usize * width as usize + x as usize].demultiply();
            Rgba([pixel.red(), pixel.green(), pixel.blue(), pixel.alpha()])
        })
    }
}

fn color(color: Color32) -> Color {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    Color::from_rgba8(r, g, b, a)
}

fn solid(ink: Color32, anti_alias: bool) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color(ink));
    paint.anti_alias = anti_alias;
    paint
}

/// Affine map taking atlas texel coordinates `uv` onto canvas points `pos`.
///
/// `None` when the texture coordinates are degenerate, which is how the
/// tessellator marks untextured geometry.
fn atlas_to_canvas(uv: [Pos2; 3], pos: [Pos2; 3]) -> Option<Transform> {
    let (ds1, dt1) = (uv[1].x - uv[0].x, uv[1].y - uv[0].y);
    let (ds2, dt2) = (uv[2].x - uv[0].x, uv[2].y - uv[0].y);
    let det = ds1 * dt2 - ds2 * dt1;
    if det.abs() <= f32::EPSILON {
        return None;
    }

    let (dx1, dy1) = (pos[1].x - pos[0].x, pos[1].y - pos[0].y);
    let (dx2, dy2) = (pos[2].x - pos[0].x, pos[2].y - pos[0].y);
    let sx = (dx1 * dt2 - dx2 * dt1) / det;
    let kx = (ds1 * dx2 - ds2 * dx1) / det;
    let ky = (dy1 * dt2 - dy2 * dt1) / det;
    let sy = (ds1 * dy2 - ds2 * dy1) / det;
    let tx = pos[0].x - sx * uv[0].x - kx * uv[0].y;
    let ty = pos[0].y - ky * uv[0].x - sy * uv[0].y;
    Some(Transform::from_row(sx, ky, kx, sy, tx, ty))
}

/// Coverage of the atlas texel containing `texel`.
fn sample(atlas: &FontImage, texel: Pos2) -> f32 {
    let [width, height] = atlas.size;
    if width == 0 || height == 0 {
        return 1.0;
    }
    let x = (texel.x.max(0.0) as usize).min(width - 1);
    let y = (texel.y.max(0.0) as usize).min(height - 1);
    atlas.pixels[y * width + x]
}

/// The atlas as a premultiplied pixmap: `ink` scaled by each texel's coverage.
fn tint(atlas: &FontImage, ink: Color32) -> Option<Pixmap> {
    let [width, height] = atlas.size;
    let mut pixmap = Pixmap::new(width as u32, height as u32)?;
    let [r, g, b, a] = ink.to_array();
    for (out, &coverage) in pixmap.pixels_mut().iter_mut().zip(&atlas.pixels) {
        let scale = |channel: u8| (channel as f32 * coverage.clamp(0.0, 1.0)).round() as u8;
        *out = PremultipliedColorU8::from_rgba(scale(r), scale(g), scale(b), scale(a))
            .unwrap_or(PremultipliedColorU8::TRANSPARENT);
    }
    Some(pixmap)
}
