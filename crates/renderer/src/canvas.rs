//! Drawing surface bound to one rendering session.

use art_common::{ArtError, ArtResult, Rgb};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use crate::encode;

/// RGBA raster surface the style sketches draw onto.
///
/// Every primitive paints fully opaque colors with anti-aliasing off,
/// so the backing premultiplied buffer is identical to straight RGBA
/// and byte-exact across platforms.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Create a surface. Zero dimensions fail with `InvalidDimensions`.
    pub fn new(width: u32, height: u32) -> ArtResult<Self> {
        let pixmap =
            Pixmap::new(width, height).ok_or(ArtError::InvalidDimensions { width, height })?;
        Ok(Canvas { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// The raw RGBA pixel buffer, row-major, 4 bytes per pixel.
    pub fn pixels(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Flood the whole surface with one color.
    pub fn fill(&mut self, color: Rgb) {
        self.pixmap
            .fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, 255));
    }

    /// Fill an axis-aligned rectangle. Degenerate rects are ignored.
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        if let Some(rect) = Rect::from_xywh(x, y, w, h) {
            self.pixmap
                .fill_rect(rect, &paint(color), Transform::identity(), None);
        }
    }

    /// Outline an axis-aligned rectangle.
    pub fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, line_width: f32, color: Rgb) {
        let mut pb = PathBuilder::new();
        pb.move_to(x, y);
        pb.line_to(x + w, y);
        pb.line_to(x + w, y + h);
        pb.line_to(x, y + h);
        pb.close();

        if let Some(path) = pb.finish() {
            let stroke = Stroke {
                width: line_width,
                ..Stroke::default()
            };
            self.pixmap
                .stroke_path(&path, &paint(color), &stroke, Transform::identity(), None);
        }
    }

    /// Fill a triangle given its three vertices.
    pub fn fill_triangle(&mut self, points: [(f32, f32); 3], color: Rgb) {
        let mut pb = PathBuilder::new();
        pb.move_to(points[0].0, points[0].1);
        pb.line_to(points[1].0, points[1].1);
        pb.line_to(points[2].0, points[2].1);
        pb.close();

        if let Some(path) = pb.finish() {
            self.pixmap.fill_path(
                &path,
                &paint(color),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    /// Fill a circle centered at (cx, cy).
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb) {
        if let Some(path) = PathBuilder::from_circle(cx, cy, radius) {
            self.pixmap.fill_path(
                &path,
                &paint(color),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    /// Encode the surface as PNG bytes (indexed when the image fits
    /// in a 256-color palette, RGBA otherwise).
    pub fn encode_png(&self) -> ArtResult<Vec<u8>> {
        encode::png_auto(self.pixels(), self.width(), self.height())
    }

    /// Encode the surface as a `data:image/png;base64,` URL suitable
    /// for handing to an upload backend.
    pub fn to_data_url(&self) -> ArtResult<String> {
        Ok(encode::data_url(&self.encode_png()?))
    }
}

fn paint(color: Rgb) -> Paint<'static> {
    let mut p = Paint::default();
    p.set_color_rgba8(color.r, color.g, color.b, 255);
    p.anti_alias = false;
    p
}
