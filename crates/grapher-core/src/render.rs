// File: crates/grapher-core/src/render.rs
// Summary: Skia CPU raster surface: draws engine frames and exports PNG / RGBA8.

use anyhow::Result;
use skia_safe as skia;

use crate::color::Color;
use crate::error::GrapherError;
use crate::geometry::{Point, Polyline, Rect};
use crate::grapher::{GrapherOptions, SpeedGrapher};
use crate::style::{Brush, FontSpec, Pen};
use crate::surface::Surface;
use crate::text::TextShaper;

pub struct SkiaSurface {
    surface: skia::Surface,
    shaper: TextShaper,
    width: u32,
    height: u32,
}

impl SkiaSurface {
    pub fn new(width: u32, height: u32) -> Result<Self, GrapherError> {
        let surface = skia::surfaces::raster_n32_premul((width as i32, height as i32))
            .ok_or_else(|| GrapherError::Surface(format!("failed to create {width}x{height} raster surface")))?;
        Ok(Self { surface, shaper: TextShaper::new(), width, height })
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }

    /// Encode the current frame as PNG.
    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn write_png(&mut self, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.png_bytes()?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Current frame as tightly packed, unpremultiplied RGBA8 rows.
    pub fn rgba8(&mut self) -> Result<Vec<u8>> {
        let info = skia::ImageInfo::new(
            (self.width as i32, self.height as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = self.width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * self.height as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("failed to read back raster pixels");
        }
        Ok(pixels)
    }
}

impl SpeedGrapher<SkiaSurface> {
    /// Engine drawing onto a raster surface sized from `options`.
    pub fn raster(options: GrapherOptions) -> Result<Self, GrapherError> {
        let surface = SkiaSurface::new(options.width, options.height)?;
        Ok(Self::new(surface, options))
    }
}

impl Surface for SkiaSurface {
    fn clear(&mut self, background: &Brush) {
        let canvas = self.surface.canvas();
        canvas.clear(skia::Color::TRANSPARENT);
        canvas.draw_paint(&fill_paint(background));
    }

    fn draw_line(&mut self, from: Point, to: Point, pen: &Pen) {
        self.surface
            .canvas()
            .draw_line(to_sk_point(from), to_sk_point(to), &stroke_paint(pen));
    }

    fn draw_path(&mut self, path: &Polyline, pen: Option<&Pen>, brush: Option<&Brush>) {
        let Some(sk_path) = to_sk_path(path) else { return };
        let canvas = self.surface.canvas();
        if let Some(brush) = brush {
            canvas.draw_path(&sk_path, &fill_paint(brush));
        }
        if let Some(pen) = pen {
            canvas.draw_path(&sk_path, &stroke_paint(pen));
        }
    }

    fn fill_rect(&mut self, rect: Rect, brush: &Brush) {
        self.surface.canvas().draw_rect(to_sk_rect(rect), &fill_paint(brush));
    }

    fn draw_ellipse(&mut self, rect: Rect, pen: &Pen, brush: &Brush) {
        let oval = to_sk_rect(rect);
        let canvas = self.surface.canvas();
        canvas.draw_oval(oval, &fill_paint(brush));
        canvas.draw_oval(oval, &stroke_paint(pen));
    }

    fn measure_text(&self, text: &str, font: &FontSpec) -> (f64, f64) {
        self.shaper.measure(text, font)
    }

    fn draw_text(&mut self, text: &str, font: &FontSpec, color: Color, top_left: Point) {
        let canvas = self.surface.canvas();
        self.shaper
            .draw_top_left(canvas, text, top_left.x as f32, top_left.y as f32, font, to_sk_color(color));
    }
}

// ---- helpers ----------------------------------------------------------------

fn to_sk_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_sk_point(p: Point) -> (f32, f32) {
    (p.x as f32, p.y as f32)
}

fn to_sk_rect(r: Rect) -> skia::Rect {
    skia::Rect::from_xywh(r.left as f32, r.top as f32, r.width as f32, r.height as f32)
}

fn to_sk_path(path: &Polyline) -> Option<skia::Path> {
    let (first, rest) = path.points.split_first()?;
    let mut sk = skia::PathBuilder::new();
    sk.move_to(to_sk_point(*first));
    for p in rest {
        sk.line_to(to_sk_point(*p));
    }
    if path.closed {
        sk.close();
    }
    Some(sk.detach())
}

fn stroke_paint(pen: &Pen) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    // Width 0 is Skia's hairline.
    paint.set_stroke_width(pen.width.max(0.0) as f32);
    paint.set_color(to_sk_color(pen.color));
    paint
}

fn fill_paint(brush: &Brush) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_sk_color(brush.color));
    paint
}
