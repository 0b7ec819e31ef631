// File: crates/grapher-core/src/surface.rs
// Summary: Host drawing surface trait plus an in-memory recording implementation.

use crate::color::Color;
use crate::geometry::{Point, Polyline, Rect};
use crate::scene::DrawCommand;
use crate::style::{Brush, FontSpec, Pen};

/// Drawing target the engine redraws onto. Every frame starts with `clear`
/// and ends with `present`.
pub trait Surface {
    /// Drop everything drawn so far and fill with `background`.
    fn clear(&mut self, background: &Brush);
    fn draw_line(&mut self, from: Point, to: Point, pen: &Pen);
    /// Stroke with `pen` and/or fill with `brush`.
    fn draw_path(&mut self, path: &Polyline, pen: Option<&Pen>, brush: Option<&Brush>);
    fn fill_rect(&mut self, rect: Rect, brush: &Brush);
    fn draw_ellipse(&mut self, rect: Rect, pen: &Pen, brush: &Brush);
    /// Bounding box `(width, height)` of `text` laid out in `font`.
    fn measure_text(&self, text: &str, font: &FontSpec) -> (f64, f64);
    /// Draw `text` with its bounding box's top-left corner at `top_left`.
    fn draw_text(&mut self, text: &str, font: &FontSpec, color: Color, top_left: Point);
    fn present(&mut self) {}
}

/// Keeps the commands of the most recent frame and counts presented frames.
/// Text metrics are a fixed approximation so layouts are deterministic.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    frames: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands drawn since the last `clear`.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of frames presented so far.
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, background: &Brush) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { background: *background });
    }

    fn draw_line(&mut self, from: Point, to: Point, pen: &Pen) {
        self.commands.push(DrawCommand::Line { from, to, pen: *pen });
    }

    fn draw_path(&mut self, path: &Polyline, pen: Option<&Pen>, brush: Option<&Brush>) {
        self.commands.push(DrawCommand::Path {
            path: path.clone(),
            pen: pen.copied(),
            brush: brush.copied(),
        });
    }

    fn fill_rect(&mut self, rect: Rect, brush: &Brush) {
        self.commands.push(DrawCommand::Rect { rect, brush: *brush });
    }

    fn draw_ellipse(&mut self, rect: Rect, pen: &Pen, brush: &Brush) {
        self.commands.push(DrawCommand::Ellipse { rect, pen: *pen, brush: *brush });
    }

    fn measure_text(&self, text: &str, font: &FontSpec) -> (f64, f64) {
        (text.chars().count() as f64 * font.size * 0.6, font.size * 1.2)
    }

    fn draw_text(&mut self, text: &str, font: &FontSpec, color: Color, top_left: Point) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            font: font.clone(),
            color,
            top_left,
        });
    }

    fn present(&mut self) {
        self.frames += 1;
    }
}
