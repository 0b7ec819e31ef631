// File: crates/grapher-core/src/scene.rs
// Summary: One frame's worth of draw commands, built fresh on every redraw.

use crate::color::Color;
use crate::geometry::{Point, Polyline, Rect};
use crate::style::{Brush, FontSpec, Pen};
use crate::surface::Surface;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear { background: Brush },
    Line { from: Point, to: Point, pen: Pen },
    Path { path: Polyline, pen: Option<Pen>, brush: Option<Brush> },
    Rect { rect: Rect, brush: Brush },
    Ellipse { rect: Rect, pen: Pen, brush: Brush },
    Text { text: String, font: FontSpec, color: Color, top_left: Point },
}

/// Ordered draw commands for a single frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// True when the frame carries the latest-point indicator (dot, line, caption).
    pub fn has_indicators(&self) -> bool {
        self.commands.iter().any(|c| matches!(c, DrawCommand::Ellipse { .. } | DrawCommand::Text { .. }))
    }

    /// Draw every command onto `surface` in order, then present.
    pub fn replay<S: Surface + ?Sized>(&self, surface: &mut S) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear { background } => surface.clear(background),
                DrawCommand::Line { from, to, pen } => surface.draw_line(*from, *to, pen),
                DrawCommand::Path { path, pen, brush } => surface.draw_path(path, pen.as_ref(), brush.as_ref()),
                DrawCommand::Rect { rect, brush } => surface.fill_rect(*rect, brush),
                DrawCommand::Ellipse { rect, pen, brush } => surface.draw_ellipse(*rect, pen, brush),
                DrawCommand::Text { text, font, color, top_left } => {
                    surface.draw_text(text, font, *color, *top_left)
                }
            }
        }
        surface.present();
    }
}
