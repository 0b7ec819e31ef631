// File: crates/grapher-core/src/grapher.rs
// Summary: SpeedGrapher engine: series/progress/style state and the full-redraw pipeline.

use tracing::{debug, warn};

use crate::error::GrapherError;
use crate::geometry::{compute_series_path, Point, Rect, SeriesPath};
use crate::grid::gridline_offsets;
use crate::scene::{DrawCommand, Scene};
use crate::style::{BrushRole, PenRole, StyleConfig, StyleKey, StyleValue};
use crate::surface::Surface;
use crate::types::{
    CAPTION_MARGIN_BOTTOM, CAPTION_MARGIN_RIGHT, HEIGHT, HORIZONTAL_GRIDLINES, VERTICAL_GRIDLINES,
    WIDTH, Y_PROPORTION,
};

/// Construction-time parameters. The canvas size is fixed for the engine's lifetime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrapherOptions {
    pub width: u32,
    pub height: u32,
    pub vertical_gridlines: u32,
    pub horizontal_gridlines: u32,
    pub y_proportion: f64,
    pub caption_margin_right: f64,
    pub caption_margin_bottom: f64,
}

impl Default for GrapherOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            vertical_gridlines: VERTICAL_GRIDLINES,
            horizontal_gridlines: HORIZONTAL_GRIDLINES,
            y_proportion: Y_PROPORTION,
            caption_margin_right: CAPTION_MARGIN_RIGHT,
            caption_margin_bottom: CAPTION_MARGIN_BOTTOM,
        }
    }
}

impl GrapherOptions {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_gridlines(mut self, vertical: u32, horizontal: u32) -> Self {
        self.vertical_gridlines = vertical;
        self.horizontal_gridlines = horizontal;
        self
    }
}

/// Progress bar overlaid with a live line chart of one scalar series.
pub struct SpeedGrapher<S: Surface> {
    surface: S,
    options: GrapherOptions,
    ys: Vec<f64>,
    progress: f64,
    style: StyleConfig,
    indicator_text: String,
}

impl<S: Surface> SpeedGrapher<S> {
    /// Create the engine and draw the initial frame (no indicators).
    pub fn new(surface: S, options: GrapherOptions) -> Self {
        let mut grapher = Self {
            surface,
            options,
            ys: vec![0.0],
            progress: 0.0,
            style: StyleConfig::default(),
            indicator_text: String::new(),
        };
        grapher.update_plot(false);
        grapher
    }

    /// Append a point and redraw with indicators.
    ///
    /// A `progress` outside `[0, 1]` is logged and rejected; nothing changes and
    /// no frame is drawn.
    pub fn add_data_point(&mut self, value: f64, progress: f64, label: Option<&str>) -> Result<(), GrapherError> {
        check_progress(progress)?;
        self.indicator_text = label.unwrap_or_default().to_string();
        self.ys.push(value);
        self.progress = progress;
        self.update_plot(true);
        Ok(())
    }

    /// Rebuild the frame from current state and draw it.
    pub fn update_plot(&mut self, show_indicators: bool) {
        let scene = self.compose(show_indicators);
        scene.replay(&mut self.surface);
        debug!(points = self.ys.len(), progress = self.progress, show_indicators, "redrew plot");
    }

    /// Overwrite progress without redrawing.
    pub fn set_progress(&mut self, progress: f64) -> Result<(), GrapherError> {
        check_progress(progress)?;
        self.progress = progress;
        Ok(())
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Replace the whole series without redrawing. An empty input reseeds the
    /// single `0.0` placeholder.
    pub fn set_data(&mut self, values: &[f64]) {
        self.ys.clear();
        self.ys.extend_from_slice(values);
        if self.ys.is_empty() {
            self.ys.push(0.0);
        }
    }

    pub fn data(&self) -> &[f64] {
        &self.ys
    }

    pub fn indicator_text(&self) -> &str {
        &self.indicator_text
    }

    pub fn style_attribute(&self, key: StyleKey) -> StyleValue {
        self.style.get(key)
    }

    pub fn set_style_attribute(&mut self, key: StyleKey, value: impl Into<StyleValue>) -> Result<(), GrapherError> {
        self.style.set(key, value.into())
    }

    pub fn set_style_attribute_by_name(&mut self, name: &str, value: impl Into<StyleValue>) -> Result<(), GrapherError> {
        self.style.set_by_name(name, value.into())
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut StyleConfig {
        &mut self.style
    }

    pub fn options(&self) -> &GrapherOptions {
        &self.options
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Geometry of the current series at the current progress.
    pub fn series_path(&self) -> SeriesPath {
        compute_series_path(
            &self.ys,
            self.progress,
            self.options.width as f64,
            self.options.height as f64,
            self.options.y_proportion,
        )
    }

    /// Build the frame for the current state without drawing it.
    pub fn compose(&self, show_indicators: bool) -> Scene {
        let width = self.options.width as f64;
        let height = self.options.height as f64;
        let style = &self.style;
        let mut scene = Scene::new();

        scene.push(DrawCommand::Clear { background: style.brush(BrushRole::Background) });

        let grid_pen = style.pen(PenRole::Grid);
        for x in gridline_offsets(self.options.width, self.options.vertical_gridlines) {
            scene.push(DrawCommand::Line { from: Point::new(x, 0.0), to: Point::new(x, height), pen: grid_pen });
        }
        for y in gridline_offsets(self.options.height, self.options.horizontal_gridlines) {
            scene.push(DrawCommand::Line { from: Point::new(0.0, y), to: Point::new(width, y), pen: grid_pen });
        }

        let SeriesPath { path, last } = self.series_path();
        let area = path.area_to_baseline(height);
        scene.push(DrawCommand::Path { path, pen: Some(style.pen(PenRole::Curve)), brush: None });
        scene.push(DrawCommand::Path { path: area, pen: None, brush: Some(style.brush(BrushRole::Curve)) });

        scene.push(DrawCommand::Rect {
            rect: Rect::from_ltwh(0.0, 0.0, self.progress * width, height),
            brush: style.brush(BrushRole::Chart),
        });

        if !show_indicators {
            return scene;
        }

        scene.push(DrawCommand::Ellipse {
            rect: Rect::centered_square(last, style.indicator_dot_size),
            pen: style.pen(PenRole::IndicatorDot),
            brush: style.brush(BrushRole::IndicatorDot),
        });

        scene.push(DrawCommand::Line {
            from: Point::new(0.0, last.y + 0.5),
            to: Point::new(width, last.y + 0.5),
            pen: style.pen(PenRole::IndicatorLine),
        });

        let text = if self.indicator_text.is_empty() {
            format_value(self.ys.last().copied().unwrap_or_default())
        } else {
            self.indicator_text.clone()
        };
        let font = style.indicator_font();
        let (text_w, text_h) = self.surface.measure_text(&text, &font);
        let text_x = width - self.options.caption_margin_right - text_w;
        let text_y = (last.y - self.options.caption_margin_bottom - text_h).max(0.0);
        scene.push(DrawCommand::Text {
            text,
            font,
            color: style.indicator_text_color(),
            top_left: Point::new(text_x, text_y),
        });

        scene
    }
}

fn check_progress(progress: f64) -> Result<(), GrapherError> {
    if (0.0..=1.0).contains(&progress) {
        Ok(())
    } else {
        warn!(progress, "progress value out of range");
        Err(GrapherError::Range(progress))
    }
}

/// Format like C's `%g`: six significant digits, trailing zeros dropped,
/// exponent notation for very small or large magnitudes.
pub fn format_value(value: f64) -> String {
    const PRECISION: i32 = 6;
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    // Round first so 999999.5 switches to exponent form like printf does.
    let sci = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    if exp < -4 || exp >= PRECISION {
        let mantissa = trim_zeros(mantissa);
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.abs())
    } else {
        let decimals = (PRECISION - 1 - exp).max(0) as usize;
        trim_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::format_value;

    #[test]
    fn formats_like_printf_g() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(0.5), "0.5");
        assert_eq!(format_value(1.0), "1");
        assert_eq!(format_value(1.23456789), "1.23457");
        assert_eq!(format_value(-42.25), "-42.25");
        assert_eq!(format_value(123456.0), "123456");
        assert_eq!(format_value(1234567.0), "1.23457e+06");
        assert_eq!(format_value(0.0001), "0.0001");
        assert_eq!(format_value(0.00001234), "1.234e-05");
    }
}
