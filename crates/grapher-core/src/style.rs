// File: crates/grapher-core/src/style.rs
// Summary: Closed, typed style configuration plus the pens/brushes/fonts derived from it.

use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::error::GrapherError;

/// Stroke parameters. A width of 0 draws a one-device-pixel hairline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pen {
    pub color: Color,
    pub width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Brush {
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PenRole {
    Grid,
    Curve,
    IndicatorDot,
    IndicatorLine,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrushRole {
    Background,
    Curve,
    Chart,
    IndicatorDot,
}

/// Kind of value a style attribute holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Color,
    Number,
    Text,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Color => "color",
            ValueKind::Number => "number",
            ValueKind::Text => "text",
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    Color(Color),
    Number(f64),
    Text(String),
}

impl StyleValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            StyleValue::Color(_) => ValueKind::Color,
            StyleValue::Number(_) => ValueKind::Number,
            StyleValue::Text(_) => ValueKind::Text,
        }
    }

    /// Parse `raw` into the kind of value `key` holds.
    pub fn parse_for(key: StyleKey, raw: &str) -> Result<Self, GrapherError> {
        match key.kind() {
            ValueKind::Color => raw.parse().map(StyleValue::Color),
            ValueKind::Number => raw
                .trim()
                .parse()
                .map(StyleValue::Number)
                .map_err(|_| GrapherError::InvalidNumber(raw.to_string())),
            ValueKind::Text => Ok(StyleValue::Text(raw.to_string())),
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Color(c) => write!(f, "{c}"),
            StyleValue::Number(n) => write!(f, "{n}"),
            StyleValue::Text(t) => f.write_str(t),
        }
    }
}

impl From<Color> for StyleValue {
    fn from(c: Color) -> Self { StyleValue::Color(c) }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self { StyleValue::Number(n) }
}

impl From<&str> for StyleValue {
    fn from(t: &str) -> Self { StyleValue::Text(t.to_string()) }
}

impl From<String> for StyleValue {
    fn from(t: String) -> Self { StyleValue::Text(t) }
}

/// Every attribute of [`StyleConfig`], addressable by its external name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleKey {
    BackgroundBrushColor,
    BackgroundBrushAlpha,
    GridPenColor,
    GridPenAlpha,
    GridPenWidth,
    CurvePenColor,
    CurvePenAlpha,
    CurvePenWidth,
    CurveBrushColor,
    CurveBrushAlpha,
    ChartBrushColor,
    ChartBrushAlpha,
    IndicatorDotPenColor,
    IndicatorDotPenAlpha,
    IndicatorDotPenWidth,
    IndicatorDotBrushColor,
    IndicatorDotBrushAlpha,
    IndicatorDotSize,
    IndicatorLinePenColor,
    IndicatorLinePenAlpha,
    IndicatorLinePenWidth,
    IndicatorTextFontName,
    IndicatorTextFontSize,
    IndicatorTextColor,
    IndicatorTextAlpha,
}

impl StyleKey {
    pub const ALL: [StyleKey; 25] = [
        StyleKey::BackgroundBrushColor,
        StyleKey::BackgroundBrushAlpha,
        StyleKey::GridPenColor,
        StyleKey::GridPenAlpha,
        StyleKey::GridPenWidth,
        StyleKey::CurvePenColor,
        StyleKey::CurvePenAlpha,
        StyleKey::CurvePenWidth,
        StyleKey::CurveBrushColor,
        StyleKey::CurveBrushAlpha,
        StyleKey::ChartBrushColor,
        StyleKey::ChartBrushAlpha,
        StyleKey::IndicatorDotPenColor,
        StyleKey::IndicatorDotPenAlpha,
        StyleKey::IndicatorDotPenWidth,
        StyleKey::IndicatorDotBrushColor,
        StyleKey::IndicatorDotBrushAlpha,
        StyleKey::IndicatorDotSize,
        StyleKey::IndicatorLinePenColor,
        StyleKey::IndicatorLinePenAlpha,
        StyleKey::IndicatorLinePenWidth,
        StyleKey::IndicatorTextFontName,
        StyleKey::IndicatorTextFontSize,
        StyleKey::IndicatorTextColor,
        StyleKey::IndicatorTextAlpha,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            StyleKey::BackgroundBrushColor => "background_brush_color",
            StyleKey::BackgroundBrushAlpha => "background_brush_alpha",
            StyleKey::GridPenColor => "grid_pen_color",
            StyleKey::GridPenAlpha => "grid_pen_alpha",
            StyleKey::GridPenWidth => "grid_pen_width",
            StyleKey::CurvePenColor => "curve_pen_color",
            StyleKey::CurvePenAlpha => "curve_pen_alpha",
            StyleKey::CurvePenWidth => "curve_pen_width",
            StyleKey::CurveBrushColor => "curve_brush_color",
            StyleKey::CurveBrushAlpha => "curve_brush_alpha",
            StyleKey::ChartBrushColor => "chart_brush_color",
            StyleKey::ChartBrushAlpha => "chart_brush_alpha",
            StyleKey::IndicatorDotPenColor => "indicator_dot_pen_color",
            StyleKey::IndicatorDotPenAlpha => "indicator_dot_pen_alpha",
            StyleKey::IndicatorDotPenWidth => "indicator_dot_pen_width",
            StyleKey::IndicatorDotBrushColor => "indicator_dot_brush_color",
            StyleKey::IndicatorDotBrushAlpha => "indicator_dot_brush_alpha",
            StyleKey::IndicatorDotSize => "indicator_dot_size",
            StyleKey::IndicatorLinePenColor => "indicator_line_pen_color",
            StyleKey::IndicatorLinePenAlpha => "indicator_line_pen_alpha",
            StyleKey::IndicatorLinePenWidth => "indicator_line_pen_width",
            StyleKey::IndicatorTextFontName => "indicator_text_font_name",
            StyleKey::IndicatorTextFontSize => "indicator_text_font_size",
            StyleKey::IndicatorTextColor => "indicator_text_color",
            StyleKey::IndicatorTextAlpha => "indicator_text_alpha",
        }
    }

    pub const fn kind(self) -> ValueKind {
        match self {
            StyleKey::BackgroundBrushColor
            | StyleKey::GridPenColor
            | StyleKey::CurvePenColor
            | StyleKey::CurveBrushColor
            | StyleKey::ChartBrushColor
            | StyleKey::IndicatorDotPenColor
            | StyleKey::IndicatorDotBrushColor
            | StyleKey::IndicatorLinePenColor
            | StyleKey::IndicatorTextColor => ValueKind::Color,
            StyleKey::IndicatorTextFontName => ValueKind::Text,
            _ => ValueKind::Number,
        }
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleKey {
    type Err = GrapherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| GrapherError::UnknownStyleKey(s.to_string()))
    }
}

/// Visual parameters for one widget. Alphas are in `[0, 1]`; widths and sizes
/// are in pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleConfig {
    pub background_brush_color: Color,
    pub background_brush_alpha: f64,
    pub grid_pen_color: Color,
    pub grid_pen_alpha: f64,
    pub grid_pen_width: f64,
    pub curve_pen_color: Color,
    pub curve_pen_alpha: f64,
    pub curve_pen_width: f64,
    pub curve_brush_color: Color,
    pub curve_brush_alpha: f64,
    pub chart_brush_color: Color,
    pub chart_brush_alpha: f64,
    pub indicator_dot_pen_color: Color,
    pub indicator_dot_pen_alpha: f64,
    pub indicator_dot_pen_width: f64,
    pub indicator_dot_brush_color: Color,
    pub indicator_dot_brush_alpha: f64,
    pub indicator_dot_size: f64,
    pub indicator_line_pen_color: Color,
    pub indicator_line_pen_alpha: f64,
    pub indicator_line_pen_width: f64,
    pub indicator_text_font_name: String,
    pub indicator_text_font_size: f64,
    pub indicator_text_color: Color,
    pub indicator_text_alpha: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        let light_gray = Color::rgb(0xcc, 0xcc, 0xcc);
        let green = Color::rgb(0x00, 0xff, 0x00);
        Self {
            background_brush_color: Color::WHITE,
            background_brush_alpha: 1.0,
            grid_pen_color: light_gray,
            grid_pen_alpha: 0.15,
            grid_pen_width: 0.0,
            curve_pen_color: Color::rgb(0x00, 0x66, 0x00),
            curve_pen_alpha: 1.0,
            curve_pen_width: 0.0,
            curve_brush_color: green,
            curve_brush_alpha: 0.5,
            chart_brush_color: green,
            chart_brush_alpha: 0.33,
            indicator_dot_pen_color: light_gray,
            indicator_dot_pen_alpha: 1.0,
            indicator_dot_pen_width: 0.0,
            indicator_dot_brush_color: green,
            indicator_dot_brush_alpha: 0.5,
            indicator_dot_size: 8.0,
            indicator_line_pen_color: light_gray,
            indicator_line_pen_alpha: 1.0,
            indicator_line_pen_width: 0.0,
            indicator_text_font_name: "Verdana".to_string(),
            indicator_text_font_size: 10.0,
            indicator_text_color: light_gray,
            indicator_text_alpha: 1.0,
        }
    }
}

enum Slot<'a> {
    Color(&'a mut Color),
    Number(&'a mut f64),
    Text(&'a mut String),
}

impl StyleConfig {
    pub fn get(&self, key: StyleKey) -> StyleValue {
        use StyleValue::{Color as C, Number as N, Text as T};
        match key {
            StyleKey::BackgroundBrushColor => C(self.background_brush_color),
            StyleKey::BackgroundBrushAlpha => N(self.background_brush_alpha),
            StyleKey::GridPenColor => C(self.grid_pen_color),
            StyleKey::GridPenAlpha => N(self.grid_pen_alpha),
            StyleKey::GridPenWidth => N(self.grid_pen_width),
            StyleKey::CurvePenColor => C(self.curve_pen_color),
            StyleKey::CurvePenAlpha => N(self.curve_pen_alpha),
            StyleKey::CurvePenWidth => N(self.curve_pen_width),
            StyleKey::CurveBrushColor => C(self.curve_brush_color),
            StyleKey::CurveBrushAlpha => N(self.curve_brush_alpha),
            StyleKey::ChartBrushColor => C(self.chart_brush_color),
            StyleKey::ChartBrushAlpha => N(self.chart_brush_alpha),
            StyleKey::IndicatorDotPenColor => C(self.indicator_dot_pen_color),
            StyleKey::IndicatorDotPenAlpha => N(self.indicator_dot_pen_alpha),
            StyleKey::IndicatorDotPenWidth => N(self.indicator_dot_pen_width),
            StyleKey::IndicatorDotBrushColor => C(self.indicator_dot_brush_color),
            StyleKey::IndicatorDotBrushAlpha => N(self.indicator_dot_brush_alpha),
            StyleKey::IndicatorDotSize => N(self.indicator_dot_size),
            StyleKey::IndicatorLinePenColor => C(self.indicator_line_pen_color),
            StyleKey::IndicatorLinePenAlpha => N(self.indicator_line_pen_alpha),
            StyleKey::IndicatorLinePenWidth => N(self.indicator_line_pen_width),
            StyleKey::IndicatorTextFontName => T(self.indicator_text_font_name.clone()),
            StyleKey::IndicatorTextFontSize => N(self.indicator_text_font_size),
            StyleKey::IndicatorTextColor => C(self.indicator_text_color),
            StyleKey::IndicatorTextAlpha => N(self.indicator_text_alpha),
        }
    }

    /// Overwrite one attribute. The value must be of the kind the key holds;
    /// on mismatch nothing changes.
    pub fn set(&mut self, key: StyleKey, value: StyleValue) -> Result<(), GrapherError> {
        let found = value.kind();
        match (self.slot_mut(key), value) {
            (Slot::Color(slot), StyleValue::Color(c)) => *slot = c,
            (Slot::Number(slot), StyleValue::Number(n)) => *slot = n,
            (Slot::Text(slot), StyleValue::Text(t)) => *slot = t,
            _ => {
                return Err(GrapherError::StyleTypeMismatch {
                    key: key.as_str(),
                    expected: key.kind(),
                    found,
                })
            }
        }
        Ok(())
    }

    /// String-keyed variant of [`StyleConfig::set`]; unknown names are rejected.
    pub fn set_by_name(&mut self, name: &str, value: StyleValue) -> Result<(), GrapherError> {
        self.set(name.parse()?, value)
    }

    /// Apply a `key=value` override, parsing the value for the key's kind.
    pub fn apply_override(&mut self, assignment: &str) -> Result<StyleKey, GrapherError> {
        let (name, raw) = assignment
            .split_once('=')
            .ok_or_else(|| GrapherError::UnknownStyleKey(assignment.to_string()))?;
        let key: StyleKey = name.trim().parse()?;
        self.set(key, StyleValue::parse_for(key, raw)?)?;
        Ok(key)
    }

    fn slot_mut(&mut self, key: StyleKey) -> Slot<'_> {
        match key {
            StyleKey::BackgroundBrushColor => Slot::Color(&mut self.background_brush_color),
            StyleKey::BackgroundBrushAlpha => Slot::Number(&mut self.background_brush_alpha),
            StyleKey::GridPenColor => Slot::Color(&mut self.grid_pen_color),
            StyleKey::GridPenAlpha => Slot::Number(&mut self.grid_pen_alpha),
            StyleKey::GridPenWidth => Slot::Number(&mut self.grid_pen_width),
            StyleKey::CurvePenColor => Slot::Color(&mut self.curve_pen_color),
            StyleKey::CurvePenAlpha => Slot::Number(&mut self.curve_pen_alpha),
            StyleKey::CurvePenWidth => Slot::Number(&mut self.curve_pen_width),
            StyleKey::CurveBrushColor => Slot::Color(&mut self.curve_brush_color),
            StyleKey::CurveBrushAlpha => Slot::Number(&mut self.curve_brush_alpha),
            StyleKey::ChartBrushColor => Slot::Color(&mut self.chart_brush_color),
            StyleKey::ChartBrushAlpha => Slot::Number(&mut self.chart_brush_alpha),
            StyleKey::IndicatorDotPenColor => Slot::Color(&mut self.indicator_dot_pen_color),
            StyleKey::IndicatorDotPenAlpha => Slot::Number(&mut self.indicator_dot_pen_alpha),
            StyleKey::IndicatorDotPenWidth => Slot::Number(&mut self.indicator_dot_pen_width),
            StyleKey::IndicatorDotBrushColor => Slot::Color(&mut self.indicator_dot_brush_color),
            StyleKey::IndicatorDotBrushAlpha => Slot::Number(&mut self.indicator_dot_brush_alpha),
            StyleKey::IndicatorDotSize => Slot::Number(&mut self.indicator_dot_size),
            StyleKey::IndicatorLinePenColor => Slot::Color(&mut self.indicator_line_pen_color),
            StyleKey::IndicatorLinePenAlpha => Slot::Number(&mut self.indicator_line_pen_alpha),
            StyleKey::IndicatorLinePenWidth => Slot::Number(&mut self.indicator_line_pen_width),
            StyleKey::IndicatorTextFontName => Slot::Text(&mut self.indicator_text_font_name),
            StyleKey::IndicatorTextFontSize => Slot::Number(&mut self.indicator_text_font_size),
            StyleKey::IndicatorTextColor => Slot::Color(&mut self.indicator_text_color),
            StyleKey::IndicatorTextAlpha => Slot::Number(&mut self.indicator_text_alpha),
        }
    }

    pub fn pen(&self, role: PenRole) -> Pen {
        let (color, alpha, width) = match role {
            PenRole::Grid => (self.grid_pen_color, self.grid_pen_alpha, self.grid_pen_width),
            PenRole::Curve => (self.curve_pen_color, self.curve_pen_alpha, self.curve_pen_width),
            PenRole::IndicatorDot => (
                self.indicator_dot_pen_color,
                self.indicator_dot_pen_alpha,
                self.indicator_dot_pen_width,
            ),
            PenRole::IndicatorLine => (
                self.indicator_line_pen_color,
                self.indicator_line_pen_alpha,
                self.indicator_line_pen_width,
            ),
        };
        Pen { color: color.with_alpha(alpha), width }
    }

    pub fn brush(&self, role: BrushRole) -> Brush {
        let (color, alpha) = match role {
            BrushRole::Background => (self.background_brush_color, self.background_brush_alpha),
            BrushRole::Curve => (self.curve_brush_color, self.curve_brush_alpha),
            BrushRole::Chart => (self.chart_brush_color, self.chart_brush_alpha),
            BrushRole::IndicatorDot => (self.indicator_dot_brush_color, self.indicator_dot_brush_alpha),
        };
        Brush { color: color.with_alpha(alpha) }
    }

    pub fn indicator_font(&self) -> FontSpec {
        FontSpec {
            family: self.indicator_text_font_name.clone(),
            size: self.indicator_text_font_size,
        }
    }

    pub fn indicator_text_color(&self) -> Color {
        self.indicator_text_color.with_alpha(self.indicator_text_alpha)
    }
}
