// File: crates/grapher-core/src/types.rs
// Summary: Shared constants (canvas size, gridline density, margins) and the frame style.

use crate::color::Color;

/// Default canvas width in pixels.
pub const WIDTH: u32 = 650;
/// Default canvas height in pixels.
pub const HEIGHT: u32 = 100;

/// Default number of vertical gridlines across the width.
pub const VERTICAL_GRIDLINES: u32 = 15;
/// Default number of horizontal gridlines across the height.
pub const HORIZONTAL_GRIDLINES: u32 = 10;

/// Fraction of the canvas height the tallest point reaches; the rest is headroom.
pub const Y_PROPORTION: f64 = 0.83;

/// Gap between the caption and the right edge of the canvas.
pub const CAPTION_MARGIN_RIGHT: f64 = 10.0;
/// Gap between the bottom of the caption and the indicator line.
pub const CAPTION_MARGIN_BOTTOM: f64 = 3.0;

/// Border drawn by hosts around the widget when it is shown in a window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStyle {
    pub border_width: u32,
    pub border_color: Color,
}

pub const FRAME_STYLE: FrameStyle = FrameStyle {
    border_width: 1,
    border_color: Color::rgb(0xdd, 0xdd, 0xdd),
};
