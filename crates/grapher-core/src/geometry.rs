// File: crates/grapher-core/src/geometry.rs
// Summary: Pixel-space primitives and the series-to-path mapping.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }
    /// Square of side `size` centered on `center`.
    pub fn centered_square(center: Point, size: f64) -> Self {
        Self::from_ltwh(center.x - size / 2.0, center.y - size / 2.0, size, size)
    }
    pub fn right(&self) -> f64 { self.left + self.width }
    pub fn bottom(&self) -> f64 { self.top + self.height }
}

/// Open or closed chain of line segments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub closed: bool,
}

impl Polyline {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points, closed: false }
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Region under the curve: the curve, a drop to `baseline_y` below its last
    /// point, then closed back to the first point.
    pub fn area_to_baseline(&self, baseline_y: f64) -> Polyline {
        let mut points = self.points.clone();
        if let Some(last) = self.last() {
            points.push(Point::new(last.x, baseline_y));
        }
        Polyline { points, closed: true }
    }
}

/// Result of mapping a series onto the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPath {
    pub path: Polyline,
    /// Final point of `path`; anchors the indicator dot, line and caption.
    pub last: Point,
}

/// Map `ys` onto a `width` x `height` canvas.
///
/// Each x scales with the current `progress`, so the curve always spans
/// `0..=progress * width`. The largest value sits at `y_proportion` of the
/// height; the remainder is headroom.
///
/// Policy branches:
/// - an empty series yields an empty path anchored at the origin;
/// - a single point is placed at `x = 0`;
/// - when the maximum is not positive no scaling happens and both coordinates
///   of every point are the raw value.
pub fn compute_series_path(
    ys: &[f64],
    progress: f64,
    width: f64,
    height: f64,
    y_proportion: f64,
) -> SeriesPath {
    if ys.is_empty() {
        return SeriesPath { path: Polyline::default(), last: Point::default() };
    }

    let max_y = ys.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let points: Vec<Point> = if max_y > 0.0 {
        let n = ys.len();
        let x_step = if n > 1 { progress * width / (n - 1) as f64 } else { 0.0 };
        ys.iter()
            .enumerate()
            .map(|(i, &y)| Point::new(i as f64 * x_step, (1.0 - y / max_y * y_proportion) * height))
            .collect()
    } else {
        ys.iter().map(|&y| Point::new(y, y)).collect()
    };

    let last = points[points.len() - 1];
    SeriesPath { path: Polyline::new(points), last }
}
