// File: crates/grapher-core/src/lib.rs
// Summary: Core library entry point; exports the SpeedGrapher engine, styling, surfaces and demo driver.

pub mod color;
pub mod driver;
pub mod error;
pub mod geometry;
pub mod grapher;
pub mod grid;
pub mod render;
pub mod scene;
pub mod style;
pub mod surface;
pub mod text;
pub mod types;

pub use color::Color;
pub use driver::{DemoConfig, DemoDriver, TickOutcome};
pub use error::GrapherError;
pub use geometry::{compute_series_path, Point, Polyline, Rect, SeriesPath};
pub use grapher::{GrapherOptions, SpeedGrapher};
pub use render::SkiaSurface;
pub use scene::{DrawCommand, Scene};
pub use style::{Brush, FontSpec, Pen, StyleConfig, StyleKey, StyleValue};
pub use surface::{RecordingSurface, Surface};
pub use text::TextShaper;
pub use types::{FrameStyle, FRAME_STYLE};
