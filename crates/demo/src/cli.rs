// File: crates/demo/src/cli.rs
// Summary: Command-line arguments shared by the headless and windowed demos.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use grapher_core::types::{HEIGHT, HORIZONTAL_GRIDLINES, VERTICAL_GRIDLINES, WIDTH};
use grapher_core::{DemoConfig, DemoDriver, GrapherOptions, StyleConfig};

use crate::input::load_series_csv;

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Number of synthetic points to feed.
    #[arg(long, default_value_t = 1000)]
    pub points: usize,

    /// Number of |sin| humps across the synthetic series.
    #[arg(long, default_value_t = 4.8)]
    pub oscillations: f64,

    /// Tick interval in milliseconds.
    #[arg(long = "interval-ms", default_value_t = 100)]
    pub interval_ms: u64,

    /// Seed for the noise generator (random when omitted).
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = WIDTH)]
    pub width: u32,

    #[arg(long, default_value_t = HEIGHT)]
    pub height: u32,

    #[arg(long = "vertical-gridlines", default_value_t = VERTICAL_GRIDLINES)]
    pub vertical_gridlines: u32,

    #[arg(long = "horizontal-gridlines", default_value_t = HORIZONTAL_GRIDLINES)]
    pub horizontal_gridlines: u32,

    /// Style override `key=value`, e.g. `curve_pen_color=#036`. Repeatable.
    #[arg(long = "style", value_name = "KEY=VALUE")]
    pub styles: Vec<String>,

    /// Feed values from a CSV file instead of the synthetic series.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// CSV column to read (defaults to the first numeric column).
    #[arg(long, requires = "csv")]
    pub column: Option<String>,
}

impl RunArgs {
    pub fn grapher_options(&self) -> GrapherOptions {
        GrapherOptions::default()
            .with_size(self.width, self.height)
            .with_gridlines(self.vertical_gridlines, self.horizontal_gridlines)
    }

    pub fn demo_config(&self) -> DemoConfig {
        DemoConfig {
            num_points: self.points,
            num_oscillations: self.oscillations,
            interval: Duration::from_millis(self.interval_ms),
            seed: self.seed,
        }
    }

    /// Apply every `--style` override in order; the first invalid one aborts.
    pub fn apply_styles(&self, style: &mut StyleConfig) -> Result<()> {
        for assignment in &self.styles {
            let key = style
                .apply_override(assignment)
                .with_context(|| format!("invalid --style `{assignment}`"))?;
            tracing::debug!(%key, value = %style.get(key), "style override");
        }
        Ok(())
    }

    pub fn build_driver(&self) -> Result<DemoDriver> {
        let config = self.demo_config();
        match &self.csv {
            Some(path) => {
                let values = load_series_csv(path, self.column.as_deref())
                    .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
                tracing::info!(points = values.len(), path = %path.display(), "loaded series from CSV");
                Ok(DemoDriver::from_values(values, config.interval))
            }
            None => Ok(DemoDriver::new(&config)),
        }
    }
}
