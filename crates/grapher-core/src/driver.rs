// File: crates/grapher-core/src/driver.rs
// Summary: Demo driver that feeds a synthetic noisy |sin| series into a grapher, one point per tick.

use std::f64::consts::PI;
use std::time::Duration;

use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace};

use crate::grapher::SpeedGrapher;
use crate::surface::Surface;

#[derive(Clone, Debug, PartialEq)]
pub struct DemoConfig {
    pub num_points: usize,
    pub num_oscillations: f64,
    /// Tick period for whoever schedules the driver; the driver itself never sleeps.
    pub interval: Duration,
    /// Fixed seed for reproducible noise; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            num_points: 1000,
            num_oscillations: 4.8,
            interval: Duration::from_millis(100),
            seed: None,
        }
    }
}

/// What a single tick did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// Point `index` was appended at `progress`.
    Fed { index: usize, progress: f64 },
    /// Data ran out; the settle frame (no indicators) was drawn.
    Settled,
    /// Already settled; nothing happened.
    Idle,
}

#[derive(Clone, Debug)]
pub struct DemoDriver {
    values: Vec<f64>,
    cursor: usize,
    settled: bool,
    interval: Duration,
}

impl DemoDriver {
    pub fn new(config: &DemoConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        let values = synthesize(config.num_points, config.num_oscillations, seed);
        debug!(points = values.len(), seed, "synthesized demo series");
        Self::from_values(values, config.interval)
    }

    /// Drive an existing series with the same tick semantics.
    pub fn from_values(values: Vec<f64>, interval: Duration) -> Self {
        Self { values, cursor: 0, settled: false, interval }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_finished(&self) -> bool {
        self.settled
    }

    /// Feed the next point, or draw the settle frame once the series is exhausted.
    pub fn tick<S: Surface>(&mut self, grapher: &mut SpeedGrapher<S>) -> TickOutcome {
        if self.cursor < self.values.len() {
            let index = self.cursor;
            let progress = (index + 1) as f64 / self.values.len() as f64;
            if let Err(e) = grapher.add_data_point(self.values[index], progress, None) {
                debug!(index, "point skipped: {e}");
            }
            self.cursor += 1;
            trace!(index, progress, "fed point");
            return TickOutcome::Fed { index, progress };
        }
        if self.settled {
            return TickOutcome::Idle;
        }
        grapher.update_plot(false);
        self.settled = true;
        debug!(points = self.values.len(), "series exhausted, settle frame drawn");
        TickOutcome::Settled
    }
}

/// `|sin(2π · oscillations · i / (n - 1))| + noise`, noise uniform in `[0, 1)`.
pub fn synthesize(num_points: usize, num_oscillations: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let k = if num_points > 1 {
        2.0 * PI * num_oscillations / (num_points - 1) as f64
    } else {
        0.0
    };
    (0..num_points)
        .map(|i| {
            let noise: f64 = StandardUniform.sample(&mut rng);
            (k * i as f64).sin().abs() + noise
        })
        .collect()
}
