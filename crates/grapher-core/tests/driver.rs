// File: crates/grapher-core/tests/driver.rs
// Purpose: Demo driver series shape and tick/settle sequencing.

use std::time::Duration;

use grapher_core::driver::synthesize;
use grapher_core::{DemoConfig, DemoDriver, GrapherOptions, RecordingSurface, SpeedGrapher, TickOutcome};

fn grapher() -> SpeedGrapher<RecordingSurface> {
    SpeedGrapher::new(RecordingSurface::new(), GrapherOptions::default())
}

#[test]
fn synthesized_series_is_abs_sine_plus_unit_noise() {
    let n = 200;
    let osc = 4.8;
    let values = synthesize(n, osc, 7);
    assert_eq!(values.len(), n);
    let k = 2.0 * std::f64::consts::PI * osc / (n - 1) as f64;
    for (i, v) in values.iter().enumerate() {
        let noise = v - (k * i as f64).sin().abs();
        assert!((0.0..1.0).contains(&noise), "noise {noise} at {i}");
    }
}

#[test]
fn same_seed_same_series() {
    assert_eq!(synthesize(50, 2.0, 42), synthesize(50, 2.0, 42));
    assert_ne!(synthesize(50, 2.0, 42), synthesize(50, 2.0, 43));
}

#[test]
fn single_point_series_is_finite() {
    let v = synthesize(1, 4.8, 1);
    assert_eq!(v.len(), 1);
    assert!(v[0].is_finite() && (0.0..1.0).contains(&v[0]));
}

#[test]
fn ticks_feed_every_point_then_settle_once() {
    let mut g = grapher();
    let mut driver = DemoDriver::from_values(vec![1.0, 2.0, 3.0, 4.0], Duration::from_millis(10));

    for i in 0..4 {
        match driver.tick(&mut g) {
            TickOutcome::Fed { index, progress } => {
                assert_eq!(index, i);
                assert_eq!(progress, (i + 1) as f64 / 4.0);
            }
            other => panic!("expected a fed point, got {other:?}"),
        }
    }
    assert_eq!(g.data(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
    assert_eq!(g.progress(), 1.0);
    assert!(!driver.is_finished());

    let frames = g.surface().frames();
    assert_eq!(driver.tick(&mut g), TickOutcome::Settled);
    assert!(driver.is_finished());
    assert_eq!(g.surface().frames(), frames + 1);
    let settled = g.surface().commands().to_vec();
    assert!(!settled.iter().any(|c| matches!(c, grapher_core::DrawCommand::Text { .. })));

    for _ in 0..3 {
        assert_eq!(driver.tick(&mut g), TickOutcome::Idle);
    }
    assert_eq!(g.surface().frames(), frames + 1);
    assert_eq!(g.surface().commands(), settled.as_slice());
}

#[test]
fn configured_driver_uses_config_length_and_interval() {
    let config = DemoConfig { num_points: 25, seed: Some(3), ..DemoConfig::default() };
    let driver = DemoDriver::new(&config);
    assert_eq!(driver.values().len(), 25);
    assert_eq!(driver.interval(), Duration::from_millis(100));
    assert_eq!(driver.cursor(), 0);
}

#[test]
fn empty_series_settles_on_first_tick() {
    let mut g = grapher();
    let mut driver = DemoDriver::from_values(Vec::new(), Duration::ZERO);
    assert_eq!(driver.tick(&mut g), TickOutcome::Settled);
    assert_eq!(driver.tick(&mut g), TickOutcome::Idle);
}
