// File: crates/grapher-core/tests/smoke.rs
// Purpose: Basic end-to-end raster render writing a PNG, with and without indicators.

use grapher_core::{GrapherOptions, SpeedGrapher};

#[test]
fn render_smoke_png() {
    let mut grapher = SpeedGrapher::raster(GrapherOptions::default()).expect("raster surface");
    for (i, y) in [0.2, 0.8, 0.5, 1.3, 0.9].into_iter().enumerate() {
        grapher.add_data_point(y, (i + 1) as f64 / 5.0, None).expect("valid progress");
    }

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    grapher.surface_mut().write_png(&out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    grapher.update_plot(false);
    let bytes = grapher.surface_mut().png_bytes().expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn zero_sized_canvas_is_a_surface_error() {
    let err = SpeedGrapher::raster(GrapherOptions::default().with_size(0, 0));
    assert!(err.is_err());
}
