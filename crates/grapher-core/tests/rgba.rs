// File: crates/grapher-core/tests/rgba.rs
// Purpose: Validate RGBA readback shape and a few pixels of the progress overlay.

use grapher_core::{GrapherOptions, SpeedGrapher, StyleKey};

#[test]
fn render_rgba8_buffer() {
    let opts = GrapherOptions::default().with_size(200, 50);
    let mut grapher = SpeedGrapher::raster(opts).expect("raster surface");
    // Hide gridlines so sampled pixels only see background and overlay.
    grapher.set_style_attribute(StyleKey::GridPenAlpha, 0.0).unwrap();
    grapher.set_data(&[0.0]);
    grapher.set_progress(0.5).unwrap();
    grapher.update_plot(false);

    let px = grapher.surface_mut().rgba8().expect("rgba readback");
    assert_eq!(px.len(), 200 * 50 * 4);

    // Right half: opaque white background.
    assert_eq!(pixel(&px, 200, 180, 25), [255, 255, 255, 255]);
    // Left half: green overlay at 0.33 alpha over white keeps red/blue below 255.
    let left = pixel(&px, 200, 20, 25);
    assert_eq!(left[3], 255);
    assert_eq!(left[1], 255);
    assert!(left[0] < 255 && left[2] < 255, "overlay tint expected, got {left:?}");
}

fn pixel(px: &[u8], width: usize, x: usize, y: usize) -> [u8; 4] {
    let i = (y * width + x) * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}
