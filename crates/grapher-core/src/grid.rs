// File: crates/grapher-core/src/grid.rs
// Summary: Gridline placement helpers.

/// Pixel offsets of gridlines spread across `extent` pixels.
///
/// The spacing is the integer part of `extent / count` (at least one pixel);
/// lines start at 0 and are shifted by half a pixel so one-pixel pens land on a
/// single pixel column/row.
pub fn gridline_offsets(extent: u32, count: u32) -> Vec<f64> {
    let step = (extent / count.max(1)).max(1) as usize;
    (0..extent).step_by(step).map(|p| p as f64 + 0.5).collect()
}
