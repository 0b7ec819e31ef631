// File: crates/grapher-core/tests/engine.rs
// Purpose: Engine state transitions and frame composition against the recording surface.

use grapher_core::{
    DrawCommand, GrapherError, GrapherOptions, Point, RecordingSurface, SpeedGrapher, StyleKey,
};

fn grapher() -> SpeedGrapher<RecordingSurface> {
    SpeedGrapher::new(RecordingSurface::new(), GrapherOptions::default().with_size(300, 100))
}

fn text_of(commands: &[DrawCommand]) -> Option<(&str, Point)> {
    commands.iter().find_map(|c| match c {
        DrawCommand::Text { text, top_left, .. } => Some((text.as_str(), *top_left)),
        _ => None,
    })
}

#[test]
fn construction_seeds_placeholder_and_draws_once() {
    let g = grapher();
    assert_eq!(g.data(), &[0.0]);
    assert_eq!(g.progress(), 0.0);
    assert_eq!(g.surface().frames(), 1);
    assert!(text_of(g.surface().commands()).is_none());
}

#[test]
fn rejected_progress_changes_nothing() {
    let mut g = grapher();
    g.add_data_point(1.0, 0.5, Some("half")).unwrap();
    let frames = g.surface().frames();

    for bad in [-0.01, 1.01, f64::NAN, f64::INFINITY] {
        let err = g.add_data_point(9.0, bad, Some("nope")).unwrap_err();
        assert!(matches!(err, GrapherError::Range(_)));
    }
    assert_eq!(g.data(), &[0.0, 1.0]);
    assert_eq!(g.progress(), 0.5);
    assert_eq!(g.indicator_text(), "half");
    assert_eq!(g.surface().frames(), frames, "no redraw on rejection");
}

#[test]
fn valid_point_appends_sets_progress_and_redraws_with_indicators() {
    let mut g = grapher();
    for (i, p) in [0.0, 0.25, 1.0].into_iter().enumerate() {
        g.add_data_point(i as f64, p, None).unwrap();
        assert_eq!(g.data().len(), i + 2);
        assert_eq!(g.progress(), p);
    }
    assert_eq!(g.surface().frames(), 4);
    let commands = g.surface().commands();
    assert!(commands.iter().any(|c| matches!(c, DrawCommand::Ellipse { .. })));
    assert!(text_of(commands).is_some());
}

#[test]
fn caption_defaults_to_last_value() {
    let mut g = grapher();
    g.add_data_point(2.5, 0.5, None).unwrap();
    assert_eq!(text_of(g.surface().commands()).map(|t| t.0), Some("2.5"));

    g.add_data_point(3.0, 0.6, Some("3 MB/s")).unwrap();
    assert_eq!(text_of(g.surface().commands()).map(|t| t.0), Some("3 MB/s"));
}

#[test]
fn caption_is_right_aligned_and_clamped_to_top() {
    let mut g = grapher();
    g.set_style_attribute(StyleKey::IndicatorTextFontSize, 20.0).unwrap();
    g.add_data_point(10.0, 1.0, Some("abcd")).unwrap();
    let (_, pos) = text_of(g.surface().commands()).unwrap();
    // RecordingSurface: width = 4 chars * 20pt * 0.6 = 48, height = 24
    assert!((pos.x - (300.0 - 10.0 - 48.0)).abs() < 1e-9);
    // Last point is the max, 17px down; the caption would start above 0.
    assert_eq!(pos.y, 0.0);

    g.set_data(&[10.0, 0.0]);
    g.update_plot(true);
    let (_, pos) = text_of(g.surface().commands()).unwrap();
    // Last y = 100; caption bottom sits 3px above it.
    assert!((pos.y - (100.0 - 3.0 - 24.0)).abs() < 1e-9);
}

#[test]
fn indicator_line_crosses_full_width_below_last_point() {
    let mut g = grapher();
    g.add_data_point(1.0, 1.0, None).unwrap();
    let last_y = g.series_path().last.y;
    let line = g.surface().commands().iter().rev().find_map(|c| match c {
        DrawCommand::Line { from, to, .. } if from.y == to.y && from.y == last_y + 0.5 => Some((*from, *to)),
        _ => None,
    });
    assert_eq!(line, Some((Point::new(0.0, last_y + 0.5), Point::new(300.0, last_y + 0.5))));
}

#[test]
fn dot_is_centered_on_last_point() {
    let mut g = grapher();
    g.add_data_point(4.0, 0.5, None).unwrap();
    let last = g.series_path().last;
    let rect = g.surface().commands().iter().find_map(|c| match c {
        DrawCommand::Ellipse { rect, .. } => Some(*rect),
        _ => None,
    }).unwrap();
    assert_eq!(rect.width, 8.0);
    assert!((rect.left + 4.0 - last.x).abs() < 1e-9);
    assert!((rect.top + 4.0 - last.y).abs() < 1e-9);
}

#[test]
fn progress_overlay_spans_fraction_of_width() {
    let mut g = grapher();
    g.add_data_point(1.0, 0.4, None).unwrap();
    let rect = g.surface().commands().iter().find_map(|c| match c {
        DrawCommand::Rect { rect, .. } => Some(*rect),
        _ => None,
    }).unwrap();
    assert!((rect.width - 120.0).abs() < 1e-9);
    assert_eq!(rect.height, 100.0);
}

#[test]
fn set_progress_does_not_redraw() {
    let mut g = grapher();
    let frames = g.surface().frames();
    g.set_progress(0.7).unwrap();
    assert_eq!(g.progress(), 0.7);
    assert!(g.set_progress(1.5).is_err());
    assert_eq!(g.progress(), 0.7);
    assert_eq!(g.surface().frames(), frames);
}

#[test]
fn set_data_round_trips_without_redraw() {
    let mut g = grapher();
    let frames = g.surface().frames();
    g.set_data(&[3.0, 1.0, 2.0]);
    assert_eq!(g.data(), &[3.0, 1.0, 2.0]);
    assert_eq!(g.surface().frames(), frames);

    g.set_data(&[]);
    assert_eq!(g.data(), &[0.0], "series never becomes empty");
}

#[test]
fn settle_frame_is_idempotent_and_has_no_indicators() {
    let mut g = grapher();
    g.add_data_point(1.0, 0.5, None).unwrap();
    g.add_data_point(2.0, 1.0, None).unwrap();

    g.update_plot(false);
    let first = g.surface().commands().to_vec();
    g.update_plot(false);
    let second = g.surface().commands().to_vec();

    assert_eq!(first, second);
    assert!(!g.compose(false).has_indicators());
    assert!(text_of(&first).is_none());
}

#[test]
fn redraws_replace_rather_than_accumulate() {
    let mut g = grapher();
    g.add_data_point(1.0, 0.5, None).unwrap();
    let len = g.surface().commands().len();
    for _ in 0..10 {
        g.update_plot(true);
    }
    assert_eq!(g.surface().commands().len(), len);
    assert_eq!(g.compose(true).len(), len);
}

#[test]
fn frame_layers_in_paint_order() {
    let g = grapher();
    let scene = g.compose(true);
    let kinds: Vec<&str> = scene
        .commands()
        .iter()
        .map(|c| match c {
            DrawCommand::Clear { .. } => "clear",
            DrawCommand::Line { .. } => "line",
            DrawCommand::Path { .. } => "path",
            DrawCommand::Rect { .. } => "rect",
            DrawCommand::Ellipse { .. } => "ellipse",
            DrawCommand::Text { .. } => "text",
        })
        .filter(|k| *k != "line")
        .collect();
    assert_eq!(kinds, ["clear", "path", "path", "rect", "ellipse", "text"]);
}
