use std::collections::HashSet;

use demofig::{AxesConfig, AxesId, Error, Figure, FigureContext};

#[test]
fn subplot_handles_are_distinct_per_index() {
    let mut fig = Figure::default();
    let mut seen: HashSet<AxesId> = HashSet::new();
    for index in 1..=6 {
        let id = fig.subplot(2, 3, index, AxesConfig::new()).unwrap();
        assert!(seen.insert(id), "duplicate handle for index {index}");
    }
    assert_eq!(fig.grid(), (2, 3));
}

#[test]
fn subplot_index_zero_is_invalid() {
    let mut fig = Figure::default();
    let err = fig.subplot(2, 2, 0, AxesConfig::new()).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn subplot_index_past_grid_is_invalid() {
    let mut fig = Figure::default();
    let err = fig.subplot(2, 2, 5, AxesConfig::new()).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn subplot_empty_grid_is_invalid() {
    let mut fig = Figure::default();
    let err = fig.subplot(0, 3, 1, AxesConfig::new()).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn failed_subplot_leaves_grid_untouched() {
    let mut fig = Figure::default();
    let bad = AxesConfig::new().with_ylim(1.0, 1.0);
    let err = fig.subplot(2, 2, 1, bad).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert_eq!(fig.grid(), (1, 1));
}

#[test]
fn subplot_same_grid_keeps_other_axes() {
    let mut fig = Figure::default();
    let left = fig
        .subplot(1, 2, 1, AxesConfig::new().with_title("left"))
        .unwrap();
    fig.subplot(1, 2, 2, AxesConfig::new().with_title("right"))
        .unwrap();
    let ax = fig.axes(left).unwrap();
    assert_eq!(ax.config.title.as_deref(), Some("left"));
}

#[test]
fn subplot_new_grid_replaces_axes() {
    let mut fig = Figure::default();
    let id = fig
        .subplot(1, 2, 1, AxesConfig::new().with_title("old"))
        .unwrap();
    fig.axes_mut(id)
        .unwrap()
        .mark_point(1.0, 2.0, "k.", None)
        .unwrap();
    fig.subplot(2, 2, 4, AxesConfig::new()).unwrap();
    assert_eq!(fig.grid(), (2, 2));
    assert!(fig.axes(AxesId(0)).unwrap().items().is_empty());
    assert!(fig.axes(AxesId(0)).unwrap().config.title.is_none());
}

#[test]
fn figure_applies_title_labels_and_limits() {
    let mut ctx = FigureContext::new();
    let cfg = AxesConfig::new()
        .with_title("T")
        .with_labels("X", "Y")
        .with_xlim(0.0, 1.0)
        .with_ylim(-1.0, 1.0);
    ctx.figure(cfg.clone()).unwrap();
    let ax = ctx.current_axes().unwrap();
    assert_eq!(ax.config, cfg);
    assert_eq!(ax.xlim(), (0.0, 1.0));
    assert_eq!(ax.ylim(), (-1.0, 1.0));
}

#[test]
fn degenerate_limits_fail_and_create_no_figure() {
    let mut ctx = FigureContext::new();
    let err = ctx
        .figure(AxesConfig::new().with_xlim(1.0, 1.0))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert_eq!(ctx.figure_count(), 0);
}

#[test]
fn misordered_limits_are_invalid() {
    let err = AxesConfig::new().with_ylim(2.0, -2.0).validate().unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn non_finite_limits_are_invalid() {
    let err = AxesConfig::new()
        .with_xlim(0.0, f64::INFINITY)
        .validate()
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn mark_point_rejects_bad_spec() {
    let mut fig = Figure::default();
    let err = fig
        .current_axes_mut()
        .mark_point(0.0, 0.0, "kq", None)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert!(fig.current_axes().items().is_empty());
}

#[test]
fn mark_point_accepts_full_format_strings() {
    // Line codes are tolerated in format strings even though point helpers
    // never draw connecting lines; the parsed code is carried on the marker.
    let mut fig = Figure::default();
    fig.current_axes_mut()
        .mark_point(1.0, 1.0, "r-", None)
        .unwrap();
    match &fig.current_axes().items()[0] {
        demofig::DrawItem::Marker { spec, .. } => {
            assert_eq!(spec.line, Some(demofig::LineCode::Solid));
        }
        other => panic!("expected a marker, got {other:?}"),
    }
}

#[test]
fn autoscale_limits_pad_the_data() {
    let mut fig = Figure::default();
    let ax = fig.current_axes_mut();
    ax.mark_point(0.0, 0.0, "k.", None).unwrap();
    ax.mark_point(10.0, 4.0, "k.", None).unwrap();
    let (x0, x1) = ax.xlim();
    assert!((x0 - (-0.5)).abs() < 1e-12);
    assert!((x1 - 10.5).abs() < 1e-12);
}

#[test]
fn empty_axes_report_unit_limits() {
    let fig = Figure::default();
    assert_eq!(fig.current_axes().xlim(), (0.0, 1.0));
    assert_eq!(fig.current_axes().ylim(), (0.0, 1.0));
}
