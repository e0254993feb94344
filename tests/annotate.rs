use demofig::{Annotation, Axes, AxesConfig, DrawItem, Figure};

fn last_label(ax: &Axes) -> (f64, f64, String) {
    ax.items()
        .iter()
        .rev()
        .find_map(|item| match item {
            DrawItem::Label { x, y, text, .. } => Some((*x, *y, text.clone())),
            _ => None,
        })
        .expect("no label drawn")
}

fn markers(ax: &Axes) -> Vec<(f64, f64)> {
    ax.items()
        .iter()
        .filter_map(|item| match item {
            DrawItem::Marker { x, y, .. } => Some((*x, *y)),
            _ => None,
        })
        .collect()
}

#[test]
fn zero_offset_places_label_at_the_point() {
    let mut fig = Figure::default();
    let ax = fig.current_axes_mut();
    ax.apply_config(AxesConfig::new().with_xlim(0.0, 100.0).with_ylim(0.0, 10.0))
        .unwrap();
    ax.annotate(
        3.25,
        7.5,
        "here",
        &Annotation {
            offset: (0.0, 0.0),
            ..Annotation::default()
        },
    )
    .unwrap();
    let (x, y, text) = last_label(ax);
    assert_eq!((x, y), (3.25, 7.5));
    assert_eq!(text, "here");
}

#[test]
fn ten_percent_x_offset_uses_the_x_range() {
    let mut fig = Figure::default();
    let ax = fig.current_axes_mut();
    ax.apply_config(AxesConfig::new().with_xlim(0.0, 100.0).with_ylim(0.0, 10.0))
        .unwrap();
    ax.annotate(
        20.0,
        5.0,
        "p",
        &Annotation {
            offset: (10.0, 0.0),
            ..Annotation::default()
        },
    )
    .unwrap();
    let (x, y, _) = last_label(ax);
    assert!((x - 30.0).abs() < 1e-12, "got x = {x}");
    assert!((y - 5.0).abs() < 1e-12, "got y = {y}");
}

#[test]
fn default_offset_is_five_percent_of_each_range() {
    let mut fig = Figure::default();
    let ax = fig.current_axes_mut();
    ax.apply_config(AxesConfig::new().with_xlim(0.0, 100.0).with_ylim(0.0, 10.0))
        .unwrap();
    ax.annotate(20.0, 5.0, "p", &Annotation::default()).unwrap();
    let (x, y, _) = last_label(ax);
    assert!((x - 25.0).abs() < 1e-12, "got x = {x}");
    assert!((y - 5.5).abs() < 1e-12, "got y = {y}");
}

#[test]
fn annotate_draws_the_marker_at_the_point() {
    let mut fig = Figure::default();
    let ax = fig.current_axes_mut();
    ax.apply_config(AxesConfig::new().with_xlim(0.0, 1.0).with_ylim(0.0, 1.0))
        .unwrap();
    ax.annotate(0.25, 0.75, "p", &Annotation::default()).unwrap();
    assert_eq!(markers(ax), vec![(0.25, 0.75)]);
}

#[test]
fn limits_are_read_before_the_marker_is_drawn() {
    // One existing marker at the origin: auto-scaled x limits are
    // (-0.5, 0.5), a span of 1. Annotating far outside must compute its
    // offset from that span, not from limits that include the new marker.
    let mut fig = Figure::default();
    let ax = fig.current_axes_mut();
    ax.mark_point(0.0, 0.0, "k.", None).unwrap();
    ax.annotate(
        100.0,
        0.0,
        "far",
        &Annotation {
            offset: (10.0, 0.0),
            ..Annotation::default()
        },
    )
    .unwrap();
    let (x, _, _) = last_label(ax);
    assert!((x - 100.1).abs() < 1e-9, "got x = {x}");
}

#[test]
fn empty_axes_fall_back_to_unit_ranges() {
    let mut fig = Figure::default();
    let ax = fig.current_axes_mut();
    ax.annotate(
        0.5,
        0.5,
        "p",
        &Annotation {
            offset: (10.0, 20.0),
            ..Annotation::default()
        },
    )
    .unwrap();
    let (x, y, _) = last_label(ax);
    assert!((x - 0.6).abs() < 1e-12, "got x = {x}");
    assert!((y - 0.7).abs() < 1e-12, "got y = {y}");
}

#[test]
fn annotation_label_keeps_the_default_text_color() {
    // The spec colors the marker only; the label text stays default-colored.
    let mut fig = Figure::default();
    let ax = fig.current_axes_mut();
    ax.annotate(
        0.5,
        0.5,
        "p",
        &Annotation {
            spec: "ro".to_string(),
            ..Annotation::default()
        },
    )
    .unwrap();
    let style = ax
        .items()
        .iter()
        .find_map(|item| match item {
            DrawItem::Label { style, .. } => Some(style.clone()),
            _ => None,
        })
        .expect("no label drawn");
    assert_eq!(style.color, None);
}

#[test]
fn annotate_rejects_bad_spec_without_drawing() {
    let mut fig = Figure::default();
    let ax = fig.current_axes_mut();
    let err = ax
        .annotate(
            0.0,
            0.0,
            "p",
            &Annotation {
                spec: "zz".to_string(),
                ..Annotation::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, demofig::Error::InvalidArgument(_)));
    assert!(ax.items().is_empty());
}
