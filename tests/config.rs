use std::path::PathBuf;

use demofig::{AxesConfig, Defaults, FigureOptions};

#[test]
fn defaults_match_the_classic_demo_setup() {
    let d = Defaults::default();
    assert_eq!(d.line_width, 2.5);
    assert_eq!(d.font_size, 18.0);
    assert_eq!(d.marker_size, 16.0);
    assert_eq!(d.figure_size, (1200.0, 600.0));
    assert_eq!(d.save_dir, PathBuf::from("./figures"));
}

#[test]
fn defaults_round_trip_through_json() {
    let dir = std::env::temp_dir().join("demofig_config_tests");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("defaults.json");

    let mut d = Defaults::default();
    d.font_size = 24.0;
    d.save_dir = PathBuf::from("/tmp/figs");
    d.save(&path).unwrap();

    let loaded = Defaults::load(&path).unwrap();
    assert_eq!(loaded, d);
}

#[test]
fn loading_missing_defaults_is_an_io_error() {
    let err = Defaults::load(std::path::Path::new("/nonexistent/defaults.json")).unwrap_err();
    assert!(matches!(err, demofig::Error::Io(_)));
}

#[test]
fn axes_config_builder_sets_all_fields() {
    let cfg = AxesConfig::new()
        .with_title("T")
        .with_labels("X", "Y")
        .with_xlim(-1.0, 1.0)
        .with_ylim(0.0, 10.0);
    assert_eq!(cfg.title.as_deref(), Some("T"));
    assert_eq!(cfg.xlabel.as_deref(), Some("X"));
    assert_eq!(cfg.ylabel.as_deref(), Some("Y"));
    assert_eq!(cfg.xlim, Some((-1.0, 1.0)));
    assert_eq!(cfg.ylim, Some((0.0, 10.0)));
    assert!(cfg.validate().is_ok());
}

#[test]
fn figure_options_carry_opaque_extras() {
    let mut opts = FigureOptions::new().with_size(640.0, 480.0);
    opts.extra.insert("facecolor".to_string(), "#eeeeee".to_string());
    let json = serde_json::to_string(&opts).unwrap();
    let back: FigureOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, opts);
    assert_eq!(back.extra.get("facecolor").map(String::as_str), Some("#eeeeee"));
}
