use super::*;
use crate::config::model::PatternKind;

fn small() -> Configuration {
    Configuration {
        width: 40,
        height: 30,
        ..Configuration::default()
    }
}

#[test]
fn new_renders_immediately() {
    let s = Session::new(small()).unwrap();
    assert_eq!(s.surface().width, 40);
    assert_eq!(s.surface().height, 30);
    assert_eq!(s.surface().data.len(), 40 * 30 * 4);
}

#[test]
fn apply_control_rerenders_at_new_size() {
    let mut s = Session::new(small()).unwrap();
    let changed = s.apply_control("width", "64").unwrap();
    assert!(changed);
    assert_eq!(s.config().width, 64);
    assert_eq!(s.surface().width, 64);
}

#[test]
fn apply_control_reports_no_change_for_same_value() {
    let mut s = Session::new(small()).unwrap();
    assert!(!s.apply_control("pattern", "none").unwrap());
}

#[test]
fn apply_control_rejects_unknown_key() {
    let mut s = Session::new(small()).unwrap();
    assert!(s.apply_control("sparkles", "1").is_err());
}

#[test]
fn update_switches_pattern() {
    let mut s = Session::new(small()).unwrap();
    let plain = s.surface().clone();
    s.update(|c| {
        c.pattern = PatternKind::Dots;
        c.dots.opacity = 1.0;
    })
    .unwrap();
    assert_ne!(&plain, s.surface());
}

#[test]
fn export_uses_conventional_filename() {
    let s = Session::new(small()).unwrap();
    let png = s.export(ExportFormat::Png).unwrap();
    assert_eq!(png.filename, "bg-40x30.png");
    assert!(png.bytes.starts_with(&[0x89, b'P', b'N', b'G']));

    let jpg = s.export(ExportFormat::Jpeg).unwrap();
    assert_eq!(jpg.filename, "bg-40x30.jpg");
    assert!(jpg.bytes.starts_with(&[0xFF, 0xD8]));
}

#[test]
fn failed_render_keeps_previous_state() {
    let mut s = Session::new(small()).unwrap();
    let before = s.surface().clone();

    let err = s.apply_control("width", "70000").unwrap_err();
    assert!(matches!(err, crate::foundation::error::BgError::Render(_)));
    assert_eq!(s.config().width, 40);
    assert_eq!(s.surface(), &before);

    assert!(s.update(|c| c.height = 70_000).is_err());
    assert_eq!(s.config().height, 30);

    assert!(s.apply_control("pattern", "dots").unwrap());
    assert_eq!(s.config().pattern, PatternKind::Dots);
    assert_eq!((s.surface().width, s.surface().height), (40, 30));
}
