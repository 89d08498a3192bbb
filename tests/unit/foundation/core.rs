use super::*;

#[test]
fn canvas_new_clamps_to_one_pixel() {
    let c = Canvas::new(0, 0);
    assert_eq!((c.width, c.height), (1, 1));
    assert_eq!(c.rgba_len(), 4);
}

#[test]
fn canvas_corners_and_diagonal() {
    let c = Canvas::new(300, 400);
    assert_eq!(c.corners()[2], Point::new(300.0, 400.0));
    assert!((c.diagonal() - 500.0).abs() < 1e-12);
}

#[test]
fn rgb8_hex_roundtrips_lowercase() {
    let c: Rgb8 = "#1A1a2E".parse().unwrap();
    assert_eq!(c, Rgb8::new(0x1a, 0x1a, 0x2e));
    assert_eq!(c.to_string(), "#1a1a2e");
}

#[test]
fn rgb8_rejects_malformed_hex() {
    for bad in ["", "#", "1a1a2e", "#1a1a2", "#1a1a2e0", "#gggggg", "#12345\u{e9}"] {
        assert!(Rgb8::parse_hex(bad).is_err(), "{bad:?} should be rejected");
    }
}

#[test]
fn rgb8_serde_uses_hex_strings() {
    let json = serde_json::to_string(&Rgb8::new(255, 0, 16)).unwrap();
    assert_eq!(json, "\"#ff0010\"");
    let back: Rgb8 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Rgb8::new(255, 0, 16));
    assert!(serde_json::from_str::<Rgb8>("\"red\"").is_err());
}
