use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: ColorDef = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, ColorDef::rgba(1.0, 0.0, 0.0, 1.0));

    let c: ColorDef = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert!((c.b - 1.0).abs() < 1e-9);
    assert!((c.a - (128.0 / 255.0)).abs() < 1e-9);
}

#[test]
fn parses_single_letter_codes() {
    let r: ColorDef = "r".parse().unwrap();
    assert_eq!(r.to_rgba8(), Rgba8::rgb(255, 0, 0));
    let b: ColorDef = "b".parse().unwrap();
    assert_eq!(b.to_rgba8(), Rgba8::rgb(0, 0, 255));
    let k: ColorDef = "k".parse().unwrap();
    assert_eq!(k.to_rgba8(), Rgba8::BLACK);
}

#[test]
fn parses_cycle_names_and_gray_levels() {
    let c1: ColorDef = "C1".parse().unwrap();
    assert_eq!(c1.to_rgba8(), DEFAULT_CYCLE[1]);

    let orange: ColorDef = "Orange".parse().unwrap();
    assert_eq!(orange.to_rgba8(), Rgba8::rgb(255, 165, 0));

    let gray: ColorDef = "0.75".parse().unwrap();
    assert_eq!(gray.to_rgba8(), Rgba8::rgb(191, 191, 191));
}

#[test]
fn rejects_unknown_and_out_of_range() {
    assert!("C10".parse::<ColorDef>().is_err());
    assert!("1.5".parse::<ColorDef>().is_err());
    assert!("not-a-color".parse::<ColorDef>().is_err());
    assert!("#12345".parse::<ColorDef>().is_err());
}

#[test]
fn parses_rgba_object_array_and_hsla() {
    let c: ColorDef = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c, ColorDef::rgba(0.25, 0.5, 0.75, 1.0));

    let c: ColorDef = serde_json::from_value(json!([0.25, 0.5, 0.75, 0.9])).unwrap();
    assert_eq!(c, ColorDef::rgba(0.25, 0.5, 0.75, 0.9));

    let c: ColorDef = serde_json::from_value(json!({"h": 0.0, "s": 1.0, "l": 0.5})).unwrap();
    assert!((c.r - 1.0).abs() < 1e-9);
    assert!(c.g.abs() < 1e-9);
    assert!(c.b.abs() < 1e-9);

    assert!(serde_json::from_value::<ColorDef>(json!([0.1, 0.2])).is_err());
}
