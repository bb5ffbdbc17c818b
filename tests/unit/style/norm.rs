use super::*;

#[test]
fn linear_maps_and_clips() {
    let n = ScoreNorm::new(NormKind::Linear, 2.0, 6.0).unwrap();
    assert_eq!(n.normalize(2.0), 0.0);
    assert_eq!(n.normalize(4.0), 0.5);
    assert_eq!(n.normalize(6.0), 1.0);
    assert_eq!(n.normalize(-10.0), 0.0);
    assert_eq!(n.normalize(60.0), 1.0);
    assert_eq!(n.inverse(0.25), 3.0);
}

#[test]
fn log_maps_decades_evenly() {
    let n = ScoreNorm::new(NormKind::Log, 1.0, 100.0).unwrap();
    assert!((n.normalize(10.0) - 0.5).abs() < 1e-12);
    assert_eq!(n.normalize(0.5), 0.0);
    assert!((n.inverse(0.5) - 10.0).abs() < 1e-9);
}

#[test]
fn degenerate_interval_maps_to_zero() {
    let n = ScoreNorm::new(NormKind::Linear, 3.0, 3.0).unwrap();
    assert_eq!(n.normalize(3.0), 0.0);
    assert_eq!(n.normalize(100.0), 0.0);
}

#[test]
fn rejects_bad_bounds() {
    assert!(ScoreNorm::new(NormKind::Linear, 2.0, 1.0).is_err());
    assert!(ScoreNorm::new(NormKind::Linear, f64::NAN, 1.0).is_err());
    assert!(ScoreNorm::new(NormKind::Log, 0.0, 1.0).is_err());
    assert!(ScoreNorm::new(NormKind::Log, -1.0, 1.0).is_err());
}

#[test]
fn kind_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&NormKind::Log).unwrap(), "\"log\"");
    let k: NormKind = serde_json::from_str("\"linear\"").unwrap();
    assert_eq!(k, NormKind::Linear);
}

#[test]
fn rejects_interval_wider_than_f64() {
    let err = ScoreNorm::new(NormKind::Linear, -1e308, 1e308).unwrap_err();
    assert!(matches!(err, ParcoordError::Validation(_)));
    assert!(ScoreNorm::new(NormKind::Linear, -8e307, 8e307).is_ok());
}

#[test]
fn inverse_returns_bounds_exactly() {
    let n = ScoreNorm::new(NormKind::Linear, 0.1, 0.3).unwrap();
    assert_eq!(n.inverse(0.0), 0.1);
    assert_eq!(n.inverse(1.0), 0.3);
    assert_eq!(n.inverse(2.0), 0.3);
    let n = ScoreNorm::new(NormKind::Log, 3e-3, 7.0).unwrap();
    assert_eq!(n.inverse(0.0), 3e-3);
    assert_eq!(n.inverse(1.0), 7.0);
}
