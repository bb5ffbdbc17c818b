use super::*;

#[test]
fn axis_ticks_invert_normalization() {
    let ticks = axis_ticks(&AxisLimits::new(0.0, 6.0), 7);
    assert_eq!(ticks.positions.len(), 7);
    assert_eq!(ticks.positions[0], 0.0);
    assert_eq!(ticks.positions[6], 1.0);
    assert_eq!(
        ticks.labels,
        vec!["0.00", "1.00", "2.00", "3.00", "4.00", "5.00", "6.00"]
    );
}

#[test]
fn axis_labels_are_four_wide_two_decimals() {
    assert_eq!(format_axis_value(1.234), "1.23");
    assert_eq!(format_axis_value(25.5), "25.50");
    assert_eq!(format_axis_value(-0.001), "0.00");
    assert_eq!(format_axis_value(-0.0049), "0.00");
    assert_eq!(format_axis_value(-3.0), "-3.00");
}

#[test]
fn degenerate_axis_ticks_span_one_unit() {
    let ticks = axis_ticks(&AxisLimits::new(5.0, 5.0), 3);
    assert_eq!(ticks.labels, vec!["4.50", "5.00", "5.50"]);
}

#[test]
fn nice_step_rounds_to_1_2_5() {
    assert_eq!(nice_step(0.7), 1.0);
    assert_eq!(nice_step(1.5), 2.0);
    assert_eq!(nice_step(3.0), 5.0);
    assert_eq!(nice_step(7.0), 10.0);
    assert!((nice_step(0.03) - 0.05).abs() < 1e-12);
}

#[test]
fn linear_bar_ticks_cover_interval() {
    let norm = ScoreNorm::new(NormKind::Linear, 0.0, 1.0).unwrap();
    let ticks = color_bar_ticks(&norm);
    let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["0.0", "0.2", "0.4", "0.6", "0.8", "1.0"]);
    assert_eq!(ticks[0].t, 0.0);
    assert!((ticks[5].t - 1.0).abs() < 1e-12);
}

#[test]
fn log_bar_ticks_use_decades() {
    let norm = ScoreNorm::new(NormKind::Log, 1e-3, 10.0).unwrap();
    let ticks = color_bar_ticks(&norm);
    let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["1e-3", "1e-2", "1e-1", "1e0", "1e1"]);
    assert!(ticks.windows(2).all(|w| w[0].t < w[1].t));
}

#[test]
fn degenerate_bar_has_single_tick() {
    let norm = ScoreNorm::new(NormKind::Linear, 2.0, 2.0).unwrap();
    let ticks = color_bar_ticks(&norm);
    assert_eq!(ticks.len(), 1);
    assert_eq!(ticks[0].label, "2");
}

#[test]
fn bar_ticks_stay_bounded_for_extreme_bounds() {
    let norm = ScoreNorm::new(NormKind::Linear, -8e307, 8e307).unwrap();
    let ticks = color_bar_ticks(&norm);
    assert!(!ticks.is_empty() && ticks.len() <= 7);
    assert!(ticks.iter().all(|t| t.t.is_finite() && (0.0..=1.0).contains(&t.t)));

    let norm = ScoreNorm::new(NormKind::Linear, 1e300, 1e300 * (1.0 + 1e-15)).unwrap();
    assert!(color_bar_ticks(&norm).len() <= MAX_BAR_TICKS as usize + 1);
}
