use super::*;
use crate::style::colormap::ColormapName;

fn records() -> Vec<Vec<f64>> {
    vec![
        vec![0.0, 10.0, 1.0],
        vec![1.0, 20.0, 2.0],
        vec![0.5, 15.0, 3.0],
    ]
}

fn plotted() -> ParCoord {
    let mut chart = ParCoord::new(records()).unwrap();
    chart.plot(&PlotOpts::default()).unwrap();
    chart
}

#[test]
fn new_rejects_bad_records() {
    assert!(ParCoord::new(vec![]).is_err());
    assert!(ParCoord::new(vec![vec![1.0, 2.0], vec![1.0]]).is_err());
    let err = ParCoord::new(vec![vec![1.0, f64::NAN]]).unwrap_err();
    assert!(err.to_string().contains("NaN"));
}

#[test]
fn plot_computes_limits_and_normalized_records() {
    let chart = plotted();
    let limits = chart.axis_limits().unwrap();
    assert_eq!(limits[1], AxisLimits { min: 10.0, max: 20.0 });
    assert_eq!(chart.normalized().unwrap()[2][1], 0.5);

    let ticks = chart.axis_ticks().unwrap();
    assert_eq!(ticks.len(), 3);
    assert_eq!(ticks[1].labels.first().map(String::as_str), Some("10.00"));
    assert_eq!(ticks[1].labels.last().map(String::as_str), Some("20.00"));
}

#[test]
fn plot_validates_options() {
    let mut chart = ParCoord::new(records()).unwrap();
    let few_ticks = PlotOpts {
        num_ticks: 1,
        ..PlotOpts::default()
    };
    assert!(chart.plot(&few_ticks).is_err());
    let thin = PlotOpts {
        line_width: 0.0,
        ..PlotOpts::default()
    };
    assert!(chart.plot(&thin).is_err());
    assert!(!chart.is_plotted());
}

#[test]
fn rendering_requires_plot() {
    let chart = ParCoord::new(records()).unwrap();
    assert!(matches!(chart.render_svg(), Err(ParcoordError::State(_))));
    assert!(chart.axis_ticks().is_err());
    assert!(chart.line_widths().is_err());
}

#[test]
fn scores_order_draws_without_reordering_records() {
    let mut chart = plotted();
    chart.set_scores(&[3.0, 1.0, 2.0], ScoreOpts::default()).unwrap();
    assert_eq!(chart.draw_order(), vec![1, 2, 0]);
    assert_eq!(chart.records(), records().as_slice());

    let low_on_top = ScoreOpts {
        high_scores_on_top: false,
        ..ScoreOpts::default()
    };
    chart.set_scores(&[3.0, 1.0, 2.0], low_on_top).unwrap();
    assert_eq!(chart.draw_order(), vec![0, 2, 1]);
}

#[test]
fn equal_scores_keep_record_order() {
    let mut chart = plotted();
    chart.set_scores(&[1.0, 1.0, 0.0], ScoreOpts::default()).unwrap();
    assert_eq!(chart.draw_order(), vec![2, 0, 1]);
}

#[test]
fn score_colors_are_in_record_order() {
    let mut chart = plotted();
    let opts = ScoreOpts {
        colormap: Colormap::new(ColormapName::Viridis, false),
        ..ScoreOpts::default()
    };
    chart.set_scores(&[3.0, 1.0, 2.0], opts.clone()).unwrap();
    let colors = chart.record_colors();
    assert_eq!(colors[0], opts.colormap.sample(1.0));
    assert_eq!(colors[1], opts.colormap.sample(0.0));
    assert_eq!(colors[2], opts.colormap.sample(0.5));
}

#[test]
fn explicit_norm_bounds_are_validated() {
    let mut chart = plotted();
    let log_from_zero = ScoreOpts {
        norm: NormKind::Log,
        norm_min: Some(0.0),
        ..ScoreOpts::default()
    };
    assert!(chart.set_scores(&[1.0, 2.0, 3.0], log_from_zero).is_err());
    assert!(chart.set_scores(&[1.0, f64::NAN, 3.0], ScoreOpts::default()).is_err());
    assert!(chart.set_scores(&[1.0, 2.0], ScoreOpts::default()).is_err());
}

#[test]
fn default_colors_cycle_through_palette() {
    let chart = plotted();
    assert_eq!(chart.record_colors(), DEFAULT_CYCLE[..3].to_vec());
}

#[test]
fn explicit_colors_replace_scores() {
    let mut chart = plotted();
    chart.set_scores(&[3.0, 1.0, 2.0], ScoreOpts::default()).unwrap();
    chart.add_color_bar(Some("score")).unwrap();

    chart
        .set_colors(ColorsArg::Single("r".parse().unwrap()))
        .unwrap();
    assert!(chart.scores().is_none());
    assert!(chart.color_bar().is_none());
    assert_eq!(chart.draw_order(), vec![0, 1, 2]);
    assert!(chart.record_colors().iter().all(|c| *c == Rgba8::rgb(255, 0, 0)));

    let short = ColorsArg::PerRecord(vec![ColorDef::rgba(0.0, 0.0, 0.0, 1.0)]);
    assert!(chart.set_colors(short).is_err());
}

#[test]
fn color_bar_needs_scores() {
    let mut chart = plotted();
    let err = chart.add_color_bar(None).unwrap_err();
    assert!(matches!(err, ParcoordError::State(_)));
    assert!(err.to_string().contains("set scores before adding a color bar"));
}

#[test]
fn variable_width_thickens_first_drawn_lines() {
    let mut chart = plotted();
    let opts = ScoreOpts {
        variable_line_width: true,
        ..ScoreOpts::default()
    };
    chart.set_scores(&[3.0, 1.0, 2.0], opts.clone()).unwrap();
    let w = chart.line_widths().unwrap();
    assert!((w[0] - 1.1).abs() < 1e-12);
    assert!((w[1] - 4.1).abs() < 1e-12);
    assert!((w[2] - 2.6).abs() < 1e-12);

    let reversed = ScoreOpts {
        high_scores_on_top: false,
        ..opts
    };
    chart.set_scores(&[3.0, 1.0, 2.0], reversed).unwrap();
    let w = chart.line_widths().unwrap();
    assert!((w[0] - 4.1).abs() < 1e-12);
    assert!((w[1] - 1.1).abs() < 1e-12);
}

#[test]
fn variable_width_is_flat_for_equal_scores() {
    let mut chart = plotted();
    let opts = ScoreOpts {
        variable_line_width: true,
        ..ScoreOpts::default()
    };
    chart.set_scores(&[2.0, 2.0, 2.0], opts).unwrap();
    assert_eq!(chart.line_widths().unwrap(), vec![1.1; 3]);
}

#[test]
fn visibility_and_labels_check_lengths() {
    let mut chart = plotted();
    assert!(chart.set_visible(&[true, false]).is_err());
    chart.set_visible(&[true, false, true]).unwrap();
    assert_eq!(chart.visible(), &[true, false, true]);

    assert!(chart.set_labels(&["a", "b"]).is_err());
    chart.set_labels(&["a", "b", "c"]).unwrap();
    assert_eq!(chart.labels().unwrap()[2], "c");
}

#[test]
fn reset_data_clears_state_but_keeps_labels() {
    let mut chart = plotted();
    chart.set_labels(&["a", "b", "c"]).unwrap();
    chart.set_scores(&[3.0, 1.0, 2.0], ScoreOpts::default()).unwrap();
    chart.add_color_bar(None).unwrap();
    chart.set_visible(&[false, false, false]).unwrap();

    chart.reset_data(vec![vec![5.0, 6.0, 7.0]]).unwrap();
    assert!(!chart.is_plotted());
    assert!(chart.scores().is_none());
    assert!(chart.color_bar().is_none());
    assert_eq!(chart.visible(), &[true]);
    assert!(chart.labels().is_some());

    assert!(chart.reset_data(vec![vec![1.0, 2.0]]).is_err());
}

#[test]
fn plan_hides_invisible_records() {
    let mut chart = plotted();
    chart
        .set_colors(ColorsArg::PerRecord(vec![
            ColorDef::rgba(1.0, 0.0, 0.0, 1.0),
            ColorDef::rgba(0.0, 1.0, 0.0, 1.0),
            ColorDef::rgba(0.0, 0.0, 1.0, 1.0),
        ]))
        .unwrap();
    chart.set_visible(&[true, false, true]).unwrap();
    let plan = chart.to_plan().unwrap();
    let green = Rgba8::rgb(0, 255, 0);
    assert!(!plan.ops.iter().any(|op| matches!(
        op,
        crate::render::plan::DrawOp::Stroke { color, .. } if *color == green
    )));
}

#[test]
fn hidden_record_stays_hidden_under_score_ordering() {
    let mut chart = plotted();
    chart.set_scores(&[0.9, 0.1, 0.5], ScoreOpts::default()).unwrap();
    assert_eq!(chart.draw_order(), vec![1, 2, 0]);
    chart.set_visible(&[false, true, true]).unwrap();

    let colors = chart.record_colors();
    let plan = chart.to_plan().unwrap();
    let strokes: Vec<Rgba8> = plan
        .ops
        .iter()
        .filter_map(|op| match op {
            crate::render::plan::DrawOp::Stroke { color, .. } => Some(*color),
            _ => None,
        })
        .collect();
    assert!(!strokes.contains(&colors[0]));
    assert!(strokes.contains(&colors[1]));
    assert!(strokes.contains(&colors[2]));
}

#[test]
fn spans_wider_than_f64_are_errors() {
    let mut chart = plotted();
    let err = chart
        .set_scores(&[-1e308, 0.0, 1e308], ScoreOpts::default())
        .unwrap_err();
    assert!(matches!(err, ParcoordError::Validation(_)));
    assert!(chart.scores().is_none());

    let mut wide = ParCoord::new(vec![vec![-1e308, 0.0], vec![1e308, 1.0]]).unwrap();
    assert!(wide.plot(&PlotOpts::default()).is_err());
    assert!(!wide.is_plotted());
}

#[test]
fn svg_output_contains_labels() {
    let mut chart = plotted();
    chart.set_labels(&["alpha", "beta", "gamma"]).unwrap();
    let svg = chart.render_svg().unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(">beta</text>"));
}

#[test]
fn canvas_is_validated() {
    let mut chart = plotted();
    assert!(chart.set_canvas(Canvas { width: 0, height: 10 }).is_err());
    chart.set_canvas(Canvas::new(400, 300).unwrap()).unwrap();
    assert_eq!(chart.to_plan().unwrap().canvas.width, 400);
}

#[test]
fn save_fig_rejects_unknown_extension() {
    let chart = plotted();
    let err = chart.save_fig("chart.gif").unwrap_err();
    assert!(err.to_string().contains("chart.gif"));
}
