use super::*;
use crate::style::colormap::{Colormap, ColormapName};
use crate::style::norm::NormKind;

#[test]
fn minimal_document_uses_defaults() {
    let doc = ChartDoc::from_reader(r#"{ "records": [[1, 2], [3, 4]] }"#.as_bytes()).unwrap();
    assert_eq!(doc.canvas, Canvas::default());
    assert_eq!(doc.plot, PlotOpts::default());

    let chart = doc.build().unwrap();
    assert!(chart.is_plotted());
    assert_eq!(chart.num_dims(), 2);
}

#[test]
fn full_document_round_trips_into_chart() {
    let json = r#"{
        "canvas": { "width": 640, "height": 480 },
        "records": [[1, 2, 3], [3, 1, 2], [2, 2, 2]],
        "labels": ["x", "y", "z"],
        "scores": {
            "values": [1, 10, 100],
            "colormap": "viridis_r",
            "norm": "log",
            "high_scores_on_top": false,
            "variable_line_width": true
        },
        "visible": [true, true, false],
        "plot": { "num_ticks": 5, "line_width": 2.0, "y_min": [0, 0, 0] },
        "color_bar": { "label": "loss" }
    }"#;
    let doc = ChartDoc::from_reader(json.as_bytes()).unwrap();
    let scores = doc.scores.as_ref().unwrap();
    assert_eq!(scores.opts.colormap, Colormap::new(ColormapName::Viridis, true));
    assert_eq!(scores.opts.norm, NormKind::Log);

    let chart = doc.build().unwrap();
    assert_eq!(chart.canvas().width, 640);
    assert_eq!(chart.draw_order(), vec![2, 1, 0]);
    assert_eq!(chart.axis_limits().unwrap()[0].min, 0.0);
    assert_eq!(chart.visible(), &[true, true, false]);
    assert_eq!(
        chart.color_bar().and_then(|c| c.label.as_deref()),
        Some("loss")
    );
}

#[test]
fn colors_accept_single_or_list() {
    let single = ChartDoc::from_reader(
        r#"{ "records": [[1, 2], [3, 4]], "colors": "C1" }"#.as_bytes(),
    )
    .unwrap();
    assert!(matches!(single.colors, Some(ColorsArg::Single(_))));

    let rgb = ChartDoc::from_reader(
        r#"{ "records": [[1, 2], [3, 4]], "colors": [0.5, 0.5, 0.5] }"#.as_bytes(),
    )
    .unwrap();
    assert!(matches!(rgb.colors, Some(ColorsArg::Single(_))));

    let list = ChartDoc::from_reader(
        r##"{ "records": [[1, 2], [3, 4]], "colors": ["r", "#00ff00"] }"##.as_bytes(),
    )
    .unwrap();
    assert!(matches!(list.colors, Some(ColorsArg::PerRecord(ref v)) if v.len() == 2));
    assert!(list.build().is_ok());
}

#[test]
fn colors_and_scores_conflict() {
    let doc = ChartDoc::from_reader(
        r#"{ "records": [[1, 2], [3, 4]], "colors": "k", "scores": { "values": [1, 2] } }"#
            .as_bytes(),
    )
    .unwrap();
    assert!(doc.build().is_err());
}

#[test]
fn color_bar_without_scores_fails() {
    let doc = ChartDoc::from_reader(
        r#"{ "records": [[1, 2], [3, 4]], "color_bar": {} }"#.as_bytes(),
    )
    .unwrap();
    assert!(matches!(doc.build(), Err(ParcoordError::State(_))));
}

#[test]
fn unknown_fields_are_rejected() {
    let err = ChartDoc::from_reader(r#"{ "records": [[1, 2]], "title": "x" }"#.as_bytes())
        .unwrap_err();
    assert!(matches!(err, ParcoordError::Serde(_)));
}

#[test]
fn missing_file_names_the_path() {
    let err = ChartDoc::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.json"));
}
