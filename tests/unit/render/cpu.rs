use super::*;
use crate::foundation::core::{Canvas, Point, Rect};
use crate::render::plan::segment;

fn no_text() -> CpuBackend {
    CpuBackend::new(CpuBackendOpts {
        render_text: false,
        ..CpuBackendOpts::default()
    })
}

#[test]
fn background_fills_every_pixel() {
    let plan = RenderPlan::new(Canvas { width: 8, height: 4 }, Rgba8::WHITE);
    let frame = no_text().render_plan(&plan).unwrap();
    assert_eq!(frame.data.len(), 8 * 4 * 4);
    assert!(frame.premultiplied);
    assert!(frame.data.iter().all(|&c| c == 255));
}

#[test]
fn fill_rect_paints_inside_only() {
    let mut plan = RenderPlan::new(Canvas { width: 16, height: 16 }, Rgba8::WHITE);
    plan.push(DrawOp::FillRect {
        rect: Rect::new(0.0, 0.0, 8.0, 8.0),
        color: Rgba8::rgb(255, 0, 0),
    });
    let frame = no_text().render_plan(&plan).unwrap();
    assert_eq!(frame.pixel(2, 2), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(12, 12), Some([255, 255, 255, 255]));
}

#[test]
fn stroke_paints_along_the_line() {
    let mut plan = RenderPlan::new(Canvas { width: 32, height: 32 }, Rgba8::WHITE);
    plan.push(DrawOp::Stroke {
        path: segment(Point::new(0.0, 16.0), Point::new(32.0, 16.0)),
        color: Rgba8::rgb(0, 0, 255),
        width: 4.0,
    });
    let frame = no_text().render_plan(&plan).unwrap();
    let [r, g, b, _] = frame.pixel(16, 16).unwrap();
    assert!(b > 200 && r < 60 && g < 60);
    assert_eq!(frame.pixel(16, 2), Some([255, 255, 255, 255]));
}

#[test]
fn stroke_outline_is_closed_area() {
    let outline = stroke_outline(
        &segment(Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
        2.0,
        0.1,
    );
    let bbox = kurbo::Shape::bounding_box(&outline);
    assert!((bbox.height() - 2.0).abs() < 1e-6);
    assert!((bbox.width() - 10.0).abs() < 1e-6);
}
