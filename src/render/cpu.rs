use std::sync::Arc;

use crate::foundation::core::{BezPath, Rgba8};
use crate::foundation::error::{ParcoordError, ParcoordResult};
use crate::render::backend::{FrameRGBA, RenderBackend};
use crate::render::composite::over_in_place;
use crate::render::fonts::{build_fontdb, font_resolver};
use crate::render::plan::{DrawOp, RenderPlan};
use crate::render::svg::text_overlay_svg;

/// Options for the CPU backend.
#[derive(Clone, Copy, Debug)]
pub struct CpuBackendOpts {
    /// Rasterize text ops. Disabling skips font discovery entirely.
    pub render_text: bool,
    /// Tolerance used when flattening stroke outlines.
    pub stroke_tolerance: f64,
}

impl Default for CpuBackendOpts {
    fn default() -> Self {
        Self {
            render_text: true,
            stroke_tolerance: 0.1,
        }
    }
}

/// CPU raster backend.
///
/// Geometry is painted with `vello_cpu`; text is laid out and rasterized through
/// `usvg`/`resvg` into a transparent layer composited on top.
pub struct CpuBackend {
    opts: CpuBackendOpts,
    fontdb: Option<Arc<usvg::fontdb::Database>>,
}

impl CpuBackend {
    /// Create a backend. Fonts are loaded lazily on first text render.
    pub fn new(opts: CpuBackendOpts) -> Self {
        Self { opts, fontdb: None }
    }

    fn fontdb(&mut self) -> Arc<usvg::fontdb::Database> {
        self.fontdb.get_or_insert_with(build_fontdb).clone()
    }

    fn paint_text_layer(&mut self, plan: &RenderPlan, dst: &mut [u8]) -> ParcoordResult<()> {
        let Some(svg) = text_overlay_svg(plan) else {
            return Ok(());
        };

        let opts = usvg::Options {
            fontdb: self.fontdb(),
            font_resolver: font_resolver(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(svg.as_bytes(), &opts)
            .map_err(|e| ParcoordError::render(format!("parse text layer: {e}")))?;

        let mut layer = resvg::tiny_skia::Pixmap::new(plan.canvas.width, plan.canvas.height)
            .ok_or_else(|| ParcoordError::render("failed to allocate text layer"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut layer.as_mut(),
        );
        over_in_place(dst, layer.data())
    }
}

impl Default for CpuBackend {
    fn default() -> Self {
        Self::new(CpuBackendOpts::default())
    }
}

impl RenderBackend for CpuBackend {
    #[tracing::instrument(skip_all, fields(width = plan.canvas.width, height = plan.canvas.height, ops = plan.ops.len()))]
    fn render_plan(&mut self, plan: &RenderPlan) -> ParcoordResult<FrameRGBA> {
        plan.canvas.validate()?;
        let width: u16 = plan
            .canvas
            .width
            .try_into()
            .map_err(|_| ParcoordError::render("canvas width exceeds u16"))?;
        let height: u16 = plan
            .canvas
            .height
            .try_into()
            .map_err(|_| ParcoordError::render("canvas height exceeds u16"))?;

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        let mut ctx = vello_cpu::RenderContext::new(width, height);

        set_color(&mut ctx, plan.background);
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(width),
            f64::from(height),
        ));

        for op in &plan.ops {
            match op {
                DrawOp::FillRect { rect, color } => {
                    set_color(&mut ctx, *color);
                    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                        rect.x0, rect.y0, rect.x1, rect.y1,
                    ));
                }
                DrawOp::Stroke { path, color, width } => {
                    if path.elements().is_empty() || *width <= 0.0 {
                        continue;
                    }
                    let outline = stroke_outline(path, *width, self.opts.stroke_tolerance);
                    set_color(&mut ctx, *color);
                    ctx.fill_path(&bezpath_to_cpu(&outline));
                }
                DrawOp::Text(_) => {}
            }
        }

        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        let mut data = pixmap.data_as_u8_slice().to_vec();
        if self.opts.render_text {
            self.paint_text_layer(plan, &mut data)?;
        }

        Ok(FrameRGBA {
            width: plan.canvas.width,
            height: plan.canvas.height,
            data,
            premultiplied: true,
        })
    }
}

fn set_color(ctx: &mut vello_cpu::RenderContext, c: Rgba8) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
}

/// Expand an open path into a fillable outline.
pub(crate) fn stroke_outline(path: &BezPath, width: f64, tolerance: f64) -> BezPath {
    let style = kurbo::Stroke::new(width)
        .with_join(kurbo::Join::Round)
        .with_caps(kurbo::Cap::Butt);
    kurbo::stroke(
        path.elements().iter().copied(),
        &style,
        &kurbo::StrokeOpts::default(),
        tolerance,
    )
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
