use crate::chart::limits::AxisLimits;
use crate::chart::ticks::{axis_ticks, color_bar_ticks};
use crate::foundation::core::{Canvas, Point, Rect, Rgba8};
use crate::foundation::math::lerp;
use crate::render::clip::clip_polyline;
use crate::render::plan::{
    DrawOp, FontWeight, RenderPlan, TextAnchor, TextOp, polyline, segment,
};
use crate::style::colormap::Colormap;
use crate::style::norm::ScoreNorm;

const MARGIN_LEFT: f64 = 0.125;
const MARGIN_RIGHT: f64 = 0.9;
const MARGIN_TOP: f64 = 0.12;
const MARGIN_BOTTOM: f64 = 0.89;

/// Share of the plot width handed to the color bar when one is shown.
const COLOR_BAR_SHARE: f64 = 0.2;
const COLOR_BAR_BANDS: usize = 64;

const REFERENCE_WIDTH: f64 = 800.0;
const REFERENCE_HEIGHT: f64 = 600.0;

const SPINE_WIDTH: f64 = 1.0;
const TICK_LEN: f64 = 10.0;
const TICK_FONT: f64 = 10.0;
const TICK_LABEL_GAP: f64 = 8.0;
const AXIS_LABEL_FONT: f64 = 12.0;
const AXIS_LABEL_PAD: f64 = 20.0;
const BAR_TICK_LEN: f64 = 4.0;
const BAR_LABEL_FONT: f64 = 11.0;
const BAR_LABEL_OFFSET: f64 = 45.0;

/// Color bar inputs borrowed from the chart.
pub(crate) struct ColorBarView<'a> {
    pub(crate) norm: &'a ScoreNorm,
    pub(crate) colormap: Colormap,
    pub(crate) label: Option<&'a str>,
}

/// Everything the figure compiler needs from a plotted chart.
///
/// Per-record vectors (`normalized`, `colors`, `widths`, `visible`) are in record order;
/// `draw_order` lists record indices in paint order.
pub(crate) struct FigureView<'a> {
    pub(crate) canvas: Canvas,
    pub(crate) limits: &'a [AxisLimits],
    pub(crate) normalized: &'a [Vec<f64>],
    pub(crate) num_ticks: usize,
    pub(crate) draw_order: Vec<usize>,
    pub(crate) colors: Vec<Rgba8>,
    pub(crate) widths: Vec<f64>,
    pub(crate) visible: &'a [bool],
    pub(crate) labels: Option<&'a [String]>,
    pub(crate) color_bar: Option<ColorBarView<'a>>,
}

/// Pixel geometry of a figure.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FigureLayout {
    pub(crate) plot: Rect,
    pub(crate) axis_x: Vec<f64>,
    pub(crate) color_bar: Option<Rect>,
    /// Multiplier for font sizes and mark lengths relative to an 800x600 canvas.
    pub(crate) scale: f64,
}

impl FigureLayout {
    pub(crate) fn new(canvas: Canvas, num_dims: usize, with_color_bar: bool) -> Self {
        let w = f64::from(canvas.width);
        let h = f64::from(canvas.height);
        let outer = Rect::new(w * MARGIN_LEFT, h * MARGIN_TOP, w * MARGIN_RIGHT, h * MARGIN_BOTTOM);

        let (plot, color_bar) = if with_color_bar {
            let share = outer.width() * COLOR_BAR_SHARE;
            let plot = Rect::new(outer.x0, outer.y0, outer.x1 - share, outer.y1);
            let bar_x0 = plot.x1 + share * 0.5;
            let bar_w = (outer.width() * 0.035).max(6.0);
            (plot, Some(Rect::new(bar_x0, outer.y0, bar_x0 + bar_w, outer.y1)))
        } else {
            (outer, None)
        };

        let gaps = num_dims.saturating_sub(1).max(1) as f64;
        let axis_x = (0..num_dims)
            .map(|d| lerp(plot.x0, plot.x1, d as f64 / gaps))
            .collect();

        Self {
            plot,
            axis_x,
            color_bar,
            scale: (w / REFERENCE_WIDTH)
                .min(h / REFERENCE_HEIGHT)
                .clamp(0.5, 4.0),
        }
    }

    /// Pixel row of normalized ordinate `t` (0 at the bottom of the plot).
    pub(crate) fn y_for(&self, t: f64) -> f64 {
        self.plot.y1 - t * self.plot.height()
    }
}

/// Compile a plotted chart into draw ops, back to front.
pub(crate) fn compile_figure(view: &FigureView<'_>) -> RenderPlan {
    let layout = FigureLayout::new(view.canvas, view.limits.len(), view.color_bar.is_some());
    let mut plan = RenderPlan::new(view.canvas, Rgba8::WHITE);

    push_lines(&mut plan, &layout, view);
    push_axes(&mut plan, &layout, view);
    if let Some(labels) = view.labels {
        push_axis_labels(&mut plan, &layout, labels);
    }
    if let (Some(bar), Some(rect)) = (&view.color_bar, layout.color_bar) {
        push_color_bar(&mut plan, rect, layout.scale, bar);
    }

    tracing::debug!(ops = plan.ops.len(), "figure compiled");
    plan
}

fn push_lines(plan: &mut RenderPlan, layout: &FigureLayout, view: &FigureView<'_>) {
    for &idx in &view.draw_order {
        if !view.visible.get(idx).copied().unwrap_or(true) {
            continue;
        }
        let points: Vec<Point> = view.normalized[idx]
            .iter()
            .zip(&layout.axis_x)
            .map(|(&t, &x)| Point::new(x, layout.y_for(t)))
            .collect();
        for piece in clip_polyline(&points, layout.plot) {
            if piece.len() < 2 {
                continue;
            }
            plan.push(DrawOp::Stroke {
                path: polyline(&piece),
                color: view.colors[idx],
                width: view.widths[idx],
            });
        }
    }
}

fn push_axes(plan: &mut RenderPlan, layout: &FigureLayout, view: &FigureView<'_>) {
    let s = layout.scale;
    let last = layout.axis_x.len().saturating_sub(1);

    for (d, (&x, limits)) in layout.axis_x.iter().zip(view.limits).enumerate() {
        plan.push(DrawOp::Stroke {
            path: segment(Point::new(x, layout.plot.y0), Point::new(x, layout.plot.y1)),
            color: Rgba8::BLACK,
            width: SPINE_WIDTH * s,
        });

        // The last axis carries its labels on the right-hand side.
        let (anchor, label_x) = if d == last {
            (TextAnchor::Start, x + TICK_LABEL_GAP * s)
        } else {
            (TextAnchor::End, x - TICK_LABEL_GAP * s)
        };

        let ticks = axis_ticks(limits, view.num_ticks);
        let half = TICK_LEN * s * 0.5;
        for (&t, label) in ticks.positions.iter().zip(ticks.labels) {
            let y = layout.y_for(t);
            plan.push(DrawOp::Stroke {
                path: segment(Point::new(x - half, y), Point::new(x + half, y)),
                color: Rgba8::BLACK,
                width: SPINE_WIDTH * s,
            });
            plan.push(DrawOp::Text(TextOp {
                pos: Point::new(label_x, y),
                text: label,
                size: TICK_FONT * s,
                color: Rgba8::BLACK,
                anchor,
                weight: FontWeight::SemiBold,
                rotate_deg: 0.0,
            }));
        }
    }
}

fn push_axis_labels(plan: &mut RenderPlan, layout: &FigureLayout, labels: &[String]) {
    let s = layout.scale;
    let y = layout.plot.y1 + (AXIS_LABEL_PAD + AXIS_LABEL_FONT * 0.5) * s;
    for (&x, text) in layout.axis_x.iter().zip(labels) {
        plan.push(DrawOp::Text(TextOp {
            pos: Point::new(x, y),
            text: text.clone(),
            size: AXIS_LABEL_FONT * s,
            color: Rgba8::BLACK,
            anchor: TextAnchor::Middle,
            weight: FontWeight::Normal,
            rotate_deg: 0.0,
        }));
    }
}

fn push_color_bar(plan: &mut RenderPlan, rect: Rect, s: f64, bar: &ColorBarView<'_>) {
    let y_for = |t: f64| rect.y1 - t * rect.height();

    for i in 0..COLOR_BAR_BANDS {
        let t0 = i as f64 / COLOR_BAR_BANDS as f64;
        let t1 = (i + 1) as f64 / COLOR_BAR_BANDS as f64;
        // Overlap neighbours by half a pixel so antialiasing leaves no seams.
        let overlap = if i + 1 < COLOR_BAR_BANDS { 0.5 } else { 0.0 };
        plan.push(DrawOp::FillRect {
            rect: Rect::new(rect.x0, y_for(t1) - overlap, rect.x1, y_for(t0)),
            color: bar
                .colormap
                .sample((i as f64 + 0.5) / COLOR_BAR_BANDS as f64),
        });
    }

    plan.push(DrawOp::Stroke {
        path: polyline(&[
            Point::new(rect.x0, rect.y0),
            Point::new(rect.x1, rect.y0),
            Point::new(rect.x1, rect.y1),
            Point::new(rect.x0, rect.y1),
            Point::new(rect.x0, rect.y0),
        ]),
        color: Rgba8::BLACK,
        width: 0.8 * s,
    });

    for tick in color_bar_ticks(bar.norm) {
        if !(-1e-9..=1.0 + 1e-9).contains(&tick.t) {
            continue;
        }
        let y = y_for(tick.t);
        plan.push(DrawOp::Stroke {
            path: segment(Point::new(rect.x1, y), Point::new(rect.x1 + BAR_TICK_LEN * s, y)),
            color: Rgba8::BLACK,
            width: 0.8 * s,
        });
        plan.push(DrawOp::Text(TextOp {
            pos: Point::new(rect.x1 + (BAR_TICK_LEN + 3.0) * s, y),
            text: tick.label,
            size: TICK_FONT * s,
            color: Rgba8::BLACK,
            anchor: TextAnchor::Start,
            weight: FontWeight::Normal,
            rotate_deg: 0.0,
        }));
    }

    if let Some(label) = bar.label {
        plan.push(DrawOp::Text(TextOp {
            pos: Point::new(rect.x1 + BAR_LABEL_OFFSET * s, rect.center().y),
            text: label.to_owned(),
            size: BAR_LABEL_FONT * s,
            color: Rgba8::BLACK,
            anchor: TextAnchor::Middle,
            weight: FontWeight::Normal,
            rotate_deg: -90.0,
        }));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/layout.rs"]
mod tests;
