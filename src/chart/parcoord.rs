use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chart::data::{validate_records, validate_scores};
use crate::chart::layout::{ColorBarView, FigureView, compile_figure};
use crate::chart::limits::{AxisLimits, compute_limits, normalize_records};
use crate::chart::ticks::{AxisTicks, axis_ticks};
use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{ParcoordError, ParcoordResult};
use crate::render::backend::{FrameRGBA, RenderBackend};
use crate::render::cpu::CpuBackend;
use crate::render::export::{OutputFormat, write_png, write_svg};
use crate::render::plan::RenderPlan;
use crate::render::svg::render_svg;
use crate::style::color::{ColorDef, DEFAULT_CYCLE};
use crate::style::colormap::Colormap;
use crate::style::norm::{NormKind, ScoreNorm};

/// Extra width given to the first-drawn line when line width follows scores.
const VARIABLE_WIDTH_SPAN: f64 = 3.0;

/// Explicit line colors: one for all records or one per record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorsArg {
    /// One color per record, in record order.
    PerRecord(Vec<ColorDef>),
    /// The same color for every record.
    Single(ColorDef),
}

/// How scores become colors and draw order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreOpts {
    /// Color scale sampled with the normalized score.
    pub colormap: Colormap,
    /// Score normalization.
    pub norm: NormKind,
    /// Lower normalization bound; defaults to the smallest score.
    pub norm_min: Option<f64>,
    /// Upper normalization bound; defaults to the largest score.
    pub norm_max: Option<f64>,
    /// Draw high scores last (on top) when `true`, first when `false`.
    pub high_scores_on_top: bool,
    /// Thicken lines that are drawn earlier.
    pub variable_line_width: bool,
}

impl Default for ScoreOpts {
    fn default() -> Self {
        Self {
            colormap: Colormap::default(),
            norm: NormKind::Linear,
            norm_min: None,
            norm_max: None,
            high_scores_on_top: true,
            variable_line_width: false,
        }
    }
}

/// Options for [`ParCoord::plot`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotOpts {
    /// Number of ticks on every axis (at least two).
    pub num_ticks: usize,
    /// Base line width in pixels.
    pub line_width: f64,
    /// Per-dimension lower limits overriding the data minimum.
    pub y_min: Option<Vec<f64>>,
    /// Per-dimension upper limits overriding the data maximum.
    pub y_max: Option<Vec<f64>>,
}

impl Default for PlotOpts {
    fn default() -> Self {
        Self {
            num_ticks: 7,
            line_width: 1.1,
            y_min: None,
            y_max: None,
        }
    }
}

/// A requested color bar.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorBarOpts {
    /// Text drawn alongside the bar.
    pub label: Option<String>,
}

#[derive(Clone, Debug)]
enum Coloring {
    Cycle,
    Explicit(Vec<Rgba8>),
    Scores(ScoreColoring),
}

#[derive(Clone, Debug)]
struct ScoreColoring {
    scores: Vec<f64>,
    order: Vec<usize>,
    norm: ScoreNorm,
    colormap: Colormap,
    variable_line_width: bool,
}

#[derive(Clone, Debug)]
struct Plotted {
    limits: Vec<AxisLimits>,
    normalized: Vec<Vec<f64>>,
    opts: PlotOpts,
}

/// A parallel-coordinates chart.
///
/// Records stay in caller order for every accessor; score ordering only changes the order in
/// which lines are painted.
///
/// ```no_run
/// use parcoord::{ParCoord, PlotOpts, ScoreOpts};
///
/// let mut chart = ParCoord::new(vec![vec![1.0, 5.0, 2.0], vec![3.0, 4.0, 0.5]])?;
/// chart.set_scores(&[0.2, 0.9], ScoreOpts::default())?;
/// chart.plot(&PlotOpts::default())?;
/// chart.set_labels(&["a", "b", "c"])?;
/// chart.add_color_bar(Some("score"))?;
/// chart.save_fig("chart.png")?;
/// # Ok::<(), parcoord::ParcoordError>(())
/// ```
#[derive(Clone, Debug)]
pub struct ParCoord {
    records: Vec<Vec<f64>>,
    num_dims: usize,
    canvas: Canvas,
    coloring: Coloring,
    visible: Vec<bool>,
    labels: Option<Vec<String>>,
    color_bar: Option<ColorBarOpts>,
    plotted: Option<Plotted>,
}

impl ParCoord {
    /// Validate `records` and create a chart with the default canvas.
    pub fn new(records: Vec<Vec<f64>>) -> ParcoordResult<Self> {
        let num_dims = validate_records(&records)?;
        let visible = vec![true; records.len()];
        Ok(Self {
            records,
            num_dims,
            canvas: Canvas::default(),
            coloring: Coloring::Cycle,
            visible,
            labels: None,
            color_bar: None,
            plotted: None,
        })
    }

    /// Number of records.
    pub fn num_records(&self) -> usize {
        self.records.len()
    }

    /// Number of dimensions (axes).
    pub fn num_dims(&self) -> usize {
        self.num_dims
    }

    /// Records in caller order.
    pub fn records(&self) -> &[Vec<f64>] {
        &self.records
    }

    /// Output canvas.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Change the output canvas.
    pub fn set_canvas(&mut self, canvas: Canvas) -> ParcoordResult<()> {
        canvas.validate()?;
        self.canvas = canvas;
        Ok(())
    }

    /// Replace the records.
    ///
    /// The dimension count must not change. Scores, colors, visibility, the color bar request
    /// and any previous plot are cleared; labels are kept.
    pub fn reset_data(&mut self, records: Vec<Vec<f64>>) -> ParcoordResult<()> {
        let num_dims = validate_records(&records)?;
        if num_dims != self.num_dims {
            return Err(ParcoordError::validation(format!(
                "new records have {num_dims} dimensions, chart has {}",
                self.num_dims
            )));
        }
        tracing::debug!(records = records.len(), "data reset");
        self.visible = vec![true; records.len()];
        self.records = records;
        self.coloring = Coloring::Cycle;
        self.color_bar = None;
        self.plotted = None;
        Ok(())
    }

    /// Show or hide individual records; flags are in record order.
    pub fn set_visible(&mut self, visible: &[bool]) -> ParcoordResult<()> {
        if visible.len() != self.records.len() {
            return Err(ParcoordError::validation(format!(
                "visibility list must have one flag per record ({} given, {} records)",
                visible.len(),
                self.records.len()
            )));
        }
        self.visible = visible.to_vec();
        Ok(())
    }

    /// Visibility flags in record order.
    pub fn visible(&self) -> &[bool] {
        &self.visible
    }

    /// Color lines explicitly. Replaces any score coloring and drops the color bar request.
    pub fn set_colors(&mut self, colors: ColorsArg) -> ParcoordResult<()> {
        let colors = match colors {
            ColorsArg::Single(c) => vec![c.to_rgba8(); self.records.len()],
            ColorsArg::PerRecord(list) => {
                if list.len() != self.records.len() {
                    return Err(ParcoordError::validation(format!(
                        "color list must have one color per record ({} given, {} records)",
                        list.len(),
                        self.records.len()
                    )));
                }
                list.into_iter().map(ColorDef::to_rgba8).collect()
            }
        };
        self.coloring = Coloring::Explicit(colors);
        self.color_bar = None;
        Ok(())
    }

    /// Color lines by score and order them by score.
    pub fn set_scores(&mut self, scores: &[f64], opts: ScoreOpts) -> ParcoordResult<()> {
        validate_scores(scores, self.records.len())?;

        let vmin = match opts.norm_min {
            Some(v) => v,
            None => scores.iter().copied().fold(f64::INFINITY, f64::min),
        };
        let vmax = match opts.norm_max {
            Some(v) => v,
            None => scores.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        };
        let norm = ScoreNorm::new(opts.norm, vmin, vmax)?;

        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]));
        if !opts.high_scores_on_top {
            order.reverse();
        }

        tracing::debug!(
            records = scores.len(),
            vmin,
            vmax,
            colormap = %opts.colormap,
            "scores set"
        );
        self.coloring = Coloring::Scores(ScoreColoring {
            scores: scores.to_vec(),
            order,
            norm,
            colormap: opts.colormap,
            variable_line_width: opts.variable_line_width,
        });
        Ok(())
    }

    /// Scores in record order, when score coloring is active.
    pub fn scores(&self) -> Option<&[f64]> {
        match &self.coloring {
            Coloring::Scores(s) => Some(s.scores.as_slice()),
            _ => None,
        }
    }

    /// Score normalization, when score coloring is active.
    pub fn score_norm(&self) -> Option<&ScoreNorm> {
        match &self.coloring {
            Coloring::Scores(s) => Some(&s.norm),
            _ => None,
        }
    }

    /// Name one axis per dimension.
    pub fn set_labels<S: AsRef<str>>(&mut self, labels: &[S]) -> ParcoordResult<()> {
        if labels.len() != self.num_dims {
            return Err(ParcoordError::validation(format!(
                "labels must have one entry per dimension ({} given, {} dimensions)",
                labels.len(),
                self.num_dims
            )));
        }
        self.labels = Some(labels.iter().map(|s| s.as_ref().to_owned()).collect());
        Ok(())
    }

    /// Axis labels, if set.
    pub fn labels(&self) -> Option<&[String]> {
        self.labels.as_deref()
    }

    /// Request a color bar for the current scores.
    pub fn add_color_bar(&mut self, label: Option<&str>) -> ParcoordResult<()> {
        if !matches!(self.coloring, Coloring::Scores(_)) {
            return Err(ParcoordError::state(
                "set scores before adding a color bar",
            ));
        }
        self.color_bar = Some(ColorBarOpts {
            label: label.map(str::to_owned),
        });
        Ok(())
    }

    /// The requested color bar, if any.
    pub fn color_bar(&self) -> Option<&ColorBarOpts> {
        self.color_bar.as_ref()
    }

    /// Compute axis limits and normalized records.
    #[tracing::instrument(skip_all, fields(records = self.records.len(), dims = self.num_dims))]
    pub fn plot(&mut self, opts: &PlotOpts) -> ParcoordResult<()> {
        if opts.num_ticks < 2 {
            return Err(ParcoordError::validation("num_ticks must be >= 2"));
        }
        if !opts.line_width.is_finite() || opts.line_width <= 0.0 {
            return Err(ParcoordError::validation(
                "line_width must be a positive finite number",
            ));
        }

        let limits = compute_limits(
            &self.records,
            self.num_dims,
            opts.y_min.as_deref(),
            opts.y_max.as_deref(),
        )?;
        let normalized = normalize_records(&self.records, &limits);
        self.plotted = Some(Plotted {
            limits,
            normalized,
            opts: opts.clone(),
        });
        Ok(())
    }

    /// Whether [`ParCoord::plot`] has run since the data last changed.
    pub fn is_plotted(&self) -> bool {
        self.plotted.is_some()
    }

    /// Per-axis limits from the last plot.
    pub fn axis_limits(&self) -> Option<&[AxisLimits]> {
        self.plotted.as_ref().map(|p| p.limits.as_slice())
    }

    /// Records mapped onto the `[0, 1]` ordinate, in record order.
    pub fn normalized(&self) -> Option<&[Vec<f64>]> {
        self.plotted.as_ref().map(|p| p.normalized.as_slice())
    }

    /// Ticks for every axis from the last plot.
    pub fn axis_ticks(&self) -> ParcoordResult<Vec<AxisTicks>> {
        let plotted = self.require_plotted()?;
        Ok(plotted
            .limits
            .iter()
            .map(|lim| axis_ticks(lim, plotted.opts.num_ticks))
            .collect())
    }

    /// Record indices in paint order (last is on top).
    pub fn draw_order(&self) -> Vec<usize> {
        match &self.coloring {
            Coloring::Scores(s) => s.order.clone(),
            _ => (0..self.records.len()).collect(),
        }
    }

    /// Line color of every record, in record order.
    pub fn record_colors(&self) -> Vec<Rgba8> {
        match &self.coloring {
            Coloring::Cycle => {
                let mut colors = vec![DEFAULT_CYCLE[0]; self.records.len()];
                for (pos, idx) in self.draw_order().into_iter().enumerate() {
                    colors[idx] = DEFAULT_CYCLE[pos % DEFAULT_CYCLE.len()];
                }
                colors
            }
            Coloring::Explicit(colors) => colors.clone(),
            Coloring::Scores(s) => s
                .scores
                .iter()
                .map(|v| s.colormap.sample(s.norm.normalize(*v)))
                .collect(),
        }
    }

    /// Line width of every record, in record order.
    pub fn line_widths(&self) -> ParcoordResult<Vec<f64>> {
        let base = self.require_plotted()?.opts.line_width;
        let mut widths = vec![base; self.records.len()];

        let Coloring::Scores(s) = &self.coloring else {
            return Ok(widths);
        };
        if !s.variable_line_width {
            return Ok(widths);
        }
        let (Some(&first), Some(&last)) = (s.order.first(), s.order.last()) else {
            return Ok(widths);
        };
        let (s_first, s_last) = (s.scores[first], s.scores[last]);
        if s_first == s_last {
            return Ok(widths);
        }
        for (w, score) in widths.iter_mut().zip(&s.scores) {
            *w = base + VARIABLE_WIDTH_SPAN * (s_last - score) / (s_last - s_first);
        }
        Ok(widths)
    }

    /// Compile the plotted chart into a backend-agnostic plan.
    pub fn to_plan(&self) -> ParcoordResult<RenderPlan> {
        let plotted = self.require_plotted()?;
        let color_bar = match (&self.color_bar, &self.coloring) {
            (Some(bar), Coloring::Scores(s)) => Some(ColorBarView {
                norm: &s.norm,
                colormap: s.colormap,
                label: bar.label.as_deref(),
            }),
            _ => None,
        };
        let view = FigureView {
            canvas: self.canvas,
            limits: &plotted.limits,
            normalized: &plotted.normalized,
            num_ticks: plotted.opts.num_ticks,
            draw_order: self.draw_order(),
            colors: self.record_colors(),
            widths: self.line_widths()?,
            visible: &self.visible,
            labels: self.labels.as_deref(),
            color_bar,
        };
        Ok(compile_figure(&view))
    }

    /// Rasterize with a caller-provided backend.
    pub fn render_with(&self, backend: &mut dyn RenderBackend) -> ParcoordResult<FrameRGBA> {
        backend.render_plan(&self.to_plan()?)
    }

    /// Rasterize with the default CPU backend.
    pub fn render_rgba(&self) -> ParcoordResult<FrameRGBA> {
        self.render_with(&mut CpuBackend::default())
    }

    /// Serialize the figure as an SVG document.
    pub fn render_svg(&self) -> ParcoordResult<String> {
        Ok(render_svg(&self.to_plan()?))
    }

    /// Save the figure; `.png` is rasterized, `.svg` is written as vectors.
    #[tracing::instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn save_fig(&self, path: impl AsRef<Path>) -> ParcoordResult<()> {
        let path = path.as_ref();
        match OutputFormat::from_path(path)? {
            OutputFormat::Png => write_png(&self.render_rgba()?, path)?,
            OutputFormat::Svg => write_svg(&self.render_svg()?, path)?,
        }
        tracing::info!("figure saved");
        Ok(())
    }

    fn require_plotted(&self) -> ParcoordResult<&Plotted> {
        self.plotted
            .as_ref()
            .ok_or_else(|| ParcoordError::state("call plot() before rendering or reading limits"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/parcoord.rs"]
mod tests;
