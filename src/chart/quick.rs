use crate::chart::parcoord::{ColorsArg, ParCoord, PlotOpts, ScoreOpts};
use crate::foundation::core::Canvas;
use crate::foundation::error::{ParcoordError, ParcoordResult};
use crate::style::colormap::{Colormap, ColormapName};
use crate::style::norm::NormKind;

/// Options for [`parallel_coordinates`].
#[derive(Clone, Debug, PartialEq)]
pub struct QuickOpts {
    /// One name per dimension.
    pub x_labels: Option<Vec<String>>,
    /// Ticks per axis.
    pub num_ticks: usize,
    /// Explicit colors; when set, `scores` are ignored.
    pub colors: Option<ColorsArg>,
    /// Per-record scores driving color, draw order and the color bar.
    pub scores: Option<Vec<f64>>,
    /// Color scale for scores.
    pub colormap: Colormap,
    /// Score normalization.
    pub norm: NormKind,
    /// Lower score bound for the color scale.
    pub scores_norm_min: Option<f64>,
    /// Upper score bound for the color scale.
    pub scores_norm_max: Option<f64>,
    /// Paint high scores last.
    pub high_scores_on_top: bool,
    /// Line width in pixels.
    pub line_width: f64,
    /// Label drawn next to the color bar.
    pub color_bar_label: Option<String>,
    /// Output canvas.
    pub canvas: Canvas,
}

impl Default for QuickOpts {
    fn default() -> Self {
        Self {
            x_labels: None,
            num_ticks: 7,
            colors: None,
            scores: None,
            colormap: Colormap::new(ColormapName::Magma, false),
            norm: NormKind::Linear,
            scores_norm_min: None,
            scores_norm_max: None,
            high_scores_on_top: true,
            line_width: 1.1,
            color_bar_label: None,
            canvas: Canvas::default(),
        }
    }
}

/// Build and plot a chart in one call.
///
/// Colors win over scores. When scores drive the coloring a color bar is added.
pub fn parallel_coordinates(
    records: Vec<Vec<f64>>,
    opts: &QuickOpts,
) -> ParcoordResult<ParCoord> {
    let mut chart = ParCoord::new(records)?;
    chart.set_canvas(opts.canvas)?;

    if let Some(labels) = &opts.x_labels
        && labels.len() != chart.num_dims()
    {
        return Err(ParcoordError::validation(
            "if x_labels is given, its length must equal the number of dimensions",
        ));
    }

    match (&opts.colors, &opts.scores) {
        (Some(colors), scores) => {
            if scores.is_some() {
                tracing::debug!("colors given; ignoring scores");
            }
            chart.set_colors(colors.clone())?;
        }
        (None, Some(scores)) => {
            chart.set_scores(
                scores,
                ScoreOpts {
                    colormap: opts.colormap,
                    norm: opts.norm,
                    norm_min: opts.scores_norm_min,
                    norm_max: opts.scores_norm_max,
                    high_scores_on_top: opts.high_scores_on_top,
                    variable_line_width: false,
                },
            )?;
            chart.add_color_bar(opts.color_bar_label.as_deref())?;
        }
        (None, None) => {}
    }

    chart.plot(&PlotOpts {
        num_ticks: opts.num_ticks,
        line_width: opts.line_width,
        y_min: None,
        y_max: None,
    })?;
    if let Some(labels) = &opts.x_labels {
        chart.set_labels(labels)?;
    }
    Ok(chart)
}

#[cfg(test)]
#[path = "../../tests/unit/chart/quick.rs"]
mod tests;
