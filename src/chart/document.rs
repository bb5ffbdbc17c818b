use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chart::parcoord::{ColorBarOpts, ColorsArg, ParCoord, PlotOpts, ScoreOpts};
use crate::foundation::core::Canvas;
use crate::foundation::error::{ParcoordError, ParcoordResult};

/// Per-record scores plus how they color the chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoresDoc {
    /// One score per record.
    pub values: Vec<f64>,
    /// Color scale and ordering options.
    #[serde(flatten)]
    pub opts: ScoreOpts,
}

/// A chart described as JSON.
///
/// ```json
/// {
///   "records": [[1, 2, 3], [3, 1, 2]],
///   "labels": ["a", "b", "c"],
///   "scores": { "values": [0.2, 0.8], "colormap": "viridis" },
///   "color_bar": { "label": "score" }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartDoc {
    /// Output size in pixels.
    #[serde(default)]
    pub canvas: Canvas,
    /// Records, one array per record.
    pub records: Vec<Vec<f64>>,
    /// One name per dimension.
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    /// Explicit line colors.
    #[serde(default)]
    pub colors: Option<ColorsArg>,
    /// Score coloring.
    #[serde(default)]
    pub scores: Option<ScoresDoc>,
    /// Visibility flags in record order.
    #[serde(default)]
    pub visible: Option<Vec<bool>>,
    /// Plot options.
    #[serde(default)]
    pub plot: PlotOpts,
    /// Color bar request; needs `scores`.
    #[serde(default)]
    pub color_bar: Option<ColorBarOpts>,
}

impl ChartDoc {
    /// Parse a chart document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ParcoordResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ParcoordError::serde(format!("parse chart JSON: {e}")))
    }

    /// Parse a chart document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ParcoordResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ParcoordError::validation(format!("open chart JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Build and plot the chart.
    #[tracing::instrument(skip_all, fields(records = self.records.len()))]
    pub fn build(&self) -> ParcoordResult<ParCoord> {
        if self.colors.is_some() && self.scores.is_some() {
            return Err(ParcoordError::validation(
                "chart document sets both colors and scores; pick one",
            ));
        }

        let mut chart = ParCoord::new(self.records.clone())?;
        chart.set_canvas(self.canvas)?;
        if let Some(colors) = &self.colors {
            chart.set_colors(colors.clone())?;
        }
        if let Some(scores) = &self.scores {
            chart.set_scores(&scores.values, scores.opts.clone())?;
        }
        if let Some(bar) = &self.color_bar {
            chart.add_color_bar(bar.label.as_deref())?;
        }
        if let Some(visible) = &self.visible {
            chart.set_visible(visible)?;
        }
        chart.plot(&self.plot)?;
        if let Some(labels) = &self.labels {
            chart.set_labels(labels)?;
        }
        Ok(chart)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/document.rs"]
mod tests;
