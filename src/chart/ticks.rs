use serde::Serialize;

use crate::chart::limits::AxisLimits;
use crate::foundation::math::linspace;
use crate::style::norm::{NormKind, ScoreNorm};

/// Tick marks of one parallel axis.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisTicks {
    /// Tick positions on the normalized ordinate.
    pub positions: Vec<f64>,
    /// Labels in data units, one per position.
    pub labels: Vec<String>,
}

/// `num_ticks` evenly spaced ticks whose labels undo the axis normalization.
pub(crate) fn axis_ticks(limits: &AxisLimits, num_ticks: usize) -> AxisTicks {
    let positions = linspace(0.0, 1.0, num_ticks);
    let labels = linspace(limits.min, limits.max, num_ticks)
        .into_iter()
        .map(format_axis_value)
        .collect();
    AxisTicks { positions, labels }
}

/// `{:4.2}` label for an axis tick.
///
/// Values that would round to `-0.00` print as `0.00`.
pub(crate) fn format_axis_value(v: f64) -> String {
    let v = if v.abs() < 0.005 { 0.0 } else { v };
    format!("{v:4.2}")
}

const MAX_BAR_TICKS: i64 = 20;

/// A tick on the color bar: position along the bar in `[0, 1]` plus its label.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct BarTick {
    pub(crate) t: f64,
    pub(crate) label: String,
}

/// Ticks for a color bar covering `norm`.
///
/// Log norms spanning a full decade get one tick per decade; everything else gets
/// 1/2/5-stepped linear ticks.
pub(crate) fn color_bar_ticks(norm: &ScoreNorm) -> Vec<BarTick> {
    let (lo, hi) = (norm.inverse(0.0), norm.inverse(1.0));
    if lo == hi {
        return vec![BarTick {
            t: 0.0,
            label: format_nice(lo, 1.0),
        }];
    }

    if norm.kind() == NormKind::Log {
        let first = (lo.log10() - 1e-9).ceil() as i32;
        let last = (hi.log10() + 1e-9).floor() as i32;
        if last > first {
            return (first..=last)
                .map(|k| {
                    let v = 10f64.powi(k);
                    BarTick {
                        t: norm.normalize(v),
                        label: format!("1e{k}"),
                    }
                })
                .collect();
        }
    }

    let step = nice_step((hi - lo) / 5.0);
    let start = (lo / step).ceil() as i64;
    let end = (hi / step).floor() as i64;
    if end.saturating_sub(start) > MAX_BAR_TICKS {
        return [lo, hi]
            .into_iter()
            .map(|v| BarTick {
                t: norm.normalize(v),
                label: format_nice(v, step),
            })
            .collect();
    }
    (start..=end)
        .map(|i| {
            let v = i as f64 * step;
            BarTick {
                t: norm.normalize(v),
                label: format_nice(v, step),
            }
        })
        .collect()
}

/// Round `raw` up to the nearest 1, 2 or 5 times a power of ten.
pub(crate) fn nice_step(raw: f64) -> f64 {
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let exp = raw.log10().floor();
    let base = 10f64.powf(exp);
    let frac = raw / base;
    let nice = if frac <= 1.0 {
        1.0
    } else if frac <= 2.0 {
        2.0
    } else if frac <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * base
}

fn format_nice(v: f64, step: f64) -> String {
    let decimals = if step >= 1.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    };
    let v = if v.abs() < step * 1e-9 { 0.0 } else { v };
    format!("{v:.decimals$}")
}

#[cfg(test)]
#[path = "../../tests/unit/chart/ticks.rs"]
mod tests;
