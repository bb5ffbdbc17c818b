use serde::Serialize;

use crate::foundation::error::{ParcoordError, ParcoordResult};

/// Value range of one axis in data units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AxisLimits {
    /// Value drawn at the bottom of the axis.
    pub min: f64,
    /// Value drawn at the top of the axis.
    pub max: f64,
}

impl AxisLimits {
    /// Limits from a min/max pair; a zero-width pair is widened to one unit around it.
    pub fn new(min: f64, max: f64) -> Self {
        if min == max {
            let min = min - 0.5;
            return Self {
                min,
                max: min + 1.0,
            };
        }
        Self { min, max }
    }

    /// `max - min`.
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Map a value onto the axis ordinate (`min -> 0`, `max -> 1`).
    pub fn normalize(&self, v: f64) -> f64 {
        (v - self.min) / self.range()
    }

    /// Map an ordinate back to data units.
    pub fn denormalize(&self, t: f64) -> f64 {
        self.min + t * self.range()
    }
}

/// Compute per-dimension limits from the data and optional overrides.
///
/// Each override list must have one finite value per dimension.
pub(crate) fn compute_limits(
    records: &[Vec<f64>],
    num_dims: usize,
    y_min: Option<&[f64]>,
    y_max: Option<&[f64]>,
) -> ParcoordResult<Vec<AxisLimits>> {
    check_override("y_min", y_min, num_dims)?;
    check_override("y_max", y_max, num_dims)?;

    let mut limits = Vec::with_capacity(num_dims);
    for dim in 0..num_dims {
        let column = records.iter().map(|r| r[dim]);
        let mn = match y_min {
            Some(v) => v[dim],
            None => column.clone().fold(f64::INFINITY, f64::min),
        };
        let mx = match y_max {
            Some(v) => v[dim],
            None => column.fold(f64::NEG_INFINITY, f64::max),
        };
        if mn > mx {
            return Err(ParcoordError::validation(format!(
                "axis {dim}: lower limit {mn} exceeds upper limit {mx}"
            )));
        }
        if !(mx - mn).is_finite() {
            return Err(ParcoordError::validation(format!(
                "axis {dim}: range [{mn}, {mx}] is too wide to scale"
            )));
        }
        limits.push(AxisLimits::new(mn, mx));
    }
    Ok(limits)
}

/// Normalize every record against `limits`, keeping record order.
pub(crate) fn normalize_records(records: &[Vec<f64>], limits: &[AxisLimits]) -> Vec<Vec<f64>> {
    records
        .iter()
        .map(|r| {
            r.iter()
                .zip(limits)
                .map(|(v, lim)| lim.normalize(*v))
                .collect()
        })
        .collect()
}

fn check_override(name: &str, values: Option<&[f64]>, num_dims: usize) -> ParcoordResult<()> {
    let Some(values) = values else {
        return Ok(());
    };
    if values.len() != num_dims {
        return Err(ParcoordError::validation(format!(
            "{name} must have one value per dimension ({} given, {num_dims} expected)",
            values.len()
        )));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(ParcoordError::validation(format!(
            "{name} values must be finite"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/chart/limits.rs"]
mod tests;
