use serde::{Deserialize, Serialize};

use crate::foundation::error::{ParcoordError, ParcoordResult};

/// How scores are mapped onto the `[0, 1]` colormap domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormKind {
    /// Affine mapping of `[vmin, vmax]`.
    #[default]
    Linear,
    /// Affine mapping in `log10` space; bounds must be positive.
    Log,
}

/// Clipping score normalization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreNorm {
    kind: NormKind,
    vmin: f64,
    vmax: f64,
}

impl ScoreNorm {
    /// Create a validated normalization over `[vmin, vmax]`.
    pub fn new(kind: NormKind, vmin: f64, vmax: f64) -> ParcoordResult<Self> {
        if !vmin.is_finite() || !vmax.is_finite() {
            return Err(ParcoordError::validation(
                "score normalization bounds must be finite",
            ));
        }
        if vmin > vmax {
            return Err(ParcoordError::validation(format!(
                "score normalization min ({vmin}) must be <= max ({vmax})"
            )));
        }
        if !(vmax - vmin).is_finite() {
            return Err(ParcoordError::validation(format!(
                "score normalization interval [{vmin}, {vmax}] is too wide"
            )));
        }
        if kind == NormKind::Log && vmin <= 0.0 {
            return Err(ParcoordError::validation(format!(
                "log score normalization needs positive bounds, got min {vmin}"
            )));
        }
        Ok(Self { kind, vmin, vmax })
    }

    /// Normalization kind.
    pub fn kind(&self) -> NormKind {
        self.kind
    }

    /// Lower bound.
    pub fn vmin(&self) -> f64 {
        self.vmin
    }

    /// Upper bound.
    pub fn vmax(&self) -> f64 {
        self.vmax
    }

    /// Map `v` into `[0, 1]`, clipping to the bounds first.
    ///
    /// A zero-width interval maps everything to `0`.
    pub fn normalize(&self, v: f64) -> f64 {
        if self.vmin == self.vmax {
            return 0.0;
        }
        let v = v.clamp(self.vmin, self.vmax);
        match self.kind {
            NormKind::Linear => (v - self.vmin) / (self.vmax - self.vmin),
            NormKind::Log => {
                let (lo, hi) = (self.vmin.log10(), self.vmax.log10());
                (v.log10() - lo) / (hi - lo)
            }
        }
    }

    /// Map a normalized value back into score units.
    ///
    /// `0` and `1` return the bounds exactly.
    pub fn inverse(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return self.vmin;
        }
        if t >= 1.0 {
            return self.vmax;
        }
        match self.kind {
            NormKind::Linear => self.vmin + (self.vmax - self.vmin) * t,
            NormKind::Log => {
                let (lo, hi) = (self.vmin.log10(), self.vmax.log10());
                10f64.powf(lo + (hi - lo) * t)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/norm.rs"]
mod tests;
