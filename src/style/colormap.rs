use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgba8;
use crate::foundation::error::ParcoordError;
use crate::foundation::math::lerp;

/// Built-in color scales.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColormapName {
    /// Cyan to magenta.
    Cool,
    /// Black through red and yellow to white.
    Hot,
    /// Black to white.
    Gray,
    /// Dark blue through cyan and yellow to dark red.
    Jet,
    /// Perceptually uniform purple-green-yellow.
    Viridis,
    /// Perceptually uniform blue-magenta-yellow.
    Plasma,
    /// Perceptually uniform black-red-yellow.
    Inferno,
    /// Perceptually uniform black-purple-cream.
    Magma,
    /// Diverging blue-gray-red.
    Coolwarm,
}

type Stop = (f64, [u8; 3]);

const COOL: &[Stop] = &[(0.0, [0, 255, 255]), (1.0, [255, 0, 255])];

const HOT: &[Stop] = &[
    (0.0, [10, 0, 0]),
    (0.365, [255, 0, 0]),
    (0.746, [255, 255, 0]),
    (1.0, [255, 255, 255]),
];

const GRAY: &[Stop] = &[(0.0, [0, 0, 0]), (1.0, [255, 255, 255])];

const JET: &[Stop] = &[
    (0.0, [0, 0, 128]),
    (0.125, [0, 0, 255]),
    (0.375, [0, 255, 255]),
    (0.625, [255, 255, 0]),
    (0.875, [255, 0, 0]),
    (1.0, [128, 0, 0]),
];

const VIRIDIS: &[Stop] = &[
    (0.0, [0x44, 0x01, 0x54]),
    (0.125, [0x47, 0x2c, 0x7a]),
    (0.25, [0x3b, 0x51, 0x8b]),
    (0.375, [0x2c, 0x71, 0x8e]),
    (0.5, [0x21, 0x90, 0x8d]),
    (0.625, [0x27, 0xad, 0x81]),
    (0.75, [0x5c, 0xc8, 0x63]),
    (0.875, [0xaa, 0xdc, 0x32]),
    (1.0, [0xfd, 0xe7, 0x25]),
];

const PLASMA: &[Stop] = &[
    (0.0, [0x0d, 0x08, 0x87]),
    (0.125, [0x4c, 0x02, 0xa1]),
    (0.25, [0x7e, 0x03, 0xa8]),
    (0.375, [0xa9, 0x23, 0x95]),
    (0.5, [0xcc, 0x47, 0x78]),
    (0.625, [0xe5, 0x6b, 0x5d]),
    (0.75, [0xf8, 0x94, 0x41]),
    (0.875, [0xfd, 0xc3, 0x28]),
    (1.0, [0xf0, 0xf9, 0x21]),
];

const INFERNO: &[Stop] = &[
    (0.0, [0x00, 0x00, 0x04]),
    (0.125, [0x1f, 0x0c, 0x48]),
    (0.25, [0x55, 0x0f, 0x6d]),
    (0.375, [0x88, 0x22, 0x6a]),
    (0.5, [0xba, 0x36, 0x55]),
    (0.625, [0xe3, 0x59, 0x33]),
    (0.75, [0xf9, 0x8c, 0x0a]),
    (0.875, [0xf9, 0xc9, 0x32]),
    (1.0, [0xfc, 0xff, 0xa4]),
];

const MAGMA: &[Stop] = &[
    (0.0, [0x00, 0x00, 0x04]),
    (0.125, [0x1c, 0x10, 0x44]),
    (0.25, [0x4f, 0x12, 0x7b]),
    (0.375, [0x81, 0x25, 0x81]),
    (0.5, [0xb5, 0x36, 0x7a]),
    (0.625, [0xe5, 0x59, 0x64]),
    (0.75, [0xfb, 0x87, 0x61]),
    (0.875, [0xfe, 0xc2, 0x87]),
    (1.0, [0xfc, 0xfd, 0xbf]),
];

const COOLWARM: &[Stop] = &[
    (0.0, [0x3b, 0x4c, 0xc0]),
    (0.5, [0xdd, 0xdc, 0xdc]),
    (1.0, [0xb4, 0x04, 0x26]),
];

impl ColormapName {
    /// Every built-in scale, in a stable order.
    pub const ALL: [ColormapName; 9] = [
        ColormapName::Cool,
        ColormapName::Hot,
        ColormapName::Gray,
        ColormapName::Jet,
        ColormapName::Viridis,
        ColormapName::Plasma,
        ColormapName::Inferno,
        ColormapName::Magma,
        ColormapName::Coolwarm,
    ];

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            ColormapName::Cool => "cool",
            ColormapName::Hot => "hot",
            ColormapName::Gray => "gray",
            ColormapName::Jet => "jet",
            ColormapName::Viridis => "viridis",
            ColormapName::Plasma => "plasma",
            ColormapName::Inferno => "inferno",
            ColormapName::Magma => "magma",
            ColormapName::Coolwarm => "coolwarm",
        }
    }

    fn stops(self) -> &'static [Stop] {
        match self {
            ColormapName::Cool => COOL,
            ColormapName::Hot => HOT,
            ColormapName::Gray => GRAY,
            ColormapName::Jet => JET,
            ColormapName::Viridis => VIRIDIS,
            ColormapName::Plasma => PLASMA,
            ColormapName::Inferno => INFERNO,
            ColormapName::Magma => MAGMA,
            ColormapName::Coolwarm => COOLWARM,
        }
    }
}

/// A color scale mapping `[0, 1]` to colors.
///
/// Parsed from names such as `"magma"`; a `_r` suffix reverses the scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Colormap {
    name: ColormapName,
    reversed: bool,
}

impl Colormap {
    /// Build a colormap from a built-in scale.
    pub fn new(name: ColormapName, reversed: bool) -> Self {
        Self { name, reversed }
    }

    /// The underlying built-in scale.
    pub fn name(self) -> ColormapName {
        self.name
    }

    /// Whether the scale runs backwards.
    pub fn is_reversed(self) -> bool {
        self.reversed
    }

    /// Sample the scale at `t`; values outside `[0, 1]` are clamped and NaN maps to `0`.
    pub fn sample(self, t: f64) -> Rgba8 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let t = if self.reversed { 1.0 - t } else { t };
        let stops = self.name.stops();

        let upper = stops
            .iter()
            .position(|(pos, _)| *pos >= t)
            .unwrap_or(stops.len() - 1);
        if upper == 0 {
            let [r, g, b] = stops[0].1;
            return Rgba8::rgb(r, g, b);
        }

        let (p0, c0) = stops[upper - 1];
        let (p1, c1) = stops[upper];
        let local = if p1 > p0 { (t - p0) / (p1 - p0) } else { 0.0 };
        let channel = |i: usize| -> u8 {
            lerp(f64::from(c0[i]), f64::from(c1[i]), local)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Rgba8::rgb(channel(0), channel(1), channel(2))
    }
}

impl Default for Colormap {
    fn default() -> Self {
        Self::new(ColormapName::Cool, false)
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reversed {
            write!(f, "{}_r", self.name.as_str())
        } else {
            f.write_str(self.name.as_str())
        }
    }
}

impl FromStr for Colormap {
    type Err = ParcoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let (base, reversed) = match lower.strip_suffix("_r") {
            Some(base) => (base, true),
            None => (lower.as_str(), false),
        };
        let name = match base {
            "grey" => ColormapName::Gray,
            other => ColormapName::ALL
                .into_iter()
                .find(|n| n.as_str() == other)
                .ok_or_else(|| {
                    let known: Vec<&str> = ColormapName::ALL.iter().map(|n| n.as_str()).collect();
                    ParcoordError::validation(format!(
                        "unknown colormap \"{s}\" (known: {})",
                        known.join(", ")
                    ))
                })?,
        };
        Ok(Self { name, reversed })
    }
}

impl Serialize for Colormap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Colormap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/colormap.rs"]
mod tests;
