use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgba8;
use crate::foundation::error::ParcoordError;

/// Line color cycle used when a chart has no explicit coloring.
pub const DEFAULT_CYCLE: [Rgba8; 10] = [
    Rgba8::rgb(0x1f, 0x77, 0xb4),
    Rgba8::rgb(0xff, 0x7f, 0x0e),
    Rgba8::rgb(0x2c, 0xa0, 0x2c),
    Rgba8::rgb(0xd6, 0x27, 0x28),
    Rgba8::rgb(0x94, 0x67, 0xbd),
    Rgba8::rgb(0x8c, 0x56, 0x4b),
    Rgba8::rgb(0xe3, 0x77, 0xc2),
    Rgba8::rgb(0x7f, 0x7f, 0x7f),
    Rgba8::rgb(0xbc, 0xbd, 0x22),
    Rgba8::rgb(0x17, 0xbe, 0xcf),
];

/// A user-specified color with normalized `0..=1` channels and straight alpha.
///
/// Accepted JSON forms:
/// - strings: `"#RRGGBB"`, `"#RRGGBBAA"`, single-letter codes (`"r"`, `"k"`, ...), cycle
///   references `"C0"`..`"C9"`, a few CSS names, grayscale levels such as `"0.75"`
/// - objects: `{"r","g","b","a"?}` or `{"h","s","l","a"?}`
/// - arrays: `[r, g, b]` or `[r, g, b, a]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorDef {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

impl ColorDef {
    /// Build from normalized channels.
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from 8-bit channels.
    pub fn from_rgba8(c: Rgba8) -> Self {
        Self::rgba(
            f64::from(c.r) / 255.0,
            f64::from(c.g) / 255.0,
            f64::from(c.b) / 255.0,
            f64::from(c.a) / 255.0,
        )
    }

    /// Quantize to straight-alpha RGBA8.
    pub fn to_rgba8(self) -> Rgba8 {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        Rgba8 {
            r: to_u8(self.r),
            g: to_u8(self.g),
            b: to_u8(self.b),
            a: to_u8(self.a),
        }
    }
}

impl FromStr for ColorDef {
    type Err = ParcoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color_str(s).map_err(ParcoordError::validation)
    }
}

impl<'de> Deserialize<'de> for ColorDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Str(String),
            RgbaObj {
                r: f64,
                g: f64,
                b: f64,
                #[serde(default = "one")]
                a: f64,
            },
            HslaObj {
                h: f64,
                s: f64,
                l: f64,
                #[serde(default = "one")]
                a: f64,
            },
            Arr(Vec<f64>),
        }

        fn one() -> f64 {
            1.0
        }

        match Repr::deserialize(deserializer)? {
            Repr::Str(s) => parse_color_str(&s).map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(Self::rgba(r, g, b, a)),
            Repr::HslaObj { h, s, l, a } => Ok(hsla_to_rgba(h, s, l, a)),
            Repr::Arr(v) => {
                if v.len() == 3 {
                    Ok(Self::rgba(v[0], v[1], v[2], 1.0))
                } else if v.len() == 4 {
                    Ok(Self::rgba(v[0], v[1], v[2], v[3]))
                } else {
                    Err(serde::de::Error::custom(
                        "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                    ))
                }
            }
        }
    }
}

fn parse_color_str(s: &str) -> Result<ColorDef, String> {
    let s = s.trim();
    if s.starts_with('#') {
        return parse_hex(s);
    }
    if let Some(c) = short_code(s) {
        return Ok(c);
    }
    if let Some(idx) = s.strip_prefix('C').and_then(|n| n.parse::<usize>().ok()) {
        return DEFAULT_CYCLE
            .get(idx)
            .map(|c| ColorDef::from_rgba8(*c))
            .ok_or_else(|| format!("color cycle reference \"{s}\" out of range (C0..C9)"));
    }
    if let Some(c) = named(&s.to_ascii_lowercase()) {
        return Ok(c);
    }
    if let Ok(level) = s.parse::<f64>() {
        if (0.0..=1.0).contains(&level) {
            return Ok(ColorDef::rgba(level, level, level, 1.0));
        }
        return Err(format!("grayscale level \"{s}\" must be within 0..1"));
    }
    if s.len() == 6 || s.len() == 8 {
        return parse_hex(s);
    }
    Err(format!("unrecognized color \"{s}\""))
}

fn short_code(s: &str) -> Option<ColorDef> {
    let c = match s {
        "b" => ColorDef::rgba(0.0, 0.0, 1.0, 1.0),
        "g" => ColorDef::rgba(0.0, 0.5, 0.0, 1.0),
        "r" => ColorDef::rgba(1.0, 0.0, 0.0, 1.0),
        "c" => ColorDef::rgba(0.0, 0.75, 0.75, 1.0),
        "m" => ColorDef::rgba(0.75, 0.0, 0.75, 1.0),
        "y" => ColorDef::rgba(0.75, 0.75, 0.0, 1.0),
        "k" => ColorDef::rgba(0.0, 0.0, 0.0, 1.0),
        "w" => ColorDef::rgba(1.0, 1.0, 1.0, 1.0),
        _ => return None,
    };
    Some(c)
}

fn named(s: &str) -> Option<ColorDef> {
    let rgb = match s {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "blue" => (0, 0, 255),
        "cyan" => (0, 255, 255),
        "magenta" => (255, 0, 255),
        "yellow" => (255, 255, 0),
        "orange" => (255, 165, 0),
        "purple" => (128, 0, 128),
        "gray" | "grey" => (128, 128, 128),
        "lightgray" | "lightgrey" => (211, 211, 211),
        "darkgray" | "darkgrey" => (169, 169, 169),
        "brown" => (165, 42, 42),
        "pink" => (255, 192, 203),
        "navy" => (0, 0, 128),
        "teal" => (0, 128, 128),
        "olive" => (128, 128, 0),
        _ => return None,
    };
    Some(ColorDef::from_rgba8(Rgba8::rgb(rgb.0, rgb.1, rgb.2)))
}

fn parse_hex(s: &str) -> Result<ColorDef, String> {
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned());
    }

    let (r, g, b, a) = match s.len() {
        6 => {
            let r = hex_byte(&s[0..2])?;
            let g = hex_byte(&s[2..4])?;
            let b = hex_byte(&s[4..6])?;
            (r, g, b, 255)
        }
        8 => {
            let r = hex_byte(&s[0..2])?;
            let g = hex_byte(&s[2..4])?;
            let b = hex_byte(&s[4..6])?;
            let a = hex_byte(&s[6..8])?;
            (r, g, b, a)
        }
        _ => {
            return Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned());
        }
    };

    Ok(ColorDef::from_rgba8(Rgba8 { r, g, b, a }))
}

fn hsla_to_rgba(h: f64, s: f64, l: f64, a: f64) -> ColorDef {
    let h = (h % 360.0 + 360.0) % 360.0 / 360.0;
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        return ColorDef::rgba(l, l, l, a);
    }

    fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    ColorDef::rgba(
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
        a,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/style/color.rs"]
mod tests;
