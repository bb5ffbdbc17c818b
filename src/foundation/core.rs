use crate::foundation::error::{ParcoordError, ParcoordResult};

pub use kurbo::{BezPath, Point, Rect};

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Largest accepted edge length.
    pub const MAX_DIM: u32 = 16_384;

    /// Create a validated canvas.
    pub fn new(width: u32, height: u32) -> ParcoordResult<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    /// Reject empty or oversized canvases.
    pub fn validate(self) -> ParcoordResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ParcoordError::validation(
                "canvas width and height must be > 0",
            ));
        }
        if self.width > Self::MAX_DIM || self.height > Self::MAX_DIM {
            return Err(ParcoordError::validation(format!(
                "canvas too large: {}x{} (max {}x{})",
                self.width,
                self.height,
                Self::MAX_DIM,
                Self::MAX_DIM
            )));
        }
        Ok(())
    }

    /// The canvas as a rectangle anchored at the origin.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Alpha as a `0..=1` float.
    pub fn alpha_f64(self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// Convert into premultiplied form.
    pub fn to_premul(self) -> Rgba8Premul {
        Rgba8Premul::from_straight_rgba(self.r, self.g, self.b, self.a)
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red channel premultiplied by alpha.
    pub r: u8,
    /// Green channel premultiplied by alpha.
    pub g: u8,
    /// Blue channel premultiplied by alpha.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Convert straight-alpha RGBA8 into premultiplied RGBA8.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Undo premultiplication. Fully transparent pixels become transparent black.
    pub fn to_straight(self) -> Rgba8 {
        if self.a == 0 {
            return Rgba8 {
                r: 0,
                g: 0,
                b: 0,
                a: 0,
            };
        }
        let a = u16::from(self.a);
        let unpremul = |c: u8| -> u8 { ((u16::from(c) * 255 + a / 2) / a).min(255) as u8 };
        Rgba8 {
            r: unpremul(self.r),
            g: unpremul(self.g),
            b: unpremul(self.b),
            a: self.a,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
