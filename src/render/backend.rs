use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::ParcoordResult;
use crate::render::plan::RenderPlan;

/// A rendered figure as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)` as stored, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Copy of the pixel data with straight (non-premultiplied) alpha.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            let s = Rgba8Premul {
                r: px[0],
                g: px[1],
                b: px[2],
                a: px[3],
            }
            .to_straight();
            out.extend_from_slice(&[s.r, s.g, s.b, s.a]);
        }
        out
    }
}

/// A renderer that executes a [`RenderPlan`] into a [`FrameRGBA`].
pub trait RenderBackend {
    /// Paint every op of `plan` and read back the frame.
    fn render_plan(&mut self, plan: &RenderPlan) -> ParcoordResult<FrameRGBA>;
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
