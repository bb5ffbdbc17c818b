use std::path::Path;

use anyhow::Context as _;
use image::ImageEncoder as _;

use crate::foundation::error::{ParcoordError, ParcoordResult};
use crate::render::backend::FrameRGBA;

/// File formats a figure can be saved as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Raster PNG through the CPU backend.
    Png,
    /// Vector SVG document.
    Svg,
}

impl OutputFormat {
    /// Pick a format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> ParcoordResult<Self> {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_ascii_lowercase());
        match ext.as_deref() {
            Some("png") => Ok(Self::Png),
            Some("svg") => Ok(Self::Svg),
            _ => Err(ParcoordError::validation(format!(
                "could not save file to path {}: unsupported extension (use .png or .svg)",
                path.display()
            ))),
        }
    }
}

/// Encode a frame as PNG bytes with straight alpha.
pub fn encode_png(frame: &FrameRGBA) -> ParcoordResult<Vec<u8>> {
    let rgba = frame.to_straight_rgba8();
    let mut png = Vec::new();
    image::codecs::png::PngEncoder::new(&mut png)
        .write_image(
            &rgba,
            frame.width,
            frame.height,
            image::ExtendedColorType::Rgba8,
        )
        .map_err(|e| ParcoordError::render(format!("png encode: {e}")))?;
    Ok(png)
}

/// Write a frame to `path` as PNG, creating parent directories.
pub fn write_png(frame: &FrameRGBA, path: &Path) -> ParcoordResult<()> {
    ensure_parent_dir(path)?;
    let rgba = frame.to_straight_rgba8();
    image::save_buffer_with_format(
        path,
        &rgba,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("could not save file to path {}", path.display()))?;
    Ok(())
}

/// Write an SVG document to `path`, creating parent directories.
pub fn write_svg(svg: &str, path: &Path) -> ParcoordResult<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, svg)
        .with_context(|| format!("could not save file to path {}", path.display()))?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> ParcoordResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/export.rs"]
mod tests;
