//! Export encoders.

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use image::ImageEncoder as _;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;

use crate::foundation::error::{BgError, BgResult};
use crate::render::backend::FrameRGBA;

/// Fixed JPEG quality (0-100).
pub const JPEG_QUALITY: u8 = 92;

/// Export file format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Lossless RGBA PNG.
    #[default]
    Png,
    /// Baseline RGB JPEG at [`JPEG_QUALITY`].
    Jpeg,
}

impl ExportFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }

    /// MIME type of the encoded bytes.
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }
}

/// Conventional export file name: `bg-<width>x<height>.<ext>`.
pub fn export_filename(width: u32, height: u32, format: ExportFormat) -> String {
    format!("bg-{width}x{height}.{}", format.extension())
}

/// Encode `frame` in `format`.
pub fn encode(frame: &FrameRGBA, format: ExportFormat) -> BgResult<Vec<u8>> {
    let expected = (frame.width as usize)
        .saturating_mul(frame.height as usize)
        .saturating_mul(4);
    if frame.width == 0 || frame.height == 0 || frame.data.len() != expected {
        return Err(BgError::encode(format!(
            "frame buffer does not match {}x{} rgba8",
            frame.width, frame.height
        )));
    }

    let rgba = frame.to_straight_rgba();
    let mut out = Vec::new();
    match format {
        ExportFormat::Png => PngEncoder::new(&mut out)
            .write_image(&rgba, frame.width, frame.height, image::ExtendedColorType::Rgba8)
            .map_err(|e| BgError::encode(format!("png: {e}")))?,
        ExportFormat::Jpeg => {
            let rgb: Vec<u8> = rgba
                .chunks_exact(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect();
            JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY)
                .write_image(&rgb, frame.width, frame.height, image::ExtendedColorType::Rgb8)
                .map_err(|e| BgError::encode(format!("jpeg: {e}")))?;
        }
    }
    Ok(out)
}

/// Write `bytes` to `path` via a temporary sibling and a rename, so a failed write leaves no
/// partial file at `path`.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> BgResult<()> {
    let file_name = path
        .file_name()
        .ok_or_else(|| BgError::validation(format!("'{}' has no file name", path.display())))?;
    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".partial");
    let tmp: PathBuf = path.with_file_name(tmp_name);

    let result = fs::File::create(&tmp)
        .and_then(|mut f| {
            f.write_all(bytes)?;
            f.sync_all()
        })
        .and_then(|()| fs::rename(&tmp, path));
    if let Err(e) = result {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/mod.rs"]
mod tests;
