//! PNG encoding of generated identicons

use crate::io::error::{IdenticonError, Result};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use std::io::Write;
use std::path::Path;

/// Encode an image as PNG into a writer
///
/// # Errors
///
/// Returns an error if:
/// - No sink was supplied
/// - The encoder fails, including I/O errors of the sink
pub fn write_png<W: Write>(img: &RgbaImage, sink: Option<&mut W>) -> Result<()> {
    let sink = sink.ok_or(IdenticonError::NilSink)?;

    PngEncoder::new(sink).write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        ExtendedColorType::Rgba8,
    )?;

    Ok(())
}

/// Save an image as a PNG file, creating missing parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn save_png(img: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| IdenticonError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| IdenticonError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
