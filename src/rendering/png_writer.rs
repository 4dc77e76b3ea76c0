use pixel_groups::PixelGrid;
use std::io::{Cursor, Write};
use std::path::Path;

use crate::error::CodecError;

/// Encode a grid as an 8-bit RGBA PNG.
pub fn encode_png(grid: &PixelGrid) -> Result<Vec<u8>, CodecError> {
    let width = u32::try_from(grid.width())
        .map_err(|_| CodecError::Encode(format!("width {} too large", grid.width())))?;
    let height = u32::try_from(grid.height())
        .map_err(|_| CodecError::Encode(format!("height {} too large", grid.height())))?;

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| CodecError::Encode(e.to_string()))?;
        writer
            .write_image_data(&grid.to_rgba_bytes())
            .map_err(|e| CodecError::Encode(e.to_string()))?;
        writer
            .finish()
            .map_err(|e| CodecError::Encode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Re-compress PNG data with oxipng. Falls back to the input on failure.
pub fn optimize_png(png_bytes: Vec<u8>) -> Vec<u8> {
    let options = oxipng::Options {
        strip: oxipng::StripChunks::Safe,
        // transparent border pixels must keep their zero colour
        optimize_alpha: false,
        ..Default::default()
    };
    match oxipng::optimize_from_memory(&png_bytes, &options) {
        Ok(optimized) => {
            tracing::debug!(
                before = png_bytes.len(),
                after = optimized.len(),
                "Optimized PNG"
            );
            optimized
        }
        Err(e) => {
            tracing::warn!(error = %e, "PNG optimization failed, keeping unoptimized output");
            png_bytes
        }
    }
}

/// Write `bytes` to `path` through a temporary file in the same directory.
///
/// Readers never observe a partially written file, and a failed run leaves
/// any existing file at `path` untouched.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), CodecError> {
    let write_error = |source| CodecError::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = tempfile::NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(bytes).map_err(write_error)?;
    file.flush().map_err(write_error)?;
    file.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}
