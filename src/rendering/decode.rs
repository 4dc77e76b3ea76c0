use image::{DynamicImage, ImageReader};
use pixel_groups::PixelGrid;
use std::io::Cursor;
use std::path::Path;

use crate::error::CodecError;

/// Decode an image file into a straight-alpha RGBA grid.
///
/// The format is detected from the file content, not the extension.
/// Sources with 16-bit channels are rounded to 8 bits before filtering.
pub fn decode(path: &Path) -> Result<PixelGrid, CodecError> {
    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|source| CodecError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    let image = reader.decode().map_err(|source| CodecError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Decoded source image"
    );
    into_grid(image)
}

/// Decode in-memory image data. `label` only appears in error messages.
pub fn decode_bytes(bytes: &[u8], label: &Path) -> Result<PixelGrid, CodecError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|source| CodecError::Open {
            path: label.to_path_buf(),
            source,
        })?;
    let image = reader.decode().map_err(|source| CodecError::Decode {
        path: label.to_path_buf(),
        source,
    })?;
    into_grid(image)
}

// `to_rgba8` quantizes wider samples with rounding
fn into_grid(image: DynamicImage) -> Result<PixelGrid, CodecError> {
    let rgba = image.to_rgba8();
    let (width, height) = (rgba.width() as usize, rgba.height() as usize);
    Ok(PixelGrid::from_rgba_bytes(width, height, rgba.as_raw())?)
}
