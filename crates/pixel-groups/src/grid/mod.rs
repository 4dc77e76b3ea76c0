//! Pixel storage for the filter engines.
//!
//! [`PixelGrid`] is the canonical in-memory image: row-major RGBA samples with
//! dimension metadata. Decoders produce one, every engine reads one and writes
//! a fresh one of the same dimensions.

mod error;
mod pixel;
mod pixel_grid;

pub use error::GridError;
pub use pixel::{Pixel, Rgb, Rgba};
pub use pixel_grid::PixelGrid;
