//! PixelGrid: row-major RGBA samples with dimension metadata.

use super::error::GridError;
use super::pixel::{Pixel, Rgba};

/// An immutable, non-empty 2-D grid of RGBA samples.
///
/// Samples are stored in row-major order: the sample at `(x, y)` lives at
/// index `y * width + x`. Both dimensions are guaranteed to be non-zero.
///
/// # Example
///
/// ```
/// use pixel_groups::{PixelGrid, Rgba};
///
/// let grid = PixelGrid::new(2, 1, vec![Rgba::opaque(1, 2, 3), Rgba::opaque(4, 5, 6)]).unwrap();
///
/// assert_eq!(grid.width(), 2);
/// assert_eq!(grid.height(), 1);
/// assert_eq!(grid.get(1, 0), Some(Rgba::opaque(4, 5, 6)));
/// assert_eq!(grid.get(2, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    samples: Vec<Rgba>,
}

impl PixelGrid {
    /// Create a grid from row-major samples.
    ///
    /// Fails with [`GridError::ZeroDimension`] when either dimension is zero
    /// and with [`GridError::LengthMismatch`] when `samples.len()` is not
    /// `width * height`.
    pub fn new(width: usize, height: usize, samples: Vec<Rgba>) -> Result<Self, GridError> {
        check_dimensions(width, height)?;
        if samples.len() != width * height {
            return Err(GridError::LengthMismatch {
                expected: width * height,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Create a grid filled with transparent black.
    ///
    /// This is the initial state of every output grid: coordinates no group
    /// writes to keep the value `(0, 0, 0, 0)`.
    pub fn transparent(width: usize, height: usize) -> Result<Self, GridError> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            samples: vec![Rgba::TRANSPARENT; width * height],
        })
    }

    /// Create a grid from a flat `[R, G, B, A, ...]` byte buffer.
    ///
    /// The buffer must hold exactly `width * height * 4` bytes.
    pub fn from_rgba_bytes(width: usize, height: usize, bytes: &[u8]) -> Result<Self, GridError> {
        check_dimensions(width, height)?;
        let expected = width * height * 4;
        if bytes.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let samples = bytes
            .chunks_exact(4)
            .map(|px| Rgba::new(px[0], px[1], px[2], px[3]))
            .collect();
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Returns the grid width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns all samples in row-major order.
    #[inline]
    pub fn samples(&self) -> &[Rgba] {
        &self.samples
    }

    /// Returns the sample at `(x, y)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        if x < self.width && y < self.height {
            Some(self.samples[y * self.width + x])
        } else {
            None
        }
    }

    /// Returns row `y` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: usize) -> &[Rgba] {
        let start = y * self.width;
        &self.samples[start..start + self.width]
    }

    /// Iterate over every sample with its coordinates, row-major.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        let width = self.width;
        self.samples.iter().enumerate().map(move |(i, &rgba)| Pixel {
            x: i % width,
            y: i / width,
            rgba,
        })
    }

    /// Convert to a flat `[R, G, B, A, ...]` byte buffer, row-major.
    ///
    /// The returned buffer has length `width * height * 4`.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.samples.len() * 4);
        for px in &self.samples {
            bytes.extend_from_slice(&px.to_bytes());
        }
        bytes
    }

    /// Overwrite the sample at `(x, y)`.
    ///
    /// Engines own disjoint coordinate sets of the output grid, so writes
    /// never overlap between groups.
    #[inline]
    pub(crate) fn set(&mut self, x: usize, y: usize, rgba: Rgba) {
        debug_assert!(x < self.width && y < self.height);
        self.samples[y * self.width + x] = rgba;
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<(), GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::ZeroDimension { width, height });
    }
    Ok(())
}
