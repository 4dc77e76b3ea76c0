//! Error type for grid construction.

use std::fmt;

/// Error type for [`PixelGrid`](super::PixelGrid) construction.
///
/// Returned when the requested dimensions are degenerate or the sample
/// buffer does not match them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is zero
    ZeroDimension {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
    /// Sample buffer length does not equal `width * height`
    LengthMismatch {
        /// `width * height` (samples) or `width * height * 4` (bytes)
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::ZeroDimension { width, height } => {
                write!(f, "grid dimensions must be non-zero, got {}x{}", width, height)
            }
            GridError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "grid buffer length mismatch: expected {}, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for GridError {}
