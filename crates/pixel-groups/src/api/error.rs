//! Unified error type for the pixel-groups public API.
//!
//! [`FilterError`] covers grid construction, option parsing and the
//! configuration checks the engines perform before touching any pixel.

use crate::grid::GridError;
use std::fmt;

/// Unified error type for the pixel-groups public API.
///
/// Every variant is a configuration problem: nothing here is recoverable
/// mid-run, the caller is expected to fix its input and try again.
///
/// # Example
///
/// ```
/// use pixel_groups::{AggregationMode, FilterError};
///
/// fn parse(mode: &str) -> Result<AggregationMode, FilterError> {
///     let mode = mode.parse()?;
///     Ok(mode)
/// }
///
/// assert!(parse("median").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Grid construction failed
    Grid(GridError),
    /// Mode string is not one of `avg`, `min`, `max`, `sort`
    InvalidMode(String),
    /// An option string could not be parsed
    InvalidOption {
        /// Name of the option
        option: &'static str,
        /// Rejected value
        value: String,
    },
    /// Checkerbox tile size of zero
    ZeroTileSize,
    /// No full tile fits into the image and trailing tiles are cropped
    TileExceedsImage {
        /// Requested tile edge length
        size: usize,
        /// Image width
        width: usize,
        /// Image height
        height: usize,
    },
    /// A group with no samples was aggregated
    EmptyGroup,
    /// Average requested with a zero divisor
    DivisionByZero,
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::Grid(err) => write!(f, "grid error: {}", err),
            FilterError::InvalidMode(mode) => {
                write!(f, "unknown mode '{}' (expected avg, min, max or sort)", mode)
            }
            FilterError::InvalidOption { option, value } => {
                write!(f, "invalid value '{}' for {}", value, option)
            }
            FilterError::ZeroTileSize => write!(f, "tile size must be at least 1"),
            FilterError::TileExceedsImage {
                size,
                width,
                height,
            } => write!(
                f,
                "tile size {} exceeds image dimensions {}x{}",
                size, width, height
            ),
            FilterError::EmptyGroup => write!(f, "cannot aggregate an empty group"),
            FilterError::DivisionByZero => write!(f, "average divisor is zero"),
        }
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FilterError::Grid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridError> for FilterError {
    fn from(err: GridError) -> Self {
        FilterError::Grid(err)
    }
}
