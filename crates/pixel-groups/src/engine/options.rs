//! Engine configuration.
//!
//! Each engine call takes one of these structs by value. They are plain
//! `Copy` data; nothing is read from global state during a run.

use std::fmt;
use std::str::FromStr;

use crate::aggregate::{AggregationMode, AverageDivisor};
use crate::api::FilterError;
use crate::mask::LuminanceMask;

/// What happens to pixels beyond the last full tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "kebab-case")
)]
pub enum EdgePolicy {
    /// Trailing partial tiles are skipped and stay transparent black.
    #[default]
    Crop,
    /// Trailing partial tiles are aggregated as smaller groups.
    Partial,
}

impl EdgePolicy {
    /// The token accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            EdgePolicy::Crop => "crop",
            EdgePolicy::Partial => "partial",
        }
    }
}

impl fmt::Display for EdgePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EdgePolicy {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "crop" => Ok(EdgePolicy::Crop),
            "partial" => Ok(EdgePolicy::Partial),
            _ => Err(FilterError::InvalidOption {
                option: "edges",
                value: s.to_string(),
            }),
        }
    }
}

/// Configuration for [`filter_rows`](super::filter_rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowFilterConfig {
    /// Statistic computed per row
    pub mode: AggregationMode,
    /// Protection band
    pub mask: LuminanceMask,
}

/// Default checkerbox tile edge length in pixels.
pub const DEFAULT_TILE_SIZE: usize = 100;

/// Configuration for [`filter_checkerbox`](super::filter_checkerbox).
///
/// # Defaults
///
/// - mode: average
/// - mask: disabled
/// - size: 100
/// - divisor: group size
/// - edges: crop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckerboxFilterConfig {
    /// Statistic computed per tile
    pub mode: AggregationMode,
    /// Protection band
    pub mask: LuminanceMask,
    /// Tile edge length in pixels
    pub size: usize,
    /// Denominator for averages
    pub divisor: AverageDivisor,
    /// Handling of trailing partial tiles
    pub edges: EdgePolicy,
}

impl Default for CheckerboxFilterConfig {
    fn default() -> Self {
        Self {
            mode: AggregationMode::default(),
            mask: LuminanceMask::default(),
            size: DEFAULT_TILE_SIZE,
            divisor: AverageDivisor::default(),
            edges: EdgePolicy::default(),
        }
    }
}
