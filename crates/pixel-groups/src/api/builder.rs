//! GroupFilter builder -- the ergonomic entry point for the crate.
//!
//! [`GroupFilter`] collects mode, mask and checkerbox options with fluent
//! setters and dispatches to the row or checkerbox engine.

use crate::aggregate::{AggregationMode, AverageDivisor};
use crate::api::FilterError;
use crate::engine::{
    filter_checkerbox, filter_rows, CheckerboxFilterConfig, EdgePolicy, RowFilterConfig,
    DEFAULT_TILE_SIZE,
};
use crate::grid::PixelGrid;
use crate::mask::LuminanceMask;

/// High-level filter builder.
///
/// # Design
///
/// - Constructor requires an [`AggregationMode`] (no unparsed strings)
/// - Configuration methods consume and return `self`
/// - [`rows()`](Self::rows) and [`checkerbox()`](Self::checkerbox) take
///   `&self`, so one builder can filter many images
/// - Tile options are ignored by [`rows()`](Self::rows)
///
/// # Example
///
/// ```
/// use pixel_groups::{AggregationMode, GroupFilter, PixelGrid, Rgba};
///
/// let grid = PixelGrid::new(4, 4, vec![Rgba::opaque(90, 90, 90); 16]).unwrap();
///
/// let filter = GroupFilter::new(AggregationMode::Maximum)
///     .shadow_floor(20)
///     .highlight_ceiling(230)
///     .tile_size(2);
///
/// let rows = filter.rows(&grid).unwrap();
/// let tiles = filter.checkerbox(&grid).unwrap();
///
/// assert_eq!(rows.get(3, 3), Some(Rgba::opaque(90, 90, 90)));
/// assert_eq!(tiles.get(3, 3), Some(Rgba::opaque(90, 90, 90)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupFilter {
    mode: AggregationMode,
    mask: LuminanceMask,
    size: usize,
    divisor: AverageDivisor,
    edges: EdgePolicy,
}

impl GroupFilter {
    /// Create a filter for `mode` with masking disabled and checkerbox
    /// defaults (100 px tiles, group-size divisor, cropped edges).
    pub fn new(mode: AggregationMode) -> Self {
        Self {
            mode,
            mask: LuminanceMask::default(),
            size: DEFAULT_TILE_SIZE,
            divisor: AverageDivisor::default(),
            edges: EdgePolicy::default(),
        }
    }

    /// Parse the mode from its command-line token.
    ///
    /// Fails with [`FilterError::InvalidMode`] before any image is touched.
    pub fn from_mode_str(mode: &str) -> Result<Self, FilterError> {
        Ok(Self::new(mode.parse()?))
    }

    /// Protect pixels with luma below `floor`.
    #[inline]
    pub fn shadow_floor(mut self, floor: u8) -> Self {
        self.mask.shadow_floor = floor;
        self
    }

    /// Protect pixels with luma above `ceiling`.
    #[inline]
    pub fn highlight_ceiling(mut self, ceiling: u8) -> Self {
        self.mask.highlight_ceiling = ceiling;
        self
    }

    /// Replace the whole protection band.
    #[inline]
    pub fn mask(mut self, mask: LuminanceMask) -> Self {
        self.mask = mask;
        self
    }

    /// Set the checkerbox tile edge length.
    #[inline]
    pub fn tile_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the checkerbox average divisor.
    #[inline]
    pub fn average_divisor(mut self, divisor: AverageDivisor) -> Self {
        self.divisor = divisor;
        self
    }

    /// Set the checkerbox trailing-edge policy.
    #[inline]
    pub fn edge_policy(mut self, edges: EdgePolicy) -> Self {
        self.edges = edges;
        self
    }

    /// The configured mode.
    #[inline]
    pub fn mode(&self) -> AggregationMode {
        self.mode
    }

    /// Configuration handed to the row engine.
    pub fn row_config(&self) -> RowFilterConfig {
        RowFilterConfig {
            mode: self.mode,
            mask: self.mask,
        }
    }

    /// Configuration handed to the checkerbox engine.
    pub fn checkerbox_config(&self) -> CheckerboxFilterConfig {
        CheckerboxFilterConfig {
            mode: self.mode,
            mask: self.mask,
            size: self.size,
            divisor: self.divisor,
            edges: self.edges,
        }
    }

    /// Run the row engine.
    pub fn rows(&self, grid: &PixelGrid) -> Result<PixelGrid, FilterError> {
        filter_rows(grid, self.row_config())
    }

    /// Run the checkerbox engine.
    pub fn checkerbox(&self, grid: &PixelGrid) -> Result<PixelGrid, FilterError> {
        filter_checkerbox(grid, self.checkerbox_config())
    }
}
