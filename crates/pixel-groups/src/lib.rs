//! pixel-groups: row and checkerbox group filters for raster images
//!
//! This library replaces groups of pixels with a statistic computed over the
//! group (average, minimum, maximum, or a per-channel sorted remap), while
//! leaving pixels outside a luminance band untouched.
//!
//! # Quick Start
//!
//! The [`GroupFilter`] builder is the primary entry point:
//!
//! ```
//! use pixel_groups::{AggregationMode, GroupFilter, PixelGrid, Rgba};
//!
//! let grid = PixelGrid::new(
//!     2,
//!     2,
//!     vec![
//!         Rgba::opaque(10, 10, 10),
//!         Rgba::opaque(20, 20, 20),
//!         Rgba::opaque(30, 30, 30),
//!         Rgba::opaque(40, 40, 40),
//!     ],
//! )
//! .unwrap();
//!
//! let out = GroupFilter::new(AggregationMode::Average).rows(&grid).unwrap();
//!
//! assert_eq!(out.get(1, 0), Some(Rgba::opaque(15, 15, 15)));
//! assert_eq!(out.get(0, 1), Some(Rgba::opaque(35, 35, 35)));
//! ```
//!
//! # Groups
//!
//! - **Rows**: every image row is one group ([`filter_rows`]).
//! - **Checkerbox**: the image is cut into `size` x `size` tiles visited
//!   row-major ([`filter_checkerbox`]). Inside a tile pixels are visited
//!   column by column (x outer, y inner).
//!
//! # Luminance Mask
//!
//! [`LuminanceMask`] computes the JFIF luma of each source pixel. Pixels with
//! luma below the shadow floor or above the highlight ceiling are copied to
//! the output with their original color. The default band `(0, 255)`
//! disables masking.
//!
//! # Output
//!
//! Output grids have the source dimensions. Every written sample is fully
//! opaque. Samples no group covers (trailing checkerbox edges under
//! [`EdgePolicy::Crop`]) stay transparent black.
//!
//! # Sorted Remap
//!
//! In [`AggregationMode::SortedRemap`] each color channel of a group is
//! sorted ascending on its own and handed back out in visitation order. Rows
//! hand entries out by slot ([`ReinsertOrder::Slot`]); tiles hand them to
//! unmasked pixels only ([`ReinsertOrder::Unmasked`]). Without masking both
//! orders give every group a permutation of its original channel values.
//!
//! # Averages
//!
//! Averages are truncated. Row averages divide by the image width, which is
//! also the row length. Tile averages divide by the tile's sample count
//! unless [`AverageDivisor::ImageWidth`] is selected, which reproduces an
//! older behavior that divides tile sums by the image width.

pub mod aggregate;
pub mod api;
pub mod engine;
pub mod grid;
pub mod mask;


pub use aggregate::{
    aggregate, AggregateResult, AggregationMode, AverageDivisor, ReinsertOrder, SortCursor,
    SortedChannels,
};
pub use api::{FilterError, GroupFilter};
pub use engine::{
    filter_checkerbox, filter_rows, CheckerboxFilterConfig, EdgePolicy, Group,
    RowFilterConfig, Tile, TileLayout, DEFAULT_TILE_SIZE,
};
pub use grid::{GridError, Pixel, PixelGrid, Rgb, Rgba};
pub use mask::{luma, LuminanceMask};
