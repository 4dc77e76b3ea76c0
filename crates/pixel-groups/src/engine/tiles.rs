//! Checkerbox tile layout.

use super::options::EdgePolicy;
use crate::api::FilterError;

/// One square (or, at a trailing edge, rectangular) tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Tile row, counted from the top
    pub row: usize,
    /// Tile column, counted from the left
    pub col: usize,
    /// Left edge in pixels
    pub x: usize,
    /// Top edge in pixels
    pub y: usize,
    /// Width in pixels (`size`, or less for a partial tile)
    pub width: usize,
    /// Height in pixels (`size`, or less for a partial tile)
    pub height: usize,
}

/// Partition of an image into tiles of edge length `size`.
///
/// With [`EdgePolicy::Crop`] only full tiles exist: `height / size` rows by
/// `width / size` columns. With [`EdgePolicy::Partial`] the remainders form an
/// extra row and column of smaller tiles.
///
/// # Example
///
/// ```
/// use pixel_groups::{EdgePolicy, TileLayout};
///
/// let layout = TileLayout::new(105, 105, 100, EdgePolicy::Crop).unwrap();
/// assert_eq!((layout.rows(), layout.cols()), (1, 1));
/// assert_eq!((layout.covered_width(), layout.covered_height()), (100, 100));
///
/// let layout = TileLayout::new(105, 105, 100, EdgePolicy::Partial).unwrap();
/// assert_eq!(layout.tiles().count(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayout {
    width: usize,
    height: usize,
    size: usize,
    rows: usize,
    cols: usize,
}

impl TileLayout {
    /// Lay out tiles over a `width` x `height` image.
    ///
    /// Fails with [`FilterError::ZeroTileSize`] for `size == 0`, and with
    /// [`FilterError::TileExceedsImage`] when cropping would leave no full
    /// tile at all.
    pub fn new(
        width: usize,
        height: usize,
        size: usize,
        edges: EdgePolicy,
    ) -> Result<Self, FilterError> {
        if size == 0 {
            return Err(FilterError::ZeroTileSize);
        }
        let (rows, cols) = match edges {
            EdgePolicy::Crop => {
                if size > width || size > height {
                    return Err(FilterError::TileExceedsImage {
                        size,
                        width,
                        height,
                    });
                }
                (height / size, width / size)
            }
            EdgePolicy::Partial => (height.div_ceil(size), width.div_ceil(size)),
        };
        Ok(Self {
            width,
            height,
            size,
            rows,
            cols,
        })
    }

    /// Number of tile rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of tile columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Width of the region covered by tiles.
    #[inline]
    pub fn covered_width(&self) -> usize {
        (self.cols * self.size).min(self.width)
    }

    /// Height of the region covered by tiles.
    #[inline]
    pub fn covered_height(&self) -> usize {
        (self.rows * self.size).min(self.height)
    }

    /// Tiles in row-major order: tile row outer, tile column inner.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.cols).map(move |col| {
                let x = col * self.size;
                let y = row * self.size;
                Tile {
                    row,
                    col,
                    x,
                    y,
                    width: self.size.min(self.width - x),
                    height: self.size.min(self.height - y),
                }
            })
        })
    }
}
