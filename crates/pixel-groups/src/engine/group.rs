//! Groups: the unit of aggregation.

use super::tiles::Tile;
use crate::grid::{Pixel, PixelGrid, Rgba};

/// An ordered sequence of source pixels.
///
/// The order is the visitation order of both engine passes, which matters
/// for sorted reinsertion.
#[derive(Debug, Clone)]
pub struct Group {
    pixels: Vec<Pixel>,
}

impl Group {
    /// All pixels of row `y`, in ascending x.
    pub fn row(grid: &PixelGrid, y: usize) -> Self {
        let pixels = grid
            .row(y)
            .iter()
            .enumerate()
            .map(|(x, &rgba)| Pixel { x, y, rgba })
            .collect();
        Self { pixels }
    }

    /// All pixels of `tile`, x outer loop and y inner loop.
    pub fn tile(grid: &PixelGrid, tile: &Tile) -> Self {
        let mut pixels = Vec::with_capacity(tile.width * tile.height);
        for x in tile.x..tile.x + tile.width {
            for y in tile.y..tile.y + tile.height {
                let start = y * grid.width();
                pixels.push(Pixel {
                    x,
                    y,
                    rgba: grid.samples()[start + x],
                });
            }
        }
        Self { pixels }
    }

    /// The pixels in visitation order.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Whether the group holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// The samples alone, in visitation order.
    pub fn samples(&self) -> Vec<Rgba> {
        self.pixels.iter().map(|px| px.rgba).collect()
    }
}
