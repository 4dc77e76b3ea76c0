//! Checkerbox engine: the image is cut into square tiles, one group each.

use super::group::Group;
use super::options::CheckerboxFilterConfig;
use super::reconstruct;
use super::tiles::TileLayout;
use crate::aggregate::{aggregate, ReinsertOrder};
use crate::api::FilterError;
use crate::grid::PixelGrid;

/// Replace every tile with its statistic.
///
/// Tiles are visited row-major; inside a tile the x loop is outer and the y
/// loop inner, for both passes. In sort mode the sorted entries are handed
/// out to unmasked pixels in that order.
///
/// The tile layout is validated before any pixel is read; see
/// [`TileLayout::new`] for the failure cases.
///
/// # Example
///
/// ```
/// use pixel_groups::{filter_checkerbox, CheckerboxFilterConfig, PixelGrid, Rgba};
///
/// let grid = PixelGrid::new(3, 2, vec![Rgba::opaque(60, 60, 60); 6]).unwrap();
/// let config = CheckerboxFilterConfig {
///     size: 2,
///     ..Default::default()
/// };
///
/// let out = filter_checkerbox(&grid, config).unwrap();
/// assert_eq!(out.get(1, 1), Some(Rgba::opaque(60, 60, 60)));
/// // column 2 is beyond the last full tile
/// assert_eq!(out.get(2, 0), Some(Rgba::TRANSPARENT));
/// ```
pub fn filter_checkerbox(
    source: &PixelGrid,
    config: CheckerboxFilterConfig,
) -> Result<PixelGrid, FilterError> {
    let layout = TileLayout::new(source.width(), source.height(), config.size, config.edges)?;
    let mut output = PixelGrid::transparent(source.width(), source.height())?;

    for tile in layout.tiles() {
        let group = Group::tile(source, &tile);
        let divisor = config.divisor.resolve(group.len(), source.width());
        let result = aggregate(&group.samples(), config.mode, divisor)?;
        reconstruct(
            &group,
            &result,
            &config.mask,
            ReinsertOrder::Unmasked,
            &mut output,
        );
    }

    Ok(output)
}
