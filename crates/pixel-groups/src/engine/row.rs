//! Row engine: every image row is one group.

use super::group::Group;
use super::options::RowFilterConfig;
use super::reconstruct;
use crate::aggregate::{aggregate, ReinsertOrder};
use crate::api::FilterError;
use crate::grid::PixelGrid;

/// Replace every row with its statistic.
///
/// Averages divide by the row length (the image width). In sort mode each
/// pixel receives the sorted entry at its own x position; a protected pixel
/// keeps its color and the entry at its slot is dropped.
///
/// # Example
///
/// ```
/// use pixel_groups::{filter_rows, AggregationMode, PixelGrid, RowFilterConfig, Rgba};
///
/// let grid = PixelGrid::new(
///     2,
///     1,
///     vec![Rgba::opaque(10, 10, 10), Rgba::opaque(20, 20, 20)],
/// )
/// .unwrap();
/// let config = RowFilterConfig {
///     mode: AggregationMode::Average,
///     ..Default::default()
/// };
///
/// let out = filter_rows(&grid, config).unwrap();
/// assert_eq!(out.get(0, 0), Some(Rgba::opaque(15, 15, 15)));
/// assert_eq!(out.get(1, 0), Some(Rgba::opaque(15, 15, 15)));
/// ```
pub fn filter_rows(source: &PixelGrid, config: RowFilterConfig) -> Result<PixelGrid, FilterError> {
    let mut output = PixelGrid::transparent(source.width(), source.height())?;

    for y in 0..source.height() {
        let group = Group::row(source, y);
        let result = aggregate(&group.samples(), config.mode, source.width())?;
        reconstruct(
            &group,
            &result,
            &config.mask,
            ReinsertOrder::Slot,
            &mut output,
        );
    }

    Ok(output)
}
