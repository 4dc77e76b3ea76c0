//! Row and checkerbox filter engines.
//!
//! Both engines run the same two passes per group:
//!
//! 1. Collect the group and [`aggregate`](crate::aggregate()) it.
//! 2. Re-scan the group in the same order and write the output grid:
//!    protected pixels keep their original color, the others receive the
//!    uniform statistic or the next sorted entry.
//!
//! Output alpha is always 255. The output grid starts transparent black, so
//! coordinates that belong to no group stay `(0, 0, 0, 0)`.
//!
//! Groups are disjoint, and each one writes only its own coordinates.

mod checkerbox;
mod group;
mod options;
mod row;
mod tiles;

pub use checkerbox::filter_checkerbox;
pub use group::Group;
pub use options::{CheckerboxFilterConfig, EdgePolicy, RowFilterConfig, DEFAULT_TILE_SIZE};
pub use row::filter_rows;
pub use tiles::{Tile, TileLayout};

use crate::aggregate::{AggregateResult, ReinsertOrder, SortCursor};
use crate::grid::PixelGrid;
use crate::mask::LuminanceMask;

/// Second pass: write one aggregated group into `output`.
fn reconstruct(
    group: &Group,
    result: &AggregateResult,
    mask: &LuminanceMask,
    order: ReinsertOrder,
    output: &mut PixelGrid,
) {
    match result {
        AggregateResult::Uniform(color) => {
            let fill = color.opaque();
            for px in group.pixels() {
                let value = if mask.is_protected(px.rgba) {
                    px.rgba.to_opaque()
                } else {
                    fill
                };
                output.set(px.x, px.y, value);
            }
        }
        AggregateResult::Sorted(sorted) => {
            let mut cursor = SortCursor::new(sorted, order);
            for px in group.pixels() {
                if mask.is_protected(px.rgba) {
                    cursor.skip_masked();
                    output.set(px.x, px.y, px.rgba.to_opaque());
                } else {
                    output.set(px.x, px.y, cursor.take().opaque());
                }
            }
        }
    }
}
