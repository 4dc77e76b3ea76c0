use pixel_groups::PixelGrid;
use std::path::PathBuf;

use crate::error::AppError;
use crate::models::{FilterJob, FilterKind};
use crate::rendering::{decode, encode_png, optimize_png, write_atomic};
use crate::services::output_namer::output_path;

/// Result of a completed filter run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Where the PNG was written
    pub output: PathBuf,
    pub width: usize,
    pub height: usize,
}

/// Apply the job's filter to an already decoded grid.
pub fn filter_grid(job: &FilterJob, grid: &PixelGrid) -> Result<PixelGrid, AppError> {
    let filter = job.filter();
    let filtered = match job.kind {
        FilterKind::Row => filter.rows(grid)?,
        FilterKind::Checkerbox { .. } => filter.checkerbox(grid)?,
    };
    Ok(filtered)
}

/// Run `job` end to end: decode, filter, encode, write.
///
/// Nothing is written unless every earlier stage succeeded.
pub fn run(job: &FilterJob) -> Result<FilterOutcome, AppError> {
    let span = tracing::info_span!("filter", source = %job.source.display(), mode = %job.mode);
    let _guard = span.enter();

    let grid = decode(&job.source)?;
    tracing::info!(
        width = grid.width(),
        height = grid.height(),
        "Loaded source image"
    );

    let filtered = filter_grid(job, &grid)?;
    tracing::debug!(kind = ?job.kind, mask = ?job.mask, "Filter applied");

    let mut png_bytes = encode_png(&filtered)?;
    if job.optimize {
        png_bytes = optimize_png(png_bytes);
    }

    let output = output_path(job);
    write_atomic(&output, &png_bytes)?;
    tracing::info!(
        output = %output.display(),
        bytes = png_bytes.len(),
        "Wrote filtered image"
    );

    Ok(FilterOutcome {
        output,
        width: filtered.width(),
        height: filtered.height(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixel_groups::{
        AggregationMode, AverageDivisor, EdgePolicy, FilterError, LuminanceMask, Rgba,
    };

    fn job(kind: FilterKind) -> FilterJob {
        FilterJob {
            source: PathBuf::from("unused.png"),
            output: None,
            mode: AggregationMode::Average,
            mask: LuminanceMask::default(),
            kind,
            optimize: false,
        }
    }

    fn gray(values: &[u8], width: usize) -> PixelGrid {
        let samples = values.iter().map(|&v| Rgba::opaque(v, v, v)).collect();
        PixelGrid::new(width, values.len() / width, samples).unwrap()
    }

    #[test]
    fn test_filter_grid_rows() {
        let out = filter_grid(&job(FilterKind::Row), &gray(&[10, 20, 30, 40], 2)).unwrap();
        assert_eq!(out.get(1, 0), Some(Rgba::opaque(15, 15, 15)));
        assert_eq!(out.get(0, 1), Some(Rgba::opaque(35, 35, 35)));
    }

    #[test]
    fn test_filter_grid_checkerbox() {
        let kind = FilterKind::Checkerbox {
            size: 2,
            divisor: AverageDivisor::GroupSize,
            edges: EdgePolicy::Crop,
        };
        let out = filter_grid(&job(kind), &gray(&[10, 20, 30, 40], 2)).unwrap();
        assert!(out.samples().iter().all(|&p| p == Rgba::opaque(25, 25, 25)));
    }

    #[test]
    fn test_filter_grid_tile_too_large() {
        let kind = FilterKind::Checkerbox {
            size: 3,
            divisor: AverageDivisor::GroupSize,
            edges: EdgePolicy::Crop,
        };
        let err = filter_grid(&job(kind), &gray(&[10, 20, 30, 40], 2)).unwrap_err();
        assert!(matches!(
            err,
            AppError::Filter(FilterError::TileExceedsImage { size: 3, .. })
        ));
    }
}
