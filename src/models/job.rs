use pixel_groups::{
    AggregationMode, AverageDivisor, EdgePolicy, FilterError, GroupFilter, LuminanceMask,
    DEFAULT_TILE_SIZE,
};
use std::path::PathBuf;

use super::config::AppConfig;

/// Which engine a job runs, with its engine-specific options resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// One group per image row
    Row,
    /// One group per square tile
    Checkerbox {
        size: usize,
        divisor: AverageDivisor,
        edges: EdgePolicy,
    },
}

/// A fully resolved filter run.
///
/// Built once from command-line input and config, then passed by reference
/// through decoding, filtering, naming and encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterJob {
    pub source: PathBuf,
    pub output: Option<PathBuf>,
    pub mode: AggregationMode,
    pub mask: LuminanceMask,
    pub kind: FilterKind,
    pub optimize: bool,
}

impl FilterJob {
    /// The core-library filter configured for this job.
    pub fn filter(&self) -> GroupFilter {
        let filter = GroupFilter::new(self.mode).mask(self.mask);
        match self.kind {
            FilterKind::Row => filter,
            FilterKind::Checkerbox {
                size,
                divisor,
                edges,
            } => filter
                .tile_size(size)
                .average_divisor(divisor)
                .edge_policy(edges),
        }
    }
}

/// Engine selection as given on the command line; unset options fall back
/// to the config file, then to built-in defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindRequest {
    Row,
    Checkerbox {
        size: Option<usize>,
        divisor: Option<AverageDivisor>,
        edges: Option<EdgePolicy>,
    },
}

/// Unresolved job, straight from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRequest {
    pub source: PathBuf,
    pub output: Option<PathBuf>,
    pub shadow: Option<u8>,
    pub highlight: Option<u8>,
    /// Raw mode token, validated by [`resolve`](Self::resolve)
    pub mode: String,
    pub optimize: bool,
    pub kind: KindRequest,
}

impl JobRequest {
    /// Merge with `config` and validate everything that does not need the
    /// decoded image.
    ///
    /// Unknown modes and a zero tile size fail here, before the source file
    /// is opened.
    pub fn resolve(self, config: &AppConfig) -> Result<FilterJob, FilterError> {
        let mode: AggregationMode = self.mode.parse()?;
        let mask = LuminanceMask::new(
            self.shadow.or(config.shadow).unwrap_or(0),
            self.highlight.or(config.highlight).unwrap_or(255),
        );

        let kind = match self.kind {
            KindRequest::Row => FilterKind::Row,
            KindRequest::Checkerbox {
                size,
                divisor,
                edges,
            } => {
                let size = size
                    .or(config.checkerbox.size)
                    .unwrap_or(DEFAULT_TILE_SIZE);
                if size == 0 {
                    return Err(FilterError::ZeroTileSize);
                }
                FilterKind::Checkerbox {
                    size,
                    divisor: divisor.or(config.checkerbox.divisor).unwrap_or_default(),
                    edges: edges.or(config.checkerbox.edges).unwrap_or_default(),
                }
            }
        };

        Ok(FilterJob {
            source: self.source,
            output: self.output,
            mode,
            mask,
            kind,
            optimize: self.optimize || config.optimize.unwrap_or(false),
        })
    }
}
