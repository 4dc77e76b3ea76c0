//! Group aggregation.
//!
//! [`aggregate()`] reduces one group of samples to an [`AggregateResult`]:
//! a single color for [`AggregationMode::Average`], [`Minimum`] and
//! [`Maximum`], or per-channel sorted sequences for
//! [`AggregationMode::SortedRemap`].
//!
//! The mode is matched once per group; the reconstruction pass then only
//! distinguishes between a uniform fill and a sorted reinsertion.
//!
//! [`Minimum`]: AggregationMode::Minimum
//! [`Maximum`]: AggregationMode::Maximum

mod sorted;

pub use sorted::{ReinsertOrder, SortCursor, SortedChannels};

use std::fmt;
use std::str::FromStr;

use crate::api::FilterError;
use crate::grid::{Rgb, Rgba};

/// The statistic computed per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum AggregationMode {
    /// Truncated per-channel mean (`avg`).
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "avg"))]
    Average,
    /// Per-channel minimum (`min`).
    #[cfg_attr(feature = "serde", serde(rename = "min"))]
    Minimum,
    /// Per-channel maximum (`max`).
    #[cfg_attr(feature = "serde", serde(rename = "max"))]
    Maximum,
    /// Per-channel ascending sort, reinserted in traversal order (`sort`).
    #[cfg_attr(feature = "serde", serde(rename = "sort"))]
    SortedRemap,
}

impl AggregationMode {
    /// All modes, in command-line order.
    pub const ALL: [AggregationMode; 4] = [
        AggregationMode::Average,
        AggregationMode::Minimum,
        AggregationMode::Maximum,
        AggregationMode::SortedRemap,
    ];

    /// The short token used on the command line and in output file names.
    pub fn as_str(self) -> &'static str {
        match self {
            AggregationMode::Average => "avg",
            AggregationMode::Minimum => "min",
            AggregationMode::Maximum => "max",
            AggregationMode::SortedRemap => "sort",
        }
    }
}

impl fmt::Display for AggregationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AggregationMode {
    type Err = FilterError;

    /// Parse `avg`, `min`, `max` or `sort`. Matching is exact.
    ///
    /// # Example
    /// ```
    /// use pixel_groups::AggregationMode;
    /// let mode: AggregationMode = "sort".parse().unwrap();
    /// assert_eq!(mode, AggregationMode::SortedRemap);
    /// assert!("median".parse::<AggregationMode>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AggregationMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| FilterError::InvalidMode(s.to_string()))
    }
}

/// Denominator used by [`AggregationMode::Average`].
///
/// For row groups both conventions coincide. For checkerbox tiles
/// [`ImageWidth`](Self::ImageWidth) reproduces the historical behavior of
/// dividing a tile sum by the image width, which is almost certainly a defect:
/// it over-brightens (and wraps) whenever a tile holds more samples than a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "kebab-case")
)]
pub enum AverageDivisor {
    /// Divide by the number of samples in the group.
    #[default]
    GroupSize,
    /// Divide by the width of the whole image.
    ImageWidth,
}

impl AverageDivisor {
    /// The token accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            AverageDivisor::GroupSize => "group-size",
            AverageDivisor::ImageWidth => "image-width",
        }
    }

    /// Resolve to a number for a group of `group_len` samples.
    #[inline]
    pub fn resolve(self, group_len: usize, image_width: usize) -> usize {
        match self {
            AverageDivisor::GroupSize => group_len,
            AverageDivisor::ImageWidth => image_width,
        }
    }
}

impl fmt::Display for AverageDivisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AverageDivisor {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "group-size" => Ok(AverageDivisor::GroupSize),
            "image-width" => Ok(AverageDivisor::ImageWidth),
            _ => Err(FilterError::InvalidOption {
                option: "divisor",
                value: s.to_string(),
            }),
        }
    }
}

/// Outcome of aggregating one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AggregateResult {
    /// Every unmasked pixel of the group receives this color.
    Uniform(Rgb),
    /// Unmasked pixels receive successive entries of these sequences.
    Sorted(SortedChannels),
}

/// Aggregate one group of samples.
///
/// `divisor` is only consulted for [`AggregationMode::Average`]; per-channel
/// sums are accumulated in `u64` and the quotient is truncated to 8 bits, so
/// a divisor smaller than the group size wraps modulo 256.
///
/// Fails with [`FilterError::EmptyGroup`] on an empty group and with
/// [`FilterError::DivisionByZero`] when averaging with a zero divisor.
pub fn aggregate(
    samples: &[Rgba],
    mode: AggregationMode,
    divisor: usize,
) -> Result<AggregateResult, FilterError> {
    if samples.is_empty() {
        return Err(FilterError::EmptyGroup);
    }

    let result = match mode {
        AggregationMode::Average => {
            if divisor == 0 {
                return Err(FilterError::DivisionByZero);
            }
            let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
            for px in samples {
                r += px.r as u64;
                g += px.g as u64;
                b += px.b as u64;
            }
            let d = divisor as u64;
            AggregateResult::Uniform(Rgb::new((r / d) as u8, (g / d) as u8, (b / d) as u8))
        }
        AggregationMode::Minimum => AggregateResult::Uniform(reduce(samples, u8::min)),
        AggregationMode::Maximum => AggregateResult::Uniform(reduce(samples, u8::max)),
        AggregationMode::SortedRemap => {
            AggregateResult::Sorted(SortedChannels::from_samples(samples))
        }
    };
    Ok(result)
}

/// Fold every channel with `pick`, seeded from the first sample.
fn reduce(samples: &[Rgba], pick: fn(u8, u8) -> u8) -> Rgb {
    let first = samples[0];
    samples[1..]
        .iter()
        .fold(first.rgb(), |acc, px| {
            Rgb::new(pick(acc.r, px.r), pick(acc.g, px.g), pick(acc.b, px.b))
        })
}
