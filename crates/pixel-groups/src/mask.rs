//! Luminance masking.
//!
//! A [`LuminanceMask`] defines a band `[shadow_floor, highlight_ceiling]` of
//! luma values. Pixels whose luma falls outside the band are *protected*: the
//! engines copy them to the output unchanged instead of replacing them with
//! the group statistic.

use crate::grid::Rgba;

/// Luma (the Y of JFIF YCbCr) of an 8-bit RGB triple.
///
/// Fixed-point form of `0.299 R + 0.587 G + 0.114 B` with 16 fractional bits
/// and round-half-up. The coefficients sum to exactly `1 << 16`, so the
/// result always fits in a `u8`.
///
/// # Example
/// ```
/// use pixel_groups::luma;
/// assert_eq!(luma(255, 255, 255), 255);
/// assert_eq!(luma(255, 0, 0), 76);
/// ```
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let y = (19595 * r as u32 + 38470 * g as u32 + 7471 * b as u32 + (1 << 15)) >> 16;
    y as u8
}

/// Shadow/highlight protection band.
///
/// The default band `(0, 255)` protects nothing. `shadow_floor <=
/// highlight_ceiling` is conventional but not enforced: an inverted band
/// protects every pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct LuminanceMask {
    /// Pixels with luma strictly below this are protected.
    pub shadow_floor: u8,
    /// Pixels with luma strictly above this are protected.
    pub highlight_ceiling: u8,
}

impl Default for LuminanceMask {
    fn default() -> Self {
        Self {
            shadow_floor: 0,
            highlight_ceiling: 255,
        }
    }
}

impl LuminanceMask {
    /// Create a mask from its two thresholds.
    #[inline]
    pub fn new(shadow_floor: u8, highlight_ceiling: u8) -> Self {
        Self {
            shadow_floor,
            highlight_ceiling,
        }
    }

    /// Whether this mask can never protect a pixel.
    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.shadow_floor == 0 && self.highlight_ceiling == 255
    }

    /// Whether `pixel` must be copied to the output unchanged.
    ///
    /// Alpha does not participate in the test.
    #[inline]
    pub fn is_protected(&self, pixel: Rgba) -> bool {
        let y = luma(pixel.r, pixel.g, pixel.b);
        y < self.shadow_floor || y > self.highlight_ceiling
    }
}
