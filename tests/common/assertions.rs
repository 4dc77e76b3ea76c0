//! Assertion helpers for tests.

use pixel_groups::{PixelGrid, Rgba};
use std::path::Path;

/// Assert `path` holds a PNG and decode it.
pub fn read_png(path: &Path) -> PixelGrid {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected output at {}: {}", path.display(), e));
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
    groupfilter::rendering::decode_bytes(&bytes, path).expect("Output should decode")
}

/// Assert every pixel in the half-open rectangle equals `expected`.
pub fn assert_region(
    grid: &PixelGrid,
    xs: std::ops::Range<usize>,
    ys: std::ops::Range<usize>,
    expected: Rgba,
) {
    for y in ys {
        for x in xs.clone() {
            assert_eq!(
                grid.get(x, y),
                Some(expected),
                "Unexpected pixel at ({}, {})",
                x,
                y
            );
        }
    }
}

/// Assert every pixel of `grid` is fully opaque.
pub fn assert_opaque(grid: &PixelGrid) {
    if let Some(pixel) = grid.pixels().find(|p| p.rgba.a != 255) {
        panic!(
            "Expected opaque output, pixel ({}, {}) has alpha {}",
            pixel.x, pixel.y, pixel.rgba.a
        );
    }
}
