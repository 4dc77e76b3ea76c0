//! Test fixtures: source images written into a throwaway directory.

use groupfilter::models::{FilterJob, FilterKind};
use pixel_groups::{AggregationMode, AverageDivisor, EdgePolicy, LuminanceMask, Rgba};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary directory holding source images and filter output
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write an RGBA PNG whose pixels come from `pixel(x, y)`.
    pub fn write_png(
        &self,
        name: &str,
        width: u32,
        height: u32,
        pixel: impl Fn(u32, u32) -> Rgba,
    ) -> PathBuf {
        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&pixel(x, y).to_bytes());
            }
        }

        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, width, height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().expect("PNG header");
            writer.write_image_data(&data).expect("PNG data");
        }

        let path = self.join(name);
        std::fs::write(&path, buf).expect("Failed to write fixture");
        path
    }

    /// Write a solid-colour RGB JPEG.
    pub fn write_jpeg(&self, name: &str, width: u32, height: u32, rgb: [u8; 3]) -> PathBuf {
        let path = self.join(name);
        image::RgbImage::from_pixel(width, height, image::Rgb(rgb))
            .save(&path)
            .expect("Failed to write JPEG fixture");
        path
    }

    /// Names of all files currently in the workspace, sorted.
    pub fn file_names(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.path())
            .expect("read_dir")
            .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// Grey ramp: value depends on x only, so every row is identical.
pub fn horizontal_ramp(x: u32, _y: u32) -> Rgba {
    let v = (x * 10 % 256) as u8;
    Rgba::opaque(v, v, v)
}

/// Deterministic colourful noise.
pub fn noise(x: u32, y: u32) -> Rgba {
    let h = x.wrapping_mul(73_856_093) ^ y.wrapping_mul(19_349_663);
    let h = h ^ (h >> 13);
    Rgba::opaque(h as u8, (h >> 8) as u8, (h >> 16) as u8)
}

/// Job with masking disabled and no explicit output.
pub fn job(source: PathBuf, mode: AggregationMode, kind: FilterKind) -> FilterJob {
    FilterJob {
        source,
        output: None,
        mode,
        mask: LuminanceMask::default(),
        kind,
        optimize: false,
    }
}

pub fn checkerbox(size: usize) -> FilterKind {
    FilterKind::Checkerbox {
        size,
        divisor: AverageDivisor::GroupSize,
        edges: EdgePolicy::Crop,
    }
}
