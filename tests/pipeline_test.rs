//! End-to-end runs: source file in, filtered PNG out.

mod common;

use groupfilter::error::{AppError, CodecError};
use groupfilter::models::{AppConfig, FilterKind, JobRequest, KindRequest};
use groupfilter::services;
use pixel_groups::{AggregationMode, AverageDivisor, EdgePolicy, FilterError, LuminanceMask, Rgba};
use pretty_assertions::assert_eq;

use common::fixtures::{checkerbox, horizontal_ramp, job, noise};
use common::{assert_opaque, assert_region, read_png, Workspace};

#[test]
fn test_row_average_with_default_name() {
    let ws = Workspace::new();
    let source = ws.write_png("ramp.png", 10, 3, horizontal_ramp);

    let outcome = services::run(&job(source, AggregationMode::Average, FilterKind::Row)).unwrap();

    assert_eq!(outcome.output, ws.join("ramp-row-avg-high-255-low-0.png"));
    assert_eq!((outcome.width, outcome.height), (10, 3));
    assert_eq!(
        ws.file_names(),
        vec!["ramp-row-avg-high-255-low-0.png", "ramp.png"]
    );

    // mean of 0, 10, ..., 90
    let grid = read_png(&outcome.output);
    assert_region(&grid, 0..10, 0..3, Rgba::opaque(45, 45, 45));
}

#[test]
fn test_checkerbox_crop_leaves_transparent_border() {
    let ws = Workspace::new();
    let source = ws.write_png("noise.png", 5, 5, noise);

    let outcome = services::run(&job(source, AggregationMode::Average, checkerbox(2))).unwrap();
    assert_eq!(
        outcome.output,
        ws.join("noise-checker-2-avg-high-255-low-0.png")
    );

    let grid = read_png(&outcome.output);
    assert_eq!((grid.width(), grid.height()), (5, 5));
    assert_region(&grid, 4..5, 0..5, Rgba::TRANSPARENT);
    assert_region(&grid, 0..5, 4..5, Rgba::TRANSPARENT);

    for (tx, ty) in [(0u32, 0u32), (2, 0), (0, 2), (2, 2)] {
        let mut sum = [0u32; 3];
        for y in ty..ty + 2 {
            for x in tx..tx + 2 {
                let p = noise(x, y);
                sum[0] += p.r as u32;
                sum[1] += p.g as u32;
                sum[2] += p.b as u32;
            }
        }
        let expected = Rgba::opaque((sum[0] / 4) as u8, (sum[1] / 4) as u8, (sum[2] / 4) as u8);
        let (x, y) = (tx as usize, ty as usize);
        assert_region(&grid, x..x + 2, y..y + 2, expected);
    }
}

#[test]
fn test_checkerbox_partial_edges_cover_everything() {
    let ws = Workspace::new();
    let source = ws.write_png("noise.png", 5, 5, noise);
    let kind = FilterKind::Checkerbox {
        size: 2,
        divisor: AverageDivisor::GroupSize,
        edges: EdgePolicy::Partial,
    };

    let outcome = services::run(&job(source, AggregationMode::Maximum, kind)).unwrap();
    assert_eq!(
        outcome.output,
        ws.join("noise-checker-2-max-high-255-low-0-partial.png")
    );
    let grid = read_png(&outcome.output);
    assert_opaque(&grid);

    // bottom-right corner is a 1x1 tile
    let corner = noise(4, 4);
    assert_eq!(grid.get(4, 4), Some(corner));
}

#[test]
fn test_tile_larger_than_image_is_rejected() {
    let ws = Workspace::new();
    let source = ws.write_png("small.png", 4, 4, noise);

    let err = services::run(&job(source, AggregationMode::Average, checkerbox(100))).unwrap_err();
    assert!(matches!(
        err,
        AppError::Filter(FilterError::TileExceedsImage {
            size: 100,
            width: 4,
            height: 4
        })
    ));
    assert_eq!(ws.file_names(), vec!["small.png"]);
}

#[test]
fn test_luminance_mask_protects_dark_pixels() {
    let ws = Workspace::new();
    let values = [0u8, 100, 200];
    let source = ws.write_png("band.png", 3, 1, |x, _| {
        let v = values[x as usize];
        Rgba::opaque(v, v, v)
    });
    let mut job = job(source, AggregationMode::Average, FilterKind::Row);
    job.mask = LuminanceMask::new(50, 255);

    let outcome = services::run(&job).unwrap();
    assert_eq!(outcome.output, ws.join("band-row-avg-high-255-low-50.png"));

    // protected samples still feed the average
    let grid = read_png(&outcome.output);
    assert_eq!(grid.get(0, 0), Some(Rgba::opaque(0, 0, 0)));
    assert_region(&grid, 1..3, 0..1, Rgba::opaque(100, 100, 100));
}

#[test]
fn test_row_sort_permutes_each_row() {
    let ws = Workspace::new();
    let source = ws.write_png("noise.png", 7, 4, noise);

    let outcome = services::run(&job(
        source,
        AggregationMode::SortedRemap,
        FilterKind::Row,
    ))
    .unwrap();
    let grid = read_png(&outcome.output);

    for y in 0..4 {
        let mut expected: Vec<u8> = (0..7).map(|x| noise(x, y).r).collect();
        expected.sort_unstable();
        let actual: Vec<u8> = grid.row(y as usize).iter().map(|p| p.r).collect();
        assert_eq!(actual, expected, "row {} red channel", y);
    }
}

#[test]
fn test_invalid_mode_rejected_before_decoding() {
    let ws = Workspace::new();
    let request = JobRequest {
        source: ws.join("does-not-exist.png"),
        output: None,
        shadow: None,
        highlight: None,
        mode: "median".to_string(),
        optimize: false,
        kind: KindRequest::Row,
    };

    let err = request.resolve(&AppConfig::default()).unwrap_err();
    assert_eq!(err, FilterError::InvalidMode("median".to_string()));
    assert!(ws.file_names().is_empty());
}

#[test]
fn test_missing_source_writes_nothing() {
    let ws = Workspace::new();
    let err = services::run(&job(
        ws.join("missing.png"),
        AggregationMode::Average,
        FilterKind::Row,
    ))
    .unwrap_err();

    assert!(matches!(err, AppError::Codec(CodecError::Open { .. })));
    assert!(ws.file_names().is_empty());
}

#[test]
fn test_undecodable_source_writes_nothing() {
    let ws = Workspace::new();
    let source = ws.join("broken.png");
    std::fs::write(&source, b"\x89PNG\r\n\x1a\ntruncated").unwrap();

    let err = services::run(&job(source, AggregationMode::Average, FilterKind::Row)).unwrap_err();
    assert!(matches!(err, AppError::Codec(CodecError::Decode { .. })));
    assert_eq!(ws.file_names(), vec!["broken.png"]);
}

#[test]
fn test_unwritable_output_is_reported() {
    let ws = Workspace::new();
    let source = ws.write_png("ramp.png", 4, 2, horizontal_ramp);
    let mut job = job(source, AggregationMode::Minimum, FilterKind::Row);
    job.output = Some(ws.join("no-such-dir").join("out.png"));

    let err = services::run(&job).unwrap_err();
    assert!(matches!(err, AppError::Codec(CodecError::Write { .. })));
    assert_eq!(ws.file_names(), vec!["ramp.png"]);
}

#[test]
fn test_explicit_output_replaces_existing_file() {
    let ws = Workspace::new();
    let source = ws.write_png("ramp.png", 4, 2, horizontal_ramp);
    let target = ws.join("result.png");
    std::fs::write(&target, b"stale").unwrap();

    let mut job = job(source, AggregationMode::Minimum, FilterKind::Row);
    job.output = Some(target.clone());
    let outcome = services::run(&job).unwrap();

    assert_eq!(outcome.output, target);
    let grid = read_png(&target);
    assert_region(&grid, 0..4, 0..2, Rgba::opaque(0, 0, 0));
}

#[test]
fn test_jpeg_source() {
    let ws = Workspace::new();
    let source = ws.write_jpeg("flat.jpg", 8, 4, [120, 120, 120]);

    let outcome = services::run(&job(source, AggregationMode::Maximum, FilterKind::Row)).unwrap();
    assert_eq!(outcome.output, ws.join("flat-row-max-high-255-low-0.png"));

    let grid = read_png(&outcome.output);
    assert_eq!((grid.width(), grid.height()), (8, 4));
    assert_opaque(&grid);
    for y in 0..4 {
        let row = grid.row(y);
        assert!(row.iter().all(|&p| p == row[0]), "row {} is not uniform", y);
    }
}

#[test]
fn test_optimized_output_has_same_pixels() {
    let ws = Workspace::new();
    let source = ws.write_png("noise.png", 6, 6, noise);

    let mut plain = job(source.clone(), AggregationMode::Average, checkerbox(4));
    plain.output = Some(ws.join("plain.png"));
    let mut optimized = job(source, AggregationMode::Average, checkerbox(4));
    optimized.output = Some(ws.join("optimized.png"));
    optimized.optimize = true;

    services::run(&plain).unwrap();
    services::run(&optimized).unwrap();

    assert_eq!(
        read_png(&ws.join("plain.png")),
        read_png(&ws.join("optimized.png"))
    );
}

#[test]
fn test_request_resolution_feeds_pipeline() {
    let ws = Workspace::new();
    let source = ws.write_png("ramp.png", 10, 10, horizontal_ramp);
    let config_path = ws.join("groupfilter.yaml");
    std::fs::write(&config_path, "checkerbox:\n  size: 5\n").unwrap();

    let config = AppConfig::load(&config_path).unwrap();
    let request = JobRequest {
        source,
        output: None,
        shadow: None,
        highlight: Some(250),
        mode: "min".to_string(),
        optimize: false,
        kind: KindRequest::Checkerbox {
            size: None,
            divisor: None,
            edges: None,
        },
    };
    let job = request.resolve(&config).unwrap();
    let outcome = services::run(&job).unwrap();

    assert_eq!(
        outcome.output,
        ws.join("ramp-checker-5-min-high-250-low-0.png")
    );
    let grid = read_png(&outcome.output);
    assert_region(&grid, 0..5, 0..10, Rgba::opaque(0, 0, 0));
    assert_region(&grid, 5..10, 0..10, Rgba::opaque(50, 50, 50));
}
