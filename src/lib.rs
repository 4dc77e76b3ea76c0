//! Groupfilter - pixel-group image filter
//!
//! Replaces image rows or checkerbox tiles with their average, minimum,
//! maximum or per-channel sorted values, leaving pixels outside a
//! luminance band untouched. This library exposes modules for integration
//! testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
