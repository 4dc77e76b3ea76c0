//! Public API for the pixel-groups crate.
//!
//! This module provides the high-level API: [`GroupFilter`] builder and
//! [`FilterError`] unified error type.

mod builder;
mod error;

pub use builder::GroupFilter;
pub use error::FilterError;
