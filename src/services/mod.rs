pub mod filter_pipeline;
pub mod output_namer;

pub use filter_pipeline::{filter_grid, run, FilterOutcome};
pub use output_namer::{default_output_path, output_path};
