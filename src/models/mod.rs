pub mod config;
pub mod job;

pub use config::{AppConfig, CheckerboxConfig, CONFIG_ENV};
pub use job::{FilterJob, FilterKind, JobRequest, KindRequest};
