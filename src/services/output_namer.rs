use pixel_groups::{AverageDivisor, EdgePolicy};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::models::{FilterJob, FilterKind};

/// Default output path for `job` when none was given.
///
/// The source's final extension is dropped and a suffix describing the run
/// is appended, keeping the source directory:
///
/// - row: `<stem>-row-<mode>-high-<h>-low-<s>.png`
/// - checkerbox: `<stem>-checker-<size>-<mode>-high-<h>-low-<s>.png`
///
/// Checkerbox runs with non-default options add `-width-divisor` and/or
/// `-partial` before `.png`.
///
/// The extension is everything from the last `.` of the file name, so a
/// bare dot-file such as `.png` loses its whole name.
pub fn default_output_path(job: &FilterJob) -> PathBuf {
    let mut name: OsString = strip_extension(&job.source);
    name.push(suffix(job));
    PathBuf::from(name)
}

fn strip_extension(source: &Path) -> OsString {
    let Some(text) = source.to_str() else {
        // non-UTF-8 paths fall back to the platform's notion of an extension
        return match source.extension() {
            Some(_) => source.with_extension("").into_os_string(),
            None => source.as_os_str().to_os_string(),
        };
    };
    let name_start = text.rfind(std::path::is_separator).map_or(0, |i| i + 1);
    match text[name_start..].rfind('.') {
        Some(dot) => OsString::from(&text[..name_start + dot]),
        None => OsString::from(text),
    }
}

/// Output path for `job`: the explicit one if set, else the default.
pub fn output_path(job: &FilterJob) -> PathBuf {
    match &job.output {
        Some(path) => path.clone(),
        None => default_output_path(job),
    }
}

fn suffix(job: &FilterJob) -> String {
    let mode = job.mode.as_str();
    let high = job.mask.highlight_ceiling;
    let low = job.mask.shadow_floor;

    match job.kind {
        FilterKind::Row => format!("-row-{mode}-high-{high}-low-{low}.png"),
        FilterKind::Checkerbox {
            size,
            divisor,
            edges,
        } => {
            let mut extra = String::new();
            if divisor == AverageDivisor::ImageWidth {
                extra.push_str("-width-divisor");
            }
            if edges == EdgePolicy::Partial {
                extra.push_str("-partial");
            }
            format!("-checker-{size}-{mode}-high-{high}-low-{low}{extra}.png")
        }
    }
}
