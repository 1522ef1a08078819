use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::engine::runner::RunError;

/// Extension given to every derived output file, whatever the input format.
pub const OUTPUT_EXTENSION: &str = "png";

/// One planned invocation: an input image and the output path derived for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageJob {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl ImageJob {
    pub fn new(input_path: PathBuf, output_dir: &Path) -> Self {
        let output_path = derive_output_path(&input_path, output_dir);
        Self {
            input_path,
            output_path,
        }
    }
}

/// Derive the output path for an input image: same base name, fixed output
/// extension, placed in the output directory. Only the final extension is
/// replaced, so `dive.2024.arw` maps to `dive.2024.png`.
pub fn derive_output_path(input_path: &Path, output_dir: &Path) -> PathBuf {
    let file_name = input_path
        .file_name()
        .unwrap_or_else(|| OsStr::new("output"));
    output_dir.join(file_name).with_extension(OUTPUT_EXTENSION)
}

/// Build the job queue: the first `count` candidates in sorted order. A count
/// of zero or below selects nothing; a count past the end selects everything.
pub fn build_job_queue(candidates: Vec<PathBuf>, count: i64, output_dir: &Path) -> Vec<ImageJob> {
    // Conversion fails only past usize::MAX, where every candidate is taken
    let take = usize::try_from(count.max(0)).unwrap_or(usize::MAX);
    candidates
        .into_iter()
        .take(take)
        .map(|input_path| ImageJob::new(input_path, output_dir))
        .collect()
}

/// Outcome of one batch run. Per-image failures are collected here without
/// aborting the run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub selected: usize,
    pub succeeded: usize,
    pub failures: Vec<JobFailure>,
}

impl BatchReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// A selected image whose processor invocation did not complete successfully.
#[derive(Debug)]
pub struct JobFailure {
    pub input_path: PathBuf,
    pub error: RunError,
}
