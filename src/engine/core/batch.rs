use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{info, warn};

use crate::engine::runner::ProcessRunner;

use super::command::{build_processor_cmd, format_processor_cmd, ProcessorCommand};
use super::params::ProcessorParams;
use super::scan::scan;
use super::types::{build_job_queue, BatchReport, JobFailure};

/// Whole-run failures. Anything here aborts before the first invocation;
/// per-image failures are reported through [`BatchReport`] instead.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("no images found in {}", .dir.display())]
    NoImages { dir: PathBuf },

    #[error("failed to create output directory {}", .dir.display())]
    CreateOutputDir {
        dir: PathBuf,
        source: std::io::Error,
    },
}

/// Everything one batch run needs, spelled out explicitly so tests can point
/// the driver at scratch directories and a fake runner.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub processor: ProcessorCommand,
    pub count: i64,
    pub dry_run: bool,
}

/// Process up to `count` images from the input directory, one synchronous
/// processor invocation at a time.
///
/// The candidate check runs before the output directory is touched, so a run
/// against an input directory with no images fails without creating anything.
/// In dry-run mode the commands are logged and nothing else happens, not even
/// output directory creation. A failing invocation is logged, recorded in the
/// report, and the loop moves on to the next image.
pub fn run_batch(
    config: &BatchConfig,
    params: &ProcessorParams,
    runner: &dyn ProcessRunner,
) -> Result<BatchReport, BatchError> {
    let candidates = scan(&config.input_dir);
    if candidates.is_empty() {
        return Err(BatchError::NoImages {
            dir: config.input_dir.clone(),
        });
    }

    if !config.dry_run {
        fs::create_dir_all(&config.output_dir).map_err(|source| BatchError::CreateOutputDir {
            dir: config.output_dir.clone(),
            source,
        })?;
    }

    let jobs = build_job_queue(candidates, config.count, &config.output_dir);
    let total = jobs.len();
    info!(
        "processing {} image(s) from {} -> {}",
        total,
        config.input_dir.display(),
        config.output_dir.display()
    );

    let mut report = BatchReport {
        selected: total,
        ..BatchReport::default()
    };

    for (idx, job) in jobs.iter().enumerate() {
        let mut cmd = build_processor_cmd(&config.processor, job, params);
        info!("[{}/{}] {}", idx + 1, total, format_processor_cmd(&cmd));

        if config.dry_run {
            continue;
        }

        match runner.run(&mut cmd) {
            Ok(()) => report.succeeded += 1,
            Err(error) => {
                warn!("failed on {}: {}", job.input_path.display(), error);
                report.failures.push(JobFailure {
                    input_path: job.input_path.clone(),
                    error,
                });
            }
        }
    }

    Ok(report)
}
