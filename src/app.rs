use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use seathru_batch::config::{self, Config};
use seathru_batch::engine::{run_batch, BatchConfig, ProcessorCommand, SystemRunner};

use crate::cli::Cli;

/// Default to `info` level; `RUST_LOG` overrides.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Wire CLI arguments and the config file into one batch run. CLI values win
/// over config values; config paths that are relative resolve against the
/// executable's directory, CLI paths are taken as given.
pub fn run(cli: Cli) -> Result<()> {
    init_logging();

    let config = Config::load()?;
    let anchor = config::anchor_dir();

    let input_dir = cli
        .input_dir
        .clone()
        .unwrap_or_else(|| config::resolve_dir(&config.paths.input_dir, &anchor));
    let output_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| config::resolve_dir(&config.paths.output_dir, &anchor));

    let processor_spec = cli
        .processor
        .as_deref()
        .unwrap_or(&config.processor.command);
    let processor = ProcessorCommand::parse(processor_spec)
        .with_context(|| format!("invalid processor command: {processor_spec}"))?;

    let params = cli.processor_params();
    let batch = BatchConfig {
        input_dir,
        output_dir,
        processor,
        count: cli.count,
        dry_run: cli.dry_run,
    };

    let report = run_batch(&batch, &params, &SystemRunner)?;

    if cli.dry_run {
        info!(
            "dry run: {} command(s) shown, none executed",
            report.selected
        );
    } else {
        info!(
            "done: {} succeeded, {} failed out of {} selected",
            report.succeeded,
            report.failed(),
            report.selected
        );
    }

    Ok(())
}
