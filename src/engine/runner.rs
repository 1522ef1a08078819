// Process execution seam between the batch loop and the operating system

use std::process::Command;

use thiserror::Error;

/// Ways a single processor invocation can fail.
#[derive(Debug, Error)]
pub enum RunError {
    /// The command could not be spawned at all, e.g. the program is not on
    /// PATH.
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The processor ran and exited with a non-zero status.
    #[error("processor exited with code {code}")]
    Exited { code: i32 },

    /// The processor was killed by a signal before it could exit.
    #[error("processor terminated by a signal")]
    Terminated,
}

/// Executes one prepared invocation and reports how it went.
///
/// The batch loop only ever talks to this trait, so tests can substitute a
/// fake and drive the loop without spawning real processes.
pub trait ProcessRunner {
    fn run(&self, cmd: &mut Command) -> Result<(), RunError>;
}

/// Spawns the command with inherited stdio and blocks until it finishes, so
/// the processor's own output interleaves with the driver log in order.
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, cmd: &mut Command) -> Result<(), RunError> {
        let status = cmd.status().map_err(|source| RunError::Launch {
            program: cmd.get_program().to_string_lossy().into_owned(),
            source,
        })?;

        if status.success() {
            return Ok(());
        }
        match status.code() {
            Some(code) => Err(RunError::Exited { code }),
            None => Err(RunError::Terminated),
        }
    }
}
