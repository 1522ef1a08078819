use std::process::Command;

use anyhow::{bail, Result};

use super::params::ProcessorParams;
use super::types::ImageJob;

/// The external processor to invoke: a program plus any leading arguments.
///
/// Parsed from a shell-style string so an interpreter form such as
/// `python3 run.py` works the same as a bare executable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorCommand {
    program: String,
    leading_args: Vec<String>,
}

impl ProcessorCommand {
    /// Parse a shell-style command string. Quoting is respected, so
    /// `"/opt/sea thru/run" --fast` yields a program with one argument.
    pub fn parse(spec: &str) -> Result<Self> {
        let Some(mut parts) = shlex::split(spec) else {
            bail!("unbalanced quoting in processor command: {spec}");
        };
        if parts.is_empty() {
            bail!("processor command is empty");
        }
        let program = parts.remove(0);
        Ok(Self {
            program,
            leading_args: parts,
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.leading_args);
        cmd
    }
}

/// Build one processor invocation: the mandatory input/output arguments
/// first, then only the tuning parameters that were explicitly provided.
pub fn build_processor_cmd(
    processor: &ProcessorCommand,
    job: &ImageJob,
    params: &ProcessorParams,
) -> Command {
    let mut cmd = processor.to_command();

    cmd.arg("--input").arg(&job.input_path);
    cmd.arg("--output").arg(&job.output_path);

    if let Some(size) = params.size {
        cmd.arg("--size").arg(size.to_string());
    }
    if let Some(model_name) = params.model_name.as_deref() {
        cmd.arg("--model-name").arg(model_name);
    }
    if let Some(f) = params.f {
        cmd.arg("--f").arg(f.to_string());
    }
    if let Some(l) = params.l {
        cmd.arg("--l").arg(l.to_string());
    }
    if let Some(p) = params.p {
        cmd.arg("--p").arg(p.to_string());
    }
    if let Some(min_depth) = params.min_depth {
        cmd.arg("--min-depth").arg(min_depth.to_string());
    }
    if let Some(max_depth) = params.max_depth {
        cmd.arg("--max-depth").arg(max_depth.to_string());
    }
    if let Some(fraction) = params.spread_data_fraction {
        cmd.arg("--spread-data-fraction").arg(fraction.to_string());
    }
    if params.raw {
        cmd.arg("--raw");
    }
    if params.no_cuda {
        cmd.arg("--no-cuda");
    }

    cmd
}

/// Render a command for progress logs and dry runs. Arguments containing
/// spaces are quoted for readability; this is display output, not shell
/// input.
pub fn format_processor_cmd(cmd: &Command) -> String {
    let mut parts = vec![cmd.get_program().to_string_lossy().into_owned()];
    parts.extend(cmd.get_args().map(|arg| {
        let s = arg.to_string_lossy();
        if s.contains(' ') {
            format!("\"{}\"", s)
        } else {
            s.into_owned()
        }
    }));
    parts.join(" ")
}
