// Batch driving engine - independent of the CLI front end

pub mod core;
pub mod runner;

pub use core::*;
pub use runner::{ProcessRunner, RunError, SystemRunner};
