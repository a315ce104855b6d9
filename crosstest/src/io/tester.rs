//! Tester abstraction for running a program against a fixture directory.
//!
//! The [`Tester`] trait decouples dispatch from the actual test engine.
//! `Ok(status)` is whatever the engine returned; `Err` is a fault, i.e. the
//! engine never produced a status.

use std::path::Path;
use std::process::Command;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, instrument};

use crate::io::config::TesterConfig;
use crate::io::process::run_with_timeout;

/// Abstraction over test engines.
pub trait Tester {
    /// Run `program` against the fixtures in `fixtures` and return its status.
    fn run(&self, program: &Path, fixtures: &Path) -> Result<i32>;
}

/// Tester that spawns an external command: `command... <program> <fixtures>`.
#[derive(Debug, Clone)]
pub struct CommandTester {
    command: Vec<String>,
    timeout: Duration,
}

impl CommandTester {
    pub fn new(command: Vec<String>, timeout: Duration) -> Result<Self> {
        if command.is_empty() || command[0].trim().is_empty() {
            return Err(anyhow!("tester command must be non-empty"));
        }
        Ok(Self { command, timeout })
    }

    pub fn from_config(config: &TesterConfig) -> Result<Self> {
        Self::new(config.command.clone(), config.timeout())
    }
}

impl Tester for CommandTester {
    #[instrument(skip_all, fields(program = %program.display()))]
    fn run(&self, program: &Path, fixtures: &Path) -> Result<i32> {
        let mut cmd = Command::new(&self.command[0]);
        cmd.args(&self.command[1..]).arg(program).arg(fixtures);

        let finished = run_with_timeout(cmd, self.timeout)
            .with_context(|| format!("run tester {}", self.command.join(" ")))?;
        if finished.timed_out {
            return Err(anyhow!("tester timed out after {:?}", self.timeout));
        }
        let code = finished
            .status
            .code()
            .ok_or_else(|| anyhow!("tester terminated by signal"))?;
        debug!(code, "tester returned");
        Ok(code)
    }
}
