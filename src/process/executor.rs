use std::io;
use std::process::{Child, Command, ExitStatus, Stdio};

use super::{signal, ChildOutcome, ProcessError};

/// Runs external programs in the foreground.
///
/// `running` counts children between spawn and reap. A child that would push
/// the count past `max_children` is killed straight away instead of being
/// waited on; nothing is ever queued.
#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    max_children: usize,
    running: usize,
}

impl ProcessExecutor {
    pub fn new(max_children: usize) -> Self {
        ProcessExecutor {
            max_children,
            running: 0,
        }
    }

    pub fn running(&self) -> usize {
        self.running
    }

    /// `args[0]` is the program; the whole slice becomes its argv.
    pub fn spawn_process(&mut self, args: &[&str]) -> Result<ChildOutcome, ProcessError> {
        let (program, rest) = args.split_first().ok_or(ProcessError::EmptyCommand)?;

        let child = Command::new(program)
            .args(rest)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    ProcessError::CommandNotFound(program.to_string())
                } else {
                    ProcessError::Spawn {
                        program: program.to_string(),
                        source: e,
                    }
                }
            })?;

        self.running += 1;
        tracing::debug!(pid = child.id(), program = %program, running = self.running, "spawned");

        let outcome = if self.running > self.max_children {
            Self::kill(child, self.running, self.max_children).map(ChildOutcome::Killed)
        } else {
            Self::wait(child).map(ChildOutcome::Exited)
        };

        self.running -= 1;
        outcome
    }

    fn wait(mut child: Child) -> Result<ExitStatus, ProcessError> {
        let status = child.wait().map_err(ProcessError::Wait)?;
        tracing::debug!(pid = child.id(), %status, "child finished");
        Ok(status)
    }

    fn kill(mut child: Child, running: usize, max: usize) -> Result<ExitStatus, ProcessError> {
        tracing::warn!(
            pid = child.id(),
            running,
            max,
            "too many children running, killing the new one"
        );
        // Fails only if the child already exited; the reap below covers both cases.
        if let Err(e) = child.kill() {
            tracing::debug!(pid = child.id(), "kill failed: {}", e);
        }
        let status = child.wait().map_err(ProcessError::Wait)?;
        tracing::debug!(pid = child.id(), killed = signal::was_killed(&status), "child reaped");
        Ok(status)
    }
}
