use std::fmt;
use std::process::ExitStatus;

pub mod executor;
pub mod signal;

pub use executor::ProcessExecutor;

#[derive(Debug)]
pub enum ProcessError {
    EmptyCommand,
    CommandNotFound(String),
    Spawn { program: String, source: std::io::Error },
    Wait(std::io::Error),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::EmptyCommand => write!(f, "empty command"),
            ProcessError::CommandNotFound(cmd) => write!(f, "command not found: {}", cmd),
            ProcessError::Spawn { program, source } => write!(f, "{}: {}", program, source),
            ProcessError::Wait(e) => write!(f, "wait failed: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {}

/// How a launched child ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildOutcome {
    Exited(ExitStatus),
    /// Killed on launch because too many children were already running.
    Killed(ExitStatus),
}

impl ChildOutcome {
    pub fn status(&self) -> ExitStatus {
        match self {
            ChildOutcome::Exited(status) | ChildOutcome::Killed(status) => *status,
        }
    }
}
