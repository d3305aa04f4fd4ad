use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;

use libc::{c_int, SIGINT, SIGKILL};

pub fn terminating_signal(status: &ExitStatus) -> Option<c_int> {
    status.signal()
}

pub fn was_killed(status: &ExitStatus) -> bool {
    terminating_signal(status) == Some(SIGKILL)
}

/// Short text for a child that did not exit cleanly.
pub fn describe(status: &ExitStatus) -> String {
    match (status.code(), terminating_signal(status)) {
        (Some(code), _) => format!("exit code {}", code),
        (None, Some(SIGKILL)) => "killed".to_string(),
        (None, Some(SIGINT)) => "interrupted".to_string(),
        (None, Some(signal)) => format!("terminated by signal {}", signal),
        (None, None) => status.to_string(),
    }
}
