use std::fmt;

/// One recorded command line. `number` is 1-based and never reused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub number: usize,
    pub command: String,
}

impl HistoryEntry {
    pub fn new(number: usize, command: impl Into<String>) -> Self {
        HistoryEntry {
            number,
            command: command.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    NotFound(usize),
    BadDesignator(String),
    RecallLoop(String),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::NotFound(n) => write!(f, "command {} not in list", n),
            HistoryError::BadDesignator(text) => write!(f, "command {} not in list", text),
            HistoryError::RecallLoop(text) => write!(f, "command {} recalls itself", text),
        }
    }
}

impl std::error::Error for HistoryError {}
