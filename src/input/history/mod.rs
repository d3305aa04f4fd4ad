pub mod types;

pub use types::{HistoryEntry, HistoryError};

/// Append-only log of the lines the shell has run, numbered from 1.
#[derive(Debug)]
pub struct History {
    entries: Vec<HistoryEntry>,
    next_number: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        History {
            entries: Vec::new(),
            next_number: 1,
        }
    }

    /// Records `command` under the next number. Empty input is ignored.
    pub fn add(&mut self, command: &str) -> Option<usize> {
        if command.is_empty() {
            return None;
        }

        let number = self.next_number;
        self.entries.push(HistoryEntry::new(number, command));
        self.next_number = number + 1;
        Some(number)
    }

    pub fn get(&self, number: usize) -> Result<&str, HistoryError> {
        self.entries
            .iter()
            .find(|entry| entry.number == number)
            .map(|entry| entry.command.as_str())
            .ok_or(HistoryError::NotFound(number))
    }

    /// Resolves the text after a `!`. Anything that is not a plain
    /// non-negative number cannot name an entry.
    pub fn recall(&self, designator: &str) -> Result<&str, HistoryError> {
        let number = designator
            .parse::<usize>()
            .map_err(|_| HistoryError::BadDesignator(designator.to_string()))?;
        self.get(number)
    }

    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.command.as_str())
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
