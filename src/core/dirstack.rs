use std::env;
use std::path::PathBuf;

use super::navigator::{NavError, Navigator};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackEntry {
    /// The directory as the user named it.
    pub path: String,
    resolved: PathBuf,
    /// Where the shell was when this entry was pushed.
    origin: Option<PathBuf>,
}

/// pushd/popd stack. The top is the last element.
#[derive(Debug, Default)]
pub struct DirectoryStack {
    entries: Vec<StackEntry>,
}

impl DirectoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Changes to `target` and records it. A target the shell cannot enter
    /// is never recorded.
    pub fn push(
        &mut self,
        target: Option<&str>,
        nav: &mut Navigator,
    ) -> Result<Option<&StackEntry>, NavError> {
        let Some(target) = target else {
            return Ok(None);
        };

        let origin = env::current_dir().ok();
        let resolved = nav.change_directory(Some(target))?;
        let path = match target {
            "-" => resolved.display().to_string(),
            other => other.to_string(),
        };

        self.entries.push(StackEntry {
            path,
            resolved,
            origin,
        });
        Ok(self.entries.last())
    }

    /// Drops the top entry and moves to the entry below it. When the last
    /// entry goes, the shell returns to the directory that entry was pushed
    /// from. Returns the directory moved to, if any.
    pub fn pop(&mut self, nav: &mut Navigator) -> Result<Option<PathBuf>, NavError> {
        let Some(popped) = self.entries.pop() else {
            return Ok(None);
        };

        let (destination, label) = match self.entries.last() {
            Some(top) => (top.resolved.clone(), top.path.clone()),
            None => match popped.origin {
                Some(origin) => {
                    let label = origin.display().to_string();
                    (origin, label)
                }
                None => return Ok(None),
            },
        };

        nav.change_to(&destination, label).map(Some)
    }

    /// Bottom to top.
    pub fn list(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.path.as_str())
    }

    pub fn top(&self) -> Option<&StackEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
