use std::env;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum NavError {
    UndefinedPreviousDirectory,
    HomeDirNotFound,
    Path { target: String, source: io::Error },
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::UndefinedPreviousDirectory => write!(f, "previous directory not set"),
            NavError::HomeDirNotFound => write!(f, "home directory not found"),
            NavError::Path { target, source } => write!(f, "{}: {}", target, source),
        }
    }
}

impl std::error::Error for NavError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NavError::Path { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Owns the "previous working directory" used by `cd -`.
#[derive(Debug, Default)]
pub struct Navigator {
    previous: Option<PathBuf>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn previous(&self) -> Option<&Path> {
        self.previous.as_deref()
    }

    /// Changes the working directory and returns the new one.
    ///
    /// `None` goes home and `"-"` goes back to the previous directory. Any
    /// successful change other than `-` makes the directory being left the new
    /// previous directory; `-` only reads it, so `cd -` keeps returning to the
    /// same place until another `cd` moves the shell.
    pub fn change_directory(&mut self, target: Option<&str>) -> Result<PathBuf, NavError> {
        if target == Some("-") {
            let previous = self
                .previous
                .clone()
                .ok_or(NavError::UndefinedPreviousDirectory)?;
            let label = previous.display().to_string();
            return Self::enter(&previous, label);
        }

        let (destination, label) = match target {
            None => {
                let home = dirs::home_dir().ok_or(NavError::HomeDirNotFound)?;
                let label = home.display().to_string();
                (home, label)
            }
            Some(path) => (PathBuf::from(path), path.to_string()),
        };

        self.change_to(&destination, label)
    }

    /// Moves to an already resolved path, still tracking the previous directory.
    pub fn change_to(&mut self, destination: &Path, label: String) -> Result<PathBuf, NavError> {
        let leaving = env::current_dir().ok();
        let now = Self::enter(destination, label)?;

        if leaving.is_some() {
            self.previous = leaving;
        }
        Ok(now)
    }

    fn enter(destination: &Path, label: String) -> Result<PathBuf, NavError> {
        env::set_current_dir(destination).map_err(|source| NavError::Path {
            target: label,
            source,
        })?;

        let now = env::current_dir().unwrap_or_else(|_| destination.to_path_buf());
        tracing::debug!(to = %now.display(), "changed directory");
        Ok(now)
    }
}
