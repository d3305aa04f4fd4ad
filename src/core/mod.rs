pub mod commands;
pub mod dirstack;
pub mod navigator;
pub mod state;

pub use dirstack::{DirectoryStack, StackEntry};
pub use navigator::{NavError, Navigator};
pub use state::ShellState;
