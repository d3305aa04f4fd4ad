use super::dirstack::DirectoryStack;
use super::navigator::Navigator;
use crate::input::History;

/// Everything the built-ins mutate. Built once per shell and handed to each
/// command by reference.
#[derive(Debug, Default)]
pub struct ShellState {
    pub history: History,
    pub dir_stack: DirectoryStack,
    pub navigator: Navigator,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }
}
