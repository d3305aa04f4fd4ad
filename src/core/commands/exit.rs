use super::{Command, CommandContext, CommandError, Flow, Recording};

#[derive(Clone, Default)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(&self, _args: &[&str], _ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        Ok(Flow::Exit)
    }

    fn recording(&self) -> Recording {
        Recording::Never
    }
}
