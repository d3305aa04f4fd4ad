use super::{Command, CommandContext, CommandError, Flow};

/// `cd [dir]`: no argument goes home, `-` goes back.
#[derive(Clone, Default)]
pub struct CdCommand;

impl Command for CdCommand {
    fn execute(&self, args: &[&str], ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        ctx.state
            .navigator
            .change_directory(args.first().copied())
            .map_err(|source| CommandError::Directory {
                command: "cd",
                source,
            })?;
        Ok(Flow::Continue)
    }
}
