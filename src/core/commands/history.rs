use std::io::Write;

use super::{Command, CommandContext, CommandError, Flow, Recording};

/// Prints every recorded line in order. Lines keep their own newline.
#[derive(Clone, Default)]
pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn execute(&self, _args: &[&str], ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        for command in ctx.state.history.commands() {
            write!(ctx.out, "{}", command)?;
        }
        Ok(Flow::Continue)
    }

    fn recording(&self) -> Recording {
        Recording::AfterRun
    }
}
