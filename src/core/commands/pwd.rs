use std::env;
use std::io::Write;

use super::{Command, CommandContext, CommandError, Flow};

#[derive(Clone, Default)]
pub struct PwdCommand;

impl Command for PwdCommand {
    fn execute(&self, _args: &[&str], ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        let dir = env::current_dir()
            .map_err(|e| CommandError::ExecutionError(format!("pwd: could not access path: {}", e)))?;
        writeln!(ctx.out, "{}", dir.display())?;
        Ok(Flow::Continue)
    }
}
