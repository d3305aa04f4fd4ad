use std::io::Write;

use super::parser::{expand_history, tokenize};
use crate::core::commands::{CommandContext, CommandError, Flow};

pub(crate) trait CommandHandler {
    fn execute_command(
        &mut self,
        line: &str,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<Flow, CommandError>;
}

impl CommandHandler for super::Shell {
    fn execute_command(
        &mut self,
        line: &str,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        // Blank lines are never tokenized or recorded
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }

        // A failed recall bails out here, before anything is recorded. After a
        // successful one the recalled text is what gets recorded.
        let line = expand_history(&self.state.history, line)?;
        let args = tokenize(&line);

        let mut ctx = CommandContext {
            state: &mut self.state,
            out,
            err,
            highlighter: self.highlighter,
            quiet: self.config.quiet,
        };
        self.executor.execute(&line, &args, &mut ctx)
    }
}
