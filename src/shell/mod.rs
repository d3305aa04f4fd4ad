use std::io::{self, Write};

mod executor;
pub mod parser;

use crate::{
    config::ShellConfig,
    core::{
        commands::{CommandError, CommandExecutor, Flow},
        ShellState,
    },
    error::ShellError,
    highlight::SyntaxHighlighter,
    input::LineSource,
};

use executor::CommandHandler;

pub struct Shell {
    pub(crate) config: ShellConfig,
    pub(crate) state: ShellState,
    pub(crate) executor: CommandExecutor,
    pub(crate) highlighter: SyntaxHighlighter,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Self {
        let executor = CommandExecutor::new(config.max_children);
        let highlighter = SyntaxHighlighter::new(config.color);

        Shell {
            config,
            state: ShellState::new(),
            executor,
            highlighter,
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// Keeps Ctrl-C from taking the shell down along with a foreground child.
    /// Only one handler may be installed per process.
    pub fn install_interrupt_handler() -> Result<(), ShellError> {
        ctrlc::set_handler(move || {
            tracing::debug!("interrupt received");
        })?;
        Ok(())
    }

    /// Reads and runs lines until `exit` or end of input.
    pub fn run(
        &mut self,
        source: &mut dyn LineSource,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<(), ShellError> {
        loop {
            let Some(line) = source.read_line(&self.config.prompt)? else {
                tracing::debug!("end of input");
                break;
            };

            match self.execute_command(&line, out, err) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) => self.report(err, &e)?,
            }
            out.flush()?;
        }

        out.flush()?;
        Ok(())
    }

    fn report(&self, err: &mut dyn Write, error: &CommandError) -> io::Result<()> {
        writeln!(err, "{}", self.highlighter.highlight_error(&error.to_string()))?;
        err.flush()
    }
}
