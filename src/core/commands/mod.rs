use std::collections::BTreeMap;
use std::io::Write;

mod cd;
mod exit;
mod history;
mod pwd;
mod stack;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use history::HistoryCommand;
pub use pwd::PwdCommand;
pub use stack::{DirsCommand, PopdCommand, PushdCommand};

use super::navigator::NavError;
use super::state::ShellState;
use crate::highlight::SyntaxHighlighter;
use crate::input::HistoryError;
use crate::process::{signal, ChildOutcome, ProcessError, ProcessExecutor};

#[derive(Debug)]
pub enum CommandError {
    Directory {
        command: &'static str,
        source: NavError,
    },
    HistoryError(HistoryError),
    ProcessError(ProcessError),
    ExecutionError(String),
    IoError(std::io::Error),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Directory { command, source } => write!(f, "{}: {}", command, source),
            CommandError::HistoryError(err) => write!(f, "{}", err),
            CommandError::ProcessError(err) => write!(f, "{}", err),
            CommandError::ExecutionError(msg) => write!(f, "{}", msg),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::ProcessError(err)
    }
}

impl From<HistoryError> for CommandError {
    fn from(err: HistoryError) -> Self {
        CommandError::HistoryError(err)
    }
}

/// What the read loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// When a command's line goes into history relative to running it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recording {
    BeforeRun,
    /// `history` lists first so it never shows itself.
    AfterRun,
    Never,
}

pub struct CommandContext<'a> {
    pub state: &'a mut ShellState,
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
    pub highlighter: SyntaxHighlighter,
    pub quiet: bool,
}

impl CommandContext<'_> {
    /// Non-error remarks, e.g. a child's nonzero exit. Silenced by `--quiet`.
    pub fn notice(&mut self, message: &str) -> Result<(), CommandError> {
        if !self.quiet {
            writeln!(self.err, "{}", self.highlighter.highlight_notice(message))?;
        }
        Ok(())
    }
}

pub trait Command {
    fn execute(&self, args: &[&str], ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError>;

    fn recording(&self) -> Recording {
        Recording::BeforeRun
    }
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Pwd(PwdCommand),
    History(HistoryCommand),
    Pushd(PushdCommand),
    Popd(PopdCommand),
    Dirs(DirsCommand),
    Exit(ExitCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[&str], ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args, ctx),
            CommandType::Pwd(cmd) => cmd.execute(args, ctx),
            CommandType::History(cmd) => cmd.execute(args, ctx),
            CommandType::Pushd(cmd) => cmd.execute(args, ctx),
            CommandType::Popd(cmd) => cmd.execute(args, ctx),
            CommandType::Dirs(cmd) => cmd.execute(args, ctx),
            CommandType::Exit(cmd) => cmd.execute(args, ctx),
        }
    }

    fn recording(&self) -> Recording {
        match self {
            CommandType::Cd(cmd) => cmd.recording(),
            CommandType::Pwd(cmd) => cmd.recording(),
            CommandType::History(cmd) => cmd.recording(),
            CommandType::Pushd(cmd) => cmd.recording(),
            CommandType::Popd(cmd) => cmd.recording(),
            CommandType::Dirs(cmd) => cmd.recording(),
            CommandType::Exit(cmd) => cmd.recording(),
        }
    }
}

/// Routes a tokenized line to a built-in or to the process executor, and
/// records the line in history at the point each command requires.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<&'static str, CommandType>,
    process_executor: ProcessExecutor,
}

impl CommandExecutor {
    pub fn new(max_children: usize) -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("cd", CommandType::Cd(CdCommand));
        commands.insert("pwd", CommandType::Pwd(PwdCommand));
        commands.insert("history", CommandType::History(HistoryCommand));
        commands.insert("pushd", CommandType::Pushd(PushdCommand));
        commands.insert("popd", CommandType::Popd(PopdCommand));
        commands.insert("dirs", CommandType::Dirs(DirsCommand));
        commands.insert("exit", CommandType::Exit(ExitCommand));

        CommandExecutor {
            commands,
            process_executor: ProcessExecutor::new(max_children),
        }
    }

    /// `line` is the text recorded in history; `args` are its tokens.
    pub fn execute(
        &mut self,
        line: &str,
        args: &[&str],
        ctx: &mut CommandContext<'_>,
    ) -> Result<Flow, CommandError> {
        let Some((name, rest)) = args.split_first() else {
            return Ok(Flow::Continue);
        };

        let Some(cmd) = self.commands.get(*name) else {
            tracing::debug!(program = %name, "external command");
            ctx.state.history.add(line);
            return self.run_external(args, ctx);
        };

        tracing::debug!(builtin = %name, "builtin command");
        let recording = cmd.recording();
        if recording == Recording::BeforeRun {
            ctx.state.history.add(line);
        }
        let result = cmd.execute(rest, ctx);
        if recording == Recording::AfterRun {
            ctx.state.history.add(line);
        }
        result
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    fn run_external(
        &mut self,
        args: &[&str],
        ctx: &mut CommandContext<'_>,
    ) -> Result<Flow, CommandError> {
        // The child writes straight to the inherited descriptors.
        ctx.out.flush()?;
        ctx.err.flush()?;

        match self.process_executor.spawn_process(args)? {
            ChildOutcome::Killed(_) => {
                ctx.notice(&format!("{}: killed, too many children running", args[0]))?;
            }
            ChildOutcome::Exited(status) if !status.success() => {
                ctx.notice(&format!(
                    "process exited with status: {}",
                    signal::describe(&status)
                ))?;
            }
            ChildOutcome::Exited(_) => {}
        }
        Ok(Flow::Continue)
    }
}
