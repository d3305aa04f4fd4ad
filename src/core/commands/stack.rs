use std::io::Write;

use super::{Command, CommandContext, CommandError, Flow};

fn directory_error(command: &'static str) -> impl FnOnce(crate::core::NavError) -> CommandError {
    move |source| CommandError::Directory { command, source }
}

/// `pushd <dir>`: enter `dir` and remember it on the stack.
#[derive(Clone, Default)]
pub struct PushdCommand;

impl Command for PushdCommand {
    fn execute(&self, args: &[&str], ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        let state = &mut *ctx.state;
        let pushed = state
            .dir_stack
            .push(args.first().copied(), &mut state.navigator)
            .map_err(directory_error("pushd"))?;

        if let Some(entry) = pushed {
            writeln!(ctx.out, "{}", entry.path)?;
        }
        Ok(Flow::Continue)
    }
}

/// `popd`: drop the top of the stack and move to what is left.
#[derive(Clone, Default)]
pub struct PopdCommand;

impl Command for PopdCommand {
    fn execute(&self, _args: &[&str], ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        let state = &mut *ctx.state;
        let moved_to = state
            .dir_stack
            .pop(&mut state.navigator)
            .map_err(directory_error("popd"))?;

        if let Some(dir) = moved_to {
            writeln!(ctx.out, "{}", dir.display())?;
        }
        Ok(Flow::Continue)
    }
}

/// `dirs`: the stack, bottom first.
#[derive(Clone, Default)]
pub struct DirsCommand;

impl Command for DirsCommand {
    fn execute(&self, _args: &[&str], ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        for dir in ctx.state.dir_stack.list() {
            writeln!(ctx.out, "{}", dir)?;
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ShellState;
    use crate::highlight::SyntaxHighlighter;
    use crate::test_support::cwd;
    use std::env;
    use std::io;

    fn run(cmd: &dyn Command, state: &mut ShellState, args: &[&str]) -> (Result<Flow, CommandError>, String) {
        let mut out = Vec::new();
        let mut err = io::sink();
        let result = {
            let mut ctx = CommandContext {
                state,
                out: &mut out,
                err: &mut err,
                highlighter: SyntaxHighlighter::plain(),
                quiet: false,
            };
            cmd.execute(args, &mut ctx)
        };
        (result, String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn test_pushd_prints_target() {
        let _guard = cwd::lock();
        let dir = cwd::scratch_dir("pushd-print");
        let mut state = ShellState::new();

        let (result, out) = run(&PushdCommand, &mut state, &[dir.to_str().unwrap()]);
        assert!(result.is_ok());
        assert_eq!(out, format!("{}\n", dir.display()));
        assert_eq!(state.dir_stack.len(), 1);
    }

    #[test]
    fn test_pushd_without_argument() {
        let _guard = cwd::lock();
        let mut state = ShellState::new();

        let (result, out) = run(&PushdCommand, &mut state, &[]);
        assert!(result.is_ok());
        assert!(out.is_empty());
        assert!(state.dir_stack.is_empty());
    }

    #[test]
    fn test_failed_pushd_reports_and_keeps_stack() {
        let _guard = cwd::lock();
        let mut state = ShellState::new();

        let (result, out) = run(&PushdCommand, &mut state, &["/does/not/exist/at/all"]);
        assert!(matches!(
            result,
            Err(CommandError::Directory { command: "pushd", .. })
        ));
        assert!(out.is_empty());
        assert!(state.dir_stack.is_empty());
    }

    #[test]
    fn test_dirs_lists_push_order() {
        let _guard = cwd::lock();
        let a = cwd::scratch_dir("dirs-a");
        let b = cwd::scratch_dir("dirs-b");
        let mut state = ShellState::new();

        run(&PushdCommand, &mut state, &[a.to_str().unwrap()]).0.unwrap();
        run(&PushdCommand, &mut state, &[b.to_str().unwrap()]).0.unwrap();

        let (_, out) = run(&DirsCommand, &mut state, &[]);
        assert_eq!(out, format!("{}\n{}\n", a.display(), b.display()));
    }

    #[test]
    fn test_popd_on_empty_stack() {
        let _guard = cwd::lock();
        let before = env::current_dir().unwrap();
        let mut state = ShellState::new();

        let (result, out) = run(&PopdCommand, &mut state, &[]);
        assert!(result.is_ok());
        assert!(out.is_empty());
        assert_eq!(env::current_dir().unwrap(), before);
    }
}
