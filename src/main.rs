use std::env;
use std::io::{self, IsTerminal};

use bpsh::config::ShellConfig;
use bpsh::error::ShellError;
use bpsh::flags::Flags;
use bpsh::input::{EditorSource, LineSource, ReaderSource};
use bpsh::shell::Shell;

fn main() -> Result<(), ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("bpsh {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = ShellConfig::from_flags(&flags)?.with_color(io::stderr().is_terminal());
    bpsh::logging::init(&config);

    Shell::install_interrupt_handler()?;

    let mut source: Box<dyn LineSource> = if io::stdin().is_terminal() {
        Box::new(EditorSource::new()?)
    } else {
        Box::new(ReaderSource::new(io::stdin().lock(), io::stdout()))
    };

    let mut shell = Shell::new(config);
    shell.run(source.as_mut(), &mut io::stdout(), &mut io::stderr())
}
