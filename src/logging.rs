use tracing::Level;

use crate::config::ShellConfig;

/// Diagnostics go to stderr so they never mix with command output.
pub fn init(config: &ShellConfig) {
    let level = if config.debug { Level::DEBUG } else { Level::WARN };

    let result = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(config.color)
        .without_time()
        .try_init();

    if let Err(e) = result {
        eprintln!("bpsh: could not set up logging: {}", e);
    }
}
