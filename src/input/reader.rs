use std::io::{BufRead, Write};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::ShellError;

/// Where the shell gets its command lines from.
///
/// Returned lines always end in `\n`, the way a terminal delivers them, so the
/// text recorded in history is the line exactly as entered. `Ok(None)` means
/// the input is exhausted.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError>;
}

fn terminate(mut line: String) -> String {
    if !line.ends_with('\n') {
        line.push('\n');
    }
    line
}

/// Interactive input backed by rustyline.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    pub fn new() -> Result<Self, ShellError> {
        Ok(EditorSource {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        tracing::warn!("couldn't add to line editor history: {}", e);
                    }
                }
                Ok(Some(terminate(line)))
            }
            // Drops the partially typed line; the loop treats it as blank.
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Line-at-a-time input from any buffered reader. Used for piped stdin.
pub struct ReaderSource<R, W> {
    reader: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> ReaderSource<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        ReaderSource { reader, prompt_out }
    }
}

impl<R: BufRead, W: Write> LineSource for ReaderSource<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        write!(self.prompt_out, "{}", prompt)?;
        self.prompt_out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(terminate(line)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    #[test]
    fn test_reader_source_lines() {
        let mut source = ReaderSource::new(Cursor::new("pwd\ncd /tmp"), io::sink());

        assert_eq!(source.read_line("~ ").unwrap(), Some("pwd\n".to_string()));
        assert_eq!(source.read_line("~ ").unwrap(), Some("cd /tmp\n".to_string()));
        assert_eq!(source.read_line("~ ").unwrap(), None);
    }

    #[test]
    fn test_reader_source_writes_prompt() {
        let mut prompt = Vec::new();
        {
            let mut source = ReaderSource::new(Cursor::new("\n"), &mut prompt);
            assert_eq!(source.read_line("$ ").unwrap(), Some("\n".to_string()));
        }
        assert_eq!(prompt, b"$ ");
    }
}
