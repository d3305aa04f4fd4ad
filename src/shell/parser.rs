use crate::input::{History, HistoryError};

const DELIMITERS: [char; 3] = [' ', '\t', '\n'];

/// Splits on spaces, tabs and newlines. No quoting, no escapes.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split(&DELIMITERS[..])
        .filter(|token| !token.is_empty())
        .collect()
}

/// The text after `!` when the first token is a history recall.
pub fn bang_designator(line: &str) -> Option<&str> {
    tokenize(line).first()?.strip_prefix('!')
}

/// Replaces `!N` lines with the recalled text until the first token is no
/// longer a recall. Recorded lines are always expanded already, so a chain is
/// at most as long as the history itself.
pub fn expand_history(history: &History, line: &str) -> Result<String, HistoryError> {
    let mut current = line.to_string();

    for _ in 0..=history.len() {
        let recalled = match bang_designator(&current) {
            Some(designator) => history.recall(designator)?.to_string(),
            None => return Ok(current),
        };
        tracing::debug!(from = %current.trim_end(), to = %recalled.trim_end(), "history recall");
        current = recalled;
    }

    match bang_designator(&current) {
        Some(designator) => Err(HistoryError::RecallLoop(designator.to_string())),
        None => Ok(current),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_whitespace() {
        assert_eq!(tokenize("ls  -l\t/tmp\n"), vec!["ls", "-l", "/tmp"]);
        assert_eq!(tokenize("   \n"), Vec::<&str>::new());
        assert_eq!(tokenize("echo 'a b'"), vec!["echo", "'a", "b'"]);
    }

    #[test]
    fn test_bang_designator() {
        assert_eq!(bang_designator("!12\n"), Some("12"));
        assert_eq!(bang_designator("  !3 extra"), Some("3"));
        assert_eq!(bang_designator("echo !3"), None);
        assert_eq!(bang_designator("!\n"), Some(""));
    }

    #[test]
    fn test_expand_plain_line() {
        let history = History::new();
        assert_eq!(expand_history(&history, "pwd\n").unwrap(), "pwd\n");
    }

    #[test]
    fn test_expand_recall() {
        let mut history = History::new();
        history.add("pwd\n");
        history.add("cd /tmp\n");

        assert_eq!(expand_history(&history, "!2\n").unwrap(), "cd /tmp\n");
    }

    #[test]
    fn test_expand_chained_recall() {
        let mut history = History::new();
        history.add("dirs\n");
        history.add("!1\n");

        assert_eq!(expand_history(&history, "!2\n").unwrap(), "dirs\n");
    }

    #[test]
    fn test_expand_miss() {
        let mut history = History::new();
        history.add("pwd\n");

        assert_eq!(
            expand_history(&history, "!9\n"),
            Err(HistoryError::NotFound(9))
        );
        assert_eq!(
            expand_history(&history, "!x\n"),
            Err(HistoryError::BadDesignator("x".to_string()))
        );
    }

    #[test]
    fn test_expand_self_reference_terminates() {
        let mut history = History::new();
        history.add("!1\n");

        let result = expand_history(&history, "!1\n");
        assert_eq!(result, Err(HistoryError::RecallLoop("1".to_string())));
        assert_eq!(result.unwrap_err().to_string(), "command 1 recalls itself");
    }
}
