use inksac::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::plain()
    }
}

impl SyntaxHighlighter {
    /// Colors only when `enabled` and the terminal reports support for it.
    pub fn new(enabled: bool) -> Self {
        if !enabled {
            return Self::plain();
        }
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return error.to_string();
        }

        let error_style = Style::builder()
            .foreground(Color::Red)
            .bold()
            .build();

        error.style(error_style).to_string()
    }

    pub fn highlight_notice(&self, notice: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return notice.to_string();
        }

        let notice_style = Style::builder()
            .foreground(Color::Yellow)
            .build();

        notice.style(notice_style).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_passes_through() {
        let highlighter = SyntaxHighlighter::plain();
        assert_eq!(highlighter.highlight_error("cd: oops"), "cd: oops");
        assert_eq!(highlighter.highlight_notice("killed"), "killed");
    }

    #[test]
    fn test_disabled_ignores_terminal() {
        let highlighter = SyntaxHighlighter::new(false);
        assert_eq!(highlighter.highlight_error("x"), "x");
    }
}
