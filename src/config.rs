use crate::error::ShellError;
use crate::flags::Flags;

pub const DEFAULT_PROMPT: &str = "~ ";
pub const DEFAULT_MAX_CHILDREN: usize = 2000;

/// Runtime settings, resolved once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub prompt: String,
    pub max_children: usize,
    pub quiet: bool,
    pub debug: bool,
    pub color: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            prompt: DEFAULT_PROMPT.to_string(),
            max_children: DEFAULT_MAX_CHILDREN,
            quiet: false,
            debug: false,
            color: false,
        }
    }
}

impl ShellConfig {
    pub fn from_flags(flags: &Flags) -> Result<Self, ShellError> {
        let max_children = match flags.get_value("max-children") {
            Some(raw) => raw.parse::<usize>().map_err(|_| {
                ShellError::FlagError(format!("--max-children expects a number, got {}", raw))
            })?,
            None => DEFAULT_MAX_CHILDREN,
        };

        let prompt = flags
            .get_value("prompt")
            .cloned()
            .unwrap_or_else(|| DEFAULT_PROMPT.to_string());

        Ok(ShellConfig {
            prompt,
            max_children,
            quiet: flags.is_set("quiet"),
            debug: flags.is_set("debug"),
            color: false,
        })
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::from_flags(&Flags::new()).unwrap();
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn test_from_flags() {
        let mut flags = Flags::new();
        flags
            .parse(&["-m".to_string(), "3".to_string(), "-q".to_string()])
            .unwrap();

        let config = ShellConfig::from_flags(&flags).unwrap();
        assert_eq!(config.max_children, 3);
        assert!(config.quiet);
        assert_eq!(config.prompt, DEFAULT_PROMPT);
    }

    #[test]
    fn test_bad_ceiling() {
        let mut flags = Flags::new();
        flags
            .parse(&["--max-children".to_string(), "lots".to_string()])
            .unwrap();

        assert!(matches!(
            ShellConfig::from_flags(&flags),
            Err(ShellError::FlagError(_))
        ));
    }
}
