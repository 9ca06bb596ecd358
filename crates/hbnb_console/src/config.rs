//! Configuration for the console.

/// Prompt shown before each interactive command.
pub const DEFAULT_PROMPT: &str = "(hbnb) ";

/// Configuration for a [`Repl`](crate::Repl).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Primary prompt.
    pub prompt: String,

    /// Whether to print the welcome banner before the first prompt.
    pub banner: bool,

    /// Batch mode: no banner and no trailing newline on exit.
    pub batch: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            banner: true,
            batch: false,
        }
    }
}

impl ConsoleConfig {
    /// Creates a configuration for reading piped commands.
    #[must_use]
    pub fn batch() -> Self {
        Self {
            banner: false,
            batch: true,
            ..Self::default()
        }
    }

    /// Builder method to set the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to set whether the banner is shown.
    #[must_use]
    pub const fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }
}
