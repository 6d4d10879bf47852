//! Configuration options for a StackDb session.

/// Configuration options for opening a session.
#[derive(Debug, Clone)]
pub struct Options {
    /// Enable diagnostic mode.
    /// Exposes the `R` command, which prints the raw layer stack.
    /// Default: false
    pub trace: bool,

    /// Print the usage text once when the shell starts.
    /// Default: true
    pub print_help_on_start: bool,

    /// Prompt written before each input line.
    /// Default: None (no prompt)
    pub prompt: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self { trace: false, print_help_on_start: true, prompt: None }
    }
}

impl Options {
    /// Creates a new Options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables diagnostic mode.
    pub fn trace(mut self, value: bool) -> Self {
        self.trace = value;
        self
    }

    /// Sets whether the usage text is printed at startup.
    pub fn print_help_on_start(mut self, value: bool) -> Self {
        self.print_help_on_start = value;
        self
    }

    /// Sets the prompt written before each input line.
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Validates the options and returns an error if any are invalid.
    pub fn validate(&self) -> crate::Result<()> {
        if let Some(prompt) = &self.prompt {
            if prompt.contains('\n') || prompt.contains('\r') {
                return Err(crate::Error::invalid_argument("prompt must be a single line"));
            }
        }
        Ok(())
    }
}
