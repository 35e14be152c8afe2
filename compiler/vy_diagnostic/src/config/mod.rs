//! Rendering configuration.
//!
//! Configuration is an explicit value handed to [`Diagnostic::render`]
//! rather than process-wide state, so rendering stays deterministic. The
//! driver builds it once per compilation run, usually from the environment.
//!
//! [`Diagnostic::render`]: crate::Diagnostic::render

use thiserror::Error;

use crate::SourceAnnotator;

/// Environment variable holding the number of context lines.
pub const CONTEXT_LINES_VAR: &str = "VYPER_ERROR_CONTEXT_LINES";

/// Environment variable toggling line numbers (`"1"` enables them).
pub const LINE_NUMBERS_VAR: &str = "VYPER_ERROR_LINE_NUMBERS";

const DEFAULT_CONTEXT_LINES: usize = 1;

/// Invalid rendering configuration.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
pub enum ConfigError {
    #[error("VYPER_ERROR_CONTEXT_LINES must be a non-negative integer, got `{value}`")]
    InvalidContextLines { value: String },
}

/// How diagnostics render their source excerpt.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct RenderConfig {
    /// Lines of context above and below the offending line.
    pub context_lines: usize,
    /// Prefix excerpt lines with their line numbers.
    pub show_line_numbers: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            context_lines: DEFAULT_CONTEXT_LINES,
            show_line_numbers: true,
        }
    }
}

impl RenderConfig {
    /// Read the configuration from the process environment.
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = RenderConfig::default();

        if let Some(value) = lookup(CONTEXT_LINES_VAR) {
            config.context_lines = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidContextLines { value })?;
        }

        if let Some(value) = lookup(LINE_NUMBERS_VAR) {
            config.show_line_numbers = value.trim() == "1";
        }

        Ok(config)
    }

    #[must_use]
    pub fn with_context_lines(mut self, context_lines: usize) -> Self {
        self.context_lines = context_lines;
        self
    }

    #[must_use]
    pub fn with_line_numbers(mut self, show_line_numbers: bool) -> Self {
        self.show_line_numbers = show_line_numbers;
        self
    }

    /// The annotator these settings describe.
    pub fn annotator(&self) -> SourceAnnotator {
        SourceAnnotator::new(self.context_lines, self.show_line_numbers)
    }
}
