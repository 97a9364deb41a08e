//! Configuration for Librarium
//!
//! Centralized configuration for the operator session, with sensible defaults.

use crate::error::{LibraryError, Result};

/// Configuration for an operator session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Presentation
    // -------------------------------------------------------------------------
    /// Prompt printed before reading a menu choice
    pub prompt: String,

    /// Print the numbered menu before every prompt
    pub show_menu: bool,

    // -------------------------------------------------------------------------
    // Input Limits
    // -------------------------------------------------------------------------
    /// Longest accepted input line in bytes (excluding the line terminator)
    pub max_line_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: "Enter your choice: ".to_string(),
            show_menu: true,
            max_line_len: 4096,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that the configuration can drive a session
    pub fn validate(&self) -> Result<()> {
        if self.max_line_len == 0 {
            return Err(LibraryError::Config(
                "max_line_len must be greater than zero".to_string(),
            ));
        }
        if self.prompt.is_empty() {
            return Err(LibraryError::Config("prompt must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the choice prompt
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.prompt = prompt.into();
        self
    }

    /// Show or hide the numbered menu
    pub fn show_menu(mut self, show: bool) -> Self {
        self.config.show_menu = show;
        self
    }

    /// Set the maximum input line length (in bytes)
    pub fn max_line_len(mut self, len: usize) -> Self {
        self.config.max_line_len = len;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
