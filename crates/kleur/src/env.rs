//! Environment abstractions for testability.
//!
//! Detection and configuration read environment variables through
//! [`EnvReader`], so tests can supply a [`MockEnv`] instead of mutating the
//! real process environment.

use std::collections::HashMap;

/// Variable naming the terminal type (`xterm-256color`, `screen`, ...).
pub const TERM_VAR: &str = "TERM";

/// Variable selecting the initial [`ColorMode`](crate::ColorMode) of the global colorizer.
pub const COLOR_VAR: &str = "KLEUR_COLOR";

/// Abstraction over environment variables.
pub trait EnvReader: Send + Sync {
    /// Get an environment variable value.
    fn var(&self, name: &str) -> Option<String>;
}

/// Real environment variable reader.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealEnv;

impl EnvReader for RealEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Mock environment variable reader for testing.
#[derive(Debug, Clone, Default)]
pub struct MockEnv {
    vars: HashMap<String, String>,
}

impl MockEnv {
    /// Create an empty mock environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an environment variable.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvReader for MockEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}
