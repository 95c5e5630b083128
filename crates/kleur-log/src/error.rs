//! Error types for logging configuration.

/// A level name that is not one of the recognized spellings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown log level '{0}'. Expected one of: debug, warn, error, info, none.")]
pub struct ParseLevelError(pub String);

/// Errors from installing the `log` facade.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Another logger was already installed with `log::set_logger`.
    #[error("A global logger is already installed: {0}")]
    AlreadyInstalled(#[from] log::SetLoggerError),
}
