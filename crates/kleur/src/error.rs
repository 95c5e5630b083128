//! Error types for configuration parsing.

/// A color mode name that is not one of the recognized spellings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown color mode '{0}'. Expected one of: off, never, auto, force, always.")]
pub struct ParseModeError(pub String);
