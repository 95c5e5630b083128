//! Severity levels and thresholds.
//!
//! The declared order is `Debug < Warn < Error < Info`, with `None` above all
//! of them as a threshold that silences everything. Comparisons use this
//! numeric order exactly, so a threshold of `Info` suppresses `Error`.

use std::fmt;
use std::str::FromStr;

use kleur::{EnvReader, Fg};

use crate::ParseLevelError;

/// Variable selecting the initial threshold of the global log context.
pub const LOG_VAR: &str = "KLEUR_LOG";

/// The severity a logger is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    Debug = 0,
    Warn = 1,
    Error = 2,
    Info = 3,
}

impl Level {
    /// Every level, in numeric order.
    pub const ALL: [Level; 4] = [Level::Debug, Level::Warn, Level::Error, Level::Info];

    /// The fixed eight-character header that opens each line.
    pub const fn header(self) -> &'static str {
        match self {
            Level::Debug => "[DEBUG] ",
            Level::Warn => "[WARN ] ",
            Level::Error => "[ERROR] ",
            Level::Info => "[INFO ] ",
        }
    }

    /// The header color.
    pub const fn color(self) -> Fg {
        match self {
            Level::Debug => Fg::Blue,
            Level::Warn => Fg::Yellow,
            Level::Error => Fg::Red,
            Level::Info => Fg::Green,
        }
    }

    /// Whether a message at this level is emitted under `threshold`.
    pub const fn passes(self, threshold: LevelFilter) -> bool {
        self as u8 >= threshold as u8
    }

    /// Lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Info => "info",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warn,
            log::Level::Info => Level::Info,
            log::Level::Debug | log::Level::Trace => Level::Debug,
        }
    }
}

/// The minimum level that will be emitted. `None` suppresses every level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum LevelFilter {
    #[default]
    Debug = 0,
    Warn = 1,
    Error = 2,
    Info = 3,
    None = 4,
}

impl LevelFilter {
    /// Reads the threshold from `KLEUR_LOG`.
    ///
    /// Returns `Ok(None)` when the variable is unset or empty.
    pub fn from_env(env: &dyn EnvReader) -> Result<Option<Self>, ParseLevelError> {
        match env.var(LOG_VAR) {
            Some(value) if !value.trim().is_empty() => value.parse().map(Some),
            _ => Ok(None),
        }
    }

    pub(crate) const fn from_u8(value: u8) -> Self {
        match value {
            0 => LevelFilter::Debug,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Error,
            3 => LevelFilter::Info,
            _ => LevelFilter::None,
        }
    }
}

impl From<Level> for LevelFilter {
    fn from(level: Level) -> Self {
        LevelFilter::from_u8(level as u8)
    }
}

impl FromStr for LevelFilter {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LevelFilter::Debug),
            "warn" | "warning" => Ok(LevelFilter::Warn),
            "error" => Ok(LevelFilter::Error),
            "info" => Ok(LevelFilter::Info),
            "none" | "off" => Ok(LevelFilter::None),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
