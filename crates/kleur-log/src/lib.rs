//! # Kleur Log - leveled, colored log lines
//!
//! `kleur-log` writes one line per message, opened by a colored header for its
//! level:
//!
//! ```text
//! <RESET><COLOR>[DEBUG] message<RESET>\n
//! ```
//!
//! | level   | header      | color  |
//! |---------|-------------|--------|
//! | `Debug` | `[DEBUG] `  | blue   |
//! | `Warn`  | `[WARN ] `  | yellow |
//! | `Error` | `[ERROR] `  | red    |
//! | `Info`  | `[INFO ] `  | green  |
//!
//! Colors are decided by a [`kleur::Colorizer`] against the sink, so lines
//! written to a file or buffer in `Auto` mode carry no escape sequences.
//!
//! ## Ordering
//!
//! Levels compare by their declared numbers: `Debug=0, Warn=1, Error=2,
//! Info=3`, and the threshold-only `None=4`. A message is written when
//! `level >= threshold`, so a threshold of `Info` suppresses errors.
//!
//! ## Global Facade
//!
//! ```rust,no_run
//! use kleur_log::LevelFilter;
//!
//! kleur_log::set_threshold(LevelFilter::Debug);
//! kleur_log::set_sink(std::io::stdout());
//!
//! kleur_log::error().log("This is an error")?.log(" with extra output")?;
//! kleur_log::warn().log("This is a warning")?;
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! The global context colors through `kleur::global()`, so `kleur::set_mode`
//! also applies to log lines. Its initial threshold is read from `KLEUR_LOG`.
//!
//! ## Explicit Contexts
//!
//! Tests and libraries can avoid global state with their own [`LogContext`].
//!
//! ## `log` Integration
//!
//! [`init`] installs a `log::Log` implementation so the `log` crate macros
//! write through the global context.

mod context;
mod error;
mod facade;
mod level;
mod logger;

use once_cell::sync::Lazy;

use kleur::{EnvReader, RealEnv, Stream};

pub use context::{format_line, sink, LogContext, Sink};
pub use error::{LogError, ParseLevelError};
pub use facade::init;
pub use level::{Level, LevelFilter, LOG_VAR};
pub use logger::Logger;

static GLOBAL: Lazy<LogContext> = Lazy::new(|| {
    LogContext::with_global_colorizer().with_threshold(initial_threshold(&RealEnv))
});

// An unparseable KLEUR_LOG falls back to the default.
fn initial_threshold(env: &dyn EnvReader) -> LevelFilter {
    LevelFilter::from_env(env)
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// The process-wide log context.
pub fn global() -> &'static LogContext {
    &GLOBAL
}

/// Sets the process-wide minimum level.
pub fn set_threshold(threshold: LevelFilter) {
    GLOBAL.set_threshold(threshold);
}

/// The process-wide minimum level.
pub fn threshold() -> LevelFilter {
    GLOBAL.threshold()
}

/// Redirects process-wide log output to `stream`.
pub fn set_sink(stream: impl Stream + Send + 'static) {
    GLOBAL.set_sink(stream);
}

/// Redirects process-wide log output to an existing shared sink.
pub fn set_shared_sink(sink: Sink) {
    GLOBAL.set_shared_sink(sink);
}

/// The standing `DEBUG` logger.
pub fn debug() -> Logger<'static> {
    GLOBAL.logger(Level::Debug)
}

/// The standing `WARN` logger.
pub fn warn() -> Logger<'static> {
    GLOBAL.logger(Level::Warn)
}

/// The standing `ERROR` logger.
pub fn error() -> Logger<'static> {
    GLOBAL.logger(Level::Error)
}

/// The standing `INFO` logger.
pub fn info() -> Logger<'static> {
    GLOBAL.logger(Level::Info)
}
