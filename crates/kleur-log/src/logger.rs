//! Loggers bound to a single level.

use std::fmt;
use std::io;

use crate::context::LogContext;
use crate::level::Level;

/// Writes messages at one fixed [`Level`] through a [`LogContext`].
///
/// Every call to [`log`](Self::log) is an independent line: it checks the
/// threshold again and writes its own header, message, reset and newline.
/// Chained calls therefore produce one line per fragment.
///
/// ```rust
/// use kleur::{Colorizer, ColorMode, SharedBuffer};
/// use kleur_log::{Level, LogContext};
/// use std::sync::Arc;
///
/// let buffer = SharedBuffer::new();
/// let context = LogContext::with_colorizer(Arc::new(Colorizer::new(ColorMode::Off)))
///     .with_sink(buffer.clone());
///
/// context.logger(Level::Error).log("This is an error")?.log(" with extra output")?;
/// assert_eq!(
///     buffer.contents(),
///     "[ERROR] This is an error\n[ERROR]  with extra output\n"
/// );
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Logger<'a> {
    level: Level,
    context: &'a LogContext,
}

impl<'a> Logger<'a> {
    /// Binds a logger to `level` and `context`.
    pub fn new(level: Level, context: &'a LogContext) -> Self {
        Self { level, context }
    }

    /// The level this logger writes at.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Whether this logger's messages currently pass the threshold.
    pub fn is_enabled(&self) -> bool {
        self.context.enabled(self.level)
    }

    /// Writes `message` as one line if the level passes the threshold.
    ///
    /// Returns the logger so further fragments can be logged.
    pub fn log(&self, message: impl fmt::Display) -> io::Result<&Self> {
        if self.is_enabled() {
            self.context.emit(self.level, &message)?;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LevelFilter;
    use kleur::{ColorMode, Colorizer, MockProbe, SharedBuffer};
    use std::sync::Arc;

    fn context(mode: ColorMode, buffer: &SharedBuffer) -> LogContext {
        LogContext::with_colorizer(Arc::new(Colorizer::with_probe(mode, MockProbe::new())))
            .with_sink(buffer.clone())
    }

    #[test]
    fn test_logger_reports_level() {
        let context = LogContext::new();
        assert_eq!(context.logger(Level::Warn).level(), Level::Warn);
    }

    #[test]
    fn test_suppressed_logger_writes_nothing() {
        let buffer = SharedBuffer::new();
        let context = context(ColorMode::Force, &buffer).with_threshold(LevelFilter::Info);

        let logger = context.logger(Level::Error);
        assert!(!logger.is_enabled());
        logger.log("hidden").unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_each_append_is_its_own_line() {
        let buffer = SharedBuffer::new();
        let context = context(ColorMode::Force, &buffer);

        context.logger(Level::Info).log("a").unwrap().log("b").unwrap();
        assert_eq!(
            buffer.contents(),
            "\x1b[0m\x1b[32m[INFO ] a\x1b[0m\n\x1b[0m\x1b[32m[INFO ] b\x1b[0m\n"
        );
    }

    #[test]
    fn test_each_append_rechecks_threshold() {
        let buffer = SharedBuffer::new();
        let context = context(ColorMode::Off, &buffer);
        let logger = context.logger(Level::Warn);

        logger.log("first").unwrap();
        context.set_threshold(LevelFilter::None);
        logger.log("second").unwrap();

        assert_eq!(buffer.contents(), "[WARN ] first\n");
    }

    #[test]
    fn test_accepts_any_display() {
        let buffer = SharedBuffer::new();
        let context = context(ColorMode::Off, &buffer);

        context
            .logger(Level::Debug)
            .log(3.5)
            .unwrap()
            .log(format_args!("{}-{}", 1, 2))
            .unwrap();
        assert_eq!(buffer.contents(), "[DEBUG] 3.5\n[DEBUG] 1-2\n");
    }
}
