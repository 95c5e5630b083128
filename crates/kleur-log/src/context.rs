//! Shared logging configuration: threshold, sink and colorizer.

use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use kleur::{Attribute, Colorizer, Stream, Style};

use crate::level::{Level, LevelFilter};
use crate::logger::Logger;

/// A destination for log lines, shareable between contexts and threads.
pub type Sink = Arc<Mutex<dyn Stream + Send>>;

/// Wraps a stream so it can be used as a [`Sink`].
pub fn sink(stream: impl Stream + Send + 'static) -> Sink {
    Arc::new(Mutex::new(stream))
}

enum Colors {
    Global,
    Owned(Arc<Colorizer>),
}

/// The state every [`Logger`] reads when it writes a line.
///
/// Threshold, sink and colorizer can all be replaced through a shared
/// reference. Defaults are a `Debug` threshold, stderr as the sink and a
/// colorizer in `Auto` mode.
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
/// context.logger(Level::Warn).log("disk almost full")?;
/// assert_eq!(buffer.contents(), "[WARN ] disk almost full\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct LogContext {
    threshold: AtomicU8,
    sink: RwLock<Sink>,
    colors: Colors,
}

impl LogContext {
    /// Creates a context with its own `Auto` colorizer.
    pub fn new() -> Self {
        Self::with_colorizer(Arc::new(Colorizer::default()))
    }

    /// Creates a context that colors lines with `colorizer`.
    pub fn with_colorizer(colorizer: Arc<Colorizer>) -> Self {
        Self::build(Colors::Owned(colorizer))
    }

    /// Creates a context that follows the process-wide colorizer from `kleur`.
    pub fn with_global_colorizer() -> Self {
        Self::build(Colors::Global)
    }

    fn build(colors: Colors) -> Self {
        Self {
            threshold: AtomicU8::new(LevelFilter::default() as u8),
            sink: RwLock::new(sink(io::stderr())),
            colors,
        }
    }

    /// Replaces the sink, builder style.
    pub fn with_sink(self, stream: impl Stream + Send + 'static) -> Self {
        self.set_sink(stream);
        self
    }

    /// Replaces the threshold, builder style.
    pub fn with_threshold(self, threshold: LevelFilter) -> Self {
        self.set_threshold(threshold);
        self
    }

    /// The current minimum level.
    pub fn threshold(&self) -> LevelFilter {
        LevelFilter::from_u8(self.threshold.load(Ordering::Relaxed))
    }

    /// Sets the minimum level that will be emitted.
    pub fn set_threshold(&self, threshold: LevelFilter) {
        self.threshold.store(threshold as u8, Ordering::Relaxed);
    }

    /// Redirects all future lines to `stream`.
    pub fn set_sink(&self, stream: impl Stream + Send + 'static) {
        self.set_shared_sink(sink(stream));
    }

    /// Redirects all future lines to an existing shared sink.
    pub fn set_shared_sink(&self, sink: Sink) {
        *self.sink.write().unwrap_or_else(PoisonError::into_inner) = sink;
    }

    /// The current sink.
    pub fn sink(&self) -> Sink {
        let current = self.sink.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*current)
    }

    /// The colorizer deciding whether lines carry escape sequences.
    pub fn colorizer(&self) -> &Colorizer {
        match &self.colors {
            Colors::Global => kleur::global(),
            Colors::Owned(colorizer) => colorizer,
        }
    }

    /// A logger bound to `level` that writes through this context.
    pub fn logger(&self, level: Level) -> Logger<'_> {
        Logger::new(level, self)
    }

    /// Whether a message at `level` currently passes the threshold.
    pub fn enabled(&self, level: Level) -> bool {
        level.passes(self.threshold())
    }

    /// Writes one formatted line for `level`, without checking the threshold.
    ///
    /// The message is rendered before the sink is locked, so a `Display` impl
    /// may itself log through this context. The line is then written with a
    /// single `write_all` while the sink is locked, and the sink is flushed.
    pub fn emit(&self, level: Level, message: &dyn fmt::Display) -> io::Result<()> {
        let text = message.to_string();
        let sink = self.sink();
        let mut stream = sink.lock().unwrap_or_else(PoisonError::into_inner);
        let colorize = self.colorizer().should_colorize(stream.kind());
        let line = format_line(level, &text, colorize);
        stream.write_all(line.as_bytes())?;
        stream.flush()
    }

    /// Flushes the current sink.
    pub fn flush(&self) -> io::Result<()> {
        let sink = self.sink();
        let mut stream = sink.lock().unwrap_or_else(PoisonError::into_inner);
        stream.flush()
    }
}

impl Default for LogContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let colors = match &self.colors {
            Colors::Global => "global",
            Colors::Owned(_) => "owned",
        };
        f.debug_struct("LogContext")
            .field("threshold", &self.threshold())
            .field("colorizer", &colors)
            .finish_non_exhaustive()
    }
}

/// Renders `<RESET><COLOR><HEADER><MESSAGE><RESET>\n`, or `<HEADER><MESSAGE>\n`
/// when `colorize` is false.
pub fn format_line(level: Level, message: &dyn fmt::Display, colorize: bool) -> String {
    let header = level.header();
    if colorize {
        let reset = Attribute::from(Style::Reset);
        let color = Attribute::from(level.color());
        format!("{reset}{color}{header}{message}{reset}\n")
    } else {
        format!("{header}{message}\n")
    }
}
