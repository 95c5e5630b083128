//! Stream decoration.
//!
//! A [`Colorizer`] owns a [`ColorMode`] and a [`TerminalProbe`]. Before every
//! write it decides whether the target stream should receive escape sequences,
//! then either writes `ESC [ <code> m` or nothing at all.
//!
//! ```rust
//! use kleur::{Colorizer, ColorMode, Fg, Style};
//!
//! let colorizer = Colorizer::new(ColorMode::Force);
//! let mut out = Vec::new();
//! colorizer
//!     .decorate(&mut out, Style::Bold)?
//!     .extend_from_slice(b"hi");
//! colorizer.decorate(&mut out, Fg::Reset)?;
//! assert_eq!(out, b"\x1b[1mhi\x1b[39m");
//! # Ok::<(), std::io::Error>(())
//! ```

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use crate::detect::{SystemProbe, TerminalProbe};
use crate::mode::{ColorMode, ModeSwitch};
use crate::stream::{Stream, StreamKind};
use crate::Attribute;

/// Decides when to colorize and writes escape sequences.
///
/// The mode may be changed at any time through a shared reference, so one
/// colorizer can be shared between threads.
pub struct Colorizer {
    mode: ModeSwitch,
    probe: Arc<dyn TerminalProbe>,
}

impl Colorizer {
    /// Creates a colorizer that detects terminals from the real process.
    pub fn new(mode: ColorMode) -> Self {
        Self::with_probe(mode, SystemProbe)
    }

    /// Creates a colorizer with a custom probe.
    ///
    /// This is primarily used for testing to simulate terminals.
    pub fn with_probe(mode: ColorMode, probe: impl TerminalProbe + 'static) -> Self {
        Self {
            mode: ModeSwitch::new(mode),
            probe: Arc::new(probe),
        }
    }

    /// The current mode.
    pub fn mode(&self) -> ColorMode {
        self.mode.get()
    }

    /// Replaces the current mode.
    pub fn set_mode(&self, mode: ColorMode) {
        self.mode.set(mode);
    }

    /// Whether a write to a stream of this kind should be colorized right now.
    pub fn should_colorize(&self, kind: StreamKind) -> bool {
        match self.mode() {
            ColorMode::Off => false,
            ColorMode::Force => true,
            ColorMode::Auto => self.probe.supports_color() && self.probe.is_terminal(kind),
        }
    }

    /// The escape sequence to emit for `attr` on a stream of this kind, if any.
    pub fn sequence(&self, kind: StreamKind, attr: impl Into<Attribute>) -> Option<Attribute> {
        self.should_colorize(kind).then(|| attr.into())
    }

    /// Writes the escape sequence for `attr` to `stream` when it should be colorized.
    ///
    /// Nothing else is written and the stream is not flushed. The stream is
    /// returned so further writes can follow.
    pub fn decorate<'w, W>(
        &self,
        stream: &'w mut W,
        attr: impl Into<Attribute>,
    ) -> io::Result<&'w mut W>
    where
        W: Stream + ?Sized,
    {
        if let Some(seq) = self.sequence(stream.kind(), attr) {
            write!(stream, "{seq}")?;
        }
        Ok(stream)
    }

    /// Like [`decorate`](Self::decorate), for several attributes in order.
    pub fn decorate_all<'w, W, I>(&self, stream: &'w mut W, attrs: I) -> io::Result<&'w mut W>
    where
        W: Stream + ?Sized,
        I: IntoIterator,
        I::Item: Into<Attribute>,
    {
        if self.should_colorize(stream.kind()) {
            for attr in attrs {
                write!(stream, "{}", attr.into())?;
            }
        }
        Ok(stream)
    }
}

impl Default for Colorizer {
    fn default() -> Self {
        Self::new(ColorMode::default())
    }
}

impl fmt::Debug for Colorizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Colorizer")
            .field("mode", &self.mode())
            .field("probe", &self.probe)
            .finish()
    }
}
