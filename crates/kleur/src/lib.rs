//! # Kleur - ANSI decoration for terminal streams
//!
//! `kleur` writes ANSI style and color escape sequences to output streams, but
//! only when the stream can show them.
//!
//! ## Core Concepts
//!
//! - [`Style`], [`Fg`], [`Bg`]: fixed palettes, each value carrying one SGR code
//! - [`Attribute`]: any one of the three, the unit the decorator writes
//! - [`ColorMode`]: `Off`, `Auto` (default) or `Force`
//! - [`Colorizer`]: a mode plus a [`TerminalProbe`], deciding per stream
//! - [`Stream`]: an [`std::io::Write`] that knows whether it is stdout, stderr or neither
//!
//! ## Quick Start
//!
//! ```rust
//! use kleur::{Colorizer, ColorMode, Fg, Style};
//! use std::io::Write;
//!
//! let colorizer = Colorizer::new(ColorMode::Force);
//! let mut out = Vec::new();
//! colorizer.decorate(&mut out, Style::Bold)?;
//! colorizer.decorate(&mut out, Fg::Blue)?;
//! write!(out, "Hello World")?;
//! colorizer.decorate(&mut out, Style::Reset)?;
//!
//! assert_eq!(out, b"\x1b[1m\x1b[34mHello World\x1b[0m");
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! ## Auto Detection
//!
//! In [`ColorMode::Auto`] a stream is colorized only when both hold:
//!
//! - `TERM` contains one of the names in [`detect::TERM_ALLOW_LIST`]
//! - the stream is stdout or stderr, and that stream is a terminal
//!
//! In-memory buffers and files are never colorized in `Auto` mode. Detection
//! results are computed once per process.
//!
//! ## Global Colorizer
//!
//! Callers that do not want to pass a [`Colorizer`] around can use the
//! process-wide one through [`set_mode`] and [`decorate`]. Its initial mode is
//! read from `KLEUR_COLOR` (`off`, `auto`, `force`), defaulting to `Auto`.
//!
//! ```rust,no_run
//! use kleur::{ColorMode, Fg};
//!
//! kleur::set_mode(ColorMode::Force);
//! kleur::decorate(&mut std::io::stdout(), Fg::Green)?;
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod attr;
mod colorizer;
pub mod detect;
pub mod env;
mod error;
mod mode;
mod stream;

use std::io;

use once_cell::sync::Lazy;

pub use attr::{Attribute, Bg, Fg, Style};
pub use colorizer::Colorizer;
pub use detect::{MockProbe, SystemProbe, TerminalProbe};
pub use env::{EnvReader, MockEnv, RealEnv};
pub use error::ParseModeError;
pub use mode::{ColorMode, ModeSwitch};
pub use stream::{Plain, SharedBuffer, Stream, StreamKind};

static GLOBAL: Lazy<Colorizer> = Lazy::new(|| Colorizer::new(initial_mode(&RealEnv)));

// An unparseable KLEUR_COLOR falls back to the default.
fn initial_mode(env: &dyn EnvReader) -> ColorMode {
    ColorMode::from_env(env)
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// The process-wide colorizer.
pub fn global() -> &'static Colorizer {
    &GLOBAL
}

/// Sets the process-wide color mode.
pub fn set_mode(mode: ColorMode) {
    GLOBAL.set_mode(mode);
}

/// The process-wide color mode.
pub fn mode() -> ColorMode {
    GLOBAL.mode()
}

/// Whether the process-wide colorizer would colorize a stream of this kind.
pub fn should_colorize(kind: StreamKind) -> bool {
    GLOBAL.should_colorize(kind)
}

/// Decorates `stream` using the process-wide colorizer.
///
/// See [`Colorizer::decorate`].
pub fn decorate<'w, W>(stream: &'w mut W, attr: impl Into<Attribute>) -> io::Result<&'w mut W>
where
    W: Stream + ?Sized,
{
    GLOBAL.decorate(stream, attr)
}
