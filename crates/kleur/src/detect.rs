//! Terminal and color capability detection.
//!
//! Two questions decide whether `Auto` mode colorizes a stream:
//!
//! 1. Does `TERM` name a color-capable terminal? The value must contain one of
//!    [`TERM_ALLOW_LIST`] as a case-sensitive substring.
//! 2. Is the stream a standard stream attached to a terminal?
//!
//! Both are answered by a [`TerminalProbe`]. [`SystemProbe`] asks the real
//! process and memoizes every answer for the lifetime of the process, so a
//! stream redirected after the first query is not noticed. [`MockProbe`]
//! returns fixed answers for tests.

use std::fmt;

use console::Term;
use once_cell::sync::Lazy;

use crate::env::{EnvReader, RealEnv, TERM_VAR};
use crate::stream::StreamKind;

#[cfg(not(any(unix, windows)))]
compile_error!("kleur only knows how to detect terminals on unix and windows targets");

/// Terminal type names that indicate escape sequence support.
pub const TERM_ALLOW_LIST: [&str; 15] = [
    "ansi",
    "color",
    "console",
    "cygwin",
    "gnome",
    "konsole",
    "kterm",
    "linux",
    "msys",
    "putty",
    "rxvt",
    "screen",
    "vt100",
    "xterm",
    "alacritty",
];

/// Returns `true` if `term` contains any name from [`TERM_ALLOW_LIST`].
///
/// ```rust
/// use kleur::detect::term_supports_color;
///
/// assert!(term_supports_color("xterm-256color"));
/// assert!(term_supports_color("tmux-screen"));
/// assert!(!term_supports_color("dumb"));
/// assert!(!term_supports_color("XTERM"));
/// ```
pub fn term_supports_color(term: &str) -> bool {
    TERM_ALLOW_LIST.iter().any(|name| term.contains(name))
}

/// Evaluates `TERM` from `env` against the allow list.
///
/// Always `false` on Windows, where `TERM` carries no meaning for the console.
pub fn probe_env(env: &dyn EnvReader) -> bool {
    if cfg!(windows) {
        return false;
    }
    env.var(TERM_VAR)
        .is_some_and(|term| term_supports_color(&term))
}

/// Source of answers about the terminal environment.
pub trait TerminalProbe: Send + Sync + fmt::Debug {
    /// Whether the environment names a color-capable terminal type.
    fn supports_color(&self) -> bool;

    /// Whether the given stream is attached to an interactive terminal.
    fn is_terminal(&self, kind: StreamKind) -> bool;
}

static SUPPORTS_COLOR: Lazy<bool> = Lazy::new(|| probe_env(&RealEnv));
static STDOUT_IS_TERM: Lazy<bool> = Lazy::new(|| !cfg!(windows) && Term::stdout().is_term());
static STDERR_IS_TERM: Lazy<bool> = Lazy::new(|| !cfg!(windows) && Term::stderr().is_term());

/// Probe backed by the real process, answering each question at most once.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProbe;

impl TerminalProbe for SystemProbe {
    fn supports_color(&self) -> bool {
        *SUPPORTS_COLOR
    }

    fn is_terminal(&self, kind: StreamKind) -> bool {
        match kind {
            StreamKind::Stdout => *STDOUT_IS_TERM,
            StreamKind::Stderr => *STDERR_IS_TERM,
            StreamKind::Other => false,
        }
    }
}

/// Probe with fixed answers for testing.
///
/// ```rust
/// use kleur::{MockProbe, StreamKind, TerminalProbe};
///
/// let probe = MockProbe::terminal();
/// assert!(probe.supports_color());
/// assert!(probe.is_terminal(StreamKind::Stdout));
/// assert!(!probe.is_terminal(StreamKind::Other));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MockProbe {
    supports_color: bool,
    stdout: bool,
    stderr: bool,
}

impl MockProbe {
    /// No color-capable `TERM` and no terminals.
    pub fn new() -> Self {
        Self::default()
    }

    /// A color-capable terminal on both stdout and stderr.
    pub fn terminal() -> Self {
        Self {
            supports_color: true,
            stdout: true,
            stderr: true,
        }
    }

    /// A color-capable `TERM`, but both standard streams redirected.
    pub fn piped() -> Self {
        Self {
            supports_color: true,
            stdout: false,
            stderr: false,
        }
    }

    /// Answers the `TERM` question from `env` instead of a fixed value.
    pub fn with_env(mut self, env: &dyn EnvReader) -> Self {
        self.supports_color = probe_env(env);
        self
    }

    /// Sets whether `TERM` names a color-capable terminal.
    pub fn with_color_support(mut self, supports_color: bool) -> Self {
        self.supports_color = supports_color;
        self
    }

    /// Marks a standard stream as attached to a terminal. `Other` is ignored.
    pub fn with_terminal(mut self, kind: StreamKind) -> Self {
        match kind {
            StreamKind::Stdout => self.stdout = true,
            StreamKind::Stderr => self.stderr = true,
            StreamKind::Other => {}
        }
        self
    }
}

impl TerminalProbe for MockProbe {
    fn supports_color(&self) -> bool {
        self.supports_color
    }

    fn is_terminal(&self, kind: StreamKind) -> bool {
        match kind {
            StreamKind::Stdout => self.stdout,
            StreamKind::Stderr => self.stderr,
            StreamKind::Other => false,
        }
    }
}
