//! Writers that know which standard stream they are.
//!
//! Terminal detection needs to know whether a writer is the process's stdout,
//! its stderr, or something else. [`Stream`] adds that answer to
//! [`io::Write`]. Only `Stdout` and `Stderr` are ever probed for a terminal;
//! every other writer (files, buffers, sockets) counts as a non-terminal.
//!
//! Arbitrary writers can be used through the [`Plain`] adapter.

use std::fs::File;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Which standard stream a writer is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamKind {
    /// The process's standard output.
    Stdout,
    /// The process's standard error.
    Stderr,
    /// Anything else.
    Other,
}

/// An [`io::Write`] that can report its [`StreamKind`].
pub trait Stream: Write {
    /// The standard stream behind this writer.
    fn kind(&self) -> StreamKind;
}

impl Stream for io::Stdout {
    fn kind(&self) -> StreamKind {
        StreamKind::Stdout
    }
}

impl Stream for io::StdoutLock<'_> {
    fn kind(&self) -> StreamKind {
        StreamKind::Stdout
    }
}

impl Stream for io::Stderr {
    fn kind(&self) -> StreamKind {
        StreamKind::Stderr
    }
}

impl Stream for io::StderrLock<'_> {
    fn kind(&self) -> StreamKind {
        StreamKind::Stderr
    }
}

impl Stream for Vec<u8> {
    fn kind(&self) -> StreamKind {
        StreamKind::Other
    }
}

impl<T> Stream for io::Cursor<T>
where
    io::Cursor<T>: Write,
{
    fn kind(&self) -> StreamKind {
        StreamKind::Other
    }
}

impl Stream for File {
    fn kind(&self) -> StreamKind {
        StreamKind::Other
    }
}

impl Stream for io::Sink {
    fn kind(&self) -> StreamKind {
        StreamKind::Other
    }
}

impl<W: Stream + ?Sized> Stream for &mut W {
    fn kind(&self) -> StreamKind {
        (**self).kind()
    }
}

impl<W: Stream + ?Sized> Stream for Box<W> {
    fn kind(&self) -> StreamKind {
        (**self).kind()
    }
}

/// Adapter that lets any writer be decorated. It is never treated as a terminal.
#[derive(Debug, Default, Clone)]
pub struct Plain<W>(pub W);

impl<W> Plain<W> {
    /// Unwraps the inner writer.
    pub fn into_inner(self) -> W {
        self.0
    }
}

impl<W: Write> Write for Plain<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

impl<W: Write> Stream for Plain<W> {
    fn kind(&self) -> StreamKind {
        StreamKind::Other
    }
}

/// A cloneable in-memory stream.
///
/// Clones share the same bytes, so one handle can be given away as a log sink
/// while another reads back what was written.
///
/// ```rust
/// use std::io::Write;
/// use kleur::SharedBuffer;
///
/// let buffer = SharedBuffer::new();
/// let mut writer = buffer.clone();
/// write!(writer, "hello").unwrap();
/// assert_eq!(buffer.contents(), "hello");
/// ```
#[derive(Debug, Default, Clone)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Everything written so far, as raw bytes.
    pub fn bytes(&self) -> Vec<u8> {
        self.lock().clone()
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Discards everything written so far.
    pub fn clear(&self) {
        self.lock().clear();
    }

    // Bytes stay valid even if a writer panicked mid-write.
    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.bytes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Stream for SharedBuffer {
    fn kind(&self) -> StreamKind {
        StreamKind::Other
    }
}
