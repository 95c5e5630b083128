//! Integration tests for stream decoration across color modes.
//!
//! Terminals are simulated with `MockProbe` so the results do not depend on
//! how the test binary's stdout is attached.

use std::io::{Read, Seek, SeekFrom, Write};

use kleur::{
    Attribute, Bg, ColorMode, Colorizer, Fg, MockEnv, MockProbe, Plain, SharedBuffer, Stream,
    StreamKind, Style,
};
use proptest::prelude::*;

/// A writer that claims to be stdout but records into memory.
struct FakeStdout(Vec<u8>);

impl Write for FakeStdout {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Stream for FakeStdout {
    fn kind(&self) -> StreamKind {
        StreamKind::Stdout
    }
}

fn decorated(colorizer: &Colorizer, attr: Attribute) -> Vec<u8> {
    let mut out = Vec::new();
    colorizer.decorate(&mut out, attr).unwrap();
    out
}

// ============================================================================
// Force / Off
// ============================================================================

#[test]
fn force_emits_exact_sequence_for_every_attribute() {
    let colorizer = Colorizer::with_probe(ColorMode::Force, MockProbe::new());
    for attr in Attribute::all() {
        let expected = format!("\x1b[{}m", attr.code());
        assert_eq!(decorated(&colorizer, attr), expected.into_bytes(), "{attr:?}");
    }
}

#[test]
fn off_emits_nothing_for_every_attribute() {
    let colorizer = Colorizer::with_probe(ColorMode::Off, MockProbe::terminal());
    for attr in Attribute::all() {
        assert!(decorated(&colorizer, attr).is_empty(), "{attr:?}");

        let mut stdout = FakeStdout(Vec::new());
        colorizer.decorate(&mut stdout, attr).unwrap();
        assert!(stdout.0.is_empty(), "{attr:?}");
    }
}

// ============================================================================
// Auto
// ============================================================================

#[cfg(unix)]
#[test]
fn auto_without_term_emits_nothing() {
    let probe = MockProbe::terminal().with_env(&MockEnv::new());
    let colorizer = Colorizer::with_probe(ColorMode::Auto, probe);

    let mut stdout = FakeStdout(Vec::new());
    colorizer.decorate(&mut stdout, Fg::Red).unwrap();
    assert!(stdout.0.is_empty());
    assert!(decorated(&colorizer, Style::Bold.into()).is_empty());
}

#[cfg(unix)]
#[test]
fn auto_with_recognized_term_colors_terminals_only() {
    let env = MockEnv::new().with_var("TERM", "xterm-256color");
    let probe = MockProbe::new()
        .with_env(&env)
        .with_terminal(StreamKind::Stdout);
    let colorizer = Colorizer::with_probe(ColorMode::Auto, probe);

    let mut stdout = FakeStdout(Vec::new());
    colorizer.decorate(&mut stdout, Bg::Green).unwrap();
    assert_eq!(stdout.0, b"\x1b[42m");

    assert!(decorated(&colorizer, Bg::Green.into()).is_empty());

    let buffer = SharedBuffer::new();
    colorizer.decorate(&mut buffer.clone(), Fg::Gray).unwrap();
    assert!(buffer.is_empty());
}

#[cfg(unix)]
#[test]
fn auto_with_unrecognized_term_emits_nothing() {
    let env = MockEnv::new().with_var("TERM", "dumb");
    let probe = MockProbe::terminal().with_env(&env);
    let colorizer = Colorizer::with_probe(ColorMode::Auto, probe);

    let mut stdout = FakeStdout(Vec::new());
    colorizer.decorate(&mut stdout, Style::Italic).unwrap();
    assert!(stdout.0.is_empty());
}

#[test]
fn auto_never_colors_files() {
    let colorizer = Colorizer::with_probe(ColorMode::Auto, MockProbe::terminal());
    let mut file = tempfile::tempfile().unwrap();

    colorizer.decorate(&mut file, Fg::Magenta).unwrap();
    write!(file, "plain").unwrap();

    file.seek(SeekFrom::Start(0)).unwrap();
    let mut contents = String::new();
    file.read_to_string(&mut contents).unwrap();
    assert_eq!(contents, "plain");
}

// ============================================================================
// Chaining and idempotence
// ============================================================================

#[test]
fn decorate_chains_like_the_demo() {
    let colorizer = Colorizer::with_probe(ColorMode::Force, MockProbe::new());
    let mut out = Plain(Vec::new());

    colorizer.decorate(&mut out, Style::Bold).unwrap();
    colorizer.decorate(&mut out, Fg::Blue).unwrap();
    writeln!(
        colorizer.decorate(&mut out, Style::Reset).unwrap(),
        "Hello World"
    )
    .unwrap();

    assert_eq!(out.into_inner(), b"\x1b[1m\x1b[34m\x1b[0mHello World\n");
}

#[test]
fn setting_same_mode_twice_is_idempotent() {
    let once = Colorizer::with_probe(ColorMode::Auto, MockProbe::new());
    once.set_mode(ColorMode::Force);

    let twice = Colorizer::with_probe(ColorMode::Auto, MockProbe::new());
    twice.set_mode(ColorMode::Force);
    twice.set_mode(ColorMode::Force);

    for attr in Attribute::all() {
        assert_eq!(decorated(&once, attr), decorated(&twice, attr));
    }
}

// ============================================================================
// Properties
// ============================================================================

fn any_attribute() -> impl Strategy<Value = Attribute> {
    let all: Vec<Attribute> = Attribute::all().collect();
    proptest::sample::select(all)
}

fn any_mode() -> impl Strategy<Value = ColorMode> {
    prop_oneof![
        Just(ColorMode::Off),
        Just(ColorMode::Auto),
        Just(ColorMode::Force),
    ]
}

proptest! {
    #[test]
    fn decoration_is_all_or_nothing(attr in any_attribute(), mode in any_mode(), tty in any::<bool>()) {
        let probe = if tty { MockProbe::terminal() } else { MockProbe::piped() };
        let colorizer = Colorizer::with_probe(mode, probe);

        let mut stdout = FakeStdout(Vec::new());
        colorizer.decorate(&mut stdout, attr).unwrap();

        let expected = match mode {
            ColorMode::Off => String::new(),
            ColorMode::Force => attr.to_string(),
            ColorMode::Auto if tty => attr.to_string(),
            ColorMode::Auto => String::new(),
        };
        prop_assert_eq!(String::from_utf8(stdout.0).unwrap(), expected);
    }

    #[test]
    fn surrounding_text_is_untouched(text in "[^\x1b]{0,40}", attr in any_attribute()) {
        let colorizer = Colorizer::with_probe(ColorMode::Force, MockProbe::new());
        let mut out = Vec::new();
        write!(colorizer.decorate(&mut out, attr).unwrap(), "{}", text).unwrap();

        let rendered = String::from_utf8(out).unwrap();
        prop_assert_eq!(rendered, format!("{attr}{text}"));
    }
}
