//! Text attributes and their ANSI parameters.
//!
//! Three closed palettes are available: [`Style`] for text attributes, [`Fg`]
//! for foreground colors and [`Bg`] for background colors. Each enumerator
//! carries exactly one SGR parameter, exposed through `code()`.
//!
//! [`Attribute`] unifies the three kinds. It is the only type the decorator
//! accepts, so anything that is not a style or a color is rejected by the
//! compiler.
//!
//! ```rust
//! use kleur::{Attribute, Fg, Style};
//!
//! let bold: Attribute = Style::Bold.into();
//! assert_eq!(bold.code(), 1);
//! assert_eq!(Attribute::from(Fg::Blue).to_string(), "\x1b[34m");
//! ```

use std::fmt;

/// Text attributes (SGR 0-9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Style {
    Reset = 0,
    Bold = 1,
    Dim = 2,
    Italic = 3,
    Underline = 4,
    Blink = 5,
    RapidBlink = 6,
    Reversed = 7,
    Conceal = 8,
    Crossed = 9,
}

impl Style {
    /// Every style, in parameter order.
    pub const ALL: [Style; 10] = [
        Style::Reset,
        Style::Bold,
        Style::Dim,
        Style::Italic,
        Style::Underline,
        Style::Blink,
        Style::RapidBlink,
        Style::Reversed,
        Style::Conceal,
        Style::Crossed,
    ];

    /// The SGR parameter for this style.
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Foreground colors: the eight standard colors, reset, and the bright variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Fg {
    Black = 30,
    Red = 31,
    Green = 32,
    Yellow = 33,
    Blue = 34,
    Magenta = 35,
    Cyan = 36,
    Gray = 37,
    Reset = 39,

    BrightBlack = 90,
    BrightRed = 91,
    BrightGreen = 92,
    BrightYellow = 93,
    BrightBlue = 94,
    BrightMagenta = 95,
    BrightCyan = 96,
    BrightGray = 97,
}

impl Fg {
    /// Every foreground color, in parameter order.
    pub const ALL: [Fg; 17] = [
        Fg::Black,
        Fg::Red,
        Fg::Green,
        Fg::Yellow,
        Fg::Blue,
        Fg::Magenta,
        Fg::Cyan,
        Fg::Gray,
        Fg::Reset,
        Fg::BrightBlack,
        Fg::BrightRed,
        Fg::BrightGreen,
        Fg::BrightYellow,
        Fg::BrightBlue,
        Fg::BrightMagenta,
        Fg::BrightCyan,
        Fg::BrightGray,
    ];

    /// The SGR parameter for this color.
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Background colors.
///
/// There is no plain magenta background (45); the bright row is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Bg {
    Black = 40,
    Red = 41,
    Green = 42,
    Yellow = 43,
    Blue = 44,
    Cyan = 46,
    Gray = 47,
    Reset = 49,

    BrightBlack = 100,
    BrightRed = 101,
    BrightGreen = 102,
    BrightYellow = 103,
    BrightBlue = 104,
    BrightMagenta = 105,
    BrightCyan = 106,
    BrightGray = 107,
}

impl Bg {
    /// Every background color, in parameter order.
    pub const ALL: [Bg; 16] = [
        Bg::Black,
        Bg::Red,
        Bg::Green,
        Bg::Yellow,
        Bg::Blue,
        Bg::Cyan,
        Bg::Gray,
        Bg::Reset,
        Bg::BrightBlack,
        Bg::BrightRed,
        Bg::BrightGreen,
        Bg::BrightYellow,
        Bg::BrightBlue,
        Bg::BrightMagenta,
        Bg::BrightCyan,
        Bg::BrightGray,
    ];

    /// The SGR parameter for this color.
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Anything the decorator can emit: a style, a foreground or a background.
///
/// `Display` renders the full escape sequence, `ESC [ <code> m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Style(Style),
    Fg(Fg),
    Bg(Bg),
}

impl Attribute {
    /// The SGR parameter carried by the wrapped value.
    pub const fn code(self) -> u8 {
        match self {
            Attribute::Style(s) => s.code(),
            Attribute::Fg(c) => c.code(),
            Attribute::Bg(c) => c.code(),
        }
    }

    /// Iterates over every attribute of all three kinds.
    pub fn all() -> impl Iterator<Item = Attribute> {
        Style::ALL
            .into_iter()
            .map(Attribute::from)
            .chain(Fg::ALL.into_iter().map(Attribute::from))
            .chain(Bg::ALL.into_iter().map(Attribute::from))
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[{}m", self.code())
    }
}

impl From<Style> for Attribute {
    fn from(style: Style) -> Self {
        Attribute::Style(style)
    }
}

impl From<Fg> for Attribute {
    fn from(color: Fg) -> Self {
        Attribute::Fg(color)
    }
}

impl From<Bg> for Attribute {
    fn from(color: Bg) -> Self {
        Attribute::Bg(color)
    }
}
