//! Style vocabulary and ANSI escape composition.
//!
//! Callers describe styling with closed enums (`Color`, `Attribute`) and this
//! module resolves them to SGR escape strings. Every enumerator has exactly
//! one encoding; the reset sequence is the fallback, so nothing here can fail.

pub mod settings;

use std::fmt;
use std::str::FromStr;

/// SGR reset sequence appended after every composed run.
pub const RESET: &str = "\x1b[0m";

/// Foreground/background palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
    Red,
    Green,
    Blue,
    Cyan,
    Magenta,
    Yellow,
    LightGreen,
    Pink,
    /// Terminal default; resolves to the reset sequence.
    #[default]
    Default,
}

impl Color {
    /// Foreground escape sequence.
    pub fn foreground(self) -> &'static str {
        match self {
            Self::White => "\x1b[37m",
            Self::Black => "\x1b[30m",
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Blue => "\x1b[34m",
            Self::Cyan => "\x1b[36m",
            Self::Magenta => "\x1b[35m",
            Self::Yellow => "\x1b[33m",
            Self::LightGreen => "\x1b[92m",
            Self::Pink => "\x1b[95m",
            Self::Default => RESET,
        }
    }

    /// Background escape sequence.
    pub fn background(self) -> &'static str {
        match self {
            Self::White => "\x1b[47m",
            Self::Black => "\x1b[40m",
            Self::Red => "\x1b[41m",
            Self::Green => "\x1b[42m",
            Self::Blue => "\x1b[44m",
            Self::Cyan => "\x1b[46m",
            Self::Magenta => "\x1b[45m",
            Self::Yellow => "\x1b[43m",
            Self::LightGreen => "\x1b[102m",
            Self::Pink => "\x1b[105m",
            Self::Default => RESET,
        }
    }

    /// Lowercase display name. `Default` has no name.
    pub fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Cyan => "cyan",
            Self::Magenta => "magenta",
            Self::Yellow => "yellow",
            Self::LightGreen => "light-green",
            Self::Pink => "pink",
            Self::Default => "",
        }
    }

    /// Reverse of [`Color::name`]. Case-insensitive; `_` and `-` are
    /// interchangeable. The empty name does not resolve.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase().replace('_', "-");
        if normalized.is_empty() {
            return None;
        }
        Self::all()
            .iter()
            .copied()
            .find(|color| color.name() == normalized)
    }

    /// Every named color (excludes `Default`).
    pub fn all() -> &'static [Color] {
        &[
            Self::White,
            Self::Black,
            Self::Red,
            Self::Green,
            Self::Blue,
            Self::Cyan,
            Self::Magenta,
            Self::Yellow,
            Self::LightGreen,
            Self::Pink,
        ]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("default"),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("default") || trimmed.eq_ignore_ascii_case("reset") {
            return Ok(Self::Default);
        }
        Self::from_name(trimmed).ok_or_else(|| {
            let known = Self::all()
                .iter()
                .map(|c| c.name())
                .collect::<Vec<_>>()
                .join(", ");
            format!("unknown color `{s}` (expected one of: {known}, default)")
        })
    }
}

/// Text attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Bold,
    Underline,
    Italic,
    Blink,
    Reverse,
    Reset,
}

impl Attribute {
    /// Escape sequence for this attribute.
    pub fn code(self) -> &'static str {
        match self {
            Self::Bold => "\x1b[1m",
            Self::Underline => "\x1b[4m",
            Self::Italic => "\x1b[3m",
            Self::Blink => "\x1b[5m",
            Self::Reverse => "\x1b[7m",
            Self::Reset => RESET,
        }
    }
}

impl FromStr for Attribute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bold" => Ok(Self::Bold),
            "underline" => Ok(Self::Underline),
            "italic" => Ok(Self::Italic),
            "blink" => Ok(Self::Blink),
            "reverse" => Ok(Self::Reverse),
            "reset" => Ok(Self::Reset),
            _ => Err(format!(
                "unknown attribute `{s}` (expected bold, underline, italic, blink, reverse or reset)"
            )),
        }
    }
}

pub fn foreground(color: Color) -> &'static str {
    color.foreground()
}

pub fn background(color: Color) -> &'static str {
    color.background()
}

pub fn attribute(attr: Attribute) -> &'static str {
    attr.code()
}

pub fn color_name(color: Color) -> &'static str {
    color.name()
}

/// Wrap `text` in escapes: attributes in the order given, then foreground,
/// then background, then the text, then a reset.
pub fn compose(text: &str, fg: Option<Color>, bg: Option<Color>, attrs: &[Attribute]) -> String {
    let mut out = String::with_capacity(text.len() + 16 + attrs.len() * 4);
    for attr in attrs {
        out.push_str(attr.code());
    }
    if let Some(fg) = fg {
        out.push_str(fg.foreground());
    }
    if let Some(bg) = bg {
        out.push_str(bg.background());
    }
    out.push_str(text);
    out.push_str(RESET);
    out
}

/// Text payload plus the style tokens to apply to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    pub text: String,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub attrs: Vec<Attribute>,
}

impl StyledText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn attr(mut self, attr: Attribute) -> Self {
        self.attrs.push(attr);
        self
    }

    pub fn bold(self) -> Self {
        self.attr(Attribute::Bold)
    }

    /// Escaped form of this run, always terminated by a reset.
    pub fn render(&self) -> String {
        compose(&self.text, self.fg, self.bg, &self.attrs)
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
