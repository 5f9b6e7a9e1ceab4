//! Escape-aware text measurement and padding.
//!
//! Width here means terminal cells as this crate counts them: one cell per
//! code point outside an escape sequence. An escape starts at ESC and runs
//! through the next `m`. Wide glyphs are not double-counted.

/// Horizontal alignment inside a padded cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl std::str::FromStr for Align {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Self::Left),
            "center" | "centre" | "c" => Ok(Self::Center),
            "right" | "r" => Ok(Self::Right),
            _ => Err(format!("unknown alignment `{s}` (expected left, center or right)")),
        }
    }
}

const ESC: char = '\x1b';
const ESC_END: char = 'm';

/// Walk `text`, calling `visible` for each char outside an escape sequence.
fn scan_visible(text: &str, mut visible: impl FnMut(char)) {
    let mut in_escape = false;
    for ch in text.chars() {
        if in_escape {
            if ch == ESC_END {
                in_escape = false;
            }
            continue;
        }
        if ch == ESC {
            in_escape = true;
            continue;
        }
        visible(ch);
    }
}

/// Count visible cells, ignoring escape sequences.
///
/// An unterminated escape swallows the rest of the string.
pub fn display_width(text: &str) -> usize {
    let mut width = 0usize;
    scan_visible(text, |_| width += 1);
    width
}

/// Remove escape sequences, keeping only visible characters.
pub fn strip_escapes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    scan_visible(text, |ch| out.push(ch));
    out
}

/// Repeat `glyph` `count` times; negative counts produce nothing.
pub fn repeat_clamped(glyph: char, count: isize) -> String {
    if count <= 0 {
        return String::new();
    }
    std::iter::repeat(glyph).take(count as usize).collect()
}

/// Pad `text` with spaces to `width` display cells.
///
/// Centering puts the smaller half on the left. Text already wider than
/// `width` is returned unchanged.
pub fn pad_to_width(text: &str, width: usize, align: Align) -> String {
    let pad = width.saturating_sub(display_width(text));
    let (left, right) = match align {
        Align::Left => (0, pad),
        Align::Right => (pad, 0),
        Align::Center => (pad / 2, pad - pad / 2),
    };
    let mut out = String::with_capacity(text.len() + pad);
    out.push_str(&" ".repeat(left));
    out.push_str(text);
    out.push_str(&" ".repeat(right));
    out
}

/// Signed difference `a - b` for fill arithmetic that may go negative.
pub(crate) fn signed_diff(a: usize, b: usize) -> isize {
    a as isize - b as isize
}
