//! Border glyph sets.

use std::str::FromStr;

/// Line style for box borders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoxStyle {
    #[default]
    Single,
    Double,
}

impl BoxStyle {
    pub fn glyphs(self) -> &'static BorderGlyphs {
        match self {
            Self::Single => &SINGLE,
            Self::Double => &DOUBLE,
        }
    }
}

impl FromStr for BoxStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "double" => Ok(Self::Double),
            _ => Err(format!("unknown box style `{s}` (expected single or double)")),
        }
    }
}

/// Corner, edge and junction characters for one border style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    pub tee_left: char,
    pub tee_right: char,
    pub tee_down: char,
    pub tee_up: char,
    pub cross: char,
}

pub const SINGLE: BorderGlyphs = BorderGlyphs {
    top_left: '┌',
    top_right: '┐',
    bottom_left: '└',
    bottom_right: '┘',
    horizontal: '─',
    vertical: '│',
    tee_left: '├',
    tee_right: '┤',
    tee_down: '┬',
    tee_up: '┴',
    cross: '┼',
};

pub const DOUBLE: BorderGlyphs = BorderGlyphs {
    top_left: '╔',
    top_right: '╗',
    bottom_left: '╚',
    bottom_right: '╝',
    horizontal: '═',
    vertical: '║',
    tee_left: '╠',
    tee_right: '╣',
    tee_down: '╦',
    tee_up: '╩',
    cross: '╬',
};
