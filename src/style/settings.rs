//! Centralized, hardcoded presentation settings.
//!
//! This is the single place to tweak status glyphs, rule characters,
//! cursor-control sequences and default widths.

use super::Color;

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

pub const TITLE_PADDING: usize = 12;
pub const DIVIDER_WIDTH: usize = 50;
pub const BANNER_WIDTH: usize = 80;

pub const RULE_TITLE: char = '=';
pub const RULE_DIVIDER: char = '─';

// ---------------------------------------------------------------------------
// Status lines
// ---------------------------------------------------------------------------

pub const GLYPH_SUCCESS: &str = "✔";
pub const GLYPH_WARNING: &str = "⚠";
pub const GLYPH_ERROR: &str = "✖";
pub const GLYPH_INFO: &str = "ℹ";

pub const COLOR_SUCCESS: Color = Color::Green;
pub const COLOR_WARNING: Color = Color::Yellow;
pub const COLOR_ERROR: Color = Color::Red;
pub const COLOR_INFO: Color = Color::Cyan;

pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ---------------------------------------------------------------------------
// Cursor control
// ---------------------------------------------------------------------------

pub const CLEAR_SCREEN: &str = "\x1b[2J";
pub const CURSOR_HOME: &str = "\x1b[H";
pub const CURSOR_UP: &str = "\x1b[A";
pub const CLEAR_LINE: &str = "\x1b[2K";
